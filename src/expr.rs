use crate::error::Result;
use crate::stack::Stack;

/// A binary arithmetic operator recognized in a postfix token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Division truncates toward zero, and dividing by zero panics, both
    /// with the host `i64` semantics.
    fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
        }
    }
}

#[derive(Debug)]
enum ExprNode {
    Operand(i64),
    Operation {
        op: Operator,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
}

impl ExprNode {
    fn write_prefix(&self, out: &mut Vec<String>) {
        match self {
            ExprNode::Operand(value) => out.push(value.to_string()),
            ExprNode::Operation { op, left, right } => {
                out.push(op.symbol().to_string());
                left.write_prefix(out);
                right.write_prefix(out);
            }
        }
    }

    fn write_infix(&self, out: &mut String) {
        match self {
            ExprNode::Operand(value) => out.push_str(&value.to_string()),
            ExprNode::Operation { op, left, right } => {
                out.push('(');
                left.write_infix(out);
                out.push(')');
                out.push(' ');
                out.push(op.symbol());
                out.push(' ');
                out.push('(');
                right.write_infix(out);
                out.push(')');
            }
        }
    }

    fn evaluate(&self) -> i64 {
        match self {
            ExprNode::Operand(value) => *value,
            ExprNode::Operation { op, left, right } => {
                op.apply(left.evaluate(), right.evaluate())
            }
        }
    }
}

/// A binary expression tree built from a postfix token stream.
///
/// Parsing drives a [`Stack`] of subtrees: operands push single-node
/// trees, and each operator pops its right then left operand and pushes
/// the combined tree. Whitespace separates tokens; tokens that are neither
/// integers nor one of `+ - * /` are skipped.
///
/// # Examples
///
/// ```
/// use sentinel_list::ExpressionTree;
///
/// let tree = ExpressionTree::from_postfix("1 3 2 + 7 * + 2 /").unwrap();
///
/// assert_eq!(tree.to_prefix(), "/ + 1 * + 3 2 7 2");
/// assert_eq!(tree.to_infix(), "((1) + (((3) + (2)) * (7))) / (2)");
/// assert_eq!(tree.evaluate(), 18);
/// ```
#[derive(Debug)]
pub struct ExpressionTree {
    root: ExprNode,
}

impl ExpressionTree {
    /// Parses a whitespace-separated postfix expression of `i64` operands
    /// and `+ - * /` operators.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] when an operator is missing an operand or the
    /// expression leaves nothing on the stack (an empty input included).
    ///
    /// [`Error::Underflow`]: crate::Error::Underflow
    pub fn from_postfix(input: &str) -> Result<Self> {
        let mut stack: Stack<ExprNode> = Stack::new();
        for token in input.split_whitespace() {
            if let Ok(operand) = token.parse::<i64>() {
                stack.push(ExprNode::Operand(operand));
            } else if let Some(op) = Operator::from_token(token) {
                let right = Box::new(stack.pop()?);
                let left = Box::new(stack.pop()?);
                stack.push(ExprNode::Operation { op, left, right });
            }
            // anything else is skipped
        }
        let root = stack.pop()?;
        Ok(Self { root })
    }

    /// Renders the expression in prefix notation, tokens space-separated.
    pub fn to_prefix(&self) -> String {
        let mut tokens = Vec::new();
        self.root.write_prefix(&mut tokens);
        tokens.join(" ")
    }

    /// Renders the expression in infix notation, fully parenthesized: both
    /// children of every operator are wrapped, bare operands included.
    pub fn to_infix(&self) -> String {
        let mut out = String::new();
        self.root.write_infix(&mut out);
        out
    }

    /// Evaluates the expression by post-order recursion.
    pub fn evaluate(&self) -> i64 {
        self.root.evaluate()
    }
}
