use crate::error::{Error, Result};

/// A growable last-in first-out stack.
///
/// Backed by a `Vec`, which already gives the doubling-on-overflow growth
/// a hand-rolled array stack would reimplement. Popping or peeking an
/// empty stack is an error, not a panic.
///
/// # Examples
///
/// ```
/// use sentinel_list::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an element on top of the stack.
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Removes and returns the top element, or [`Error::Underflow`] if the
    /// stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Underflow("pop"))
    }

    /// Returns a reference to the top element without removing it, or
    /// [`Error::Underflow`] if the stack is empty.
    pub fn top(&self) -> Result<&T> {
        self.items.last().ok_or(Error::Underflow("top"))
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use crate::error::Error;

    #[test]
    fn stack_lifo_order() {
        let mut stack = Stack::new();
        for i in 0..5 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 5);
        for i in (0..5).rev() {
            assert_eq!(stack.top(), Ok(&i));
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn stack_underflow() {
        let mut stack = Stack::<i32>::new();
        assert_eq!(stack.pop(), Err(Error::Underflow("pop")));
        assert_eq!(stack.top(), Err(Error::Underflow("top")));

        stack.push(1);
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::Underflow("pop")));
    }

    #[test]
    fn stack_grows_past_initial_capacity() {
        let mut stack = Stack::new();
        for i in 0..100 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 100);
        assert_eq!(stack.top(), Ok(&99));
        for i in (0..100).rev() {
            assert_eq!(stack.pop(), Ok(i));
        }
    }
}
