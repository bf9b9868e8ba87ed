//! A compile-time-checked rendition of the sentinel list idea: node links
//! are `GhostCell`s behind branded tokens, and each node is owned by two
//! `StaticRc` halves (one held by its predecessor, one by its successor),
//! so the link structure needs no `unsafe` at all.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<'id, T> = StaticRc<GhostCell<'id, RawNode<'id, T>>, 1, 2>;
type Full<'id, T> = StaticRc<GhostCell<'id, RawNode<'id, T>>, 2, 2>;

struct RawNode<'id, T> {
    value: T,
    next: Option<Half<'id, T>>,
    prev: Option<Half<'id, T>>,
}

impl<'id, T> RawNode<'id, T> {
    fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }
}

/// A node's two `StaticRc` halves are only rejoined when the node is
/// popped, and dropping a lone half asserts in `static-rc`. A `TokenList`
/// must therefore be emptied (with its token) before it is dropped, e.g.
/// via [`clear`].
///
/// [`clear`]: TokenList::clear
pub struct TokenList<'id, T> {
    head: Option<Half<'id, T>>,
    tail: Option<Half<'id, T>>,
    len: usize,
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (outer, inner) = Full::split(Full::new(GhostCell::new(RawNode::new(value))));
        match self.head.take() {
            Some(front) => {
                front.deref().borrow_mut(token).prev = Some(inner);
                outer.deref().borrow_mut(token).next = Some(front);
                self.head = Some(outer);
            }
            None => {
                self.head = Some(outer);
                self.tail = Some(inner);
            }
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (outer, inner) = Full::split(Full::new(GhostCell::new(RawNode::new(value))));
        match self.tail.take() {
            Some(back) => {
                back.deref().borrow_mut(token).next = Some(inner);
                outer.deref().borrow_mut(token).prev = Some(back);
                self.tail = Some(outer);
            }
            None => {
                self.head = Some(inner);
                self.tail = Some(outer);
            }
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let first = self.head.take()?;
        let second = match first.deref().borrow_mut(token).next.take() {
            Some(next_front) => {
                let mine = next_front
                    .deref()
                    .borrow_mut(token)
                    .prev
                    .take()
                    .expect("a non-front node always holds a prev half");
                self.head = Some(next_front);
                mine
            }
            None => self
                .tail
                .take()
                .expect("a single-node list holds the second half in tail"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(first, second)).into_inner().value)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let first = self.tail.take()?;
        let second = match first.deref().borrow_mut(token).prev.take() {
            Some(next_back) => {
                let mine = next_back
                    .deref()
                    .borrow_mut(token)
                    .next
                    .take()
                    .expect("a non-back node always holds a next half");
                self.tail = Some(next_back);
                mine
            }
            None => self
                .head
                .take()
                .expect("a single-node list holds the second half in head"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(first, second)).into_inner().value)
    }

    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }

    pub fn to_vec(&self, token: &GhostToken<'id>) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_ref();
        while let Some(node) = cursor {
            let raw = node.deref().borrow(token);
            out.push(raw.value.clone());
            cursor = raw.next.as_ref();
        }
        out
    }
}
