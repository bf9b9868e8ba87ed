use crate::error::{Error, Result};
use crate::list::{List, Node};
use std::fmt;
use std::ptr::NonNull;

/// A fail-fast mutable cursor over a [`List`].
///
/// The cursor walks the list front to back, one element per [`next`] call,
/// and supports removing the element most recently returned. It points
/// *between* elements: at creation it sits before the first element, and
/// after the final `next` it sits past the last one (on the tail
/// sentinel).
///
/// The cursor snapshots the list's modification counter when it is
/// created. Every structural mutation of the list bumps that counter, and
/// the cursor checks the snapshot before touching any node: if the list
/// was restructured behind the cursor's back, [`next`] and [`remove`]
/// return [`Error::ConcurrentModification`] instead of walking a chain
/// that may no longer contain the cursor's node. The cursor's own
/// [`remove`] re-synchronizes the snapshot; the list-surface passthroughs
/// ([`push_front`], [`remove_at`], ...) deliberately do not.
///
/// Exclusive borrowing means no *other* code can touch the list while the
/// cursor lives, so the stale-cursor condition is only reachable through
/// those passthroughs. They exist for exactly that reason: mutating the
/// list mid-iteration is sometimes what the caller wants, and the cursor
/// answers with a clean error rather than a scrambled traversal.
///
/// [`next`]: CursorMut::next
/// [`remove`]: CursorMut::remove
/// [`push_front`]: CursorMut::push_front
/// [`remove_at`]: CursorMut::remove_at
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_mut();
///
/// let mut seen = Vec::new();
/// while cursor.has_next() {
///     seen.push(*cursor.next().unwrap());
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    current: NonNull<Node<T>>,
    expected_mod_count: u64,
    ok_to_remove: bool,
    list: &'a mut List<T>,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            current: list.front_node(),
            expected_mod_count: list.mod_count,
            ok_to_remove: false,
            list,
        }
    }

    fn check_sync(&self) -> Result<()> {
        if self.expected_mod_count != self.list.mod_count {
            return Err(Error::ConcurrentModification);
        }
        Ok(())
    }

    /// Returns `true` if the cursor has not yet walked past the last
    /// element. Unlike [`next`], this never fails: a stale cursor still
    /// answers, and the staleness surfaces on the following `next`.
    ///
    /// [`next`]: CursorMut::next
    pub fn has_next(&self) -> bool {
        // a passthrough `reverse` swaps the sentinel roles, which parks an
        // exhausted cursor on the head sentinel; both sentinels are the end
        self.current != self.list.tail_node() && self.current != self.list.head_node()
    }

    /// Advances past the next element and returns a reference to it.
    ///
    /// # Errors
    ///
    /// - [`Error::ConcurrentModification`] if the list was structurally
    ///   mutated since the cursor was created or last re-synchronized;
    /// - [`Error::EndOfSequence`] if the cursor is already past the last
    ///   element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_mut();
    ///
    /// assert_eq!(cursor.next(), Ok(&1));
    /// assert_eq!(cursor.next(), Ok(&2));
    /// assert_eq!(cursor.next(), Err(Error::EndOfSequence));
    /// ```
    pub fn next(&mut self) -> Result<&T> {
        self.check_sync()?;
        if !self.has_next() {
            return Err(Error::EndOfSequence);
        }
        // SAFETY: the snapshot check passed and `current` is not the tail
        // sentinel, so it is a live real node of this list.
        let node = unsafe { self.current.as_ref() };
        self.current = node.next;
        self.ok_to_remove = true;
        Ok(&node.element)
    }

    /// Removes and returns the element most recently returned by
    /// [`next`]. At most one removal is allowed per `next`.
    ///
    /// The cursor re-synchronizes with the list afterwards, so iteration
    /// continues normally.
    ///
    /// # Errors
    ///
    /// - [`Error::ConcurrentModification`] if the list was structurally
    ///   mutated since the cursor was created or last re-synchronized;
    /// - [`Error::IllegalState`] if `next` has not succeeded since the
    ///   last removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// let mut cursor = list.cursor_mut();
    ///
    /// // drop the even elements
    /// while cursor.has_next() {
    ///     if cursor.next().unwrap() % 2 == 0 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 3]);
    /// ```
    ///
    /// [`next`]: CursorMut::next
    pub fn remove(&mut self) -> Result<T> {
        self.check_sync()?;
        // on the head sentinel (after a passthrough `reverse` of an
        // exhausted cursor) `current.prev` is the sentinel's self-link, not
        // the last element returned
        if !self.ok_to_remove || self.current == self.list.head_node() {
            return Err(Error::IllegalState);
        }
        // SAFETY: a successful `next` advanced `current` past a real node,
        // so `current.prev` is that node, still attached to this list.
        let node = unsafe {
            let target = self.current.as_ref().prev;
            self.list.detach_node(target)
        };
        self.expected_mod_count += 1;
        self.ok_to_remove = false;
        Ok(node.into_element())
    }

    /// Provides a read-only view of the underlying list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut();
    /// cursor.next().unwrap();
    /// assert_eq!(cursor.view().len(), 3);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// List-surface passthroughs. They mutate through the cursor's borrow and
// do NOT re-synchronize the snapshot, so a structural passthrough leaves
// the cursor stale and its following `next` fails.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Adds an element first in the list, the same as
    /// [`List::push_front`]. Invalidates the cursor.
    pub fn push_front(&mut self, element: T) {
        self.list.push_front(element);
    }

    /// Appends an element to the back of the list, the same as
    /// [`List::push_back`]. Invalidates the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut();
    ///
    /// assert_eq!(cursor.next(), Ok(&1));
    /// cursor.push_back(4);
    /// assert_eq!(cursor.next(), Err(Error::ConcurrentModification));
    /// ```
    pub fn push_back(&mut self, element: T) {
        self.list.push_back(element);
    }

    /// Adds an element at `index`, the same as [`List::insert`].
    /// Invalidates the cursor on success.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        self.list.insert(index, element)
    }

    /// Removes and returns the element at `index`, the same as
    /// [`List::remove`]. Invalidates the cursor on success.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.list.remove(index)
    }

    /// Reverses the list in place, the same as [`List::reverse`].
    ///
    /// Reversal relinks every node but does not count as a structural
    /// modification, so the cursor stays live: it keeps its position and
    /// continues toward the *new* tail, which can revisit elements already
    /// seen. A cursor that was already past the last element stays
    /// exhausted.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("ok_to_remove", &self.ok_to_remove)
            .finish()
    }
}
