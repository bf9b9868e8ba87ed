use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::cursor::CursorMut;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list of owned nodes, framed by two
/// permanent sentinel nodes. It allows inserting and removing elements at
/// any known position in constant time; positional access walks from the
/// nearer end and takes *O*(min(*i*, *n* - *i*)) time.
///
/// The `List` contains:
/// - the boxed head and tail sentinels, which never hold an element and
///   are never exposed to callers;
/// - a length field `len`, the count of real nodes;
/// - a modification counter `mod_count`, bumped on every structural
///   mutation and snapshotted by [`CursorMut`] for its fail-fast checks.
///
/// # Naming Conventions
///
/// - *real node*: any node other than the two sentinels;
/// - *front*/*back*: the first/last real node, when one exists.
pub struct List<T> {
    head: Box<Node<Erased>>,
    tail: Box<Node<Erased>>,
    pub(crate) len: usize,
    pub(crate) mod_count: u64,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

// private methods
impl<T> List<T> {
    pub(crate) fn head_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.head.as_ref()).cast()
    }
    pub(crate) fn tail_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.tail.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `head.next` is always valid (the first real node, or the
        // tail sentinel in an empty list).
        unsafe { self.head_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `tail.prev` is always valid (the last real node, or the
        // head sentinel in an empty list).
        unsafe { self.tail_node().as_ref().prev }
    }

    /// Attach a single detached node between `prev` and `next`, which must
    /// be adjacent nodes of this list (checked in `#[cfg(debug_assertions)]`
    /// only).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        self.mod_count += 1;
    }

    /// Detach the real node `node` from the list and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` is a real node
    /// of this list. Passing a sentinel or a node of another list makes the
    /// chain ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        self.mod_count += 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Allocate a node holding `element` and attach it before `next`,
    /// which must be a node of this list (the tail sentinel included).
    pub(crate) unsafe fn insert_before(&mut self, next: NonNull<Node<T>>, element: T) {
        let node = Node::new_detached(element);
        self.attach_node(next.as_ref().prev, next, node);
    }

    /// Walk to the node at `index`, where `index <= len` and `locate(len)`
    /// is the tail sentinel. Walks from whichever end is nearer.
    pub(crate) fn locate(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index <= self.len);
        if index < self.len / 2 {
            let mut node = self.front_node();
            for _ in 0..index {
                // SAFETY: fewer than `len` forward steps from the front
                // stay inside the chain.
                node = unsafe { node.as_ref().next };
            }
            node
        } else {
            let mut node = self.tail_node();
            for _ in index..self.len {
                // SAFETY: at most `len` backward steps from the tail
                // sentinel stay inside the chain.
                node = unsafe { node.as_ref().prev };
            }
            node
        }
    }

    /// Checked positional lookup: rejects `index >= bound` with
    /// [`Error::OutOfRange`]. Strict lookups pass `bound = len`; insertion
    /// passes `bound = len + 1` so that inserting at `len` (append) is
    /// legal.
    pub(crate) fn node_at(&self, index: usize, bound: usize) -> Result<NonNull<Node<T>>> {
        if index >= bound {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.locate(index))
    }
}

impl<T> List<T> {
    /// Create an empty `List`: the two sentinels linked directly to each
    /// other.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let (head, tail) = new_sentinels();
        Self {
            head,
            tail,
            len: 0,
            mod_count: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the `List`, in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements, restoring the two-sentinel empty state. The
    /// modification counter is bumped, so live cursors are invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.mod_count += 1;
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1).ok()
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::OutOfRange`] outside `0..len`.
    ///
    /// # Complexity
    ///
    /// *O*(min(`index`, `len` - `index`)), walking from the nearer end.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(2), Ok(&3));
    /// assert_eq!(list.get(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index, self.len)?;
        // SAFETY: a strict lookup never yields a sentinel, so the node
        // holds a valid element, borrowed for as long as `self`.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`Error::OutOfRange`] outside `0..len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node_at(index, self.len)?;
        // SAFETY: a strict lookup never yields a sentinel, so the node
        // holds a valid element, borrowed mutably for as long as `self`.
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replaces the element at `index` in place and returns the previous
    /// element, or [`Error::OutOfRange`] outside `0..len`.
    ///
    /// Replacement is not a structural mutation: the node chain and the
    /// modification counter are untouched, and live cursors stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.set(1, 5), Ok(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 5, 3]);
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Adds an element at `index`, sliding the elements at or after that
    /// position one place higher. Inserting at exactly `len` appends;
    /// anything beyond is [`Error::OutOfRange`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// assert!(list.insert(9, 6).is_err());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        let next = self.node_at(index, self.len + 1)?;
        // SAFETY: `next` is a node of this list (possibly the tail
        // sentinel, for an append).
        unsafe { self.insert_before(next, element) };
        Ok(())
    }

    /// Adds an element first in the list, in *O*(1) time.
    pub fn push_front(&mut self, element: T) {
        // SAFETY: `front_node` is a node of this list.
        unsafe { self.insert_before(self.front_node(), element) };
    }

    /// Appends an element to the back of the list, in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, element: T) {
        // SAFETY: the tail sentinel is a node of this list.
        unsafe { self.insert_before(self.tail_node(), element) };
    }

    /// Removes the element at `index` and returns it, or
    /// [`Error::OutOfRange`] outside `0..len`. The list is left unchanged
    /// on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(1).is_err());
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index, self.len)?;
        // SAFETY: a strict lookup yields a real node of this list.
        let node = unsafe { self.detach_node(node) };
        Ok(node.into_element())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so `front_node` is a real node.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(node.into_element())
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so `back_node` is a real node.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(node.into_element())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a fail-fast cursor positioned before the first element,
    /// bound to the list's current modification counter. See [`CursorMut`].
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements in forward order, space-separated. An empty list
/// renders as the empty string.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// assert_eq!(list.to_string(), "1 2 3");
/// assert_eq!(List::<i32>::new().to_string(), "");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Allocate a node holding `element` with uninitialized links. The
    /// caller must initialize `next` and `prev` before they are read.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node: NonNull<MaybeUninit<Node<T>>> =
            NonNull::from(Box::leak(Box::new(MaybeUninit::uninit())));
        let node: NonNull<Node<T>> = node.cast();
        // SAFETY: the allocation is live and `element` is written through a
        // raw place, so no reference to uninitialized memory is formed.
        unsafe {
            std::ptr::addr_of_mut!((*node.as_ptr()).element).write(element);
        }
        node
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

/// Make `prev` and `next` adjacent.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

/// Allocate the sentinel pair of an empty list: `head.next` is the tail,
/// `tail.prev` is the head, and the outward links (`head.prev`,
/// `tail.next`) are self-links that are never traversed.
fn new_sentinels() -> (Box<Node<Erased>>, Box<Node<Erased>>) {
    let head = Node::new_detached(Erased);
    let tail = Node::new_detached(Erased);
    // SAFETY: both allocations are live; every link is initialized here,
    // before the nodes are reboxed, and the sentinel elements are never
    // read.
    unsafe {
        (*head.as_ptr()).next = tail;
        (*head.as_ptr()).prev = head;
        (*tail.as_ptr()).prev = head;
        (*tail.as_ptr()).next = tail;
        (Box::from_raw(head.as_ptr()), Box::from_raw(tail.as_ptr()))
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their
// type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_get_and_set() {
        let mut list = List::from_iter(0..5);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&(i as i32)));
        }
        assert_eq!(list.get(5), Err(Error::OutOfRange { index: 5, len: 5 }));

        assert_eq!(list.set(2, 20), Ok(2));
        assert_eq!(list.get(2), Ok(&20));
        assert_eq!(list.set(5, 50), Err(Error::OutOfRange { index: 5, len: 5 }));
        assert_eq!(Vec::from_iter(list), vec![0, 1, 20, 3, 4]);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            Vec::from_iter((0..5).chain(Some(10)).chain(5..10))
        );

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.back(), Some(&8));

        list.insert(0, 11).unwrap();
        assert_eq!(list.front(), Some(&11));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.front(), Some(&0));

        // appending at exactly `len` is legal
        let len = list.len();
        list.insert(len, 12).unwrap();
        assert_eq!(list.back(), Some(&12));
    }

    #[test]
    fn list_insert_after_get_round_trip() {
        let mut list = List::from_iter(0..6);
        for at in [0_usize, 3, 6] {
            let before = list.len();
            list.insert(at, 100 + at as i32).unwrap();
            assert_eq!(list.len(), before + 1);
            assert_eq!(list.get(at), Ok(&(100 + at as i32)));
            assert_eq!(list.remove(at), Ok(100 + at as i32));
            assert_eq!(list.len(), before);
        }
    }

    #[test]
    fn list_out_of_range_leaves_list_unchanged() {
        let mut list = List::from_iter([1, 2, 3]);
        let snapshot = Vec::from_iter(list.iter().copied());

        assert!(list.get(3).is_err());
        assert!(list.remove(3).is_err());
        assert!(list.insert(4, 9).is_err());
        assert!(list.set(3, 9).is_err());

        assert_eq!(Vec::from_iter(list.iter().copied()), snapshot);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..5);
        let before = list.mod_count;
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.mod_count > before);
        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
    }

    #[test]
    fn list_display() {
        let mut list = List::new();
        assert_eq!(list.to_string(), "");
        list.push_back(1);
        assert_eq!(list.to_string(), "1");
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.to_string(), "1 2 3");
    }

    #[test]
    fn tester_scenario_prepend_and_trim() {
        // [0, 1, 2, 3, 4], then ten prepends of 20..30, then trim both ends.
        let mut list = List::new();
        for i in 0..5 {
            list.push_back(i);
        }
        for i in 20..30 {
            list.insert(0, i).unwrap();
        }
        assert_eq!(list.remove(0), Ok(29));
        let last = list.len() - 1;
        assert_eq!(list.remove(last), Ok(4));

        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            vec![28, 27, 26, 25, 24, 23, 22, 21, 20, 0, 1, 2, 3]
        );
        assert_eq!(list.to_string(), "28 27 26 25 24 23 22 21 20 0 1 2 3");
        assert_eq!(list.index_of(&26), Some(2));
    }
}
