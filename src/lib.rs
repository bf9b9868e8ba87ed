//! This crate provides a doubly-linked list with owned nodes, framed by a
//! pair of sentinel nodes, together with a small family of companion
//! structures built in the same spirit: a growable [`Stack`], a
//! [`TwoStackQueue`], an [`AvlMap`], a [`SeparateChainingMap`] whose
//! chains are the list itself, an [`ExpressionTree`], and a [`WordIndex`].
//!
//! The [`List`] allows inserting and removing elements at any given
//! position in constant time. In compromise, accessing or mutating
//! elements at any position takes *O*(min(*i*, *n* - *i*)) time, walking
//! from the nearer end.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.insert(0, 0).unwrap(); // insert 0 at the beginning of the list
//! assert_eq!(list.get(0), Ok(&0));
//!
//! assert_eq!(list.remove(3), Ok(3)); // remove by position
//! assert_eq!(list.set(1, 10), Ok(1)); // replace in place
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 10, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ┌───────────┐          ╔═══════════╗          ╔═══════════╗          ┌───────────┐
//! │   next    │ ───────→ ║   next    ║ ─→ ┄┄ ─→ ║   next    ║ ───────→ │   next    │
//! ├───────────┤          ╟───────────╢          ╟───────────╢          ├───────────┤
//! │   prev    │ ←─────── ║   prev    ║ ←─ ┄┄ ←─ ║   prev    ║ ←─────── │   prev    │
//! ├───────────┤          ╟───────────╢          ╟───────────╢          ├───────────┤
//! ┊no payload ┊          ║ payload T ║          ║ payload T ║          ┊no payload ┊
//! └╌╌╌╌╌╌╌╌╌╌╌┘          ╚═══════════╝          ╚═══════════╝          └╌╌╌╌╌╌╌╌╌╌╌┘
//! head sentinel              Node 0               Node n - 1           tail sentinel
//! ```
//! The `List` owns:
//! - the two boxed sentinel nodes, `head` and `tail`. They carry no
//!   payload and are never exposed; their outward links (`head.prev`,
//!   `tail.next`) are self-links that are never traversed;
//! - a length field `len`, kept in sync so `len()` is *O*(1);
//! - a modification counter `mod_count`, bumped by every structural
//!   mutation and snapshotted by [`CursorMut`] for fail-fast checks.
//!
//! Each real node of the list `List<T>` is allocated on the heap, and
//! contains:
//! - the `next` pointer that points to the next node (or the tail sentinel
//!   if it is the last element in the list);
//! - the `prev` pointer that points to the previous node (or the head
//!   sentinel if it is the first element in the list);
//! - the actual payload `T`.
//!
//! In an empty list the sentinels point directly at each other:
//! `head.next` is the tail sentinel and `tail.prev` is the head sentinel.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, exact-size, fused iterators and iterate the
//! list like an array. [`IterMut`] provides mutability of the elements
//! (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # The Fail-Fast Cursor
//!
//! [`CursorMut`] walks the list one element at a time and can remove the
//! element it last stepped over. It carries a snapshot of the list's
//! modification counter: mutating the list surface through the cursor's
//! passthrough methods leaves the snapshot behind, and the next cursor
//! step reports [`Error::ConcurrentModification`] instead of walking a
//! restructured chain.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//! let mut cursor = list.cursor_mut();
//!
//! assert_eq!(cursor.next(), Ok(&1));
//! assert_eq!(cursor.next(), Ok(&2));
//! assert_eq!(cursor.remove(), Ok(2)); // removes the element just seen
//!
//! cursor.push_back(5); // structural mutation outside the cursor
//! assert_eq!(cursor.next(), Err(Error::ConcurrentModification));
//!
//! drop(cursor);
//! assert_eq!(Vec::from_iter(list), vec![1, 3, 4, 5]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`CursorMut`]: crate::CursorMut
//! [`Stack`]: crate::Stack
//! [`TwoStackQueue`]: crate::TwoStackQueue
//! [`AvlMap`]: crate::AvlMap
//! [`SeparateChainingMap`]: crate::SeparateChainingMap
//! [`ExpressionTree`]: crate::ExpressionTree
//! [`WordIndex`]: crate::WordIndex
//! [`Error::ConcurrentModification`]: crate::Error::ConcurrentModification

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use expr::ExpressionTree;
#[doc(inline)]
pub use index::WordIndex;
#[doc(inline)]
pub use list::cursor::CursorMut;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use map::{AvlMap, SeparateChainingMap};
#[doc(inline)]
pub use queue::TwoStackQueue;
#[doc(inline)]
pub use stack::Stack;

pub mod error;
pub mod expr;
pub mod index;
pub mod list;
pub mod map;
pub mod queue;
pub mod stack;

mod experiments;
