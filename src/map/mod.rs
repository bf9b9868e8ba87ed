//! Two map implementations with the same put/get surface: an ordered
//! [`AvlMap`] keyed by comparison, and a [`SeparateChainingMap`] keyed by
//! hashing, whose bucket chains are the crate's own [`List`].
//!
//! [`List`]: crate::List

pub mod avl;
pub mod chaining;

pub use avl::AvlMap;
pub use chaining::SeparateChainingMap;
