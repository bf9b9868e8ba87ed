use thiserror::Error;

/// A specialized result type for the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The failure taxonomy shared by every structure in the crate.
///
/// All of these are local, immediately-surfaced failures: nothing is
/// retried or recovered internally, and a failing operation leaves the
/// structure unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index was outside the valid bounds for the attempted operation.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A pop, top or dequeue was attempted on an empty structure. The
    /// payload names the offending operation.
    #[error("{0} on an empty structure")]
    Underflow(&'static str),

    /// The list was structurally mutated outside the cursor since the
    /// cursor was created or last re-synchronized.
    #[error("list was structurally modified outside the cursor")]
    ConcurrentModification,

    /// The cursor's `remove` was called without a preceding successful
    /// `next`.
    #[error("cursor remove without a preceding next")]
    IllegalState,

    /// The cursor's `next` was called with no remaining elements.
    #[error("cursor advanced past the end of the list")]
    EndOfSequence,
}
