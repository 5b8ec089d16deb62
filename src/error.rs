//! Errors returned by fallible operations on the data structures in this crate.

/// Errors raised when an operation's precondition doesn't hold.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A positional insert was given an index past the end of the structure.
    #[error("index {index} is out of range for a structure of length {len}")]
    OutOfRange {
        /// The index that was asked for.
        index: usize,
        /// The length of the structure at the time.
        len: usize,
    },

    /// A removal was attempted on an empty structure.
    #[error("structure is empty")]
    Empty,

    /// The value to remove isn't in the structure.
    #[error("value not found")]
    NotFound,
}

/// `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
