//! Error type shared by both sequence variants.

/// Errors reported by failing sequence operations.
///
/// Only two operations can fail: `insert` with an index past the end,
/// and the pop operations on an empty sequence. Everything else reports
/// absence through `Option`/`bool` instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// An insertion index outside `0..=len`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The sequence length at the time of the call.
        len: usize,
    },

    /// `pop_front` or `pop_back` on a zero-length sequence.
    EmptyCollection,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            SequenceError::EmptyCollection => write!(f, "pop from empty sequence"),
        }
    }
}

impl std::error::Error for SequenceError {}
