//! Error types for the node layer.
//!
//! Every failure in this crate is a deterministic consequence of
//! caller-supplied state; there is no I/O and no transient failure mode, so
//! nothing here is ever retried or swallowed.

use thiserror::Error;

/// Errors raised by node construction, edge attachment, and label slicing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character's code point exceeds the single-byte representable range.
    ///
    /// Raised when encoding a character into the single-byte edge
    /// representation. This signals that the variant-selection policy routed
    /// a non-single-byte label into a single-byte node shape.
    #[error("character {0:?} cannot be represented as a single byte")]
    IncompatibleCharacter(char),

    /// An outgoing edge starting with this character is already present.
    ///
    /// Also raised for every attach attempt on a leaf shape, which has no
    /// outgoing-edge slot at all; callers must build a replacement node
    /// through the factory instead of mutating in place.
    #[error("an outgoing edge starting with {0:?} already exists")]
    EdgeAlreadyExists(char),

    /// A subsequence span's end exceeds the label length.
    #[error("subsequence end {end} exceeds length {len}")]
    SubsequenceEndOutOfBounds { end: usize, len: usize },

    /// A subsequence span's end precedes its start.
    #[error("subsequence end {end} precedes start {start}")]
    SubsequenceEndBeforeStart { start: usize, end: usize },

    /// An edge label was empty where a non-empty one is required.
    ///
    /// Only the root node may carry an empty incoming edge.
    #[error("edge label must not be empty for a non-root node")]
    EmptyEdge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::IncompatibleCharacter('世');
        assert!(err.to_string().contains("single byte"));

        let err = Error::EdgeAlreadyExists('x');
        assert!(err.to_string().contains("already exists"));

        let err = Error::SubsequenceEndOutOfBounds { end: 2, len: 1 };
        assert_eq!(err.to_string(), "subsequence end 2 exceeds length 1");

        let err = Error::SubsequenceEndBeforeStart { start: 1, end: 0 };
        assert_eq!(err.to_string(), "subsequence end 0 precedes start 1");
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            Error::EdgeAlreadyExists('a'),
            Error::EdgeAlreadyExists('a')
        );
        assert_ne!(
            Error::EdgeAlreadyExists('a'),
            Error::IncompatibleCharacter('a')
        );
    }
}
