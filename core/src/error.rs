//! Error types for sequence operations.

use std::fmt;

/// Result type for sequence operations.
pub type SeqResult<T> = Result<T, SeqError>;

/// Errors that can occur during a terminal call on a sequence.
///
/// All failures are local and synchronous; a failed terminal call leaves no
/// observable mutation since sequences are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// `get` was called with an index past the end of the sequence.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The bound the index was checked against: the source length, a
        /// take limit, or the number of surviving elements a scan produced.
        len: usize,
    },

    /// `len` was called on a chain whose length is undefined, either
    /// because it is rooted in an unbounded generator or because the node
    /// kind does not support length without traversal.
    LengthUndefined {
        /// The node kind that refused to report a length.
        node: &'static str,
    },

    /// A materializing operation was invoked on an unbounded chain.
    UnboundedMaterialization {
        /// The operation that would have diverged.
        operation: &'static str,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
            Self::LengthUndefined { node } => {
                write!(f, "length is undefined for a chain containing `{node}`")
            }
            Self::UnboundedMaterialization { operation } => {
                write!(f, "`{operation}` cannot materialize an unbounded sequence")
            }
        }
    }
}

impl std::error::Error for SeqError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_index_out_of_bounds() {
        let err = SeqError::IndexOutOfBounds { index: 9, len: 6 };
        let msg = err.to_string();
        assert!(msg.contains('9'), "should mention the index");
        assert!(msg.contains('6'), "should mention the bound");
    }

    #[test]
    fn error_display_length_undefined() {
        let err = SeqError::LengthUndefined { node: "generate" };
        let msg = err.to_string();
        assert!(msg.contains("generate"), "should name the refusing node");
        assert!(msg.contains("undefined"), "should say length is undefined");
    }

    #[test]
    fn error_display_unbounded_materialization() {
        let err = SeqError::UnboundedMaterialization {
            operation: "sort_by",
        };
        let msg = err.to_string();
        assert!(msg.contains("sort_by"), "should name the operation");
        assert!(msg.contains("unbounded"), "should mention unboundedness");
    }

    #[test]
    fn error_equality() {
        let err1 = SeqError::IndexOutOfBounds { index: 3, len: 2 };
        let err2 = SeqError::IndexOutOfBounds { index: 3, len: 2 };
        let err3 = SeqError::IndexOutOfBounds { index: 3, len: 1 };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn error_clone() {
        let err = SeqError::LengthUndefined { node: "filter" };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SeqError>();
    }
}
