//! Error types for collection operations.
//!
//! Operations over well-typed, non-degenerate input never fail. The only
//! failure is a degenerate argument a correct caller should never produce,
//! such as reducing an empty collection without a seed.

use thiserror::Error;

/// Represents errors that can occur in collection operations.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::{reduce, CollectionError};
///
/// let empty: Vec<i32> = Vec::new();
/// let error = reduce(&empty, |total, value| total + value).unwrap_err();
/// assert_eq!(
///     error,
///     CollectionError::InvalidArgument {
///         operation: "reduce",
///         reason: "empty collection and no seed",
///     }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "reduce: invalid argument: empty collection and no seed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A malformed or degenerate argument was supplied.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The name of the operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

/// Result alias for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = CollectionError::InvalidArgument {
            operation: "reduce",
            reason: "empty collection and no seed",
        };
        assert_eq!(
            format!("{error}"),
            "reduce: invalid argument: empty collection and no seed"
        );
    }

    #[test]
    fn test_invalid_argument_equality() {
        let error1 = CollectionError::InvalidArgument {
            operation: "reduce",
            reason: "a",
        };
        let error2 = CollectionError::InvalidArgument {
            operation: "reduce",
            reason: "a",
        };
        let error3 = CollectionError::InvalidArgument {
            operation: "other",
            reason: "a",
        };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
