//! Failure taxonomy for terminal and argument-validating operators.
//!
//! Every failing terminal operator has an `*_or_none` counterpart that turns
//! the empty-input failure into `Option::None`; the two behave identically in
//! every other case.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Errors reported by operators that place preconditions on the sequence or
/// on their own arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// The operator requires at least one element and the sequence was empty.
    #[error("operation requires a non-empty sequence")]
    EmptySequence,

    /// The operator requires at most one element and found a second.
    #[error("sequence contains more than one element")]
    TooManyElements,

    /// An operator argument was outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A runtime-typed element could not be downcast to the requested type.
    #[error("type mismatch: element is not a `{expected}`")]
    TypeMismatch {
        /// Name of the type the caller asked for.
        expected: &'static str,
    },
}
