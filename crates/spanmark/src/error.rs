//! Error types for delimiter rule configuration.
//!
//! Scanning text never fails; only an invalid rule set is rejected.

use thiserror::Error;

/// Errors that can occur when building a [`RuleSet`](crate::RuleSet).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuleError {
    /// The delimiter symbol is an empty string.
    #[error("delimiter symbol is empty")]
    EmptySymbol,

    /// The delimiter symbol spans more than one grapheme cluster.
    #[error("delimiter symbol {0:?} is longer than one grapheme")]
    MultiGraphemeSymbol(String),

    /// Two rules share the same delimiter symbol.
    #[error("delimiter symbol {0:?} is bound to more than one rule")]
    DuplicateSymbol(String),

    /// The delimiter symbol is the escape character itself.
    #[error("delimiter symbol {0:?} collides with the escape character")]
    EscapeSymbol(String),
}

pub type Result<T> = std::result::Result<T, RuleError>;
