//! Error types for parsing and table generation.

use thiserror::Error;

/// A structural error in the input formula.
///
/// `position` is a character offset into the original input text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{description} at position {position}")]
pub struct ParseError {
    pub position: isize,
    pub description: String,
}

impl ParseError {
    pub fn new(position: isize, description: impl Into<String>) -> Self {
        Self {
            position,
            description: description.into(),
        }
    }
}

/// Errors that can occur while rendering a truth table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The formula has more distinct symbols than the configured limit.
    #[error("formula has {count} symbols, at most {max} are supported")]
    TooManySymbols { count: usize, max: usize },

    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),
}
