use thiserror::Error;

use crate::diagnostics::{format_error, format_token_error};
use crate::json::lexer::Token;

/// A lexical or structural error in a JSON document.
///
/// The message is fully formatted with line, column, the offending line and
/// a caret, so it can be shown to a user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    offset: usize,
}

impl ParseError {
    /// Error positioned at a byte offset of `source`.
    pub fn at(message: &str, source: &str, offset: usize) -> Self {
        ParseError {
            message: format_error(message, source, offset),
            offset,
        }
    }

    /// Error positioned at `token`, prefixed with the token's text and kind.
    pub fn at_token(message: &str, token: &Token<'_>) -> Self {
        ParseError {
            message: format_token_error(message, token),
            offset: token.offset,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset in the source the error points at.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Errors raised while parsing or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("{message} at position {position}")]
    Syntax { message: String, position: usize },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid path: expected object, got {0}")]
    ExpectedObject(&'static str),

    #[error("Invalid path: expected array, got {0}")]
    ExpectedArray(&'static str),

    #[error("Invalid array index type: {0}")]
    InvalidIndexType(&'static str),

    #[error("Array index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: f64, len: usize },

    #[error("Array elements must be numbers for {function} operation, got {found}")]
    NonNumericElement {
        function: &'static str,
        found: &'static str,
    },

    #[error("Cannot apply {function} to non-numeric value {found}")]
    NonNumericArgument {
        function: &'static str,
        found: &'static str,
    },

    #[error("{0} requires at least one argument")]
    MissingArguments(&'static str),

    #[error("size requires exactly one argument, got {0}")]
    SizeArity(usize),

    #[error("size argument must be array, object, or string, got {0}")]
    SizeType(&'static str),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

impl EvalError {
    pub(crate) fn syntax(message: impl Into<String>, position: usize) -> Self {
        EvalError::Syntax {
            message: message.into(),
            position,
        }
    }
}
