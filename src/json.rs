//! Hand-written JSON front end: a [`lexer`] that produces position-carrying
//! tokens and a recursive-descent [`parser`] that builds a [`Value`] tree.
//!
//! Errors from both stages are [`ParseError`]s whose message points at the
//! offending line and column.
//!
//! ```
//! use jsonexpr::json::parse_document;
//!
//! let value = parse_document(r#"{"a": [1, 2, 3]}"#).unwrap();
//! assert_eq!(value.to_string(), r#"{"a": [1, 2, 3]}"#);
//!
//! let err = parse_document("[1, 2,]").unwrap_err();
//! assert!(err.to_string().contains("line 1, column 6"));
//! ```

pub mod lexer;
pub mod parser;

use crate::{error::ParseError, value::Value};

pub use lexer::{Lexer, Token, TokenKind, lex};
pub use parser::Parser;

/// Lexes and parses a complete JSON document.
pub fn parse_document(source: &str) -> Result<Value, ParseError> {
    let tokens = lex(source)?;
    Parser::new(tokens, source).parse()
}
