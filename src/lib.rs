pub mod ast;
pub mod cli;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod evaluator;
pub mod json;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Expr, PathSegment};
pub use cli::query;
pub use error::{EvalError, ParseError};
pub use evaluator::{Evaluator, evaluate};
pub use json::{Token, TokenKind, lex, parse_document};
pub use output::{Mode, serialize, to_json, to_json_pretty};
pub use parser::{Parser, parse_expression};
pub use value::Value;
