//! CLI support for jsonexpr
//!
//! Provides programmatic access to the command-line behaviour so it can be
//! exercised without spawning a process.

mod run;

pub use run::{QueryOptions, QueryResult, execute, query};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The document could not be lexed or parsed
    #[error("JSON parse error: {0}")]
    Document(#[from] crate::ParseError),

    /// The expression could not be parsed or evaluated
    #[error("Expression evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    /// The document file could not be read
    #[error("Failed to open file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Pass a file path, or '-' with JSON piped to stdin.")]
    NoInput,
}
