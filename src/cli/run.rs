//! Evaluate an expression against a JSON document

use super::CliError;
use crate::{
    Evaluator, Mode, Value, json::parse_document, output::serialize, parser::parse_expression,
};

/// Options for a query run
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// The expression to evaluate
    pub expression: String,
    /// JSON document text
    pub document: Option<String>,
    /// Output layout for the result
    pub mode: Mode,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a query run
#[derive(Debug, PartialEq)]
pub enum QueryResult {
    /// Document and expression both parsed
    SyntaxValid,
    /// Expression evaluated; holds the serialized result
    Success(String),
}

/// Evaluates `expression` against the JSON text in `document`.
///
/// Document errors are reported before the expression is looked at.
///
/// ```
/// use jsonexpr::{Value, cli::query};
///
/// let result = query(r#"{"a": [3, 9]}"#, "max(a)").unwrap();
/// assert_eq!(result, Value::Number(9.0));
/// ```
pub fn query(document: &str, expression: &str) -> Result<Value, CliError> {
    let document = parse_document(document)?;
    let expr = parse_expression(expression)?;
    log::debug!("parsed expression: {}", expr);
    Ok(Evaluator::new(&document).evaluate(&expr)?)
}

/// Runs a query as described by `options`.
///
/// In syntax-only mode both inputs are parsed and nothing is evaluated.
pub fn execute(options: &QueryOptions) -> Result<QueryResult, CliError> {
    let source = options.document.as_deref().ok_or(CliError::NoInput)?;

    if options.syntax_only {
        parse_document(source)?;
        parse_expression(&options.expression)?;
        return Ok(QueryResult::SyntaxValid);
    }

    let result = query(source, &options.expression)?;
    Ok(QueryResult::Success(serialize(&result, options.mode)))
}
