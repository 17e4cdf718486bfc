use std::fmt;

use crate::output::format_number;
use crate::value::Value;

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Produced by [`Parser`](crate::parser::Parser) and consumed by the
/// [`Evaluator`](crate::evaluator::Evaluator). Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value. The grammar only produces unsigned integer numbers.
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Literal(Value),

    /// Path from the document root
    ///
    /// # Examples
    /// ```text
    /// a.b
    /// a.b[1]
    /// a.b[a.b[1]].c
    /// ```
    Path(Vec<PathSegment>),

    /// Intrinsic function call
    ///
    /// # Examples
    /// ```text
    /// size(a.b)
    /// max(a.b[0], 10)
    /// ```
    FunctionCall { name: String, args: Vec<Expr> },
}

/// One step of a [`Expr::Path`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Object member lookup (`a`, `.b`)
    Key(String),

    /// Array subscript (`[expr]`). The expression is evaluated against the
    /// document root when the path is resolved.
    Index(Box<Expr>),
}

/// Renders the expression back in source syntax.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Value::Number(n)) => f.write_str(&format_number(*n)),
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Path(segments) => {
                for (i, segment) in segments.iter().enumerate() {
                    match segment {
                        PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                        PathSegment::Key(key) => write!(f, ".{key}")?,
                        PathSegment::Index(index) => write!(f, "[{index}]")?,
                    }
                }
                Ok(())
            }
            Expr::FunctionCall { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
