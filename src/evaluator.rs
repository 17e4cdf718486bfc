use crate::{
    ast::{Expr, PathSegment},
    error::EvalError,
    value::Value,
};

/// Evaluates expressions against a borrowed document root.
///
/// The root is never modified: every result, including values reached
/// through a path, is an owned copy.
///
/// # Examples
///
/// ```
/// use jsonexpr::{Evaluator, json::parse_document, parser::parse_expression};
///
/// let doc = parse_document(r#"{"a": {"b": [1, 2, {"c": "test"}]}}"#).unwrap();
/// let expr = parse_expression("a.b[a.b[1]].c").unwrap();
///
/// let result = Evaluator::new(&doc).evaluate(&expr).unwrap();
/// assert_eq!(result.as_str(), Some("test"));
/// ```
pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value, EvalError> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Path(segments) => self.resolve_path(segments),
            Expr::FunctionCall { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                log::trace!("calling {}() with {} argument(s)", name, values.len());
                self.call_function(name, &values)
            }
        }
    }

    fn resolve_path(&self, segments: &[PathSegment]) -> Result<Value, EvalError> {
        let mut current = self.root;

        for segment in segments {
            log::trace!("resolving {:?} on {}", segment, current.type_name());
            current = match segment {
                PathSegment::Key(key) => match current {
                    Value::Object(map) => map
                        .get(key)
                        .ok_or_else(|| EvalError::KeyNotFound(key.clone()))?,
                    other => return Err(EvalError::ExpectedObject(other.type_name())),
                },
                PathSegment::Index(index_expr) => {
                    // Subscripts see the whole document, not just `current`
                    let index = match self.evaluate(index_expr)? {
                        Value::Number(n) => n,
                        other => return Err(EvalError::InvalidIndexType(other.type_name())),
                    };
                    match current {
                        Value::Array(arr) => element_at(arr, index)?,
                        other => return Err(EvalError::ExpectedArray(other.type_name())),
                    }
                }
            };
        }

        Ok(current.clone())
    }

    fn call_function(&self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        match name {
            "min" => fold_numbers("min", args, f64::INFINITY, f64::min),
            "max" => fold_numbers("max", args, f64::NEG_INFINITY, f64::max),
            "size" => size(args),
            _ => Err(EvalError::UnknownFunction(name.to_string())),
        }
    }
}

/// Truncates `index` toward zero and bounds-checks it against `arr`.
fn element_at(arr: &[Value], index: f64) -> Result<&Value, EvalError> {
    let truncated = index.trunc();
    if truncated < 0.0 || truncated.is_nan() || truncated >= arr.len() as f64 {
        return Err(EvalError::IndexOutOfBounds {
            index,
            len: arr.len(),
        });
    }
    Ok(&arr[truncated as usize])
}

/// Shared body of `min` and `max`: numbers take part directly and arrays
/// contribute each of their (numeric) elements.
fn fold_numbers(
    function: &'static str,
    args: &[Value],
    seed: f64,
    pick: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(EvalError::MissingArguments(function));
    }

    let mut result = seed;
    for arg in args {
        match arg {
            Value::Number(n) => result = pick(result, *n),
            Value::Array(elements) => {
                for element in elements {
                    match element {
                        Value::Number(n) => result = pick(result, *n),
                        other => {
                            return Err(EvalError::NonNumericElement {
                                function,
                                found: other.type_name(),
                            });
                        }
                    }
                }
            }
            other => {
                return Err(EvalError::NonNumericArgument {
                    function,
                    found: other.type_name(),
                });
            }
        }
    }

    Ok(Value::Number(result))
}

fn size(args: &[Value]) -> Result<Value, EvalError> {
    let [arg] = args else {
        return Err(EvalError::SizeArity(args.len()));
    };

    let count = match arg {
        Value::Array(arr) => arr.len(),
        Value::Object(obj) => obj.len(),
        Value::String(s) => s.chars().count(),
        other => return Err(EvalError::SizeType(other.type_name())),
    };

    Ok(Value::Number(count as f64))
}

/// Evaluates `expr` with `root` as the document.
pub fn evaluate(expr: &Expr, root: &Value) -> Result<Value, EvalError> {
    Evaluator::new(root).evaluate(expr)
}
