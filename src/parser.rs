use crate::{
    ast::{Expr, PathSegment},
    error::EvalError,
    value::Value,
};

/// Recursive-descent parser for path expressions.
///
/// ```text
/// expr         := functionCall | path | number
/// functionCall := identifier '(' ( expr (',' expr)* )? ')'
/// path         := segment ( '.' segment | '[' expr ']' )*
/// segment      := [A-Za-z0-9]+
/// number       := [0-9]+
/// identifier   := [A-Za-z]+
/// ```
pub struct Parser {
    input: Vec<char>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Parser {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consumes `expected` if it is the current character.
    fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if pred(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn error(&self, message: &str) -> EvalError {
        EvalError::syntax(message, self.position)
    }

    fn parse_function_name(&mut self) -> String {
        self.read_while(|c| c.is_ascii_alphabetic())
    }

    fn parse_number(&mut self) -> Result<Expr, EvalError> {
        let start = self.position;
        let digits = self.read_while(|c| c.is_ascii_digit());
        let n = digits
            .parse::<f64>()
            .map_err(|_| EvalError::syntax("Invalid number", start))?;
        Ok(Expr::Literal(Value::Number(n)))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expr>, EvalError> {
        let mut args = vec![];

        if !self.match_char('(') {
            return Err(self.error("Expected '(' after function name"));
        }

        self.skip_whitespace();
        if self.match_char(')') {
            return Ok(args);
        }

        loop {
            self.skip_whitespace();
            args.push(self.parse_expression()?);
            self.skip_whitespace();

            if self.match_char(',') {
                continue;
            }
            if self.match_char(')') {
                return Ok(args);
            }
            return Err(self.error("Expected ',' or ')' after argument"));
        }
    }

    fn parse_segment(&mut self) -> String {
        self.read_while(|c| c.is_ascii_alphanumeric())
    }

    fn parse_path(&mut self) -> Result<Expr, EvalError> {
        let mut segments = vec![];

        let first = self.parse_segment();
        if first.is_empty() {
            return Err(self.error("Expected path segment"));
        }
        segments.push(PathSegment::Key(first));

        while !self.is_at_end() {
            if self.match_char('.') {
                let key = self.parse_segment();
                if key.is_empty() {
                    return Err(self.error("Expected identifier after '.'"));
                }
                segments.push(PathSegment::Key(key));
            } else if self.match_char('[') {
                self.skip_whitespace();
                let index = self.parse_expression()?;
                self.skip_whitespace();
                if !self.match_char(']') {
                    return Err(self.error("Expected ']' after index expression"));
                }
                segments.push(PathSegment::Index(Box::new(index)));
            } else {
                break;
            }
        }

        Ok(Expr::Path(segments))
    }

    pub fn parse_expression(&mut self) -> Result<Expr, EvalError> {
        self.skip_whitespace();

        match self.current_char() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                // Tentatively a function name; rewind and read a path if no '(' follows
                let start = self.position;
                let name = self.parse_function_name();
                if self.current_char() == Some('(') {
                    let args = self.parse_arguments()?;
                    return Ok(Expr::FunctionCall { name, args });
                }
                self.position = start;
                self.parse_path()
            }
            Some(ch) if ch.is_ascii_digit() => self.parse_number(),
            Some(ch) => Err(self.error(&format!("Unexpected character '{ch}'"))),
            None => Err(self.error("Unexpected end of expression")),
        }
    }

    /// Parses the whole input as one expression; only whitespace may follow it.
    pub fn parse(&mut self) -> Result<Expr, EvalError> {
        let expr = self.parse_expression()?;
        self.skip_whitespace();
        if !self.is_at_end() {
            return Err(self.error("Unexpected trailing input"));
        }
        Ok(expr)
    }
}

/// Parses expression text into an [`Expr`].
///
/// ```
/// use jsonexpr::parser::parse_expression;
///
/// let expr = parse_expression("max(a.b[0], 10)").unwrap();
/// assert_eq!(expr.to_string(), "max(a.b[0], 10)");
/// ```
pub fn parse_expression(input: &str) -> Result<Expr, EvalError> {
    Parser::new(input).parse()
}

#[test]
fn test_function_call_is_detected_before_path() {
    let expr = parse_expression("size(a)").unwrap();
    assert_eq!(
        expr,
        Expr::FunctionCall {
            name: "size".to_string(),
            args: vec![Expr::Path(vec![PathSegment::Key("a".to_string())])],
        }
    );
}

#[test]
fn test_identifier_without_paren_rewinds_to_path() {
    let expr = parse_expression("max.b").unwrap();
    assert_eq!(
        expr,
        Expr::Path(vec![
            PathSegment::Key("max".to_string()),
            PathSegment::Key("b".to_string()),
        ])
    );
}
