use std::collections::BTreeMap;

use crate::{
    error::ParseError,
    json::lexer::{Token, TokenKind},
    value::Value,
};

/// Recursive-descent parser over a lexed token stream.
///
/// Every `parse_*` method takes the index of the token to start at and
/// returns the parsed item together with the index of the first token after
/// it.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    source: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>, source: &'a str) -> Self {
        Parser { tokens, source }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Parses exactly one value spanning the whole token stream.
    pub fn parse(&self) -> Result<Value, ParseError> {
        let (value, next) = self.parse_value(0)?;
        if let Some(extra) = self.tokens.get(next) {
            return Err(ParseError::at_token("Unexpected trailing token", extra));
        }
        Ok(value)
    }

    /// Fails with an EOF error naming `context` when `index` is past the last token.
    fn token(&self, index: usize, context: &str) -> Result<&Token<'a>, ParseError> {
        self.tokens.get(index).ok_or_else(|| {
            ParseError::at(
                &format!("Unexpected EOF while parsing {context}"),
                self.source,
                self.source.len(),
            )
        })
    }

    pub fn parse_value(&self, index: usize) -> Result<(Value, usize), ParseError> {
        let token = self.token(index, "value")?;

        match token.kind {
            TokenKind::Number => {
                // Overflow to infinity is rejected too
                let n = token
                    .text
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| ParseError::at_token("Invalid number literal", token))?;
                Ok((Value::Number(n), index + 1))
            }
            TokenKind::Boolean => Ok((Value::Boolean(token.text == "true"), index + 1)),
            TokenKind::Null => Ok((Value::Null, index + 1)),
            TokenKind::String => Ok((Value::String(token.text.clone()), index + 1)),
            TokenKind::Syntax if token.is_syntax('[') => {
                let (elements, next) = self.parse_array(index + 1)?;
                Ok((Value::Array(elements), next))
            }
            TokenKind::Syntax if token.is_syntax('{') => {
                let (members, next) = self.parse_object(index + 1)?;
                Ok((Value::Object(members), next))
            }
            TokenKind::Syntax => Err(ParseError::at_token("Failed to parse", token)),
        }
    }

    /// Parses array elements starting right after the opening `[`.
    pub fn parse_array(&self, mut index: usize) -> Result<(Vec<Value>, usize), ParseError> {
        let mut elements = Vec::new();

        loop {
            let token = self.token(index, "array")?;

            if token.is_syntax(']') {
                return Ok((elements, index + 1));
            }

            if !elements.is_empty() {
                if !token.is_syntax(',') {
                    return Err(ParseError::at_token(
                        "Expected comma after element in array",
                        token,
                    ));
                }
                index += 1;
                self.token(index, "array")?;
            }

            let (element, next) = self.parse_value(index)?;
            elements.push(element);
            index = next;
        }
    }

    /// Parses object members starting right after the opening `{`.
    ///
    /// A repeated key replaces the earlier value.
    pub fn parse_object(
        &self,
        mut index: usize,
    ) -> Result<(BTreeMap<String, Value>, usize), ParseError> {
        let mut members = BTreeMap::new();
        let mut first = true;

        loop {
            let token = self.token(index, "object")?;

            if token.is_syntax('}') {
                return Ok((members, index + 1));
            }

            if !first {
                if !token.is_syntax(',') {
                    return Err(ParseError::at_token(
                        "Expected comma after element in object",
                        token,
                    ));
                }
                index += 1;
            }
            first = false;

            let key_token = self.token(index, "object")?;
            let (key, next) = self.parse_value(index)?;
            let Value::String(key) = key else {
                return Err(ParseError::at_token("Expected string key in object", key_token));
            };
            index = next;

            let colon = self.token(index, "object")?;
            if !colon.is_syntax(':') {
                return Err(ParseError::at_token("Expected colon after key in object", colon));
            }
            index += 1;

            self.token(index, "object")?;
            let (value, next) = self.parse_value(index)?;
            index = next;

            if members.insert(key.clone(), value).is_some() {
                log::debug!("duplicate key '{}' in object, keeping the last value", key);
            }
        }
    }
}
