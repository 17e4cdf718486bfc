use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// Category of a lexed [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Number,
    /// One of `[ ] { } : ,`
    Syntax,
    Boolean,
    Null,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Syntax => "Syntax",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
        };
        f.write_str(name)
    }
}

/// A lexical unit of a JSON document.
///
/// Tokens borrow the complete source text so later stages can report errors
/// with line and column information.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// Token text. For strings this is the decoded content without quotes.
    pub text: String,
    pub kind: TokenKind,
    /// Byte offset of the first character of the token.
    pub offset: usize,
    pub source: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(text: impl Into<String>, kind: TokenKind, offset: usize, source: &'a str) -> Self {
        Token {
            text: text.into(),
            kind,
            offset,
            source,
        }
    }

    /// True for a syntax token with exactly the character `c`.
    pub fn is_syntax(&self, c: char) -> bool {
        self.kind == TokenKind::Syntax && self.text.len() == 1 && self.text.starts_with(c)
    }
}

/// Outcome of a single recognizer: `Ok(None)` when it does not apply at the
/// position, otherwise the token and the position right after it.
type Recognized<'a> = Result<Option<(Token<'a>, usize)>, ParseError>;

type Recognizer = for<'a> fn(&'a str, usize) -> Recognized<'a>;

/// Tried in order at every position; the first one that advances wins.
const RECOGNIZERS: [Recognizer; 6] = [
    lex_syntax,
    lex_string,
    lex_number,
    lex_null,
    lex_true,
    lex_false,
];

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]*(?:\.[0-9]*)?(?:[eE][+-]?[0-9]*)?").expect("number pattern is valid")
});

pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            position: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.position..];
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.position += rest.len() - trimmed.len();
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, ParseError> {
        self.skip_whitespace();

        if self.position >= self.source.len() {
            return Ok(None);
        }

        for recognize in RECOGNIZERS {
            if let Some((token, next)) = recognize(self.source, self.position)?
                && next > self.position
            {
                self.position = next;
                return Ok(Some(token));
            }
        }

        Err(ParseError::at("Unable to lex", self.source, self.position))
    }

    /// Lexes the remaining input into a vector of tokens.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        log::trace!("lexed {} tokens from {} bytes", tokens.len(), self.source.len());
        Ok(tokens)
    }
}

/// Splits `source` into tokens, stopping at the first lexical error.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    Lexer::new(source).tokenize()
}

fn lex_syntax(source: &str, start: usize) -> Recognized<'_> {
    match source[start..].chars().next() {
        Some(c @ ('[' | ']' | '{' | '}' | ':' | ',')) => Ok(Some((
            Token::new(c, TokenKind::Syntax, start, source),
            start + 1,
        ))),
        _ => Ok(None),
    }
}

fn lex_string(source: &str, start: usize) -> Recognized<'_> {
    let rest = &source[start..];
    if !rest.starts_with('"') {
        return Ok(None);
    }

    let mut text = String::new();
    let mut chars = rest.char_indices().skip(1);

    while let Some((i, c)) = chars.next() {
        let at = start + i;
        match c {
            '"' => {
                return Ok(Some((
                    Token::new(text, TokenKind::String, start, source),
                    at + 1,
                )));
            }
            '\\' => {
                let Some((j, escaped)) = chars.next() else {
                    return Err(ParseError::at("Unexpected EOF after backslash", source, at));
                };
                match escaped {
                    '"' => text.push('"'),
                    '\\' => text.push('\\'),
                    '/' => text.push('/'),
                    'b' => text.push('\u{8}'),
                    'f' => text.push('\u{c}'),
                    'n' => text.push('\n'),
                    'r' => text.push('\r'),
                    't' => text.push('\t'),
                    'u' => {
                        let digits: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                        if digits.chars().count() < 4 {
                            return Err(ParseError::at(
                                "Incomplete unicode escape sequence",
                                source,
                                start + j,
                            ));
                        }
                        if let Some(decoded) = decode_unicode_escape(&digits) {
                            text.push(decoded);
                        }
                    }
                    _ => {
                        return Err(ParseError::at("Invalid escape sequence", source, start + j));
                    }
                }
            }
            c => text.push(c),
        }
    }

    Err(ParseError::at("Unterminated string", source, source.len()))
}

/// Decodes the four characters following `\u`. Anything that is not four hex
/// digits naming a scalar value (including lone surrogates) is dropped.
fn decode_unicode_escape(digits: &str) -> Option<char> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

fn lex_number(source: &str, start: usize) -> Recognized<'_> {
    let Some(m) = NUMBER.find(&source[start..]) else {
        return Ok(None);
    };
    let text = m.as_str();
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    Ok(Some((
        Token::new(text, TokenKind::Number, start, source),
        start + text.len(),
    )))
}

fn lex_keyword<'a>(
    source: &'a str,
    start: usize,
    keyword: &str,
    kind: TokenKind,
) -> Recognized<'a> {
    if source[start..].starts_with(keyword) {
        Ok(Some((
            Token::new(keyword, kind, start, source),
            start + keyword.len(),
        )))
    } else {
        Ok(None)
    }
}

fn lex_null(source: &str, start: usize) -> Recognized<'_> {
    lex_keyword(source, start, "null", TokenKind::Null)
}

fn lex_true(source: &str, start: usize) -> Recognized<'_> {
    lex_keyword(source, start, "true", TokenKind::Boolean)
}

fn lex_false(source: &str, start: usize) -> Recognized<'_> {
    lex_keyword(source, start, "false", TokenKind::Boolean)
}

#[test]
fn test_keywords() {
    let tokens = lex("null true false").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Null, TokenKind::Boolean, TokenKind::Boolean]);
    assert_eq!(tokens[1].text, "true");
    assert_eq!(tokens[2].offset, 10);
}

#[test]
fn test_structure() {
    let tokens = lex(r#"{"a": [1, -2.5e3]}"#).unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["{", "a", ":", "[", "1", ",", "-2.5e3", "]", "}"]);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[6].kind, TokenKind::Number);
    assert!(tokens[0].is_syntax('{'));
}
