//! Line/column error messages with a caret pointing at the offending column.
//!
//! Used by the JSON lexer and parser to turn a byte offset into something a
//! human can act on:
//!
//! ```text
//! Unable to lex at line 2, column 4
//!   "a": nope
//!        ^
//! ```

use crate::json::lexer::Token;

/// Formats `message` with the line, column and text of the line containing
/// `offset` in `source`, followed by a caret under the error column.
///
/// Tabs in the line are reproduced in the alignment string so the caret lines
/// up regardless of the terminal's tab width. Columns count characters, and
/// offsets past the end of `source` are clamped to its length.
pub fn format_error(message: &str, source: &str, offset: usize) -> String {
    let offset = clamp_to_boundary(source, offset);

    let mut line = 1;
    let mut column = 0;
    let mut line_start = 0;
    let mut alignment = String::new();

    for (i, c) in source[..offset].char_indices() {
        match c {
            '\n' => {
                line += 1;
                column = 0;
                line_start = i + 1;
                alignment.clear();
            }
            '\t' => {
                column += 1;
                alignment.push('\t');
            }
            _ => {
                column += 1;
                alignment.push(' ');
            }
        }
    }

    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    let line_text = &source[line_start..line_end];

    format!("{message} at line {line}, column {column}\n{line_text}\n{alignment}^")
}

/// Like [`format_error`], positioned at `token` and prefixed with the token's
/// text and kind.
pub fn format_token_error(message: &str, token: &Token<'_>) -> String {
    let context = format!(
        "Unexpected token '{}' ({}): {}",
        token.text, token.kind, message
    );
    format_error(&context, token.source, token.offset)
}

fn clamp_to_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let msg = format_error("Bad thing", "abc def", 4);
        assert_eq!(msg, "Bad thing at line 1, column 4\nabc def\n    ^");
    }

    #[test]
    fn test_later_line_resets_column() {
        let source = "[\n  1,\n  x\n]";
        let offset = source.find('x').unwrap();
        let msg = format_error("Unable to lex", source, offset);
        assert_eq!(msg, "Unable to lex at line 3, column 2\n  x\n  ^");
    }

    #[test]
    fn test_tabs_are_preserved_in_alignment() {
        let source = "\t\tx";
        let msg = format_error("Oops", source, 2);
        assert_eq!(msg, "Oops at line 1, column 2\n\t\tx\n\t\t^");
    }

    #[test]
    fn test_offset_at_end_of_input() {
        let msg = format_error("Unterminated string", "\"abc", 4);
        assert_eq!(msg, "Unterminated string at line 1, column 4\n\"abc\n    ^");
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let msg = format_error("Oops", "ab", 100);
        assert_eq!(msg, "Oops at line 1, column 2\nab\n  ^");
    }

    #[test]
    fn test_multibyte_characters_count_as_one_column() {
        let source = "\"é\" x";
        let offset = source.find('x').unwrap();
        let msg = format_error("Oops", source, offset);
        assert!(msg.starts_with("Oops at line 1, column 4\n"));
        assert!(msg.ends_with("\n    ^"));
    }
}
