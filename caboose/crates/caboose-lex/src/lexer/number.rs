//! Number literal lexing.
//!
//! Numbers are matched by pattern only. Whatever does not fit the pattern is
//! left on the stream for the next call.

use crate::lexer::Mode;
use crate::stream::CharStream;
use crate::style::Style;
use crate::unicode::is_octal_digit;

impl Mode {
    /// Lexes the rest of a number literal whose first character is `first`.
    ///
    /// # Number Formats
    ///
    /// - Leading dot: `.5`, `.5e3`
    /// - Hexadecimal: `0x1F`, `0XFF`
    /// - Octal: `017`
    /// - Decimal: `42`, `3.14`, `2e10`, `1.5E-3`, `7.`
    ///
    /// A leading `0` is never decimal: `0.5` stops after the `0` and leaves
    /// `.5` for the next token.
    pub(crate) fn token_number<S: CharStream>(&self, stream: &mut S, first: char) -> Style {
        match first {
            '.' => {
                stream.eat_match(|rest| {
                    let digits = digits_len(rest, |c| c.is_ascii_digit());
                    (digits > 0).then(|| digits + exponent_len(&rest[digits..]))
                });
            },
            '0' => {
                let _ = stream.eat_match(hex_len) || stream.eat_match(octal_len);
            },
            _ => {
                stream.eat_match(|rest| Some(decimal_len(rest)));
            },
        }
        Style::Number
    }
}

/// Byte length of the leading run of ASCII characters matching `pred`.
fn digits_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.chars().take_while(|&c| pred(c)).count()
}

/// Matches `[eE][+-]?[0-9]+`, or nothing.
fn exponent_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = digits_len(&text[1 + sign..], |c| c.is_ascii_digit());
    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

/// Matches `[xX][0-9a-fA-F]+` after the leading zero.
fn hex_len(text: &str) -> Option<usize> {
    let rest = text.strip_prefix(['x', 'X'])?;
    let digits = digits_len(rest, |c| c.is_ascii_hexdigit());
    (digits > 0).then_some(1 + digits)
}

/// Matches `[0-7]+` after the leading zero.
fn octal_len(text: &str) -> Option<usize> {
    let digits = digits_len(text, is_octal_digit);
    (digits > 0).then_some(digits)
}

/// Matches `[0-9]*\.?[0-9]*` plus an optional exponent after the first digit.
fn decimal_len(text: &str) -> usize {
    let mut len = digits_len(text, |c| c.is_ascii_digit());
    if text[len..].starts_with('.') {
        len += 1;
        len += digits_len(&text[len..], |c| c.is_ascii_digit());
    }
    len + exponent_len(&text[len..])
}
