//! Operator and punctuation lexing.
//!
//! Punctuation is never styled. It is reported to the driver as a [`Punct`]
//! so that brackets can open and close contexts.

use crate::context::ContextKind;
use crate::lexer::Mode;
use crate::stream::CharStream;
use crate::style::Style;
use crate::unicode::is_operator_char;

/// Structurally significant punctuation produced by the base tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// A `case` or `default` keyword.
    CaseLabel,
}

impl Punct {
    /// Maps a punctuation character to its `Punct`.
    pub fn from_char(c: char) -> Option<Punct> {
        Some(match c {
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            '[' => Punct::LBracket,
            ']' => Punct::RBracket,
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            ',' => Punct::Comma,
            ';' => Punct::Semicolon,
            ':' => Punct::Colon,
            '.' => Punct::Dot,
            _ => return None,
        })
    }

    /// Returns true if this punctuation closes a context of `kind`.
    pub fn closes(self, kind: ContextKind) -> bool {
        matches!(
            (self, kind),
            (Punct::RBrace, ContextKind::Brace)
                | (Punct::RBracket, ContextKind::Bracket)
                | (Punct::RParen, ContextKind::Paren)
        )
    }
}

impl Mode {
    /// Lexes a run of operator characters starting with `first`.
    ///
    /// Returns `None` without consuming anything if `first` is not an
    /// operator character.
    pub(crate) fn token_operator<S: CharStream>(&self, stream: &mut S, first: char) -> Option<Style> {
        if !is_operator_char(first) {
            return None;
        }
        stream.eat_while(is_operator_char);
        Some(Style::Operator)
    }
}
