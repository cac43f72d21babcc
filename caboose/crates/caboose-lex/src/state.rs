//! Resumable lexer state.
//!
//! A [`LexerState`] is everything the tokenizer carries from one call to the
//! next: which sub-tokenizer is active, the context stack, and the
//! indentation of the current line. Hosts keep one per buffer and may clone
//! it at line boundaries to resume highlighting from any line.

use crate::context::{Context, ContextStack};

/// A string delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `"`
    Double,
    /// `'`
    Single,
    /// `` ` ``
    Backtick,
}

impl Quote {
    /// Maps a delimiter character to its quote kind.
    pub fn from_char(c: char) -> Option<Quote> {
        match c {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            '`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    /// The delimiter character.
    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
            Quote::Backtick => '`',
        }
    }

    /// Whether a backslash escapes the next character inside the literal.
    pub fn has_escapes(self) -> bool {
        self != Quote::Backtick
    }

    /// Whether an unclosed literal carries on to the next line.
    pub fn spans_lines(self) -> bool {
        self == Quote::Backtick
    }
}

/// Which tokenizer consumes the next characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenize {
    /// Ordinary tokens.
    #[default]
    Base,
    /// Inside a string literal opened by the given quote.
    InString(Quote),
    /// Inside a `/* ... */` block comment.
    InComment,
}

/// The state threaded through consecutive tokenizer calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerState {
    pub(crate) tokenize: Tokenize,
    pub(crate) context: ContextStack,
    pub(crate) indented: i32,
    pub(crate) start_of_line: bool,
}

impl LexerState {
    pub(crate) fn new(root: Context) -> Self {
        Self {
            tokenize: Tokenize::Base,
            context: ContextStack::new(root),
            indented: 0,
            start_of_line: true,
        }
    }

    /// The active tokenizer.
    pub fn tokenize(&self) -> Tokenize {
        self.tokenize
    }

    /// The context stack.
    pub fn context(&self) -> &ContextStack {
        &self.context
    }

    /// Indentation of the line being tokenized.
    pub fn indented(&self) -> i32 {
        self.indented
    }

    /// True until the first token of the current line has been classified.
    pub fn is_start_of_line(&self) -> bool {
        self.start_of_line
    }
}
