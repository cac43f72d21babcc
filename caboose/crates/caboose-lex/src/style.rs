//! Token styles.
//!
//! A style is the classification attached to a token. Punctuation and blank
//! space carry no style at all, which the tokenizer reports as `None`.

use std::fmt;

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Reserved word, e.g. `fun`, `while`.
    Keyword,
    /// Built-in literal value or function, e.g. `true`, `print`.
    Atom,
    /// Numeric literal.
    Number,
    /// Run of operator characters.
    Operator,
    /// String literal, or a piece of one.
    String,
    /// Line or block comment, or a piece of one.
    Comment,
    /// Any other name.
    Variable,
}

impl Style {
    /// All styles, in declaration order.
    pub const ALL: [Style; 7] = [
        Style::Keyword,
        Style::Atom,
        Style::Number,
        Style::Operator,
        Style::String,
        Style::Comment,
        Style::Variable,
    ];

    /// The class name hosts use to look the style up in a theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Keyword => "keyword",
            Style::Atom => "atom",
            Style::Number => "number",
            Style::Operator => "operator",
            Style::String => "string",
            Style::Comment => "comment",
            Style::Variable => "variable",
        }
    }

    /// Looks a style up by its class name.
    pub fn from_name(name: &str) -> Option<Style> {
        Style::ALL.into_iter().find(|style| style.as_str() == name)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
