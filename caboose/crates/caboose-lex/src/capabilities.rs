//! Static editor capabilities.
//!
//! These are declarations the host reads once: which typed characters should
//! trigger a re-indent, which pairs auto-close, and the comment and fold
//! delimiters. The tokenizer itself does not consult them.

/// Fixed editor capabilities of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Typing one of these characters re-indents the line.
    pub electric_chars: &'static str,
    /// Auto-closing pairs, as consecutive open/close characters.
    pub close_brackets: &'static str,
    /// Folding strategy name.
    pub fold: &'static str,
    /// Block comment opener.
    pub block_comment_start: &'static str,
    /// Block comment terminator.
    pub block_comment_end: &'static str,
    /// Line comment prefix.
    pub line_comment: &'static str,
}

/// Capabilities of the Caboose mode.
pub const CABOOSE: Capabilities = Capabilities {
    electric_chars: "{}):",
    close_brackets: "()[]{}''\"\"``",
    fold: "brace",
    block_comment_start: "/*",
    block_comment_end: "*/",
    line_comment: "//",
};

impl Capabilities {
    /// Returns true if typing `c` should trigger a re-indent.
    pub fn is_electric(&self, c: char) -> bool {
        self.electric_chars.contains(c)
    }

    /// Iterates over the auto-closing (open, close) pairs.
    pub fn bracket_pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        let mut chars = self.close_brackets.chars();
        std::iter::from_fn(move || Some((chars.next()?, chars.next()?)))
    }

    /// The character that auto-closes `open`, if any.
    pub fn closing_pair(&self, open: char) -> Option<char> {
        self.bracket_pairs()
            .find(|&(o, _)| o == open)
            .map(|(_, close)| close)
    }

    /// Wraps `text` in a block comment.
    pub fn wrap_block_comment(&self, text: &str) -> String {
        format!("{} {} {}", self.block_comment_start, text, self.block_comment_end)
    }

    /// Prefixes `text` with the line comment marker.
    pub fn prefix_line_comment(&self, text: &str) -> String {
        format!("{} {}", self.line_comment, text)
    }
}
