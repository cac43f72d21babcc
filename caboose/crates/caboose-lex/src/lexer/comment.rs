//! Comment lexing.
//!
//! Line comments end with their line. Block comments may span any number of
//! lines; the state keeps the comment tokenizer active until `*/` is seen.

use crate::lexer::core::enter;
use crate::lexer::Mode;
use crate::state::{LexerState, Tokenize};
use crate::stream::CharStream;
use crate::style::Style;

impl Mode {
    /// Continues a block comment up to and including `*/`, or to the end of
    /// the line.
    ///
    /// Block comments do not nest. The `*` of the terminator has to be seen
    /// by the same call as the `/`.
    pub(crate) fn token_comment<S: CharStream>(&self, stream: &mut S, state: &mut LexerState) -> Style {
        let mut maybe_end = false;
        while let Some(c) = stream.next_char() {
            if c == '/' && maybe_end {
                enter(state, Tokenize::Base);
                break;
            }
            maybe_end = c == '*';
        }
        Style::Comment
    }

    /// Skips the rest of a `//` comment.
    pub(crate) fn token_line_comment<S: CharStream>(&self, stream: &mut S) -> Style {
        stream.skip_to_end();
        Style::Comment
    }
}
