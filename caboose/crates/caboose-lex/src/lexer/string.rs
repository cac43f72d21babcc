//! String literal lexing.
//!
//! A string may take several calls to consume: each call eats up to the
//! closing quote or the end of the line, and the state remembers which quote
//! is still open.

use crate::lexer::core::enter;
use crate::lexer::Mode;
use crate::state::{LexerState, Quote, Tokenize};
use crate::stream::CharStream;
use crate::style::Style;

impl Mode {
    /// Continues a string literal opened by `quote`.
    ///
    /// Consumes through the closing quote, or to the end of the line. An
    /// unclosed `"` or `'` literal ends with its line unless the line ends in
    /// an escaping backslash; a back-tick literal stays open until its closing
    /// back-tick.
    pub(crate) fn token_string<S: CharStream>(
        &self,
        stream: &mut S,
        state: &mut LexerState,
        quote: Quote,
    ) -> Style {
        let delimiter = quote.as_char();
        let mut escaped = false;
        let mut closed = false;

        while let Some(c) = stream.next_char() {
            if c == delimiter && !escaped {
                closed = true;
                break;
            }
            escaped = !escaped && quote.has_escapes() && c == '\\';
        }

        if closed || !(escaped || quote.spans_lines()) {
            enter(state, Tokenize::Base);
        }
        Style::String
    }
}
