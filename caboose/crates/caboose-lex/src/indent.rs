//! Indentation suggestions.
//!
//! The suggestion for a line depends on the innermost context left by the
//! lines before it and on the first characters of the line itself.

use crate::context::ContextKind;
use crate::lexer::Mode;
use crate::state::{LexerState, Tokenize};
use crate::unicode::is_word_char;
use crate::vocabulary::CASE_LABELS;

impl Mode {
    /// Suggests the indentation column for the next line.
    ///
    /// `text_after` is the text of that line; leading whitespace is ignored.
    /// Returns `None` when the mode has no opinion, which is the case while a
    /// string or block comment is still open. The state is not modified, so
    /// repeated queries agree.
    ///
    /// # Example
    ///
    /// ```
    /// use caboose_lex::stream::{CharStream, LineStream};
    /// use caboose_lex::Mode;
    ///
    /// let mode = Mode::default();
    /// let mut state = mode.start_state(0);
    /// let mut stream = LineStream::new("while (x) {", mode.tab_size());
    /// while !stream.eol() {
    ///     stream.start_token();
    ///     mode.token(&mut stream, &mut state);
    /// }
    /// assert_eq!(mode.indent(&state, "print(x);"), Some(2));
    /// assert_eq!(mode.indent(&state, "}"), Some(0));
    ///
    /// // `(` opens at column 5 with `a` beside it, so the context is aligned.
    /// let mut state = mode.start_state(0);
    /// let mut stream = LineStream::new("print(a,", mode.tab_size());
    /// while !stream.eol() {
    ///     stream.start_token();
    ///     mode.token(&mut stream, &mut state);
    /// }
    /// assert_eq!(mode.indent(&state, "b)"), Some(7));
    /// assert_eq!(mode.indent(&state, ")"), Some(5));
    /// ```
    pub fn indent(&self, state: &LexerState, text_after: &str) -> Option<i32> {
        if state.tokenize != Tokenize::Base {
            return None;
        }
        let context = state.context.top();
        let text_after = text_after.trim_start();

        if context.kind == ContextKind::Case && starts_with_label(text_after) {
            return Some(context.indented);
        }

        let closing = context.kind.closing_char().is_some_and(|c| text_after.starts_with(c));
        let column = match (context.align.is_aligned(), closing) {
            (true, true) => context.column,
            (true, false) => context.column + self.indent_unit(),
            (false, true) => context.indented,
            (false, false) => context.indented + self.indent_unit(),
        };
        Some(column)
    }
}

/// Matches `^(?:case|default)\b`.
fn starts_with_label(text: &str) -> bool {
    CASE_LABELS.iter().any(|&label| {
        text.strip_prefix(label)
            .is_some_and(|rest| !rest.starts_with(is_word_char))
    })
}
