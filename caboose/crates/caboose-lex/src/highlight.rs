//! A reference host loop.
//!
//! Editors drive a mode line by line: ask for the line's indentation, then
//! mark a token start and call the tokenizer until the line is used up.
//! [`Highlighter`] does exactly that and records the result, which makes it
//! the natural harness for command-line tools and tests.

use std::ops::Range;

use tracing::debug;

use crate::lexer::Mode;
use crate::state::LexerState;
use crate::stream::{CharStream, LineStream};
use crate::style::Style;

/// One token of a highlighted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte range within the line.
    pub range: Range<usize>,
    /// Style of the token; `None` for blank space and punctuation.
    pub style: Option<Style>,
}

/// The tokenizer output for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine {
    /// Indentation the mode suggested for the line before tokenizing it.
    pub indent: Option<i32>,
    /// The line's tokens, covering it from start to end without gaps.
    pub spans: Vec<Span>,
}

impl HighlightedLine {
    /// Pairs each span with its text. `line` must be the highlighted line.
    pub fn tokens<'a>(&'a self, line: &'a str) -> impl Iterator<Item = (&'a str, Option<Style>)> + 'a {
        self.spans
            .iter()
            .map(move |span| (&line[span.range.clone()], span.style))
    }
}

/// Drives a [`Mode`] over consecutive lines of one buffer.
#[derive(Debug, Clone)]
pub struct Highlighter<'m> {
    mode: &'m Mode,
    state: LexerState,
}

impl<'m> Highlighter<'m> {
    /// Starts a buffer at column 0.
    pub fn new(mode: &'m Mode) -> Self {
        Self::with_state(mode, mode.start_state(0))
    }

    /// Resumes from a saved state, e.g. one cloned at an earlier line end.
    pub fn with_state(mode: &'m Mode, state: LexerState) -> Self {
        Self { mode, state }
    }

    /// The state after the last line fed in.
    pub fn state(&self) -> &LexerState {
        &self.state
    }

    /// Consumes the highlighter, returning its state.
    pub fn into_state(self) -> LexerState {
        self.state
    }

    /// Highlights the next line of the buffer.
    pub fn line(&mut self, text: &str) -> HighlightedLine {
        let indent = self.mode.indent(&self.state, text);
        let mut stream = LineStream::new(text, self.mode.tab_size());
        let mut spans = Vec::new();

        while !stream.eol() {
            stream.start_token();
            let style = self.mode.token(&mut stream, &mut self.state);
            if stream.position() == stream.start() {
                debug!(column = stream.start(), "tokenizer made no progress, skipping a character");
                stream.next_char();
            }
            spans.push(Span {
                range: stream.start()..stream.position(),
                style,
            });
        }

        HighlightedLine { indent, spans }
    }
}

/// Highlights every line of `text` from a fresh state.
pub fn highlight_lines(mode: &Mode, text: &str) -> Vec<HighlightedLine> {
    let mut highlighter = Highlighter::new(mode);
    text.lines().map(|line| highlighter.line(line)).collect()
}

/// Re-indents every line of `text` with the mode's suggestions.
///
/// Each line is rewritten before it is tokenized, so later suggestions build
/// on the corrected indentation. Lines the mode has no opinion on (inside a
/// block comment or multi-line string) keep their text, and blank lines
/// become empty. The result ends with a newline when `text` does.
pub fn reindent(mode: &Mode, text: &str) -> String {
    let mut highlighter = Highlighter::new(mode);
    let mut out = String::with_capacity(text.len());

    for line in text.lines() {
        let content = line.trim_start();
        let rewritten = match mode.indent(highlighter.state(), content) {
            _ if content.is_empty() => String::new(),
            Some(column) => format!("{}{}", " ".repeat(column.max(0) as usize), content),
            None => line.to_string(),
        };
        highlighter.line(&rewritten);
        out.push_str(&rewritten);
        out.push('\n');
    }

    if !text.ends_with('\n') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(mode: &Mode, text: &str) -> Vec<Vec<(String, Option<Style>)>> {
        highlight_lines(mode, text)
            .iter()
            .zip(text.lines())
            .map(|(line, src)| {
                line.tokens(src)
                    .map(|(t, s)| (t.to_string(), s))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_spans_cover_line() {
        let mode = Mode::default();
        let text = "  fun add(a, b) { return a + b; } // sum";
        let lines = highlight_lines(&mode, text);
        let mut end = 0;
        for span in &lines[0].spans {
            assert_eq!(span.range.start, end);
            assert!(span.range.end > span.range.start);
            end = span.range.end;
        }
        assert_eq!(end, text.len());
    }

    #[test]
    fn test_indent_suggestions() {
        let mode = Mode::default();
        let text = "if (x) {\n  y;\n}";
        let indents: Vec<_> = highlight_lines(&mode, text).iter().map(|l| l.indent).collect();
        assert_eq!(indents, vec![Some(0), Some(2), Some(0)]);
    }

    #[test]
    fn test_multiline_backtick() {
        let mode = Mode::default();
        let lines = tokens(&mode, "var s = `multi\nline`;");
        assert_eq!(lines[0].last(), Some(&("`multi".to_string(), Some(Style::String))));
        assert_eq!(lines[1][0], ("line`".to_string(), Some(Style::String)));
        assert_eq!(lines[1][1], (";".to_string(), None));
    }

    #[test]
    fn test_resume_from_state() {
        let mode = Mode::default();
        let mut highlighter = Highlighter::new(&mode);
        highlighter.line("fun f() {");
        let saved = highlighter.state().clone();

        let mut resumed = Highlighter::with_state(&mode, saved);
        assert_eq!(resumed.line("x;"), highlighter.line("x;"));
        assert_eq!(resumed.into_state(), highlighter.into_state());
    }

    #[test]
    fn test_reindent_nested_blocks() {
        let mode = Mode::default();
        let source = "fun f(a) {\nif (a) {\nprint(a);\n}\nreturn a;\n}\n";
        assert_eq!(
            reindent(&mode, source),
            "fun f(a) {\n  if (a) {\n    print(a);\n  }\n  return a;\n}\n"
        );
    }

    #[test]
    fn test_reindent_keeps_comment_body() {
        let mode = Mode::default();
        let source = "{\n/*\n      keep\n*/\nx\n}";
        assert_eq!(reindent(&mode, source), "{\n  /*\n      keep\n*/\n  x\n}");
    }

    #[test]
    fn test_reindent_is_stable() {
        let mode = Mode::default();
        let once = reindent(&mode, "var xs = [\n1,\n2\n]\nprint(xs,\nxs)");
        assert_eq!(reindent(&mode, &once), once);
    }

    #[test]
    fn test_blank_lines() {
        let mode = Mode::default();
        let lines = highlight_lines(&mode, "{\n\n  x\n}");
        assert!(lines[1].spans.is_empty());
        assert_eq!(lines[1].indent, Some(2));
        assert_eq!(lines[3].indent, Some(0));
    }
}
