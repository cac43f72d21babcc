//! Character streams over a single line of source text.
//!
//! The tokenizer never owns the text it classifies. The host hands it a
//! [`CharStream`] positioned somewhere inside one line and the tokenizer
//! consumes characters from it. [`LineStream`] is the stock implementation
//! used by the highlighter and the tests.

/// The host side of the tokenizer contract.
///
/// Implementors only provide cursor access to the remaining text of the line
/// and the column queries; everything else has a default implementation in
/// terms of those.
pub trait CharStream {
    /// Text from the cursor to the end of the line.
    fn rest(&self) -> &str;

    /// Text of the current token, from the token start to the cursor.
    fn current(&self) -> &str;

    /// Moves the cursor forward by `len` bytes.
    ///
    /// `len` must not exceed `rest().len()` and must land on a char boundary.
    fn advance_by(&mut self, len: usize);

    /// Returns true if the cursor is at the first character of the line.
    fn sol(&self) -> bool;

    /// Screen column where the current token starts.
    fn column(&self) -> usize;

    /// Screen width of the line's leading whitespace.
    fn indentation(&self) -> usize;

    /// Returns true if no characters remain on the line.
    fn eol(&self) -> bool {
        self.rest().is_empty()
    }

    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character, or `None` at end of line.
    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.advance_by(c.len_utf8());
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance_by(expected.len_utf8());
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds. Returns true if any were eaten.
    fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> bool {
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest().len(), |(i, _)| i);
        self.advance_by(len);
        len > 0
    }

    /// Consumes a run of whitespace. Returns true if any was eaten.
    fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Consumes the rest of the line.
    fn skip_to_end(&mut self) {
        let len = self.rest().len();
        self.advance_by(len);
    }

    /// Attempts a pattern match at the cursor.
    ///
    /// `matcher` receives the rest of the line and returns the byte length of
    /// the match, or `None` on mismatch. The match is consumed only when it is
    /// non-empty.
    fn eat_match(&mut self, matcher: impl FnOnce(&str) -> Option<usize>) -> bool {
        match matcher(self.rest()) {
            Some(len) if len > 0 => {
                self.advance_by(len);
                true
            },
            _ => false,
        }
    }
}

/// A [`CharStream`] over one line of text.
///
/// Columns are screen columns: characters count one each, tabs advance to
/// the next multiple of the tab size.
///
/// # Example
///
/// ```
/// use caboose_lex::stream::{CharStream, LineStream};
///
/// let mut stream = LineStream::new("\tvar x", 4);
/// assert_eq!(stream.indentation(), 4);
/// stream.eat_space();
/// stream.start_token();
/// assert_eq!(stream.column(), 4);
/// assert_eq!(stream.next_char(), Some('v'));
/// ```
#[derive(Debug, Clone)]
pub struct LineStream<'a> {
    line: &'a str,
    /// Byte offset of the cursor.
    pos: usize,
    /// Byte offset where the current token starts.
    start: usize,
    tab_size: usize,
}

impl<'a> LineStream<'a> {
    /// Creates a stream at the start of `line`.
    ///
    /// A `tab_size` of zero is treated as one.
    pub fn new(line: &'a str, tab_size: usize) -> Self {
        Self {
            line,
            pos: 0,
            start: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// Marks the cursor as the start of the next token.
    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    /// Byte offset of the cursor within the line.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset of the current token start within the line.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The whole line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    fn count_column(&self, end: usize) -> usize {
        count_column(&self.line[..end], self.tab_size)
    }
}

impl CharStream for LineStream<'_> {
    fn rest(&self) -> &str {
        &self.line[self.pos..]
    }

    fn current(&self) -> &str {
        &self.line[self.start..self.pos]
    }

    fn advance_by(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.line.len());
    }

    fn sol(&self) -> bool {
        self.pos == 0
    }

    fn column(&self) -> usize {
        self.count_column(self.start)
    }

    fn indentation(&self) -> usize {
        let end = self
            .line
            .char_indices()
            .find(|&(_, c)| !c.is_whitespace())
            .map_or(self.line.len(), |(i, _)| i);
        self.count_column(end)
    }
}

/// Screen width of `text`, expanding tabs to multiples of `tab_size`.
pub fn count_column(text: &str, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    text.chars().fold(0, |col, c| {
        if c == '\t' {
            col + tab_size - col % tab_size
        } else {
            col + 1
        }
    })
}
