//! Core tokenizer implementation.
//!
//! This module contains the `Mode` struct, the per-call driver and the
//! context stack bookkeeping that runs after every classified token.

use std::sync::Arc;

use tracing::trace;

use crate::capabilities::{Capabilities, CABOOSE};
use crate::config::ModeConfig;
use crate::context::{Align, Context, ContextKind};
use crate::error::Result;
use crate::lexer::operator::Punct;
use crate::state::{LexerState, Quote, Tokenize};
use crate::stream::CharStream;
use crate::style::Style;
use crate::vocabulary::Vocabulary;

/// The outcome of one base tokenizer step.
///
/// Besides the style, the base tokenizer reports the punctuation it just
/// consumed so the driver can update the context stack in the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Scan {
    pub style: Option<Style>,
    pub punct: Option<Punct>,
}

impl Scan {
    pub fn styled(style: Style) -> Self {
        Self {
            style: Some(style),
            punct: None,
        }
    }

    pub fn punct(punct: Punct) -> Self {
        Self {
            style: None,
            punct: Some(punct),
        }
    }
}

/// The Caboose editor mode.
///
/// A `Mode` holds everything that stays fixed while a buffer is edited: the
/// indent unit, the tab size and the classification tables. It is cheap to
/// clone and can be shared between threads; all per-buffer data lives in
/// [`LexerState`].
///
/// # Example
///
/// ```
/// use caboose_lex::stream::{CharStream, LineStream};
/// use caboose_lex::{Mode, Style};
///
/// let mode = Mode::default();
/// let mut state = mode.start_state(0);
/// let mut stream = LineStream::new("var x = 42;", mode.tab_size());
///
/// let mut styles = Vec::new();
/// while !stream.eol() {
///     stream.start_token();
///     styles.push(mode.token(&mut stream, &mut state));
/// }
/// assert_eq!(styles[0], Some(Style::Keyword));
/// assert!(styles.contains(&Some(Style::Number)));
/// ```
#[derive(Debug, Clone)]
pub struct Mode {
    indent_unit: i32,
    tab_size: usize,
    vocabulary: Arc<Vocabulary>,
}

impl Default for Mode {
    fn default() -> Self {
        let config = ModeConfig::default();
        Self {
            indent_unit: config.indent_unit as i32,
            tab_size: config.tab_size as usize,
            vocabulary: Arc::new(Vocabulary::default()),
        }
    }
}

impl Mode {
    /// Builds a mode from validated configuration.
    pub fn new(config: &ModeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            // validate() bounds both widths well inside i32
            indent_unit: config.indent_unit as i32,
            tab_size: config.tab_size as usize,
            vocabulary: Arc::new(Vocabulary::with_extras(
                &config.extra_keywords,
                &config.extra_atoms,
            )),
        })
    }

    /// Columns added per nesting level.
    pub fn indent_unit(&self) -> i32 {
        self.indent_unit
    }

    /// Tab width hosts should use when building a
    /// [`LineStream`](crate::stream::LineStream).
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// The classification tables.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Static editor capabilities for hosts.
    pub fn capabilities(&self) -> &'static Capabilities {
        &CABOOSE
    }

    /// Creates the state for a fresh buffer whose top level is indented at
    /// `base_column`.
    pub fn start_state(&self, base_column: i32) -> LexerState {
        LexerState::new(Context::root(base_column - self.indent_unit))
    }

    /// Consumes one token from `stream` and returns its style.
    ///
    /// Leading whitespace is consumed as its own unstyled token. Punctuation
    /// is unstyled too but updates the context stack. Returns `None` without
    /// consuming anything when the line is exhausted.
    pub fn token<S: CharStream>(&self, stream: &mut S, state: &mut LexerState) -> Option<Style> {
        if stream.sol() {
            let top = state.context.top_mut();
            if top.align == Align::Unknown {
                top.align = Align::Unaligned;
            }
            if top.kind == ContextKind::Case {
                top.kind = ContextKind::Brace;
            }
            state.indented = to_column(stream.indentation());
            state.start_of_line = true;
        }
        if stream.eat_space() || stream.eol() {
            return None;
        }

        let Scan { style, punct } = match state.tokenize {
            Tokenize::Base => self.token_base(stream, state),
            Tokenize::InString(quote) => Scan::styled(self.token_string(stream, state, quote)),
            Tokenize::InComment => Scan::styled(self.token_comment(stream, state)),
        };
        if style == Some(Style::Comment) {
            return style;
        }

        let top = state.context.top_mut();
        if top.align == Align::Unknown {
            top.align = Align::Aligned;
        }
        if let Some(punct) = punct {
            apply_punct(state, punct, to_column(stream.column()));
        }
        state.start_of_line = false;
        style
    }

    /// Classifies the next lexical unit outside strings and comments.
    fn token_base<S: CharStream>(&self, stream: &mut S, state: &mut LexerState) -> Scan {
        let Some(ch) = stream.next_char() else {
            return Scan::default();
        };

        if let Some(quote) = Quote::from_char(ch) {
            enter(state, Tokenize::InString(quote));
            return Scan::styled(self.token_string(stream, state, quote));
        }
        if ch.is_ascii_digit() || (ch == '.' && stream.peek().is_some_and(|c| c.is_ascii_digit())) {
            return Scan::styled(self.token_number(stream, ch));
        }
        if let Some(punct) = Punct::from_char(ch) {
            return Scan::punct(punct);
        }
        if ch == '/' {
            if stream.eat('*') {
                enter(state, Tokenize::InComment);
                return Scan::styled(self.token_comment(stream, state));
            }
            if stream.eat('/') {
                return Scan::styled(self.token_line_comment(stream));
            }
        }
        if let Some(style) = self.token_operator(stream, ch) {
            return Scan::styled(style);
        }
        self.token_word(stream)
    }
}

/// Switches the active tokenizer.
pub(crate) fn enter(state: &mut LexerState, tokenize: Tokenize) {
    if state.tokenize != tokenize {
        trace!(from = ?state.tokenize, to = ?tokenize, "switching tokenizer");
        state.tokenize = tokenize;
    }
}

/// Updates the context stack for punctuation classified at `column`.
fn apply_punct(state: &mut LexerState, punct: Punct, column: i32) {
    let top_kind = state.context.top().kind;
    match punct {
        Punct::LBrace => push_context(state, column, ContextKind::Brace),
        Punct::LBracket => push_context(state, column, ContextKind::Bracket),
        Punct::LParen => push_context(state, column, ContextKind::Paren),
        Punct::CaseLabel => state.context.top_mut().kind = ContextKind::Case,
        _ if punct.closes(top_kind) => pop_context(state),
        _ => {},
    }
}

fn push_context(state: &mut LexerState, column: i32, kind: ContextKind) {
    trace!(?kind, column, indented = state.indented, "push context");
    state
        .context
        .push(Context::new(state.indented, column, kind));
}

fn pop_context(state: &mut LexerState) {
    if let Some(context) = state.context.pop() {
        trace!(kind = ?context.kind, "pop context");
        if context.kind.restores_indent() {
            state.indented = context.indented;
        }
    }
}

fn to_column(column: usize) -> i32 {
    i32::try_from(column).unwrap_or(i32::MAX)
}
