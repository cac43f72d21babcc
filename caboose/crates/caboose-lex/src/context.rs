//! Bracket nesting contexts.
//!
//! Every open `{`, `[` or `(` pushes a [`Context`] recording where it was
//! opened and what the indentation was at the time. Indentation suggestions
//! are computed from the innermost context only.

/// What closes a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// The root context. Never closed.
    Top,
    /// Opened by `{`, closed by `}`.
    Brace,
    /// Opened by `[`, closed by `]`.
    Bracket,
    /// Opened by `(`, closed by `)`.
    Paren,
    /// A brace context whose current line is a `case`/`default` label.
    Case,
}

impl ContextKind {
    /// The character that closes this context, if any.
    pub fn closing_char(self) -> Option<char> {
        match self {
            ContextKind::Brace => Some('}'),
            ContextKind::Bracket => Some(']'),
            ContextKind::Paren => Some(')'),
            ContextKind::Top | ContextKind::Case => None,
        }
    }

    /// Returns true if popping this context restores the indentation that
    /// was current when it was opened.
    pub fn restores_indent(self) -> bool {
        matches!(
            self,
            ContextKind::Brace | ContextKind::Bracket | ContextKind::Paren
        )
    }
}

/// Whether continuation lines line up with the opening bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Nothing has been seen after the opening bracket yet.
    #[default]
    Unknown,
    /// Another token followed the opening bracket on its line.
    Aligned,
    /// The opening bracket ended its line.
    Unaligned,
}

impl Align {
    /// Only a resolved `Aligned` counts; `Unknown` indents like `Unaligned`.
    pub fn is_aligned(self) -> bool {
        self == Align::Aligned
    }
}

/// One level of bracket nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Indentation of the line the context was opened on.
    pub indented: i32,
    /// Screen column of the opening bracket.
    pub column: i32,
    /// What closes the context.
    pub kind: ContextKind,
    /// Whether continuation lines align to `column`.
    pub align: Align,
}

impl Context {
    /// Creates an unresolved context.
    pub fn new(indented: i32, column: i32, kind: ContextKind) -> Self {
        Self {
            indented,
            column,
            kind,
            align: Align::Unknown,
        }
    }

    /// Creates the root context for a buffer whose base indentation is
    /// `indented + indent_unit`.
    pub fn root(indented: i32) -> Self {
        Self {
            indented,
            column: 0,
            kind: ContextKind::Top,
            align: Align::Unaligned,
        }
    }
}

/// A stack of contexts that always holds the root.
///
/// The root is stored apart from the nested contexts so that it cannot be
/// popped and `top` never has to handle an empty stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextStack {
    root: Context,
    nested: Vec<Context>,
}

impl ContextStack {
    /// Creates a stack holding only `root`.
    pub fn new(root: Context) -> Self {
        Self {
            root,
            nested: Vec::new(),
        }
    }

    /// The innermost context.
    pub fn top(&self) -> &Context {
        self.nested.last().unwrap_or(&self.root)
    }

    /// The innermost context, mutably.
    pub fn top_mut(&mut self) -> &mut Context {
        match self.nested.last_mut() {
            Some(context) => context,
            None => &mut self.root,
        }
    }

    /// The root context.
    pub fn root(&self) -> &Context {
        &self.root
    }

    /// Pushes a nested context.
    pub fn push(&mut self, context: Context) {
        self.nested.push(context);
    }

    /// Pops the innermost context. Returns `None` when only the root is left.
    pub fn pop(&mut self) -> Option<Context> {
        self.nested.pop()
    }

    /// Number of contexts, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// Iterates from the root to the innermost context.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        std::iter::once(&self.root).chain(self.nested.iter())
    }
}
