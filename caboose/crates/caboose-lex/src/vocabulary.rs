//! Keyword and atom tables.
//!
//! The tables are built once per [`Mode`](crate::Mode) and shared read-only
//! by every lexer state created from it.

use rustc_hash::FxHashSet;

use crate::style::Style;

/// Reserved words of the language.
pub const KEYWORDS: &[&str] = &[
    // Declarations
    "fun", "var", "class", "static",
    // Conditions
    "if", "else",
    // Loops
    "for", "while",
    "import",
    // Comparison
    "and", "or",
];

/// Built-in values and functions, highlighted as atoms.
pub const ATOMS: &[&str] = &[
    "true", "false", "input", "clock", "len", "print", "number", "bool", "str",
];

/// Words that mark a `case`/`default` label when they are keywords.
pub const CASE_LABELS: &[&str] = &["case", "default"];

/// The classification tables for words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: FxHashSet<Box<str>>,
    atoms: FxHashSet<Box<str>>,
}

impl Vocabulary {
    /// Builds the default tables extended with extra keywords and atoms.
    pub fn with_extras<K, A>(extra_keywords: K, extra_atoms: A) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        vocabulary
            .keywords
            .extend(extra_keywords.into_iter().map(|k| Box::from(k.as_ref())));
        vocabulary
            .atoms
            .extend(extra_atoms.into_iter().map(|a| Box::from(a.as_ref())));
        vocabulary
    }

    /// Returns true if `word` is a keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns true if `word` is an atom.
    pub fn is_atom(&self, word: &str) -> bool {
        self.atoms.contains(word)
    }

    /// Classifies a word. Keywords win over atoms.
    pub fn classify(&self, word: &str) -> Style {
        if self.is_keyword(word) {
            Style::Keyword
        } else if self.is_atom(word) {
            Style::Atom
        } else {
            Style::Variable
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            keywords: KEYWORDS.iter().map(|&k| Box::from(k)).collect(),
            atoms: ATOMS.iter().map(|&a| Box::from(a)).collect(),
        }
    }
}

/// Returns true if `word` is a `case`/`default` label word.
pub fn is_case_label(word: &str) -> bool {
    CASE_LABELS.contains(&word)
}
