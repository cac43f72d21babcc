//! caboose-lex - Incremental Lexer for the Caboose Scripting Language
//!
//! This crate provides the editor mode for Caboose: a resumable tokenizer
//! that classifies one token per call, and an indentation engine driven by
//! the bracket contexts the tokenizer tracks.
//!
//! # Overview
//!
//! Unlike a batch lexer, the tokenizer never sees the whole document. The
//! host (an editor, or the [`highlight`] loop) hands it one line at a time
//! through a [`CharStream`] and keeps a [`LexerState`] between calls. Block
//! comments and back-tick strings can span lines because the state remembers
//! which sub-tokenizer is active.
//!
//! # Example Usage
//!
//! ```
//! use caboose_lex::{highlight_lines, Mode, Style};
//!
//! let mode = Mode::default();
//! let source = "fun greet(name) {\n  print(\"hi \" + name);\n}";
//! let lines = highlight_lines(&mode, source);
//!
//! assert_eq!(lines[1].indent, Some(2));
//! assert_eq!(lines[2].indent, Some(0));
//! assert_eq!(lines[0].spans[0].style, Some(Style::Keyword));
//! ```
//!
//! # Module Structure
//!
//! - [`stream`] - The host stream contract and a line stream
//! - [`lexer`] - The mode and its sub-tokenizers
//! - [`state`] - Resumable state threaded between calls
//! - [`context`] - Bracket contexts used for indentation
//! - [`indent`] - Indentation suggestions
//! - [`style`] - Token styles
//! - [`vocabulary`] - Keyword and atom tables
//! - [`unicode`] - Character classes
//! - [`capabilities`] - Static editor capabilities
//! - [`config`] - Mode configuration
//! - [`highlight`] - A reference host loop
//!
//! # Token Styles
//!
//! - **keyword**: `fun var class static if else for while import and or`
//! - **atom**: `true false input clock len print number bool str`
//! - **number**: `42`, `3.14`, `.5`, `2e10`, `0x1F`, `017`
//! - **string**: `"..."`, `'...'`, and multi-line `` `...` ``
//! - **comment**: `// ...` and `/* ... */`
//! - **operator**: runs of `+ - * & ^ % : = < > ! | /`
//! - **variable**: any other word
//!
//! Punctuation `[ ] { } ( ) , ; : .` and blank space are unstyled.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod capabilities;
pub mod config;
pub mod context;
pub mod error;
pub mod highlight;
pub mod indent;
pub mod lexer;
pub mod state;
pub mod stream;
pub mod style;
pub mod unicode;
pub mod vocabulary;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use capabilities::{Capabilities, CABOOSE};
pub use config::ModeConfig;
pub use context::{Align, Context, ContextKind, ContextStack};
pub use error::{ConfigError, Result};
pub use highlight::{highlight_lines, reindent, HighlightedLine, Highlighter, Span};
pub use lexer::{Mode, Punct};
pub use state::{LexerState, Quote, Tokenize};
pub use stream::{CharStream, LineStream};
pub use style::Style;
pub use vocabulary::Vocabulary;

#[cfg(test)]
mod tests {
    use super::*;

    /// Styled tokens of every line, blank space and punctuation dropped.
    fn styled(source: &str) -> Vec<(String, Style)> {
        let mode = Mode::default();
        highlight_lines(&mode, source)
            .iter()
            .zip(source.lines())
            .flat_map(|(line, text)| {
                line.tokens(text)
                    .filter_map(|(t, s)| s.map(|s| (t.to_string(), s)))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn test_class_program() {
        let source = r#"
            import math
            class Counter {
                static fun make(start) {
                    var c = start;
                    while (c < 10 and true) {
                        c = c + 1;
                    }
                    return c;
                }
            }
        "#;
        let tokens = styled(source);

        assert!(tokens.contains(&("import".to_string(), Style::Keyword)));
        assert!(tokens.contains(&("class".to_string(), Style::Keyword)));
        assert!(tokens.contains(&("static".to_string(), Style::Keyword)));
        assert!(tokens.contains(&("and".to_string(), Style::Keyword)));
        assert!(tokens.contains(&("true".to_string(), Style::Atom)));
        assert!(tokens.contains(&("Counter".to_string(), Style::Variable)));
        assert!(tokens.contains(&("return".to_string(), Style::Variable)));
        assert!(tokens.contains(&("<".to_string(), Style::Operator)));
        assert!(tokens.contains(&("10".to_string(), Style::Number)));
    }

    #[test]
    fn test_indent_follows_written_indentation() {
        let source = "fun f(a) {\n  if (a) {\n    print(a);\n  }\n  return a;\n}";
        let mode = Mode::default();
        let indents: Vec<_> = highlight_lines(&mode, source).iter().map(|l| l.indent).collect();
        assert_eq!(
            indents,
            vec![Some(0), Some(2), Some(4), Some(2), Some(2), Some(0)]
        );
    }

    #[test]
    fn test_strings_and_comments() {
        let tokens = styled("var s = 'a' + \"b\"; /* c */ // d");
        assert_eq!(
            tokens,
            vec![
                ("var".to_string(), Style::Keyword),
                ("s".to_string(), Style::Variable),
                ("=".to_string(), Style::Operator),
                ("'a'".to_string(), Style::String),
                ("+".to_string(), Style::Operator),
                ("\"b\"".to_string(), Style::String),
                ("/* c */".to_string(), Style::Comment),
                ("// d".to_string(), Style::Comment),
            ]
        );
    }

    #[test]
    fn test_indent_uses_actual_line_indentation() {
        // Suggestions are relative to how the opening line was really indented.
        let source = "fun f(a) {\nif (a) {\nprint(a);";
        let mode = Mode::default();
        let indents: Vec<_> = highlight_lines(&mode, source).iter().map(|l| l.indent).collect();
        assert_eq!(indents, vec![Some(0), Some(2), Some(2)]);
    }

    #[test]
    fn test_mode_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mode>();
        assert_send_sync::<LexerState>();
    }
}
