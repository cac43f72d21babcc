//! Edge case tests for caboose-lex

#[cfg(test)]
mod tests {
    use crate::stream::{CharStream, LineStream};
    use crate::{highlight_lines, Highlighter, LexerState, Mode, Style, Tokenize};

    /// Lexes `lines` with one state, returning every token as (text, style).
    fn lex_all(lines: &[&str]) -> (Vec<(String, Option<Style>)>, LexerState) {
        let mode = Mode::default();
        let mut state = mode.start_state(0);
        let mut tokens = Vec::new();
        for line in lines {
            let mut stream = LineStream::new(line, mode.tab_size());
            while !stream.eol() {
                stream.start_token();
                let style = mode.token(&mut stream, &mut state);
                tokens.push((stream.current().to_string(), style));
            }
        }
        (tokens, state)
    }

    fn tok(text: &str, style: Option<Style>) -> (String, Option<Style>) {
        (text.to_string(), style)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let (tokens, state) = lex_all(&[""]);
        assert!(tokens.is_empty());
        assert_eq!(state, Mode::default().start_state(0));
    }

    #[test]
    fn test_edge_whitespace_only_line() {
        let (tokens, _) = lex_all(&[" \t  "]);
        assert_eq!(tokens, vec![tok(" \t  ", None)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, _) = lex_all(&[&name]);
        assert_eq!(tokens, vec![(name, Some(Style::Variable))]);
    }

    #[test]
    fn test_edge_keywords_not_variables() {
        let (tokens, _) = lex_all(&["fun var if"]);
        assert_eq!(tokens[0], tok("fun", Some(Style::Keyword)));
        assert_eq!(tokens[2], tok("var", Some(Style::Keyword)));
        assert_eq!(tokens[4], tok("if", Some(Style::Keyword)));
    }

    #[test]
    fn test_edge_number_literals() {
        for literal in ["123", "0x1F", "017", "3.14", "2e10", ".5"] {
            let (tokens, _) = lex_all(&[literal]);
            assert_eq!(tokens, vec![tok(literal, Some(Style::Number))], "{literal}");
        }
    }

    #[test]
    fn test_edge_more_number_forms() {
        for literal in ["0", "0XFF", "7.", "1.5E-3", "2e+8", ".5e3"] {
            let (tokens, _) = lex_all(&[literal]);
            assert_eq!(tokens, vec![tok(literal, Some(Style::Number))], "{literal}");
        }
    }

    #[test]
    fn test_edge_leading_zero_splits() {
        let (tokens, _) = lex_all(&["0.5"]);
        assert_eq!(tokens, vec![tok("0", Some(Style::Number)), tok(".5", Some(Style::Number))]);

        let (tokens, _) = lex_all(&["09"]);
        assert_eq!(tokens, vec![tok("0", Some(Style::Number)), tok("9", Some(Style::Number))]);

        let (tokens, _) = lex_all(&["0.x"]);
        assert_eq!(
            tokens,
            vec![tok("0", Some(Style::Number)), tok(".", None), tok("x", Some(Style::Variable))]
        );
    }

    #[test]
    fn test_edge_malformed_numbers_split() {
        let (tokens, _) = lex_all(&["0x"]);
        assert_eq!(tokens, vec![tok("0", Some(Style::Number)), tok("x", Some(Style::Variable))]);

        let (tokens, _) = lex_all(&["12abc"]);
        assert_eq!(tokens, vec![tok("12", Some(Style::Number)), tok("abc", Some(Style::Variable))]);

        let (tokens, _) = lex_all(&["1e"]);
        assert_eq!(tokens, vec![tok("1", Some(Style::Number)), tok("e", Some(Style::Variable))]);

        let (tokens, _) = lex_all(&["1.2.3"]);
        assert_eq!(tokens, vec![tok("1.2", Some(Style::Number)), tok(".3", Some(Style::Number))]);
    }

    #[test]
    fn test_edge_string_hello() {
        let (tokens, state) = lex_all(&["\"hello\""]);
        assert_eq!(tokens, vec![tok("\"hello\"", Some(Style::String))]);
        assert_eq!(state.tokenize(), Tokenize::Base);
    }

    #[test]
    fn test_edge_empty_strings() {
        let (tokens, _) = lex_all(&["\"\"''``"]);
        assert_eq!(
            tokens,
            vec![
                tok("\"\"", Some(Style::String)),
                tok("''", Some(Style::String)),
                tok("``", Some(Style::String)),
            ]
        );
    }

    #[test]
    fn test_edge_unterminated_string_reverts() {
        let (tokens, state) = lex_all(&["\"unterminated"]);
        assert_eq!(tokens, vec![tok("\"unterminated", Some(Style::String))]);
        assert_eq!(state.tokenize(), Tokenize::Base);
    }

    #[test]
    fn test_edge_backtick_across_lines() {
        let mode = Mode::default();
        let mut highlighter = Highlighter::new(&mode);
        let first = highlighter.line("`multi");
        assert_eq!(first.spans[0].style, Some(Style::String));
        assert!(matches!(highlighter.state().tokenize(), Tokenize::InString(_)));

        let second = highlighter.line("line`");
        assert_eq!(second.spans.len(), 1);
        assert_eq!(second.spans[0].style, Some(Style::String));
        assert_eq!(highlighter.state().tokenize(), Tokenize::Base);
    }

    #[test]
    fn test_edge_comment_across_lines() {
        let (tokens, state) = lex_all(&["/* a", "b */"]);
        assert_eq!(
            tokens,
            vec![tok("/* a", Some(Style::Comment)), tok("b */", Some(Style::Comment))]
        );
        assert_eq!(state.tokenize(), Tokenize::Base);

        let (_, state) = lex_all(&["/* a"]);
        assert_eq!(state.tokenize(), Tokenize::InComment);
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let (tokens, state) = lex_all(&["\"/* not */ // a comment\""]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].1, Some(Style::String));
        assert_eq!(state.tokenize(), Tokenize::Base);
    }

    #[test]
    fn test_edge_quotes_inside_comment() {
        let (tokens, state) = lex_all(&["/* \"open */ x"]);
        assert_eq!(tokens[0], tok("/* \"open */", Some(Style::Comment)));
        assert_eq!(tokens[2], tok("x", Some(Style::Variable)));
        assert_eq!(state.tokenize(), Tokenize::Base);
    }

    #[test]
    fn test_edge_brackets_inside_comment_ignored() {
        let (_, state) = lex_all(&["/* { [ ( */"]);
        assert_eq!(state.context().depth(), 1);
    }

    #[test]
    fn test_edge_brackets_inside_string_ignored() {
        let (_, state) = lex_all(&["print(\"{[\")"]);
        assert_eq!(state.context().depth(), 1);
    }

    #[test]
    fn test_edge_excess_closers() {
        let (tokens, state) = lex_all(&["}}}", ")]", "} x"]);
        assert!(tokens.iter().filter(|(t, _)| t != " ").all(|(_, s)| s.is_none() || *s == Some(Style::Variable)));
        assert_eq!(state.context().depth(), 1);
        assert_eq!(state.context().top(), state.context().root());
    }

    #[test]
    fn test_edge_deep_nesting() {
        let open = "(".repeat(500);
        let close = ")".repeat(500);
        let (_, state) = lex_all(&[&open]);
        assert_eq!(state.context().depth(), 501);
        let (_, state) = lex_all(&[&open, &close]);
        assert_eq!(state.context().depth(), 1);
    }

    #[test]
    fn test_edge_all_operators() {
        let (tokens, _) = lex_all(&["+ - * & ^ % = < > ! | / :="]);
        let operators: Vec<_> = tokens
            .iter()
            .filter(|(_, s)| *s == Some(Style::Operator))
            .map(|(t, _)| t.as_str())
            .collect();
        assert_eq!(operators, vec!["+", "-", "*", "&", "^", "%", "=", "<", ">", "!", "|", "/", "="]);
        // `:` is punctuation, so `:=` splits.
        assert_eq!(tokens[tokens.len() - 2], tok(":", None));
        assert_eq!(tokens[tokens.len() - 1], tok("=", Some(Style::Operator)));
    }

    #[test]
    fn test_edge_operator_run() {
        let (tokens, _) = lex_all(&["a==!b"]);
        assert_eq!(tokens[1], tok("==!", Some(Style::Operator)));
    }

    #[test]
    fn test_edge_unicode_identifier() {
        let (tokens, _) = lex_all(&["var café = naïve;"]);
        assert!(tokens.contains(&tok("café", Some(Style::Variable))));
        assert!(tokens.contains(&tok("naïve", Some(Style::Variable))));
    }

    #[test]
    fn test_edge_nbsp_is_whitespace() {
        let (tokens, _) = lex_all(&["\u{00a0}x"]);
        // NBSP is whitespace, not part of the word.
        assert_eq!(tokens, vec![tok("\u{00a0}", None), tok("x", Some(Style::Variable))]);
    }

    #[test]
    fn test_edge_tab_indentation() {
        let mode = Mode::default();
        let lines = highlight_lines(&mode, "if (x) {\n\ty;\n\t}");
        assert_eq!(lines[1].indent, Some(2));
        let mut highlighter = Highlighter::new(&mode);
        highlighter.line("\tif (x) {");
        assert_eq!(highlighter.state().indented(), 4);
        assert_eq!(mode.indent(highlighter.state(), "y"), Some(6));
    }

    #[test]
    fn test_edge_if_block_scenario() {
        let mode = Mode::default();
        let lines = highlight_lines(&mode, "if (x) {\n  y;\n}");
        assert_eq!(
            lines.iter().map(|l| l.indent).collect::<Vec<_>>(),
            vec![Some(0), Some(2), Some(0)]
        );
    }

    #[test]
    fn test_edge_indent_repeatable() {
        let mode = Mode::default();
        let mut highlighter = Highlighter::new(&mode);
        highlighter.line("if (x) {");
        let state = highlighter.state();
        let answers: Vec<_> = (0..3).map(|_| mode.indent(state, "}")).collect();
        assert_eq!(answers, vec![Some(0); 3]);
    }

    #[test]
    fn test_edge_indent_empty_text() {
        let mode = Mode::default();
        let mut highlighter = Highlighter::new(&mode);
        highlighter.line("f(");
        assert_eq!(mode.indent(highlighter.state(), ""), Some(2));
        assert_eq!(mode.indent(highlighter.state(), "   "), Some(2));
    }

    #[test]
    fn test_edge_multibyte_columns() {
        let mode = Mode::default();
        let mut highlighter = Highlighter::new(&mode);
        // `(` is the fourth character but sits past byte 4.
        highlighter.line("äöü(a,");
        assert_eq!(highlighter.state().context().top().column, 3);
        assert_eq!(mode.indent(highlighter.state(), "b"), Some(5));
    }
}
