//! Identifier and keyword lexing.

use crate::lexer::core::Scan;
use crate::lexer::operator::Punct;
use crate::lexer::Mode;
use crate::stream::CharStream;
use crate::style::Style;
use crate::unicode::is_ident_char;
use crate::vocabulary::is_case_label;

impl Mode {
    /// Lexes a word whose first character has already been consumed.
    ///
    /// The first character is taken as-is, so a stray symbol like `#` still
    /// forms a one-character token. The word is then looked up in the
    /// vocabulary; a keyword that reads `case` or `default` also reports a
    /// label so the driver can mark the enclosing block.
    pub(crate) fn token_word<S: CharStream>(&self, stream: &mut S) -> Scan {
        stream.eat_while(is_ident_char);
        let word = stream.current();
        match self.vocabulary().classify(word) {
            Style::Keyword if is_case_label(word) => Scan {
                style: Some(Style::Keyword),
                punct: Some(Punct::CaseLabel),
            },
            style => Scan::styled(style),
        }
    }
}
