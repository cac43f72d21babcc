//! Character classes used by the tokenizer.

/// Checks if a character can appear in an identifier.
///
/// Identifier characters are ASCII word characters, `$`, and every code point
/// from U+00A1 upwards.
///
/// # Example
///
/// ```
/// use caboose_lex::unicode::is_ident_char;
///
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('$'));
/// assert!(is_ident_char('9'));
/// assert!(is_ident_char('λ'));
/// assert!(!is_ident_char('+'));
/// assert!(!is_ident_char(' '));
/// ```
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c >= '\u{a1}'
}

/// Checks if a character belongs to an operator run.
///
/// The operator characters are `+ - * & ^ % : = < > ! | /`. A `:` on its own
/// is punctuation; it only joins an operator run that is already underway.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '&' | '^' | '%' | ':' | '=' | '<' | '>' | '!' | '|' | '/'
    )
}

/// Checks if a character is an ASCII word character (`[A-Za-z0-9_]`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a valid octal digit.
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}
