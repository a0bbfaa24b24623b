//! Character classification.
//!
//! [`classify`] maps any Unicode scalar value to a coarse [`CharClass`]
//! used to dispatch scanning. It is a pure function of the code point:
//! classification never depends on lexer state.
//!
//! Name classes follow the XML 1.0 (Fifth Edition) `Name` production.
//! The characters a name may contain but which also carry their own
//! lexical meaning (`:`, `-`, `.`, digits) have dedicated classes; the
//! name scanners re-admit them through [`is_name_char`].

/// Coarse class of a code point.
///
/// One class per punctuation character the dispatch loops switch on, plus
/// the name, digit, whitespace, and end-of-buffer classes. `Other` covers
/// everything with no meaning in any mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// The EOF sentinel (and interior U+0000, which no mode accepts).
    EndOfBuffer,
    /// Space, tab, carriage return, or line feed. The grammar's whitespace
    /// set is exactly these four; other Unicode spaces are `Other`.
    Whitespace,
    /// ASCII `0`-`9`.
    Digit,
    /// A character that may start an XML name.
    NameStart,
    /// A character valid only in the continuation of a name: middle dot,
    /// combining marks, and the two undertie characters.
    NameChar,
    /// `"`
    Quote,
    /// `'`
    Apostrophe,
    ParenOpen,
    ParenClose,
    SquareOpen,
    SquareClose,
    CurlyOpen,
    CurlyClose,
    Colon,
    Semicolon,
    Comma,
    Dot,
    Dash,
    Plus,
    Star,
    Slash,
    Equals,
    Bang,
    LessThan,
    GreaterThan,
    Ampersand,
    Percent,
    Dollar,
    AtSign,
    QuestionMark,
    Pipe,
    Hash,
    Backtick,
    Tilde,
    /// No meaning in any mode.
    Other,
}

/// Whether `c` may start an XML name.
///
/// XML 1.0 `NameStartChar` minus `:`, which the grammar treats as a name
/// separator rather than name material.
#[must_use]
pub const fn is_name_start(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Whether `c` may continue an XML name.
///
/// XML 1.0 `NameChar`: every `NameStartChar` plus `-`, `.`, digits, and a
/// few combining ranges.
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    is_name_start(c)
        || matches!(c,
            '-' | '.'
            | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

/// Classify one code point.
#[must_use]
pub const fn classify(c: char) -> CharClass {
    match c {
        '\0' => CharClass::EndOfBuffer,
        ' ' | '\t' | '\r' | '\n' => CharClass::Whitespace,
        '0'..='9' => CharClass::Digit,
        '"' => CharClass::Quote,
        '\'' => CharClass::Apostrophe,
        '(' => CharClass::ParenOpen,
        ')' => CharClass::ParenClose,
        '[' => CharClass::SquareOpen,
        ']' => CharClass::SquareClose,
        '{' => CharClass::CurlyOpen,
        '}' => CharClass::CurlyClose,
        ':' => CharClass::Colon,
        ';' => CharClass::Semicolon,
        ',' => CharClass::Comma,
        '.' => CharClass::Dot,
        '-' => CharClass::Dash,
        '+' => CharClass::Plus,
        '*' => CharClass::Star,
        '/' => CharClass::Slash,
        '=' => CharClass::Equals,
        '!' => CharClass::Bang,
        '<' => CharClass::LessThan,
        '>' => CharClass::GreaterThan,
        '&' => CharClass::Ampersand,
        '%' => CharClass::Percent,
        '$' => CharClass::Dollar,
        '@' => CharClass::AtSign,
        '?' => CharClass::QuestionMark,
        '|' => CharClass::Pipe,
        '#' => CharClass::Hash,
        '`' => CharClass::Backtick,
        '~' => CharClass::Tilde,
        _ => {
            if is_name_start(c) {
                CharClass::NameStart
            } else if is_name_char(c) {
                CharClass::NameChar
            } else {
                CharClass::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn sentinel_is_end_of_buffer() {
        assert_eq!(classify('\0'), CharClass::EndOfBuffer);
    }

    #[test]
    fn grammar_whitespace_only() {
        assert_eq!(classify(' '), CharClass::Whitespace);
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('\r'), CharClass::Whitespace);
        assert_eq!(classify('\n'), CharClass::Whitespace);
        // NBSP and other Unicode spaces are not grammar whitespace.
        assert_eq!(classify('\u{A0}'), CharClass::Other);
        assert_eq!(classify('\u{2028}'), CharClass::Other);
    }

    #[test]
    fn ascii_letters_start_names() {
        assert_eq!(classify('a'), CharClass::NameStart);
        assert_eq!(classify('Z'), CharClass::NameStart);
        assert_eq!(classify('_'), CharClass::NameStart);
    }

    #[test]
    fn digits_have_their_own_class() {
        assert_eq!(classify('0'), CharClass::Digit);
        assert_eq!(classify('9'), CharClass::Digit);
    }

    #[test]
    fn name_punctuation_is_split_out() {
        // All four are NameChar per XML but dispatch needs them separate.
        assert_eq!(classify('-'), CharClass::Dash);
        assert_eq!(classify('.'), CharClass::Dot);
        assert_eq!(classify(':'), CharClass::Colon);
        assert!(is_name_char('-'));
        assert!(is_name_char('.'));
        assert!(is_name_char('7'));
        assert!(!is_name_char(':'));
    }

    #[test]
    fn unicode_name_ranges() {
        // Latin-1 letters
        assert!(is_name_start('é'));
        assert!(is_name_start('ø'));
        // Greek
        assert!(is_name_start('α'));
        // CJK
        assert!(is_name_start('中'));
        // Supplementary planes
        assert!(is_name_start('\u{10000}'));
        assert!(is_name_start('\u{EFFFF}'));
        assert!(!is_name_start('\u{F0000}'));
        // Multiplication sign and division sign sit in the gaps.
        assert!(!is_name_start('\u{D7}'));
        assert!(!is_name_start('\u{F7}'));
    }

    #[test]
    fn combining_marks_continue_names() {
        assert!(!is_name_start('\u{301}'));
        assert!(is_name_char('\u{301}'));
        assert_eq!(classify('\u{301}'), CharClass::NameChar);
        assert!(is_name_char('\u{B7}'));
        assert!(is_name_char('\u{203F}'));
    }

    #[test]
    fn punctuation_classes() {
        assert_eq!(classify('('), CharClass::ParenOpen);
        assert_eq!(classify('}'), CharClass::CurlyClose);
        assert_eq!(classify('&'), CharClass::Ampersand);
        assert_eq!(classify('`'), CharClass::Backtick);
        assert_eq!(classify('~'), CharClass::Tilde);
        assert_eq!(classify('\\'), CharClass::Other);
        assert_eq!(classify('^'), CharClass::Other);
    }

    proptest! {
        #[test]
        fn classification_is_total(c: char) {
            // Must return without panicking for every scalar value.
            let _ = classify(c);
        }

        #[test]
        fn name_start_implies_name_char(c: char) {
            if is_name_start(c) {
                prop_assert!(is_name_char(c));
            }
        }

        #[test]
        fn name_classes_agree_with_predicates(c: char) {
            match classify(c) {
                CharClass::NameStart => prop_assert!(is_name_start(c)),
                CharClass::NameChar => {
                    prop_assert!(is_name_char(c) && !is_name_start(c));
                }
                CharClass::Digit | CharClass::Dash | CharClass::Dot => {
                    prop_assert!(is_name_char(c));
                }
                _ => {}
            }
        }
    }
}
