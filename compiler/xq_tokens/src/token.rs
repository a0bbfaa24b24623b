//! Token representation.
//!
//! A token is a [`TokenKind`] paired with a [`Span`]. Tokens carry no text;
//! the stream is lossless because every byte of input is covered by exactly
//! one span, so concatenating lexemes reconstructs the source.

use std::fmt;

use crate::{Span, TokenKind};

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests and synthesized streams.
    #[must_use]
    pub const fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }

    /// The token's lexeme, sliced out of the source it was lexed from.
    #[inline]
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.to_range()]
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

// Size assertions to prevent accidental regressions in frequently-allocated types.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // TokenKind (2 bytes, padded to 4) + Span (8 bytes) = 12 bytes
    crate::static_assert_size!(Token, 12);
    crate::static_assert_size!(TokenKind, 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_pairs_kind_and_span() {
        let token = Token::new(TokenKind::IntegerLiteral, Span::new(0, 3));
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
        assert_eq!(token.span, Span::new(0, 3));
    }

    #[test]
    fn dummy_has_dummy_span() {
        let token = Token::dummy(TokenKind::Comma);
        assert_eq!(token.span, Span::DUMMY);
    }

    #[test]
    fn text_slices_the_source() {
        let source = "count(//book)";
        let token = Token::new(TokenKind::NCName, Span::new(0, 5));
        assert_eq!(token.text(source), "count");
    }

    #[test]
    fn debug_shows_kind_and_span() {
        let token = Token::new(TokenKind::Assign, Span::new(4, 6));
        assert_eq!(format!("{token:?}"), "Assign @ 4..6");
    }
}
