//! Entity reference scanning.
//!
//! [`scan_entity_ref`] is the shared recognizer for `&...;` shapes. It
//! classifies the reference; the calling mode picks the token kind for its
//! own context family.
//!
//! [`EntityCursor`] decorates a [`Cursor`] so that peeking at one of the
//! five predefined XML entities yields the referenced character while the
//! spelled-out source text stays in place for matching. Only the
//! predefined five substitute on peek; numeric character references are
//! recognized by [`scan_entity_ref`] instead and never substitute.

use crate::classify::{is_name_char, is_name_start};
use crate::cursor::Cursor;

/// The five predefined XML entities and the characters they denote.
const PREDEFINED: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&apos;", '\''),
    ("&gt;", '>'),
    ("&lt;", '<'),
    ("&quot;", '"'),
];

/// Classification of a scanned `&...;` sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntityRef {
    /// `&#n;` or `&#xH;` with at least one digit.
    Character,
    /// `&name;`: a complete named reference. Recognition is by shape; the
    /// conformance layer decides whether the name is known.
    Predefined,
    /// A reference cut short: missing `;` before an illegal character or
    /// the end of the buffer, or a numeric reference with no digits.
    Partial,
    /// `&;`
    Empty,
}

/// A cursor view that substitutes predefined entities on peek.
#[derive(Clone, Copy, Debug)]
pub struct EntityCursor<'a> {
    inner: Cursor<'a>,
}

impl<'a> EntityCursor<'a> {
    #[must_use]
    pub fn new(inner: Cursor<'a>) -> Self {
        EntityCursor { inner }
    }

    /// Byte length of the predefined entity spelled at the current
    /// position, or `None` when not positioned on one.
    #[must_use]
    pub fn reference_len(&self) -> Option<u32> {
        if self.inner.peek() != '&' {
            return None;
        }
        for (spelling, _) in PREDEFINED {
            if self.inner.matches(spelling) {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "spellings are at most six bytes"
                )]
                return Some(spelling.len() as u32);
            }
        }
        None
    }

    /// The code point at the current position, with a predefined entity
    /// reading as the character it references.
    #[must_use]
    pub fn peek(&self) -> char {
        if self.inner.peek() == '&' {
            for (spelling, referenced) in PREDEFINED {
                if self.inner.matches(spelling) {
                    return referenced;
                }
            }
        }
        self.inner.peek()
    }

    /// Consume what [`EntityCursor::peek`] reported: the whole spelling
    /// when positioned on a predefined entity, one code point otherwise.
    pub fn advance(&mut self) {
        match self.reference_len() {
            Some(len) => self.inner.advance_n(len),
            None => self.inner.advance(),
        }
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.inner.is_eof()
    }

    #[must_use]
    pub fn pos(&self) -> u32 {
        self.inner.pos()
    }

    #[must_use]
    pub fn into_inner(self) -> Cursor<'a> {
        self.inner
    }
}

/// Scan one entity reference, cursor positioned on the `&`.
///
/// Consumes the maximal well-formed prefix and returns its shape. On
/// [`EntityRef::Partial`] the cursor stops before the offending character
/// (or at the end of the buffer; callers check [`Cursor::is_eof`] to tell
/// a cut-off reference from a merely malformed one).
pub fn scan_entity_ref(cursor: &mut Cursor<'_>) -> EntityRef {
    debug_assert_eq!(cursor.peek(), '&');

    // Fast path: the entity-aware view recognizes the predefined five.
    let entity = EntityCursor::new(*cursor);
    if let Some(len) = entity.reference_len() {
        cursor.advance_n(len);
        return EntityRef::Predefined;
    }

    cursor.advance();
    match cursor.peek() {
        ';' => {
            cursor.advance();
            EntityRef::Empty
        }
        '#' => {
            cursor.advance();
            let before = cursor.pos();
            if cursor.peek() == 'x' {
                cursor.advance();
                let digits_from = cursor.pos();
                cursor.eat_while(|c| c.is_ascii_hexdigit());
                scan_numeric_tail(cursor, cursor.pos() > digits_from)
            } else {
                cursor.eat_while(|c| c.is_ascii_digit());
                scan_numeric_tail(cursor, cursor.pos() > before)
            }
        }
        c if is_name_start(c) => {
            cursor.eat_while(is_name_char);
            if cursor.peek() == ';' {
                cursor.advance();
                EntityRef::Predefined
            } else {
                EntityRef::Partial
            }
        }
        _ => EntityRef::Partial,
    }
}

fn scan_numeric_tail(cursor: &mut Cursor<'_>, has_digits: bool) -> EntityRef {
    if cursor.peek() == ';' {
        cursor.advance();
        if has_digits {
            EntityRef::Character
        } else {
            EntityRef::Partial
        }
    } else {
        EntityRef::Partial
    }
}
