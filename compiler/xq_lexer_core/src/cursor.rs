//! Code-point cursor over a source range.
//!
//! The cursor reads one Unicode code point at a time between a token-start
//! offset and the buffer end. EOF is reported through a sentinel value
//! (`0x00`) rather than an `Option`, so scanning loops terminate naturally:
//! no classification predicate accepts the sentinel.
//!
//! # Interior Null Characters
//!
//! A genuine U+0000 in the source also peeks as the sentinel. The two are
//! distinguished by [`Cursor::is_eof`], which compares the position against
//! the buffer end; dispatch loops check it once in their end-of-buffer arm
//! and emit an error token for the interior null case.
//!
//! # Backtracking
//!
//! [`Cursor::save`] remembers the current position in a single slot and
//! [`Cursor::restore`] returns to it. Every speculative lookahead in the
//! lexers resolves within one save/restore pair before the next begins, so
//! one slot is all the engine ever needs. The cursor is also [`Copy`] for
//! the few scans that need a full snapshot.

/// Sentinel returned by [`Cursor::peek`] at end of buffer.
pub const EOF_CHAR: char = '\0';

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when a content run stops at
/// more needle bytes than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// A seekable code-point reader with token-boundary tracking.
///
/// Holds four offsets: the start of the token in progress, the read
/// position, the end of the lexed range, and one saved position for
/// backtracking. The lexed range may be a sub-range of the text, which is
/// how a comment body is sub-lexed in place without copying.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Start offset of the token in progress.
    start: u32,
    /// Current read position.
    pos: u32,
    /// End of the lexed range (at most `text.len()`).
    end: u32,
    /// Single-slot saved position for speculative lookahead.
    saved: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over the whole of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        assert!(
            u32::try_from(text.len()).is_ok(),
            "source longer than u32::MAX bytes"
        );
        #[expect(clippy::cast_possible_truncation, reason = "length checked above")]
        let end = text.len() as u32;
        Self::with_range(text, 0, end)
    }

    /// Create a cursor over `start..end` of `text`.
    ///
    /// Both offsets must lie on character boundaries within `text`.
    #[must_use]
    pub fn with_range(text: &'a str, start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "range start {start} exceeds end {end}");
        debug_assert!((end as usize) <= text.len(), "range end {end} out of bounds");
        debug_assert!(text.is_char_boundary(start as usize));
        debug_assert!(text.is_char_boundary(end as usize));
        Cursor {
            text,
            start,
            pos: start,
            end,
            saved: start,
        }
    }

    /// Number of bytes in the UTF-8 sequence led by `byte`.
    #[inline]
    const fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// The code point at the current position, or [`EOF_CHAR`] at the end
    /// of the range.
    ///
    /// An interior U+0000 also reads as [`EOF_CHAR`]; [`Cursor::is_eof`]
    /// tells the two apart.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> char {
        if self.pos >= self.end {
            return EOF_CHAR;
        }
        self.text[self.pos as usize..self.end as usize]
            .chars()
            .next()
            .unwrap_or(EOF_CHAR)
    }

    /// Consume one code point. No effect at the end of the range.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.end {
            let width = Self::utf8_char_width(self.text.as_bytes()[self.pos as usize]);
            self.pos += width;
        }
    }

    /// Consume `n` bytes. The resulting position must lie on a character
    /// boundary; callers pass lengths of ASCII sequences they already
    /// matched.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        debug_assert!(self.pos + n <= self.end);
        debug_assert!(self.text.is_char_boundary((self.pos + n) as usize));
        self.pos += n;
    }

    /// Whether the read position has reached the end of the range.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Remember the current position in the save slot.
    #[inline]
    pub fn save(&mut self) {
        self.saved = self.pos;
    }

    /// Return to the position remembered by [`Cursor::save`].
    ///
    /// Every `restore` is paired with a preceding `save` in the same
    /// token-production call; the lexers never interleave two speculative
    /// scans.
    #[inline]
    pub fn restore(&mut self) {
        self.pos = self.saved;
    }

    /// Jump to an absolute offset. Must lie on a character boundary within
    /// the lexed range.
    #[inline]
    pub fn seek(&mut self, offset: u32) {
        debug_assert!(self.start <= offset && offset <= self.end);
        debug_assert!(self.text.is_char_boundary(offset as usize));
        self.pos = offset;
    }

    /// Begin a new token at the current position.
    #[inline]
    pub fn flush(&mut self) {
        self.start = self.pos;
    }

    /// Start offset of the token in progress.
    #[inline]
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Current read position.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// End of the lexed range.
    #[inline]
    #[must_use]
    pub fn range_end(&self) -> u32 {
        self.end
    }

    /// The source being lexed.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The text of the token in progress.
    #[inline]
    #[must_use]
    pub fn token_text(&self) -> &'a str {
        &self.text[self.start as usize..self.pos as usize]
    }

    /// Whether the unread input starts with `prefix`.
    ///
    /// Comparison is bounded by the range end; a prefix that would run past
    /// it does not match.
    #[inline]
    #[must_use]
    pub fn matches(&self, prefix: &str) -> bool {
        self.remaining_bytes().starts_with(prefix.as_bytes())
    }

    /// Consume code points while `pred` holds.
    ///
    /// `pred(EOF_CHAR)` must be false; every classification predicate used
    /// by the lexers rejects the sentinel.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        loop {
            let c = self.peek();
            if c == EOF_CHAR || !pred(c) {
                break;
            }
            self.advance();
        }
    }

    #[inline]
    fn remaining_bytes(&self) -> &'a [u8] {
        &self.text.as_bytes()[self.pos as usize..self.end as usize]
    }

    #[inline]
    fn stop_at(&mut self, found: Option<usize>) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "offsets are bounded by the range end, which fits in u32"
        )]
        match found {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.end,
        }
    }

    /// Advance to the next occurrence of `a`, or to the range end.
    ///
    /// The needle must be ASCII so the stop position lands on a character
    /// boundary.
    pub fn eat_until(&mut self, a: u8) {
        debug_assert!(a.is_ascii());
        let found = memchr::memchr(a, self.remaining_bytes());
        self.stop_at(found);
    }

    /// Advance to the next occurrence of either byte, or to the range end.
    ///
    /// Needles must be ASCII so the stop position lands on a character
    /// boundary.
    pub fn eat_until2(&mut self, a: u8, b: u8) {
        debug_assert!(a.is_ascii() && b.is_ascii());
        let found = memchr::memchr2(a, b, self.remaining_bytes());
        self.stop_at(found);
    }

    /// Advance to the next occurrence of any of three bytes, or to the
    /// range end.
    pub fn eat_until3(&mut self, a: u8, b: u8, c: u8) {
        debug_assert!(a.is_ascii() && b.is_ascii() && c.is_ascii());
        let found = memchr::memchr3(a, b, c, self.remaining_bytes());
        self.stop_at(found);
    }

    /// Advance to the next occurrence of any of four bytes, or to the
    /// range end.
    pub fn eat_until4(&mut self, a: u8, b: u8, c: u8, d: u8) {
        debug_assert!(a.is_ascii() && b.is_ascii() && c.is_ascii() && d.is_ascii());
        let remaining = self.remaining_bytes();
        let primary = memchr::memchr3(a, b, c, remaining);
        let secondary = memchr::memchr(d, remaining);
        self.stop_at(earliest_of(primary, secondary));
    }

    /// Advance to the next occurrence of any of five bytes, or to the
    /// range end.
    pub fn eat_until5(&mut self, a: u8, b: u8, c: u8, d: u8, e: u8) {
        debug_assert!(a.is_ascii() && b.is_ascii() && c.is_ascii());
        debug_assert!(d.is_ascii() && e.is_ascii());
        let remaining = self.remaining_bytes();
        let primary = memchr::memchr3(a, b, c, remaining);
        let secondary = memchr::memchr2(d, e, remaining);
        self.stop_at(earliest_of(primary, secondary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn peek_returns_first_char() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), 'a');
    }

    #[test]
    fn advance_moves_one_code_point() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.peek(), 'b');
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn advance_handles_multibyte() {
        let mut cursor = Cursor::new("é←𐍈x");
        assert_eq!(cursor.peek(), 'é');
        cursor.advance();
        assert_eq!(cursor.peek(), '←');
        cursor.advance();
        assert_eq!(cursor.peek(), '𐍈');
        cursor.advance();
        assert_eq!(cursor.peek(), 'x');
        assert_eq!(cursor.pos(), 9);
    }

    #[test]
    fn peek_at_end_is_sentinel_forever() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), EOF_CHAR);
        cursor.advance();
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn empty_source_is_eof() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), EOF_CHAR);
    }

    #[test]
    fn interior_null_peeks_as_sentinel_but_is_not_eof() {
        let mut cursor = Cursor::new("a\0b");
        cursor.advance();
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert!(!cursor.is_eof());
        cursor.advance();
        assert_eq!(cursor.peek(), 'b');
    }

    #[test]
    fn save_and_restore() {
        let mut cursor = Cursor::new("hello");
        cursor.advance();
        cursor.save();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pos(), 3);
        cursor.restore();
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.peek(), 'e');
    }

    #[test]
    fn seek_jumps_to_offset() {
        let mut cursor = Cursor::new("hello");
        cursor.seek(3);
        assert_eq!(cursor.peek(), 'l');
        cursor.seek(0);
        assert_eq!(cursor.peek(), 'h');
    }

    #[test]
    fn flush_begins_a_new_token() {
        let mut cursor = Cursor::new("let x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.token_text(), "let");
        assert_eq!(cursor.start(), 0);
        cursor.flush();
        assert_eq!(cursor.start(), 3);
        assert_eq!(cursor.token_text(), "");
    }

    #[test]
    fn sub_range_stops_early() {
        let mut cursor = Cursor::with_range("abcdef", 2, 4);
        assert_eq!(cursor.peek(), 'c');
        cursor.advance();
        assert_eq!(cursor.peek(), 'd');
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), EOF_CHAR);
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn matches_is_bounded_by_range_end() {
        let cursor = Cursor::with_range("abcdef", 0, 3);
        assert!(cursor.matches("abc"));
        assert!(!cursor.matches("abcd"));
    }

    #[test]
    fn advance_n_consumes_bytes() {
        let mut cursor = Cursor::new("Q{uri}");
        assert!(cursor.matches("Q{"));
        cursor.advance_n(2);
        assert_eq!(cursor.peek(), 'u');
    }

    #[test]
    fn eat_while_stops_at_predicate_failure() {
        let mut cursor = Cursor::new("abc123");
        cursor.eat_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.peek(), '1');
    }

    #[test]
    fn eat_while_stops_at_eof() {
        let mut cursor = Cursor::new("abc");
        cursor.eat_while(|c| c.is_ascii_alphabetic());
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_until_finds_the_needle() {
        let mut cursor = Cursor::new("abc:)def");
        cursor.eat_until(b':');
        assert_eq!(cursor.peek(), ':');
        assert_eq!(cursor.pos(), 3);
    }

    #[test]
    fn eat_until2_finds_earliest() {
        let mut cursor = Cursor::new("some text & more");
        cursor.eat_until2(b'&', b'<');
        assert_eq!(cursor.peek(), '&');
        assert_eq!(cursor.pos(), 10);
    }

    #[test]
    fn eat_until3_runs_to_end_when_absent() {
        let mut cursor = Cursor::new("plain text");
        cursor.eat_until3(b'<', b'{', b'}');
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_until4_combines_searches() {
        let mut cursor = Cursor::new("abc}def");
        cursor.eat_until4(b'<', b'{', b'&', b'}');
        assert_eq!(cursor.peek(), '}');
        let mut cursor = Cursor::new("ab&cdef");
        cursor.eat_until4(b'<', b'{', b'&', b'}');
        assert_eq!(cursor.peek(), '&');
    }

    #[test]
    fn eat_until5_combines_searches() {
        let mut cursor = Cursor::new("value<tag");
        cursor.eat_until5(b'"', b'{', b'}', b'&', b'<');
        assert_eq!(cursor.peek(), '<');
        assert_eq!(cursor.pos(), 5);
    }

    #[test]
    fn eat_until_is_bounded_by_range_end() {
        let mut cursor = Cursor::with_range("abc<def", 0, 3);
        cursor.eat_until2(b'<', b'&');
        assert_eq!(cursor.pos(), 3);
        assert!(cursor.is_eof());
    }

    #[test]
    fn copy_snapshot_restores_full_state() {
        let mut cursor = Cursor::new("for $x");
        cursor.advance();
        cursor.advance();
        let snapshot = cursor;
        cursor.advance();
        cursor.advance();
        cursor = snapshot;
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.peek(), 'r');
    }
}
