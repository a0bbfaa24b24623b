//! Source location tracking.
//!
//! A [`Span`] is a half-open byte range `start..end` into the source text.
//! Spans use `u32` offsets, which caps a single input at 4 GiB; the fallible
//! constructor [`Span::try_from_range`] reports inputs that exceed that.
//!
//! Tokens never carry their lexeme. Slicing `&source[span.to_range()]`
//! recovers the exact text, so the token stream stays lossless while each
//! token stays eight bytes.

/// Errors that can occur when constructing a [`Span`] from `usize` offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The start offset exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// The end offset exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl std::fmt::Display for SpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanError::StartTooLarge(start) => write!(
                f,
                "span start {start} (0x{start:x}) exceeds u32::MAX; input too large to span"
            ),
            SpanError::EndTooLarge(end) => write!(
                f,
                "span end {end} (0x{end:x}) exceeds u32::MAX; input too large to span"
            ),
        }
    }
}

impl std::error::Error for SpanError {}

/// A half-open byte range `start..end` into the source text.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    /// Byte offset of the first byte of the token.
    pub start: u32,
    /// Byte offset one past the last byte of the token.
    pub end: u32,
}

impl Span {
    /// An empty span at offset zero, for synthesized tokens.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a span from byte offsets.
    #[must_use]
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create an empty span at a single offset.
    ///
    /// Zero-width tokens (end-of-input markers, block recovery markers) sit
    /// between two bytes without covering either.
    #[must_use]
    #[inline]
    pub const fn point(at: u32) -> Self {
        Span { start: at, end: at }
    }

    /// Create a span from a `usize` range, failing if either offset
    /// overflows `u32`.
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Create a span from a `usize` range.
    ///
    /// # Panics
    ///
    /// Panics if either offset overflows `u32`. Use [`Span::try_from_range`]
    /// where the input size is not already bounded.
    #[must_use]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Self::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Length of the span in bytes.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers zero bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `offset` falls inside the span.
    #[must_use]
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The smallest span covering both `self` and `other`.
    #[must_use]
    pub fn merge(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extend the span so that it ends at `end`.
    #[must_use]
    pub const fn extend_to(&self, end: u32) -> Span {
        Span {
            start: self.start,
            end,
        }
    }

    /// The span as a `usize` range, for slicing source text.
    #[must_use]
    #[inline]
    pub const fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl std::fmt::Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_stores_offsets() {
        let span = Span::new(3, 9);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 9);
    }

    #[test]
    fn dummy_is_empty_at_zero() {
        assert_eq!(Span::DUMMY.start, 0);
        assert_eq!(Span::DUMMY.end, 0);
        assert!(Span::DUMMY.is_empty());
    }

    #[test]
    fn point_is_empty() {
        let span = Span::point(17);
        assert_eq!(span.start, 17);
        assert_eq!(span.end, 17);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn len_counts_bytes() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert_eq!(Span::new(4, 4).len(), 0);
    }

    #[test]
    fn len_is_zero_for_inverted_span() {
        assert_eq!(Span::new(9, 3).len(), 0);
        assert!(Span::new(9, 3).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let span = Span::new(2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn empty_span_contains_nothing() {
        let span = Span::point(3);
        assert!(!span.contains(3));
    }

    #[test]
    fn try_from_range_accepts_small_ranges() {
        let span = Span::try_from_range(10..20);
        assert_eq!(span, Ok(Span::new(10, 20)));
    }

    #[test]
    fn try_from_range_rejects_large_start() {
        let big = u32::MAX as usize + 1;
        let err = Span::try_from_range(big..big + 4);
        assert_eq!(err, Err(SpanError::StartTooLarge(big)));
    }

    #[test]
    fn try_from_range_rejects_large_end() {
        let big = u32::MAX as usize + 1;
        let err = Span::try_from_range(0..big);
        assert_eq!(err, Err(SpanError::EndTooLarge(big)));
    }

    #[test]
    fn try_from_range_accepts_u32_max_end() {
        let max = u32::MAX as usize;
        let span = Span::try_from_range(0..max);
        assert_eq!(span, Ok(Span::new(0, u32::MAX)));
    }

    #[test]
    fn from_range_matches_new() {
        assert_eq!(Span::from_range(1..8), Span::new(1, 8));
    }

    #[test]
    fn merge_covers_both() {
        let a = Span::new(2, 5);
        let b = Span::new(8, 11);
        assert_eq!(a.merge(b), Span::new(2, 11));
        assert_eq!(b.merge(a), Span::new(2, 11));
    }

    #[test]
    fn merge_of_nested_is_outer() {
        let outer = Span::new(0, 10);
        let inner = Span::new(3, 4);
        assert_eq!(outer.merge(inner), outer);
    }

    #[test]
    fn extend_to_moves_end() {
        assert_eq!(Span::new(2, 5).extend_to(9), Span::new(2, 9));
    }

    #[test]
    fn to_range_round_trips() {
        let text = "for $x in //item";
        let span = Span::new(4, 6);
        assert_eq!(&text[span.to_range()], "$x");
    }

    #[test]
    fn debug_and_display_agree() {
        let span = Span::new(12, 30);
        assert_eq!(format!("{span:?}"), "12..30");
        assert_eq!(format!("{span}"), "12..30");
    }

    #[test]
    fn error_display_names_offending_offset() {
        let big = u32::MAX as usize + 1;
        let msg = SpanError::StartTooLarge(big).to_string();
        assert!(msg.contains("4294967296"));
        assert!(msg.contains("0x100000000"));
    }

    #[test]
    fn default_is_dummy() {
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
