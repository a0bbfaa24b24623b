//! Token sets.
//!
//! A [`TokenSet`] is a bitset over the token-kind catalog, buildable in
//! const context. The parser keys recovery and expectation reporting off
//! these sets; the named groupings below are part of the boundary contract
//! with that layer.

use crate::TokenKind;

const WORDS: usize = TokenKind::COUNT.div_ceil(64);

// The catalog must fit the backing words.
const _: () = assert!(TokenKind::COUNT <= WORDS * 64);

/// A set of token kinds, stored as a fixed-width bitset.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct TokenSet([u64; WORDS]);

impl TokenSet {
    /// The empty set.
    pub const EMPTY: TokenSet = TokenSet([0; WORDS]);

    /// All comparison operators: value, general, and node comparisons.
    pub const COMPARISONS: TokenSet = TokenSet::new(&[
        TokenKind::Equal,
        TokenKind::BangEqual,
        TokenKind::LessThan,
        TokenKind::LessThanEqual,
        TokenKind::GreaterThan,
        TokenKind::GreaterThanEqual,
        TokenKind::KwEq,
        TokenKind::KwNe,
        TokenKind::KwLt,
        TokenKind::KwLe,
        TokenKind::KwGt,
        TokenKind::KwGe,
        TokenKind::KwIs,
        TokenKind::NodeBefore,
        TokenKind::NodeAfter,
    ]);

    /// Keywords naming a forward axis.
    pub const FORWARD_AXES: TokenSet = TokenSet::new(&[
        TokenKind::KwChild,
        TokenKind::KwDescendant,
        TokenKind::KwAttribute,
        TokenKind::KwSelf,
        TokenKind::KwDescendantOrSelf,
        TokenKind::KwFollowingSibling,
        TokenKind::KwFollowing,
        TokenKind::KwNamespace,
    ]);

    /// Keywords naming a reverse axis.
    pub const REVERSE_AXES: TokenSet = TokenSet::new(&[
        TokenKind::KwParent,
        TokenKind::KwAncestor,
        TokenKind::KwPrecedingSibling,
        TokenKind::KwPreceding,
        TokenKind::KwAncestorOrSelf,
    ]);

    /// Keywords that open a kind test or item-type test.
    pub const KIND_TESTS: TokenSet = TokenSet::new(&[
        TokenKind::KwComment,
        TokenKind::KwDocumentNode,
        TokenKind::KwElement,
        TokenKind::KwAttribute,
        TokenKind::KwSchemaElement,
        TokenKind::KwSchemaAttribute,
        TokenKind::KwProcessingInstruction,
        TokenKind::KwText,
        TokenKind::KwNode,
        TokenKind::KwNamespaceNode,
        TokenKind::KwEmptySequence,
        TokenKind::KwItem,
        TokenKind::KwMap,
        TokenKind::KwArray,
        TokenKind::KwFunction,
        TokenKind::KwRecord,
    ]);

    /// The well-formed numeric literal kinds.
    pub const NUMERIC_LITERALS: TokenSet = TokenSet::new(&[
        TokenKind::IntegerLiteral,
        TokenKind::DecimalLiteral,
        TokenKind::DoubleLiteral,
    ]);

    /// Every entity- and character-reference kind, across all four
    /// context families.
    pub const ENTITY_REFS: TokenSet = TokenSet::new(&[
        TokenKind::CharacterReference,
        TokenKind::PredefinedEntityReference,
        TokenKind::PartialEntityReference,
        TokenKind::EmptyEntityReference,
        TokenKind::XmlCharacterReference,
        TokenKind::XmlPredefinedEntityReference,
        TokenKind::XmlPartialEntityReference,
        TokenKind::XmlEmptyEntityReference,
        TokenKind::XmlAttrCharacterReference,
        TokenKind::XmlAttrPredefinedEntityReference,
        TokenKind::XmlAttrPartialEntityReference,
        TokenKind::XmlAttrEmptyEntityReference,
        TokenKind::CharacterReferenceNotInString,
        TokenKind::EntityReferenceNotInString,
        TokenKind::PartialEntityReferenceNotInString,
        TokenKind::EmptyEntityReferenceNotInString,
    ]);

    /// Every kind representing malformed or incomplete input.
    pub const ERRORS: TokenSet = {
        let mut set = TokenSet::EMPTY;
        let mut i = 0;
        while i < TokenKind::COUNT {
            if TokenKind::ALL[i].is_error() {
                set = set.with(TokenKind::ALL[i]);
            }
            i += 1;
        }
        set
    };

    /// Every kind a parser skips as trivia.
    pub const TRIVIA: TokenSet = {
        let mut set = TokenSet::EMPTY;
        let mut i = 0;
        while i < TokenKind::COUNT {
            if TokenKind::ALL[i].is_trivia() {
                set = set.with(TokenKind::ALL[i]);
            }
            i += 1;
        }
        set
    };

    /// Build a set from a slice of kinds.
    #[must_use]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut set = TokenSet::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// A set containing one kind.
    #[must_use]
    pub const fn single(kind: TokenKind) -> Self {
        TokenSet::EMPTY.with(kind)
    }

    /// This set plus `kind`.
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let index = kind.discriminant_index() as usize;
        let mut words = self.0;
        words[index / 64] |= 1 << (index % 64);
        TokenSet(words)
    }

    /// The union of two sets.
    #[must_use]
    pub const fn union(self, other: TokenSet) -> Self {
        let mut words = self.0;
        let mut i = 0;
        while i < WORDS {
            words[i] |= other.0[i];
            i += 1;
        }
        TokenSet(words)
    }

    /// The intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: TokenSet) -> Self {
        let mut words = self.0;
        let mut i = 0;
        while i < WORDS {
            words[i] &= other.0[i];
            i += 1;
        }
        TokenSet(words)
    }

    /// Whether `kind` is a member.
    #[inline]
    #[must_use]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let index = kind.discriminant_index() as usize;
        self.0[index / 64] & (1 << (index % 64)) != 0
    }

    /// Whether the set has no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < WORDS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of members.
    #[must_use]
    pub const fn count(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < WORDS {
            total += self.0[i].count_ones() as usize;
            i += 1;
        }
        total
    }

    /// Add a kind in place.
    pub fn insert(&mut self, kind: TokenKind) {
        *self = self.with(kind);
    }

    /// Members in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }

    /// Format the members as an "expected ..." list for diagnostics.
    ///
    /// Produces `` `a` ``, `` `a` or `b` ``, or `` `a`, `b`, or `c` ``
    /// depending on cardinality; the empty set formats as an empty string.
    #[must_use]
    pub fn format_expected(&self) -> String {
        let names: Vec<&'static str> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => String::new(),
            [only] => format!("`{only}`"),
            [first, second] => format!("`{first}` or `{second}`"),
            [init @ .., last] => {
                let mut out = String::new();
                for name in init {
                    out.push('`');
                    out.push_str(name);
                    out.push_str("`, ");
                }
                out.push_str("or `");
                out.push_str(last);
                out.push('`');
                out
            }
        }
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_set_has_no_members() {
        assert!(TokenSet::EMPTY.is_empty());
        assert_eq!(TokenSet::EMPTY.count(), 0);
        assert!(!TokenSet::EMPTY.contains(TokenKind::Comma));
    }

    #[test]
    fn new_and_contains() {
        let set = TokenSet::new(&[TokenKind::Comma, TokenKind::KwZeroDigit]);
        assert!(set.contains(TokenKind::Comma));
        assert!(set.contains(TokenKind::KwZeroDigit));
        assert!(!set.contains(TokenKind::Semicolon));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn membership_works_across_word_boundaries() {
        // First and last catalog entries land in different backing words.
        let set = TokenSet::new(&[TokenKind::Whitespace, TokenKind::KwZeroDigit]);
        assert!(set.contains(TokenKind::Whitespace));
        assert!(set.contains(TokenKind::KwZeroDigit));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn union_and_intersection() {
        let a = TokenSet::new(&[TokenKind::Plus, TokenKind::Minus]);
        let b = TokenSet::new(&[TokenKind::Minus, TokenKind::Star]);
        let union = a.union(b);
        assert_eq!(union.count(), 3);
        let inter = a.intersection(b);
        assert_eq!(inter.count(), 1);
        assert!(inter.contains(TokenKind::Minus));
    }

    #[test]
    fn insert_mutates() {
        let mut set = TokenSet::single(TokenKind::Dot);
        set.insert(TokenKind::Ellipsis);
        assert!(set.contains(TokenKind::Dot));
        assert!(set.contains(TokenKind::Ellipsis));
    }

    #[test]
    fn iter_yields_discriminant_order() {
        let set = TokenSet::new(&[TokenKind::KwAnd, TokenKind::Comma, TokenKind::Slash]);
        let kinds: Vec<TokenKind> = set.iter().collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Comma, TokenKind::Slash, TokenKind::KwAnd]
        );
    }

    #[test]
    fn comparisons_cover_all_three_families() {
        assert!(TokenSet::COMPARISONS.contains(TokenKind::Equal));
        assert!(TokenSet::COMPARISONS.contains(TokenKind::KwEq));
        assert!(TokenSet::COMPARISONS.contains(TokenKind::NodeBefore));
        assert_eq!(TokenSet::COMPARISONS.count(), 15);
    }

    #[test]
    fn axes_are_disjoint() {
        let both = TokenSet::FORWARD_AXES.intersection(TokenSet::REVERSE_AXES);
        assert!(both.is_empty());
        assert_eq!(TokenSet::FORWARD_AXES.count(), 8);
        assert_eq!(TokenSet::REVERSE_AXES.count(), 5);
    }

    #[test]
    fn numeric_literals_exclude_the_recovery_kind() {
        assert_eq!(TokenSet::NUMERIC_LITERALS.count(), 3);
        assert!(!TokenSet::NUMERIC_LITERALS.contains(TokenKind::PartialDoubleExponent));
    }

    #[test]
    fn entity_refs_cover_all_four_families() {
        assert_eq!(TokenSet::ENTITY_REFS.count(), 16);
        // The partial and empty kinds, and the whole outside-string
        // family, double as error kinds.
        let also_errors = TokenSet::ENTITY_REFS.intersection(TokenSet::ERRORS);
        assert_eq!(also_errors.count(), 10);
    }

    #[test]
    fn errors_set_matches_predicate() {
        for kind in TokenKind::ALL {
            assert_eq!(
                TokenSet::ERRORS.contains(kind),
                kind.is_error(),
                "mismatch for {kind:?}"
            );
        }
    }

    #[test]
    fn trivia_set_matches_predicate() {
        for kind in TokenKind::ALL {
            assert_eq!(
                TokenSet::TRIVIA.contains(kind),
                kind.is_trivia(),
                "mismatch for {kind:?}"
            );
        }
    }

    #[test]
    fn format_expected_cardinalities() {
        assert_eq!(TokenSet::EMPTY.format_expected(), "");
        assert_eq!(
            TokenSet::single(TokenKind::Comma).format_expected(),
            "`,`"
        );
        assert_eq!(
            TokenSet::new(&[TokenKind::Comma, TokenKind::Semicolon]).format_expected(),
            "`,` or `;`"
        );
        assert_eq!(
            TokenSet::new(&[TokenKind::Comma, TokenKind::Semicolon, TokenKind::ParenClose])
                .format_expected(),
            "`)`, `,`, or `;`"
        );
    }
}
