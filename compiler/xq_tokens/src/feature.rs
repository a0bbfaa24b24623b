//! Language features that introduce keywords.
//!
//! Every keyword kind is tagged with the language level or extension whose
//! grammar first uses it. The conformance layer compares a keyword's
//! feature against the version declared by the query to flag constructs
//! the declared version does not support.

use crate::TokenKind;

/// The language level or extension a keyword belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    XPath20,
    XPath30,
    XPath31,
    XPath40,
    XQuery10,
    XQuery30,
    UpdateFacility,
    FullText,
    Scripting,
}

impl Feature {
    /// Human-readable name, as used in conformance diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::XPath20 => "XPath 2.0",
            Feature::XPath30 => "XPath 3.0",
            Feature::XPath31 => "XPath 3.1",
            Feature::XPath40 => "XPath 4.0",
            Feature::XQuery10 => "XQuery 1.0",
            Feature::XQuery30 => "XQuery 3.0",
            Feature::UpdateFacility => "XQuery Update Facility",
            Feature::FullText => "XQuery Full Text",
            Feature::Scripting => "XQuery Scripting Extension",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenKind {
    /// The feature that introduces this keyword, `None` for non-keywords.
    #[must_use]
    #[expect(clippy::too_many_lines, reason = "one arm per keyword group")]
    pub const fn feature(self) -> Option<Feature> {
        Some(match self {
            TokenKind::KwAncestor
            | TokenKind::KwAncestorOrSelf
            | TokenKind::KwAnd
            | TokenKind::KwAs
            | TokenKind::KwAttribute
            | TokenKind::KwCast
            | TokenKind::KwCastable
            | TokenKind::KwChild
            | TokenKind::KwComment
            | TokenKind::KwDescendant
            | TokenKind::KwDescendantOrSelf
            | TokenKind::KwDiv
            | TokenKind::KwDocumentNode
            | TokenKind::KwElement
            | TokenKind::KwElse
            | TokenKind::KwEmptySequence
            | TokenKind::KwEq
            | TokenKind::KwEvery
            | TokenKind::KwExcept
            | TokenKind::KwFollowing
            | TokenKind::KwFollowingSibling
            | TokenKind::KwFor
            | TokenKind::KwGe
            | TokenKind::KwGt
            | TokenKind::KwIdiv
            | TokenKind::KwIf
            | TokenKind::KwIn
            | TokenKind::KwInstance
            | TokenKind::KwIntersect
            | TokenKind::KwIs
            | TokenKind::KwItem
            | TokenKind::KwLe
            | TokenKind::KwLt
            | TokenKind::KwMod
            | TokenKind::KwNamespace
            | TokenKind::KwNe
            | TokenKind::KwNode
            | TokenKind::KwOf
            | TokenKind::KwOr
            | TokenKind::KwParent
            | TokenKind::KwPreceding
            | TokenKind::KwPrecedingSibling
            | TokenKind::KwProcessingInstruction
            | TokenKind::KwReturn
            | TokenKind::KwSatisfies
            | TokenKind::KwSchemaAttribute
            | TokenKind::KwSchemaElement
            | TokenKind::KwSelf
            | TokenKind::KwSome
            | TokenKind::KwText
            | TokenKind::KwThen
            | TokenKind::KwTo
            | TokenKind::KwTreat
            | TokenKind::KwUnion => Feature::XPath20,

            TokenKind::KwFunction | TokenKind::KwLet | TokenKind::KwNamespaceNode => {
                Feature::XPath30
            }

            TokenKind::KwArray | TokenKind::KwMap => Feature::XPath31,

            TokenKind::KwOtherwise | TokenKind::KwRecord => Feature::XPath40,

            TokenKind::KwAscending
            | TokenKind::KwAt
            | TokenKind::KwBaseUri
            | TokenKind::KwBoundarySpace
            | TokenKind::KwBy
            | TokenKind::KwCase
            | TokenKind::KwCollation
            | TokenKind::KwConstruction
            | TokenKind::KwCopyNamespaces
            | TokenKind::KwDeclare
            | TokenKind::KwDefault
            | TokenKind::KwDescending
            | TokenKind::KwDocument
            | TokenKind::KwEmpty
            | TokenKind::KwEncoding
            | TokenKind::KwExternal
            | TokenKind::KwGreatest
            | TokenKind::KwImport
            | TokenKind::KwInherit
            | TokenKind::KwLax
            | TokenKind::KwLeast
            | TokenKind::KwModule
            | TokenKind::KwNoInherit
            | TokenKind::KwNoPreserve
            | TokenKind::KwOption
            | TokenKind::KwOrder
            | TokenKind::KwOrdered
            | TokenKind::KwOrdering
            | TokenKind::KwPreserve
            | TokenKind::KwSchema
            | TokenKind::KwStable
            | TokenKind::KwStrict
            | TokenKind::KwStrip
            | TokenKind::KwTypeswitch
            | TokenKind::KwUnordered
            | TokenKind::KwValidate
            | TokenKind::KwVariable
            | TokenKind::KwVersion
            | TokenKind::KwWhere
            | TokenKind::KwXquery => Feature::XQuery10,

            TokenKind::KwAllowing
            | TokenKind::KwCatch
            | TokenKind::KwContext
            | TokenKind::KwCount
            | TokenKind::KwDecimalFormat
            | TokenKind::KwDecimalSeparator
            | TokenKind::KwDigit
            | TokenKind::KwEnd
            | TokenKind::KwExponentSeparator
            | TokenKind::KwGroup
            | TokenKind::KwGroupingSeparator
            | TokenKind::KwInfinity
            | TokenKind::KwMinusSign
            | TokenKind::KwNaN
            | TokenKind::KwNext
            | TokenKind::KwOnly
            | TokenKind::KwPatternSeparator
            | TokenKind::KwPerMille
            | TokenKind::KwPercent
            | TokenKind::KwPrevious
            | TokenKind::KwSliding
            | TokenKind::KwStart
            | TokenKind::KwSwitch
            | TokenKind::KwTry
            | TokenKind::KwTumbling
            | TokenKind::KwWhen
            | TokenKind::KwWindow
            | TokenKind::KwZeroDigit => Feature::XQuery30,

            TokenKind::KwAfter
            | TokenKind::KwBefore
            | TokenKind::KwCopy
            | TokenKind::KwDelete
            | TokenKind::KwFirst
            | TokenKind::KwInsert
            | TokenKind::KwInto
            | TokenKind::KwLast
            | TokenKind::KwModify
            | TokenKind::KwNodes
            | TokenKind::KwRename
            | TokenKind::KwReplace
            | TokenKind::KwRevalidation
            | TokenKind::KwSkip
            | TokenKind::KwUpdating
            | TokenKind::KwValue
            | TokenKind::KwWith => Feature::UpdateFacility,

            TokenKind::KwAll
            | TokenKind::KwAny
            | TokenKind::KwContains
            | TokenKind::KwContent
            | TokenKind::KwDiacritics
            | TokenKind::KwDifferent
            | TokenKind::KwDistance
            | TokenKind::KwEntire
            | TokenKind::KwExactly
            | TokenKind::KwFrom
            | TokenKind::KwFtAnd
            | TokenKind::KwFtNot
            | TokenKind::KwFtOr
            | TokenKind::KwInsensitive
            | TokenKind::KwLanguage
            | TokenKind::KwLevels
            | TokenKind::KwLowercase
            | TokenKind::KwMost
            | TokenKind::KwNo
            | TokenKind::KwNot
            | TokenKind::KwOccurs
            | TokenKind::KwParagraph
            | TokenKind::KwParagraphs
            | TokenKind::KwPhrase
            | TokenKind::KwRelationship
            | TokenKind::KwSame
            | TokenKind::KwScore
            | TokenKind::KwSensitive
            | TokenKind::KwSentence
            | TokenKind::KwSentences
            | TokenKind::KwStemming
            | TokenKind::KwStop
            | TokenKind::KwThesaurus
            | TokenKind::KwTimes
            | TokenKind::KwUppercase
            | TokenKind::KwUsing
            | TokenKind::KwWeight
            | TokenKind::KwWildcards
            | TokenKind::KwWithout
            | TokenKind::KwWord
            | TokenKind::KwWords => Feature::FullText,

            TokenKind::KwExit | TokenKind::KwReturning | TokenKind::KwWhile => Feature::Scripting,

            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_keyword_has_a_feature() {
        for kind in TokenKind::ALL {
            assert_eq!(
                kind.feature().is_some(),
                kind.is_keyword(),
                "feature coverage mismatch for {kind:?}"
            );
        }
    }

    #[test]
    fn feature_counts() {
        let count = |feature: Feature| {
            TokenKind::ALL
                .iter()
                .filter(|k| k.feature() == Some(feature))
                .count()
        };
        assert_eq!(count(Feature::XPath20), 54);
        assert_eq!(count(Feature::XPath30), 3);
        assert_eq!(count(Feature::XPath31), 2);
        assert_eq!(count(Feature::XPath40), 2);
        assert_eq!(count(Feature::XQuery10), 40);
        assert_eq!(count(Feature::XQuery30), 28);
        assert_eq!(count(Feature::UpdateFacility), 17);
        assert_eq!(count(Feature::FullText), 41);
        assert_eq!(count(Feature::Scripting), 3);
    }

    #[test]
    fn representative_assignments() {
        assert_eq!(TokenKind::KwChild.feature(), Some(Feature::XPath20));
        assert_eq!(TokenKind::KwLet.feature(), Some(Feature::XPath30));
        assert_eq!(TokenKind::KwMap.feature(), Some(Feature::XPath31));
        assert_eq!(TokenKind::KwXquery.feature(), Some(Feature::XQuery10));
        assert_eq!(TokenKind::KwTumbling.feature(), Some(Feature::XQuery30));
        assert_eq!(TokenKind::KwInsert.feature(), Some(Feature::UpdateFacility));
        assert_eq!(TokenKind::KwFtAnd.feature(), Some(Feature::FullText));
        assert_eq!(TokenKind::KwWhile.feature(), Some(Feature::Scripting));
        assert_eq!(TokenKind::NCName.feature(), None);
        assert_eq!(TokenKind::Comma.feature(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Feature::XPath20.to_string(), "XPath 2.0");
        assert_eq!(Feature::FullText.to_string(), "XQuery Full Text");
    }
}
