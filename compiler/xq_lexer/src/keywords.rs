//! Keyword lookup tables.
//!
//! Keywords are not recognized during scanning. The lexers scan a full
//! name first and only then consult one of these tables, so a name like
//! `ancestor-or-self` is classified in one step rather than as three
//! tokens. [`xquery_keyword`] covers the superset vocabulary and falls
//! back to [`xpath_keyword`] for everything the two languages share.

use xq_tokens::TokenKind;

/// Looks up a scanned name in the XPath keyword table.
///
/// Returns `None` for names that are not keywords, including names that
/// are keywords only in the XQuery vocabulary.
#[expect(clippy::too_many_lines, reason = "one arm per keyword")]
pub fn xpath_keyword(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=22).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::KwAs),
            "eq" => Some(TokenKind::KwEq),
            "ge" => Some(TokenKind::KwGe),
            "gt" => Some(TokenKind::KwGt),
            "if" => Some(TokenKind::KwIf),
            "in" => Some(TokenKind::KwIn),
            "is" => Some(TokenKind::KwIs),
            "le" => Some(TokenKind::KwLe),
            "lt" => Some(TokenKind::KwLt),
            "ne" => Some(TokenKind::KwNe),
            "of" => Some(TokenKind::KwOf),
            "or" => Some(TokenKind::KwOr),
            "to" => Some(TokenKind::KwTo),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::KwAnd),
            "div" => Some(TokenKind::KwDiv),
            "for" => Some(TokenKind::KwFor),
            "let" => Some(TokenKind::KwLet),
            "map" => Some(TokenKind::KwMap),
            "mod" => Some(TokenKind::KwMod),
            _ => None,
        },
        4 => match text {
            "cast" => Some(TokenKind::KwCast),
            "else" => Some(TokenKind::KwElse),
            "idiv" => Some(TokenKind::KwIdiv),
            "item" => Some(TokenKind::KwItem),
            "node" => Some(TokenKind::KwNode),
            "self" => Some(TokenKind::KwSelf),
            "some" => Some(TokenKind::KwSome),
            "text" => Some(TokenKind::KwText),
            "then" => Some(TokenKind::KwThen),
            _ => None,
        },
        5 => match text {
            "array" => Some(TokenKind::KwArray),
            "child" => Some(TokenKind::KwChild),
            "every" => Some(TokenKind::KwEvery),
            "treat" => Some(TokenKind::KwTreat),
            "union" => Some(TokenKind::KwUnion),
            _ => None,
        },
        6 => match text {
            "except" => Some(TokenKind::KwExcept),
            "parent" => Some(TokenKind::KwParent),
            "record" => Some(TokenKind::KwRecord),
            "return" => Some(TokenKind::KwReturn),
            _ => None,
        },
        7 => match text {
            "comment" => Some(TokenKind::KwComment),
            "element" => Some(TokenKind::KwElement),
            _ => None,
        },
        8 => match text {
            "ancestor" => Some(TokenKind::KwAncestor),
            "castable" => Some(TokenKind::KwCastable),
            "function" => Some(TokenKind::KwFunction),
            "instance" => Some(TokenKind::KwInstance),
            _ => None,
        },
        9 => match text {
            "attribute" => Some(TokenKind::KwAttribute),
            "following" => Some(TokenKind::KwFollowing),
            "intersect" => Some(TokenKind::KwIntersect),
            "namespace" => Some(TokenKind::KwNamespace),
            "otherwise" => Some(TokenKind::KwOtherwise),
            "preceding" => Some(TokenKind::KwPreceding),
            "satisfies" => Some(TokenKind::KwSatisfies),
            _ => None,
        },
        10 => match text {
            "descendant" => Some(TokenKind::KwDescendant),
            _ => None,
        },
        13 => match text {
            "document-node" => Some(TokenKind::KwDocumentNode),
            _ => None,
        },
        14 => match text {
            "empty-sequence" => Some(TokenKind::KwEmptySequence),
            "namespace-node" => Some(TokenKind::KwNamespaceNode),
            "schema-element" => Some(TokenKind::KwSchemaElement),
            _ => None,
        },
        16 => match text {
            "ancestor-or-self" => Some(TokenKind::KwAncestorOrSelf),
            "schema-attribute" => Some(TokenKind::KwSchemaAttribute),
            _ => None,
        },
        17 => match text {
            "following-sibling" => Some(TokenKind::KwFollowingSibling),
            "preceding-sibling" => Some(TokenKind::KwPrecedingSibling),
            _ => None,
        },
        18 => match text {
            "descendant-or-self" => Some(TokenKind::KwDescendantOrSelf),
            _ => None,
        },
        22 => match text {
            "processing-instruction" => Some(TokenKind::KwProcessingInstruction),
            _ => None,
        },
        _ => None,
    }
}

/// Keywords that exist only in the XQuery vocabulary, sorted by spelling
/// for binary search. `NaN` sorts first; it is the one capitalized entry.
static XQUERY_KEYWORDS: &[(&str, TokenKind)] = &[
    ("NaN", TokenKind::KwNaN),
    ("after", TokenKind::KwAfter),
    ("all", TokenKind::KwAll),
    ("allowing", TokenKind::KwAllowing),
    ("any", TokenKind::KwAny),
    ("ascending", TokenKind::KwAscending),
    ("at", TokenKind::KwAt),
    ("base-uri", TokenKind::KwBaseUri),
    ("before", TokenKind::KwBefore),
    ("boundary-space", TokenKind::KwBoundarySpace),
    ("by", TokenKind::KwBy),
    ("case", TokenKind::KwCase),
    ("catch", TokenKind::KwCatch),
    ("collation", TokenKind::KwCollation),
    ("construction", TokenKind::KwConstruction),
    ("contains", TokenKind::KwContains),
    ("content", TokenKind::KwContent),
    ("context", TokenKind::KwContext),
    ("copy", TokenKind::KwCopy),
    ("copy-namespaces", TokenKind::KwCopyNamespaces),
    ("count", TokenKind::KwCount),
    ("decimal-format", TokenKind::KwDecimalFormat),
    ("decimal-separator", TokenKind::KwDecimalSeparator),
    ("declare", TokenKind::KwDeclare),
    ("default", TokenKind::KwDefault),
    ("delete", TokenKind::KwDelete),
    ("descending", TokenKind::KwDescending),
    ("diacritics", TokenKind::KwDiacritics),
    ("different", TokenKind::KwDifferent),
    ("digit", TokenKind::KwDigit),
    ("distance", TokenKind::KwDistance),
    ("document", TokenKind::KwDocument),
    ("empty", TokenKind::KwEmpty),
    ("encoding", TokenKind::KwEncoding),
    ("end", TokenKind::KwEnd),
    ("entire", TokenKind::KwEntire),
    ("exactly", TokenKind::KwExactly),
    ("exit", TokenKind::KwExit),
    ("exponent-separator", TokenKind::KwExponentSeparator),
    ("external", TokenKind::KwExternal),
    ("first", TokenKind::KwFirst),
    ("from", TokenKind::KwFrom),
    ("ftand", TokenKind::KwFtAnd),
    ("ftnot", TokenKind::KwFtNot),
    ("ftor", TokenKind::KwFtOr),
    ("greatest", TokenKind::KwGreatest),
    ("group", TokenKind::KwGroup),
    ("grouping-separator", TokenKind::KwGroupingSeparator),
    ("import", TokenKind::KwImport),
    ("infinity", TokenKind::KwInfinity),
    ("inherit", TokenKind::KwInherit),
    ("insensitive", TokenKind::KwInsensitive),
    ("insert", TokenKind::KwInsert),
    ("into", TokenKind::KwInto),
    ("language", TokenKind::KwLanguage),
    ("last", TokenKind::KwLast),
    ("lax", TokenKind::KwLax),
    ("least", TokenKind::KwLeast),
    ("levels", TokenKind::KwLevels),
    ("lowercase", TokenKind::KwLowercase),
    ("minus-sign", TokenKind::KwMinusSign),
    ("modify", TokenKind::KwModify),
    ("module", TokenKind::KwModule),
    ("most", TokenKind::KwMost),
    ("next", TokenKind::KwNext),
    ("no", TokenKind::KwNo),
    ("no-inherit", TokenKind::KwNoInherit),
    ("no-preserve", TokenKind::KwNoPreserve),
    ("nodes", TokenKind::KwNodes),
    ("not", TokenKind::KwNot),
    ("occurs", TokenKind::KwOccurs),
    ("only", TokenKind::KwOnly),
    ("option", TokenKind::KwOption),
    ("order", TokenKind::KwOrder),
    ("ordered", TokenKind::KwOrdered),
    ("ordering", TokenKind::KwOrdering),
    ("paragraph", TokenKind::KwParagraph),
    ("paragraphs", TokenKind::KwParagraphs),
    ("pattern-separator", TokenKind::KwPatternSeparator),
    ("per-mille", TokenKind::KwPerMille),
    ("percent", TokenKind::KwPercent),
    ("phrase", TokenKind::KwPhrase),
    ("preserve", TokenKind::KwPreserve),
    ("previous", TokenKind::KwPrevious),
    ("relationship", TokenKind::KwRelationship),
    ("rename", TokenKind::KwRename),
    ("replace", TokenKind::KwReplace),
    ("returning", TokenKind::KwReturning),
    ("revalidation", TokenKind::KwRevalidation),
    ("same", TokenKind::KwSame),
    ("schema", TokenKind::KwSchema),
    ("score", TokenKind::KwScore),
    ("sensitive", TokenKind::KwSensitive),
    ("sentence", TokenKind::KwSentence),
    ("sentences", TokenKind::KwSentences),
    ("skip", TokenKind::KwSkip),
    ("sliding", TokenKind::KwSliding),
    ("stable", TokenKind::KwStable),
    ("start", TokenKind::KwStart),
    ("stemming", TokenKind::KwStemming),
    ("stop", TokenKind::KwStop),
    ("strict", TokenKind::KwStrict),
    ("strip", TokenKind::KwStrip),
    ("switch", TokenKind::KwSwitch),
    ("thesaurus", TokenKind::KwThesaurus),
    ("times", TokenKind::KwTimes),
    ("try", TokenKind::KwTry),
    ("tumbling", TokenKind::KwTumbling),
    ("typeswitch", TokenKind::KwTypeswitch),
    ("unordered", TokenKind::KwUnordered),
    ("updating", TokenKind::KwUpdating),
    ("uppercase", TokenKind::KwUppercase),
    ("using", TokenKind::KwUsing),
    ("validate", TokenKind::KwValidate),
    ("value", TokenKind::KwValue),
    ("variable", TokenKind::KwVariable),
    ("version", TokenKind::KwVersion),
    ("weight", TokenKind::KwWeight),
    ("when", TokenKind::KwWhen),
    ("where", TokenKind::KwWhere),
    ("while", TokenKind::KwWhile),
    ("wildcards", TokenKind::KwWildcards),
    ("window", TokenKind::KwWindow),
    ("with", TokenKind::KwWith),
    ("without", TokenKind::KwWithout),
    ("word", TokenKind::KwWord),
    ("words", TokenKind::KwWords),
    ("xquery", TokenKind::KwXquery),
    ("zero-digit", TokenKind::KwZeroDigit),
];

/// Looks up a scanned name in the XQuery keyword table, falling back to
/// the XPath table for the shared vocabulary.
pub fn xquery_keyword(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=22).contains(&len) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    XQUERY_KEYWORDS
        .binary_search_by_key(&text, |&(spelling, _)| spelling)
        .ok()
        .map(|index| XQUERY_KEYWORDS[index].1)
        .or_else(|| xpath_keyword(text))
}
