//! The closed catalog of token kinds.
//!
//! Every byte of input maps to exactly one of these kinds, including
//! whitespace, comments, and malformed input. The catalog splits into:
//!
//! - trivia, names, and literals
//! - operators and punctuation
//! - comment, pragma, and literal-XML structure kinds
//! - entity-reference kinds, one four-kind family per context (§[`kind
//!   families`](TokenKind::is_error) below)
//! - documentation-comment kinds
//! - recovery kinds for malformed input
//! - keyword kinds, one per recognized keyword string
//!
//! Keyword kinds are names first: [`TokenKind::is_ncname`] holds for all of
//! them, and [`TokenKind::keyword_str`] recovers the spelling. The parser
//! may accept any keyword token wherever a name is allowed.

/// A token kind.
///
/// Discriminants are contiguous from zero; [`TokenKind::ALL`] lists every
/// variant in discriminant order for index-based lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum TokenKind {
    // Trivia
    /// A maximal run of whitespace characters.
    Whitespace,

    // Names
    /// A name with no keyword interpretation.
    NCName,

    // Numeric literals
    IntegerLiteral,
    DecimalLiteral,
    DoubleLiteral,
    /// An `e`/`E` exponent marker (and optional sign) with no digits after
    /// it. Emitted after the mantissa so the parser can report the exact
    /// incomplete suffix instead of a generic bad character.
    PartialDoubleExponent,

    // String literals
    /// The opening `"` or `'`.
    StringStart,
    /// A maximal run of ordinary characters inside a string literal.
    StringContents,
    /// The closing `"` or `'`.
    StringEnd,
    /// A doubled delimiter (`""` or `''`) inside a string literal.
    EscapedCharacter,

    // Braced URI literals
    /// `Q{`, opening a bracketed namespace-URI literal.
    BracedUriStart,
    /// The `}` closing a bracketed namespace-URI literal.
    BracedUriEnd,

    // String constructors
    /// `` `[ ``, opening a string constructor.
    StringConstructorStart,
    /// A maximal run of literal text inside a string constructor.
    StringConstructorContents,
    /// `` ]` ``, closing a string constructor.
    StringConstructorEnd,
    /// `` `{ ``, opening an interpolation hole inside a string constructor.
    StringInterpolationOpen,
    /// `` }` ``, closing an interpolation hole.
    StringInterpolationClose,

    // Punctuation and operators
    ParenOpen,
    ParenClose,
    SquareOpen,
    SquareClose,
    BlockOpen,
    BlockClose,
    Comma,
    Semicolon,
    Dot,
    /// `..`
    ParentSelector,
    /// `...`
    Ellipsis,
    Slash,
    SlashSlash,
    Plus,
    Minus,
    Star,
    Bang,
    Equal,
    BangEqual,
    LessThan,
    LessThanEqual,
    /// `<<`
    NodeBefore,
    GreaterThan,
    GreaterThanEqual,
    /// `>>`
    NodeAfter,
    /// `|`
    Union,
    /// `||`
    Concat,
    QuestionMark,
    AtSign,
    Hash,
    /// `$`
    VariableIndicator,
    /// `%`
    AnnotationIndicator,
    /// The `:` between a prefix and a local name.
    QNameSeparator,
    /// `::`
    AxisSeparator,
    /// `:=`
    Assign,
    /// `=>`
    ArrowOperator,
    /// `->`
    ThinArrow,
    /// A lone `_` immediately before `{`; the focus-function shorthand.
    Lambda,
    /// A lone `.` immediately before `{`; the context-function shorthand.
    ContextFunction,

    // Comments
    /// `(:`
    CommentStart,
    /// The body of a comment, inner nested markers included.
    Comment,
    /// `:)`
    CommentEnd,

    // Pragmas
    /// `(#`
    PragmaBegin,
    PragmaContents,
    /// `#)`
    PragmaEnd,

    // Literal XML construction
    /// `<` confirmed to open a direct element constructor.
    OpenXmlTag,
    /// `<` followed by whitespace and then a name shaped like a tag.
    /// Whitespace before the name is illegal, but the intent is clear
    /// enough for a targeted diagnostic.
    MaybeOpenXmlTag,
    /// `</`
    CloseXmlTag,
    /// `/>`
    SelfClosingXmlTag,
    /// The `>` ending an open, closing, or attribute-list tag.
    EndXmlTag,
    XmlTagName,
    /// The `:` between prefix and local part of a tag name.
    XmlTagNameSeparator,
    XmlAttributeName,
    XmlEquals,
    /// The quote opening an attribute value.
    XmlAttrValueStart,
    XmlAttrValueContents,
    /// The quote closing an attribute value.
    XmlAttrValueEnd,
    /// A doubled quote or doubled curly brace in XML content.
    XmlEscapedCharacter,
    /// A maximal run of literal text between tags.
    XmlElementContents,
    /// `<![CDATA[`
    CDataStart,
    CDataContents,
    /// `]]>`
    CDataEnd,
    /// `<?`
    ProcessingInstructionBegin,
    ProcessingInstructionTarget,
    ProcessingInstructionContents,
    /// `?>`
    ProcessingInstructionEnd,
    /// `<!--`
    XmlCommentStart,
    XmlComment,
    /// `-->`
    XmlCommentEnd,

    // Entity references inside string literals
    /// `&#n;` or `&#xH;` in a string literal.
    CharacterReference,
    /// One of the five predefined references in a string literal.
    PredefinedEntityReference,
    /// A reference cut off by an illegal character or end of input.
    PartialEntityReference,
    /// `&;`
    EmptyEntityReference,

    // Entity references inside element content
    XmlCharacterReference,
    XmlPredefinedEntityReference,
    XmlPartialEntityReference,
    XmlEmptyEntityReference,

    // Entity references inside attribute values
    XmlAttrCharacterReference,
    XmlAttrPredefinedEntityReference,
    XmlAttrPartialEntityReference,
    XmlAttrEmptyEntityReference,

    // Entity references outside any string or XML context. Always illegal;
    // the kinds exist so the diagnostic can say so precisely.
    CharacterReferenceNotInString,
    EntityReferenceNotInString,
    PartialEntityReferenceNotInString,
    EmptyEntityReferenceNotInString,

    // Documentation comments
    /// The `~` that marks a comment as documentation.
    DocMarker,
    /// Free text inside a documentation comment.
    DocContents,
    /// A line break plus the indentation and optional `:` margin of the
    /// next line.
    DocTrim,
    /// `@` plus a recognized tag name.
    DocTag,
    /// The `$` of the variable reference after `@param`.
    DocVariableIndicator,
    /// The variable name after `@param $`.
    DocVariableName,
    DocXmlTagOpen,
    DocXmlCloseTagOpen,
    DocXmlTagEnd,
    DocXmlSelfClose,
    DocXmlTagName,
    DocXmlAttributeName,
    DocXmlEquals,
    DocXmlAttrValueStart,
    DocXmlAttrValueContents,
    DocXmlAttrValueEnd,

    // Recovery
    /// A single code point with no meaning in the current mode.
    BadCharacter,
    /// Zero-width marker emitted when a nesting construct hits end of
    /// input before its terminator; the state stack unwinds through it.
    UnexpectedEndOfBlock,
    /// A structurally expected but unrecognized sequence inside a fixed
    /// grammar, such as `<![` without `CDATA[`.
    Invalid,

    // Base language keywords
    KwAncestor,
    KwAncestorOrSelf,
    KwAnd,
    KwArray,
    KwAs,
    KwAttribute,
    KwCast,
    KwCastable,
    KwChild,
    KwComment,
    KwDescendant,
    KwDescendantOrSelf,
    KwDiv,
    KwDocumentNode,
    KwElement,
    KwElse,
    KwEmptySequence,
    KwEq,
    KwEvery,
    KwExcept,
    KwFollowing,
    KwFollowingSibling,
    KwFor,
    KwFunction,
    KwGe,
    KwGt,
    KwIdiv,
    KwIf,
    KwIn,
    KwInstance,
    KwIntersect,
    KwIs,
    KwItem,
    KwLe,
    KwLet,
    KwLt,
    KwMap,
    KwMod,
    KwNamespace,
    KwNamespaceNode,
    KwNe,
    KwNode,
    KwOf,
    KwOr,
    KwOtherwise,
    KwParent,
    KwPreceding,
    KwPrecedingSibling,
    KwProcessingInstruction,
    KwRecord,
    KwReturn,
    KwSatisfies,
    KwSchemaAttribute,
    KwSchemaElement,
    KwSelf,
    KwSome,
    KwText,
    KwThen,
    KwTo,
    KwTreat,
    KwUnion,

    // Extended language keywords
    KwAfter,
    KwAll,
    KwAllowing,
    KwAny,
    KwAscending,
    KwAt,
    KwBaseUri,
    KwBefore,
    KwBoundarySpace,
    KwBy,
    KwCase,
    KwCatch,
    KwCollation,
    KwConstruction,
    KwContains,
    KwContent,
    KwContext,
    KwCopy,
    KwCopyNamespaces,
    KwCount,
    KwDecimalFormat,
    KwDecimalSeparator,
    KwDeclare,
    KwDefault,
    KwDelete,
    KwDescending,
    KwDiacritics,
    KwDifferent,
    KwDigit,
    KwDistance,
    KwDocument,
    KwEmpty,
    KwEncoding,
    KwEnd,
    KwEntire,
    KwExactly,
    KwExit,
    KwExponentSeparator,
    KwExternal,
    KwFirst,
    KwFrom,
    KwFtAnd,
    KwFtNot,
    KwFtOr,
    KwGreatest,
    KwGroup,
    KwGroupingSeparator,
    KwImport,
    KwInfinity,
    KwInherit,
    KwInsensitive,
    KwInsert,
    KwInto,
    KwLanguage,
    KwLast,
    KwLax,
    KwLeast,
    KwLevels,
    KwLowercase,
    KwMinusSign,
    KwModify,
    KwModule,
    KwMost,
    KwNaN,
    KwNext,
    KwNo,
    KwNoInherit,
    KwNoPreserve,
    KwNodes,
    KwNot,
    KwOccurs,
    KwOnly,
    KwOption,
    KwOrder,
    KwOrdered,
    KwOrdering,
    KwParagraph,
    KwParagraphs,
    KwPatternSeparator,
    KwPerMille,
    KwPercent,
    KwPhrase,
    KwPreserve,
    KwPrevious,
    KwRelationship,
    KwRename,
    KwReplace,
    KwReturning,
    KwRevalidation,
    KwSame,
    KwSchema,
    KwScore,
    KwSensitive,
    KwSentence,
    KwSentences,
    KwSkip,
    KwSliding,
    KwStable,
    KwStart,
    KwStemming,
    KwStop,
    KwStrict,
    KwStrip,
    KwSwitch,
    KwThesaurus,
    KwTimes,
    KwTry,
    KwTumbling,
    KwTypeswitch,
    KwUnordered,
    KwUpdating,
    KwUppercase,
    KwUsing,
    KwValidate,
    KwValue,
    KwVariable,
    KwVersion,
    KwWeight,
    KwWhen,
    KwWhere,
    KwWhile,
    KwWildcards,
    KwWindow,
    KwWith,
    KwWithout,
    KwWord,
    KwWords,
    KwXquery,
    KwZeroDigit,
}

impl TokenKind {
    /// Number of variants. Used for bitset sizing and index lookup.
    pub const COUNT: usize = 311;

    const KW_FIRST: u16 = TokenKind::KwAncestor as u16;
    const KW_LAST: u16 = TokenKind::KwZeroDigit as u16;
    const DOC_FIRST: u16 = TokenKind::DocMarker as u16;
    const DOC_LAST: u16 = TokenKind::DocXmlAttrValueEnd as u16;

    /// Every variant in discriminant order.
    ///
    /// `ALL[k as usize] == k` for every kind `k`; a test verifies the
    /// correspondence.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Whitespace,
        TokenKind::NCName,
        TokenKind::IntegerLiteral,
        TokenKind::DecimalLiteral,
        TokenKind::DoubleLiteral,
        TokenKind::PartialDoubleExponent,
        TokenKind::StringStart,
        TokenKind::StringContents,
        TokenKind::StringEnd,
        TokenKind::EscapedCharacter,
        TokenKind::BracedUriStart,
        TokenKind::BracedUriEnd,
        TokenKind::StringConstructorStart,
        TokenKind::StringConstructorContents,
        TokenKind::StringConstructorEnd,
        TokenKind::StringInterpolationOpen,
        TokenKind::StringInterpolationClose,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::SquareOpen,
        TokenKind::SquareClose,
        TokenKind::BlockOpen,
        TokenKind::BlockClose,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Dot,
        TokenKind::ParentSelector,
        TokenKind::Ellipsis,
        TokenKind::Slash,
        TokenKind::SlashSlash,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Bang,
        TokenKind::Equal,
        TokenKind::BangEqual,
        TokenKind::LessThan,
        TokenKind::LessThanEqual,
        TokenKind::NodeBefore,
        TokenKind::GreaterThan,
        TokenKind::GreaterThanEqual,
        TokenKind::NodeAfter,
        TokenKind::Union,
        TokenKind::Concat,
        TokenKind::QuestionMark,
        TokenKind::AtSign,
        TokenKind::Hash,
        TokenKind::VariableIndicator,
        TokenKind::AnnotationIndicator,
        TokenKind::QNameSeparator,
        TokenKind::AxisSeparator,
        TokenKind::Assign,
        TokenKind::ArrowOperator,
        TokenKind::ThinArrow,
        TokenKind::Lambda,
        TokenKind::ContextFunction,
        TokenKind::CommentStart,
        TokenKind::Comment,
        TokenKind::CommentEnd,
        TokenKind::PragmaBegin,
        TokenKind::PragmaContents,
        TokenKind::PragmaEnd,
        TokenKind::OpenXmlTag,
        TokenKind::MaybeOpenXmlTag,
        TokenKind::CloseXmlTag,
        TokenKind::SelfClosingXmlTag,
        TokenKind::EndXmlTag,
        TokenKind::XmlTagName,
        TokenKind::XmlTagNameSeparator,
        TokenKind::XmlAttributeName,
        TokenKind::XmlEquals,
        TokenKind::XmlAttrValueStart,
        TokenKind::XmlAttrValueContents,
        TokenKind::XmlAttrValueEnd,
        TokenKind::XmlEscapedCharacter,
        TokenKind::XmlElementContents,
        TokenKind::CDataStart,
        TokenKind::CDataContents,
        TokenKind::CDataEnd,
        TokenKind::ProcessingInstructionBegin,
        TokenKind::ProcessingInstructionTarget,
        TokenKind::ProcessingInstructionContents,
        TokenKind::ProcessingInstructionEnd,
        TokenKind::XmlCommentStart,
        TokenKind::XmlComment,
        TokenKind::XmlCommentEnd,
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
        TokenKind::DocMarker,
        TokenKind::DocContents,
        TokenKind::DocTrim,
        TokenKind::DocTag,
        TokenKind::DocVariableIndicator,
        TokenKind::DocVariableName,
        TokenKind::DocXmlTagOpen,
        TokenKind::DocXmlCloseTagOpen,
        TokenKind::DocXmlTagEnd,
        TokenKind::DocXmlSelfClose,
        TokenKind::DocXmlTagName,
        TokenKind::DocXmlAttributeName,
        TokenKind::DocXmlEquals,
        TokenKind::DocXmlAttrValueStart,
        TokenKind::DocXmlAttrValueContents,
        TokenKind::DocXmlAttrValueEnd,
        TokenKind::BadCharacter,
        TokenKind::UnexpectedEndOfBlock,
        TokenKind::Invalid,
        TokenKind::KwAncestor,
        TokenKind::KwAncestorOrSelf,
        TokenKind::KwAnd,
        TokenKind::KwArray,
        TokenKind::KwAs,
        TokenKind::KwAttribute,
        TokenKind::KwCast,
        TokenKind::KwCastable,
        TokenKind::KwChild,
        TokenKind::KwComment,
        TokenKind::KwDescendant,
        TokenKind::KwDescendantOrSelf,
        TokenKind::KwDiv,
        TokenKind::KwDocumentNode,
        TokenKind::KwElement,
        TokenKind::KwElse,
        TokenKind::KwEmptySequence,
        TokenKind::KwEq,
        TokenKind::KwEvery,
        TokenKind::KwExcept,
        TokenKind::KwFollowing,
        TokenKind::KwFollowingSibling,
        TokenKind::KwFor,
        TokenKind::KwFunction,
        TokenKind::KwGe,
        TokenKind::KwGt,
        TokenKind::KwIdiv,
        TokenKind::KwIf,
        TokenKind::KwIn,
        TokenKind::KwInstance,
        TokenKind::KwIntersect,
        TokenKind::KwIs,
        TokenKind::KwItem,
        TokenKind::KwLe,
        TokenKind::KwLet,
        TokenKind::KwLt,
        TokenKind::KwMap,
        TokenKind::KwMod,
        TokenKind::KwNamespace,
        TokenKind::KwNamespaceNode,
        TokenKind::KwNe,
        TokenKind::KwNode,
        TokenKind::KwOf,
        TokenKind::KwOr,
        TokenKind::KwOtherwise,
        TokenKind::KwParent,
        TokenKind::KwPreceding,
        TokenKind::KwPrecedingSibling,
        TokenKind::KwProcessingInstruction,
        TokenKind::KwRecord,
        TokenKind::KwReturn,
        TokenKind::KwSatisfies,
        TokenKind::KwSchemaAttribute,
        TokenKind::KwSchemaElement,
        TokenKind::KwSelf,
        TokenKind::KwSome,
        TokenKind::KwText,
        TokenKind::KwThen,
        TokenKind::KwTo,
        TokenKind::KwTreat,
        TokenKind::KwUnion,
        TokenKind::KwAfter,
        TokenKind::KwAll,
        TokenKind::KwAllowing,
        TokenKind::KwAny,
        TokenKind::KwAscending,
        TokenKind::KwAt,
        TokenKind::KwBaseUri,
        TokenKind::KwBefore,
        TokenKind::KwBoundarySpace,
        TokenKind::KwBy,
        TokenKind::KwCase,
        TokenKind::KwCatch,
        TokenKind::KwCollation,
        TokenKind::KwConstruction,
        TokenKind::KwContains,
        TokenKind::KwContent,
        TokenKind::KwContext,
        TokenKind::KwCopy,
        TokenKind::KwCopyNamespaces,
        TokenKind::KwCount,
        TokenKind::KwDecimalFormat,
        TokenKind::KwDecimalSeparator,
        TokenKind::KwDeclare,
        TokenKind::KwDefault,
        TokenKind::KwDelete,
        TokenKind::KwDescending,
        TokenKind::KwDiacritics,
        TokenKind::KwDifferent,
        TokenKind::KwDigit,
        TokenKind::KwDistance,
        TokenKind::KwDocument,
        TokenKind::KwEmpty,
        TokenKind::KwEncoding,
        TokenKind::KwEnd,
        TokenKind::KwEntire,
        TokenKind::KwExactly,
        TokenKind::KwExit,
        TokenKind::KwExponentSeparator,
        TokenKind::KwExternal,
        TokenKind::KwFirst,
        TokenKind::KwFrom,
        TokenKind::KwFtAnd,
        TokenKind::KwFtNot,
        TokenKind::KwFtOr,
        TokenKind::KwGreatest,
        TokenKind::KwGroup,
        TokenKind::KwGroupingSeparator,
        TokenKind::KwImport,
        TokenKind::KwInfinity,
        TokenKind::KwInherit,
        TokenKind::KwInsensitive,
        TokenKind::KwInsert,
        TokenKind::KwInto,
        TokenKind::KwLanguage,
        TokenKind::KwLast,
        TokenKind::KwLax,
        TokenKind::KwLeast,
        TokenKind::KwLevels,
        TokenKind::KwLowercase,
        TokenKind::KwMinusSign,
        TokenKind::KwModify,
        TokenKind::KwModule,
        TokenKind::KwMost,
        TokenKind::KwNaN,
        TokenKind::KwNext,
        TokenKind::KwNo,
        TokenKind::KwNoInherit,
        TokenKind::KwNoPreserve,
        TokenKind::KwNodes,
        TokenKind::KwNot,
        TokenKind::KwOccurs,
        TokenKind::KwOnly,
        TokenKind::KwOption,
        TokenKind::KwOrder,
        TokenKind::KwOrdered,
        TokenKind::KwOrdering,
        TokenKind::KwParagraph,
        TokenKind::KwParagraphs,
        TokenKind::KwPatternSeparator,
        TokenKind::KwPerMille,
        TokenKind::KwPercent,
        TokenKind::KwPhrase,
        TokenKind::KwPreserve,
        TokenKind::KwPrevious,
        TokenKind::KwRelationship,
        TokenKind::KwRename,
        TokenKind::KwReplace,
        TokenKind::KwReturning,
        TokenKind::KwRevalidation,
        TokenKind::KwSame,
        TokenKind::KwSchema,
        TokenKind::KwScore,
        TokenKind::KwSensitive,
        TokenKind::KwSentence,
        TokenKind::KwSentences,
        TokenKind::KwSkip,
        TokenKind::KwSliding,
        TokenKind::KwStable,
        TokenKind::KwStart,
        TokenKind::KwStemming,
        TokenKind::KwStop,
        TokenKind::KwStrict,
        TokenKind::KwStrip,
        TokenKind::KwSwitch,
        TokenKind::KwThesaurus,
        TokenKind::KwTimes,
        TokenKind::KwTry,
        TokenKind::KwTumbling,
        TokenKind::KwTypeswitch,
        TokenKind::KwUnordered,
        TokenKind::KwUpdating,
        TokenKind::KwUppercase,
        TokenKind::KwUsing,
        TokenKind::KwValidate,
        TokenKind::KwValue,
        TokenKind::KwVariable,
        TokenKind::KwVersion,
        TokenKind::KwWeight,
        TokenKind::KwWhen,
        TokenKind::KwWhere,
        TokenKind::KwWhile,
        TokenKind::KwWildcards,
        TokenKind::KwWindow,
        TokenKind::KwWith,
        TokenKind::KwWithout,
        TokenKind::KwWord,
        TokenKind::KwWords,
        TokenKind::KwXquery,
        TokenKind::KwZeroDigit,
    ];

    /// The variant's position in the catalog, for bitset membership.
    #[inline]
    #[must_use]
    pub const fn discriminant_index(self) -> u16 {
        self as u16
    }

    /// The variant at `index`, or `None` past the end of the catalog.
    #[inline]
    #[must_use]
    pub fn from_index(index: u16) -> Option<TokenKind> {
        Self::ALL.get(index as usize).copied()
    }

    /// Whether this kind is a keyword.
    #[inline]
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        let d = self as u16;
        Self::KW_FIRST <= d && d <= Self::KW_LAST
    }

    /// Whether this token is lexically a name.
    ///
    /// True for [`TokenKind::NCName`] and for every keyword kind: keywords
    /// are reclassified names, and parsers accept them wherever a name may
    /// appear.
    #[inline]
    #[must_use]
    pub const fn is_ncname(self) -> bool {
        matches!(self, TokenKind::NCName) || self.is_keyword()
    }

    /// Whether this kind is whitespace or comment material a parser skips.
    #[inline]
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        let d = self as u16;
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::CommentStart
                | TokenKind::Comment
                | TokenKind::CommentEnd
        ) || (Self::DOC_FIRST <= d && d <= Self::DOC_LAST)
    }

    /// Whether this kind represents malformed or incomplete input.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::BadCharacter
                | TokenKind::UnexpectedEndOfBlock
                | TokenKind::Invalid
                | TokenKind::PartialDoubleExponent
                | TokenKind::PartialEntityReference
                | TokenKind::EmptyEntityReference
                | TokenKind::XmlPartialEntityReference
                | TokenKind::XmlEmptyEntityReference
                | TokenKind::XmlAttrPartialEntityReference
                | TokenKind::XmlAttrEmptyEntityReference
                | TokenKind::CharacterReferenceNotInString
                | TokenKind::EntityReferenceNotInString
                | TokenKind::PartialEntityReferenceNotInString
                | TokenKind::EmptyEntityReferenceNotInString
        )
    }

    /// The keyword spelling, if this kind is a keyword.
    #[must_use]
    #[expect(clippy::too_many_lines, reason = "one arm per keyword")]
    pub const fn keyword_str(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::KwAncestor => "ancestor",
            TokenKind::KwAncestorOrSelf => "ancestor-or-self",
            TokenKind::KwAnd => "and",
            TokenKind::KwArray => "array",
            TokenKind::KwAs => "as",
            TokenKind::KwAttribute => "attribute",
            TokenKind::KwCast => "cast",
            TokenKind::KwCastable => "castable",
            TokenKind::KwChild => "child",
            TokenKind::KwComment => "comment",
            TokenKind::KwDescendant => "descendant",
            TokenKind::KwDescendantOrSelf => "descendant-or-self",
            TokenKind::KwDiv => "div",
            TokenKind::KwDocumentNode => "document-node",
            TokenKind::KwElement => "element",
            TokenKind::KwElse => "else",
            TokenKind::KwEmptySequence => "empty-sequence",
            TokenKind::KwEq => "eq",
            TokenKind::KwEvery => "every",
            TokenKind::KwExcept => "except",
            TokenKind::KwFollowing => "following",
            TokenKind::KwFollowingSibling => "following-sibling",
            TokenKind::KwFor => "for",
            TokenKind::KwFunction => "function",
            TokenKind::KwGe => "ge",
            TokenKind::KwGt => "gt",
            TokenKind::KwIdiv => "idiv",
            TokenKind::KwIf => "if",
            TokenKind::KwIn => "in",
            TokenKind::KwInstance => "instance",
            TokenKind::KwIntersect => "intersect",
            TokenKind::KwIs => "is",
            TokenKind::KwItem => "item",
            TokenKind::KwLe => "le",
            TokenKind::KwLet => "let",
            TokenKind::KwLt => "lt",
            TokenKind::KwMap => "map",
            TokenKind::KwMod => "mod",
            TokenKind::KwNamespace => "namespace",
            TokenKind::KwNamespaceNode => "namespace-node",
            TokenKind::KwNe => "ne",
            TokenKind::KwNode => "node",
            TokenKind::KwOf => "of",
            TokenKind::KwOr => "or",
            TokenKind::KwOtherwise => "otherwise",
            TokenKind::KwParent => "parent",
            TokenKind::KwPreceding => "preceding",
            TokenKind::KwPrecedingSibling => "preceding-sibling",
            TokenKind::KwProcessingInstruction => "processing-instruction",
            TokenKind::KwRecord => "record",
            TokenKind::KwReturn => "return",
            TokenKind::KwSatisfies => "satisfies",
            TokenKind::KwSchemaAttribute => "schema-attribute",
            TokenKind::KwSchemaElement => "schema-element",
            TokenKind::KwSelf => "self",
            TokenKind::KwSome => "some",
            TokenKind::KwText => "text",
            TokenKind::KwThen => "then",
            TokenKind::KwTo => "to",
            TokenKind::KwTreat => "treat",
            TokenKind::KwUnion => "union",
            TokenKind::KwAfter => "after",
            TokenKind::KwAll => "all",
            TokenKind::KwAllowing => "allowing",
            TokenKind::KwAny => "any",
            TokenKind::KwAscending => "ascending",
            TokenKind::KwAt => "at",
            TokenKind::KwBaseUri => "base-uri",
            TokenKind::KwBefore => "before",
            TokenKind::KwBoundarySpace => "boundary-space",
            TokenKind::KwBy => "by",
            TokenKind::KwCase => "case",
            TokenKind::KwCatch => "catch",
            TokenKind::KwCollation => "collation",
            TokenKind::KwConstruction => "construction",
            TokenKind::KwContains => "contains",
            TokenKind::KwContent => "content",
            TokenKind::KwContext => "context",
            TokenKind::KwCopy => "copy",
            TokenKind::KwCopyNamespaces => "copy-namespaces",
            TokenKind::KwCount => "count",
            TokenKind::KwDecimalFormat => "decimal-format",
            TokenKind::KwDecimalSeparator => "decimal-separator",
            TokenKind::KwDeclare => "declare",
            TokenKind::KwDefault => "default",
            TokenKind::KwDelete => "delete",
            TokenKind::KwDescending => "descending",
            TokenKind::KwDiacritics => "diacritics",
            TokenKind::KwDifferent => "different",
            TokenKind::KwDigit => "digit",
            TokenKind::KwDistance => "distance",
            TokenKind::KwDocument => "document",
            TokenKind::KwEmpty => "empty",
            TokenKind::KwEncoding => "encoding",
            TokenKind::KwEnd => "end",
            TokenKind::KwEntire => "entire",
            TokenKind::KwExactly => "exactly",
            TokenKind::KwExit => "exit",
            TokenKind::KwExponentSeparator => "exponent-separator",
            TokenKind::KwExternal => "external",
            TokenKind::KwFirst => "first",
            TokenKind::KwFrom => "from",
            TokenKind::KwFtAnd => "ftand",
            TokenKind::KwFtNot => "ftnot",
            TokenKind::KwFtOr => "ftor",
            TokenKind::KwGreatest => "greatest",
            TokenKind::KwGroup => "group",
            TokenKind::KwGroupingSeparator => "grouping-separator",
            TokenKind::KwImport => "import",
            TokenKind::KwInfinity => "infinity",
            TokenKind::KwInherit => "inherit",
            TokenKind::KwInsensitive => "insensitive",
            TokenKind::KwInsert => "insert",
            TokenKind::KwInto => "into",
            TokenKind::KwLanguage => "language",
            TokenKind::KwLast => "last",
            TokenKind::KwLax => "lax",
            TokenKind::KwLeast => "least",
            TokenKind::KwLevels => "levels",
            TokenKind::KwLowercase => "lowercase",
            TokenKind::KwMinusSign => "minus-sign",
            TokenKind::KwModify => "modify",
            TokenKind::KwModule => "module",
            TokenKind::KwMost => "most",
            TokenKind::KwNaN => "NaN",
            TokenKind::KwNext => "next",
            TokenKind::KwNo => "no",
            TokenKind::KwNoInherit => "no-inherit",
            TokenKind::KwNoPreserve => "no-preserve",
            TokenKind::KwNodes => "nodes",
            TokenKind::KwNot => "not",
            TokenKind::KwOccurs => "occurs",
            TokenKind::KwOnly => "only",
            TokenKind::KwOption => "option",
            TokenKind::KwOrder => "order",
            TokenKind::KwOrdered => "ordered",
            TokenKind::KwOrdering => "ordering",
            TokenKind::KwParagraph => "paragraph",
            TokenKind::KwParagraphs => "paragraphs",
            TokenKind::KwPatternSeparator => "pattern-separator",
            TokenKind::KwPerMille => "per-mille",
            TokenKind::KwPercent => "percent",
            TokenKind::KwPhrase => "phrase",
            TokenKind::KwPreserve => "preserve",
            TokenKind::KwPrevious => "previous",
            TokenKind::KwRelationship => "relationship",
            TokenKind::KwRename => "rename",
            TokenKind::KwReplace => "replace",
            TokenKind::KwReturning => "returning",
            TokenKind::KwRevalidation => "revalidation",
            TokenKind::KwSame => "same",
            TokenKind::KwSchema => "schema",
            TokenKind::KwScore => "score",
            TokenKind::KwSensitive => "sensitive",
            TokenKind::KwSentence => "sentence",
            TokenKind::KwSentences => "sentences",
            TokenKind::KwSkip => "skip",
            TokenKind::KwSliding => "sliding",
            TokenKind::KwStable => "stable",
            TokenKind::KwStart => "start",
            TokenKind::KwStemming => "stemming",
            TokenKind::KwStop => "stop",
            TokenKind::KwStrict => "strict",
            TokenKind::KwStrip => "strip",
            TokenKind::KwSwitch => "switch",
            TokenKind::KwThesaurus => "thesaurus",
            TokenKind::KwTimes => "times",
            TokenKind::KwTry => "try",
            TokenKind::KwTumbling => "tumbling",
            TokenKind::KwTypeswitch => "typeswitch",
            TokenKind::KwUnordered => "unordered",
            TokenKind::KwUpdating => "updating",
            TokenKind::KwUppercase => "uppercase",
            TokenKind::KwUsing => "using",
            TokenKind::KwValidate => "validate",
            TokenKind::KwValue => "value",
            TokenKind::KwVariable => "variable",
            TokenKind::KwVersion => "version",
            TokenKind::KwWeight => "weight",
            TokenKind::KwWhen => "when",
            TokenKind::KwWhere => "where",
            TokenKind::KwWhile => "while",
            TokenKind::KwWildcards => "wildcards",
            TokenKind::KwWindow => "window",
            TokenKind::KwWith => "with",
            TokenKind::KwWithout => "without",
            TokenKind::KwWord => "word",
            TokenKind::KwWords => "words",
            TokenKind::KwXquery => "xquery",
            TokenKind::KwZeroDigit => "zero-digit",
            _ => return None,
        })
    }

    /// The fixed spelling of this kind, if it has one.
    ///
    /// Kinds with variable text (names, literals, content runs) return
    /// `None`. [`TokenKind::StringStart`] and friends also return `None`
    /// since either quote character may have opened them.
    #[must_use]
    pub const fn lexeme(self) -> Option<&'static str> {
        if let Some(kw) = self.keyword_str() {
            return Some(kw);
        }
        Some(match self {
            TokenKind::BracedUriStart => "Q{",
            TokenKind::BracedUriEnd => "}",
            TokenKind::StringConstructorStart => "`[",
            TokenKind::StringConstructorEnd => "]`",
            TokenKind::StringInterpolationOpen => "`{",
            TokenKind::StringInterpolationClose => "}`",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::SquareOpen => "[",
            TokenKind::SquareClose => "]",
            TokenKind::BlockOpen => "{",
            TokenKind::BlockClose => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot | TokenKind::ContextFunction => ".",
            TokenKind::ParentSelector => "..",
            TokenKind::Ellipsis => "...",
            TokenKind::Slash => "/",
            TokenKind::SlashSlash => "//",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::Equal => "=",
            TokenKind::BangEqual => "!=",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEqual => "<=",
            TokenKind::NodeBefore => "<<",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEqual => ">=",
            TokenKind::NodeAfter => ">>",
            TokenKind::Union => "|",
            TokenKind::Concat => "||",
            TokenKind::QuestionMark => "?",
            TokenKind::AtSign => "@",
            TokenKind::Hash => "#",
            TokenKind::VariableIndicator | TokenKind::DocVariableIndicator => "$",
            TokenKind::AnnotationIndicator => "%",
            TokenKind::QNameSeparator | TokenKind::XmlTagNameSeparator => ":",
            TokenKind::AxisSeparator => "::",
            TokenKind::Assign => ":=",
            TokenKind::ArrowOperator => "=>",
            TokenKind::ThinArrow => "->",
            TokenKind::Lambda => "_",
            TokenKind::CommentStart => "(:",
            TokenKind::CommentEnd => ":)",
            TokenKind::PragmaBegin => "(#",
            TokenKind::PragmaEnd => "#)",
            TokenKind::OpenXmlTag | TokenKind::DocXmlTagOpen => "<",
            TokenKind::CloseXmlTag | TokenKind::DocXmlCloseTagOpen => "</",
            TokenKind::SelfClosingXmlTag | TokenKind::DocXmlSelfClose => "/>",
            TokenKind::EndXmlTag | TokenKind::DocXmlTagEnd => ">",
            TokenKind::XmlEquals | TokenKind::DocXmlEquals => "=",
            TokenKind::CDataStart => "<![CDATA[",
            TokenKind::CDataEnd => "]]>",
            TokenKind::ProcessingInstructionBegin => "<?",
            TokenKind::ProcessingInstructionEnd => "?>",
            TokenKind::XmlCommentStart => "<!--",
            TokenKind::XmlCommentEnd => "-->",
            TokenKind::DocMarker => "~",
            _ => return None,
        })
    }

    /// A short, human-readable name for diagnostics.
    ///
    /// Fixed-spelling kinds display as their lexeme; everything else gets a
    /// descriptive phrase.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        if let Some(lexeme) = self.lexeme() {
            return lexeme;
        }
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::NCName => "name",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::DecimalLiteral => "decimal literal",
            TokenKind::DoubleLiteral => "double literal",
            TokenKind::PartialDoubleExponent => "incomplete exponent",
            TokenKind::StringStart => "string start",
            TokenKind::StringContents => "string contents",
            TokenKind::StringEnd => "string end",
            TokenKind::EscapedCharacter | TokenKind::XmlEscapedCharacter => "escaped character",
            TokenKind::StringConstructorContents => "string constructor contents",
            TokenKind::Comment => "comment",
            TokenKind::PragmaContents => "pragma contents",
            TokenKind::MaybeOpenXmlTag => "element constructor with leading whitespace",
            TokenKind::XmlTagName | TokenKind::DocXmlTagName => "tag name",
            TokenKind::XmlAttributeName | TokenKind::DocXmlAttributeName => "attribute name",
            TokenKind::XmlAttrValueStart | TokenKind::DocXmlAttrValueStart => {
                "attribute value start"
            }
            TokenKind::XmlAttrValueContents | TokenKind::DocXmlAttrValueContents => {
                "attribute value contents"
            }
            TokenKind::XmlAttrValueEnd | TokenKind::DocXmlAttrValueEnd => "attribute value end",
            TokenKind::XmlElementContents => "element contents",
            TokenKind::CDataContents => "CDATA contents",
            TokenKind::ProcessingInstructionTarget => "processing instruction target",
            TokenKind::ProcessingInstructionContents => "processing instruction contents",
            TokenKind::XmlComment => "XML comment",
            TokenKind::CharacterReference
            | TokenKind::XmlCharacterReference
            | TokenKind::XmlAttrCharacterReference => "character reference",
            TokenKind::PredefinedEntityReference
            | TokenKind::XmlPredefinedEntityReference
            | TokenKind::XmlAttrPredefinedEntityReference => "entity reference",
            TokenKind::PartialEntityReference
            | TokenKind::XmlPartialEntityReference
            | TokenKind::XmlAttrPartialEntityReference
            | TokenKind::PartialEntityReferenceNotInString => "incomplete entity reference",
            TokenKind::EmptyEntityReference
            | TokenKind::XmlEmptyEntityReference
            | TokenKind::XmlAttrEmptyEntityReference
            | TokenKind::EmptyEntityReferenceNotInString => "empty entity reference",
            TokenKind::CharacterReferenceNotInString => "character reference outside string",
            TokenKind::EntityReferenceNotInString => "entity reference outside string",
            TokenKind::DocContents => "documentation text",
            TokenKind::DocTrim => "documentation margin",
            TokenKind::DocTag => "documentation tag",
            TokenKind::DocVariableName => "parameter name",
            TokenKind::BadCharacter => "unrecognized character",
            TokenKind::UnexpectedEndOfBlock => "unexpected end of block",
            TokenKind::Invalid => "invalid sequence",
            _ => "token",
        }
    }
}
