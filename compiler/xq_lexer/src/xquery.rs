//! The superset lexer: literal XML, string constructors, documentation
//! comments.
//!
//! [`XQueryLexer`] wraps the expression lexer and delegates to it for
//! every mode the superset leaves unchanged. It overrides a handful of
//! default-mode character classes (`<` `{` `}` `` ` `` and the comment
//! opener), makes string and URI literals entity-aware, and owns the
//! XML-flavored modes outright. Nesting is still one state stack: braces
//! push and pop expression context inside literal XML, tags replace and
//! pop around element content, and a documentation comment hands the
//! pre-scanned body to [`XQDocLexer`] before the host resumes at the
//! close sequence.

use xq_lexer_core::{CharClass, EntityRef, classify, is_name_char, is_name_start, scan_entity_ref};
use xq_tokens::{Span, Token, TokenKind};

use crate::keywords;
use crate::state::State;
use crate::xpath::XPathLexer;
use crate::xqdoc::XQDocLexer;

/// Which family of entity-reference kinds a context produces.
#[derive(Copy, Clone)]
enum RefContext {
    /// String and braced-URI literals.
    InString,
    /// Literal element content.
    InXml,
    /// Attribute values.
    InXmlAttr,
}

/// Lexer for the XQuery-flavored superset.
///
/// Everything [`XPathLexer`] guarantees holds here as well: byte-lossless
/// coverage, `None` forever once exhausted, and a state depth that
/// returns to one on balanced input.
pub struct XQueryLexer<'a> {
    base: XPathLexer<'a>,
    /// Active documentation sub-lexer; drained before the host resumes.
    doc: Option<XQDocLexer<'a>>,
}

impl<'a> XQueryLexer<'a> {
    /// Create a lexer over `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        XQueryLexer {
            base: XPathLexer::with_keywords(text, keywords::xquery_keyword),
            doc: None,
        }
    }

    /// The source being lexed; token spans index into it.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.base.source()
    }

    /// Number of active modes. One when no construct is open.
    #[must_use]
    pub fn state_depth(&self) -> usize {
        self.base.state_depth()
    }

    /// Produce the next token, or `None` at the end of the input.
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(doc) = &mut self.doc {
            if let Some(token) = doc.next_token() {
                return Some(token);
            }
            // Sub-range drained; resume at the comment close.
            let end = doc.pos();
            self.base.cursor.seek(end);
            self.doc = None;
        }
        self.base.cursor.flush();
        match self.base.stack.top() {
            State::Default => self.default_token(),
            State::StringQuote => self.string_token(b'"'),
            State::StringApos => self.string_token(b'\''),
            State::BracedUri => self.braced_uri_token(),
            State::ElemContent => self.elem_content_token(),
            State::StartTag => self.start_tag_token(),
            State::AttrList => self.attr_list_token(),
            State::ClosingTag => self.closing_tag_token(),
            State::AttrValueQuote => self.attr_value_token(b'"'),
            State::AttrValueApos => self.attr_value_token(b'\''),
            State::XmlComment => self.delimited_body_token(
                b'-',
                "-->",
                TokenKind::XmlComment,
                TokenKind::XmlCommentEnd,
            ),
            State::CData => self.delimited_body_token(
                b']',
                "]]>",
                TokenKind::CDataContents,
                TokenKind::CDataEnd,
            ),
            State::PiTarget => self.pi_target_token(),
            State::PiContents => self.delimited_body_token(
                b'?',
                "?>",
                TokenKind::ProcessingInstructionContents,
                TokenKind::ProcessingInstructionEnd,
            ),
            State::StringConstructor => self.constructor_token(),
            State::StringInterpolation => self.interpolation_token(),
            // The shared modes behave identically in both languages.
            State::PartialExponent
            | State::Comment
            | State::PragmaPre
            | State::PragmaQName
            | State::PragmaContents
            | State::UnexpectedEnd => self.base.next_token(),
        }
    }

    // ─── Token construction ──────────────────────────────────────────────

    #[inline]
    fn token(&self, kind: TokenKind) -> Option<Token> {
        let span = Span::new(self.base.cursor.start(), self.base.cursor.pos());
        Some(Token::new(kind, span))
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> Option<Token> {
        self.base.cursor.advance();
        self.token(kind)
    }

    fn whitespace_token(&mut self) -> Option<Token> {
        self.base
            .cursor
            .eat_while(|c| classify(c) == CharClass::Whitespace);
        self.token(TokenKind::Whitespace)
    }

    /// A name in markup context. Tag and attribute names are never
    /// keywords.
    fn xml_name_token(&mut self, kind: TokenKind) -> Option<Token> {
        self.base.cursor.advance();
        self.base.cursor.eat_while(is_name_char);
        self.token(kind)
    }

    // ─── Default mode overrides ──────────────────────────────────────────

    fn default_token(&mut self) -> Option<Token> {
        match classify(self.base.cursor.peek()) {
            CharClass::LessThan => self.less_than_token(),
            CharClass::CurlyOpen => {
                self.base.cursor.advance();
                self.base.stack.push(State::Default);
                self.token(TokenKind::BlockOpen)
            }
            CharClass::CurlyClose => {
                // Pops back into an enclosing construct; at the bottom the
                // stray brace is left for the parser.
                self.base.stack.pop();
                self.single(TokenKind::BlockClose)
            }
            CharClass::Backtick => self.backtick_token(),
            CharClass::ParenOpen => self.paren_token(),
            class => self.base.default_class_token(class),
        }
    }

    fn backtick_token(&mut self) -> Option<Token> {
        if self.base.cursor.matches("`[") {
            self.base.cursor.advance_n(2);
            self.base.stack.push(State::StringConstructor);
            self.token(TokenKind::StringConstructorStart)
        } else {
            self.single(TokenKind::BadCharacter)
        }
    }

    /// `(:~` opens a documentation comment: the comment mode is pushed as
    /// usual, then the body is handed to the documentation sub-lexer.
    fn paren_token(&mut self) -> Option<Token> {
        if self.base.cursor.matches("(:~") {
            self.base.cursor.advance_n(2);
            self.base.stack.push(State::Comment);
            let token = self.token(TokenKind::CommentStart);
            self.doc = Some(self.doc_sublexer());
            return token;
        }
        self.base.paren_token()
    }

    /// Pre-scan the comment body, nesting-aware, and build a sub-lexer
    /// over exactly that range. The host cursor does not move.
    fn doc_sublexer(&self) -> XQDocLexer<'a> {
        let mut scan = self.base.cursor;
        let mut depth = 1u32;
        loop {
            scan.eat_until2(b'(', b':');
            if scan.is_eof() {
                break;
            }
            if scan.matches("(:") {
                depth += 1;
                scan.advance_n(2);
            } else if scan.matches(":)") {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                scan.advance_n(2);
            } else {
                scan.advance(); // lone '(' or ':'
            }
        }
        XQDocLexer::with_range(self.base.cursor.text(), self.base.cursor.pos(), scan.pos())
    }

    // ─── `<` disambiguation ──────────────────────────────────────────────

    fn less_than_token(&mut self) -> Option<Token> {
        if self.base.cursor.matches("<<") {
            self.base.cursor.advance_n(2);
            return self.token(TokenKind::NodeBefore);
        }
        if self.base.cursor.matches("<=") {
            self.base.cursor.advance_n(2);
            return self.token(TokenKind::LessThanEqual);
        }
        if self.base.cursor.matches("</") {
            self.base.cursor.advance_n(2);
            self.base.stack.push(State::ClosingTag);
            return self.token(TokenKind::CloseXmlTag);
        }
        if self.base.cursor.matches("<!") {
            return self.bang_markup_token();
        }
        if self.base.cursor.matches("<?") {
            self.base.cursor.advance_n(2);
            self.base.stack.push(State::PiTarget);
            return self.token(TokenKind::ProcessingInstructionBegin);
        }
        self.open_tag_token()
    }

    /// Speculatively scan past `<` for a tag name and classify what
    /// follows it. Only the marker token is emitted here; the pushed mode
    /// re-scans the name so token boundaries stay uniform.
    fn open_tag_token(&mut self) -> Option<Token> {
        self.base.cursor.save();
        self.base.cursor.advance(); // consume '<'
        let after_lt = self.base.cursor.pos();
        self.base
            .cursor
            .eat_while(|c| classify(c) == CharClass::Whitespace);
        let ws_end = self.base.cursor.pos();
        let leading_ws = ws_end > after_lt;

        if !is_name_start(self.base.cursor.peek()) {
            // No tag name in sight: the comparison operator.
            self.base.cursor.restore();
            self.base.cursor.advance();
            return self.token(TokenKind::LessThan);
        }

        self.base.cursor.advance();
        self.base.cursor.eat_while(is_name_char);
        if self.base.cursor.peek() == ':' {
            self.base.cursor.advance();
            self.base.cursor.eat_while(is_name_char);
        }
        self.base
            .cursor
            .eat_while(|c| classify(c) == CharClass::Whitespace);
        let follower = self.base.cursor.peek();
        let confirmed = matches!(follower, '>' | '/') || is_name_start(follower);

        if confirmed {
            if leading_ws {
                // Covers `<` plus the whitespace; the parser decides
                // whether this was a tag or a comparison that lost its
                // right operand.
                self.base.cursor.seek(ws_end);
                self.base.stack.push(State::StartTag);
                return self.token(TokenKind::MaybeOpenXmlTag);
            }
            self.base.cursor.seek(after_lt);
            self.base.stack.push(State::StartTag);
            return self.token(TokenKind::OpenXmlTag);
        }
        if leading_ws {
            self.base.cursor.restore();
            self.base.cursor.advance();
            return self.token(TokenKind::LessThan);
        }
        // A name directly after `<` commits to a constructor even when
        // what follows fits neither a tag nor an attribute list; the
        // lone marker is left for the parser to recover from.
        self.base.cursor.seek(after_lt);
        self.token(TokenKind::OpenXmlTag)
    }

    /// `<!` markup: an XML comment, a CDATA section, or malformed.
    fn bang_markup_token(&mut self) -> Option<Token> {
        if self.base.cursor.matches("<!--") {
            self.base.cursor.advance_n(4);
            self.base.stack.push(State::XmlComment);
            self.token(TokenKind::XmlCommentStart)
        } else if self.base.cursor.matches("<![CDATA[") {
            self.base.cursor.advance_n(9);
            self.base.stack.push(State::CData);
            self.token(TokenKind::CDataStart)
        } else if self.base.cursor.matches("<![") {
            self.base.cursor.advance_n(3);
            self.token(TokenKind::Invalid)
        } else {
            self.base.cursor.advance_n(2);
            self.token(TokenKind::Invalid)
        }
    }

    // ─── Strings and URI literals (entity-aware) ─────────────────────────

    fn string_token(&mut self, delim: u8) -> Option<Token> {
        if self.base.cursor.is_eof() {
            return None;
        }
        let quote = delim as char;
        if self.base.cursor.peek() == quote {
            self.base.cursor.advance();
            if self.base.cursor.peek() == quote {
                self.base.cursor.advance();
                return self.token(TokenKind::EscapedCharacter);
            }
            self.base.stack.pop();
            return self.token(TokenKind::StringEnd);
        }
        if self.base.cursor.peek() == '&' {
            return self.entity_ref_token(RefContext::InString);
        }
        self.base.cursor.eat_until2(delim, b'&');
        self.token(TokenKind::StringContents)
    }

    fn braced_uri_token(&mut self) -> Option<Token> {
        if self.base.cursor.is_eof() {
            return None;
        }
        match self.base.cursor.peek() {
            '}' => {
                self.base.cursor.advance();
                self.base.stack.pop();
                self.token(TokenKind::BracedUriEnd)
            }
            '{' => self.single(TokenKind::BadCharacter),
            '&' => self.entity_ref_token(RefContext::InString),
            _ => {
                self.base.cursor.eat_until3(b'}', b'{', b'&');
                self.token(TokenKind::StringContents)
            }
        }
    }

    // ─── String constructors ─────────────────────────────────────────────

    /// Literal contents of `` `[ ... ]` ``. A lone backtick or bracket is
    /// contents; only `` `{ `` and `` ]` `` interrupt the run.
    fn constructor_token(&mut self) -> Option<Token> {
        loop {
            self.base.cursor.eat_until2(b'`', b']');
            if self.base.cursor.is_eof() {
                break;
            }
            if self.base.cursor.matches("`{") || self.base.cursor.matches("]`") {
                break;
            }
            self.base.cursor.advance(); // literal '`' or ']'
        }
        if self.base.cursor.pos() > self.base.cursor.start() {
            if self.base.cursor.is_eof() {
                self.base.stack.replace(State::UnexpectedEnd);
            }
            return self.token(TokenKind::StringConstructorContents);
        }
        if self.base.cursor.matches("`{") {
            self.base.cursor.advance_n(2);
            self.base.stack.push(State::StringInterpolation);
            return self.token(TokenKind::StringInterpolationOpen);
        }
        if self.base.cursor.matches("]`") {
            self.base.cursor.advance_n(2);
            self.base.stack.pop();
            return self.token(TokenKind::StringConstructorEnd);
        }
        self.base.block_eob()
    }

    /// Expression context inside an interpolation hole. Identical to
    /// default mode except that `}` followed by a backtick closes the
    /// hole rather than a block.
    fn interpolation_token(&mut self) -> Option<Token> {
        if self.base.cursor.matches("}`") {
            self.base.cursor.advance_n(2);
            self.base.stack.pop();
            return self.token(TokenKind::StringInterpolationClose);
        }
        if self.base.cursor.peek() == '}' {
            return self.single(TokenKind::BlockClose);
        }
        self.default_token()
    }

    // ─── Element content ─────────────────────────────────────────────────

    fn elem_content_token(&mut self) -> Option<Token> {
        if self.base.cursor.is_eof() {
            return self.base.block_eob();
        }
        match self.base.cursor.peek() {
            '<' => self.content_markup_token(),
            '{' => {
                if self.base.cursor.matches("{{") {
                    self.base.cursor.advance_n(2);
                    return self.token(TokenKind::XmlEscapedCharacter);
                }
                self.base.cursor.advance();
                self.base.stack.push(State::Default);
                self.token(TokenKind::BlockOpen)
            }
            '}' => {
                if self.base.cursor.matches("}}") {
                    self.base.cursor.advance_n(2);
                    return self.token(TokenKind::XmlEscapedCharacter);
                }
                // An unescaped close brace has no meaning in content.
                self.single(TokenKind::BadCharacter)
            }
            '&' => self.entity_ref_token(RefContext::InXml),
            _ => {
                self.base.cursor.eat_until4(b'<', b'{', b'}', b'&');
                self.token(TokenKind::XmlElementContents)
            }
        }
    }

    fn content_markup_token(&mut self) -> Option<Token> {
        if self.base.cursor.matches("</") {
            self.base.cursor.advance_n(2);
            self.base.stack.replace(State::ClosingTag);
            return self.token(TokenKind::CloseXmlTag);
        }
        if self.base.cursor.matches("<!") {
            return self.bang_markup_token();
        }
        if self.base.cursor.matches("<?") {
            self.base.cursor.advance_n(2);
            self.base.stack.push(State::PiTarget);
            return self.token(TokenKind::ProcessingInstructionBegin);
        }
        self.base.cursor.advance(); // consume '<'
        if is_name_start(self.base.cursor.peek()) {
            self.base.stack.push(State::StartTag);
            return self.token(TokenKind::OpenXmlTag);
        }
        // Content may not contain a bare `<`.
        self.token(TokenKind::BadCharacter)
    }

    // ─── Tags ────────────────────────────────────────────────────────────

    fn start_tag_token(&mut self) -> Option<Token> {
        match classify(self.base.cursor.peek()) {
            CharClass::EndOfBuffer if self.base.cursor.is_eof() => self.base.block_eob(),
            CharClass::Whitespace => {
                self.base.stack.replace(State::AttrList);
                self.whitespace_token()
            }
            CharClass::NameStart => self.xml_name_token(TokenKind::XmlTagName),
            CharClass::Colon => self.single(TokenKind::XmlTagNameSeparator),
            CharClass::GreaterThan => {
                self.base.cursor.advance();
                self.base.stack.replace(State::ElemContent);
                self.token(TokenKind::EndXmlTag)
            }
            CharClass::Slash if self.base.cursor.matches("/>") => {
                self.base.cursor.advance_n(2);
                self.base.stack.pop();
                self.token(TokenKind::SelfClosingXmlTag)
            }
            _ => self.single(TokenKind::BadCharacter),
        }
    }

    fn attr_list_token(&mut self) -> Option<Token> {
        match classify(self.base.cursor.peek()) {
            CharClass::EndOfBuffer if self.base.cursor.is_eof() => self.base.block_eob(),
            CharClass::Whitespace => self.whitespace_token(),
            CharClass::NameStart => self.xml_name_token(TokenKind::XmlAttributeName),
            CharClass::Colon => self.single(TokenKind::XmlTagNameSeparator),
            CharClass::Equals => self.single(TokenKind::XmlEquals),
            CharClass::Quote => {
                self.base.cursor.advance();
                self.base.stack.push(State::AttrValueQuote);
                self.token(TokenKind::XmlAttrValueStart)
            }
            CharClass::Apostrophe => {
                self.base.cursor.advance();
                self.base.stack.push(State::AttrValueApos);
                self.token(TokenKind::XmlAttrValueStart)
            }
            CharClass::GreaterThan => {
                self.base.cursor.advance();
                self.base.stack.replace(State::ElemContent);
                self.token(TokenKind::EndXmlTag)
            }
            CharClass::Slash if self.base.cursor.matches("/>") => {
                self.base.cursor.advance_n(2);
                self.base.stack.pop();
                self.token(TokenKind::SelfClosingXmlTag)
            }
            _ => self.single(TokenKind::BadCharacter),
        }
    }

    fn closing_tag_token(&mut self) -> Option<Token> {
        match classify(self.base.cursor.peek()) {
            CharClass::EndOfBuffer if self.base.cursor.is_eof() => self.base.block_eob(),
            CharClass::Whitespace => self.whitespace_token(),
            CharClass::NameStart => self.xml_name_token(TokenKind::XmlTagName),
            CharClass::Colon => self.single(TokenKind::XmlTagNameSeparator),
            CharClass::GreaterThan => {
                self.base.cursor.advance();
                self.base.stack.pop();
                self.token(TokenKind::EndXmlTag)
            }
            _ => self.single(TokenKind::BadCharacter),
        }
    }

    // ─── Attribute values ────────────────────────────────────────────────

    fn attr_value_token(&mut self, delim: u8) -> Option<Token> {
        if self.base.cursor.is_eof() {
            return None;
        }
        let quote = delim as char;
        if self.base.cursor.peek() == quote {
            self.base.cursor.advance();
            if self.base.cursor.peek() == quote {
                self.base.cursor.advance();
                return self.token(TokenKind::XmlEscapedCharacter);
            }
            self.base.stack.pop();
            return self.token(TokenKind::XmlAttrValueEnd);
        }
        match self.base.cursor.peek() {
            '{' => {
                if self.base.cursor.matches("{{") {
                    self.base.cursor.advance_n(2);
                    return self.token(TokenKind::XmlEscapedCharacter);
                }
                self.base.cursor.advance();
                self.base.stack.push(State::Default);
                self.token(TokenKind::BlockOpen)
            }
            '}' => {
                if self.base.cursor.matches("}}") {
                    self.base.cursor.advance_n(2);
                    return self.token(TokenKind::XmlEscapedCharacter);
                }
                self.single(TokenKind::BadCharacter)
            }
            // Markup may not appear inside an attribute value.
            '<' => self.single(TokenKind::BadCharacter),
            '&' => self.entity_ref_token(RefContext::InXmlAttr),
            _ => {
                self.base.cursor.eat_until5(delim, b'{', b'}', b'&', b'<');
                self.token(TokenKind::XmlAttrValueContents)
            }
        }
    }

    // ─── Shared block bodies ─────────────────────────────────────────────

    /// Body of a construct closed by a fixed sequence: XML comments,
    /// CDATA sections, processing-instruction contents. `needle` is the
    /// first byte of `close`.
    fn delimited_body_token(
        &mut self,
        needle: u8,
        close: &str,
        body: TokenKind,
        end: TokenKind,
    ) -> Option<Token> {
        if self.base.cursor.matches(close) {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "close sequences are at most three bytes"
            )]
            self.base.cursor.advance_n(close.len() as u32);
            self.base.stack.pop();
            return self.token(end);
        }
        loop {
            self.base.cursor.eat_until(needle);
            if self.base.cursor.is_eof() || self.base.cursor.matches(close) {
                break;
            }
            self.base.cursor.advance();
        }
        if self.base.cursor.pos() > self.base.cursor.start() {
            if self.base.cursor.is_eof() {
                self.base.stack.replace(State::UnexpectedEnd);
            }
            return self.token(body);
        }
        self.base.block_eob()
    }

    // ─── Processing instructions ─────────────────────────────────────────

    fn pi_target_token(&mut self) -> Option<Token> {
        match classify(self.base.cursor.peek()) {
            CharClass::EndOfBuffer if self.base.cursor.is_eof() => self.base.block_eob(),
            CharClass::NameStart => {
                self.xml_name_token(TokenKind::ProcessingInstructionTarget)
            }
            CharClass::Whitespace => {
                self.base.stack.replace(State::PiContents);
                self.whitespace_token()
            }
            CharClass::QuestionMark if self.base.cursor.matches("?>") => {
                self.base.cursor.advance_n(2);
                self.base.stack.pop();
                self.token(TokenKind::ProcessingInstructionEnd)
            }
            _ => self.single(TokenKind::BadCharacter),
        }
    }

    // ─── Entity references ───────────────────────────────────────────────

    /// Scan one reference and pick the kind for the current context.
    /// Quoted contexts report a cut-off reference through their own
    /// `None`; block contexts reach the usual end-of-block recovery on
    /// the next call.
    fn entity_ref_token(&mut self, context: RefContext) -> Option<Token> {
        let shape = scan_entity_ref(&mut self.base.cursor);
        let kind = match context {
            RefContext::InString => match shape {
                EntityRef::Character => TokenKind::CharacterReference,
                EntityRef::Predefined => TokenKind::PredefinedEntityReference,
                EntityRef::Partial => TokenKind::PartialEntityReference,
                EntityRef::Empty => TokenKind::EmptyEntityReference,
            },
            RefContext::InXml => match shape {
                EntityRef::Character => TokenKind::XmlCharacterReference,
                EntityRef::Predefined => TokenKind::XmlPredefinedEntityReference,
                EntityRef::Partial => TokenKind::XmlPartialEntityReference,
                EntityRef::Empty => TokenKind::XmlEmptyEntityReference,
            },
            RefContext::InXmlAttr => match shape {
                EntityRef::Character => TokenKind::XmlAttrCharacterReference,
                EntityRef::Predefined => TokenKind::XmlAttrPredefinedEntityReference,
                EntityRef::Partial => TokenKind::XmlAttrPartialEntityReference,
                EntityRef::Empty => TokenKind::XmlAttrEmptyEntityReference,
            },
        };
        self.token(kind)
    }
}

impl Iterator for XQueryLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use xq_tokens::{Token, TokenKind};

    use super::XQueryLexer;

    fn lex(source: &str) -> Vec<Token> {
        XQueryLexer::new(source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        lex(source)
            .iter()
            .map(|t| t.text(source).to_owned())
            .collect()
    }

    // ─── Vocabulary ──────────────────────────────────────────────────────

    #[test]
    fn superset_keywords_resolve() {
        assert_eq!(
            kinds("declare variable"),
            vec![
                TokenKind::KwDeclare,
                TokenKind::Whitespace,
                TokenKind::KwVariable,
            ]
        );
        assert_eq!(kinds("for"), vec![TokenKind::KwFor]);
        assert_eq!(kinds("typeswitch"), vec![TokenKind::KwTypeswitch]);
    }

    #[test]
    fn every_keyword_spelling_lexes_to_its_kind() {
        for kind in TokenKind::ALL {
            let Some(spelling) = kind.keyword_str() else {
                continue;
            };
            let tokens = lex(spelling);
            assert_eq!(tokens.len(), 1, "one token for {spelling:?}");
            assert_eq!(tokens[0].kind, kind);
            assert!(kind.is_ncname(), "{kind:?} must stay name-shaped");
        }
    }

    // ─── `<` disambiguation ──────────────────────────────────────────────

    #[test]
    fn spaced_less_than_is_a_comparison() {
        assert_eq!(
            kinds("a < b"),
            vec![
                TokenKind::NCName,
                TokenKind::Whitespace,
                TokenKind::LessThan,
                TokenKind::Whitespace,
                TokenKind::NCName,
            ]
        );
    }

    #[test]
    fn self_closing_element() {
        let source = "<a/>";
        let tokens = lex(source);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::SelfClosingXmlTag,
            ]
        );
        assert_eq!(tokens[0].span.to_range(), 0..1);
        assert_eq!(tokens[2].span.to_range(), 2..4);
    }

    #[test]
    fn whitespace_after_angle_gives_the_maybe_marker() {
        let source = "< a/>";
        let tokens = lex(source);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::MaybeOpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::SelfClosingXmlTag,
            ]
        );
        assert_eq!(tokens[0].text(source), "< ");
    }

    #[test]
    fn name_directly_after_angle_commits_to_a_tag() {
        // The follower rules out a well-formed tag, so only the marker is
        // emitted and scanning continues in expression context.
        assert_eq!(
            kinds("a <b"),
            vec![
                TokenKind::NCName,
                TokenKind::Whitespace,
                TokenKind::OpenXmlTag,
                TokenKind::NCName,
            ]
        );
    }

    #[test]
    fn operators_still_win_over_tags() {
        assert_eq!(kinds("<<"), vec![TokenKind::NodeBefore]);
        assert_eq!(kinds("<="), vec![TokenKind::LessThanEqual]);
        assert_eq!(
            kinds("1 < 2"),
            vec![
                TokenKind::IntegerLiteral,
                TokenKind::Whitespace,
                TokenKind::LessThan,
                TokenKind::Whitespace,
                TokenKind::IntegerLiteral,
            ]
        );
    }

    // ─── Elements ────────────────────────────────────────────────────────

    #[test]
    fn element_with_text_content() {
        let source = "<a>text</a>";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::EndXmlTag,
                TokenKind::XmlElementContents,
                TokenKind::CloseXmlTag,
                TokenKind::XmlTagName,
                TokenKind::EndXmlTag,
            ]
        );
        let mut lexer = XQueryLexer::new(source);
        while lexer.next_token().is_some() {}
        assert_eq!(lexer.state_depth(), 1);
    }

    #[test]
    fn nested_elements_balance_the_stack() {
        let source = "<a><b>x</b></a>";
        let mut lexer = XQueryLexer::new(source);
        let mut count = 0;
        while lexer.next_token().is_some() {
            count += 1;
        }
        assert_eq!(lexer.state_depth(), 1);
        assert_eq!(count, 13);
    }

    #[test]
    fn qualified_tag_names() {
        assert_eq!(
            kinds("<ns:a/>"),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::XmlTagNameSeparator,
                TokenKind::XmlTagName,
                TokenKind::SelfClosingXmlTag,
            ]
        );
    }

    #[test]
    fn attributes_and_values() {
        let source = "<a b=\"c\" d='e'/>";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::Whitespace,
                TokenKind::XmlAttributeName,
                TokenKind::XmlEquals,
                TokenKind::XmlAttrValueStart,
                TokenKind::XmlAttrValueContents,
                TokenKind::XmlAttrValueEnd,
                TokenKind::Whitespace,
                TokenKind::XmlAttributeName,
                TokenKind::XmlEquals,
                TokenKind::XmlAttrValueStart,
                TokenKind::XmlAttrValueContents,
                TokenKind::XmlAttrValueEnd,
                TokenKind::SelfClosingXmlTag,
            ]
        );
    }

    #[test]
    fn attribute_value_interpolation() {
        assert_eq!(
            kinds("<a b=\"{1}\"/>"),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::Whitespace,
                TokenKind::XmlAttributeName,
                TokenKind::XmlEquals,
                TokenKind::XmlAttrValueStart,
                TokenKind::BlockOpen,
                TokenKind::IntegerLiteral,
                TokenKind::BlockClose,
                TokenKind::XmlAttrValueEnd,
                TokenKind::SelfClosingXmlTag,
            ]
        );
    }

    #[test]
    fn attribute_value_escapes_and_entities() {
        let source = "<a b=\"x\"\"y&lt;\"/>";
        let tokens = lex(source);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds[6..10],
            [
                TokenKind::XmlAttrValueContents,
                TokenKind::XmlEscapedCharacter,
                TokenKind::XmlAttrValueContents,
                TokenKind::XmlAttrPredefinedEntityReference,
            ]
        );
    }

    #[test]
    fn content_interpolation_and_escapes() {
        assert_eq!(
            kinds("<a>{1}</a>"),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::EndXmlTag,
                TokenKind::BlockOpen,
                TokenKind::IntegerLiteral,
                TokenKind::BlockClose,
                TokenKind::CloseXmlTag,
                TokenKind::XmlTagName,
                TokenKind::EndXmlTag,
            ]
        );
        let source = "<a>{{x}}</a>";
        assert_eq!(
            kinds(source)[3..6],
            [
                TokenKind::XmlEscapedCharacter,
                TokenKind::XmlElementContents,
                TokenKind::XmlEscapedCharacter,
            ]
        );
    }

    #[test]
    fn content_entity_references() {
        assert_eq!(
            kinds("<a>&lt;&#65;</a>")[3..5],
            [
                TokenKind::XmlPredefinedEntityReference,
                TokenKind::XmlCharacterReference,
            ]
        );
    }

    #[test]
    fn unterminated_element_content_recovers() {
        assert_eq!(
            kinds("<a>"),
            vec![
                TokenKind::OpenXmlTag,
                TokenKind::XmlTagName,
                TokenKind::EndXmlTag,
                TokenKind::UnexpectedEndOfBlock,
            ]
        );
    }

    #[test]
    fn unterminated_attribute_value_returns_none() {
        let mut lexer = XQueryLexer::new("<a b=\"x");
        while lexer.next_token().is_some() {}
        assert_eq!(lexer.state_depth(), 3);
    }

    // ─── XML comments, CDATA, processing instructions ────────────────────

    #[test]
    fn xml_comment() {
        let source = "<!-- note -->";
        let tokens = lex(source);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::XmlCommentStart,
                TokenKind::XmlComment,
                TokenKind::XmlCommentEnd,
            ]
        );
        assert_eq!(tokens[1].text(source), " note ");
    }

    #[test]
    fn unterminated_xml_comment_recovers() {
        assert_eq!(
            kinds("<!--x"),
            vec![
                TokenKind::XmlCommentStart,
                TokenKind::XmlComment,
                TokenKind::UnexpectedEndOfBlock,
            ]
        );
    }

    #[test]
    fn cdata_section_in_content() {
        let source = "<a><![CDATA[1<2]]></a>";
        let tokens = lex(source);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds[3..6],
            [
                TokenKind::CDataStart,
                TokenKind::CDataContents,
                TokenKind::CDataEnd,
            ]
        );
        assert_eq!(tokens[4].text(source), "1<2");
    }

    #[test]
    fn cdata_prefix_without_the_rest_is_invalid() {
        assert_eq!(
            kinds("<![ "),
            vec![TokenKind::Invalid, TokenKind::Whitespace]
        );
        assert_eq!(
            kinds("<!DOCTYPE"),
            vec![TokenKind::Invalid, TokenKind::NCName]
        );
    }

    #[test]
    fn processing_instruction() {
        let source = "<?target data?>";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::ProcessingInstructionBegin,
                TokenKind::ProcessingInstructionTarget,
                TokenKind::Whitespace,
                TokenKind::ProcessingInstructionContents,
                TokenKind::ProcessingInstructionEnd,
            ]
        );
        assert_eq!(texts(source)[3], "data");
    }

    #[test]
    fn empty_processing_instruction() {
        assert_eq!(
            kinds("<?x?>"),
            vec![
                TokenKind::ProcessingInstructionBegin,
                TokenKind::ProcessingInstructionTarget,
                TokenKind::ProcessingInstructionEnd,
            ]
        );
    }

    // ─── Braces and the mode stack ───────────────────────────────────────

    #[test]
    fn braces_push_and_pop_expression_context() {
        let mut lexer = XQueryLexer::new("map { 'k' : 1 }");
        let mut depth_at_open = 0;
        while let Some(token) = lexer.next_token() {
            if token.kind == TokenKind::BlockOpen {
                depth_at_open = lexer.state_depth();
            }
        }
        assert_eq!(depth_at_open, 2);
        assert_eq!(lexer.state_depth(), 1);
    }

    #[test]
    fn stray_close_brace_stays_at_the_bottom() {
        let mut lexer = XQueryLexer::new("}");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::BlockClose);
        assert_eq!(lexer.state_depth(), 1);
        assert_eq!(lexer.next_token(), None);
    }

    // ─── Strings ─────────────────────────────────────────────────────────

    #[test]
    fn string_literals_resolve_entity_references() {
        assert_eq!(
            kinds("'a&lt;b'"),
            vec![
                TokenKind::StringStart,
                TokenKind::StringContents,
                TokenKind::PredefinedEntityReference,
                TokenKind::StringContents,
                TokenKind::StringEnd,
            ]
        );
        assert_eq!(
            kinds("\"&#x2014;\""),
            vec![
                TokenKind::StringStart,
                TokenKind::CharacterReference,
                TokenKind::StringEnd,
            ]
        );
    }

    #[test]
    fn braced_uri_resolves_entity_references() {
        assert_eq!(
            kinds("Q{a&amp;b}"),
            vec![
                TokenKind::BracedUriStart,
                TokenKind::StringContents,
                TokenKind::PredefinedEntityReference,
                TokenKind::StringContents,
                TokenKind::BracedUriEnd,
            ]
        );
    }

    #[test]
    fn cut_off_reference_in_a_string_is_partial() {
        let mut lexer = XQueryLexer::new("'&bogus");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::StringStart);
        assert_eq!(
            lexer.next_token().unwrap().kind,
            TokenKind::PartialEntityReference
        );
        assert_eq!(lexer.next_token(), None);
        assert_eq!(lexer.state_depth(), 2);
    }

    // ─── String constructors ─────────────────────────────────────────────

    #[test]
    fn string_constructor_with_interpolation() {
        let source = "`[Hello `{$n}`!]`";
        let tokens = lex(source);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::StringConstructorStart,
                TokenKind::StringConstructorContents,
                TokenKind::StringInterpolationOpen,
                TokenKind::VariableIndicator,
                TokenKind::NCName,
                TokenKind::StringInterpolationClose,
                TokenKind::StringConstructorContents,
                TokenKind::StringConstructorEnd,
            ]
        );
        assert_eq!(tokens[1].text(source), "Hello ");
        assert_eq!(tokens[6].text(source), "!");
    }

    #[test]
    fn lone_backtick_and_bracket_are_contents() {
        let source = "`[a`b]c]`";
        let tokens = lex(source);
        assert_eq!(tokens[1].kind, TokenKind::StringConstructorContents);
        assert_eq!(tokens[1].text(source), "a`b]c");
        assert_eq!(tokens[2].kind, TokenKind::StringConstructorEnd);
    }

    #[test]
    fn lone_close_brace_in_a_hole_does_not_close_it() {
        assert_eq!(
            kinds("`[`{}}`]`"),
            vec![
                TokenKind::StringConstructorStart,
                TokenKind::StringInterpolationOpen,
                TokenKind::BlockClose,
                TokenKind::StringInterpolationClose,
                TokenKind::StringConstructorEnd,
            ]
        );
    }

    #[test]
    fn nested_block_inside_a_hole() {
        assert_eq!(
            kinds("`[`{ map { } }`]`"),
            vec![
                TokenKind::StringConstructorStart,
                TokenKind::StringInterpolationOpen,
                TokenKind::Whitespace,
                TokenKind::KwMap,
                TokenKind::Whitespace,
                TokenKind::BlockOpen,
                TokenKind::Whitespace,
                TokenKind::BlockClose,
                TokenKind::Whitespace,
                TokenKind::StringInterpolationClose,
                TokenKind::StringConstructorEnd,
            ]
        );
    }

    #[test]
    fn unterminated_constructor_recovers() {
        assert_eq!(
            kinds("`[x"),
            vec![
                TokenKind::StringConstructorStart,
                TokenKind::StringConstructorContents,
                TokenKind::UnexpectedEndOfBlock,
            ]
        );
        let mut lexer = XQueryLexer::new("`[`{1");
        while lexer.next_token().is_some() {}
        assert_eq!(lexer.state_depth(), 3);
    }

    #[test]
    fn stray_backtick_is_a_bad_character() {
        assert_eq!(kinds("`"), vec![TokenKind::BadCharacter]);
    }

    // ─── Documentation comments ──────────────────────────────────────────

    #[test]
    fn doc_comment_runs_the_sub_lexer() {
        let source = "(:~\n : Summary.\n :)";
        let tokens = lex(source);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::CommentStart,
                TokenKind::DocMarker,
                TokenKind::DocTrim,
                TokenKind::DocContents,
                TokenKind::DocTrim,
                TokenKind::CommentEnd,
            ]
        );
        assert_eq!(tokens[3].text(source), " Summary.");
    }

    #[test]
    fn doc_comment_with_a_param_tag() {
        assert_eq!(
            kinds("(:~ @param $n count :)"),
            vec![
                TokenKind::CommentStart,
                TokenKind::DocMarker,
                TokenKind::DocContents,
                TokenKind::DocTag,
                TokenKind::DocContents,
                TokenKind::DocVariableIndicator,
                TokenKind::DocVariableName,
                TokenKind::DocContents,
                TokenKind::CommentEnd,
            ]
        );
    }

    #[test]
    fn plain_comment_stays_plain() {
        assert_eq!(
            kinds("(: x :)"),
            vec![
                TokenKind::CommentStart,
                TokenKind::Comment,
                TokenKind::CommentEnd,
            ]
        );
    }

    #[test]
    fn nested_comment_inside_a_doc_body() {
        let source = "(:~ a (: b :) c :)";
        let tokens = lex(source);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::CommentStart,
                TokenKind::DocMarker,
                TokenKind::DocContents,
                TokenKind::CommentEnd,
            ]
        );
        assert_eq!(tokens[2].text(source), " a (: b :) c ");
    }

    #[test]
    fn unterminated_doc_comment_recovers() {
        assert_eq!(
            kinds("(:~ x"),
            vec![
                TokenKind::CommentStart,
                TokenKind::DocMarker,
                TokenKind::DocContents,
                TokenKind::UnexpectedEndOfBlock,
            ]
        );
    }

    // ─── Stream properties ───────────────────────────────────────────────

    #[test]
    fn mixed_document_is_lossless() {
        let source = "for $i in 1 to 3 return <li id=\"{$i}\">item &#8212; {$i}</li>";
        let tokens = lex(source);
        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.span.start, pos);
            pos = token.span.end;
        }
        assert_eq!(pos, u32::try_from(source.len()).unwrap());
        let rebuilt: String = tokens.iter().map(|t| t.text(source)).collect();
        assert_eq!(rebuilt, source);
    }

    proptest! {
        #[test]
        fn lexing_is_lossless(source in any::<String>()) {
            prop_assume!(u32::try_from(source.len()).is_ok());
            let tokens = lex(&source);
            let mut pos = 0u32;
            for token in &tokens {
                prop_assert_eq!(token.span.start, pos);
                pos = token.span.end;
            }
            let rebuilt: String = tokens.iter().map(|t| t.text(&source)).collect();
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn lexing_terminates_and_stays_done(source in any::<String>()) {
            prop_assume!(u32::try_from(source.len()).is_ok());
            let mut lexer = XQueryLexer::new(&source);
            while lexer.next_token().is_some() {}
            prop_assert_eq!(lexer.next_token(), None);
            prop_assert!(lexer.state_depth() >= 1);
        }
    }
}
