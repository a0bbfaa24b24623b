//! Sub-lexer for documentation comment bodies.
//!
//! A comment opened with `(:~` is still one comment to the host lexer:
//! it emits the opening token, pre-scans the nesting-aware extent of the
//! body, and hands that sub-range to [`XQDocLexer`]. The sub-lexer owns
//! its own cursor and mode stack, never reads past the range it was
//! given, and drains to `None` so the host can resume at the close
//! sequence.
//!
//! The vocabulary is line-oriented: a marker, line-break trims that
//! swallow the decorative gutter, prose runs, `@`-tags with a variable
//! after `@param`, and a small XML subset for inline markup.

use xq_lexer_core::{CharClass, Cursor, classify, is_name_char, is_name_start};
use xq_tokens::{Span, Token, TokenKind};

/// Tag names recognized after `@` at the start of a line. Sorted.
const TAGS: &[&str] = &[
    "author",
    "deprecated",
    "error",
    "param",
    "return",
    "see",
    "since",
    "version",
];

/// Modes of the documentation machine. Line starts are tracked as their
/// own mode so `@` is a tag only where a tag may begin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DocState {
    /// Before the `~` marker, at the very start of the body.
    Marker,
    /// At the start of a line, after the marker or a trim.
    LineStart,
    /// Inside a prose run.
    Contents,
    /// After `@param`, expecting the variable.
    TagParam,
    /// After `@param $`, expecting the variable name.
    TagParamName,
    /// Inside an inline tag, expecting its name.
    XmlTag,
    /// Inside an inline tag, past its name.
    XmlAttrs,
    /// Inside a double-quoted attribute value.
    XmlAttrQuote,
    /// Inside a single-quoted attribute value.
    XmlAttrApos,
}

/// Whitespace that may pad a line's gutter without ending it.
fn is_margin_ws(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Lexer for one documentation comment body.
///
/// Tokens tile the sub-range exactly; once it is exhausted every call
/// returns `None` and [`XQDocLexer::pos`] is the end of the range.
pub struct XQDocLexer<'a> {
    cursor: Cursor<'a>,
    states: Vec<DocState>,
}

impl<'a> XQDocLexer<'a> {
    /// Create a sub-lexer over `start..end` of `text`. The range begins
    /// at the `~` marker and ends before the closing sequence.
    ///
    /// Both offsets must lie on character boundaries within `text`.
    #[must_use]
    pub fn with_range(text: &'a str, start: u32, end: u32) -> Self {
        XQDocLexer {
            cursor: Cursor::with_range(text, start, end),
            states: vec![DocState::Marker],
        }
    }

    /// Current offset into the underlying source. The host resumes here
    /// once the body is drained.
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Depth of the mode stack. Greater than 1 while inline markup is
    /// open; always 1 once the body is drained.
    #[must_use]
    pub fn state_depth(&self) -> usize {
        self.states.len()
    }

    /// Produce the next token, or `None` once the body is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.flush();
        if self.cursor.is_eof() {
            // Unwind any open inline markup, one level per call.
            if self.states.len() > 1 {
                self.states.pop();
                return self.token(TokenKind::UnexpectedEndOfBlock);
            }
            return None;
        }
        match self.top() {
            DocState::Marker => self.marker_token(),
            DocState::LineStart => self.line_start_token(),
            DocState::Contents => self.contents_token(),
            DocState::TagParam => self.tag_param_token(),
            DocState::TagParamName => self.tag_param_name_token(),
            DocState::XmlTag => self.xml_tag_token(),
            DocState::XmlAttrs => self.xml_attrs_token(),
            DocState::XmlAttrQuote => self.attr_value_token(b'"'),
            DocState::XmlAttrApos => self.attr_value_token(b'\''),
        }
    }

    // ─── Mode stack ──────────────────────────────────────────────────────

    fn top(&self) -> DocState {
        self.states.last().copied().unwrap_or(DocState::Contents)
    }

    fn push(&mut self, state: DocState) {
        self.states.push(state);
    }

    fn pop(&mut self) {
        if self.states.len() > 1 {
            self.states.pop();
        }
    }

    fn replace(&mut self, state: DocState) {
        if let Some(top) = self.states.last_mut() {
            *top = state;
        }
    }

    // ─── Token construction ──────────────────────────────────────────────

    #[inline]
    fn token(&self, kind: TokenKind) -> Option<Token> {
        let span = Span::new(self.cursor.start(), self.cursor.pos());
        Some(Token::new(kind, span))
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> Option<Token> {
        self.cursor.advance();
        self.token(kind)
    }

    // ─── Lines and prose ─────────────────────────────────────────────────

    fn marker_token(&mut self) -> Option<Token> {
        self.replace(DocState::LineStart);
        if self.cursor.peek() == '~' {
            self.cursor.advance();
            return self.token(TokenKind::DocMarker);
        }
        self.next_token()
    }

    fn line_start_token(&mut self) -> Option<Token> {
        match self.cursor.peek() {
            '\n' | '\r' => return self.trim_token(),
            '@' => return self.tag_token(),
            _ => {}
        }
        self.cursor.eat_while(is_margin_ws);
        if self.cursor.peek() == '@' && self.cursor.pos() > self.cursor.start() {
            // Padding before a tag; emitted alone so the tag starts a
            // fresh token.
            return self.token(TokenKind::DocContents);
        }
        self.replace(DocState::Contents);
        self.contents_token()
    }

    /// A line break, the margin that follows it, and the optional `:`
    /// gutter. A `:` that begins a nested comment close stays in the
    /// prose.
    fn trim_token(&mut self) -> Option<Token> {
        if self.cursor.peek() == '\r' {
            self.cursor.advance();
        }
        if self.cursor.peek() == '\n' {
            self.cursor.advance();
        }
        self.cursor.eat_while(is_margin_ws);
        if self.cursor.peek() == ':' && !self.cursor.matches(":)") {
            self.cursor.advance();
        }
        self.replace(DocState::LineStart);
        self.token(TokenKind::DocTrim)
    }

    /// A prose run. Stops at line breaks and at `<` shaped like inline
    /// markup; a lone `<` is prose.
    fn contents_token(&mut self) -> Option<Token> {
        loop {
            self.cursor.eat_until3(b'\n', b'<', b'\r');
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.peek() == '<' {
                if self.xml_ahead() {
                    break;
                }
                self.cursor.advance(); // literal '<'
                continue;
            }
            break; // line break
        }
        if self.cursor.pos() > self.cursor.start() {
            return self.token(TokenKind::DocContents);
        }
        if self.cursor.peek() == '<' {
            return self.xml_open_token();
        }
        self.trim_token()
    }

    // ─── Tags ────────────────────────────────────────────────────────────

    /// `@` at a line start: a recognized tag name, or plain prose.
    fn tag_token(&mut self) -> Option<Token> {
        self.cursor.save();
        self.cursor.advance(); // consume '@'
        self.cursor.eat_while(|c| c.is_ascii_lowercase());
        let name = &self.cursor.token_text()[1..];
        if name == "param" {
            self.replace(DocState::TagParam);
            return self.token(TokenKind::DocTag);
        }
        if TAGS.binary_search(&name).is_ok() {
            self.replace(DocState::Contents);
            return self.token(TokenKind::DocTag);
        }
        self.cursor.restore();
        self.replace(DocState::Contents);
        self.contents_token()
    }

    fn tag_param_token(&mut self) -> Option<Token> {
        if is_margin_ws(self.cursor.peek()) {
            self.cursor.eat_while(is_margin_ws);
            return self.token(TokenKind::DocContents);
        }
        if self.cursor.peek() == '$' {
            self.replace(DocState::TagParamName);
            return self.single(TokenKind::DocVariableIndicator);
        }
        self.replace(DocState::Contents);
        self.contents_token()
    }

    fn tag_param_name_token(&mut self) -> Option<Token> {
        self.replace(DocState::Contents);
        if is_name_start(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.eat_while(is_name_char);
            return self.token(TokenKind::DocVariableName);
        }
        self.contents_token()
    }

    // ─── Inline markup ───────────────────────────────────────────────────

    /// Whether the `<` under the cursor opens a tag.
    fn xml_ahead(&self) -> bool {
        let mut probe = self.cursor;
        probe.advance();
        if probe.peek() == '/' {
            probe.advance();
        }
        is_name_start(probe.peek())
    }

    fn xml_open_token(&mut self) -> Option<Token> {
        self.cursor.advance(); // consume '<'
        if self.cursor.peek() == '/' {
            self.cursor.advance();
            self.push(DocState::XmlTag);
            return self.token(TokenKind::DocXmlCloseTagOpen);
        }
        self.push(DocState::XmlTag);
        self.token(TokenKind::DocXmlTagOpen)
    }

    fn xml_tag_token(&mut self) -> Option<Token> {
        if is_name_start(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.eat_while(is_name_char);
            self.replace(DocState::XmlAttrs);
            return self.token(TokenKind::DocXmlTagName);
        }
        self.xml_attrs_token()
    }

    fn xml_attrs_token(&mut self) -> Option<Token> {
        match self.cursor.peek() {
            '=' => self.single(TokenKind::DocXmlEquals),
            '"' => {
                self.push(DocState::XmlAttrQuote);
                self.single(TokenKind::DocXmlAttrValueStart)
            }
            '\'' => {
                self.push(DocState::XmlAttrApos);
                self.single(TokenKind::DocXmlAttrValueStart)
            }
            '>' => {
                self.cursor.advance();
                self.pop();
                self.token(TokenKind::DocXmlTagEnd)
            }
            '/' if self.cursor.matches("/>") => {
                self.cursor.advance_n(2);
                self.pop();
                self.token(TokenKind::DocXmlSelfClose)
            }
            c if is_name_start(c) => {
                self.cursor.advance();
                self.cursor.eat_while(is_name_char);
                self.token(TokenKind::DocXmlAttributeName)
            }
            c if classify(c) == CharClass::Whitespace => {
                self.cursor
                    .eat_while(|c| classify(c) == CharClass::Whitespace);
                self.token(TokenKind::Whitespace)
            }
            _ => self.single(TokenKind::BadCharacter),
        }
    }

    fn attr_value_token(&mut self, delim: u8) -> Option<Token> {
        if self.cursor.peek() == delim as char {
            self.cursor.advance();
            self.pop();
            return self.token(TokenKind::DocXmlAttrValueEnd);
        }
        self.cursor.eat_until(delim);
        self.token(TokenKind::DocXmlAttrValueContents)
    }
}

impl Iterator for XQDocLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
