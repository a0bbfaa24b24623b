//! The expression-language lexer.
//!
//! A stack machine over a [`Cursor`]: the active [`State`] picks a handler,
//! the handler consumes input and produces one [`Token`], and constructs
//! that change the interpretation of characters push and pop modes instead
//! of recursing. Keywords are not recognized here; a whole name is scanned
//! first and then looked up, so `ancestor-or-self` classifies in one step.
//!
//! # Termination
//!
//! [`XPathLexer::next_token`] returns `None` once the input is exhausted,
//! and keeps returning `None`. Quote-delimited constructs (strings, braced
//! URI literals) that hit the end of the buffer return `None` with their
//! mode still stacked, which is how a consumer observes an unterminated
//! literal. Block constructs (comments, pragmas) instead emit what they
//! have, then a zero-width [`TokenKind::UnexpectedEndOfBlock`], and unwind
//! one level per token until only the bottom mode remains.

use xq_lexer_core::{CharClass, Cursor, EntityRef, classify, is_name_char, scan_entity_ref};
use xq_tokens::{Span, Token, TokenKind};

use crate::keywords;
use crate::state::{State, StateStack};

/// Lexer for the XPath-flavored expression language.
///
/// Produces a lossless stream: every byte of the input is covered by
/// exactly one token, in order. The XQuery lexer reuses the handlers on
/// this type for every mode whose behavior the superset does not change.
pub struct XPathLexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) stack: StateStack,
    /// Keyword table consulted after a name has been scanned.
    pub(crate) keyword: fn(&str) -> Option<TokenKind>,
}

impl<'a> XPathLexer<'a> {
    /// Create a lexer over `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self::with_keywords(text, keywords::xpath_keyword)
    }

    pub(crate) fn with_keywords(
        text: &'a str,
        keyword: fn(&str) -> Option<TokenKind>,
    ) -> Self {
        XPathLexer {
            cursor: Cursor::new(text),
            stack: StateStack::new(State::Default),
            keyword,
        }
    }

    /// The source being lexed; token spans index into it.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.cursor.text()
    }

    /// Number of active modes. One when no construct is open.
    #[must_use]
    pub fn state_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Produce the next token, or `None` at the end of the input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.cursor.flush();
        match self.stack.top() {
            State::Default => self.default_token(),
            State::StringQuote => self.string_token(b'"'),
            State::StringApos => self.string_token(b'\''),
            State::BracedUri => self.braced_uri_token(),
            State::PartialExponent => self.partial_exponent_token(),
            State::Comment => self.comment_token(),
            State::PragmaPre => self.pragma_pre_token(),
            State::PragmaQName => self.pragma_qname_token(),
            State::PragmaContents => self.pragma_contents_token(),
            State::UnexpectedEnd => self.unexpected_end_token(),
            // Remaining modes are pushed only by the XQuery lexer, which
            // dispatches them without going through here.
            _ => None,
        }
    }

    // ─── Token construction ──────────────────────────────────────────────

    /// Finish the token in progress with `kind`.
    #[inline]
    fn token(&self, kind: TokenKind) -> Option<Token> {
        let span = Span::new(self.cursor.start(), self.cursor.pos());
        Some(Token::new(kind, span))
    }

    /// One-character token: advance a code point and emit `kind`.
    #[inline]
    fn single(&mut self, kind: TokenKind) -> Option<Token> {
        self.cursor.advance();
        self.token(kind)
    }

    // ─── Default mode ────────────────────────────────────────────────────

    fn default_token(&mut self) -> Option<Token> {
        let class = classify(self.cursor.peek());
        self.default_class_token(class)
    }

    /// Handle one character class in expression context.
    ///
    /// The XQuery lexer overrides a handful of classes and funnels the
    /// rest back through here.
    #[expect(clippy::too_many_lines, reason = "one arm per character class")]
    pub(crate) fn default_class_token(&mut self, class: CharClass) -> Option<Token> {
        match class {
            CharClass::EndOfBuffer => {
                if self.cursor.is_eof() {
                    None
                } else {
                    // Interior null character.
                    self.single(TokenKind::BadCharacter)
                }
            }
            CharClass::Whitespace => {
                self.cursor
                    .eat_while(|c| classify(c) == CharClass::Whitespace);
                self.token(TokenKind::Whitespace)
            }
            CharClass::Digit => self.number_token(),
            CharClass::Dot => self.dot_token(),
            CharClass::NameStart => self.name_token(),
            CharClass::Quote => {
                self.cursor.advance();
                self.stack.push(State::StringQuote);
                self.token(TokenKind::StringStart)
            }
            CharClass::Apostrophe => {
                self.cursor.advance();
                self.stack.push(State::StringApos);
                self.token(TokenKind::StringStart)
            }
            CharClass::ParenOpen => self.paren_token(),
            CharClass::ParenClose => self.single(TokenKind::ParenClose),
            CharClass::SquareOpen => self.single(TokenKind::SquareOpen),
            CharClass::SquareClose => self.single(TokenKind::SquareClose),
            CharClass::CurlyOpen => self.single(TokenKind::BlockOpen),
            CharClass::CurlyClose => self.single(TokenKind::BlockClose),
            CharClass::Colon => self.colon_token(),
            CharClass::Semicolon => self.single(TokenKind::Semicolon),
            CharClass::Comma => self.single(TokenKind::Comma),
            CharClass::Dash => {
                if self.cursor.matches("->") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::ThinArrow)
                } else {
                    self.single(TokenKind::Minus)
                }
            }
            CharClass::Plus => self.single(TokenKind::Plus),
            CharClass::Star => self.single(TokenKind::Star),
            CharClass::Slash => {
                if self.cursor.matches("//") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::SlashSlash)
                } else {
                    self.single(TokenKind::Slash)
                }
            }
            CharClass::Equals => {
                if self.cursor.matches("=>") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::ArrowOperator)
                } else {
                    self.single(TokenKind::Equal)
                }
            }
            CharClass::Bang => {
                if self.cursor.matches("!=") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::BangEqual)
                } else {
                    self.single(TokenKind::Bang)
                }
            }
            CharClass::LessThan => self.less_than_token(),
            CharClass::GreaterThan => {
                if self.cursor.matches(">>") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::NodeAfter)
                } else if self.cursor.matches(">=") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::GreaterThanEqual)
                } else {
                    self.single(TokenKind::GreaterThan)
                }
            }
            CharClass::Ampersand => self.entity_ref_token(),
            CharClass::Percent => self.single(TokenKind::AnnotationIndicator),
            CharClass::Dollar => self.single(TokenKind::VariableIndicator),
            CharClass::AtSign => self.single(TokenKind::AtSign),
            CharClass::QuestionMark => self.single(TokenKind::QuestionMark),
            CharClass::Pipe => {
                if self.cursor.matches("||") {
                    self.cursor.advance_n(2);
                    self.token(TokenKind::Concat)
                } else {
                    self.single(TokenKind::Union)
                }
            }
            CharClass::Hash => self.single(TokenKind::Hash),
            CharClass::Backtick
            | CharClass::Tilde
            | CharClass::NameChar
            | CharClass::Other => self.single(TokenKind::BadCharacter),
        }
    }

    fn less_than_token(&mut self) -> Option<Token> {
        if self.cursor.matches("<<") {
            self.cursor.advance_n(2);
            self.token(TokenKind::NodeBefore)
        } else if self.cursor.matches("<=") {
            self.cursor.advance_n(2);
            self.token(TokenKind::LessThanEqual)
        } else {
            self.single(TokenKind::LessThan)
        }
    }

    fn colon_token(&mut self) -> Option<Token> {
        if self.cursor.matches("::") {
            self.cursor.advance_n(2);
            self.token(TokenKind::AxisSeparator)
        } else if self.cursor.matches(":=") {
            self.cursor.advance_n(2);
            self.token(TokenKind::Assign)
        } else if self.cursor.matches(":)") {
            // Unbalanced close; the parser reports it.
            self.cursor.advance_n(2);
            self.token(TokenKind::CommentEnd)
        } else {
            self.single(TokenKind::QNameSeparator)
        }
    }

    pub(crate) fn paren_token(&mut self) -> Option<Token> {
        if self.cursor.matches("(:") {
            self.cursor.advance_n(2);
            self.stack.push(State::Comment);
            self.token(TokenKind::CommentStart)
        } else if self.cursor.matches("(#") {
            self.cursor.advance_n(2);
            self.stack.push(State::PragmaPre);
            self.token(TokenKind::PragmaBegin)
        } else {
            self.single(TokenKind::ParenOpen)
        }
    }

    // ─── Names ───────────────────────────────────────────────────────────

    fn name_token(&mut self) -> Option<Token> {
        if self.cursor.matches("Q{") {
            self.cursor.advance_n(2);
            self.stack.push(State::BracedUri);
            return self.token(TokenKind::BracedUriStart);
        }
        let underscore = self.cursor.peek() == '_';
        self.cursor.advance();
        if underscore && self.cursor.peek() == '{' {
            // `_` directly before `{`: the brace is emitted separately.
            return self.token(TokenKind::Lambda);
        }
        self.cursor.eat_while(is_name_char);
        let kind = (self.keyword)(self.cursor.token_text()).unwrap_or(TokenKind::NCName);
        self.token(kind)
    }

    // ─── Numbers ─────────────────────────────────────────────────────────

    fn number_token(&mut self) -> Option<Token> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == '.' {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return self.exponent_token(TokenKind::DecimalLiteral);
        }
        self.exponent_token(TokenKind::IntegerLiteral)
    }

    /// Try to extend the number with an exponent. The marker is
    /// provisional until a digit confirms it; on failure the cursor
    /// backtracks, the shorter token is emitted as `kind`, and a mode is
    /// pushed that re-scans the marker as a partial-exponent token.
    fn exponent_token(&mut self, kind: TokenKind) -> Option<Token> {
        if matches!(self.cursor.peek(), 'e' | 'E') {
            self.cursor.save();
            self.cursor.advance(); // consume 'e'
            if matches!(self.cursor.peek(), '+' | '-') {
                self.cursor.advance();
            }
            if self.cursor.peek().is_ascii_digit() {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                return self.token(TokenKind::DoubleLiteral);
            }
            self.cursor.restore();
            self.stack.push(State::PartialExponent);
        }
        self.token(kind)
    }

    fn partial_exponent_token(&mut self) -> Option<Token> {
        // Only entered on a confirmed `e`/`E` without a following digit.
        self.cursor.advance(); // consume 'e'
        if matches!(self.cursor.peek(), '+' | '-') {
            self.cursor.advance();
        }
        self.stack.pop();
        self.token(TokenKind::PartialDoubleExponent)
    }

    fn dot_token(&mut self) -> Option<Token> {
        if self.cursor.matches("...") {
            self.cursor.advance_n(3);
            return self.token(TokenKind::Ellipsis);
        }
        if self.cursor.matches("..") {
            self.cursor.advance_n(2);
            return self.token(TokenKind::ParentSelector);
        }
        self.cursor.advance(); // consume '.'
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return self.exponent_token(TokenKind::DecimalLiteral);
        }
        if self.cursor.peek() == '{' {
            // `.` directly before `{`: the brace is emitted separately.
            return self.token(TokenKind::ContextFunction);
        }
        self.token(TokenKind::Dot)
    }

    // ─── String and URI literals ─────────────────────────────────────────

    /// Contents mode shared by both quote characters. A doubled delimiter
    /// is an escape; end of buffer returns `None` with the mode still
    /// stacked so the consumer sees the literal as unterminated.
    fn string_token(&mut self, delim: u8) -> Option<Token> {
        if self.cursor.is_eof() {
            return None;
        }
        if self.cursor.peek() == delim as char {
            self.cursor.advance();
            if self.cursor.peek() == delim as char {
                self.cursor.advance();
                return self.token(TokenKind::EscapedCharacter);
            }
            self.stack.pop();
            return self.token(TokenKind::StringEnd);
        }
        self.cursor.eat_until(delim);
        self.token(TokenKind::StringContents)
    }

    fn braced_uri_token(&mut self) -> Option<Token> {
        if self.cursor.is_eof() {
            return None;
        }
        match self.cursor.peek() {
            '}' => {
                self.cursor.advance();
                self.stack.pop();
                self.token(TokenKind::BracedUriEnd)
            }
            // A URI literal cannot nest; an open brace is malformed.
            '{' => self.single(TokenKind::BadCharacter),
            _ => {
                self.cursor.eat_until2(b'}', b'{');
                self.token(TokenKind::StringContents)
            }
        }
    }

    // ─── Comments ────────────────────────────────────────────────────────

    /// Body of a `(: ... :)` comment. Nesting adjusts a counter rather
    /// than emitting tokens, so the whole body is one token; the close
    /// sequence is left for the next call.
    pub(crate) fn comment_token(&mut self) -> Option<Token> {
        if self.cursor.matches(":)") {
            self.cursor.advance_n(2);
            self.stack.pop();
            return self.token(TokenKind::CommentEnd);
        }
        let mut depth = 1u32;
        loop {
            self.cursor.eat_until2(b'(', b':');
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.matches("(:") {
                depth += 1;
                self.cursor.advance_n(2);
            } else if self.cursor.matches(":)") {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                self.cursor.advance_n(2);
            } else {
                self.cursor.advance(); // lone '(' or ':'
            }
        }
        if self.cursor.pos() > self.cursor.start() {
            if self.cursor.is_eof() {
                self.stack.replace(State::UnexpectedEnd);
            }
            return self.token(TokenKind::Comment);
        }
        self.block_eob()
    }

    // ─── Pragmas ─────────────────────────────────────────────────────────

    fn pragma_pre_token(&mut self) -> Option<Token> {
        match classify(self.cursor.peek()) {
            CharClass::EndOfBuffer if self.cursor.is_eof() => self.block_eob(),
            CharClass::Whitespace => {
                self.cursor
                    .eat_while(|c| classify(c) == CharClass::Whitespace);
                self.token(TokenKind::Whitespace)
            }
            CharClass::NameStart => {
                self.stack.replace(State::PragmaQName);
                self.pragma_name_token()
            }
            CharClass::Colon => self.single(TokenKind::QNameSeparator),
            CharClass::Hash if self.cursor.matches("#)") => self.pragma_end_token(),
            _ => self.single(TokenKind::BadCharacter),
        }
    }

    fn pragma_qname_token(&mut self) -> Option<Token> {
        match classify(self.cursor.peek()) {
            CharClass::EndOfBuffer if self.cursor.is_eof() => self.block_eob(),
            CharClass::Whitespace => {
                // First whitespace after the name starts the free-form part.
                self.cursor
                    .eat_while(|c| classify(c) == CharClass::Whitespace);
                self.stack.replace(State::PragmaContents);
                self.token(TokenKind::Whitespace)
            }
            CharClass::NameStart => self.pragma_name_token(),
            CharClass::Colon => self.single(TokenKind::QNameSeparator),
            CharClass::Hash if self.cursor.matches("#)") => self.pragma_end_token(),
            _ => {
                self.stack.replace(State::PragmaContents);
                self.pragma_contents_token()
            }
        }
    }

    /// A name inside a pragma head. The namespace part may be a braced
    /// URI literal, which shares the default-mode handling.
    fn pragma_name_token(&mut self) -> Option<Token> {
        if self.cursor.matches("Q{") {
            self.cursor.advance_n(2);
            self.stack.push(State::BracedUri);
            return self.token(TokenKind::BracedUriStart);
        }
        self.cursor.advance();
        self.cursor.eat_while(is_name_char);
        let kind = (self.keyword)(self.cursor.token_text()).unwrap_or(TokenKind::NCName);
        self.token(kind)
    }

    fn pragma_contents_token(&mut self) -> Option<Token> {
        loop {
            self.cursor.eat_until(b'#');
            if self.cursor.is_eof() || self.cursor.matches("#)") {
                break;
            }
            self.cursor.advance(); // lone '#'
        }
        if self.cursor.pos() > self.cursor.start() {
            if self.cursor.is_eof() {
                self.stack.replace(State::UnexpectedEnd);
            }
            return self.token(TokenKind::PragmaContents);
        }
        if self.cursor.matches("#)") {
            return self.pragma_end_token();
        }
        self.block_eob()
    }

    fn pragma_end_token(&mut self) -> Option<Token> {
        self.cursor.advance_n(2);
        self.stack.pop();
        self.token(TokenKind::PragmaEnd)
    }

    // ─── Entity references ───────────────────────────────────────────────

    /// `&` in expression context, where no reference is legal. The shape
    /// is still scanned so the error token covers the whole reference.
    fn entity_ref_token(&mut self) -> Option<Token> {
        let shape = scan_entity_ref(&mut self.cursor);
        let kind = match shape {
            EntityRef::Character => TokenKind::CharacterReferenceNotInString,
            EntityRef::Predefined => TokenKind::EntityReferenceNotInString,
            EntityRef::Partial => TokenKind::PartialEntityReferenceNotInString,
            EntityRef::Empty => TokenKind::EmptyEntityReferenceNotInString,
        };
        if shape == EntityRef::Partial && self.cursor.is_eof() {
            self.stack.push(State::UnexpectedEnd);
        }
        self.token(kind)
    }

    // ─── End-of-buffer recovery ──────────────────────────────────────────

    /// Ran out of input inside a block construct.
    pub(crate) fn block_eob(&mut self) -> Option<Token> {
        self.stack.replace(State::UnexpectedEnd);
        self.unexpected_end_token()
    }

    /// Emit the zero-width recovery token and unwind one level.
    fn unexpected_end_token(&mut self) -> Option<Token> {
        self.cursor.flush();
        self.stack.pop();
        self.token(TokenKind::UnexpectedEndOfBlock)
    }
}

impl Iterator for XPathLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
