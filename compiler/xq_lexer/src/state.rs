//! Lexer modes and the mode stack.
//!
//! Every construct that changes how characters are interpreted is a
//! [`State`]. The lexers never recurse; nesting is represented by pushing
//! onto a [`StateStack`] and popping when the construct closes. The stack
//! is created with a single [`State::Default`] entry and the depth returns
//! to one when the input is balanced.

/// A scanning mode.
///
/// The first group is understood by both lexers; the groups below
/// `ElemContent` are only ever pushed by the XQuery lexer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Expression context: operators, names, numbers.
    Default,
    /// Inside a `"`-delimited string literal.
    StringQuote,
    /// Inside a `'`-delimited string literal.
    StringApos,
    /// Inside `Q{...}`.
    BracedUri,
    /// After a number whose `e`/`E` was not followed by a digit.
    PartialExponent,
    /// Inside `(: ... :)`, nesting tracked while scanning the body.
    Comment,
    /// Inside `(# ... #)`, before the pragma name.
    PragmaPre,
    /// Inside `(# ... #)`, scanning the pragma name.
    PragmaQName,
    /// Inside `(# ... #)`, free-form contents up to `#)`.
    PragmaContents,
    /// A block construct ran out of input; emits one zero-width token.
    UnexpectedEnd,

    /// Between an open and close tag, scanning literal element content.
    ElemContent,
    /// After `<`, scanning the tag name.
    StartTag,
    /// After the tag name and whitespace, scanning attributes.
    AttrList,
    /// After `</`, scanning the closing tag name.
    ClosingTag,
    /// Inside a `"`-delimited attribute value.
    AttrValueQuote,
    /// Inside a `'`-delimited attribute value.
    AttrValueApos,
    /// Inside `<!-- ... -->`.
    XmlComment,
    /// Inside `<![CDATA[ ... ]]>`.
    CData,
    /// After `<?`, scanning the processing-instruction target.
    PiTarget,
    /// Processing-instruction contents up to `?>`.
    PiContents,
    /// Inside `` `[ ... ]` ``, scanning literal contents.
    StringConstructor,
    /// Inside a `` `{ ... }` `` interpolation hole.
    StringInterpolation,
}

/// The stack of active scanning modes.
///
/// Never empty while lexing is in progress: [`StateStack::pop`] refuses to
/// remove the last entry, so a stray closer at the top level cannot strand
/// the lexer without a mode.
#[derive(Debug, Clone)]
pub struct StateStack {
    states: Vec<State>,
}

impl StateStack {
    /// A stack holding a single `start` entry.
    pub fn new(start: State) -> Self {
        StateStack { states: vec![start] }
    }

    /// The active mode.
    #[inline]
    pub fn top(&self) -> State {
        // Invariant: `states` holds at least one entry.
        self.states.last().copied().unwrap_or(State::Default)
    }

    /// Enter a nested mode.
    #[inline]
    pub fn push(&mut self, state: State) {
        self.states.push(state);
    }

    /// Leave the active mode. Keeps the bottom entry in place; returns
    /// whether anything was removed.
    #[inline]
    pub fn pop(&mut self) -> bool {
        if self.states.len() > 1 {
            self.states.pop();
            true
        } else {
            false
        }
    }

    /// Swap the active mode without changing the depth.
    #[inline]
    pub fn replace(&mut self, state: State) {
        if let Some(top) = self.states.last_mut() {
            *top = state;
        }
    }

    /// Number of active modes, including the bottom entry.
    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{State, StateStack};

    #[test]
    fn starts_with_one_entry() {
        let stack = StateStack::new(State::Default);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), State::Default);
    }

    #[test]
    fn push_and_pop_restore_the_previous_mode() {
        let mut stack = StateStack::new(State::Default);
        stack.push(State::Comment);
        stack.push(State::Comment);
        assert_eq!(stack.depth(), 3);
        assert!(stack.pop());
        assert_eq!(stack.top(), State::Comment);
        assert!(stack.pop());
        assert_eq!(stack.top(), State::Default);
    }

    #[test]
    fn pop_never_removes_the_bottom_entry() {
        let mut stack = StateStack::new(State::Default);
        assert!(!stack.pop());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), State::Default);
    }

    #[test]
    fn replace_swaps_without_changing_depth() {
        let mut stack = StateStack::new(State::Default);
        stack.push(State::StartTag);
        stack.replace(State::ElemContent);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), State::ElemContent);
    }
}
