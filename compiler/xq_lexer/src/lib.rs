//! Hand-written lexers for the expression language and its superset.
//!
//! Three machines share one toolkit from `xq_lexer_core`:
//!
//! - [`XPathLexer`] covers the expression language: names and keywords,
//!   numeric and string literals, comments, pragmas, braced URI
//!   literals.
//! - [`XQueryLexer`] wraps the base machine and adds the superset:
//!   literal XML with embedded expression blocks, string constructors
//!   with interpolation holes, entity and character references, and
//!   documentation comments.
//! - [`XQDocLexer`] tokenizes a documentation comment body on behalf of
//!   the host lexer.
//!
//! All three are pull lexers: each call produces one token, token spans
//! tile the input exactly, and malformed input comes back as error
//! tokens rather than failures. Nested constructs are tracked on an
//! explicit mode stack, so an unterminated construct surfaces as a
//! truncated token followed by one end-of-block marker per open level.

mod keywords;
mod state;
mod xpath;
mod xqdoc;
mod xquery;

pub use keywords::{xpath_keyword, xquery_keyword};
pub use xpath::XPathLexer;
pub use xqdoc::XQDocLexer;
pub use xquery::XQueryLexer;
