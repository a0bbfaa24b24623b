//! xqlex token model
//!
//! This crate contains the data structures shared by every layer of the
//! lexer stack:
//! - Spans for source locations
//! - `TokenKind`, the closed catalog of token kinds
//! - `Token`, a kind paired with a span
//! - `Feature`, the language level a keyword belongs to
//! - `TokenSet`, a const-buildable bitset over token kinds
//!
//! # Design Philosophy
//!
//! - **Tokens carry no text**: a token is a kind plus a span; callers slice
//!   the source for the lexeme. Equality and hashing stay trivial.
//! - **Keywords are names**: every keyword kind still answers
//!   [`TokenKind::is_ncname`], so parsers can accept `element` as an element
//!   name without consulting a side table.
//! - **Copy everywhere**: every type here is small and `Copy`; size
//!   regressions are caught by compile-time asserts.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod feature;
mod kind;
mod sets;
mod span;
mod token;

pub use feature::Feature;
pub use kind::TokenKind;
pub use sets::TokenSet;
pub use span::{Span, SpanError};
pub use token::Token;
