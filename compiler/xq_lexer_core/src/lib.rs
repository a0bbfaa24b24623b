//! xqlex lexer core
//!
//! The character-level foundation the state machines are built on:
//!
//! - [`Cursor`], a seekable code-point reader with token-boundary tracking
//!   and a single save slot for speculative lookahead
//! - [`EntityCursor`], a cursor decorator that substitutes the five
//!   predefined XML entities when peeking
//! - [`CharClass`] and [`classify`], the pure character classifier driving
//!   mode dispatch
//! - [`scan_entity_ref`], the shared recognizer for `&...;` shapes
//!
//! Nothing here knows about token kinds or lexer states; this crate deals
//! only in code points and byte offsets.

mod classify;
mod cursor;
mod entity;

pub use classify::{CharClass, classify, is_name_char, is_name_start};
pub use cursor::{Cursor, EOF_CHAR};
pub use entity::{EntityCursor, EntityRef, scan_entity_ref};
