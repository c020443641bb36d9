//! Cursor composition: embedding child components in a parent state tree.
//!
//! A cursor is a get/set/tag triple. Going down, `get` selects the child's
//! slice and `tag` wraps child actions. Going up, `set` writes the child's new
//! state back and child effects are re-tagged. The parent never hands the
//! child a reference to itself, so state stays a tree.

mod compose;
mod lens;

pub use compose::{try_update_keyed, update_cursor, update_keyed};
pub use lens::{Cursor, KeyedCursor, KeyedLens, Lens};
