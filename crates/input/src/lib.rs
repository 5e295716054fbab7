//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into board commands and keeps the
//! keyboard cursor. Turning a command into a [`crate::types::GameAction`] is
//! left to the front-end, which knows the cursor position and the layout.

pub mod cursor;
pub mod map;

pub use fruit_match_types as types;

pub use cursor::{Cursor, Direction};
pub use map::{click_position, map_key, should_quit, InputCommand};
