//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and renders into a simple framebuffer
//! that is flushed to the terminal by [`TerminalRenderer`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw from a plain [`core::SessionSnapshot`], never from live state
//! - Share one layout between drawing and mouse hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fruit_match_core as core;
pub use fruit_match_types as types;

pub use fb::{char_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HitTarget, Viewport};
pub use renderer::TerminalRenderer;
