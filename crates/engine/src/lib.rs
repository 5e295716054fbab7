//! Engine module - turns wall-clock time into session transitions.
//!
//! `fruit-match-core` is deliberately timeless. This crate owns the two timers
//! a session needs (the one-second clock and the deferred pair clear), the seed
//! sequence used across restarts, and the environment configuration.
//!
//! ```
//! use fruit_match_engine::{Game, GameConfig};
//!
//! let mut game = Game::new(&GameConfig::default().with_seed(7));
//! game.advance(3000);
//! assert_eq!(game.session().elapsed_seconds(), 3);
//! ```

pub mod config;
pub mod game;

pub use fruit_match_core as core;
pub use fruit_match_types as types;

pub use config::GameConfig;
pub use game::{Advance, Game, PendingClear};
