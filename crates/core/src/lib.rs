//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory-matching game: dealing,
//! selection, match detection, scoring, and completion. It has **no
//! dependencies** on terminal, input, or timers, making it:
//!
//! - **Deterministic**: Same seed deals the same deck
//! - **Testable**: Every rule is a synchronous transition on [`SessionState`]
//! - **Portable**: Usable from a terminal front-end, a test, or a benchmark
//!
//! # Module Structure
//!
//! - [`deck`]: alphabet validation, tiles, and dealing
//! - [`rng`]: seeded uniform shuffling
//! - [`session`]: session state and its transitions
//! - [`snapshot`]: plain-data view of a session for rendering
//! - [`stats`]: accuracy and time formatting
//!
//! # Game Rules
//!
//! - Every symbol of the alphabet is dealt twice and shuffled
//! - At most two tiles are face-up and unresolved at once
//! - A matching pair scores 10 points and stays face-up
//! - Each activation counts half a move; a pair is one move
//! - The session completes when every tile is matched
//!
//! # Example
//!
//! ```
//! use fruit_match_core::{Activation, Alphabet, SessionState};
//!
//! let mut session = SessionState::new(Alphabet::fruits(), 12345);
//! assert_eq!(session.len(), 16);
//!
//! session.activate(0);
//! let outcome = session.activate(1);
//! if let Activation::PairRevealed { token, .. } = outcome {
//!     // The front-end applies the token once the pair has been on screen long enough.
//!     session.resolve_selection(token);
//! }
//! assert!(session.selection().is_empty());
//! assert_eq!(session.moves(), 1);
//! ```
//!
//! # Timing
//!
//! The session has no clock of its own. Call [`SessionState::tick`] once per
//! elapsed second and [`SessionState::resolve_selection`] 800ms after a pair
//! is revealed; `fruit-match-engine` does both.

pub mod deck;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stats;

pub use fruit_match_types as types;

// Re-export commonly used types for convenience
pub use deck::{deal, Alphabet, AlphabetError, Tile};
pub use rng::DeckRng;
pub use session::{Activation, ClearToken, IgnoreReason, SessionState};
pub use snapshot::{SessionSnapshot, TileSnapshot};
pub use stats::{accuracy, format_time, write_time};
