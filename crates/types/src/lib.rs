//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! - **Alphabet**: 8 fruit symbols, each dealt twice
//! - **Deck**: 16 tiles laid out on a 4-column grid
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SECOND_MS` | 1000 | Interval of the session clock tick |
//! | `RESOLVE_DELAY_MS` | 800 | Time a revealed pair stays face-up |
//! | `FRAME_MS` | 50 | Front-end poll/render interval |
//!
//! # Examples
//!
//! ```
//! use fruit_match_types::{Symbol, TileFace, GRID_COLUMNS};
//!
//! let symbol = Symbol::from_str("kiwi").unwrap();
//! assert_eq!(symbol, Symbol::Kiwi);
//! assert_eq!(symbol.glyph(), "🥝");
//!
//! assert!(!TileFace::Matched.is_interactive());
//! assert_eq!(GRID_COLUMNS, 4);
//! ```

/// Columns in the tile grid
pub const GRID_COLUMNS: usize = 4;

/// Clock tick interval in milliseconds (one elapsed second per tick)
pub const SECOND_MS: u32 = 1000;

/// Delay before a completed pair is flipped back / locked in (800ms)
pub const RESOLVE_DELAY_MS: u32 = 800;

/// Front-end frame interval in milliseconds
pub const FRAME_MS: u32 = 50;

/// Points awarded per matched pair
pub const POINTS_PER_MATCH: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(SECOND_MS, 1000);
        assert_eq!(RESOLVE_DELAY_MS, 800);
        assert_eq!(POINTS_PER_MATCH, 10);
        assert!(FRAME_MS < RESOLVE_DELAY_MS);
    }

    #[test]
    fn symbol_names_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_str(symbol.as_str()), Some(symbol));
        }
        assert_eq!(Symbol::from_str("durian"), None);
    }

    #[test]
    fn tile_faces() {
        assert!(!TileFace::Hidden.shows_symbol());
        assert!(TileFace::Hidden.is_interactive());
        assert!(TileFace::Revealed.shows_symbol());
        assert!(TileFace::Revealed.is_interactive());
        assert!(TileFace::Matched.shows_symbol());
        assert!(!TileFace::Matched.is_interactive());
    }

    #[test]
    fn glyphs_are_distinct() {
        for (i, a) in Symbol::ALL.iter().enumerate() {
            for b in &Symbol::ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }
}

/// The fruit symbols printed on tiles
///
/// Identity of a tile is its position in the deck; the symbol only decides
/// whether two revealed tiles match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Apple,
    Banana,
    Strawberry,
    Cherries,
    Pineapple,
    Watermelon,
    Grapes,
    Kiwi,
}

impl Symbol {
    /// Every symbol in dealing order
    pub const ALL: [Symbol; 8] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Strawberry,
        Symbol::Cherries,
        Symbol::Pineapple,
        Symbol::Watermelon,
        Symbol::Grapes,
        Symbol::Kiwi,
    ];

    /// Emoji drawn on the tile face
    ///
    /// All glyphs are a single scalar value that terminals render two columns wide.
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Apple => "🍎",
            Symbol::Banana => "🍌",
            Symbol::Strawberry => "🍓",
            Symbol::Cherries => "🍒",
            Symbol::Pineapple => "🍍",
            Symbol::Watermelon => "🍉",
            Symbol::Grapes => "🍇",
            Symbol::Kiwi => "🥝",
        }
    }

    /// The glyph as a `char`, for framebuffer cells.
    pub fn glyph_char(&self) -> char {
        match self {
            Symbol::Apple => '🍎',
            Symbol::Banana => '🍌',
            Symbol::Strawberry => '🍓',
            Symbol::Cherries => '🍒',
            Symbol::Pineapple => '🍍',
            Symbol::Watermelon => '🍉',
            Symbol::Grapes => '🍇',
            Symbol::Kiwi => '🥝',
        }
    }

    /// Parse symbol from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use fruit_match_types::Symbol;
    ///
    /// assert_eq!(Symbol::from_str("Apple"), Some(Symbol::Apple));
    /// assert_eq!(Symbol::from_str("mango"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apple" => Some(Symbol::Apple),
            "banana" => Some(Symbol::Banana),
            "strawberry" => Some(Symbol::Strawberry),
            "cherries" => Some(Symbol::Cherries),
            "pineapple" => Some(Symbol::Pineapple),
            "watermelon" => Some(Symbol::Watermelon),
            "grapes" => Some(Symbol::Grapes),
            "kiwi" => Some(Symbol::Kiwi),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Apple => "apple",
            Symbol::Banana => "banana",
            Symbol::Strawberry => "strawberry",
            Symbol::Cherries => "cherries",
            Symbol::Pineapple => "pineapple",
            Symbol::Watermelon => "watermelon",
            Symbol::Grapes => "grapes",
            Symbol::Kiwi => "kiwi",
        }
    }
}

/// Game actions forwarded from the presentation layer into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the tile at the given deck index
    Activate(usize),
    /// Discard the current session and deal a new one
    Restart,
}

/// Visible state of a single tile
///
/// - **Hidden**: face-down, shows a placeholder
/// - **Revealed**: face-up while part of the unresolved selection
/// - **Matched**: permanently face-up and no longer interactive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFace {
    Hidden,
    Revealed,
    Matched,
}

impl TileFace {
    /// Whether the symbol is visible.
    pub fn shows_symbol(&self) -> bool {
        !matches!(self, TileFace::Hidden)
    }

    /// Whether the tile still accepts activations.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, TileFace::Matched)
    }
}
