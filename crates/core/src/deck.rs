//! Deck module - alphabet validation and dealing
//!
//! A deck holds every symbol of its alphabet exactly twice, in shuffled order.
//! Tiles are identified by position, never by symbol.

use thiserror::Error;

use crate::rng::DeckRng;
use crate::types::Symbol;

/// Why a list of symbols cannot be used as an alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one symbol")]
    Empty,
    #[error("symbol `{}` appears more than once", .0.as_str())]
    Duplicate(Symbol),
}

/// Non-empty list of distinct symbols to deal from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, AlphabetError> {
        let mut out: Vec<Symbol> = Vec::new();
        for symbol in symbols {
            if out.contains(&symbol) {
                return Err(AlphabetError::Duplicate(symbol));
            }
            out.push(symbol);
        }
        if out.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { symbols: out })
    }

    /// The full eight-fruit alphabet.
    pub fn fruits() -> Self {
        Self {
            symbols: Symbol::ALL.to_vec(),
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of tiles a deck dealt from this alphabet holds.
    pub fn deck_len(&self) -> usize {
        self.symbols.len() * 2
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::fruits()
    }
}

/// One deck position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub symbol: Symbol,
    pub matched: bool,
}

impl Tile {
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            matched: false,
        }
    }
}

/// Deal a fresh deck: every symbol twice, uniformly shuffled.
pub fn deal(alphabet: &Alphabet, rng: &mut DeckRng) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = alphabet
        .symbols()
        .iter()
        .flat_map(|&symbol| [Tile::new(symbol), Tile::new(symbol)])
        .collect();
    rng.shuffle(&mut tiles);
    tiles
}
