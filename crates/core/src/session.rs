//! Session module - the complete state of one play-through
//!
//! A session owns the dealt deck, the unresolved selection, and the counters
//! shown to the player. It changes only through three transitions:
//!
//! - [`SessionState::activate`]: reveal a tile (pairs are scored immediately)
//! - [`SessionState::tick`]: advance the clock by one second while running
//! - [`SessionState::resolve_selection`]: hide the revealed pair again
//!
//! Every transition completes before returning; observers never see a
//! half-applied change. Timing is not handled here: the caller decides when a
//! second has passed and when the resolve delay is over.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::deck::{deal, Alphabet, Tile};
use crate::rng::DeckRng;
use crate::snapshot::{SessionSnapshot, TileSnapshot};
use crate::stats::accuracy;
use crate::types::{TileFace, POINTS_PER_MATCH};

/// Handle for the deferred clear of one revealed pair.
///
/// Tokens are scoped to a session and a pair, so applying one after a restart
/// (or twice) has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClearToken {
    session_id: u64,
    pair_seq: u32,
}

impl ClearToken {
    pub fn session_id(&self) -> u64 {
        self.session_id
    }
}

/// Why an activation left the state unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    OutOfRange,
    Complete,
    PairPending,
    AlreadyMatched,
    AlreadySelected,
}

/// Outcome of [`SessionState::activate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Ignored(IgnoreReason),
    FirstReveal {
        index: usize,
    },
    /// Second tile revealed. The caller must apply `token` after the resolve delay.
    PairRevealed {
        pair: [usize; 2],
        matched: bool,
        complete: bool,
        token: ClearToken,
    },
}

impl Activation {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Activation::Ignored(_))
    }

    pub fn token(&self) -> Option<ClearToken> {
        match self {
            Activation::PairRevealed { token, .. } => Some(*token),
            _ => None,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    alphabet: Alphabet,
    /// Monotonic id (increments on restart); scopes clear tokens.
    session_id: u64,
    seed: u64,
    tiles: Vec<Tile>,
    selection: ArrayVec<usize, 2>,
    /// Number of pairs revealed so far in this session.
    pair_seq: u32,
    score: u32,
    /// Single-tile activations; the move count is half of this.
    activations: u32,
    elapsed_seconds: u32,
    running: bool,
    complete: bool,
}

impl SessionState {
    /// Deal a new session from `alphabet` using `seed`.
    pub fn new(alphabet: Alphabet, seed: u64) -> Self {
        Self::with_id(alphabet, seed, 0)
    }

    fn with_id(alphabet: Alphabet, seed: u64, session_id: u64) -> Self {
        let mut rng = DeckRng::new(seed);
        let tiles = deal(&alphabet, &mut rng);
        info!(
            "session {} dealt {} tiles (seed {})",
            session_id,
            tiles.len(),
            seed
        );

        Self {
            alphabet,
            session_id,
            seed,
            tiles,
            selection: ArrayVec::new(),
            pair_seq: 0,
            score: 0,
            activations: 0,
            elapsed_seconds: 0,
            running: true,
            complete: false,
        }
    }

    /// Build a session over a fixed deck layout.
    ///
    /// Matched flags are kept as given; a deck that is already fully matched
    /// starts out complete.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let mut symbols = Vec::new();
        for tile in &tiles {
            if !symbols.contains(&tile.symbol) {
                symbols.push(tile.symbol);
            }
        }
        let alphabet = Alphabet::new(symbols).unwrap_or_default();
        let complete = !tiles.is_empty() && tiles.iter().all(|t| t.matched);

        Self {
            alphabet,
            session_id: 0,
            seed: 0,
            tiles,
            selection: ArrayVec::new(),
            pair_seq: 0,
            score: 0,
            activations: 0,
            elapsed_seconds: 0,
            running: !complete,
            complete,
        }
    }

    /// Discard this session and deal a new one over the same alphabet.
    pub fn restart(&mut self, seed: u64) {
        let alphabet = self.alphabet.clone();
        *self = Self::with_id(alphabet, seed, self.session_id.wrapping_add(1));
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fractional move counter (half a move per activation).
    pub fn move_count(&self) -> f64 {
        f64::from(self.activations) / 2.0
    }

    /// Whole moves, as displayed.
    pub fn moves(&self) -> u32 {
        self.activations / 2
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn matched_pairs(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn accuracy(&self) -> u32 {
        accuracy(self.score, self.move_count())
    }

    /// Visible state of the tile at `index` (`None` when out of range).
    pub fn tile_face(&self, index: usize) -> Option<TileFace> {
        let tile = self.tiles.get(index)?;
        Some(if tile.matched {
            TileFace::Matched
        } else if self.selection.contains(&index) {
            TileFace::Revealed
        } else {
            TileFace::Hidden
        })
    }

    fn check_activation(&self, index: usize) -> Option<IgnoreReason> {
        let Some(tile) = self.tiles.get(index) else {
            return Some(IgnoreReason::OutOfRange);
        };
        if self.complete {
            return Some(IgnoreReason::Complete);
        }
        if self.selection.is_full() {
            return Some(IgnoreReason::PairPending);
        }
        if tile.matched {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if self.selection.contains(&index) {
            return Some(IgnoreReason::AlreadySelected);
        }
        None
    }

    /// Advance the session clock by one second while running.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_seconds += 1;
        trace!("session {} clock {}s", self.session_id, self.elapsed_seconds);
        true
    }

    /// Reveal the tile at `index`.
    pub fn activate(&mut self, index: usize) -> Activation {
        if let Some(reason) = self.check_activation(index) {
            debug!("session {} ignored tile {}: {:?}", self.session_id, index, reason);
            return Activation::Ignored(reason);
        }

        self.selection.push(index);
        self.activations += 1;

        if let [a, b] = self.selection[..] {
            let matched = self.tiles[a].symbol == self.tiles[b].symbol;
            if matched {
                self.tiles[a].matched = true;
                self.tiles[b].matched = true;
                self.score += POINTS_PER_MATCH;
            }
            self.pair_seq += 1;
            debug!(
                "session {} revealed pair [{}, {}] matched={}",
                self.session_id, a, b, matched
            );

            self.check_complete();
            Activation::PairRevealed {
                pair: [a, b],
                matched,
                complete: self.complete,
                token: ClearToken {
                    session_id: self.session_id,
                    pair_seq: self.pair_seq,
                },
            }
        } else {
            debug!("session {} revealed tile {}", self.session_id, index);
            self.check_complete();
            Activation::FirstReveal { index }
        }
    }

    /// Hide the revealed pair that `token` was issued for.
    ///
    /// Returns `false` (and changes nothing) for tokens from another session or
    /// for a pair that was already resolved.
    pub fn resolve_selection(&mut self, token: ClearToken) -> bool {
        if token.session_id != self.session_id
            || token.pair_seq != self.pair_seq
            || self.selection.is_empty()
        {
            return false;
        }
        self.selection.clear();
        true
    }

    fn check_complete(&mut self) {
        if !self.complete && self.tiles.iter().all(|t| t.matched) {
            self.running = false;
            self.complete = true;
            info!(
                "session {} complete: score {} moves {} time {}s accuracy {}%",
                self.session_id,
                self.score,
                self.moves(),
                self.elapsed_seconds,
                self.accuracy()
            );
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its tile buffer.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.tiles.clear();
        out.tiles.extend(self.tiles.iter().enumerate().map(|(i, tile)| TileSnapshot {
            symbol: tile.symbol,
            face: self.tile_face(i).unwrap_or(TileFace::Hidden),
        }));
        out.session_id = self.session_id;
        out.score = self.score;
        out.moves = self.moves();
        out.move_count = self.move_count();
        out.accuracy = self.accuracy();
        out.elapsed_seconds = self.elapsed_seconds;
        out.running = self.running;
        out.complete = self.complete;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Alphabet::fruits(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    fn tiles(symbols: &[Symbol]) -> Vec<Tile> {
        symbols.iter().map(|&s| Tile::new(s)).collect()
    }

    #[test]
    fn test_new_session_defaults() {
        let state = SessionState::new(Alphabet::fruits(), 42);
        assert_eq!(state.len(), 16);
        assert_eq!(state.score(), 0);
        assert_eq!(state.move_count(), 0.0);
        assert!(state.selection().is_empty());
        assert!(state.running());
        assert!(!state.complete());
        assert_eq!(state.elapsed_seconds(), 0);
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = SessionState::new(Alphabet::fruits(), 5);
        let b = SessionState::new(Alphabet::fruits(), 5);
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_first_reveal_counts_half_move() {
        let mut state = SessionState::from_tiles(tiles(&[
            Symbol::Apple,
            Symbol::Kiwi,
            Symbol::Apple,
            Symbol::Kiwi,
        ]));
        assert_eq!(state.activate(1), Activation::FirstReveal { index: 1 });
        assert_eq!(state.move_count(), 0.5);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.tile_face(1), Some(TileFace::Revealed));
        assert_eq!(state.tile_face(0), Some(TileFace::Hidden));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut state = SessionState::default();
        let before = state.clone();
        assert_eq!(
            state.activate(16),
            Activation::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_token_applies_once() {
        let mut state = SessionState::from_tiles(tiles(&[
            Symbol::Apple,
            Symbol::Kiwi,
            Symbol::Apple,
            Symbol::Kiwi,
        ]));
        state.activate(0);
        let token = state.activate(1).token().unwrap();

        assert!(state.resolve_selection(token));
        assert!(!state.resolve_selection(token));
    }

    #[test]
    fn test_token_from_previous_pair_is_inert() {
        let mut state = SessionState::from_tiles(tiles(&[
            Symbol::Apple,
            Symbol::Kiwi,
            Symbol::Apple,
            Symbol::Kiwi,
        ]));
        state.activate(0);
        let old = state.activate(1).token().unwrap();
        assert!(state.resolve_selection(old));

        state.activate(0);
        state.activate(3);
        assert!(!state.resolve_selection(old));
        assert_eq!(state.selection(), &[0, 3]);
    }

    #[test]
    fn test_restart_bumps_session_id() {
        let mut state = SessionState::new(Alphabet::fruits(), 1);
        state.activate(0);
        state.tick();
        state.restart(2);

        assert_eq!(state.session_id(), 1);
        assert_eq!(state.seed(), 2);
        assert_eq!(state.elapsed_seconds(), 0);
        assert_eq!(state.move_count(), 0.0);
        assert!(state.selection().is_empty());
        assert_eq!(state.alphabet(), &Alphabet::fruits());
    }

    #[test]
    fn test_from_tiles_all_matched_is_complete() {
        let mut deck = tiles(&[Symbol::Apple, Symbol::Apple]);
        for t in &mut deck {
            t.matched = true;
        }
        let mut state = SessionState::from_tiles(deck);
        assert!(state.complete());
        assert!(!state.running());
        assert!(!state.tick());
    }

    #[test]
    fn test_snapshot_reflects_faces() {
        let mut state = SessionState::from_tiles(tiles(&[
            Symbol::Apple,
            Symbol::Apple,
            Symbol::Kiwi,
            Symbol::Kiwi,
        ]));
        state.activate(0);
        let token = state.activate(1).token().unwrap();
        state.resolve_selection(token);
        state.activate(2);

        let snap = state.snapshot();
        assert_eq!(snap.tiles[0].face, TileFace::Matched);
        assert_eq!(snap.tiles[1].face, TileFace::Matched);
        assert_eq!(snap.tiles[2].face, TileFace::Revealed);
        assert_eq!(snap.tiles[3].face, TileFace::Hidden);
        assert_eq!(snap.score, 10);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.move_count, 1.5);
        assert_eq!(snap.accuracy, 67);
    }
}
