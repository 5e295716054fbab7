use crate::stats::{format_time, write_time};
use crate::types::{Symbol, TileFace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub symbol: Symbol,
    pub face: TileFace,
}

/// Plain copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub session_id: u64,
    pub tiles: Vec<TileSnapshot>,
    pub score: u32,
    /// Floored move count.
    pub moves: u32,
    pub move_count: f64,
    pub accuracy: u32,
    pub elapsed_seconds: u32,
    pub running: bool,
    pub complete: bool,
}

impl SessionSnapshot {
    pub fn time(&self) -> String {
        format_time(self.elapsed_seconds)
    }

    pub fn write_time(&self, out: &mut String) {
        write_time(out, self.elapsed_seconds);
    }

    pub fn face(&self, index: usize) -> Option<TileFace> {
        self.tiles.get(index).map(|t| t.face)
    }

    /// Summary overlay is shown.
    pub fn show_summary(&self) -> bool {
        self.complete
    }
}
