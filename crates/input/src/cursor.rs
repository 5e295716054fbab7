//! Board cursor for keyboard play.
//!
//! The cursor moves over a row-major grid and stops at the edges. A last row
//! with fewer tiles than columns is handled: moving down into a gap does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    columns: usize,
    len: usize,
}

impl Cursor {
    /// Cursor over `len` tiles laid out in `columns` columns, starting at 0.
    pub fn new(len: usize, columns: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.index / self.columns
    }

    pub fn column(&self) -> usize {
        self.index % self.columns
    }

    /// Place the cursor on `index` (ignored when out of range).
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Move one step; returns whether the cursor moved.
    pub fn move_by(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Left if self.column() > 0 => Some(self.index - 1),
            Direction::Right if self.column() + 1 < self.columns => Some(self.index + 1),
            Direction::Up if self.row() > 0 => Some(self.index - self.columns),
            Direction::Down => Some(self.index + self.columns),
            _ => None,
        };

        match next {
            Some(i) if i < self.len => {
                self.index = i;
                true
            }
            _ => false,
        }
    }

    /// Resize for a new deck, keeping the position when still valid.
    pub fn reset_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}
