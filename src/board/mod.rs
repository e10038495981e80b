//! Board representation for Omok

pub mod board;
pub mod player;


use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;
pub use player::{Player, Stone};

/// Default board size (15x15)
pub const DEFAULT_SIZE: usize = 15;

/// Contents of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell<P> {
    Empty,
    Owned(P),
}

impl<P> Cell<P> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the cell, if any
    #[inline]
    pub fn owner(&self) -> Option<&P> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

impl<P> Default for Cell<P> {
    fn default() -> Self {
        Cell::Empty
    }
}

/// An intersection on the board.
///
/// `x` is the 0-based column and `y` the 0-based row; `(0, 0)` is the
/// top-left corner and `(n-1, n-1)` the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Place {
    pub x: usize,
    pub y: usize,
}

impl Place {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step from this place by `(dx, dy)`, staying inside a `size` board
    #[inline]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Place> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Place { x, y })
    }
}

// Scan order: column first, then row.
impl PartialOrd for Place {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Place {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.x, self.y).cmp(&(other.x, other.y))
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Place {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
