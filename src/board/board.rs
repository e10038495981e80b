//! Board structure with owner tracking

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::{Cell, Place, Stone, DEFAULT_SIZE};
use crate::error::{BoardError, BoardResult};
use crate::rules;

/// Square Omok board.
///
/// Cells are stored row by row (`y * size + x`). Every coordinate-taking
/// method checks bounds and returns [`BoardError::OutOfBounds`] instead of
/// panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board<P> {
    size: usize,
    cells: Vec<Cell<P>>,
}

impl<P> Board<P> {
    /// Create a board of the default size (15x15)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// Create an empty `size` x `size` board
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat_with(|| Cell::Empty)
                .take(size * size)
                .collect(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> BoardResult<usize> {
        if x < self.size && y < self.size {
            Ok(y * self.size + x)
        } else {
            Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Cell at a place, `None` when the place is off the board
    #[inline]
    pub fn get(&self, place: Place) -> Option<&Cell<P>> {
        let idx = self.index(place.x, place.y).ok()?;
        self.cells.get(idx)
    }

    /// Cell at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> BoardResult<&Cell<P>> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Remove every stone, returning the board to its initial state
    pub fn clear(&mut self) {
        debug!(size = self.size, stones = self.stone_count(), "clearing board");
        self.cells.fill_with(|| Cell::Empty);
    }

    /// Whether every intersection holds a stone
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Check if `(x, y)` is empty
    #[inline]
    pub fn is_empty(&self, x: usize, y: usize) -> BoardResult<bool> {
        Ok(self.cell(x, y)?.is_empty())
    }

    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize) -> BoardResult<bool> {
        self.is_empty(x, y).map(|empty| !empty)
    }

    /// Owner of `(x, y)`, or `None` if no stone is there
    #[inline]
    pub fn player_at(&self, x: usize, y: usize) -> BoardResult<Option<&P>> {
        Ok(self.cell(x, y)?.owner())
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Every place on the board in scan order (`x` outer, `y` inner)
    pub fn places(&self) -> impl Iterator<Item = Place> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Place::new(x, y)))
    }
}

impl<P: PartialEq> Board<P> {
    /// Place a stone for `player` at `(x, y)`.
    ///
    /// An occupied intersection keeps its owner; the call is then a no-op.
    pub fn place_stone(&mut self, x: usize, y: usize, player: P) -> BoardResult<()> {
        let idx = self.index(x, y)?;
        let cell = &mut self.cells[idx];
        if cell.is_empty() {
            trace!(x, y, "stone placed");
            *cell = Cell::Owned(player);
        } else {
            debug!(x, y, "intersection already occupied, stone ignored");
        }
        Ok(())
    }

    /// Check if `(x, y)` holds a stone owned by `player`
    #[inline]
    pub fn is_occupied_by(&self, x: usize, y: usize, player: &P) -> BoardResult<bool> {
        Ok(self.cell(x, y)?.owner() == Some(player))
    }

    /// Whether `player` has five or more stones in a row anywhere
    pub fn is_won_by(&self, player: &P) -> bool {
        rules::is_won_by(self, player)
    }

    /// The first winning line in scan order, with every stone of the run
    pub fn winning_row(&self) -> Option<Vec<Place>> {
        rules::find_winning_row(self)
    }
}

impl<P> Default for Board<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board<Stone> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row
                .iter()
                .map(|cell| cell.owner().map_or('.', |stone| stone.symbol()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
