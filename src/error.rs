//! Board error types.

use derive_more::{Display, Error};

/// Errors raised by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates fall outside the grid.
    #[display("place ({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Board dimension.
        size: usize,
    },
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
