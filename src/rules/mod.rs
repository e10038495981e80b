//! Game rules for Omok
//!
//! Only the win condition lives here: five or more stones of one owner
//! in a horizontal, vertical or diagonal line. Overlines count.

pub mod win;

// Re-exports for convenient access
pub use win::{find_line_at, find_winning_row, is_won_by, scan_run, DIRECTIONS, WIN_LENGTH};
