//! Omok (five in a row) board and win detection
//!
//! The crate models an Omok board: a square grid where each intersection is
//! empty or owned by a player, plus the scan that finds five or more
//! consecutive stones of one owner.
//!
//! - Default board is 15x15
//! - Five or more in a row wins (overlines count)
//! - No turn order, captures or forbidden moves; callers decide those
//!
//! # Architecture
//!
//! - [`board`]: Board representation, `Place`, stone owners
//! - [`rules`]: Win detection
//! - [`error`]: Bounds errors
//! - [`config`]: Viewer command-line settings
//! - [`ui`]: Hot-seat desktop viewer built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use omok::{Board, Place, Player};
//!
//! let alice = Player::new("Alice");
//! let mut board = Board::new();
//!
//! for x in 0..5 {
//!     board.place_stone(x, 0, alice.clone())?;
//! }
//!
//! assert!(board.is_won_by(&alice));
//! let row = board.winning_row().unwrap();
//! assert_eq!(row.first(), Some(&Place::new(0, 0)));
//! assert_eq!(row.len(), 5);
//! # Ok::<(), omok::BoardError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Place, Player, Stone, DEFAULT_SIZE};
pub use error::{BoardError, BoardResult};
