//! Win condition checking for Omok
//!
//! A line is found from its anchor by walking forward only, so each line
//! is reported by its first stone in scan order (`x` outer, `y` inner).

use tracing::{debug, instrument};

use crate::board::{Board, Cell, Place};

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions), as `(dx, dy)`
pub const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

/// Collect the run of `anchor`'s owner starting at `anchor` and stepping by `dir`.
///
/// Empty when the anchor itself is empty or off the board.
pub fn scan_run<P: PartialEq>(board: &Board<P>, anchor: Place, dir: (isize, isize)) -> Vec<Place> {
    let owner = match board.get(anchor) {
        Some(Cell::Owned(owner)) => owner,
        _ => return Vec::new(),
    };

    let mut run = vec![anchor];
    let mut current = anchor;
    while let Some(next) = current.offset(dir.0, dir.1, board.size()) {
        match board.get(next) {
            Some(Cell::Owned(p)) if p == owner => {
                run.push(next);
                current = next;
            }
            _ => break,
        }
    }
    run
}

/// First winning run anchored at `anchor`, trying [`DIRECTIONS`] in order
pub fn find_line_at<P: PartialEq>(board: &Board<P>, anchor: Place) -> Option<Vec<Place>> {
    DIRECTIONS
        .iter()
        .map(|&dir| scan_run(board, anchor, dir))
        .find(|run| run.len() >= WIN_LENGTH)
}

/// Check if there's 5+ in a row for the given owner
#[instrument(level = "trace", skip_all, fields(size = board.size()))]
pub fn is_won_by<P: PartialEq>(board: &Board<P>, player: &P) -> bool {
    board
        .places()
        .filter(|&place| matches!(board.get(place), Some(Cell::Owned(p)) if p == player))
        .any(|place| find_line_at(board, place).is_some())
}

/// Find the first winning line on the board, whoever owns it.
///
/// Returns the whole run, so an overline yields more than five places.
#[instrument(level = "trace", skip_all, fields(size = board.size()))]
pub fn find_winning_row<P: PartialEq>(board: &Board<P>) -> Option<Vec<Place>> {
    let line = board
        .places()
        .filter(|&place| matches!(board.get(place), Some(Cell::Owned(_))))
        .find_map(|place| find_line_at(board, place))?;
    debug!(start = %line[0], len = line.len(), "winning line found");
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn place_all(board: &mut Board<Stone>, stone: Stone, places: &[(usize, usize)]) {
        for &(x, y) in places {
            board.place_stone(x, y, stone).unwrap();
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(i, 7, Stone::Black).unwrap();
        }
        assert!(is_won_by(&board, &Stone::Black));
        assert!(!is_won_by(&board, &Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(7, i, Stone::Black).unwrap();
        }
        assert!(is_won_by(&board, &Stone::Black));
        assert_eq!(
            find_winning_row(&board),
            Some((0..5).map(|y| Place::new(7, y)).collect())
        );
    }

    #[test]
    fn test_five_in_row_diagonal_se() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(i, i, Stone::White).unwrap();
        }
        assert!(is_won_by(&board, &Stone::White));
        assert_eq!(
            find_winning_row(&board),
            Some((0..5).map(|i| Place::new(i, i)).collect())
        );
    }

    #[test]
    fn test_five_in_row_diagonal_ne() {
        let mut board = Board::new();
        // (4, 8) up-right to (8, 4)
        for i in 0..5 {
            board.place_stone(4 + i, 8 - i, Stone::White).unwrap();
        }
        assert!(is_won_by(&board, &Stone::White));
        let line = find_winning_row(&board).unwrap();
        assert_eq!(line.first(), Some(&Place::new(4, 8)));
        assert_eq!(line.last(), Some(&Place::new(8, 4)));
    }

    #[test]
    fn test_six_in_row_reported_whole() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(i, 9, Stone::Black).unwrap();
        }
        assert!(is_won_by(&board, &Stone::Black));
        assert_eq!(find_winning_row(&board).map(|line| line.len()), Some(6));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(i, 9, Stone::Black).unwrap();
        }
        assert!(!is_won_by(&board, &Stone::Black));
        assert!(find_winning_row(&board).is_none());

        board.place_stone(4, 9, Stone::Black).unwrap();
        assert!(is_won_by(&board, &Stone::Black));
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        place_all(&mut board, Stone::Black, &[(0, 0), (1, 0), (3, 0), (4, 0), (5, 0)]);
        place_all(&mut board, Stone::White, &[(2, 0)]);
        assert!(!is_won_by(&board, &Stone::Black));
        assert!(find_winning_row(&board).is_none());
    }

    #[test]
    fn test_empty_not_five() {
        let board: Board<Stone> = Board::new();
        assert!(!is_won_by(&board, &Stone::Black));
        assert!(!is_won_by(&board, &Stone::White));
        assert!(find_winning_row(&board).is_none());
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        // Diagonal from (10, 10) to (14, 14)
        for i in 0..5 {
            board.place_stone(10 + i, 10 + i, Stone::White).unwrap();
        }
        assert!(is_won_by(&board, &Stone::White));
    }

    #[test]
    fn test_scan_stops_at_edge() {
        let mut board = Board::with_size(5);
        for i in 0..5 {
            board.place_stone(i, 4, Stone::Black).unwrap();
        }
        assert_eq!(scan_run(&board, Place::new(0, 4), (1, 0)).len(), 5);
        assert_eq!(scan_run(&board, Place::new(0, 4), (0, 1)).len(), 1);
        assert_eq!(scan_run(&board, Place::new(4, 4), (1, -1)).len(), 1);
    }

    #[test]
    fn test_scan_walks_forward_only() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(i, 3, Stone::Black).unwrap();
        }
        // Anchored mid-line the forward run is too short
        assert!(find_line_at(&board, Place::new(1, 3)).is_none());
        assert!(find_line_at(&board, Place::new(0, 3)).is_some());
    }

    #[test]
    fn test_scan_run_empty_anchor() {
        let board: Board<Stone> = Board::new();
        assert!(scan_run(&board, Place::new(3, 3), (1, 0)).is_empty());
        assert!(scan_run(&board, Place::new(99, 3), (1, 0)).is_empty());
    }

    #[test]
    fn test_first_line_in_scan_order() {
        let mut board = Board::new();
        // Vertical white line at x = 10, horizontal black line starting at x = 2
        for i in 0..5 {
            board.place_stone(10, i + 5, Stone::White).unwrap();
            board.place_stone(2 + i, 0, Stone::Black).unwrap();
        }
        let line = find_winning_row(&board).unwrap();
        assert_eq!(line[0], Place::new(2, 0));
        assert!(is_won_by(&board, &Stone::White));
    }

    #[test]
    fn test_horizontal_preferred_over_vertical_at_same_anchor() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(i, 0, Stone::Black).unwrap();
            board.place_stone(0, i, Stone::Black).unwrap();
        }
        let line = find_winning_row(&board).unwrap();
        assert_eq!(line, (0..5).map(|x| Place::new(x, 0)).collect::<Vec<_>>());
    }
}
