//! Hot-seat game state for the Omok GUI
//!
//! Turn alternation and the game-over check live here, on top of the
//! board's public contract. The board itself never enforces turns.

use tracing::info;

use crate::{Board, Place, Stone};

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Won { winner: Stone, line: Vec<Place> },
    Draw,
}

/// Main game state
pub struct GameState {
    pub board: Board<Stone>,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Place>,
    pub move_count: usize,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::with_size(size),
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            move_count: 0,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.game_over = None;
        self.last_move = None;
        self.move_count = 0;
        self.message = None;
    }

    /// Winning line to highlight, if the game was won
    pub fn winning_line(&self) -> Option<&[Place]> {
        match &self.game_over {
            Some(GameResult::Won { line, .. }) => Some(line.as_slice()),
            _ => None,
        }
    }

    /// Attempt to place the current player's stone at the given place
    pub fn try_place_stone(&mut self, place: Place) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        let occupied = self
            .board
            .is_occupied(place.x, place.y)
            .map_err(|e| e.to_string())?;
        if occupied {
            return Err("Intersection is occupied".to_string());
        }

        let color = self.current_turn;
        self.board
            .place_stone(place.x, place.y, color)
            .map_err(|e| e.to_string())?;
        self.last_move = Some(place);
        self.move_count += 1;
        self.message = None;

        if self.board.is_won_by(&color) {
            let line = self.board.winning_row().unwrap_or_default();
            info!(winner = %color, moves = self.move_count, "game won");
            self.game_over = Some(GameResult::Won { winner: color, line });
            return Ok(());
        }

        if self.board.is_full() {
            info!(moves = self.move_count, "board full, game drawn");
            self.game_over = Some(GameResult::Draw);
            return Ok(());
        }

        self.current_turn = color.opponent();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new(15);
        state.try_place_stone(Place::new(7, 7)).unwrap();
        assert_eq!(state.current_turn, Stone::White);
        state.try_place_stone(Place::new(8, 7)).unwrap();
        assert_eq!(state.current_turn, Stone::Black);
        assert_eq!(state.board.player_at(8, 7).unwrap(), Some(&Stone::White));
    }

    #[test]
    fn test_occupied_rejected_without_turn_change() {
        let mut state = GameState::new(15);
        state.try_place_stone(Place::new(7, 7)).unwrap();
        assert!(state.try_place_stone(Place::new(7, 7)).is_err());
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::new(15);
        for x in 0..4 {
            state.try_place_stone(Place::new(x, 0)).unwrap();
            state.try_place_stone(Place::new(x, 1)).unwrap();
        }
        state.try_place_stone(Place::new(4, 0)).unwrap();

        let line: Vec<Place> = (0..5).map(|x| Place::new(x, 0)).collect();
        assert_eq!(
            state.game_over,
            Some(GameResult::Won { winner: Stone::Black, line: line.clone() })
        );
        assert_eq!(state.winning_line(), Some(line.as_slice()));
        assert!(state.try_place_stone(Place::new(5, 5)).is_err());

        state.reset();
        assert!(state.game_over.is_none());
        assert_eq!(state.board.stone_count(), 0);
    }

    #[test]
    fn test_full_board_draw() {
        let mut state = GameState::new(2);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            state.try_place_stone(Place::new(x, y)).unwrap();
        }
        assert_eq!(state.game_over, Some(GameResult::Draw));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut state = GameState::new(15);
        assert!(state.try_place_stone(Place::new(15, 0)).is_err());
        assert_eq!(state.move_count, 0);
    }
}
