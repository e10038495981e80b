//! Board rendering for the Omok GUI

use crate::{Board, Cell, Place, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Grid dimension of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked place if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board<Stone>,
        current_turn: Stone,
        last_move: Option<Place>,
        winning_line: Option<&[Place]>,
        game_over: bool,
    ) -> Option<Place> {
        let available_size = ui.available_size();
        self.size = board.size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        let spans = (self.size.max(2) - 1) as f32;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / spans;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(place) = last_move {
            self.draw_last_move_marker(&painter, place);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if !game_over {
            if let Some(place) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = board.is_empty(place.x, place.y).unwrap_or(false);
                self.draw_hover_preview(&painter, place, current_turn, is_valid);

                if response.clicked() && is_valid {
                    clicked = Some(place);
                }
            }
        }

        clicked
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = BOARD_MARGIN + (self.size.max(1) - 1) as f32 * self.cell_size;

        for i in 0..self.size {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in star_points(self.size) {
            let center = self.board_to_screen(Place::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (letters for columns, numbers for rows)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.size {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;

            let pos = Pos2::new(x, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let pos = Pos2::new(x, self.board_rect.max.y - 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..self.size {
            let label = format!("{}", row + 1);
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let pos = Pos2::new(self.board_rect.max.x - 12.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board<Stone>) {
        for place in board.places() {
            if let Some(Cell::Owned(stone)) = board.get(place) {
                self.draw_stone(painter, place, *stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, place: Place, stone: Stone) {
        let center = self.board_to_screen(place);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, place: Place) {
        let center = self.board_to_screen(place);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Place]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &place in line {
            let center = self.board_to_screen(place);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, place: Place, turn: Stone, is_valid: bool) {
        let center = self.board_to_screen(place);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a board place
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Place> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor();
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor();

        let size = self.size as f32;
        if x >= 0.0 && x < size && y >= 0.0 && y < size {
            Some(Place::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Convert a board place to screen coordinates
    pub fn board_to_screen(&self, place: Place) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + place.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + place.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
