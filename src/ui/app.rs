//! Main application for the Omok GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::theme::*;
use crate::Stone;

/// Main Omok application
pub struct OmokApp {
    state: GameState,
    board_view: BoardView,
}

impl OmokApp {
    /// Create a new app playing on a `size` x `size` board
    pub fn new(_cc: &eframe::CreationContext<'_>, size: usize) -> Self {
        Self {
            state: GameState::new(size),
            board_view: BoardView::default(),
        }
    }

    fn new_game(&mut self) {
        debug!("new game");
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.board.size();
                    ui.label(format!("Hot-seat - {size}x{size}"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("OMOK").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if let Some(result) = self.state.game_over.clone() {
                    self.render_game_over_card(ui, &result);
                    ui.add_space(10.0);
                }

                if let Some(msg) = &self.state.message {
                    self.render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let symbol = match turn {
                Stone::Black => "●",
                Stone::White => "○",
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(28.0).color(TEXT_PRIMARY));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result {
            GameResult::Won { winner, line } => format!("{} wins with {} in a row", winner, line.len()),
            GameResult::Draw => "Board full - draw".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(14.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARN));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.winning_line().map(<[_]>::to_vec);

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                winning_line.as_deref(),
                self.state.game_over.is_some(),
            );

            if let Some(place) = clicked {
                if let Err(msg) = self.state.try_place_stone(place) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
