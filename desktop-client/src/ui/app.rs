use eframe::egui;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, TicTacToeGame};
use tictactoe_common::{log, log_warn};

use crate::config::{ClientConfig, ClientConfigManager};
use super::board_view::BoardView;

pub struct TicTacToeApp {
    game: TicTacToeGame,
    board_view: BoardView,
    config_manager: ClientConfigManager,
    config: ClientConfig,
    game_over_dialog: bool,
}

impl TicTacToeApp {
    pub fn new(game: TicTacToeGame, config_manager: ClientConfigManager, config: ClientConfig) -> Self {
        Self {
            game,
            board_view: BoardView::new(),
            config_manager,
            config,
            game_over_dialog: false,
        }
    }

    /// Writes only what the user changed in the window, never the command-line overrides.
    fn save_settings(&mut self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log_warn!("Failed to save settings: {}", e);
        }
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.game_over_dialog = false;
    }

    fn render_mode_controls(&mut self, ui: &mut egui::Ui) {
        let current = *self.game.config();

        ui.horizontal(|ui| {
            let mut mode = current.mode;
            for option in [GameMode::PlayerVsPlayer, GameMode::PlayerVsComputer] {
                ui.selectable_value(&mut mode, option, option.label());
            }
            if mode != current.mode {
                log!("Mode changed to {}", mode.label());
                self.game.set_mode(mode);
                self.game_over_dialog = false;
                self.config.game.mode = mode;
                self.save_settings();
            }
        });

        ui.horizontal(|ui| {
            let mut difficulty = current.difficulty;
            ui.add_enabled_ui(current.mode == GameMode::PlayerVsComputer, |ui| {
                egui::ComboBox::from_label("Computer Difficulty")
                    .selected_text(difficulty.label())
                    .show_ui(ui, |ui| {
                        for option in Difficulty::ALL {
                            ui.selectable_value(&mut difficulty, option, option.label());
                        }
                    });
            });
            if difficulty != current.difficulty {
                log!("Difficulty changed to {}", difficulty.label());
                self.game.set_difficulty(difficulty);
                self.game_over_dialog = false;
                self.config.game.difficulty = difficulty;
                self.save_settings();
            }

            if ui.button("Reset Game").clicked() {
                self.new_game();
            }
        });
    }

    fn render_game_over_dialog(&mut self, ctx: &egui::Context) {
        let message = self.game.status_message();
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(message).size(18.0).strong());
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                    if ui.button("Close").clicked() {
                        self.game_over_dialog = false;
                    }
                });
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("mode_controls").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.heading("Mode & Difficulty");
            self.render_mode_controls(ui);
            ui.add_space(5.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(self.game.status_message()).size(16.0));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let accepts_input = !self.game.is_over() && !self.game.is_computer_turn();
                let clicked = self.board_view.render(
                    ui,
                    self.game.board(),
                    self.game.winning_line(),
                    accepts_input,
                );

                if let Some(index) = clicked
                    && self.game.apply_move(index)
                    && self.game.is_over()
                {
                    self.game_over_dialog = true;
                }
            });
        });

        if self.game_over_dialog {
            self.render_game_over_dialog(ctx);
        }
    }
}
