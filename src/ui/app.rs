//! Main application for the torus GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::board::{Stone, U_CELLS, V_CELLS};
use crate::game::TorusGame;

/// Main application
pub struct TorusApp {
    game: TorusGame,
    board_view: BoardView,
    message: Option<String>,
}

impl Default for TorusApp {
    fn default() -> Self {
        Self {
            game: TorusGame::new(),
            board_view: BoardView::default(),
            message: None,
        }
    }
}

fn player_label(stone: Stone) -> &'static str {
    match stone {
        Stone::One => "Player 1 (White)",
        Stone::Two => "Player 2 (Black)",
        Stone::Empty => "Nobody",
    }
}

impl TorusApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.game.reset();
        self.message = None;
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

                ui.menu_button("View", |ui| {
                    if ui.button("Reset View").clicked() {
                        self.game.set_z_rotation(0.0);
                        self.game.set_v_offset(0.0);
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{U_CELLS} x {V_CELLS} torus"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_view_card(ui);

                if self.game.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("TORUS GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row, no edges").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.game.current_player();
            let (fill, ink) = match player {
                Stone::Two => (BLACK_STONE, TEXT_PRIMARY),
                _ => (WHITE_STONE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.code(),
                    egui::FontId::proportional(20.0),
                    ink,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    if self.game.is_game_over() {
                        ui.label(RichText::new("Game Over").size(18.0).strong().color(TEXT_PRIMARY));
                    } else {
                        ui.label(
                            RichText::new(format!("Turn: {}", player_label(player)))
                                .size(14.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new(format!("{} stones placed", self.game.occupied_cells().len()))
                                .size(12.0)
                                .color(STATUS_PLAYING),
                        );
                    }
                });
            });
        });
    }

    /// Current view angles and the controls that change them
    fn render_view_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("VIEW").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "rotation {:.0}°   offset {:.0}°",
                    self.game.z_rotation().to_degrees(),
                    self.game.v_offset().to_degrees()
                ))
                .size(12.0)
                .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new("Drag to turn the torus, arrows step one cell, double-click to place")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let winner = self.game.winner();
        let banner = format!("Player {} wins with five in a row.", winner.code());

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(WIN_HIGHLIGHT));
                    ui.add_space(8.0);
                    ui.label(RichText::new(banner).size(14.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("Restart").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARNING));
            });
    }

    /// Render the board and apply what the player did to it
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let input = ui
                    .vertical_centered(|ui| self.board_view.show(ui, &self.game))
                    .inner;

                if input.drag != Vec2::ZERO {
                    self.game.adjust_z_rotation(input.drag.x as f64 * DRAG_SENSITIVITY);
                    self.game.adjust_v_offset(input.drag.y as f64 * DRAG_SENSITIVITY);
                }

                if let Some(cell) = input.picked {
                    let outcome = self.game.place_piece(cell.i as i32, cell.j as i32);
                    if outcome.placed {
                        self.message = None;
                    } else {
                        debug!(i = cell.i, j = cell.j, reason = %outcome.reason, "click ignored");
                        self.message = Some(format!("Cannot place at ({}, {}): {}", cell.i, cell.j, outcome.reason));
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let step_u = std::f64::consts::TAU / U_CELLS as f64;
        let step_v = std::f64::consts::TAU / V_CELLS as f64;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.game.adjust_z_rotation(-step_u);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.game.adjust_z_rotation(step_u);
            }
            if i.key_pressed(egui::Key::ArrowUp) {
                self.game.adjust_v_offset(-step_v);
            }
            if i.key_pressed(egui::Key::ArrowDown) {
                self.game.adjust_v_offset(step_v);
            }
        });
    }
}

impl eframe::App for TorusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
