//! Board rendering for the torus GUI
//!
//! The torus is drawn unrolled: x runs around the major ring (u), y around
//! the tube (v). The view angles scroll both axes, so the seam is wherever
//! the player has dragged it. Stones near an edge are drawn again on the
//! opposite side.

use std::f64::consts::TAU;

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, Stone, U_CELLS, V_CELLS};
use crate::game::{normalize_angle, TorusGame};

use super::theme::*;

const STEP_U: f64 = TAU / U_CELLS as f64;
const STEP_V: f64 = TAU / V_CELLS as f64;

/// What the player did to the board this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardInput {
    /// Cell double-clicked
    pub picked: Option<Cell>,
    /// Pointer drag in screen pixels
    pub drag: Vec2,
}

/// Cell under a point given as fractions of the board width and height.
///
/// Inverse of the drawing transform: the screen angle minus the view angle,
/// wrapped, divided into cells. Points outside the board pick nothing.
pub fn pick_cell(fx: f64, fy: f64, z_rotation: f64, v_offset: f64) -> Option<Cell> {
    if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
        return None;
    }
    let u = normalize_angle(fx * TAU - z_rotation);
    let v = normalize_angle(fy * TAU - v_offset);
    let i = (u / STEP_U).floor() as usize % U_CELLS;
    let j = (v / STEP_V).floor() as usize % V_CELLS;
    Some(Cell::new(i as u8, j as u8))
}

/// Board position of a cell center as fractions of width and height
pub fn cell_center(cell: Cell, z_rotation: f64, v_offset: f64) -> (f64, f64) {
    let u = normalize_angle((cell.i as f64 + 0.5) * STEP_U + z_rotation);
    let v = normalize_angle((cell.j as f64 + 0.5) * STEP_V + v_offset);
    (u / TAU, v / TAU)
}

/// Board view handles rendering and input for the torus board
pub struct BoardView {
    board_rect: Rect,
    cell_size: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
            cell_size: 40.0,
        }
    }
}

impl BoardView {
    /// Render the board and report clicks and drags
    pub fn show(&mut self, ui: &mut egui::Ui, game: &TorusGame) -> BoardInput {
        let available = ui.available_size() - Vec2::splat(BOARD_PADDING);
        let aspect = U_CELLS as f32 / V_CELLS as f32;
        let width = available.x.min(available.y * aspect).max(160.0);
        let height = width / aspect;
        self.cell_size = width / U_CELLS as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click_and_drag());
        self.board_rect = response.rect;
        let painter = painter.with_clip_rect(self.board_rect);

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter, game);
        self.draw_winning_cells(&painter, game);
        self.draw_stones(&painter, game);
        self.draw_labels(&painter, game);

        if let Some(mv) = game.last_move() {
            self.draw_last_move_marker(&painter, game, mv.cell());
        }

        if !game.is_game_over() {
            if let Some(cell) = response.hover_pos().and_then(|p| self.screen_to_cell(p, game)) {
                if game.board().is_empty(cell) {
                    self.draw_hover_preview(&painter, game, cell);
                }
            }
        }

        let mut input = BoardInput::default();
        if response.dragged() {
            input.drag = response.drag_delta();
        }
        if response.double_clicked() {
            input.picked = response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_cell(p, game));
        }
        input
    }

    /// Grid lines sit on cell boundaries; the line at index 0 marks the seam
    fn draw_grid(&self, painter: &Painter, game: &TorusGame) {
        let rect = self.board_rect;

        for i in 0..U_CELLS {
            let fx = normalize_angle(i as f64 * STEP_U + game.z_rotation()) / TAU;
            let x = rect.min.x + fx as f32 * rect.width();
            let color = if i == 0 { SEAM_LINE } else { GRID_LINE };
            painter.line_segment(
                [Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)],
                Stroke::new(GRID_LINE_WIDTH, color),
            );
        }

        for j in 0..V_CELLS {
            let fy = normalize_angle(j as f64 * STEP_V + game.v_offset()) / TAU;
            let y = rect.min.y + fy as f32 * rect.height();
            let color = if j == 0 { SEAM_LINE } else { GRID_LINE };
            painter.line_segment(
                [Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)],
                Stroke::new(GRID_LINE_WIDTH, color),
            );
        }
    }

    fn draw_winning_cells(&self, painter: &Painter, game: &TorusGame) {
        let radius = self.cell_size * 0.5;
        for &cell in game.winning_cells() {
            for center in self.screen_positions(game, cell, radius) {
                painter.circle_filled(center, radius, win_fill());
                painter.circle_stroke(center, radius, Stroke::new(2.0, WIN_HIGHLIGHT));
            }
        }
    }

    fn draw_stones(&self, painter: &Painter, game: &TorusGame) {
        for mv in game.occupied_cells() {
            self.draw_stone(painter, game, mv.cell(), mv.player);
        }
    }

    /// Draw a single stone, repeated across the seams when it overlaps them
    fn draw_stone(&self, painter: &Painter, game: &TorusGame, cell: Cell, stone: Stone) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        for center in self.screen_positions(game, cell, radius) {
            painter.circle_filled(
                center + Vec2::new(2.0, 2.0),
                radius,
                Color32::from_rgba_unmultiplied(0, 0, 0, 50),
            );
            match stone {
                Stone::One => {
                    painter.circle_filled(center, radius, WHITE_STONE);
                    painter.circle_stroke(
                        center,
                        radius * 0.85,
                        Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                    );
                }
                Stone::Two => {
                    painter.circle_filled(center, radius, BLACK_STONE);
                    painter.circle_filled(
                        center + Vec2::new(-radius * 0.3, -radius * 0.3),
                        radius * 0.2,
                        BLACK_STONE_HIGHLIGHT,
                    );
                }
                Stone::Empty => {}
            }
        }
    }

    /// Index labels along the top (i) and left (j) edges
    fn draw_labels(&self, painter: &Painter, game: &TorusGame) {
        let font = egui::FontId::proportional(11.0);
        let rect = self.board_rect;

        for i in 0..U_CELLS {
            let (fx, _) = cell_center(Cell::new(i as u8, 0), game.z_rotation(), game.v_offset());
            let pos = Pos2::new(rect.min.x + fx as f32 * rect.width(), rect.min.y + 8.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, i, font.clone(), TEXT_MUTED);
        }

        for j in 0..V_CELLS {
            let (_, fy) = cell_center(Cell::new(0, j as u8), game.z_rotation(), game.v_offset());
            let pos = Pos2::new(rect.min.x + 8.0, rect.min.y + fy as f32 * rect.height());
            painter.text(pos, egui::Align2::CENTER_CENTER, j, font.clone(), TEXT_MUTED);
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, game: &TorusGame, cell: Cell) {
        for center in self.screen_positions(game, cell, LAST_MOVE_MARKER_RADIUS) {
            painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, game: &TorusGame, cell: Cell) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = match game.current_player() {
            Stone::One => Color32::from_rgba_unmultiplied(240, 240, 240, 90),
            Stone::Two => Color32::from_rgba_unmultiplied(20, 20, 20, 90),
            Stone::Empty => hover_valid(),
        };
        for center in self.screen_positions(game, cell, radius) {
            painter.circle_filled(center, radius, color);
        }
    }

    /// Screen centers for a cell: the primary one plus wrapped copies that
    /// still reach into the board by `radius`
    fn screen_positions(&self, game: &TorusGame, cell: Cell, radius: f32) -> Vec<Pos2> {
        let rect = self.board_rect;
        let (fx, fy) = cell_center(cell, game.z_rotation(), game.v_offset());
        let base = Pos2::new(
            rect.min.x + fx as f32 * rect.width(),
            rect.min.y + fy as f32 * rect.height(),
        );
        let reach = rect.expand(radius);

        let mut positions = Vec::with_capacity(4);
        for dx in [-rect.width(), 0.0, rect.width()] {
            for dy in [-rect.height(), 0.0, rect.height()] {
                let p = base + Vec2::new(dx, dy);
                if reach.contains(p) {
                    positions.push(p);
                }
            }
        }
        positions
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_cell(&self, screen_pos: Pos2, game: &TorusGame) -> Option<Cell> {
        let relative = screen_pos - self.board_rect.min;
        let fx = (relative.x / self.board_rect.width()) as f64;
        let fy = (relative.y / self.board_rect.height()) as f64;
        pick_cell(fx, fy, game.z_rotation(), game.v_offset())
    }
}
