//! Game state machine
//!
//! [`TorusGame`] is the single owner of the board. Placements go through
//! [`TorusGame::place_piece`], which validates the request, writes the
//! stone, runs the win check and either hands the turn over or ends the
//! game. Once a game is won nothing but [`TorusGame::reset`] changes it.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::board::{Board, Cell, Move, Stone, U_CELLS, V_CELLS, WIN_LENGTH};
use crate::rules::check_win;

/// Why a placement was accepted or rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlaceReason {
    Placed,
    GameOver,
    OutOfRange,
    Occupied,
}

/// Result of a placement request. Check `placed` before assuming anything
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaceOutcome {
    pub placed: bool,
    pub reason: PlaceReason,
    /// Winner after the request, `Stone::Empty` while the game is running
    pub winner: Stone,
}

impl PlaceOutcome {
    fn rejected(reason: PlaceReason, winner: Stone) -> Self {
        Self {
            placed: false,
            reason,
            winner,
        }
    }
}

/// Phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Playing,
    Won,
}

/// Read-only view of everything except the board itself
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_player: Stone,
    pub winner: Stone,
    pub game_over: bool,
    pub v_offset: f64,
    pub z_rotation: f64,
    pub last_move: Option<Move>,
    pub winning_cells: Vec<Cell>,
}

/// Map any angle into `[0, 2π)`.
///
/// Non-finite input has no meaningful representative and maps to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut normalized = angle % TAU;
    if normalized < 0.0 {
        normalized += TAU;
    }
    // -ε + 2π can round up to exactly 2π
    if normalized >= TAU {
        normalized = 0.0;
    }
    normalized
}

/// A game session on the torus
#[derive(Debug, Clone)]
pub struct TorusGame {
    board: Board,
    current_player: Stone,
    winner: Stone,
    game_over: bool,
    v_offset: f64,
    z_rotation: f64,
    last_move: Option<Move>,
    winning_cells: Vec<Cell>,
}

impl Default for TorusGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TorusGame {
    /// Empty board, player one to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::One,
            winner: Stone::Empty,
            game_over: false,
            v_offset: 0.0,
            z_rotation: 0.0,
            last_move: None,
            winning_cells: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Won
        } else {
            Phase::Playing
        }
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn winner(&self) -> Stone {
        self.winner
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn winning_cells(&self) -> &[Cell] {
        &self.winning_cells
    }

    #[inline]
    pub fn z_rotation(&self) -> f64 {
        self.z_rotation
    }

    #[inline]
    pub fn v_offset(&self) -> f64 {
        self.v_offset
    }

    pub fn state(&self) -> GameState {
        GameState {
            current_player: self.current_player,
            winner: self.winner,
            game_over: self.game_over,
            v_offset: self.v_offset,
            z_rotation: self.z_rotation,
            last_move: self.last_move,
            winning_cells: self.winning_cells.clone(),
        }
    }

    /// Every stone on the board as `{i, j, player}`, `i` outer and `j` inner
    pub fn occupied_cells(&self) -> Vec<Move> {
        self.board.occupied()
    }

    /// Place the current player's stone at `(i, j)`.
    ///
    /// Rejections leave the game untouched. Checks run in order: game over,
    /// out of range, occupied.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn place_piece(&mut self, i: i32, j: i32) -> PlaceOutcome {
        if self.game_over {
            debug!("placement rejected, game is over");
            return PlaceOutcome::rejected(PlaceReason::GameOver, self.winner);
        }

        if !Cell::is_valid(i, j) {
            debug!("placement rejected, outside {}x{}", U_CELLS, V_CELLS);
            return PlaceOutcome::rejected(PlaceReason::OutOfRange, self.winner);
        }

        let cell = Cell::new(i as u8, j as u8);
        if !self.board.is_empty(cell) {
            debug!("placement rejected, cell occupied");
            return PlaceOutcome::rejected(PlaceReason::Occupied, self.winner);
        }

        let player = self.current_player;
        self.board.place_stone(cell, player);
        let mv = Move::new(cell, player);
        self.last_move = Some(mv);

        let result = check_win(&self.board, self.last_move, WIN_LENGTH);
        if result.is_win() {
            info!(
                winner = result.winner.code(),
                direction = ?result.direction,
                count = result.count,
                "game won"
            );
            self.winner = result.winner;
            self.game_over = true;
            self.winning_cells = result.winning_cells;
        } else {
            self.current_player = player.opponent();
            self.winning_cells.clear();
        }

        PlaceOutcome {
            placed: true,
            reason: PlaceReason::Placed,
            winner: self.winner,
        }
    }

    /// Start over: empty board, player one to move, view angles zeroed
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    pub fn set_z_rotation(&mut self, angle: f64) {
        self.z_rotation = normalize_angle(angle);
        debug!(z_rotation = self.z_rotation, "view rotated");
    }

    pub fn adjust_z_rotation(&mut self, delta: f64) {
        self.set_z_rotation(self.z_rotation + delta);
    }

    pub fn set_v_offset(&mut self, angle: f64) {
        self.v_offset = normalize_angle(angle);
        debug!(v_offset = self.v_offset, "view offset");
    }

    pub fn adjust_v_offset(&mut self, delta: f64) {
        self.set_v_offset(self.v_offset + delta);
    }
}
