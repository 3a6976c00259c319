//! Text snapshot of a game
//!
//! [`Snapshot`] is the one textual contract the game exposes: everything a
//! front end or an automated check needs to reconstruct what is on screen.
//! Field order in the JSON is not significant.

use serde::Serialize;

use super::state::{Phase, TorusGame};
use crate::board::{Cell, Move, Stone, MAJOR_RADIUS, MINOR_RADIUS, U_CELLS, V_CELLS};
use crate::error::Result;

pub const COORDINATE_NOTE: &str = "u goes around the torus center ring; v goes around each tube \
cross-section; stones are placed on grid intersections.";

/// Torus dimensions, for display only
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TorusGeometry {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub u_cells: usize,
    pub v_cells: usize,
}

impl Default for TorusGeometry {
    fn default() -> Self {
        Self {
            major_radius: MAJOR_RADIUS,
            minor_radius: MINOR_RADIUS,
            u_cells: U_CELLS,
            v_cells: V_CELLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// `"won"` or `"playing"`
    pub mode: Phase,
    pub torus: TorusGeometry,
    pub current_player: Stone,
    pub winner: Stone,
    pub game_over: bool,
    pub v_offset: f64,
    pub z_rotation: f64,
    pub winning_cells: Vec<Cell>,
    pub occupied_cells: Vec<Move>,
    pub coordinate_note: &'static str,
}

impl From<&TorusGame> for Snapshot {
    fn from(game: &TorusGame) -> Self {
        Self {
            mode: game.phase(),
            torus: TorusGeometry::default(),
            current_player: game.current_player(),
            winner: game.winner(),
            game_over: game.is_game_over(),
            v_offset: game.v_offset(),
            z_rotation: game.z_rotation(),
            winning_cells: game.winning_cells().to_vec(),
            occupied_cells: game.occupied_cells(),
            coordinate_note: COORDINATE_NOTE,
        }
    }
}

impl TorusGame {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Serialize the current snapshot as compact JSON
    pub fn render_to_text(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(game: &TorusGame) -> Value {
        serde_json::from_str(&game.render_to_text().unwrap()).unwrap()
    }

    #[test]
    fn test_fresh_game_snapshot() {
        let value = parse(&TorusGame::new());
        assert_eq!(
            value,
            json!({
                "mode": "playing",
                "torus": {
                    "majorRadius": 20.0,
                    "minorRadius": 10.0,
                    "uCells": 16,
                    "vCells": 8
                },
                "currentPlayer": 1,
                "winner": 0,
                "gameOver": false,
                "vOffset": 0.0,
                "zRotation": 0.0,
                "winningCells": [],
                "occupiedCells": [],
                "coordinateNote": COORDINATE_NOTE
            })
        );
    }

    #[test]
    fn test_snapshot_tracks_moves() {
        let mut game = TorusGame::new();
        game.place_piece(4, 1);
        game.place_piece(0, 7);
        game.set_v_offset(1.5);

        let value = parse(&game);
        assert_eq!(value["currentPlayer"], 1);
        assert_eq!(value["vOffset"], 1.5);
        assert_eq!(
            value["occupiedCells"],
            json!([{"i": 0, "j": 7, "player": 2}, {"i": 4, "j": 1, "player": 1}])
        );
    }

    #[test]
    fn test_note_text() {
        assert_eq!(
            COORDINATE_NOTE,
            "u goes around the torus center ring; v goes around each tube cross-section; \
             stones are placed on grid intersections."
        );
    }
}
