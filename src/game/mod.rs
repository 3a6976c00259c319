//! Game session: state machine and text snapshot

pub mod snapshot;
pub mod state;

pub use snapshot::{Snapshot, TorusGeometry, COORDINATE_NOTE};
pub use state::{normalize_angle, GameState, Phase, PlaceOutcome, PlaceReason, TorusGame};

/// Start a new game session
pub fn create_game() -> TorusGame {
    TorusGame::new()
}
