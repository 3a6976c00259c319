//! Five-in-a-row on a torus
//!
//! A two-player gomoku variant on a 16x8 grid whose axes both wrap: column
//! 15 touches column 0 and row 7 touches row 0, so lines may run across
//! either seam (or both).
//!
//! # Architecture
//!
//! - [`board`]: Board representation, wraparound indexing and cycle lengths
//! - [`rules`]: Win detection along wrapping lines
//! - [`game`]: Game state machine and the JSON text snapshot
//! - [`ui`]: egui front end over the game
//!
//! # Quick Start
//!
//! ```
//! use torus_gomoku::{create_game, PlaceReason, Stone};
//!
//! let mut game = create_game();
//! for (i, j) in [(14, 3), (0, 5), (15, 3), (1, 5), (0, 3), (2, 5), (1, 3), (3, 5)] {
//!     game.place_piece(i, j);
//! }
//!
//! // Fifth white stone completes a line across the i seam
//! let outcome = game.place_piece(2, 3);
//! assert_eq!(outcome.reason, PlaceReason::Placed);
//! assert_eq!(outcome.winner, Stone::One);
//! assert_eq!(game.winning_cells().len(), 5);
//!
//! // The game is over; nothing else may be placed
//! assert_eq!(game.place_piece(4, 4).reason, PlaceReason::GameOver);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Stone, U_CELLS, V_CELLS, WIN_LENGTH};
pub use error::{Error, Result};
pub use game::{create_game, normalize_angle, GameState, PlaceOutcome, PlaceReason, Snapshot, TorusGame};
pub use rules::{check_win, WinResult};
