//! GUI module for the torus game
//!
//! A native egui/eframe front end. It only talks to the game through
//! [`TorusGame`](crate::game::TorusGame)'s public API.

mod app;
mod board_view;
mod theme;

pub use app::TorusApp;
pub use board_view::{cell_center, pick_cell, BoardInput};
