//! Game rules for five-in-a-row on a torus
//!
//! The only rule beyond legal placement is the win condition: five or more
//! stones of one color in a line, where lines wrap across both seams.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, select_winning_window, WinResult, DIRECTIONS};
