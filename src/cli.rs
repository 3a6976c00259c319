//! Command-line interface

use clap::{Parser, Subcommand};

use torus_gomoku::{Error, Result};

/// Five-in-a-row on a torus
#[derive(Parser, Debug)]
#[command(name = "torus-gomoku")]
#[command(about = "Five-in-a-row on a board that wraps in both directions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; opens the game window when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the game window
    Play {
        /// Initial window width
        #[arg(long, default_value_t = crate::DEFAULT_WIDTH)]
        width: f32,

        /// Initial window height
        #[arg(long, default_value_t = crate::DEFAULT_HEIGHT)]
        height: f32,
    },

    /// Play moves on a fresh game and print its text snapshot
    Replay {
        /// Moves as `i,j`, in play order starting with player 1
        moves: Vec<String>,

        /// View rotation to record, in radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        z_rotation: f64,

        /// View offset to record, in radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        v_offset: f64,
    },
}

/// Parse a move written as `i,j`
pub fn parse_move(text: &str) -> Result<(i32, i32)> {
    let invalid = || Error::InvalidMove(text.to_string());
    let (i, j) = text.split_once(',').ok_or_else(invalid)?;
    let i = i.trim().parse().map_err(|_| invalid())?;
    let j = j.trim().parse().map_err(|_| invalid())?;
    Ok((i, j))
}
