//! Torus Gomoku
//!
//! Opens the game window, or replays moves headlessly and prints the text
//! snapshot.

mod cli;

use clap::Parser;
use cli::{parse_move, Cli, Command};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use torus_gomoku::ui::TorusApp;
use torus_gomoku::{create_game, Result};

const DEFAULT_WIDTH: f32 = 1100.0;
const DEFAULT_HEIGHT: f32 = 650.0;

fn main() -> Result<()> {
    // Logs go to stderr so snapshots on stdout stay parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => run_window(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        Some(Command::Play { width, height }) => run_window(width, height),
        Some(Command::Replay {
            moves,
            z_rotation,
            v_offset,
        }) => run_replay(&moves, z_rotation, v_offset),
    }
}

fn run_window(width: f32, height: f32) -> Result<()> {
    info!(width, height, "opening game window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Torus Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Torus Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(TorusApp::new(cc)))),
    )?;
    Ok(())
}

fn run_replay(moves: &[String], z_rotation: f64, v_offset: f64) -> Result<()> {
    let mut game = create_game();
    game.set_z_rotation(z_rotation);
    game.set_v_offset(v_offset);

    for text in moves {
        let (i, j) = parse_move(text)?;
        let outcome = game.place_piece(i, j);
        if !outcome.placed {
            warn!(i, j, reason = %outcome.reason, "move skipped");
        }
    }

    println!("{}", game.render_to_text()?);
    Ok(())
}
