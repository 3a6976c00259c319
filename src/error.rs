//! Crate error type
//!
//! Illegal placements are not errors; they come back as a
//! [`PlaceOutcome`](crate::game::PlaceOutcome). This type covers the
//! failures around the core: snapshot encoding, command-line input and the
//! window.

use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Snapshot could not be encoded as JSON
    #[display("failed to encode snapshot: {_0}")]
    Snapshot(serde_json::Error),

    /// A move argument was not of the form `i,j`
    #[display("invalid move '{_0}', expected 'i,j'")]
    InvalidMove(#[error(not(source))] String),

    /// The native window failed to start or crashed
    #[display("window error: {_0}")]
    Window(#[error(not(source))] String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(err)
    }
}

impl From<eframe::Error> for Error {
    fn from(err: eframe::Error) -> Self {
        Self::Window(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
