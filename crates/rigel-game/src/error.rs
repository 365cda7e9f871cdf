//! Error types for the game layer.

use thiserror::Error;

use rigel_core::RigelError;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur during a prospecting run.
///
/// None of these end the session: the loop that owns the session prints the
/// message and prompts again.
#[derive(Debug, Error)]
pub enum GameError {
    /// Mining attempted somewhere that is not a planet.
    #[error("cannot mine at {0}: only planets carry metal")]
    NotAtPlanet(String),

    /// Fuel trade attempted somewhere that is not a station.
    #[error("cannot trade at {0}: only stations buy metal")]
    NotAtStation(String),

    /// Departure menu choice out of range.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Input did not match any command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Simulation model error.
    #[error("{0}")]
    Core(#[from] RigelError),
}
