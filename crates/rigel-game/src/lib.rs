//! Turn-based game layer for Rigel.
//!
//! Wraps the `rigel-core` model in an interactive session: command parsing,
//! a two-step departure menu, mining and trading actions, and a turn-numbered
//! flight log. The CLI owns the read/print loop; this crate owns the rules
//! and answers every line of input with a string or an error.

pub mod command;
pub mod config;
pub mod error;
pub mod log;
pub mod session;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use log::{FlightLog, LogEntry};
pub use session::GameSession;
