//! Flight log: a turn-numbered record of everything the ship did.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single flight log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogEntry {
    /// The ship flew to another body.
    Departure {
        /// Turn the trip completed on.
        turn: u64,
        /// Display name of the origin.
        from: String,
        /// Display name of the destination.
        to: String,
        /// Distance covered.
        distance: f64,
        /// Fuel the trip cost.
        fuel_spent: f64,
    },
    /// Metal was extracted from a planet.
    Mined {
        /// Turn the extraction happened on.
        turn: u64,
        /// Display name of the planet.
        body: String,
        /// Metal extracted.
        amount: u32,
        /// Metal left in the crust afterwards.
        remaining: u32,
    },
    /// Cargo was traded for fuel at a station.
    Exchanged {
        /// Turn the trade happened on.
        turn: u64,
        /// Display name of the station.
        station: String,
        /// Metal handed over.
        metal: u32,
        /// Fuel received in return.
        fuel_gained: f64,
    },
}

impl LogEntry {
    /// The turn this entry was recorded on.
    pub fn turn(&self) -> u64 {
        match self {
            Self::Departure { turn, .. }
            | Self::Mined { turn, .. }
            | Self::Exchanged { turn, .. } => *turn,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Departure {
                turn,
                from,
                to,
                distance,
                fuel_spent,
            } => write!(
                f,
                "[{turn:>3}] {from} -> {to} ({distance:.1} units, {fuel_spent:.1} fuel)"
            ),
            Self::Mined {
                turn,
                body,
                amount,
                remaining,
            } => write!(
                f,
                "[{turn:>3}] mined {amount} metal at {body} ({remaining} left)"
            ),
            Self::Exchanged {
                turn,
                station,
                metal,
                fuel_gained,
            } => write!(
                f,
                "[{turn:>3}] traded {metal} metal for {fuel_gained:.1} fuel at {station}"
            ),
        }
    }
}

/// Accumulates log entries during a game.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlightLog {
    entries: Vec<LogEntry>,
    max_entries: usize,
}

impl FlightLog {
    /// Create a flight log with the given capacity (0 = unlimited).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Append an entry, dropping the oldest once the log exceeds capacity.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let drain_count = self.entries.len() - self.max_entries;
            self.entries.drain(..drain_count);
        }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the last `n` entries as text, newest last.
    pub fn render_recent(&self, n: usize) -> String {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .map(LogEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
