//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the nearest destinations and open the departure menu.
    Travel,
    /// Mine metal from the planet the ship is docked at.
    Mine,
    /// Trade the metal hold for fuel at the docked station.
    Refuel,
    /// Show the ship status block.
    Status,
    /// Show recent flight log entries.
    Log,
    /// Show help.
    Help {
        /// Optional help topic.
        topic: Option<String>,
    },
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const TRAVEL_VERBS: &[&str] = &["t", "travel", "go", "fly"];
const MINE_VERBS: &[&str] = &["m", "mine", "dig"];
const REFUEL_VERBS: &[&str] = &["r", "refuel", "sell", "trade"];
const STATUS_VERBS: &[&str] = &["s", "status", "ship"];
const LOG_VERBS: &[&str] = &["log", "journal"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit", "bye"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Status;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    if TRAVEL_VERBS.contains(&verb.as_str()) {
        return Command::Travel;
    }
    if MINE_VERBS.contains(&verb.as_str()) {
        return Command::Mine;
    }
    if REFUEL_VERBS.contains(&verb.as_str()) {
        return Command::Refuel;
    }
    if STATUS_VERBS.contains(&verb.as_str()) {
        return Command::Status;
    }
    if LOG_VERBS.contains(&verb.as_str()) {
        return Command::Log;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return parse_help(rest);
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_help(rest: &[&str]) -> Command {
    if rest.is_empty() {
        Command::Help { topic: None }
    } else {
        Command::Help {
            topic: Some(rest.join(" ")),
        }
    }
}
