//! CLI frontend for the Rigel prospecting game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rigel",
    about = "Starship prospecting on the terminal: fly, mine, trade, repeat",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive prospecting run
    Play {
        /// RNG seed for deterministic universe generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Fuel in the tank at launch
        #[arg(long, default_value = "100.0")]
        fuel: f64,

        /// Number of planets to generate
        #[arg(long, default_value = "50")]
        planets: usize,

        /// Number of stations to generate
        #[arg(long, default_value = "10")]
        stations: usize,

        /// Name of the player's ship
        #[arg(long, default_value = "Rigel")]
        name: String,
    },

    /// Print the generated universe without playing
    Map {
        /// RNG seed for deterministic universe generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of planets to generate
        #[arg(long, default_value = "50")]
        planets: usize,

        /// Number of stations to generate
        #[arg(long, default_value = "10")]
        stations: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            fuel,
            planets,
            stations,
            name,
        } => commands::play::run(seed, fuel, planets, stations, &name),
        Commands::Map {
            seed,
            planets,
            stations,
            json,
            output,
        } => commands::map::run(seed, planets, stations, json, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
