use std::io::{self, BufRead, Write};

use colored::Colorize;

use rigel_game::{GameConfig, GameSession};

pub fn run(
    seed: u64,
    fuel: f64,
    planets: usize,
    stations: usize,
    name: &str,
) -> Result<(), String> {
    let config = GameConfig::default()
        .with_seed(seed)
        .with_ship_name(name)
        .with_starting_fuel(fuel)
        .with_universe(super::universe_config(planets, stations));

    let mut session =
        GameSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} prospecting run (seed {seed})", "Starting".bold());
    println!(
        "  {} planets and {} stations ahead.",
        session.universe().planet_count(),
        session.universe().station_count()
    );
    println!("  Type 'help' for commands, 'q' to quit.\n");
    println!("{}\n", session.status());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if session.finished() {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
