use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use rigel_core::{BodyKind, Coordinates, Universe};

pub fn run(
    seed: u64,
    planets: usize,
    stations: usize,
    json: bool,
    output: Option<&Path>,
) -> Result<(), String> {
    let config = super::universe_config(planets, stations);
    let mut rng = StdRng::seed_from_u64(seed);
    let universe = Universe::generate(&config, &mut rng).map_err(|e| e.to_string())?;

    let content = if json {
        let mut body = serde_json::to_string_pretty(&universe)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        body.push('\n');
        body
    } else {
        render_table(&universe, seed)
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn render_table(universe: &Universe, seed: u64) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", "Position", "Details", "From origin"]);

    for body in universe.bodies() {
        let details = match body.kind() {
            BodyKind::Planet(planet) => format!(
                "{} metal, rate {}",
                planet.metal_resources(),
                planet.exploitation_rate()
            ),
            BodyKind::Station(station) => {
                format!("pays {:.2} fuel per metal", station.metal_price())
            }
        };

        table.add_row(vec![
            body.display_name().to_string(),
            body.kind().to_string(),
            body.position().to_string(),
            details,
            format!("{:.1}", body.position().distance(&Coordinates::ORIGIN)),
        ]);
    }

    format!(
        "{table}\n\n  {} {} planets, {} stations (seed {seed})\n",
        "Universe:".bold(),
        universe.planet_count(),
        universe.station_count(),
    )
}
