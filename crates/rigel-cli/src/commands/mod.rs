pub mod map;
pub mod play;

use rigel_core::UniverseConfig;

/// Universe generation settings shared by the play and map commands.
fn universe_config(planets: usize, stations: usize) -> UniverseConfig {
    UniverseConfig::default()
        .with_planets(planets)
        .with_stations(stations)
}
