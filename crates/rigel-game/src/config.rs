//! Configuration for a game session.

use rigel_core::UniverseConfig;

/// Configuration for a prospecting run.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible universe generation.
    pub seed: u64,
    /// Name of the player's ship.
    pub ship_name: String,
    /// Fuel in the tank at launch.
    pub starting_fuel: f64,
    /// How many destinations the departure menu offers.
    pub menu_size: usize,
    /// Flight log capacity (0 = unlimited).
    pub log_cap: usize,
    /// Universe generation parameters.
    pub universe: UniverseConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ship_name: "Rigel".to_string(),
            starting_fuel: 100.0,
            menu_size: 5,
            log_cap: 100,
            universe: UniverseConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the ship name.
    pub fn with_ship_name(mut self, name: impl Into<String>) -> Self {
        self.ship_name = name.into();
        self
    }

    /// Set the launch fuel (floored at 0).
    pub fn with_starting_fuel(mut self, fuel: f64) -> Self {
        self.starting_fuel = fuel.max(0.0);
        self
    }

    /// Set the departure menu size (at least 1).
    pub fn with_menu_size(mut self, n: usize) -> Self {
        self.menu_size = n.max(1);
        self
    }

    /// Set the flight log capacity (0 = unlimited).
    pub fn with_log_cap(mut self, cap: usize) -> Self {
        self.log_cap = cap;
        self
    }

    /// Replace the universe generation parameters.
    pub fn with_universe(mut self, universe: UniverseConfig) -> Self {
        self.universe = universe;
        self
    }
}
