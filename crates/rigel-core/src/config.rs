//! Configuration for universe generation.

/// Parameters for rolling a new universe.
///
/// Ranges are inclusive on both ends. Defaults give the standard prospecting
/// field: 50 planets and 10 stations inside a 500-unit cube around the origin.
#[derive(Debug, Clone)]
pub struct UniverseConfig {
    /// Number of planets to generate.
    pub planets: usize,
    /// Number of stations to generate.
    pub stations: usize,
    /// Positions are drawn uniformly from `[-extent, extent]` on each axis.
    pub extent: f64,
    /// Smallest starting metal deposit on a planet.
    pub min_metal: u32,
    /// Largest starting metal deposit on a planet.
    pub max_metal: u32,
    /// Smallest exploitation rate on a planet.
    pub min_rate: u32,
    /// Largest exploitation rate on a planet.
    pub max_rate: u32,
    /// Lowest fuel price a station pays per metal.
    pub min_price: f64,
    /// Highest fuel price a station pays per metal.
    pub max_price: f64,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            planets: 50,
            stations: 10,
            extent: 500.0,
            min_metal: 50,
            max_metal: 500,
            min_rate: 5,
            max_rate: 25,
            min_price: 0.5,
            max_price: 3.0,
        }
    }
}

impl UniverseConfig {
    /// Set the number of planets.
    pub fn with_planets(mut self, planets: usize) -> Self {
        self.planets = planets;
        self
    }

    /// Set the number of stations.
    pub fn with_stations(mut self, stations: usize) -> Self {
        self.stations = stations;
        self
    }

    /// Set the spatial extent (at least 1.0).
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent.max(1.0);
        self
    }

    /// Set the metal deposit range; the upper bound is raised to the lower.
    pub fn with_metal(mut self, min: u32, max: u32) -> Self {
        self.min_metal = min;
        self.max_metal = max.max(min);
        self
    }

    /// Set the exploitation rate range (lower bound at least 1).
    pub fn with_rate(mut self, min: u32, max: u32) -> Self {
        self.min_rate = min.max(1);
        self.max_rate = max.max(self.min_rate);
        self
    }

    /// Set the metal price range (lower bound kept positive).
    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.min_price = min.max(crate::body::MIN_METAL_PRICE);
        self.max_price = max.max(self.min_price);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_sizes() {
        let cfg = UniverseConfig::default();
        assert_eq!(cfg.planets, 50);
        assert_eq!(cfg.stations, 10);
        assert_eq!(cfg.extent, 500.0);
    }

    #[test]
    fn builder_methods() {
        let cfg = UniverseConfig::default()
            .with_planets(3)
            .with_stations(1)
            .with_extent(100.0)
            .with_metal(10, 20)
            .with_rate(2, 4)
            .with_price(1.0, 2.0);
        assert_eq!(cfg.planets, 3);
        assert_eq!(cfg.stations, 1);
        assert_eq!(cfg.extent, 100.0);
        assert_eq!((cfg.min_metal, cfg.max_metal), (10, 20));
        assert_eq!((cfg.min_rate, cfg.max_rate), (2, 4));
        assert_eq!((cfg.min_price, cfg.max_price), (1.0, 2.0));
    }

    #[test]
    fn ranges_keep_min_below_max() {
        let cfg = UniverseConfig::default().with_metal(100, 10).with_rate(0, 0);
        assert_eq!((cfg.min_metal, cfg.max_metal), (100, 100));
        assert_eq!((cfg.min_rate, cfg.max_rate), (1, 1));
    }

    #[test]
    fn price_floor_is_positive() {
        let cfg = UniverseConfig::default().with_price(-1.0, -1.0);
        assert!(cfg.min_price > 0.0);
        assert!(cfg.max_price >= cfg.min_price);
    }
}
