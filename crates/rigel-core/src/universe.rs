use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyId, BodyKind, Planet, Station};
use crate::config::UniverseConfig;
use crate::coords::Coordinates;
use crate::error::{RigelError, RigelResult};
use crate::names;

/// Owns every body for the lifetime of a game.
///
/// Bodies keep their insertion order, so "the first station" of a generated
/// universe is stable for a given seed. At prospecting scale (dozens of
/// bodies) lookups scan the list; there is no index to keep in sync.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    bodies: Vec<Body>,
}

impl Universe {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Roll a universe from generation parameters.
    ///
    /// Spawns `config.planets` planets and then `config.stations` stations
    /// with uniform positions, deposits, rates, and prices; names come from
    /// the catalog tables, de-duplicated with a numeric suffix. Everything is
    /// drawn from `rng`, so one seed always yields the same universe.
    pub fn generate(config: &UniverseConfig, rng: &mut impl Rng) -> RigelResult<Self> {
        if config.planets == 0 && config.stations == 0 {
            return Err(RigelError::EmptyUniverse);
        }

        let mut universe = Self::new();
        let mut used = HashSet::new();

        for _ in 0..config.planets {
            let id = BodyId::from_rng(rng);
            let name = unique_name(names::planet_name(rng), &mut used);
            let position = random_position(config.extent, rng);
            let planet = Planet::new(
                rng.random_range(config.min_rate..=config.max_rate),
                rng.random_range(config.min_metal..=config.max_metal),
            );
            universe.insert(Body::with_id(id, name, position, BodyKind::Planet(planet)));
        }

        for _ in 0..config.stations {
            let id = BodyId::from_rng(rng);
            let name = unique_name(names::station_name(rng), &mut used);
            let position = random_position(config.extent, rng);
            let station = Station::new(rng.random_range(config.min_price..=config.max_price));
            universe.insert(Body::with_id(id, name, position, BodyKind::Station(station)));
        }

        Ok(universe)
    }

    /// Add a body and return its ID.
    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = body.id();
        self.bodies.push(body);
        id
    }

    /// Look up a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// Look up a body by ID, mutably.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    /// Look up a body by ID, failing with [`RigelError::UnknownBody`].
    pub fn body(&self, id: BodyId) -> RigelResult<&Body> {
        self.get(id).ok_or(RigelError::UnknownBody(id))
    }

    /// Look up a body by ID mutably, failing with [`RigelError::UnknownBody`].
    pub fn body_mut(&mut self, id: BodyId) -> RigelResult<&mut Body> {
        self.get_mut(id).ok_or(RigelError::UnknownBody(id))
    }

    /// Iterate over all bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Return `true` if the universe holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of planets.
    pub fn planet_count(&self) -> usize {
        self.bodies
            .iter()
            .filter(|b| matches!(b.kind(), BodyKind::Planet(_)))
            .count()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.bodies
            .iter()
            .filter(|b| matches!(b.kind(), BodyKind::Station(_)))
            .count()
    }

    /// The first station in insertion order, where new ships dock.
    pub fn first_station(&self) -> Option<&Body> {
        self.bodies
            .iter()
            .find(|b| matches!(b.kind(), BodyKind::Station(_)))
    }

    /// The up-to-`n` bodies closest to `from`, with their distances.
    ///
    /// `from` itself is excluded; results come sorted by ascending distance.
    pub fn nearest(&self, from: BodyId, n: usize) -> RigelResult<Vec<(&Body, f64)>> {
        let origin = self.body(from)?.position();

        let mut found: Vec<(&Body, f64)> = self
            .bodies
            .iter()
            .filter(|b| b.id() != from)
            .map(|b| (b, origin.distance(&b.position())))
            .collect();
        found.sort_by(|a, b| a.1.total_cmp(&b.1));
        found.truncate(n);
        Ok(found)
    }
}

fn random_position(extent: f64, rng: &mut impl Rng) -> Coordinates {
    Coordinates::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    )
}

/// Reserve `base` in `used`, appending " 2", " 3", ... on collision.
fn unique_name(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base} {n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn small_config() -> UniverseConfig {
        UniverseConfig::default()
            .with_planets(8)
            .with_stations(3)
            .with_extent(100.0)
    }

    fn hand_universe() -> Universe {
        let mut universe = Universe::new();
        universe.insert(Body::new(
            "Center",
            Coordinates::ORIGIN,
            BodyKind::Planet(Planet::new(10, 100)),
        ));
        universe.insert(Body::new(
            "Near",
            Coordinates::new(10.0, 0.0, 0.0),
            BodyKind::Planet(Planet::new(10, 100)),
        ));
        universe.insert(Body::new(
            "Mid",
            Coordinates::new(0.0, 50.0, 0.0),
            BodyKind::Station(Station::new(1.0)),
        ));
        universe.insert(Body::new(
            "Far",
            Coordinates::new(0.0, 0.0, 900.0),
            BodyKind::Planet(Planet::new(10, 100)),
        ));
        universe
    }

    #[test]
    fn insert_and_get() {
        let mut universe = Universe::new();
        let id = universe.insert(Body::new(
            "Solo",
            Coordinates::ORIGIN,
            BodyKind::Station(Station::new(1.0)),
        ));
        assert_eq!(universe.len(), 1);
        assert_eq!(universe.get(id).unwrap().display_name(), "Solo");
        assert!(universe.get(BodyId::new()).is_none());
    }

    #[test]
    fn body_fails_on_unknown_id() {
        let universe = hand_universe();
        let err = universe.body(BodyId::new()).unwrap_err();
        assert!(matches!(err, RigelError::UnknownBody(_)));
    }

    #[test]
    fn nearest_sorts_ascending_and_excludes_self() {
        let universe = hand_universe();
        let from = universe
            .bodies()
            .find(|b| b.display_name() == "Center")
            .map(Body::id)
            .unwrap();
        let nearest = universe.nearest(from, 10).unwrap();

        let names: Vec<&str> = nearest.iter().map(|(b, _)| b.display_name()).collect();
        assert_eq!(names, vec!["Near", "Mid", "Far"]);
        assert_eq!(nearest[0].1, 10.0);
        assert_eq!(nearest[1].1, 50.0);
        assert_eq!(nearest[2].1, 900.0);
    }

    #[test]
    fn nearest_truncates_to_n() {
        let universe = hand_universe();
        let from = universe
            .bodies()
            .find(|b| b.display_name() == "Center")
            .map(Body::id)
            .unwrap();
        let nearest = universe.nearest(from, 2).unwrap();
        assert_eq!(nearest.len(), 2);
        assert_eq!(nearest[0].0.display_name(), "Near");
    }

    #[test]
    fn nearest_from_unknown_body_fails() {
        let universe = hand_universe();
        assert!(universe.nearest(BodyId::new(), 3).is_err());
    }

    #[test]
    fn generate_respects_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        let universe = Universe::generate(&small_config(), &mut rng).unwrap();
        assert_eq!(universe.len(), 11);
        assert_eq!(universe.planet_count(), 8);
        assert_eq!(universe.station_count(), 3);
    }

    #[test]
    fn generate_zero_bodies_fails() {
        let config = UniverseConfig::default().with_planets(0).with_stations(0);
        let mut rng = StdRng::seed_from_u64(7);
        let err = Universe::generate(&config, &mut rng).unwrap_err();
        assert!(matches!(err, RigelError::EmptyUniverse));
    }

    #[test]
    fn generate_same_seed_same_universe() {
        let config = small_config();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = Universe::generate(&config, &mut a).unwrap();
        let second = Universe::generate(&config, &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generate_stays_inside_configured_ranges() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(3);
        let universe = Universe::generate(&config, &mut rng).unwrap();

        for body in universe.bodies() {
            let p = body.position();
            assert!(p.x.abs() <= config.extent);
            assert!(p.y.abs() <= config.extent);
            assert!(p.z.abs() <= config.extent);

            match body.kind() {
                BodyKind::Planet(planet) => {
                    assert!(planet.exploitation_rate() >= config.min_rate);
                    assert!(planet.exploitation_rate() <= config.max_rate);
                    assert!(planet.metal_resources() >= config.min_metal);
                    assert!(planet.metal_resources() <= config.max_metal);
                }
                BodyKind::Station(station) => {
                    assert!(station.metal_price() >= config.min_price);
                    assert!(station.metal_price() <= config.max_price);
                }
            }
        }
    }

    #[test]
    fn generate_names_are_unique() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = UniverseConfig::default().with_planets(200).with_stations(40);
        let universe = Universe::generate(&config, &mut rng).unwrap();

        let mut seen = HashSet::new();
        for body in universe.bodies() {
            assert!(seen.insert(body.display_name().to_string()));
        }
    }

    #[test]
    fn first_station_comes_after_planets() {
        let mut rng = StdRng::seed_from_u64(2);
        let universe = Universe::generate(&small_config(), &mut rng).unwrap();
        let station = universe.first_station().unwrap();
        assert!(matches!(station.kind(), BodyKind::Station(_)));
    }

    #[test]
    fn unique_name_suffixes_collisions() {
        let mut used = HashSet::new();
        assert_eq!(unique_name("Vega Depot".to_string(), &mut used), "Vega Depot");
        assert_eq!(
            unique_name("Vega Depot".to_string(), &mut used),
            "Vega Depot 2"
        );
        assert_eq!(
            unique_name("Vega Depot".to_string(), &mut used),
            "Vega Depot 3"
        );
    }

    #[test]
    fn serde_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        let universe = Universe::generate(&small_config(), &mut rng).unwrap();
        let json = serde_json::to_string(&universe).unwrap();
        let back: Universe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, universe);
    }
}
