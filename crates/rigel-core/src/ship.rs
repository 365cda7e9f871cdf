//! The player's ship.
//!
//! The ship is the only mobile thing in the model. It always sits docked at
//! some body, burns fuel proportional to distance when it moves, and hauls
//! mined metal in an integer cargo hold. Fields stay private so fuel can
//! never go negative and moves can never half-happen.

use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyId};
use crate::coords::Coordinates;
use crate::error::{RigelError, RigelResult};

/// Fuel burned per unit of distance travelled.
pub const FUEL_PER_DISTANCE: f64 = 0.1;

/// Distance and fuel cost of a prospective trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelQuote {
    /// Straight-line distance to the destination.
    pub distance: f64,
    /// Fuel the trip costs.
    pub fuel: f64,
}

/// A ship docked somewhere in the universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    name: String,
    docked_at: BodyId,
    position: Coordinates,
    fuel: f64,
    cargo: u32,
}

impl Ship {
    /// Provision a ship docked at `dock` with the given fuel (floored at 0).
    pub fn new(name: impl Into<String>, dock: &Body, fuel: f64) -> Self {
        Self {
            name: name.into(),
            docked_at: dock.id(),
            position: dock.position(),
            fuel: fuel.max(0.0),
            cargo: 0,
        }
    }

    /// The ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body the ship is docked at.
    pub fn docked_at(&self) -> BodyId {
        self.docked_at
    }

    /// Where the ship currently sits.
    pub fn position(&self) -> Coordinates {
        self.position
    }

    /// Fuel in the tank.
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// Metal in the hold.
    pub fn cargo(&self) -> u32 {
        self.cargo
    }

    /// Price out a trip to `dest` without committing to it.
    pub fn travel_quote(&self, dest: &Body) -> TravelQuote {
        let distance = self.position.distance(&dest.position());
        TravelQuote {
            distance,
            fuel: distance * FUEL_PER_DISTANCE,
        }
    }

    /// Fly to `dest`, burning fuel for the distance covered.
    ///
    /// All or nothing: when the tank holds at least the quoted fuel (the
    /// exact boundary succeeds), the cost is deducted and the ship docks at
    /// the destination. Otherwise nothing changes and the call fails with
    /// [`RigelError::InsufficientFuel`].
    pub fn travel(&mut self, dest: &Body) -> RigelResult<TravelQuote> {
        let quote = self.travel_quote(dest);
        if self.fuel < quote.fuel {
            return Err(RigelError::InsufficientFuel {
                required: quote.fuel,
                available: self.fuel,
            });
        }

        self.fuel -= quote.fuel;
        self.position = dest.position();
        self.docked_at = dest.id();
        Ok(quote)
    }

    /// Add fuel to the tank.
    ///
    /// Non-positive amounts are rejected rather than ignored, so a caller
    /// passing a bad quote hears about it.
    pub fn refuel(&mut self, amount: f64) -> RigelResult<()> {
        if amount <= 0.0 {
            return Err(RigelError::NonPositiveAmount {
                what: "fuel",
                amount,
            });
        }
        self.fuel += amount;
        Ok(())
    }

    /// Load mined metal into the hold.
    pub fn load_metal(&mut self, amount: u32) {
        self.cargo += amount;
    }

    /// Empty the hold in one step and return what was in it.
    pub fn unload_metal(&mut self) -> u32 {
        std::mem::take(&mut self.cargo)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::body::{BodyKind, Planet, Station};

    fn planet_at(x: f64, y: f64, z: f64) -> Body {
        Body::new(
            "Ferron",
            Coordinates::new(x, y, z),
            BodyKind::Planet(Planet::new(10, 100)),
        )
    }

    fn home_station() -> Body {
        Body::new(
            "Home Base",
            Coordinates::ORIGIN,
            BodyKind::Station(Station::new(2.0)),
        )
    }

    #[test]
    fn new_ship_starts_docked_and_empty() {
        let home = home_station();
        let ship = Ship::new("Rigel", &home, 100.0);
        assert_eq!(ship.docked_at(), home.id());
        assert_eq!(ship.position(), home.position());
        assert_eq!(ship.fuel(), 100.0);
        assert_eq!(ship.cargo(), 0);
    }

    #[test]
    fn negative_starting_fuel_floors_at_zero() {
        let home = home_station();
        let ship = Ship::new("Rigel", &home, -5.0);
        assert_eq!(ship.fuel(), 0.0);
    }

    #[test]
    fn quote_charges_a_tenth_of_distance() {
        let home = home_station();
        let ship = Ship::new("Rigel", &home, 100.0);
        let quote = ship.travel_quote(&planet_at(300.0, 400.0, 0.0));
        assert_eq!(quote.distance, 500.0);
        assert_eq!(quote.fuel, 50.0);
    }

    #[test]
    fn travel_with_exact_fuel_succeeds() {
        let home = home_station();
        let dest = planet_at(300.0, 400.0, 0.0);
        let mut ship = Ship::new("Rigel", &home, 50.0);

        let quote = ship.travel(&dest).unwrap();
        assert_eq!(quote.fuel, 50.0);
        assert_eq!(ship.fuel(), 0.0);
        assert_eq!(ship.docked_at(), dest.id());
        assert_eq!(ship.position(), dest.position());
    }

    #[test]
    fn travel_one_short_fails_and_changes_nothing() {
        let home = home_station();
        let dest = planet_at(300.0, 400.0, 0.0);
        let mut ship = Ship::new("Rigel", &home, 49.0);

        let err = ship.travel(&dest).unwrap_err();
        assert!(matches!(err, RigelError::InsufficientFuel { .. }));
        assert_eq!(ship.fuel(), 49.0);
        assert_eq!(ship.docked_at(), home.id());
        assert_eq!(ship.position(), home.position());
    }

    #[test]
    fn failed_travel_reports_both_sides() {
        let home = home_station();
        let mut ship = Ship::new("Rigel", &home, 10.0);
        match ship.travel(&planet_at(300.0, 400.0, 0.0)) {
            Err(RigelError::InsufficientFuel {
                required,
                available,
            }) => {
                assert_eq!(required, 50.0);
                assert_eq!(available, 10.0);
            }
            other => panic!("expected InsufficientFuel, got {other:?}"),
        }
    }

    #[test]
    fn refuel_adds_fuel() {
        let home = home_station();
        let mut ship = Ship::new("Rigel", &home, 10.0);
        ship.refuel(15.5).unwrap();
        assert_eq!(ship.fuel(), 25.5);
    }

    #[test]
    fn refuel_rejects_zero_and_negative() {
        let home = home_station();
        let mut ship = Ship::new("Rigel", &home, 10.0);
        assert!(ship.refuel(0.0).is_err());
        assert!(ship.refuel(-3.0).is_err());
        assert_eq!(ship.fuel(), 10.0);
    }

    #[test]
    fn cargo_loads_and_unloads_in_full() {
        let home = home_station();
        let mut ship = Ship::new("Rigel", &home, 10.0);
        ship.load_metal(7);
        ship.load_metal(3);
        assert_eq!(ship.cargo(), 10);
        assert_eq!(ship.unload_metal(), 10);
        assert_eq!(ship.cargo(), 0);
        assert_eq!(ship.unload_metal(), 0);
    }

    proptest! {
        #[test]
        fn travel_is_atomic(
            fuel in 0.0..200.0f64,
            x in -1000.0..1000.0f64,
            y in -1000.0..1000.0f64,
            z in -1000.0..1000.0f64,
        ) {
            let home = home_station();
            let dest = planet_at(x, y, z);
            let mut ship = Ship::new("Rigel", &home, fuel);

            match ship.travel(&dest) {
                Ok(quote) => {
                    prop_assert_eq!(ship.fuel(), fuel - quote.fuel);
                    prop_assert!(ship.fuel() >= 0.0);
                    prop_assert_eq!(ship.docked_at(), dest.id());
                }
                Err(_) => {
                    prop_assert_eq!(ship.fuel(), fuel);
                    prop_assert_eq!(ship.docked_at(), home.id());
                    prop_assert_eq!(ship.position(), home.position());
                }
            }
        }
    }
}
