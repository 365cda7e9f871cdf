use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coords::Coordinates;
use crate::error::{RigelError, RigelResult};

/// Name shown for bodies whose catalog entry is blank.
pub const UNKNOWN_BODY_NAME: &str = "Object unknown";

/// Smallest price a station will ever pay per unit of metal.
pub const MIN_METAL_PRICE: f64 = 0.01;

/// Unique identifier for every body in the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub Uuid);

impl BodyId {
    /// Generate a new random body ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derive an ID from a generation RNG.
    ///
    /// Universe generation uses this instead of [`BodyId::new`] so that the
    /// same seed reproduces the same universe, IDs included.
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self(Uuid::from_u128(rng.random()))
    }
}

impl Default for BodyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A planet: a mineable deposit of metal.
///
/// The extraction rate is fixed at creation; only the remaining resources
/// change, and only through [`Planet::mine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    exploitation_rate: u32,
    metal_resources: u32,
}

impl Planet {
    /// Create a planet. The rate is clamped to at least 1 so every planet
    /// yields something while resources last.
    pub fn new(exploitation_rate: u32, metal_resources: u32) -> Self {
        Self {
            exploitation_rate: exploitation_rate.max(1),
            metal_resources,
        }
    }

    /// Metal extracted per mining operation.
    pub fn exploitation_rate(&self) -> u32 {
        self.exploitation_rate
    }

    /// Metal still in the crust.
    pub fn metal_resources(&self) -> u32 {
        self.metal_resources
    }

    /// Extract one round of metal and return the amount.
    ///
    /// Yields the exploitation rate while resources last, the remainder on
    /// the final round, and 0 forever after. Never fails.
    pub fn mine(&mut self) -> u32 {
        let mined = self.exploitation_rate.min(self.metal_resources);
        self.metal_resources -= mined;
        mined
    }
}

/// A station: buys metal and pays in fuel at a fixed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    metal_price: f64,
}

impl Station {
    /// Create a station. The price is clamped to [`MIN_METAL_PRICE`].
    pub fn new(metal_price: f64) -> Self {
        Self {
            metal_price: metal_price.max(MIN_METAL_PRICE),
        }
    }

    /// Fuel paid per unit of metal.
    pub fn metal_price(&self) -> f64 {
        self.metal_price
    }

    /// Quote the fuel paid for `metal` units, exactly `metal * price`.
    ///
    /// The fuel is returned to the caller, not pumped anywhere: the ship has
    /// to be refuelled separately. Trading zero metal is rejected.
    pub fn exchange_metal_for_fuel(&self, metal: u32) -> RigelResult<f64> {
        if metal == 0 {
            return Err(RigelError::NonPositiveAmount {
                what: "metal",
                amount: 0.0,
            });
        }
        Ok(f64::from(metal) * self.metal_price)
    }
}

/// What a body is, with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// A mineable planet.
    Planet(Planet),
    /// A trading station.
    Station(Station),
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet(_) => write!(f, "planet"),
            Self::Station(_) => write!(f, "station"),
        }
    }
}

/// A celestial body at a fixed position in the universe.
///
/// Identity, name, and position never change after construction; only the
/// planet payload mutates, through mining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    id: BodyId,
    name: String,
    position: Coordinates,
    kind: BodyKind,
}

impl Body {
    /// Create a body with a random ID.
    pub fn new(name: impl Into<String>, position: Coordinates, kind: BodyKind) -> Self {
        Self::with_id(BodyId::new(), name, position, kind)
    }

    /// Create a body with a pre-assigned ID.
    ///
    /// Used by universe generation, where IDs come from the seeded RNG.
    pub fn with_id(
        id: BodyId,
        name: impl Into<String>,
        position: Coordinates,
        kind: BodyKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            kind,
        }
    }

    /// This body's unique ID.
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// The catalog name, or [`UNKNOWN_BODY_NAME`] when it is blank.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNKNOWN_BODY_NAME
        } else {
            &self.name
        }
    }

    /// Where this body sits.
    pub fn position(&self) -> Coordinates {
        self.position
    }

    /// The body's kind and payload.
    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    /// Mutable access to the payload, for mining.
    pub fn kind_mut(&mut self) -> &mut BodyKind {
        &mut self.kind
    }
}
