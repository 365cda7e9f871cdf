//! Core simulation model for Rigel: coordinates, celestial bodies, the ship,
//! and the generated universe.
//!
//! This crate does no I/O and owns no game loop. `rigel-game` drives it one
//! turn at a time, and everything here can be constructed directly in tests:
//! a universe is just bodies inserted by hand or rolled from a seed.

/// Celestial bodies: planets, stations, and their identifiers.
pub mod body;
/// Universe generation parameters.
pub mod config;
/// Immutable 3D coordinates and Euclidean distance.
pub mod coords;
/// Error types used throughout the crate.
pub mod error;
/// Procedural naming for generated bodies.
pub mod names;
/// The player's ship: travel, refuelling, and cargo.
pub mod ship;
/// Owned storage for every body in a game.
pub mod universe;

/// Re-export body types.
pub use body::{Body, BodyId, BodyKind, Planet, Station};
/// Re-export generation parameters.
pub use config::UniverseConfig;
/// Re-export the coordinate type.
pub use coords::Coordinates;
/// Re-export error types.
pub use error::{RigelError, RigelResult};
/// Re-export ship types.
pub use ship::{FUEL_PER_DISTANCE, Ship, TravelQuote};
/// Re-export the universe.
pub use universe::Universe;
