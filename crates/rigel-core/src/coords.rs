//! Positions in space.
//!
//! Every body and the ship sit at a fixed point in a 3D Cartesian frame.
//! Distances are Euclidean and drive fuel costs, so the math here stays
//! deliberately plain: no wrapping, no sectors, just straight lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Coordinates {
    /// The origin at (0, 0, 0).
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Coordinates) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn distance_of_345_triangle() {
        let a = Coordinates::new(0.0, 0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn distance_uses_all_three_axes() {
        let a = Coordinates::new(1.0, 1.0, 1.0);
        let b = Coordinates::new(1.0, 1.0, 4.0);
        assert_eq!(a.distance(&b), 3.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Coordinates::new(-7.5, 12.0, 3.25);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn origin_constant() {
        assert_eq!(Coordinates::ORIGIN, Coordinates::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn display_one_decimal() {
        let a = Coordinates::new(1.25, -3.0, 0.0);
        assert_eq!(a.to_string(), "(1.2, -3.0, 0.0)");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            ax in -1000.0..1000.0f64, ay in -1000.0..1000.0f64, az in -1000.0..1000.0f64,
            bx in -1000.0..1000.0f64, by in -1000.0..1000.0f64, bz in -1000.0..1000.0f64,
        ) {
            let a = Coordinates::new(ax, ay, az);
            let b = Coordinates::new(bx, by, bz);
            prop_assert_eq!(a.distance(&b), b.distance(&a));
        }

        #[test]
        fn distance_is_never_negative(
            ax in -1000.0..1000.0f64, ay in -1000.0..1000.0f64, az in -1000.0..1000.0f64,
            bx in -1000.0..1000.0f64, by in -1000.0..1000.0f64, bz in -1000.0..1000.0f64,
        ) {
            let a = Coordinates::new(ax, ay, az);
            let b = Coordinates::new(bx, by, bz);
            prop_assert!(a.distance(&b) >= 0.0);
        }
    }
}
