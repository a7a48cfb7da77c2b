//! World bounds: the walkable rectangle of the hall floor.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in the ground (XZ) plane.
///
/// The agent's position must always satisfy
/// `bounds.shrink(agent_radius).contains(&position)`; shrinking by the
/// agent radius keeps the whole agent inside the floor, not just its
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldBounds {
    /// Minimum X of the walkable floor.
    pub min_x: f64,
    /// Maximum X of the walkable floor.
    pub max_x: f64,
    /// Minimum Z of the walkable floor.
    pub min_z: f64,
    /// Maximum Z of the walkable floor.
    pub max_z: f64,
}

impl WorldBounds {
    /// Create bounds from the two corner extents.
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Shrink the rectangle inward by `margin` on all four sides.
    #[must_use]
    pub fn shrink(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x + margin,
            max_x: self.max_x - margin,
            min_z: self.min_z + margin,
            max_z: self.max_z - margin,
        }
    }

    /// Whether a point lies inside the rectangle on both horizontal axes.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.z >= self.min_z
            && point.z <= self.max_z
    }

    /// Width along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Depth along Z.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Whether the rectangle has positive area.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_z.is_finite()
            && self.max_z.is_finite()
            && self.width() > 0.0
            && self.depth() > 0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_contains() {
        let bounds = WorldBounds::new(-10.0, 10.0, -5.0, 5.0);
        assert!(bounds.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(bounds.contains(&Point3::new(10.0, 3.0, -5.0)));
        assert!(!bounds.contains(&Point3::new(10.1, 0.0, 0.0)));
        assert!(!bounds.contains(&Point3::new(0.0, 0.0, 5.1)));
    }

    #[test]
    fn test_shrink() {
        let bounds = WorldBounds::new(-10.0, 10.0, -5.0, 5.0).shrink(0.5);
        assert_relative_eq!(bounds.min_x, -9.5, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_z, 4.5, epsilon = 1e-12);
        assert!(!bounds.contains(&Point3::new(9.75, 0.0, 0.0)));
    }

    #[test]
    fn test_validity() {
        assert!(WorldBounds::new(-1.0, 1.0, -1.0, 1.0).is_valid());
        assert!(!WorldBounds::new(1.0, -1.0, -1.0, 1.0).is_valid());
        // Over-shrinking collapses the rectangle.
        assert!(!WorldBounds::new(-1.0, 1.0, -1.0, 1.0).shrink(2.0).is_valid());
        assert!(!WorldBounds::new(f64::NAN, 1.0, -1.0, 1.0).is_valid());
    }
}
