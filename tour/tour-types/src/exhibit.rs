//! Exhibits: the static objects the robot tours and scans.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of an exhibit, indexing the hall's exhibit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExhibitId(pub usize);

impl ExhibitId {
    /// Create a new exhibit ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ExhibitId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExhibitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Exhibit({})", self.0)
    }
}

/// A static exhibit with a footprint the agent may not enter.
///
/// The footprint is a circle in the ground plane. Radii are per-exhibit
/// configuration: the default hall keeps the uneven values the scene
/// was tuned with rather than normalizing them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exhibit {
    /// Display name, used by the info panel collaborator.
    pub name: String,
    /// Position of the exhibit (Y is display height; collision uses XZ).
    pub position: Point3<f64>,
    /// Collision radius of the footprint circle, in meters.
    pub collision_radius: f64,
}

impl Exhibit {
    /// Create an exhibit at a position with the given collision radius.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point3<f64>, collision_radius: f64) -> Self {
        Self {
            name: name.into(),
            position,
            collision_radius,
        }
    }

    /// Distance from a point to this exhibit in the ground (XZ) plane.
    #[must_use]
    pub fn ground_distance(&self, point: &Point3<f64>) -> f64 {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        dx.hypot(dz)
    }

    /// Whether a point lies inside this exhibit's footprint circle.
    #[must_use]
    pub fn blocks(&self, point: &Point3<f64>) -> bool {
        self.ground_distance(point) < self.collision_radius
    }
}

/// Static descriptive text for one exhibit, shown by the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExhibitInfo {
    /// Panel title.
    pub title: String,
    /// Panel body text.
    pub blurb: String,
}

impl ExhibitInfo {
    /// Create an info entry.
    #[must_use]
    pub fn new(title: impl Into<String>, blurb: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blurb: blurb.into(),
        }
    }
}

/// Read-only catalog of info text, indexed by [`ExhibitId`].
///
/// Owned outside the engine: the core only reports *which* exhibit is
/// scanned; the UI collaborator looks the text up here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExhibitCatalog {
    entries: Vec<ExhibitInfo>,
}

impl ExhibitCatalog {
    /// Create a catalog from entries ordered by exhibit id.
    #[must_use]
    pub fn new(entries: Vec<ExhibitInfo>) -> Self {
        Self { entries }
    }

    /// Look up the info text for an exhibit, if present.
    #[must_use]
    pub fn get(&self, id: ExhibitId) -> Option<&ExhibitInfo> {
        self.entries.get(id.index())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exhibit_id() {
        let id = ExhibitId::new(3);
        assert_eq!(id.index(), 3);
        assert_eq!(ExhibitId::from(3), id);
        assert_eq!(id.to_string(), "Exhibit(3)");
    }

    #[test]
    fn test_footprint() {
        let exhibit = Exhibit::new("Amphora", Point3::new(0.0, 0.52, 0.0), 1.2);
        // Height of the exhibit is ignored by the footprint test.
        assert!(exhibit.blocks(&Point3::new(0.5, 0.0, 0.5)));
        assert!(!exhibit.blocks(&Point3::new(1.2, 0.0, 0.0)));
        assert_relative_eq!(
            exhibit.ground_distance(&Point3::new(3.0, 0.0, 4.0)),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ExhibitCatalog::new(vec![
            ExhibitInfo::new("Bust", "Marble bust, 2nd century."),
            ExhibitInfo::new("Vase", "Painted terracotta."),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ExhibitId::new(1)).unwrap().title, "Vase");
        assert!(catalog.get(ExhibitId::new(5)).is_none());
    }
}
