//! The guided-tour route: a fixed, cyclic waypoint list.

use crate::error::TourError;
use crate::exhibit::ExhibitId;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role of a waypoint within the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaypointKind {
    /// Pass-through point: arrive and immediately continue.
    Transit,
    /// Exhibit stop: arrive, face the exhibit, and run the scan dwell.
    Stop(ExhibitId),
}

/// Ordered, fixed-length, cyclic list of waypoints.
///
/// The first and last waypoints are transit points; every intermediate
/// waypoint is an exhibit stop, associated 1:1 with an exhibit by
/// `index - 1`. Indices are always taken modulo the route length, so
/// the tour loops forever.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    waypoints: Vec<Point3<f64>>,
}

impl Route {
    /// Create a route from an ordered waypoint list.
    ///
    /// Shape errors are deferred to [`Route::validate`] so a config can
    /// be assembled incrementally before the one-time startup check.
    #[must_use]
    pub fn new(waypoints: Vec<Point3<f64>>) -> Self {
        Self { waypoints }
    }

    /// Number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the route has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of exhibit-stop waypoints (route length minus the two transit points).
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.waypoints.len().saturating_sub(2)
    }

    /// Waypoint position at `index`, taken modulo the route length.
    ///
    /// Returns `None` only for an empty route, which `validate` rejects
    /// before any tour runs.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<&Point3<f64>> {
        if self.waypoints.is_empty() {
            return None;
        }
        self.waypoints.get(index % self.waypoints.len())
    }

    /// Role of the waypoint at `index` (modulo length).
    #[must_use]
    pub fn kind(&self, index: usize) -> Option<WaypointKind> {
        if self.waypoints.is_empty() {
            return None;
        }
        let index = index % self.waypoints.len();
        if index == 0 || index == self.waypoints.len() - 1 {
            Some(WaypointKind::Transit)
        } else {
            Some(WaypointKind::Stop(ExhibitId::new(index - 1)))
        }
    }

    /// The index following `index` in the cycle.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        if self.waypoints.is_empty() {
            return 0;
        }
        (index + 1) % self.waypoints.len()
    }

    /// Iterate over the waypoint positions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.waypoints.iter()
    }

    /// Validate the route shape against the hall's exhibit count.
    ///
    /// An empty or single-element route cannot form a tour; a stop count
    /// that doesn't match the exhibit count would break the
    /// `stop index - 1` association.
    pub fn validate(&self, exhibit_count: usize) -> Result<(), TourError> {
        if self.waypoints.len() < 2 {
            return Err(TourError::RouteTooShort {
                len: self.waypoints.len(),
            });
        }
        if self.stop_count() != exhibit_count {
            return Err(TourError::StopCountMismatch {
                stops: self.stop_count(),
                exhibits: exhibit_count,
            });
        }
        Ok(())
    }
}
