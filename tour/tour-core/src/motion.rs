//! Motion validation: bounds and footprint checks for proposed moves.
//!
//! Validation is a pure function. A rejected move is a normal outcome,
//! not an error: the caller keeps the current position for that frame.

use nalgebra::Point3;
use tour_types::{Exhibit, WorldBounds};
use tracing::trace;

/// Validate a proposed displacement against the floor bounds and the
/// exhibit footprints.
///
/// Returns the accepted position: `proposed` if the move is clear,
/// otherwise `current` unchanged. The whole move is rejected as a unit;
/// a diagonal move that fails on one axis is discarded, never
/// decomposed into a slide along the other. This keeps validation a
/// one-line call site and its behavior a testable property.
#[must_use]
pub fn validate_move(
    current: Point3<f64>,
    proposed: Point3<f64>,
    exhibits: &[Exhibit],
    bounds: &WorldBounds,
    agent_radius: f64,
) -> Point3<f64> {
    if !bounds.shrink(agent_radius).contains(&proposed) {
        trace!(
            x = proposed.x,
            z = proposed.z,
            "move rejected: outside walkable bounds"
        );
        return current;
    }
    for exhibit in exhibits {
        if exhibit.blocks(&proposed) {
            trace!(exhibit = %exhibit.name, "move rejected: inside exhibit footprint");
            return current;
        }
    }
    proposed
}

/// Whether a position is clear of bounds and footprints.
///
/// Same predicate `validate_move` applies to the proposed position;
/// useful for checking authored configurations.
#[must_use]
pub fn is_clear(
    position: &Point3<f64>,
    exhibits: &[Exhibit],
    bounds: &WorldBounds,
    agent_radius: f64,
) -> bool {
    bounds.shrink(agent_radius).contains(position) && !exhibits.iter().any(|e| e.blocks(position))
}
