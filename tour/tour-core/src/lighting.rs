//! Scan-driven exhibit lighting.
//!
//! Only the per-exhibit levels react to the scan. The always-on rig
//! (ambient level and fixed fixtures) lives in [`LightingConfig`] and
//! passes through to the renderer unchanged, whatever the scan state.

use tour_types::{ExhibitId, LightingConfig};

/// Per-exhibit light intensities for this frame, indexed by exhibit id.
///
/// Every exhibit sits at the baseline; when a scan is active, the
/// scanned exhibit is raised to its entry in the highlight table. The
/// table is per-exhibit on purpose — the hall was tuned with uneven
/// highlights and that stays configuration, not code.
#[must_use]
pub fn light_levels(
    scanned: Option<ExhibitId>,
    scan_active: bool,
    lighting: &LightingConfig,
) -> Vec<f64> {
    let mut levels = vec![lighting.baseline; lighting.highlight.len()];
    if !scan_active {
        return levels;
    }
    if let Some(id) = scanned {
        if let Some(highlight) = lighting.highlight.get(id.index()) {
            levels[id.index()] = *highlight;
        }
    }
    levels
}
