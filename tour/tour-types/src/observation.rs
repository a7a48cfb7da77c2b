//! Read-only per-frame outputs of the engine.

use crate::exhibit::ExhibitId;
use crate::input::ControlMode;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The scan ray, reported for debug visualization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanRay {
    /// Ray origin (near the arm tip).
    pub origin: Point3<f64>,
    /// Unit direction of the ray.
    pub direction: Vector3<f64>,
    /// Display length of the ray.
    pub length: f64,
}

impl ScanRay {
    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// Everything the rendering/UI layer reads each frame.
///
/// Recomputed every update; the collaborators never mutate it. The
/// scanned id is already gated (it is `None` whenever the scan is not
/// active), so consumers don't need to re-check arm angles or hold
/// windows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourObservation {
    /// Agent position.
    pub position: Point3<f64>,
    /// Agent heading in degrees (unbounded).
    pub heading_deg: f64,
    /// Arm angle in degrees, within `[0, 90]`.
    pub arm_deg: f64,
    /// Currently scanned exhibit, if the scan is active.
    pub scanned: Option<ExhibitId>,
    /// Whether the info panel should be shown.
    pub show_info_panel: bool,
    /// Per-exhibit light intensity, indexed by exhibit id.
    pub light_levels: Vec<f64>,
    /// Scan ray for debug visualization, when the arm is raised.
    pub scan_ray: Option<ScanRay>,
    /// Controller that produced this frame.
    pub mode: ControlMode,
    /// Accumulated simulation time in seconds.
    pub time: f64,
}
