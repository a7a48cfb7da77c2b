//! Agent pose: position, heading, and scan-arm angle.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum scan-arm angle in degrees.
pub const ARM_MAX_DEG: f64 = 90.0;

/// Pose of the mobile agent (the tour robot).
///
/// The heading is in degrees and deliberately unbounded: rotation input
/// accumulates without wraparound, matching how the hall's camera and
/// model matrices consume it. Heading 0 faces +Z; positive headings
/// turn towards +X (so `forward() == (sin θ, 0, cos θ)`).
///
/// The arm angle is kept private so the `[0, 90]` range can be enforced
/// at the single mutation point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentPose {
    /// Position in the hall. The agent travels in the ground (XZ) plane.
    pub position: Point3<f64>,
    /// Heading in degrees, unbounded (no wraparound guarantee).
    pub heading_deg: f64,
    /// Scan-arm angle in degrees, clamped to `[0, ARM_MAX_DEG]`.
    arm_deg: f64,
}

impl AgentPose {
    /// Create a pose at the given position, facing +Z, arm lowered.
    #[must_use]
    pub fn at(position: Point3<f64>) -> Self {
        Self {
            position,
            heading_deg: 0.0,
            arm_deg: 0.0,
        }
    }

    /// Create a pose at the origin, facing +Z, arm lowered.
    #[must_use]
    pub fn origin() -> Self {
        Self::at(Point3::origin())
    }

    /// Current scan-arm angle in degrees, always within `[0, 90]`.
    #[must_use]
    pub fn arm_deg(&self) -> f64 {
        self.arm_deg
    }

    /// Set the scan-arm angle, clamping into `[0, ARM_MAX_DEG]`.
    ///
    /// Non-finite inputs are treated as 0 (arm lowered).
    pub fn set_arm_deg(&mut self, angle_deg: f64) {
        self.arm_deg = if angle_deg.is_finite() {
            angle_deg.clamp(0.0, ARM_MAX_DEG)
        } else {
            0.0
        };
    }

    /// Unit forward vector in the ground plane for the current heading.
    #[must_use]
    pub fn forward(&self) -> Vector3<f64> {
        let rad = self.heading_deg.to_radians();
        Vector3::new(rad.sin(), 0.0, rad.cos())
    }

    /// Rotate in place to face a target point, via `atan2(dx, dz)`.
    ///
    /// A target coincident with the agent in the ground plane leaves the
    /// heading unchanged.
    pub fn face_towards(&mut self, target: &Point3<f64>) {
        let dx = target.x - self.position.x;
        let dz = target.z - self.position.z;
        if dx == 0.0 && dz == 0.0 {
            return;
        }
        self.heading_deg = dx.atan2(dz).to_degrees();
    }

    /// Distance to a point in the ground (XZ) plane, ignoring height.
    #[must_use]
    pub fn ground_distance(&self, target: &Point3<f64>) -> f64 {
        let dx = target.x - self.position.x;
        let dz = target.z - self.position.z;
        dx.hypot(dz)
    }

    /// Whether the agent is within `threshold` of a target in the ground plane.
    #[must_use]
    pub fn is_near(&self, target: &Point3<f64>, threshold: f64) -> bool {
        self.ground_distance(target) < threshold
    }
}

impl Default for AgentPose {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arm_clamped() {
        let mut pose = AgentPose::origin();
        pose.set_arm_deg(120.0);
        assert_eq!(pose.arm_deg(), 90.0);
        pose.set_arm_deg(-15.0);
        assert_eq!(pose.arm_deg(), 0.0);
        pose.set_arm_deg(f64::NAN);
        assert_eq!(pose.arm_deg(), 0.0);
        pose.set_arm_deg(45.0);
        assert_eq!(pose.arm_deg(), 45.0);
    }

    #[test]
    fn test_forward_at_zero_heading_is_plus_z() {
        let pose = AgentPose::origin();
        let fwd = pose.forward();
        assert_relative_eq!(fwd.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fwd.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_at_ninety_is_plus_x() {
        let mut pose = AgentPose::origin();
        pose.heading_deg = 90.0;
        let fwd = pose.forward();
        assert_relative_eq!(fwd.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fwd.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_towards() {
        let mut pose = AgentPose::origin();
        pose.face_towards(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(pose.heading_deg, 90.0, epsilon = 1e-12);

        pose.face_towards(&Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(pose.heading_deg, 0.0, epsilon = 1e-12);

        // Coincident target keeps the heading.
        pose.heading_deg = 42.0;
        pose.face_towards(&Point3::new(0.0, 5.0, 0.0));
        assert_relative_eq!(pose.heading_deg, 42.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ground_distance_ignores_height() {
        let pose = AgentPose::origin();
        let d = pose.ground_distance(&Point3::new(3.0, 10.0, 4.0));
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);
        assert!(pose.is_near(&Point3::new(0.0, 99.0, 0.1), 0.2));
    }

    #[test]
    fn test_heading_unbounded() {
        let mut pose = AgentPose::origin();
        pose.heading_deg += 720.0 + 45.0;
        let fwd = pose.forward();
        assert_relative_eq!(fwd.x, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(fwd.z, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }
}
