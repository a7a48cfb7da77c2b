//! Scan detection: which exhibit is the robot examining?
//!
//! Two strategies, selected by configuration:
//!
//! - **Proximity**: the nearest exhibit within a fixed range.
//! - **Ray**: a forward ray cast from the raised arm; the nearest
//!   exhibit along the ray whose perpendicular distance to the ray line
//!   is under threshold.
//!
//! Both are gated on the arm being at or above the activation angle, so
//! a lowered arm never reports a scan.

use tour_types::{AgentPose, Exhibit, ExhibitId, ScanConfig, ScanRay, ScanStrategy};

/// Selects the scanned exhibit in manual mode.
#[derive(Debug, Clone)]
pub struct ScanDetector {
    config: ScanConfig,
}

impl ScanDetector {
    /// Create a detector with the given scan parameters.
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configured strategy.
    #[must_use]
    pub fn strategy(&self) -> ScanStrategy {
        self.config.strategy
    }

    /// Whether the arm is raised far enough for scanning.
    #[must_use]
    pub fn is_active(&self, pose: &AgentPose) -> bool {
        pose.arm_deg() >= self.config.activation_angle_deg
    }

    /// The exhibit currently being scanned, if any.
    ///
    /// Returns `None` whenever the arm is below the activation angle,
    /// regardless of strategy. At most one exhibit is selected per
    /// evaluation.
    #[must_use]
    pub fn detect(&self, pose: &AgentPose, exhibits: &[Exhibit]) -> Option<ExhibitId> {
        if !self.is_active(pose) {
            return None;
        }
        match self.config.strategy {
            ScanStrategy::Proximity => self.detect_proximity(pose, exhibits),
            ScanStrategy::Ray => self.detect_ray(pose, exhibits),
        }
    }

    /// The scan ray for the current pose, used for debug visualization
    /// and by the ray strategy itself.
    ///
    /// Origin sits a fixed local offset from the agent: forward along
    /// the heading plus the arm mount height.
    #[must_use]
    pub fn ray(&self, pose: &AgentPose) -> ScanRay {
        let forward = pose.forward();
        let origin = pose.position
            + forward * self.config.ray_forward_offset
            + nalgebra::Vector3::y() * self.config.ray_height_offset;
        ScanRay {
            origin,
            direction: forward,
            length: self.config.ray_length,
        }
    }

    fn detect_proximity(&self, pose: &AgentPose, exhibits: &[Exhibit]) -> Option<ExhibitId> {
        let mut best: Option<(f64, ExhibitId)> = None;
        for (index, exhibit) in exhibits.iter().enumerate() {
            let distance = exhibit.ground_distance(&pose.position);
            if distance >= self.config.proximity_range {
                continue;
            }
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, ExhibitId::new(index)));
            }
        }
        best.map(|(_, id)| id)
    }

    fn detect_ray(&self, pose: &AgentPose, exhibits: &[Exhibit]) -> Option<ExhibitId> {
        let ray = self.ray(pose);
        let mut best: Option<(f64, ExhibitId)> = None;
        for (index, exhibit) in exhibits.iter().enumerate() {
            let to_exhibit = exhibit.position - ray.origin;
            let proj = to_exhibit.dot(&ray.direction);
            // Behind the ray origin.
            if proj <= 0.0 {
                continue;
            }
            let perpendicular = (to_exhibit - ray.direction * proj).norm();
            if perpendicular >= self.config.ray_perpendicular_threshold {
                continue;
            }
            if best.is_none_or(|(p, _)| proj < p) {
                best = Some((proj, ExhibitId::new(index)));
            }
        }
        best.map(|(_, id)| id)
    }
}
