//! Static configuration for the hall and the tour.
//!
//! Everything the engine consumes as fixed data lives here: floor
//! bounds, exhibits, the route, speeds and thresholds, the wait
//! timeline, and the lighting tables. `HallConfig::validate` is the
//! one-time startup check; after it passes, the frame loop cannot fail.

use crate::bounds::WorldBounds;
use crate::error::TourError;
use crate::exhibit::Exhibit;
use crate::route::Route;
use crate::timeline::WaitTimeline;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Movement and collision parameters for the agent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionConfig {
    /// Translation speed in meters per second.
    pub move_speed: f64,
    /// Rotation speed in degrees per second (manual mode).
    pub rotation_speed_deg: f64,
    /// Agent collision radius; the walkable area is the floor shrunk by this.
    pub agent_radius: f64,
    /// Distance below which a waypoint counts as reached.
    pub arrival_epsilon: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            rotation_speed_deg: 90.0,
            agent_radius: 0.5,
            arrival_epsilon: 0.2,
        }
    }
}

impl MotionConfig {
    /// Validate that every parameter is positive and finite.
    pub fn validate(&self) -> Result<(), TourError> {
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("rotation_speed_deg", self.rotation_speed_deg),
            ("agent_radius", self.agent_radius),
            ("arrival_epsilon", self.arrival_epsilon),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TourError::non_positive(name, value));
            }
        }
        Ok(())
    }
}

/// Which exhibit-selection algorithm manual mode runs.
///
/// Both strategies existed in the original hall; keeping the choice as
/// an explicit variant lets either be tested and composed deliberately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanStrategy {
    /// Nearest exhibit within `proximity_range` of the agent.
    Proximity,
    /// Forward ray from the arm; nearest exhibit along the ray within
    /// the perpendicular threshold.
    #[default]
    Ray,
}

/// Scan detection parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Active detection strategy for manual mode.
    pub strategy: ScanStrategy,
    /// Arm angle in degrees at which scanning activates.
    pub activation_angle_deg: f64,
    /// Selection range for [`ScanStrategy::Proximity`].
    pub proximity_range: f64,
    /// Maximum perpendicular distance from the ray line for
    /// [`ScanStrategy::Ray`] candidates.
    pub ray_perpendicular_threshold: f64,
    /// Ray origin offset along the agent's forward vector.
    pub ray_forward_offset: f64,
    /// Ray origin offset above the floor (the arm's mount height).
    pub ray_height_offset: f64,
    /// Reported ray length for debug visualization.
    pub ray_length: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::Ray,
            activation_angle_deg: 60.0,
            proximity_range: 2.0,
            ray_perpendicular_threshold: 1.0,
            ray_forward_offset: 0.3,
            ray_height_offset: 0.6,
            ray_length: 6.0,
        }
    }
}

impl ScanConfig {
    /// Validate that thresholds are positive and finite.
    ///
    /// The origin offsets may legitimately be zero, so only the
    /// selection thresholds and ray length are checked.
    pub fn validate(&self) -> Result<(), TourError> {
        for (name, value) in [
            ("activation_angle_deg", self.activation_angle_deg),
            ("proximity_range", self.proximity_range),
            (
                "ray_perpendicular_threshold",
                self.ray_perpendicular_threshold,
            ),
            ("ray_length", self.ray_length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TourError::non_positive(name, value));
            }
        }
        if !self.ray_forward_offset.is_finite() || !self.ray_height_offset.is_finite() {
            return Err(TourError::invalid_config("ray origin offset is not finite"));
        }
        Ok(())
    }
}

/// An always-on light in the hall, independent of scan state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightFixture {
    /// Fixture position.
    pub position: Point3<f64>,
    /// Fixture intensity, passed through unchanged every frame.
    pub intensity: f64,
}

/// Per-exhibit illumination tables.
///
/// `highlight` is deliberately a per-exhibit table rather than one
/// constant: the original scene lit two of the five exhibits less
/// strongly, and that tuning is preserved as configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightingConfig {
    /// Intensity of every non-scanned exhibit.
    pub baseline: f64,
    /// Intensity of the scanned exhibit, indexed by exhibit id.
    pub highlight: Vec<f64>,
    /// Ambient light level, scan-independent.
    pub ambient: f64,
    /// Always-on fixtures, scan-independent.
    pub fixtures: Vec<LightFixture>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            baseline: 0.6,
            // Exhibits 2 and 4 are smaller pieces; the scene was tuned
            // with a softer highlight on them.
            highlight: vec![2.5, 2.5, 1.8, 2.5, 1.8],
            ambient: 0.4,
            fixtures: vec![LightFixture {
                position: Point3::new(0.0, 3.0, 3.0),
                intensity: 1.0,
            }],
        }
    }
}

impl LightingConfig {
    /// Validate intensities against the hall's exhibit count.
    pub fn validate(&self, exhibit_count: usize) -> Result<(), TourError> {
        if self.highlight.len() != exhibit_count {
            return Err(TourError::HighlightTableMismatch {
                highlights: self.highlight.len(),
                exhibits: exhibit_count,
            });
        }
        let intensities = self
            .highlight
            .iter()
            .chain(self.fixtures.iter().map(|f| &f.intensity))
            .chain([&self.baseline, &self.ambient]);
        for value in intensities {
            if !value.is_finite() || *value < 0.0 {
                return Err(TourError::invalid_config(format!(
                    "light intensity {value} must be finite and non-negative"
                )));
            }
        }
        Ok(())
    }
}

/// Complete static configuration of the hall and tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HallConfig {
    /// Walkable floor rectangle.
    pub bounds: WorldBounds,
    /// Exhibits, in id order.
    pub exhibits: Vec<Exhibit>,
    /// The cyclic tour route.
    pub route: Route,
    /// Movement and collision parameters.
    pub motion: MotionConfig,
    /// Scan detection parameters.
    pub scan: ScanConfig,
    /// Wait dwell timing and arm formulas.
    pub timeline: WaitTimeline,
    /// Illumination tables.
    pub lighting: LightingConfig,
}

impl Default for HallConfig {
    /// The five-exhibit hall the demo ships with.
    fn default() -> Self {
        let exhibits = vec![
            Exhibit::new("Marble Bust", Point3::new(-6.0, 1.1, 0.0), 0.9),
            Exhibit::new("Terracotta Vase", Point3::new(-3.0, 1.0, 0.0), 0.9),
            Exhibit::new("Amphora", Point3::new(0.0, 0.52, 0.0), 1.2),
            Exhibit::new("Bronze Figure", Point3::new(3.0, 1.1, 0.0), 0.9),
            Exhibit::new("Stone Relief", Point3::new(6.0, 0.4, 0.0), 1.2),
        ];
        let route = Route::new(vec![
            Point3::new(-8.0, 0.0, 2.5),
            Point3::new(-6.0, 0.0, 1.8),
            Point3::new(-3.0, 0.0, 1.8),
            Point3::new(0.0, 0.0, 1.8),
            Point3::new(3.0, 0.0, 1.8),
            Point3::new(6.0, 0.0, 1.8),
            Point3::new(8.0, 0.0, 2.5),
        ]);
        Self {
            bounds: WorldBounds::new(-10.0, 10.0, -5.0, 5.0),
            exhibits,
            route,
            motion: MotionConfig::default(),
            scan: ScanConfig::default(),
            timeline: WaitTimeline::default(),
            lighting: LightingConfig::default(),
        }
    }
}

impl HallConfig {
    /// Set the scan strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.scan.strategy = strategy;
        self
    }

    /// Set the movement speed.
    #[must_use]
    pub fn with_move_speed(mut self, speed: f64) -> Self {
        self.motion.move_speed = speed;
        self
    }

    /// Replace the route.
    #[must_use]
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    /// Number of exhibits in the hall.
    #[must_use]
    pub fn exhibit_count(&self) -> usize {
        self.exhibits.len()
    }

    /// Validate the whole configuration.
    ///
    /// Called once by the engine before the frame loop; a passing config
    /// guarantees every later per-frame update is total.
    pub fn validate(&self) -> Result<(), TourError> {
        if !self.bounds.is_valid() {
            return Err(TourError::invalid_config("bounds rectangle is degenerate"));
        }
        self.motion.validate()?;
        if !self.bounds.shrink(self.motion.agent_radius).is_valid() {
            return Err(TourError::invalid_config(
                "agent_radius leaves no walkable floor",
            ));
        }
        for exhibit in &self.exhibits {
            if !exhibit.collision_radius.is_finite() || exhibit.collision_radius <= 0.0 {
                return Err(TourError::non_positive(
                    "collision_radius",
                    exhibit.collision_radius,
                ));
            }
        }
        self.route.validate(self.exhibits.len())?;
        self.scan.validate()?;
        self.timeline.validate()?;
        self.lighting.validate(self.exhibits.len())?;
        Ok(())
    }
}
