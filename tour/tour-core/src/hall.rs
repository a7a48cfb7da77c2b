//! The per-frame context: one struct owns everything that used to be
//! scattered globals (mode flag, pose, tour phase, timers).

use crate::lighting::light_levels;
use crate::manual::ManualController;
use crate::scan::ScanDetector;
use crate::tour::{TourOrchestrator, TourPhase};
use tour_types::{
    AgentPose, ControlMode, ExhibitId, FrameInput, HallConfig, Result, TourObservation,
};
use tracing::debug;

/// The running hall: configuration plus all mutable frame state.
///
/// Exactly one controller owns the agent pose per frame, selected by
/// the mode carried in [`FrameInput`]. The rendering/UI layer drives
/// [`HallWorld::update`] once per rendered frame and reads the returned
/// [`TourObservation`]; it never mutates the world directly.
#[derive(Debug, Clone)]
pub struct HallWorld {
    config: HallConfig,
    pose: AgentPose,
    mode: ControlMode,
    manual: ManualController,
    tour: TourOrchestrator,
    detector: ScanDetector,
    time: f64,
}

impl HallWorld {
    /// Create a world from a validated configuration.
    ///
    /// This is the one place configuration errors surface; after a
    /// successful construction the frame loop is total and infallible.
    /// The agent starts on the route's first waypoint, facing +Z.
    pub fn new(config: HallConfig) -> Result<Self> {
        config.validate()?;
        // Safe after validation: the route has at least two waypoints.
        let start = config
            .route
            .waypoint(0)
            .copied()
            .unwrap_or_else(nalgebra::Point3::origin);
        let detector = ScanDetector::new(config.scan.clone());
        Ok(Self {
            config,
            pose: AgentPose::at(start),
            mode: ControlMode::Manual,
            manual: ManualController::new(),
            tour: TourOrchestrator::new(),
            detector,
            time: 0.0,
        })
    }

    /// The static configuration.
    #[must_use]
    pub fn config(&self) -> &HallConfig {
        &self.config
    }

    /// Current agent pose.
    #[must_use]
    pub fn pose(&self) -> &AgentPose {
        &self.pose
    }

    /// Current control mode.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Current tour phase (meaningful in autonomous mode).
    #[must_use]
    pub fn tour_phase(&self) -> TourPhase {
        self.tour.phase()
    }

    /// Accumulated simulation time in seconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Run one frame: mode handling, the active controller, scan
    /// detection, and lighting, in that order.
    pub fn update(&mut self, input: &FrameInput) -> TourObservation {
        // The input layer normally clamps dt, but the world is the last
        // line of defense against a rewinding clock.
        let dt = if input.dt.is_finite() {
            input.dt.max(0.0)
        } else {
            0.0
        };

        if input.mode != self.mode {
            self.switch_mode(input.mode);
        }

        match self.mode {
            ControlMode::Manual => {
                self.manual.apply(&mut self.pose, input, dt, &self.config);
            }
            ControlMode::Autonomous => {
                self.tour.advance(&mut self.pose, dt, &self.config);
            }
        }

        self.time += dt;
        self.observe()
    }

    /// Recompute the observation for the current state without stepping.
    #[must_use]
    pub fn observe(&self) -> TourObservation {
        let (scanned, active) = self.scan_state();
        let scan_ray = self
            .detector
            .is_active(&self.pose)
            .then(|| self.detector.ray(&self.pose));
        TourObservation {
            position: self.pose.position,
            heading_deg: self.pose.heading_deg,
            arm_deg: self.pose.arm_deg(),
            scanned,
            show_info_panel: scanned.is_some(),
            light_levels: light_levels(scanned, active, &self.config.lighting),
            scan_ray,
            mode: self.mode,
            time: self.time,
        }
    }

    /// Scan state from whichever controller is active.
    fn scan_state(&self) -> (Option<ExhibitId>, bool) {
        match self.mode {
            ControlMode::Manual => {
                let scanned = self.detector.detect(&self.pose, &self.config.exhibits);
                (scanned, scanned.is_some())
            }
            ControlMode::Autonomous => self.tour.scan_state(&self.config.timeline),
        }
    }

    /// Hand the pose to the other controller.
    ///
    /// The reset is deterministic regardless of when the switch lands:
    /// the arm drops to 0 and the scan clears before the new controller
    /// runs its first frame. Leaving autonomous mid-dwell abandons the
    /// interrupted stop (see [`TourOrchestrator::interrupt`]).
    fn switch_mode(&mut self, requested: ControlMode) {
        debug!(from = ?self.mode, to = ?requested, "control mode switch");
        if self.mode == ControlMode::Autonomous {
            self.tour.interrupt(&self.config.route);
        }
        self.pose.set_arm_deg(0.0);
        self.mode = requested;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use tour_types::{ScanStrategy, TourError, WaypointKind};

    fn world() -> HallWorld {
        HallWorld::new(HallConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = HallConfig::default();
        config.route = tour_types::Route::new(vec![Point3::origin()]);
        let err = HallWorld::new(config).unwrap_err();
        assert_eq!(err, TourError::RouteTooShort { len: 1 });
    }

    #[test]
    fn test_starts_on_first_waypoint_in_manual() {
        let world = world();
        assert_eq!(world.mode(), ControlMode::Manual);
        assert_relative_eq!(world.pose().position.x, -8.0, epsilon = 1e-12);
        assert_relative_eq!(world.pose().position.z, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_manual_frame_moves_and_reports() {
        let mut world = world();
        let mut input = FrameInput::idle(0.25);
        input.right = true;

        let obs = world.update(&input);
        assert_relative_eq!(obs.position.x, -7.5, epsilon = 1e-12);
        assert!(obs.scanned.is_none());
        assert!(!obs.show_info_panel);
        assert!(obs.scan_ray.is_none());
        assert_relative_eq!(obs.time, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_manual_ray_scan_lights_exhibit() {
        let mut world = HallWorld::new(HallConfig::default().with_strategy(ScanStrategy::Ray)).unwrap();

        // Stand south of the vase and face it: exhibit 1 at (-3, _, 0).
        let mut warp = FrameInput::idle(0.0);
        world.update(&warp);
        world.pose.position = Point3::new(-3.0, 0.0, 2.0);
        world.pose.heading_deg = 180.0;
        warp.arm_control_deg = 75.0;

        let obs = world.update(&warp);
        assert_eq!(obs.scanned, Some(ExhibitId::new(1)));
        assert!(obs.show_info_panel);
        assert!(obs.scan_ray.is_some());
        let lighting = &world.config().lighting;
        assert_relative_eq!(obs.light_levels[1], lighting.highlight[1], epsilon = 1e-12);
        assert_relative_eq!(obs.light_levels[0], lighting.baseline, epsilon = 1e-12);
    }

    #[test]
    fn test_lowered_arm_clears_scan_and_ray() {
        let mut world = world();
        world.pose.position = Point3::new(-3.0, 0.0, 2.0);
        world.pose.heading_deg = 180.0;

        let obs = world.update(&FrameInput::idle(0.016).arm(30.0));
        assert!(obs.scanned.is_none());
        assert!(obs.scan_ray.is_none());
        let baseline = world.config().lighting.baseline;
        assert!(obs.light_levels.iter().all(|&l| l == baseline));
    }

    #[test]
    fn test_autonomous_owns_pose() {
        let mut world = world();
        let auto = FrameInput::idle(0.1).mode(ControlMode::Autonomous);

        // Held manual keys must be ignored while the tour drives.
        let mut input = auto;
        input.left = true;
        input.arm_control_deg = 90.0;

        let before = world.pose().position;
        let obs = world.update(&input);
        // The tour moved the agent (towards waypoint 0 or beyond), the
        // manual flags did nothing: arm stays down while travelling.
        assert_eq!(obs.mode, ControlMode::Autonomous);
        assert_relative_eq!(obs.arm_deg, 0.0, epsilon = 1e-12);
        let _ = before;
    }

    #[test]
    fn mode_switch_mid_wait_resets() {
        let mut world = world();
        let auto = FrameInput::idle(0.1).mode(ControlMode::Autonomous);

        // Drive the tour until it dwells at the first stop, then into
        // the hold window (elapsed >= 1.5).
        for _ in 0..2000 {
            world.update(&auto);
            if let TourPhase::Waiting { elapsed, .. } = world.tour_phase() {
                if elapsed >= 3.0 {
                    break;
                }
            }
        }
        let TourPhase::Waiting { target, elapsed } = world.tour_phase() else {
            panic!("tour never reached a dwell");
        };
        assert!(elapsed >= 3.0);
        assert!(world.observe().scanned.is_some());
        assert!(world.pose().arm_deg() >= 60.0);

        // Toggle to manual mid-hold: deterministic reset.
        let obs = world.update(&FrameInput::idle(0.016));
        assert_eq!(obs.mode, ControlMode::Manual);
        assert_relative_eq!(obs.arm_deg, 0.0, epsilon = 1e-12);
        assert!(obs.scanned.is_none());
        assert!(!obs.show_info_panel);

        // The interrupted stop was abandoned: returning to autonomous
        // resumes towards the next waypoint.
        world.update(&auto);
        assert_eq!(world.tour_phase(), TourPhase::Travelling { target: target + 1 });
    }

    #[test]
    fn test_bounds_invariant_over_random_walk() {
        let mut world = world();
        let shrunk = world.config().bounds.shrink(world.config().motion.agent_radius);

        // A crude deterministic walk that hammers the walls.
        let mut input = FrameInput::idle(0.05);
        for i in 0..4000 {
            input.forward = i % 3 == 0;
            input.back = i % 5 == 0;
            input.left = i % 2 == 0;
            input.right = i % 7 == 0;
            let obs = world.update(&input);
            assert!(
                shrunk.contains(&obs.position),
                "escaped bounds at frame {i}: {:?}",
                obs.position
            );
        }
    }

    #[test]
    fn test_zero_dt_frame_is_stable() {
        let mut world = world();
        let before = world.observe();
        let after = world.update(&FrameInput::idle(0.0));
        assert_eq!(before.position, after.position);
        assert_eq!(before.time, after.time);
    }

    #[test]
    fn test_route_default_shape() {
        let world = world();
        let route = &world.config().route;
        assert_eq!(route.kind(0), Some(WaypointKind::Transit));
        assert_eq!(route.kind(6), Some(WaypointKind::Transit));
    }
}
