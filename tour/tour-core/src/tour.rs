//! The autonomous guided tour: a two-state frame-driven machine.
//!
//! The orchestrator travels the route, dwells at exhibit stops, and
//! drives the arm through the wait timeline. Every transition is a
//! deterministic function of elapsed time and position; once the
//! configuration has validated, nothing here can fail.

use crate::motion::validate_move;
use tour_types::{AgentPose, ExhibitId, HallConfig, Route, WaitPhase, WaitTimeline, WaypointKind};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current phase of the tour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TourPhase {
    /// Heading towards the waypoint at `target`.
    Travelling {
        /// Route index of the waypoint being approached.
        target: usize,
    },
    /// Dwelling at the stop waypoint `target`.
    Waiting {
        /// Route index of the stop being dwelt at.
        target: usize,
        /// Seconds since entering the dwell; monotonically non-decreasing
        /// until the phase exits.
        elapsed: f64,
    },
}

/// Drives the agent around the route in autonomous mode.
#[derive(Debug, Clone)]
pub struct TourOrchestrator {
    phase: TourPhase,
    /// Exhibit recorded at the current stop; exposed only during the
    /// hold window, cleared on ramp-down.
    pending: Option<ExhibitId>,
}

impl Default for TourOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl TourOrchestrator {
    /// Create an orchestrator heading for the first waypoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: TourPhase::Travelling { target: 0 },
            pending: None,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> TourPhase {
        self.phase
    }

    /// Scan state for this frame: the scanned exhibit and whether the
    /// scan (and the info overlay) is active.
    ///
    /// The exhibit is reported only during the hold window, so the
    /// "no scan below the activation angle" invariant holds for the
    /// tour as well: the hold window opens exactly when the ramp
    /// reaches the activation angle.
    #[must_use]
    pub fn scan_state(&self, timeline: &WaitTimeline) -> (Option<ExhibitId>, bool) {
        match self.phase {
            TourPhase::Waiting { elapsed, .. } if timeline.in_hold(elapsed) => {
                (self.pending, true)
            }
            _ => (None, false),
        }
    }

    /// Advance the tour by one frame.
    pub fn advance(&mut self, pose: &mut AgentPose, dt: f64, config: &HallConfig) {
        match self.phase {
            TourPhase::Travelling { target } => self.travel(pose, dt, target, config),
            TourPhase::Waiting { target, elapsed } => {
                self.dwell(pose, target, elapsed + dt, config);
            }
        }
    }

    /// Abandon the current stop when the tour loses control of the pose.
    ///
    /// A dwell interrupted by a mode switch is treated as completed: the
    /// phase collapses to travelling towards the next waypoint, so
    /// re-entering autonomous mode resumes the tour rather than
    /// restarting the interrupted dwell. Travelling is unaffected.
    pub fn interrupt(&mut self, route: &Route) {
        if let TourPhase::Waiting { target, .. } = self.phase {
            let next = route.next_index(target);
            debug!(from = target, to = next, "tour interrupted mid-dwell");
            self.phase = TourPhase::Travelling { target: next };
        }
        self.pending = None;
    }

    fn travel(&mut self, pose: &mut AgentPose, dt: f64, target: usize, config: &HallConfig) {
        let Some(waypoint) = config.route.waypoint(target) else {
            return;
        };

        if pose.is_near(waypoint, config.motion.arrival_epsilon) {
            match config.route.kind(target) {
                Some(WaypointKind::Transit) => {
                    let next = config.route.next_index(target);
                    debug!(target, next, "transit waypoint reached");
                    pose.set_arm_deg(0.0);
                    self.phase = TourPhase::Travelling { target: next };
                }
                Some(WaypointKind::Stop(id)) => {
                    debug!(target, exhibit = id.index(), "exhibit stop reached");
                    if let Some(exhibit) = config.exhibits.get(id.index()) {
                        pose.face_towards(&exhibit.position);
                    }
                    self.pending = Some(id);
                    self.phase = TourPhase::Waiting {
                        target,
                        elapsed: 0.0,
                    };
                }
                None => {}
            }
            return;
        }

        let to_target = waypoint - pose.position;
        let distance = to_target.norm();
        if distance <= f64::EPSILON {
            return;
        }
        let direction = to_target / distance;
        // Face the direction of motion, even on a frame whose step is
        // rejected: heading is intent, position is validated.
        pose.face_towards(waypoint);
        let proposed = pose.position + direction * config.motion.move_speed * dt;
        pose.position = validate_move(
            pose.position,
            proposed,
            &config.exhibits,
            &config.bounds,
            config.motion.agent_radius,
        );
    }

    fn dwell(&mut self, pose: &mut AgentPose, target: usize, elapsed: f64, config: &HallConfig) {
        if config.timeline.is_complete(elapsed) {
            let next = config.route.next_index(target);
            debug!(target, next, "dwell complete, resuming tour");
            pose.set_arm_deg(0.0);
            self.pending = None;
            self.phase = TourPhase::Travelling { target: next };
            return;
        }

        pose.set_arm_deg(config.timeline.arm_angle(elapsed));
        if config.timeline.phase(elapsed) == WaitPhase::RampDown {
            self.pending = None;
        }
        self.phase = TourPhase::Waiting { target, elapsed };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn config() -> HallConfig {
        HallConfig::default()
    }

    /// Place the agent on top of the given stop and run one frame so the
    /// orchestrator enters `Waiting` there.
    fn enter_stop(tour: &mut TourOrchestrator, pose: &mut AgentPose, stop: usize, config: &HallConfig) {
        tour.phase = TourPhase::Travelling { target: stop };
        pose.position = *config.route.waypoint(stop).unwrap();
        tour.advance(pose, 0.0, config);
        assert!(matches!(tour.phase(), TourPhase::Waiting { target, .. } if target == stop));
    }

    #[test]
    fn test_travel_steps_towards_target() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::at(Point3::new(-8.0, 0.0, 4.0));

        tour.advance(&mut pose, 0.1, &config);

        // Moving towards waypoint 0 at (-8, 0, 2.5): straight down -Z.
        assert_relative_eq!(pose.position.x, -8.0, epsilon = 1e-9);
        assert_relative_eq!(pose.position.z, 3.8, epsilon = 1e-9);
        // Facing the direction of motion.
        assert_relative_eq!(pose.heading_deg, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transit_advances_without_wait() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::at(*config.route.waypoint(0).unwrap());

        tour.advance(&mut pose, 0.016, &config);

        assert_eq!(tour.phase(), TourPhase::Travelling { target: 1 });
        assert_eq!(pose.arm_deg(), 0.0);
    }

    #[test]
    fn test_stop_enters_waiting_and_faces_exhibit() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::origin();

        enter_stop(&mut tour, &mut pose, 1, &config);

        assert!(matches!(
            tour.phase(),
            TourPhase::Waiting { target: 1, elapsed } if elapsed == 0.0
        ));
        // Stop 1 is at (-6, 0, 1.8); exhibit 0 at (-6, _, 0): facing -Z.
        assert_relative_eq!(pose.heading_deg.abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dwell_timing_scenario() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::origin();
        enter_stop(&mut tour, &mut pose, 1, &config);

        assert_eq!(pose.arm_deg(), 0.0);

        tour.advance(&mut pose, 0.75, &config);
        assert_relative_eq!(pose.arm_deg(), 30.0, epsilon = 1e-9);

        tour.advance(&mut pose, 0.75, &config);
        assert_relative_eq!(pose.arm_deg(), 60.0, epsilon = 1e-9);

        // Hold window: arm stays within [60, 90], scan active.
        tour.advance(&mut pose, 2.0, &config);
        assert!((60.0..=90.0).contains(&pose.arm_deg()));
        let (scanned, active) = tour.scan_state(&config.timeline);
        assert_eq!(scanned, Some(ExhibitId::new(0)));
        assert!(active);

        // Ramp-down: scan cleared.
        tour.advance(&mut pose, 5.5, &config);
        let (scanned, active) = tour.scan_state(&config.timeline);
        assert!(scanned.is_none());
        assert!(!active);

        // Dwell complete at elapsed 10: arm reset, target advanced.
        tour.advance(&mut pose, 1.0, &config);
        assert_eq!(tour.phase(), TourPhase::Travelling { target: 2 });
        assert_eq!(pose.arm_deg(), 0.0);
    }

    #[test]
    fn test_elapsed_monotonic_within_dwell() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::origin();
        enter_stop(&mut tour, &mut pose, 1, &config);

        let mut last = 0.0;
        for _ in 0..200 {
            tour.advance(&mut pose, 0.03, &config);
            match tour.phase() {
                TourPhase::Waiting { elapsed, .. } => {
                    assert!(elapsed >= last);
                    last = elapsed;
                }
                TourPhase::Travelling { .. } => break,
            }
        }
    }

    #[test]
    fn test_scan_inactive_before_hold() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::origin();
        enter_stop(&mut tour, &mut pose, 1, &config);

        tour.advance(&mut pose, 1.0, &config);
        // Ramp-up: pending exhibit exists internally but is not exposed.
        let (scanned, active) = tour.scan_state(&config.timeline);
        assert!(scanned.is_none());
        assert!(!active);
        assert!(pose.arm_deg() < 60.0);
    }

    #[test]
    fn test_interrupt_mid_dwell_advances_target() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        let mut pose = AgentPose::origin();
        enter_stop(&mut tour, &mut pose, 3, &config);
        tour.advance(&mut pose, 3.0, &config);

        tour.interrupt(&config.route);

        assert_eq!(tour.phase(), TourPhase::Travelling { target: 4 });
        let (scanned, active) = tour.scan_state(&config.timeline);
        assert!(scanned.is_none());
        assert!(!active);
    }

    #[test]
    fn test_interrupt_while_travelling_is_noop() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        tour.interrupt(&config.route);
        assert_eq!(tour.phase(), TourPhase::Travelling { target: 0 });
    }

    #[test]
    fn test_route_wraps_modulo_length() {
        let config = config();
        let mut tour = TourOrchestrator::new();
        // Park on the last waypoint (transit): target should wrap to 0.
        let mut pose = AgentPose::at(*config.route.waypoint(6).unwrap());
        tour.phase = TourPhase::Travelling { target: 6 };

        tour.advance(&mut pose, 0.016, &config);
        assert_eq!(tour.phase(), TourPhase::Travelling { target: 0 });
    }
}
