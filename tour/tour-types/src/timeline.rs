//! The timed arm/scan animation of an exhibit stop.
//!
//! The original dwell animation was a chain of inline floating-point
//! branches inside the frame loop. Here it is an explicit
//! duration/formula table, so the arm angle at any elapsed time is a
//! pure function testable without any engine state.

use crate::error::TourError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sub-phase of the wait dwell at a given elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaitPhase {
    /// Arm raising from 0° to the scan activation angle.
    RampUp,
    /// Arm oscillating above the activation angle; scan is active and
    /// the info overlay is shown.
    Hold,
    /// Arm lowering back to 0°; scan already cleared.
    RampDown,
    /// Dwell finished; the tour should move on.
    Complete,
}

/// Duration/formula table for the wait dwell at an exhibit stop.
///
/// The ramp-up segment is closed at its end: the arm reaches exactly
/// the activation angle at `ramp_up_end`, and the hold oscillation
/// applies strictly after.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaitTimeline {
    /// End of the ramp-up segment, seconds.
    pub ramp_up_end: f64,
    /// End of the hold segment, seconds.
    pub hold_end: f64,
    /// Total dwell duration, seconds.
    pub total: f64,
    /// Arm angle at which the scan activates, degrees.
    pub scan_angle_deg: f64,
    /// Maximum arm angle, degrees.
    pub max_angle_deg: f64,
    /// Angular rate of the hold oscillation, radians per second.
    pub oscillation_rate: f64,
}

impl Default for WaitTimeline {
    fn default() -> Self {
        Self {
            ramp_up_end: 1.5,
            hold_end: 8.5,
            total: 10.0,
            scan_angle_deg: 60.0,
            max_angle_deg: 90.0,
            oscillation_rate: 2.0,
        }
    }
}

impl WaitTimeline {
    /// Sub-phase at the given elapsed time.
    #[must_use]
    pub fn phase(&self, elapsed: f64) -> WaitPhase {
        if elapsed <= self.ramp_up_end {
            WaitPhase::RampUp
        } else if elapsed < self.hold_end {
            WaitPhase::Hold
        } else if elapsed < self.total {
            WaitPhase::RampDown
        } else {
            WaitPhase::Complete
        }
    }

    /// Whether the scan is active (hold window) at the given elapsed time.
    ///
    /// The window opens when the arm first reaches the activation angle,
    /// at exactly `ramp_up_end`.
    #[must_use]
    pub fn in_hold(&self, elapsed: f64) -> bool {
        elapsed >= self.ramp_up_end && elapsed < self.hold_end
    }

    /// Whether the dwell has run its full course.
    #[must_use]
    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.total
    }

    /// Arm angle in degrees at the given elapsed time.
    ///
    /// Piecewise: linear ramp to the activation angle, a clamped
    /// sinusoidal oscillation between activation and max during hold,
    /// then a linear ramp from max back to 0.
    #[must_use]
    pub fn arm_angle(&self, elapsed: f64) -> f64 {
        match self.phase(elapsed) {
            WaitPhase::RampUp => {
                let e = elapsed.max(0.0);
                self.scan_angle_deg * (e / self.ramp_up_end)
            }
            WaitPhase::Hold => {
                let mid = (self.scan_angle_deg + self.max_angle_deg) / 2.0;
                let amp = (self.max_angle_deg - self.scan_angle_deg) / 2.0;
                let t = elapsed - self.ramp_up_end;
                (mid + amp * (self.oscillation_rate * t).sin())
                    .clamp(self.scan_angle_deg, self.max_angle_deg)
            }
            WaitPhase::RampDown => {
                let t = (elapsed - self.hold_end) / (self.total - self.hold_end);
                self.max_angle_deg * (1.0 - t)
            }
            WaitPhase::Complete => 0.0,
        }
    }

    /// Validate breakpoint ordering and angle sanity.
    pub fn validate(&self) -> Result<(), TourError> {
        if !self.ramp_up_end.is_finite() || self.ramp_up_end <= 0.0 {
            return Err(TourError::non_positive("ramp_up_end", self.ramp_up_end));
        }
        if self.hold_end <= self.ramp_up_end {
            return Err(TourError::invalid_timeline("hold_end <= ramp_up_end"));
        }
        if self.total <= self.hold_end {
            return Err(TourError::invalid_timeline("total <= hold_end"));
        }
        if !self.scan_angle_deg.is_finite() || self.scan_angle_deg <= 0.0 {
            return Err(TourError::non_positive("scan_angle_deg", self.scan_angle_deg));
        }
        if self.max_angle_deg < self.scan_angle_deg {
            return Err(TourError::invalid_timeline("max_angle_deg < scan_angle_deg"));
        }
        if !self.oscillation_rate.is_finite() || self.oscillation_rate <= 0.0 {
            return Err(TourError::non_positive(
                "oscillation_rate",
                self.oscillation_rate,
            ));
        }
        Ok(())
    }
}
