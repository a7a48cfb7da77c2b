//! Per-frame input: what the window/UI collaborator writes into the core.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which controller owns the agent pose this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControlMode {
    /// Pose follows held keys and the arm slider.
    #[default]
    Manual,
    /// Pose follows the guided-tour script.
    Autonomous,
}

/// Raw inputs for one frame.
///
/// Direction flags are *held* states, not edges; the window layer polls
/// key state each frame and fills this in. Movement flags are along
/// world axes (forward = +Z), matching how the hall is laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameInput {
    /// Frame delta time in seconds, non-negative.
    pub dt: f64,
    /// Move towards +Z.
    pub forward: bool,
    /// Move towards -Z.
    pub back: bool,
    /// Move towards -X.
    pub left: bool,
    /// Move towards +X.
    pub right: bool,
    /// Increase heading.
    pub rotate_left: bool,
    /// Decrease heading.
    pub rotate_right: bool,
    /// Desired arm angle in degrees, driven by a UI slider (manual mode).
    pub arm_control_deg: f64,
    /// Requested control mode.
    pub mode: ControlMode,
}

impl FrameInput {
    /// Create an idle frame with the given delta time.
    ///
    /// Negative or non-finite deltas are clamped to 0, so a bad clock
    /// read stalls the frame instead of rewinding the simulation.
    #[must_use]
    pub fn idle(dt: f64) -> Self {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        Self {
            dt,
            forward: false,
            back: false,
            left: false,
            right: false,
            rotate_left: false,
            rotate_right: false,
            arm_control_deg: 0.0,
            mode: ControlMode::Manual,
        }
    }

    /// Request a control mode.
    #[must_use]
    pub fn mode(mut self, mode: ControlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the arm slider value.
    #[must_use]
    pub fn arm(mut self, angle_deg: f64) -> Self {
        self.arm_control_deg = angle_deg;
        self
    }

    /// Whether any movement flag is held.
    #[must_use]
    pub fn any_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}
