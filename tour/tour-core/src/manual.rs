//! Manual control: held keys and the arm slider drive the pose.

use crate::motion::validate_move;
use nalgebra::Vector3;
use tour_types::{AgentPose, FrameInput, HallConfig};

/// Maps per-frame held inputs onto the agent pose.
///
/// The controller is stateless: every frame is a pure function of the
/// pose, the input, and the configuration. Position changes go through
/// [`validate_move`]; heading and arm angle are applied directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualController;

impl ManualController {
    /// Create a manual controller.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply one frame of manual input to the pose.
    ///
    /// Each held direction contributes `move_speed * dt` along its world
    /// axis; holding two directions moves diagonally (contributions are
    /// additive, so the diagonal is faster by √2 — as the original hall
    /// behaved). Rotation accumulates `rotation_speed_deg * dt` per held
    /// rotate flag with no normalization. The arm angle tracks the
    /// slider directly rather than integrating over time.
    pub fn apply(&self, pose: &mut AgentPose, input: &FrameInput, dt: f64, config: &HallConfig) {
        let step = config.motion.move_speed * dt;
        let mut offset = Vector3::zeros();
        if input.forward {
            offset.z += step;
        }
        if input.back {
            offset.z -= step;
        }
        if input.right {
            offset.x += step;
        }
        if input.left {
            offset.x -= step;
        }
        if offset != Vector3::zeros() {
            pose.position = validate_move(
                pose.position,
                pose.position + offset,
                &config.exhibits,
                &config.bounds,
                config.motion.agent_radius,
            );
        }

        let turn = config.motion.rotation_speed_deg * dt;
        if input.rotate_left {
            pose.heading_deg += turn;
        }
        if input.rotate_right {
            pose.heading_deg -= turn;
        }

        pose.set_arm_deg(input.arm_control_deg);
    }
}
