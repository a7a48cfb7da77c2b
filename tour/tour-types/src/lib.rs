//! Core types for the exhibit hall tour simulation.
//!
//! This crate provides the foundational types for the tour engine:
//!
//! - [`AgentPose`] - Position, heading, and scan-arm angle of the robot
//! - [`Exhibit`] / [`ExhibitCatalog`] - The static pieces on display
//! - [`Route`] - The cyclic guided-tour waypoint list
//! - [`WaitTimeline`] - Duration/formula table for the scan dwell
//! - [`HallConfig`] - Static configuration, validated once at startup
//! - [`FrameInput`] / [`TourObservation`] - The per-frame in/out boundary
//!
//! # Design Philosophy
//!
//! These types are **pure data** plus a handful of pure formulas (the
//! wait timeline, footprint distances). They have no engine behavior.
//! They're the common language between:
//!
//! - The tour engine (tour-core)
//! - The rendering layer (reads observations, never writes)
//! - The window/UI layer (writes raw frame inputs, reads the info panel flag)
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. It can
//! be used in headless tests, replay tooling, and analysis scripts.
//!
//! # Coordinate System
//!
//! - X: across the hall (exhibits line up along X)
//! - Y: up (display height only; motion is planar)
//! - Z: depth; heading 0 faces +Z
//!
//! # Example
//!
//! ```
//! use tour_types::{AgentPose, HallConfig, WaitTimeline};
//! use nalgebra::Point3;
//!
//! let config = HallConfig::default();
//! config.validate().expect("default hall is well-formed");
//!
//! let mut pose = AgentPose::at(Point3::new(-8.0, 0.0, 2.5));
//! pose.face_towards(&config.exhibits[0].position);
//!
//! // The dwell animation is a pure function of elapsed time.
//! let timeline = WaitTimeline::default();
//! assert!((timeline.arm_angle(0.75) - 30.0).abs() < 1e-9);
//! ```

#![doc(html_root_url = "https://docs.rs/tour-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,  // Many methods can't be const due to nalgebra
    clippy::missing_errors_doc,    // Error docs added where non-obvious
    clippy::field_reassign_with_default  // Validation tests mutate defaults on purpose
)]

mod agent;
mod bounds;
mod config;
mod error;
mod exhibit;
mod input;
mod observation;
mod route;
mod timeline;

pub use agent::{AgentPose, ARM_MAX_DEG};
pub use bounds::WorldBounds;
pub use config::{
    HallConfig, LightFixture, LightingConfig, MotionConfig, ScanConfig, ScanStrategy,
};
pub use error::TourError;
pub use exhibit::{Exhibit, ExhibitCatalog, ExhibitId, ExhibitInfo};
pub use input::{ControlMode, FrameInput};
pub use observation::{ScanRay, TourObservation};
pub use route::{Route, WaypointKind};
pub use timeline::{WaitPhase, WaitTimeline};

// Re-export math types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for tour configuration operations.
pub type Result<T> = std::result::Result<T, TourError>;
