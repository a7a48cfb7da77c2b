//! Error types for tour configuration and setup.

use thiserror::Error;

/// Errors that can occur while validating or running a tour.
///
/// All of these are static-configuration failures caught before the
/// frame loop starts; a running tour never produces an error (rejected
/// moves and absent scans are normal outcomes, not errors).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TourError {
    /// Route has fewer than two waypoints.
    #[error("route too short: {len} waypoints (need at least 2)")]
    RouteTooShort {
        /// Number of waypoints supplied.
        len: usize,
    },

    /// Exhibit-stop waypoints don't map 1:1 onto exhibits.
    #[error("route has {stops} exhibit stops but hall has {exhibits} exhibits")]
    StopCountMismatch {
        /// Number of stop waypoints (route length minus the two transit points).
        stops: usize,
        /// Number of exhibits in the hall.
        exhibits: usize,
    },

    /// Highlight table length doesn't match the exhibit count.
    #[error("lighting highlight table has {highlights} entries for {exhibits} exhibits")]
    HighlightTableMismatch {
        /// Entries in the highlight table.
        highlights: usize,
        /// Number of exhibits in the hall.
        exhibits: usize,
    },

    /// A threshold, speed, or radius that must be positive is not.
    #[error("invalid {name}: {value} (must be positive and finite)")]
    NonPositiveParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Wait timeline breakpoints are not strictly increasing.
    #[error("invalid wait timeline: {reason}")]
    InvalidTimeline {
        /// Description of the ordering violation.
        reason: String,
    },

    /// Invalid exhibit ID referenced.
    #[error("invalid exhibit ID: {0}")]
    InvalidExhibitId(usize),

    /// Catch-all invalid configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl TourError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an invalid timeline error.
    #[must_use]
    pub fn invalid_timeline(reason: impl Into<String>) -> Self {
        Self::InvalidTimeline {
            reason: reason.into(),
        }
    }

    /// Create a non-positive parameter error.
    #[must_use]
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        Self::NonPositiveParameter { name, value }
    }

    /// Check if this is the catch-all configuration variant.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }

    /// Check if this error concerns the route shape.
    #[must_use]
    pub fn is_route_error(&self) -> bool {
        matches!(
            self,
            Self::RouteTooShort { .. } | Self::StopCountMismatch { .. }
        )
    }
}
