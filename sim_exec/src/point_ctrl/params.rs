//! Parameters structure for PointCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for bicycle point regulation.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    /// Distance gain, scales the speed demand with the distance to the goal
    /// position.
    pub k_rho: f64,

    /// Bearing gain, scales the steering angle demand with the bearing of
    /// the goal relative to the vehicle heading.
    pub k_alpha: f64,

    /// Steering angle demand clamp.
    ///
    /// Units: radians
    pub max_steer_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            k_rho: 20.0,
            k_alpha: 5.0,
            max_steer_rad: 1.0,
        }
    }
}
