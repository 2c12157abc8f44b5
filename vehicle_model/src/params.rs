//! Parameters structures for the vehicle models

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the unicycle model.
#[derive(Debug, Clone, Deserialize)]
pub struct UnicycleParams {
    /// Integration timestep.
    ///
    /// Units: seconds
    pub dt_s: f64,

    /// Maximum absolute linear velocity.
    ///
    /// Units: meters/second
    pub max_speed_ms: f64,

    /// Maximum absolute angular velocity.
    ///
    /// Units: radians/second
    pub max_turn_rate_rads: f64,

    /// Maximum absolute linear acceleration, used to rate limit the applied
    /// velocity.
    ///
    /// Units: meters/second^2
    pub max_lin_acc_mss: f64,

    /// Maximum absolute angular acceleration, used to rate limit the applied
    /// turn rate.
    ///
    /// Units: radians/second^2
    pub max_ang_acc_radss: f64,
}

/// Parameters for the bicycle model.
#[derive(Debug, Clone, Deserialize)]
pub struct BicycleParams {
    /// Integration timestep.
    ///
    /// Units: seconds
    pub dt_s: f64,

    /// Maximum absolute speed.
    ///
    /// Units: meters/second
    pub max_speed_ms: f64,

    /// Maximum absolute steering angle.
    ///
    /// Units: radians
    pub max_steer_rad: f64,

    /// Maximum absolute linear acceleration, used to rate limit the applied
    /// speed.
    ///
    /// Units: meters/second^2
    pub max_lin_acc_mss: f64,

    /// Maximum absolute steering rate, used to rate limit the applied
    /// steering angle.
    ///
    /// Units: radians/second
    pub max_steer_rate_rads: f64,

    /// Distance between the front and rear axles.
    ///
    /// Units: meters
    pub wheelbase_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for UnicycleParams {
    fn default() -> Self {
        Self {
            dt_s: 0.01,
            max_speed_ms: 0.5,
            max_turn_rate_rads: 10.0,
            max_lin_acc_mss: 10.0,
            max_ang_acc_radss: 100.0,
        }
    }
}

impl Default for BicycleParams {
    fn default() -> Self {
        Self {
            dt_s: 0.01,
            max_speed_ms: 0.5,
            max_steer_rad: 1.0,
            max_lin_acc_mss: 10.0,
            max_steer_rate_rads: 10.0,
            wheelbase_m: 0.25,
        }
    }
}
