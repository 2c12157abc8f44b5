//! Commands accepted by the vehicle models

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A command to the unicycle model.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnicycleCmd {
    /// Demanded linear velocity.
    ///
    /// Units: meters/second
    pub v_ms: f64,

    /// Demanded angular velocity, following the right hand rule about world
    /// Z+ (positive turns to the left).
    ///
    /// Units: radians/second
    pub omega_rads: f64,
}

/// A command to the bicycle model.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BicycleCmd {
    /// Demanded speed of the rear axle.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// Demanded steering angle of the front wheel relative to the vehicle
    /// body, positive to the left.
    ///
    /// Units: radians
    pub steer_rad: f64,
}
