//! Planar vehicle pose

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The pose (position and heading) of a vehicle in the world frame.
///
/// The heading is the angle between the vehicle's forward direction and the
/// positive world X axis, following the right hand rule about world Z+.
///
/// The heading is not wrapped by this struct, it accumulates as the vehicle
/// turns. Wrapping is applied by consumers where an angular difference is
/// needed (see [`util::maths::angle_wrap`]).
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Pose {
    /// The position in the world frame.
    ///
    /// Units: meters
    pub position_m: Vector2<f64>,

    /// The heading in the world frame.
    ///
    /// Units: radians
    pub heading_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    /// Create a new pose from position components and heading.
    pub fn new(x_m: f64, y_m: f64, heading_rad: f64) -> Self {
        Self {
            position_m: Vector2::new(x_m, y_m),
            heading_rad,
        }
    }

    /// Get the unit vector pointing in the pose's forward direction.
    pub fn forward2(&self) -> Vector2<f64> {
        Vector2::new(self.heading_rad.cos(), self.heading_rad.sin())
    }

    /// Get the pose as an `[x, y, heading]` array, for use with the generic
    /// maths functions.
    pub fn to_array(&self) -> [f64; 3] {
        [self.position_m[0], self.position_m[1], self.heading_rad]
    }

    /// Get the position as an `[x, y]` array.
    pub fn position_array(&self) -> [f64; 2] {
        [self.position_m[0], self.position_m[1]]
    }
}
