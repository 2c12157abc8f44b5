//! Parameters structure for PathCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

use crate::point_ctrl;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for bicycle path following.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    /// Distance to the current waypoint below which the target advances to
    /// the next one.
    ///
    /// Units: meters
    pub lookahead_m: f64,

    /// Parameters of the point regulator the follower delegates to.
    pub point_ctrl: point_ctrl::Params,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            lookahead_m: 0.6,
            point_ctrl: point_ctrl::Params::default(),
        }
    }
}
