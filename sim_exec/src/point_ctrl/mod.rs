//! # Bicycle point regulation module
//!
//! PointCtrl drives a bicycle vehicle towards a goal position. The speed
//! demand is proportional to the distance to the goal and the steering angle
//! demand is proportional to the bearing of the goal relative to the vehicle
//! heading, clamped to the steering envelope. The goal heading is ignored,
//! the module regulates position only; the path follower layered on top
//! retargets before the vehicle settles on any single point.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during PointCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum PointCtrlError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(util::params::LoadError),
}
