//! # Bicycle path following module
//!
//! PathCtrl steers a bicycle vehicle along an ordered list of waypoints.
//! Target management is a simple lookahead scheme: once the vehicle is
//! within the lookahead radius of the current waypoint the target advances
//! to the next one, by exactly one waypoint per cycle and never backwards.
//! Command computation for the current target is delegated to
//! [`crate::point_ctrl::PointCtrl`].
//!
//! Advancing one waypoint per cycle is a deliberate simplification: the
//! follower does not search for the closest waypoint, so a path that doubles
//! back over itself is followed in order rather than short-cut.

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

/// Possible errors that can occur during PathCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum PathCtrlError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(util::params::LoadError),

    /// A path is already loaded. This error occurs when attempting to start
    /// a new path before the current one has finished.
    #[error("Attempted to load a waypoint path while one is already loaded")]
    PathAlreadySet,

    /// Attempted to load a path with no waypoints in it.
    #[error("Attempted to load an empty waypoint path")]
    EmptyPath,

    /// Attempted to follow a path when none has been loaded.
    #[error("No waypoint path has been set")]
    NoPathSet,
}
