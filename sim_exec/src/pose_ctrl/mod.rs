//! # Unicycle pose regulation module
//!
//! PoseCtrl drives a unicycle vehicle from its current pose to a goal pose
//! using a proportional feedback law on the polar coordinates of the goal in
//! the vehicle frame:
//!
//! - `rho`: distance to the goal position
//! - `alpha`: bearing of the goal relative to the vehicle heading
//!
//! The hybrid law demands `v = k_rho * rho` and `omega = k_alpha * alpha`,
//! with two overrides:
//!
//! - while the bearing error exceeds `alpha_max` the velocity demand is
//!   forced to zero, so the vehicle rotates in place until roughly aligned
//!   before advancing;
//! - once within the final approach radius the turn rate switches to a
//!   heading correction `k_beta * (heading_goal - heading)`, aligning the
//!   final heading instead of chasing the last few millimeters of position.
//!
//! A zero law is also available which always demands a zero command. It is
//! the placeholder law of the exercise variant of the unicycle sim, where
//! writing the regulator is left to the student.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod calc_hybrid;
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

/// Possible errors that can occur during PoseCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum PoseCtrlError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(util::params::LoadError),
}
