//! Parameters structure for PoseCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for unicycle pose regulation.
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    /// The control law to apply.
    pub law: PoseCtrlLaw,

    /// Distance gain, scales the velocity demand with the distance to the
    /// goal position.
    pub k_rho: f64,

    /// Bearing gain, scales the turn rate demand with the bearing of the
    /// goal relative to the vehicle heading.
    pub k_alpha: f64,

    /// Heading gain, scales the turn rate demand with the heading error
    /// during the final approach.
    pub k_beta: f64,

    /// Bearing error above which the velocity demand is forced to zero, so
    /// the vehicle aligns before advancing.
    ///
    /// Units: radians
    pub alpha_max_rad: f64,

    /// Distance to the goal position below which the turn rate switches to
    /// final heading correction.
    ///
    /// Units: meters
    pub final_approach_m: f64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The control laws PoseCtrl can apply.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseCtrlLaw {
    /// Always demand a zero command. Placeholder law of the exercise variant
    /// of the unicycle sim.
    Zero,

    /// The hybrid proportional law described in the module documentation.
    Hybrid,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            law: PoseCtrlLaw::Hybrid,
            k_rho: 20.0,
            k_alpha: 10.0,
            k_beta: 200.0,
            alpha_max_rad: std::f64::consts::PI / 2.2,
            final_approach_m: 0.05,
        }
    }
}
