//! # Simulation drivers
//!
//! The drivers close the loop between a regulator module and a vehicle
//! model: each cycle the regulator computes a command for the current pose,
//! the model integrates it, and the driver checks for termination. Every
//! 150th pose is recorded into the trajectory plot, matching the render
//! cadence of the animations these simulations produce.
//!
//! A driver is a two state machine, `Running` until the convergence measure
//! drops below the threshold or the step cap is reached, then `Done`. The
//! step cap is a safety stop against non-converging regulators, not an
//! error: it is surfaced distinctly as [`SimOutcome::TimedOut`] so callers
//! can tell the two apart, and a finished sim stays finished.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod bicycle;
mod unicycle;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use bicycle::*;
pub use unicycle::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of simulation steps between recorded trajectory samples.
pub const RECORD_PERIOD: u32 = 150;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The outcome of a simulation run.
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize)]
pub enum SimOutcome {
    /// The convergence measure dropped below the threshold after the given
    /// number of steps.
    Converged { steps: u32 },

    /// The step cap was reached before convergence.
    TimedOut { steps: u32 },
}

/// The execution state of a simulation driver.
#[derive(Debug, Copy, Clone)]
pub(crate) enum SimMode {
    Running,
    Done(SimOutcome),
}

/// Possible errors that can occur while driving a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Pose regulation error: {0}")]
    PoseCtrlError(#[from] crate::pose_ctrl::PoseCtrlError),

    #[error("Path following error: {0}")]
    PathCtrlError(#[from] crate::path_ctrl::PathCtrlError),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimOutcome {
    /// Number of steps executed before the sim finished.
    pub fn steps(&self) -> u32 {
        match self {
            SimOutcome::Converged { steps } => *steps,
            SimOutcome::TimedOut { steps } => *steps,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, SimOutcome::Converged { .. })
    }
}

impl Default for SimMode {
    fn default() -> Self {
        SimMode::Running
    }
}
