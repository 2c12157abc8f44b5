//! # Vehicle model library
//!
//! Kinematic models of the simulated vehicles, and the trajectory plot used
//! to render their motion.
//!
//! Two models are provided:
//!
//! - [`Unicycle`]: independent linear and angular velocity inputs.
//! - [`Bicycle`]: speed and steering angle inputs, with the heading rate
//!   coupled to the speed through the steering angle and wheelbase.
//!
//! Both models integrate with forward Euler at a fixed timestep. Demanded
//! commands are first saturated to the actuator envelope and then rate
//! limited against the previously applied command, so a regulator can demand
//! arbitrarily aggressive commands and the vehicle will respond like a
//! physical actuator. The applied (post-limit) command is returned alongside
//! the new pose and must be fed back in on the next step.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod bicycle;
mod cmd;
mod params;
mod plot;
mod pose;
mod unicycle;

// ---------------------------------------------------------------------------
// EXPORTS
// ---------------------------------------------------------------------------

pub use bicycle::Bicycle;
pub use cmd::{BicycleCmd, UnicycleCmd};
pub use params::{BicycleParams, UnicycleParams};
pub use plot::{PlotColourScheme, PlotConfig, PlotError, TrajPlot};
pub use pose::Pose;
pub use unicycle::Unicycle;
