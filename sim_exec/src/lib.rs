//! # Simulation executable library
//!
//! Library half of the reactive control simulation executables. The three
//! binaries in this crate share the modules defined here:
//!
//! - [`pose_ctrl`]: unicycle pose regulation
//! - [`point_ctrl`]: bicycle point regulation
//! - [`path_ctrl`]: bicycle waypoint path following
//! - [`sim`]: the simulation drivers looping regulator and vehicle model
//!
//! All control modules implement the `util::module::State` trait and are
//! configured from TOML parameter files in the same way.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

pub mod path_ctrl;
pub mod point_ctrl;
pub mod pose_ctrl;
pub mod sim;
