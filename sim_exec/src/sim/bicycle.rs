//! Bicycle path following driver

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;
use serde::Serialize;

// Internal
use super::{SimError, SimMode, SimOutcome, RECORD_PERIOD};
use crate::path_ctrl::{self, PathCtrl, PathCtrlError};
use util::archive::Archiver;
use util::maths::max_abs_diff;
use util::module::State;
use vehicle_model::{Bicycle, BicycleCmd, Pose, TrajPlot};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Driver looping PathCtrl against the bicycle model.
///
/// The sim converges when the largest componentwise difference between the
/// vehicle position and the final waypoint's position drops to the
/// threshold. Heading is not part of the measure, the follower regulates
/// position only.
pub struct BicycleSim {
    model: Bicycle,
    ctrl: PathCtrl,

    pose: Pose,

    /// The command applied by the model on the previous step.
    applied: BicycleCmd,

    /// Convergence threshold on the componentwise position difference.
    conv_threshold: f64,

    /// Safety stop on the number of steps.
    step_cap: u32,

    mode: SimMode,
    num_steps: u32,
}

/// One archived simulation step.
#[derive(Serialize)]
struct Record {
    step: u32,
    time_s: f64,
    x_m: f64,
    y_m: f64,
    heading_rad: f64,
    speed_ms: f64,
    steer_rad: f64,
    waypoint_index: usize,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl BicycleSim {
    /// Create a new driver in the `Running` state with zero initial actuator
    /// state.
    ///
    /// The controller shall have a path loaded (see [`PathCtrl::begin_path`])
    /// before the sim is run.
    pub fn new(
        model: Bicycle,
        ctrl: PathCtrl,
        start: Pose,
        conv_threshold: f64,
        step_cap: u32,
    ) -> Self {
        Self {
            model,
            ctrl,
            pose: start,
            applied: BicycleCmd::default(),
            conv_threshold,
            step_cap,
            mode: SimMode::default(),
            num_steps: 0,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    /// Run the simulation to completion.
    ///
    /// If a plot is given every [`RECORD_PERIOD`]th pose is recorded into
    /// it, plus the final pose; if an archiver is given every step is
    /// archived. Archive failures are warnings, they don't stop the sim.
    pub fn run(
        &mut self,
        mut plot: Option<&mut TrajPlot>,
        mut archiver: Option<&mut Archiver>,
    ) -> Result<SimOutcome, SimError> {
        // A finished sim stays finished
        if let SimMode::Done(outcome) = self.mode {
            return Ok(outcome);
        }

        // The sim converges on the final waypoint, so running without a path
        // is an error
        let last = match self.ctrl.final_waypoint() {
            Some(p) => p,
            None => return Err(PathCtrlError::NoPathSet.into()),
        };

        loop {
            // ---- TERMINATION ----

            // The unwrap here is safe, both arrays are the same length
            let measure =
                max_abs_diff(&self.pose.position_array(), &last.position_array()).unwrap();

            let outcome = if measure <= self.conv_threshold {
                Some(SimOutcome::Converged {
                    steps: self.num_steps,
                })
            } else if self.num_steps >= self.step_cap {
                Some(SimOutcome::TimedOut {
                    steps: self.num_steps,
                })
            } else {
                None
            };

            if let Some(outcome) = outcome {
                // Record the final pose before finishing
                if let Some(ref mut p) = plot {
                    let colour = p.colours().sample;
                    p.add_arrow(&self.pose, colour);
                    p.add_point(&self.pose.position_m, colour);
                }

                self.mode = SimMode::Done(outcome);
                return Ok(outcome);
            }

            // ---- CONTROL ----

            let (demand, report) = self.ctrl.proc(&path_ctrl::InputData { pose: self.pose })?;

            // ---- VEHICLE MOTION ----

            let (new_pose, applied) = self.model.step(&self.pose, &demand, &self.applied);
            self.pose = new_pose;
            self.applied = applied;
            self.num_steps += 1;

            // ---- RECORDING ----

            if let Some(ref mut p) = plot {
                if self.num_steps % RECORD_PERIOD == 1 {
                    let colour = p.colours().sample;
                    p.add_arrow(&self.pose, colour);
                    p.add_point(&self.pose.position_m, colour);
                }
            }

            if let Some(ref mut a) = archiver {
                let record = Record {
                    step: self.num_steps,
                    time_s: self.num_steps as f64 * self.model.params().dt_s,
                    x_m: self.pose.position_m[0],
                    y_m: self.pose.position_m[1],
                    heading_rad: self.pose.heading_rad,
                    speed_ms: self.applied.speed_ms,
                    steer_rad: self.applied.steer_rad,
                    waypoint_index: report.waypoint_index,
                };

                if let Err(e) = a.serialise(record) {
                    warn!("Could not archive simulation step: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::path_ctrl::Params;
    use vehicle_model::BicycleParams;

    const CONV_THRESHOLD: f64 = 0.05;
    const STEP_CAP: u32 = 25000;

    /// The waypoint path driven by the path following executable.
    fn test_path() -> Vec<Pose> {
        vec![
            Pose::new(0.1, 0.0, 0.0),
            Pose::new(4.0, 0.0, 0.0),
            Pose::new(4.0, 4.0, 0.0),
            Pose::new(3.5, 1.0, 0.0),
            Pose::new(0.0, 4.0, 0.0),
            Pose::new(1.0, 2.0, -1.57),
        ]
    }

    #[test]
    fn test_reaches_final_waypoint() {
        let mut ctrl = PathCtrl::new(Params::default());
        ctrl.begin_path(test_path()).unwrap();

        let mut sim = BicycleSim::new(
            Bicycle::new(BicycleParams::default()),
            ctrl,
            Pose::default(),
            CONV_THRESHOLD,
            STEP_CAP,
        );

        let outcome = sim.run(None, None).unwrap();

        assert!(
            outcome.is_converged(),
            "sim did not converge: {:?}",
            outcome
        );
        assert!(outcome.steps() < STEP_CAP);

        // The final pose really is on the last waypoint
        let last = test_path().last().unwrap().position_m;
        assert!((sim.pose().position_m[0] - last[0]).abs() <= CONV_THRESHOLD);
        assert!((sim.pose().position_m[1] - last[1]).abs() <= CONV_THRESHOLD);
    }

    #[test]
    fn test_run_without_path() {
        let mut sim = BicycleSim::new(
            Bicycle::new(BicycleParams::default()),
            PathCtrl::new(Params::default()),
            Pose::default(),
            CONV_THRESHOLD,
            STEP_CAP,
        );

        assert!(matches!(
            sim.run(None, None),
            Err(SimError::PathCtrlError(PathCtrlError::NoPathSet))
        ));
    }
}
