//! Unicycle pose regulation driver

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::warn;
use serde::Serialize;

// Internal
use super::{SimError, SimMode, SimOutcome, RECORD_PERIOD};
use crate::pose_ctrl::{self, PoseCtrl};
use util::archive::Archiver;
use util::maths::max_abs_diff;
use util::module::State;
use vehicle_model::{Pose, TrajPlot, Unicycle, UnicycleCmd};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Driver looping PoseCtrl against the unicycle model.
///
/// The sim converges when the largest componentwise difference between the
/// pose and the goal, heading included, drops to the threshold.
pub struct UnicycleSim {
    model: Unicycle,
    ctrl: PoseCtrl,

    pose: Pose,
    goal: Pose,

    /// The command applied by the model on the previous step.
    applied: UnicycleCmd,

    /// Convergence threshold on the componentwise pose difference.
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
    v_ms: f64,
    omega_rads: f64,
    rho_m: f64,
    alpha_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl UnicycleSim {
    /// Create a new driver in the `Running` state with zero initial actuator
    /// state.
    pub fn new(
        model: Unicycle,
        ctrl: PoseCtrl,
        start: Pose,
        goal: Pose,
        conv_threshold: f64,
        step_cap: u32,
    ) -> Self {
        Self {
            model,
            ctrl,
            pose: start,
            goal,
            applied: UnicycleCmd::default(),
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
    /// it; if an archiver is given every step is archived. Archive failures
    /// are warnings, they don't stop the sim.
    pub fn run(
        &mut self,
        mut plot: Option<&mut TrajPlot>,
        mut archiver: Option<&mut Archiver>,
    ) -> Result<SimOutcome, SimError> {
        // A finished sim stays finished
        if let SimMode::Done(outcome) = self.mode {
            return Ok(outcome);
        }

        loop {
            // ---- TERMINATION ----

            // The unwrap here is safe, both arrays are the same length
            let measure = max_abs_diff(&self.pose.to_array(), &self.goal.to_array()).unwrap();

            if measure <= self.conv_threshold {
                let outcome = SimOutcome::Converged {
                    steps: self.num_steps,
                };
                self.mode = SimMode::Done(outcome);
                return Ok(outcome);
            }

            if self.num_steps >= self.step_cap {
                let outcome = SimOutcome::TimedOut {
                    steps: self.num_steps,
                };
                self.mode = SimMode::Done(outcome);
                return Ok(outcome);
            }

            // ---- CONTROL ----

            let (demand, report) = self.ctrl.proc(&pose_ctrl::InputData {
                pose: self.pose,
                goal: self.goal,
            })?;

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
                    v_ms: self.applied.v_ms,
                    omega_rads: self.applied.omega_rads,
                    rho_m: report.rho_m,
                    alpha_rad: report.alpha_rad,
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
    use crate::pose_ctrl::{Params, PoseCtrlLaw};
    use std::f64::consts::PI;
    use vehicle_model::UnicycleParams;

    const NUM_TESTS: u32 = 10;
    const CONV_THRESHOLD: f64 = 0.06;
    const STEP_CAP: u32 = 10000;

    /// Starting pose `i` of `n` around the radius-2 circle.
    fn circle_start(i: u32, n: u32) -> Pose {
        let angle = 2.0 * PI * i as f64 / n as f64;
        Pose::new(2.0 * angle.cos(), 2.0 * angle.sin(), angle)
    }

    fn run_from(start: Pose, law: PoseCtrlLaw) -> SimOutcome {
        let mut sim = UnicycleSim::new(
            Unicycle::new(UnicycleParams::default()),
            PoseCtrl::new(Params {
                law,
                ..Default::default()
            }),
            start,
            Pose::default(),
            CONV_THRESHOLD,
            STEP_CAP,
        );

        sim.run(None, None).unwrap()
    }

    #[test]
    fn test_hybrid_law_converges_from_circle() {
        // Every evenly-spaced start on the circle must reach the origin pose
        // within the step cap
        for i in 0..NUM_TESTS {
            let outcome = run_from(circle_start(i, NUM_TESTS), PoseCtrlLaw::Hybrid);

            assert!(
                outcome.is_converged(),
                "start {} did not converge: {:?}",
                i,
                outcome
            );
            assert!(outcome.steps() < STEP_CAP);
        }
    }

    #[test]
    fn test_zero_law_never_converges() {
        // The placeholder law leaves the vehicle where it started, so every
        // run must hit the step cap exactly
        for i in 0..NUM_TESTS {
            let outcome = run_from(circle_start(i, NUM_TESTS), PoseCtrlLaw::Zero);

            assert_eq!(
                outcome,
                SimOutcome::TimedOut { steps: STEP_CAP },
                "start {} should have timed out",
                i
            );
        }
    }

    #[test]
    fn test_already_at_goal() {
        let outcome = run_from(Pose::default(), PoseCtrlLaw::Hybrid);
        assert_eq!(outcome, SimOutcome::Converged { steps: 0 });
    }

    #[test]
    fn test_finished_sim_stays_finished() {
        let mut sim = UnicycleSim::new(
            Unicycle::new(UnicycleParams::default()),
            PoseCtrl::new(Params::default()),
            Pose::new(0.5, 0.0, 0.0),
            Pose::default(),
            CONV_THRESHOLD,
            STEP_CAP,
        );

        let first = sim.run(None, None).unwrap();
        let steps = sim.num_steps();

        let second = sim.run(None, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(sim.num_steps(), steps);
    }
}
