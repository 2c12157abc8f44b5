//! Implementations for the PoseCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{Params, PoseCtrlError, PoseCtrlLaw};
use util::{module::State, params, session::Session};
use vehicle_model::{Pose, UnicycleCmd};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Unicycle pose regulation module state
#[derive(Debug, Clone, Default)]
pub struct PoseCtrl {
    pub(crate) params: Params,
}

/// Input data to pose regulation.
#[derive(Debug, Clone, Copy)]
pub struct InputData {
    /// The current vehicle pose.
    pub pose: Pose,

    /// The goal pose.
    pub goal: Pose,
}

/// Status report for PoseCtrl processing.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatusReport {
    /// Distance to the goal position.
    pub rho_m: f64,

    /// Bearing of the goal relative to the vehicle heading, wrapped into
    /// (-pi, pi].
    pub alpha_rad: f64,

    /// If true the bearing error exceeded the limit and the velocity demand
    /// was forced to zero.
    pub aligning: bool,

    /// If true the vehicle is within the final approach radius and the turn
    /// rate is correcting the final heading.
    pub final_approach: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PoseCtrl {
    /// Create a new instance directly from a parameters value.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl State for PoseCtrl {
    type InitData = &'static str;
    type InitError = PoseCtrlError;

    type InputData = InputData;
    type OutputData = UnicycleCmd;
    type StatusReport = StatusReport;
    type ProcError = PoseCtrlError;

    /// Initialise the PoseCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        self.params = match params::load(init_data) {
            Ok(p) => p,
            Err(e) => return Err(PoseCtrlError::ParamLoadError(e))
        };

        Ok(())
    }

    /// Compute the command for the current pose and goal.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let mut report = StatusReport::default();

        let cmd = match self.params.law {
            PoseCtrlLaw::Zero => UnicycleCmd::default(),
            PoseCtrlLaw::Hybrid => self.calc_hybrid(input_data, &mut report),
        };

        Ok((cmd, report))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    fn proc(ctrl: &mut PoseCtrl, pose: Pose, goal: Pose) -> (UnicycleCmd, StatusReport) {
        ctrl.proc(&InputData { pose, goal }).unwrap()
    }

    #[test]
    fn test_zero_at_goal() {
        let mut ctrl = PoseCtrl::new(Params::default());

        // At the goal pose exactly both demands are zero
        let goal = Pose::new(1.0, 2.0, 0.5);
        let (cmd, report) = proc(&mut ctrl, goal, goal);

        assert_eq!(cmd.v_ms, 0.0);
        assert_eq!(cmd.omega_rads, 0.0);
        assert_eq!(report.rho_m, 0.0);
        assert!(report.final_approach);
    }

    #[test]
    fn test_aligns_before_advancing() {
        let mut ctrl = PoseCtrl::new(Params::default());
        let params = ctrl.params().clone();

        // Goal directly behind the vehicle, bearing error is pi
        let pose = Pose::new(0.0, 0.0, 0.0);
        let goal = Pose::new(-5.0, 0.0, 0.0);
        let (cmd, report) = proc(&mut ctrl, pose, goal);

        assert!(report.alpha_rad.abs() > params.alpha_max_rad);
        assert!(report.aligning);
        assert_eq!(cmd.v_ms, 0.0);

        // Regardless of how far away the goal is
        let goal = Pose::new(-500.0, 0.0, 0.0);
        let (cmd, _) = proc(&mut ctrl, pose, goal);
        assert_eq!(cmd.v_ms, 0.0);
    }

    #[test]
    fn test_advances_when_aligned() {
        let mut ctrl = PoseCtrl::new(Params::default());
        let params = ctrl.params().clone();

        // Goal dead ahead
        let pose = Pose::new(0.0, 0.0, 0.0);
        let goal = Pose::new(2.0, 0.0, 0.0);
        let (cmd, report) = proc(&mut ctrl, pose, goal);

        assert!(!report.aligning);
        assert!((cmd.v_ms - params.k_rho * 2.0).abs() < 1e-12);
        assert!(cmd.omega_rads.abs() < 1e-12);
    }

    #[test]
    fn test_final_approach_heading_correction() {
        let mut ctrl = PoseCtrl::new(Params::default());
        let params = ctrl.params().clone();

        // Within the final approach radius the turn rate is the heading
        // correction regardless of the bearing error
        let pose = Pose::new(0.0, 0.0, 1.0);
        let goal = Pose::new(-0.03, 0.0, 0.2);
        let (cmd, report) = proc(&mut ctrl, pose, goal);

        assert!(report.rho_m < params.final_approach_m);
        assert!(report.final_approach);
        assert!(
            (cmd.omega_rads - params.k_beta * (goal.heading_rad - pose.heading_rad)).abs() < 1e-12
        );
    }

    #[test]
    fn test_bearing_wrapped() {
        let mut ctrl = PoseCtrl::new(Params::default());

        // A large accumulated heading still produces a wrapped bearing error
        let pose = Pose::new(0.0, 0.0, 4.0 * PI + 0.1);
        let goal = Pose::new(2.0, 0.0, 0.0);
        let (_, report) = proc(&mut ctrl, pose, goal);

        assert!((report.alpha_rad - (-0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_law() {
        let mut ctrl = PoseCtrl::new(Params {
            law: PoseCtrlLaw::Zero,
            ..Default::default()
        });

        let pose = Pose::new(2.0, 0.0, 0.0);
        let goal = Pose::default();
        let (cmd, _) = proc(&mut ctrl, pose, goal);

        assert_eq!(cmd, UnicycleCmd::default());
    }
}
