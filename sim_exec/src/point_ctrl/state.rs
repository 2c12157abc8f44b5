//! Implementations for the PointCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{Params, PointCtrlError};
use util::maths::{angle_wrap, clamp, norm};
use util::{module::State, params, session::Session};
use vehicle_model::{BicycleCmd, Pose};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Bicycle point regulation module state
#[derive(Debug, Clone, Default)]
pub struct PointCtrl {
    pub(crate) params: Params,
}

/// Input data to point regulation.
#[derive(Debug, Clone, Copy)]
pub struct InputData {
    /// The current vehicle pose.
    pub pose: Pose,

    /// The goal pose. Only the position is regulated.
    pub goal: Pose,
}

/// Status report for PointCtrl processing.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatusReport {
    /// Distance to the goal position.
    pub rho_m: f64,

    /// Bearing of the goal relative to the vehicle heading, wrapped into
    /// (-pi, pi].
    pub alpha_rad: f64,

    /// If true the steering angle demand hit the clamp.
    pub steer_limited: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PointCtrl {
    /// Create a new instance directly from a parameters value.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Compute the command for the current pose and goal.
    ///
    /// This is the body of [`State::proc`], callable without `&mut` since
    /// the module carries no cycle state. PathCtrl delegates here.
    pub fn calc(&self, input_data: &InputData, report: &mut StatusReport) -> BicycleCmd {
        let pose = &input_data.pose;
        let goal = &input_data.goal;

        let rho = norm(&pose.position_array(), &goal.position_array()).unwrap();

        let bearing = (goal.position_m[1] - pose.position_m[1])
            .atan2(goal.position_m[0] - pose.position_m[0]);
        let alpha = angle_wrap(bearing - pose.heading_rad);

        report.rho_m = rho;
        report.alpha_rad = alpha;

        let steer_demand = self.params.k_alpha * alpha;
        let steer = clamp(
            &steer_demand,
            &(-self.params.max_steer_rad),
            &self.params.max_steer_rad,
        );
        report.steer_limited = steer != steer_demand;

        BicycleCmd {
            speed_ms: self.params.k_rho * rho,
            steer_rad: steer,
        }
    }
}

impl State for PointCtrl {
    type InitData = &'static str;
    type InitError = PointCtrlError;

    type InputData = InputData;
    type OutputData = BicycleCmd;
    type StatusReport = StatusReport;
    type ProcError = PointCtrlError;

    /// Initialise the PointCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        self.params = match params::load(init_data) {
            Ok(p) => p,
            Err(e) => return Err(PointCtrlError::ParamLoadError(e))
        };

        Ok(())
    }

    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let mut report = StatusReport::default();
        let cmd = self.calc(input_data, &mut report);
        Ok((cmd, report))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_speed_proportional_to_distance() {
        let ctrl = PointCtrl::new(Params::default());
        let mut report = StatusReport::default();

        let cmd = ctrl.calc(
            &InputData {
                pose: Pose::new(0.0, 0.0, 0.0),
                goal: Pose::new(3.0, 4.0, 0.0),
            },
            &mut report,
        );

        assert!((report.rho_m - 5.0).abs() < 1e-12);
        assert!((cmd.speed_ms - ctrl.params().k_rho * 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_steer_clamped() {
        let ctrl = PointCtrl::new(Params::default());
        let mut report = StatusReport::default();

        // Goal behind the vehicle, unclamped demand would be k_alpha * pi
        let cmd = ctrl.calc(
            &InputData {
                pose: Pose::new(0.0, 0.0, 0.0),
                goal: Pose::new(-1.0, 0.1, 0.0),
            },
            &mut report,
        );

        assert!(report.steer_limited);
        assert_eq!(cmd.steer_rad, ctrl.params().max_steer_rad);
    }

    #[test]
    fn test_steer_sign_follows_bearing() {
        let ctrl = PointCtrl::new(Params::default());
        let mut report = StatusReport::default();

        // Goal slightly to the left
        let cmd = ctrl.calc(
            &InputData {
                pose: Pose::new(0.0, 0.0, 0.0),
                goal: Pose::new(1.0, 0.1, 0.0),
            },
            &mut report,
        );

        assert!(cmd.steer_rad > 0.0);
        assert!(!report.steer_limited);
        assert!((cmd.steer_rad - ctrl.params().k_alpha * report.alpha_rad).abs() < 1e-12);
    }
}
