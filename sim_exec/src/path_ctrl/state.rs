//! Implementations for the PathCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{Params, PathCtrlError};
use crate::point_ctrl::{self, PointCtrl};
use util::maths::norm;
use util::{module::State, params, session::Session};
use vehicle_model::{BicycleCmd, Pose};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Bicycle path following module state
#[derive(Debug, Clone, Default)]
pub struct PathCtrl {
    pub(crate) params: Params,

    /// The point regulator commands are delegated to.
    point_ctrl: PointCtrl,

    /// The waypoint path to follow.
    waypoints: Option<Vec<Pose>>,

    /// Index of the current target waypoint within the path.
    waypoint_index: usize,
}

/// Input data to path following.
#[derive(Debug, Clone, Copy)]
pub struct InputData {
    /// The current vehicle pose.
    pub pose: Pose,
}

/// Status report for PathCtrl processing.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatusReport {
    /// Index of the target waypoint the command steers towards.
    pub waypoint_index: usize,

    /// If true the target advanced to the next waypoint this cycle.
    pub advanced: bool,

    /// Report of the delegated point regulator.
    pub point_ctrl: point_ctrl::StatusReport,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PathCtrl {
    /// Create a new instance directly from a parameters value.
    pub fn new(params: Params) -> Self {
        let point_ctrl = PointCtrl::new(params.point_ctrl.clone());
        Self {
            params,
            point_ctrl,
            waypoints: None,
            waypoint_index: 0,
        }
    }

    /// Begin following a waypoint path.
    ///
    /// The first waypoint becomes the target; execution starts on the next
    /// call to `proc`. Loading a path while one is already loaded, or
    /// loading an empty path, is an error.
    pub fn begin_path(&mut self, waypoints: Vec<Pose>) -> Result<(), PathCtrlError> {
        if self.waypoints.is_some() {
            return Err(PathCtrlError::PathAlreadySet);
        }

        if waypoints.is_empty() {
            return Err(PathCtrlError::EmptyPath);
        }

        self.waypoints = Some(waypoints);
        self.waypoint_index = 0;

        Ok(())
    }

    /// Get the current target waypoint, or `None` if no path is loaded.
    pub fn current_goal(&self) -> Option<Pose> {
        self.waypoints
            .as_ref()
            .map(|w| w[self.waypoint_index])
    }

    /// Get the final waypoint of the path, or `None` if no path is loaded.
    ///
    /// The simulation drivers converge on this waypoint.
    pub fn final_waypoint(&self) -> Option<Pose> {
        self.waypoints.as_ref().and_then(|w| w.last().copied())
    }
}

impl State for PathCtrl {
    type InitData = &'static str;
    type InitError = PathCtrlError;

    type InputData = InputData;
    type OutputData = BicycleCmd;
    type StatusReport = StatusReport;
    type ProcError = PathCtrlError;

    /// Initialise the PathCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        self.params = match params::load(init_data) {
            Ok(p) => p,
            Err(e) => return Err(PathCtrlError::ParamLoadError(e))
        };

        self.point_ctrl = PointCtrl::new(self.params.point_ctrl.clone());

        Ok(())
    }

    /// Perform cyclic processing of path following.
    ///
    /// Processing involves:
    ///  1. Advancing the target waypoint if within the lookahead radius of
    ///     the current one (at most one waypoint per cycle).
    ///  2. Delegating command computation to the point regulator with the
    ///     (possibly updated) target.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        let mut report = StatusReport::default();

        // Validate path
        let (mut goal, num_waypoints) = match self.waypoints {
            Some(ref w) => (w[self.waypoint_index], w.len()),
            None => return Err(PathCtrlError::NoPathSet),
        };

        // ---- TARGET MANAGEMENT ----

        let rho = norm(
            &input_data.pose.position_array(),
            &goal.position_array(),
        )
        .unwrap();

        // Within the lookahead radius of the target move on to the next
        // waypoint, unless this is the last one
        if rho < self.params.lookahead_m && self.waypoint_index + 1 < num_waypoints {
            self.waypoint_index += 1;
            report.advanced = true;

            // The unwrap here is safe, the path was validated above
            goal = self.waypoints.as_ref().unwrap()[self.waypoint_index];
        }

        report.waypoint_index = self.waypoint_index;

        // ---- COMMAND GENERATION ----

        let cmd = self.point_ctrl.calc(
            &point_ctrl::InputData {
                pose: input_data.pose,
                goal,
            },
            &mut report.point_ctrl,
        );

        Ok((cmd, report))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn square_path() -> Vec<Pose> {
        vec![
            Pose::new(0.4, 0.0, 0.0),
            Pose::new(0.4, 0.4, 0.0),
            Pose::new(0.0, 0.4, 0.0),
            Pose::new(0.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_begin_path_validation() {
        let mut ctrl = PathCtrl::new(Params::default());

        assert!(matches!(
            ctrl.begin_path(vec![]),
            Err(PathCtrlError::EmptyPath)
        ));

        ctrl.begin_path(square_path()).unwrap();

        assert!(matches!(
            ctrl.begin_path(square_path()),
            Err(PathCtrlError::PathAlreadySet)
        ));
    }

    #[test]
    fn test_proc_without_path() {
        let mut ctrl = PathCtrl::new(Params::default());

        let result = ctrl.proc(&InputData {
            pose: Pose::default(),
        });

        assert!(matches!(result, Err(PathCtrlError::NoPathSet)));
    }

    #[test]
    fn test_advances_within_lookahead() {
        let mut ctrl = PathCtrl::new(Params::default());
        ctrl.begin_path(square_path()).unwrap();

        // Far from the first waypoint, no advance
        let (_, report) = ctrl
            .proc(&InputData {
                pose: Pose::new(-2.0, 0.0, 0.0),
            })
            .unwrap();
        assert_eq!(report.waypoint_index, 0);
        assert!(!report.advanced);

        // Within the lookahead radius of the first waypoint
        let (_, report) = ctrl
            .proc(&InputData {
                pose: Pose::new(0.2, 0.0, 0.0),
            })
            .unwrap();
        assert_eq!(report.waypoint_index, 1);
        assert!(report.advanced);
    }

    #[test]
    fn test_advances_at_most_one_per_cycle() {
        let mut ctrl = PathCtrl::new(Params::default());

        // All waypoints on top of each other, every cycle is within the
        // lookahead radius of all of them
        ctrl.begin_path(vec![
            Pose::new(0.0, 0.0, 0.0),
            Pose::new(0.0, 0.0, 0.0),
            Pose::new(0.0, 0.0, 0.0),
        ])
        .unwrap();

        let pose = Pose::default();
        let mut prev_index = 0;

        for _ in 0..5 {
            let (_, report) = ctrl.proc(&InputData { pose }).unwrap();

            // Non-decreasing, and by at most one
            assert!(report.waypoint_index >= prev_index);
            assert!(report.waypoint_index - prev_index <= 1);

            prev_index = report.waypoint_index;
        }

        // And never past the end of the path
        assert_eq!(prev_index, 2);
    }

    #[test]
    fn test_holds_final_waypoint() {
        let mut ctrl = PathCtrl::new(Params::default());
        ctrl.begin_path(square_path()).unwrap();

        // Sitting on the final waypoint the index must not move past the end
        let pose = Pose::new(0.0, 0.0, 0.0);
        for _ in 0..10 {
            ctrl.proc(&InputData { pose }).unwrap();
        }

        let (_, report) = ctrl.proc(&InputData { pose }).unwrap();
        assert_eq!(report.waypoint_index, 3);
        assert_eq!(
            ctrl.current_goal().unwrap().position_m,
            ctrl.final_waypoint().unwrap().position_m
        );
    }
}
