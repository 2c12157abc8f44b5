//! Hybrid proportional law calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal imports
use super::{InputData, PoseCtrl, StatusReport};
use util::maths::{angle_wrap, norm};
use vehicle_model::UnicycleCmd;

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PoseCtrl {
    /// Perform the hybrid law calculations.
    ///
    /// The demands are proportional in the polar coordinates of the goal in
    /// the vehicle frame, with the velocity gated on the bearing error and
    /// the turn rate switched to heading correction on final approach. The
    /// demands are left unsaturated, the vehicle model owns the actuator
    /// envelope.
    pub(crate) fn calc_hybrid(
        &self,
        input_data: &InputData,
        report: &mut StatusReport,
    ) -> UnicycleCmd {
        let pose = &input_data.pose;
        let goal = &input_data.goal;

        // Polar coordinates of the goal in the vehicle frame
        let rho = norm(&pose.position_array(), &goal.position_array()).unwrap();

        let bearing = (goal.position_m[1] - pose.position_m[1])
            .atan2(goal.position_m[0] - pose.position_m[0]);
        let alpha = angle_wrap(bearing - pose.heading_rad);

        report.rho_m = rho;
        report.alpha_rad = alpha;

        let mut v = self.params.k_rho * rho;
        let mut omega = self.params.k_alpha * alpha;

        // Rotate in place until roughly aligned with the goal direction
        if alpha.abs() > self.params.alpha_max_rad {
            v = 0.0;
            report.aligning = true;
        }

        // On final approach correct the goal heading instead of the bearing
        if rho < self.params.final_approach_m {
            omega = self.params.k_beta * (goal.heading_rad - pose.heading_rad);
            report.final_approach = true;
        }

        UnicycleCmd {
            v_ms: v,
            omega_rads: omega,
        }
    }
}
