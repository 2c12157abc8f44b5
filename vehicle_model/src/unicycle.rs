//! Unicycle kinematic model

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;

// Internal
use crate::{Pose, UnicycleCmd, UnicycleParams};
use util::maths::{clamp, rate_limit};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The unicycle kinematic model.
///
/// The unicycle has independent linear and angular velocity inputs:
///
/// ```text
/// x' = v cos(theta)
/// y' = v sin(theta)
/// theta' = omega
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unicycle {
    params: UnicycleParams,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Unicycle {
    /// Create a new model from the given parameters.
    pub fn new(params: UnicycleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &UnicycleParams {
        &self.params
    }

    /// Advance the model by one timestep.
    ///
    /// The demanded command is saturated to the actuator envelope and rate
    /// limited against the previously applied command, then integrated with
    /// forward Euler. Returns the new pose and the applied command, which
    /// the caller shall pass back as `previous` on the next step.
    pub fn step(
        &self,
        pose: &Pose,
        demand: &UnicycleCmd,
        previous: &UnicycleCmd,
    ) -> (Pose, UnicycleCmd) {
        let dt = self.params.dt_s;

        // Saturate the demands to the actuator envelope
        let v_sat = clamp(
            &demand.v_ms,
            &(-self.params.max_speed_ms),
            &self.params.max_speed_ms,
        );
        let omega_sat = clamp(
            &demand.omega_rads,
            &(-self.params.max_turn_rate_rads),
            &self.params.max_turn_rate_rads,
        );

        // Rate limit against the previously applied command
        let applied = UnicycleCmd {
            v_ms: rate_limit(v_sat, previous.v_ms, self.params.max_lin_acc_mss * dt),
            omega_rads: rate_limit(
                omega_sat,
                previous.omega_rads,
                self.params.max_ang_acc_radss * dt,
            ),
        };

        // Forward Euler integration. The heading is left unwrapped, it
        // accumulates as the vehicle turns.
        let new_pose = Pose {
            position_m: pose.position_m
                + Vector2::new(
                    applied.v_ms * pose.heading_rad.cos(),
                    applied.v_ms * pose.heading_rad.sin(),
                ) * dt,
            heading_rad: pose.heading_rad + applied.omega_rads * dt,
        };

        (new_pose, applied)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_step_straight() {
        let model = Unicycle::new(UnicycleParams {
            max_lin_acc_mss: 1e6,
            ..Default::default()
        });
        let pose = Pose::default();
        let demand = UnicycleCmd {
            v_ms: 0.1,
            omega_rads: 0.0,
        };

        let (new_pose, applied) = model.step(&pose, &demand, &UnicycleCmd::default());

        // Driving straight at 0.1 m/s for one 0.01 s step moves 1 mm forward
        assert!((new_pose.position_m[0] - 0.001).abs() < 1e-12);
        assert!(new_pose.position_m[1].abs() < 1e-12);
        assert!(new_pose.heading_rad.abs() < 1e-12);
        assert_eq!(applied, demand);
    }

    #[test]
    fn test_step_saturates_demand() {
        let model = Unicycle::new(UnicycleParams {
            max_lin_acc_mss: 1e6,
            max_ang_acc_radss: 1e6,
            ..Default::default()
        });
        let demand = UnicycleCmd {
            v_ms: 100.0,
            omega_rads: -100.0,
        };

        let (_, applied) = model.step(&Pose::default(), &demand, &UnicycleCmd::default());

        assert_eq!(applied.v_ms, model.params().max_speed_ms);
        assert_eq!(applied.omega_rads, -model.params().max_turn_rate_rads);
    }

    #[test]
    fn test_step_rate_limits_applied_cmd() {
        let model = Unicycle::new(UnicycleParams::default());
        let demand = UnicycleCmd {
            v_ms: 0.5,
            omega_rads: 10.0,
        };

        // From rest the applied command can only move max_acc * dt from zero
        let (_, applied) = model.step(&Pose::default(), &demand, &UnicycleCmd::default());

        let p = model.params();
        assert!((applied.v_ms - p.max_lin_acc_mss * p.dt_s).abs() < 1e-12);
        assert!((applied.omega_rads - p.max_ang_acc_radss * p.dt_s).abs() < 1e-12);
    }
}
