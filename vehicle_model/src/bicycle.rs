//! Bicycle kinematic model

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use nalgebra::Vector2;

// Internal
use crate::{BicycleCmd, BicycleParams, Pose};
use util::maths::{clamp, rate_limit};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The bicycle kinematic model.
///
/// The bicycle is driven by a speed and a steering angle, with the heading
/// rate coupled to the speed through the steering angle and the wheelbase:
///
/// ```text
/// x' = v cos(theta)
/// y' = v sin(theta)
/// theta' = v tan(phi) / L
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bicycle {
    params: BicycleParams,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Bicycle {
    /// Create a new model from the given parameters.
    pub fn new(params: BicycleParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BicycleParams {
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
        demand: &BicycleCmd,
        previous: &BicycleCmd,
    ) -> (Pose, BicycleCmd) {
        let dt = self.params.dt_s;

        // Saturate the demands to the actuator envelope
        let speed_sat = clamp(
            &demand.speed_ms,
            &(-self.params.max_speed_ms),
            &self.params.max_speed_ms,
        );
        let steer_sat = clamp(
            &demand.steer_rad,
            &(-self.params.max_steer_rad),
            &self.params.max_steer_rad,
        );

        // Rate limit against the previously applied command
        let applied = BicycleCmd {
            speed_ms: rate_limit(
                speed_sat,
                previous.speed_ms,
                self.params.max_lin_acc_mss * dt,
            ),
            steer_rad: rate_limit(
                steer_sat,
                previous.steer_rad,
                self.params.max_steer_rate_rads * dt,
            ),
        };

        // Forward Euler integration. The heading is left unwrapped, it
        // accumulates as the vehicle turns.
        let new_pose = Pose {
            position_m: pose.position_m
                + Vector2::new(
                    applied.speed_ms * pose.heading_rad.cos(),
                    applied.speed_ms * pose.heading_rad.sin(),
                ) * dt,
            heading_rad: pose.heading_rad
                + applied.speed_ms * applied.steer_rad.tan() / self.params.wheelbase_m * dt,
        };

        (new_pose, applied)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unlimited_params() -> BicycleParams {
        BicycleParams {
            max_lin_acc_mss: 1e6,
            max_steer_rate_rads: 1e6,
            ..Default::default()
        }
    }

    #[test]
    fn test_step_straight() {
        let model = Bicycle::new(unlimited_params());
        let demand = BicycleCmd {
            speed_ms: 0.1,
            steer_rad: 0.0,
        };

        let (new_pose, applied) = model.step(&Pose::default(), &demand, &BicycleCmd::default());

        assert!((new_pose.position_m[0] - 0.001).abs() < 1e-12);
        assert!(new_pose.position_m[1].abs() < 1e-12);
        assert!(new_pose.heading_rad.abs() < 1e-12);
        assert_eq!(applied, demand);
    }

    #[test]
    fn test_step_turn_direction() {
        let model = Bicycle::new(unlimited_params());

        // A positive steer angle at positive speed turns to the left
        let demand = BicycleCmd {
            speed_ms: 0.5,
            steer_rad: 0.5,
        };
        let (new_pose, _) = model.step(&Pose::default(), &demand, &BicycleCmd::default());
        assert!(new_pose.heading_rad > 0.0);

        // And to the right for a negative steer angle
        let demand = BicycleCmd {
            speed_ms: 0.5,
            steer_rad: -0.5,
        };
        let (new_pose, _) = model.step(&Pose::default(), &demand, &BicycleCmd::default());
        assert!(new_pose.heading_rad < 0.0);
    }

    #[test]
    fn test_step_saturates_steer() {
        let model = Bicycle::new(unlimited_params());
        let demand = BicycleCmd {
            speed_ms: 0.0,
            steer_rad: 100.0,
        };

        let (_, applied) = model.step(&Pose::default(), &demand, &BicycleCmd::default());

        assert_eq!(applied.steer_rad, model.params().max_steer_rad);
    }
}
