//! Unicycle pose regulation simulation, exercise variant.
//!
//! Identical to `unicycle_to_pose_completed` except that the regulator runs
//! the zero placeholder law: writing the actual control law is the exercise.
//! With the placeholder in place the vehicle never moves, so every run stops
//! at the step cap and is reported as timed out.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{info, warn};

// Internal
use sim_lib::pose_ctrl::PoseCtrl;
use sim_lib::sim::{SimOutcome, UnicycleSim};
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};
use vehicle_model::{Pose, TrajPlot, Unicycle, UnicycleParams};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of starting poses around the circle.
const NUM_TESTS: u32 = 10;

/// Convergence threshold on the componentwise pose difference.
const CONV_THRESHOLD: f64 = 0.06;

/// Safety stop on the number of steps per run.
const STEP_CAP: u32 = 10000;

/// Parameter file for the regulator, selecting the zero placeholder law.
const POSE_CTRL_PARAMS: &str = "pose_ctrl_zero.toml";

/// Trajectory plot output file, written into the working directory.
const IMG_FILE_NAME: &str = "unicycle_to_pose.png";

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session =
        Session::new("unicycle_to_pose", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session).wrap_err("Failed to initialise logging")?;

    info!("Reactive control of the unicycle model\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let model_params: UnicycleParams = util::params::load("unicycle_model.toml")
        .wrap_err("Could not load unicycle model params")?;

    info!("Model parameters loaded");

    // ---- INITIALISE MODULES ----

    let mut ctrl = PoseCtrl::default();
    ctrl.init(POSE_CTRL_PARAMS, &session)
        .wrap_err("Failed to initialise PoseCtrl")?;
    info!("PoseCtrl init complete ({:?} law)\n", ctrl.params().law);

    // ---- SIMULATIONS ----

    let goal = Pose::default();

    let mut plot = TrajPlot::new();
    plot.add_arrow(&goal, plot.colours().goal);

    let mut outcomes: Vec<SimOutcome> = Vec::with_capacity(NUM_TESTS as usize);

    // Loop over the starting poses
    for i in 0..NUM_TESTS {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / NUM_TESTS as f64;
        let start = Pose::new(2.0 * angle.cos(), 2.0 * angle.sin(), angle);

        plot.add_arrow(&start, plot.colours().start);

        let mut archiver = Archiver::from_path(&session, format!("pose_history_{}.csv", i))
            .map_err(|e| eyre!("Failed to create the archiver: {}", e))?;

        let mut sim = UnicycleSim::new(
            Unicycle::new(model_params.clone()),
            ctrl.clone(),
            start,
            goal,
            CONV_THRESHOLD,
            STEP_CAP,
        );

        let outcome = sim
            .run(Some(&mut plot), Some(&mut archiver))
            .wrap_err("Simulation failed")?;

        match outcome {
            SimOutcome::Converged { steps } => {
                info!("Run {}: goal reached in {} steps", i, steps)
            }
            SimOutcome::TimedOut { steps } => {
                warn!("Run {}: no convergence within {} steps", i, steps)
            }
        }

        outcomes.push(outcome);
    }

    // Display mean performance over all runs
    let mean_steps =
        outcomes.iter().map(|o| o.steps() as f64).sum::<f64>() / outcomes.len() as f64;
    info!("Mean goal reaching steps: {}\n", mean_steps);

    // ---- OUTPUTS ----

    plot.save(IMG_FILE_NAME)
        .wrap_err("Could not save the trajectory plot")?;
    info!("Trajectory plot saved to {}", IMG_FILE_NAME);

    session.save("outcomes.json", outcomes);
    session.exit();

    Ok(())
}
