//! Bicycle path following simulation.
//!
//! Drives the bicycle model along a fixed waypoint path using the lookahead
//! path follower, logging the step count to the final waypoint, and renders
//! the path and trajectory into `bicycle_to_path.png` in the working
//! directory.

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
use sim_lib::path_ctrl::PathCtrl;
use sim_lib::sim::{BicycleSim, SimOutcome};
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};
use vehicle_model::{Bicycle, BicycleParams, Pose, TrajPlot};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The waypoint path to follow, as `[x, y, heading]` triples.
const WAYPOINTS: [[f64; 3]; 6] = [
    [0.1, 0.0, 0.0],
    [4.0, 0.0, 0.0],
    [4.0, 4.0, 0.0],
    [3.5, 1.0, 0.0],
    [0.0, 4.0, 0.0],
    [1.0, 2.0, -1.57],
];

/// Convergence threshold on the componentwise position difference to the
/// final waypoint.
const CONV_THRESHOLD: f64 = 0.05;

/// Safety stop on the number of steps.
const STEP_CAP: u32 = 25000;

/// Parameter file for the path follower.
const PATH_CTRL_PARAMS: &str = "path_ctrl.toml";

/// Trajectory plot output file, written into the working directory.
const IMG_FILE_NAME: &str = "bicycle_to_path.png";

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session =
        Session::new("bicycle_to_path", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, &session).wrap_err("Failed to initialise logging")?;

    info!("Reactive control of the bicycle model\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let model_params: BicycleParams = util::params::load("bicycle_model.toml")
        .wrap_err("Could not load bicycle model params")?;

    info!("Model parameters loaded");

    // ---- INITIALISE MODULES ----

    let waypoints: Vec<Pose> = WAYPOINTS
        .iter()
        .map(|w| Pose::new(w[0], w[1], w[2]))
        .collect();

    let mut ctrl = PathCtrl::default();
    ctrl.init(PATH_CTRL_PARAMS, &session)
        .wrap_err("Failed to initialise PathCtrl")?;
    ctrl.begin_path(waypoints.clone())
        .wrap_err("Failed to load the waypoint path")?;
    info!("PathCtrl init complete, {} waypoints\n", waypoints.len());

    // ---- SIMULATION ----

    let start = Pose::default();

    let mut plot = TrajPlot::new();
    plot.add_polyline(
        &waypoints.iter().map(|p| p.position_m).collect::<Vec<_>>(),
        plot.colours().track,
    );
    plot.add_arrow(&start, plot.colours().start);

    let mut archiver = Archiver::from_path(&session, "path_history.csv")
        .map_err(|e| eyre!("Failed to create the archiver: {}", e))?;

    let mut sim = BicycleSim::new(
        Bicycle::new(model_params),
        ctrl,
        start,
        CONV_THRESHOLD,
        STEP_CAP,
    );

    let outcome = sim
        .run(Some(&mut plot), Some(&mut archiver))
        .wrap_err("Simulation failed")?;

    match outcome {
        SimOutcome::Converged { steps } => info!("Steps to goal: {}", steps),
        SimOutcome::TimedOut { steps } => {
            warn!("No convergence within {} steps", steps)
        }
    }

    // ---- OUTPUTS ----

    plot.save(IMG_FILE_NAME)
        .wrap_err("Could not save the trajectory plot")?;
    info!("Trajectory plot saved to {}", IMG_FILE_NAME);

    session.save("outcome.json", outcome);
    session.exit();

    Ok(())
}
