//! # Pose regulator benchmark

use criterion::{criterion_group, criterion_main, Criterion};

use sim_lib::pose_ctrl::{InputData, Params, PoseCtrl};
use util::module::State;
use vehicle_model::Pose;

fn pose_ctrl_benchmark(c: &mut Criterion) {
    let mut ctrl = PoseCtrl::new(Params::default());

    // Mid-approach pose, both the distance and bearing terms active
    let input = InputData {
        pose: Pose::new(2.0, -1.0, 1.2),
        goal: Pose::new(0.0, 0.0, 0.0),
    };

    c.bench_function("PoseCtrl::proc", |b| b.iter(|| ctrl.proc(&input).unwrap()));
}

criterion_group!(benches, pose_ctrl_benchmark);
criterion_main!(benches);
