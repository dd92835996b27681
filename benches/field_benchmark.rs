/*
 * Particle Field Benchmark
 *
 * Measures the per-frame cost of the physics step and of the pairwise
 * connection scan, which grows quadratically with the particle count.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use particle_field::physics::{self, StepInput};
use particle_field::renderer;
use particle_field::{FieldParams, InteractionMode, ParticleStore};

const WIDTH: f32 = 1920.0;
const HEIGHT: f32 = 1080.0;

fn store_with(count: usize) -> (ParticleStore, FieldParams) {
    let params = FieldParams {
        desktop_count: count,
        ..FieldParams::default()
    };
    let mut store = ParticleStore::new();
    store.initialize(WIDTH, HEIGHT, &params, &mut ChaCha8Rng::seed_from_u64(1));
    (store, params)
}

fn bench_physics_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("physics_step");

    for count in [100, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let (mut store, params) = store_with(n);
            let input = StepInput {
                mouse: Some(vec2(WIDTH / 2.0, HEIGHT / 2.0)),
                width: WIDTH,
                height: HEIGHT,
                mode: InteractionMode::Attract,
                params: &params,
            };

            b.iter(|| physics::step(black_box(store.particles_mut()), &input));
        });
    }

    group.finish();
}

fn bench_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("connections");

    for count in [100, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let (store, params) = store_with(n);
            b.iter(|| renderer::connections(black_box(store.particles()), &params));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_physics_step, bench_connections
}

criterion_main!(benches);
