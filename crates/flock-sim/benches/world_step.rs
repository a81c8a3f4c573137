use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use flock_behavior::ClassicFlocking;
use flock_core::{Bounds, SimRng, Vec2};
use flock_sim::{SpatialBackend, UpdateOrder, World, WorldBuilder, WorldConfig};

fn world(agents: usize, order: UpdateOrder, backend: SpatialBackend) -> World<ClassicFlocking> {
    let config = WorldConfig {
        bounds: Bounds::new(40.0, 40.0),
        seed: 0xB01D,
        order,
        backend,
        ..WorldConfig::default()
    };
    let mut world = WorldBuilder::new(config, ClassicFlocking::default())
        .capacity(agents)
        .build()
        .expect("valid bench config");
    let mut rng = SimRng::new(7);
    for _ in 0..agents {
        let p = Vec2::new(rng.gen_range(0.0..40.0), rng.gen_range(0.0..40.0));
        world.add_agent(p, None);
    }
    world
}

fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    let variants = [
        ("sequential", UpdateOrder::Sequential, SpatialBackend::BruteForce),
        ("snapshot_brute", UpdateOrder::Snapshot, SpatialBackend::BruteForce),
        ("snapshot_rtree", UpdateOrder::Snapshot, SpatialBackend::RTree),
    ];
    for agents in [100_usize, 1_000] {
        for (name, order, backend) in variants {
            group.bench_with_input(BenchmarkId::new(name, agents), &agents, |b, &n| {
                b.iter_batched(
                    || world(n, order, backend),
                    |mut w| {
                        for _ in 0..10 {
                            black_box(w.step(1.0 / 60.0).expect("finite dt"));
                        }
                        w
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_world_step);
criterion_main!(benches);
