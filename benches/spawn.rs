use criterion::*;
use std::hint::black_box;

use ecs_registry::Registry;

mod common;
use common::*;

fn spawn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    for &(label, n) in &[
        ("spawn_10k", ENTITIES_SMALL),
        ("spawn_100k", ENTITIES_MED),
    ] {
        group.bench_function(label, |b| {
            b.iter_batched(
                Registry::new,
                |mut registry| {
                    populate(&mut registry, n);
                    black_box(registry);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("churn_10k", |b| {
        b.iter_batched(
            || {
                let mut registry = Registry::new();
                let ids = populate(&mut registry, ENTITIES_SMALL);
                (registry, ids)
            },
            |(mut registry, ids)| {
                for &entity in ids.iter().step_by(2) {
                    registry.kill_entity(entity);
                }
                for index in 0..ids.len() / 2 {
                    let entity = registry.make_entity();
                    registry
                        .bind(entity, Position { x: index as f32, y: 1.0 })
                        .unwrap();
                }
                black_box(registry);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, spawn_benchmark);
criterion_main!(benches);
