use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use rigid2d::{collision::sat_box_box, RigidBody2D, Vec2, World};

const BODIES: [u32; 5] = [10, 50, 100, 250, 500];

fn random_body(rng: &mut impl Rng, w: f32) -> RigidBody2D {
    let pos = Vec2::new(rng.gen_range((-w / 2.0)..(w / 2.0)), rng.gen_range(-2.0..w));
    if rng.gen_bool(0.5) {
        RigidBody2D::circle(pos, rng.gen_range(0.1..0.5), rng.gen_range(0.5..5.0))
    } else {
        RigidBody2D::rectangle(
            pos,
            rng.gen_range(0.2..1.0),
            rng.gen_range(0.2..1.0),
            rng.gen_range(0.5..5.0),
        )
        .with_angle(rng.gen_range(0.0..std::f32::consts::TAU))
    }
}

fn world_step(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("World step");
    for i in BODIES {
        let mut world = World::new();
        for _ in 0..i {
            world.add_body(random_body(&mut rng, 20.0));
        }
        group.throughput(criterion::Throughput::Elements(i as u64));
        group.bench_function(BenchmarkId::new("Random bodies", i), |b| {
            b.iter(|| world.step(black_box(1.0 / 60.0)));
        });
    }
}

fn sat_box_pairs(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let pairs: Vec<(RigidBody2D, RigidBody2D)> = (0..1000)
        .map(|_| {
            let a = RigidBody2D::rectangle(Vec2::ZERO, 1.0, 1.0, 1.0).with_angle(rng.gen_range(0.0..std::f32::consts::PI));
            let b = RigidBody2D::rectangle(
                Vec2::new(rng.gen_range(-1.5..1.5), rng.gen_range(-1.5..1.5)),
                rng.gen_range(0.2..1.5),
                rng.gen_range(0.2..1.5),
                1.0,
            )
            .with_angle(rng.gen_range(0.0..std::f32::consts::PI));
            (a, b)
        })
        .collect();

    let mut group = c.benchmark_group("SAT");
    group.throughput(criterion::Throughput::Elements(pairs.len() as u64));
    group.bench_function("Random box pairs", |b| {
        b.iter(|| {
            for (a, other) in pairs.iter() {
                black_box(sat_box_box(a, other));
            }
        });
    });
}

criterion_group!(benches, world_step, sat_box_pairs);
criterion_main!(benches);
