use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wagerline::data::default_pools;
use wagerline::progression::ProgressionEngine;
use wagerline::reward::{draw, DrawMode, Multiplier, Sample};

fn bench_progression(c: &mut Criterion) {
    let engine = ProgressionEngine::default();

    c.bench_function("required_wager 1..=100", |b| {
        b.iter(|| {
            for level in 1..=100 {
                black_box(engine.required_wager(black_box(level)).ok());
            }
        })
    });

    c.bench_function("level_for_wager", |b| {
        b.iter(|| engine.level_for_wager(black_box(12_345)))
    });
}

fn bench_draw(c: &mut Criterion) {
    let pools = default_pools();
    let pool = &pools["premio-pix"];
    let multiplier = Multiplier::new(2.0).unwrap();
    let samples: Vec<Sample> = (0..100).map(|i| Sample::new(i as f64 + 0.5).unwrap()).collect();

    c.bench_function("draw value-scaled", |b| {
        b.iter(|| {
            for &sample in &samples {
                black_box(draw(pool, multiplier, DrawMode::ValueScaled, sample));
            }
        })
    });
}

criterion_group!(benches, bench_progression, bench_draw);
criterion_main!(benches);
