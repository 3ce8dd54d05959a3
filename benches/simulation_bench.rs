use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gravity_letters::{
    config::LETTERS,
    letters::{SimulationContext, SpriteInfo},
    SketchConfig,
};
use rand::{rngs::StdRng, SeedableRng};

fn populated_context(seed: u64) -> SimulationContext {
    let sprites: BTreeMap<char, SpriteInfo> = LETTERS.iter().map(|&c| (c, SpriteInfo::new(200, 220))).collect();
    let mut ctx = SimulationContext::new(SketchConfig::default());
    let mut rng = StdRng::seed_from_u64(seed);
    ctx.spawn_all(&sprites, &mut rng).expect("sprites for every letter");
    ctx
}

// 26 letters falling from their spawn points for one second of frames
fn bench_frame_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("letters_frame");

    for frames in [1usize, 60, 300].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(frames), frames, |b, &n| {
            b.iter(|| {
                let mut ctx = populated_context(7);
                for _ in 0..n {
                    black_box(ctx.frame());
                }
            });
        });
    }
    group.finish();
}

// Reset of a settled pile back to the spawn layout
fn bench_reset(c: &mut Criterion) {
    let mut ctx = populated_context(7);
    for _ in 0..300 {
        ctx.frame();
    }

    c.bench_function("letters_reset", |b| {
        b.iter(|| {
            ctx.reset();
            black_box(&ctx.world.bodies);
        });
    });
}

criterion_group!(benches, bench_frame_loop, bench_reset);
criterion_main!(benches);
