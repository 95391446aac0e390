//! Criterion benchmarks for frame rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ripple_bench::{reference_profile, stress_profile};
use ripple_render::Renderer;

fn bench_render_into_30k(c: &mut Criterion) {
    let mut world = reference_profile(42).unwrap();
    for _ in 0..200 {
        world.tick();
    }
    let renderer = Renderer::new();
    let mut out = vec![0u8; renderer.frame_len(&world.snapshot())];

    c.bench_function("render_into_30k", |b| {
        b.iter(|| {
            renderer.render_into(&world.snapshot(), &mut out).unwrap();
            black_box(&out);
        });
    });
}

fn bench_render_alloc_262k(c: &mut Criterion) {
    let mut world = stress_profile(42).unwrap();
    for _ in 0..50 {
        world.tick();
    }
    let renderer = Renderer::new();

    c.bench_function("render_alloc_262k", |b| {
        b.iter(|| {
            black_box(renderer.render(&world.snapshot()));
        });
    });
}

criterion_group!(benches, bench_render_into_30k, bench_render_alloc_262k);
criterion_main!(benches);
