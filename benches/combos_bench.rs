use criterion::{criterion_group, criterion_main, Criterion};
use homerow::combos::{generate, EnumerationMode};
use homerow::config::EngineParams;
use homerow::variants::Variant;
use std::hint::black_box;

fn bench_generator(c: &mut Criterion) {
    let keys = Variant::Compiled.keymap().keys();

    c.bench_function("permutations_8_bounded_3", |b| {
        b.iter(|| generate(black_box(&keys), 3, EnumerationMode::Permutations))
    });

    c.bench_function("mixed_8_unbounded", |b| {
        b.iter(|| generate(black_box(&keys), keys.len(), EnumerationMode::Mixed))
    });
}

fn bench_build(c: &mut Criterion) {
    let params = EngineParams::default();
    c.bench_function("build_compiled_profile", |b| {
        b.iter(|| Variant::Compiled.build(black_box(&params)))
    });
}

criterion_group!(benches, bench_generator, bench_build);
criterion_main!(benches);
