use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mapgen_terrain::*;

fn bench_hash_seed(c: &mut Criterion) {
    c.bench_function("hash_seed", |bencher| {
        bencher.iter(|| black_box(hash_seed(black_box("map-generation"))))
    });
}

fn bench_field_sample(c: &mut Criterion) {
    let value = NoiseField::new(NoiseAlgorithm::Value, 0.1, 42);
    let simplex = NoiseField::new(NoiseAlgorithm::OpenSimplex, 0.01, 42);
    c.bench_function("sample_value", |bencher| {
        bencher.iter(|| black_box(value.sample(black_box(123), black_box(-456))))
    });
    c.bench_function("sample_open_simplex", |bencher| {
        bencher.iter(|| black_box(simplex.sample(black_box(123), black_box(-456))))
    });
}

fn bench_classify(c: &mut Criterion) {
    let table = BandTable::default();
    c.bench_function("classify", |bencher| {
        bencher.iter(|| black_box(table.classify(black_box(1.2), black_box(0.4))))
    });
}

fn bench_rebuild_40(c: &mut Criterion) {
    let mut state = GeneratorState::new(GeneratorSettings::default()).unwrap();
    c.bench_function("rebuild_chunk_40", |bencher| {
        bencher.iter(|| black_box(state.rebuild()))
    });
}

fn bench_rebuild_80(c: &mut Criterion) {
    let mut state = GeneratorState::new(GeneratorSettings {
        chunk_size: 80,
        map_width: 240,
        ..Default::default()
    })
    .unwrap();
    c.bench_function("rebuild_chunk_80", |bencher| {
        bencher.iter(|| black_box(state.rebuild()))
    });
}

fn bench_pan_cycle(c: &mut Criterion) {
    let mut state = GeneratorState::new(GeneratorSettings::default()).unwrap();
    c.bench_function("pan_east_west", |bencher| {
        bencher.iter(|| {
            state.pan_east();
            state.pan_west();
        })
    });
}

criterion_group!(
    benches,
    bench_hash_seed,
    bench_field_sample,
    bench_classify,
    bench_rebuild_40,
    bench_rebuild_80,
    bench_pan_cycle,
);
criterion_main!(benches);
