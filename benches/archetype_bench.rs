use criterion::{criterion_group, criterion_main, Bencher, Criterion};

use keepcut::domain::archetypes::closest_archetype;
use keepcut::domain::utils::fuzzy;

fn bench(c: &mut Criterion) {
    let name_1 = "izzet murktide";
    let name_2 = "Izzet Murktide";

    c.bench_function("Jaro-Winkler", |b: &mut Bencher| {
        b.iter(|| fuzzy::jaro_winkler(name_1, name_2))
    });

    c.bench_function("Closest modern archetype", |b: &mut Bencher| {
        b.iter(|| closest_archetype("Modern", "murktide"))
    });

    c.bench_function("Closest unknown-format archetype", |b: &mut Bencher| {
        b.iter(|| closest_archetype("Oathbreaker", "ramp"))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench
}

criterion_main!(benches);
