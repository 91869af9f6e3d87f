use criterion::{criterion_group, criterion_main, Criterion};
use ng_states_core::loader::EMBEDDED_DATASET;
use ng_states_core::prelude::*;
use std::hint::black_box;

fn bench_load(c: &mut Criterion) {
    c.bench_function("parse embedded dataset", |b| {
        b.iter(|| StatesDb::from_json_str(black_box(EMBEDDED_DATASET)))
    });
}

fn bench_queries(c: &mut Criterion) {
    let db = match StatesDb::embedded() {
        Ok(db) => db,
        Err(e) => panic!("embedded dataset failed to load: {e}"),
    };

    c.bench_function("state by alias", |b| b.iter(|| db.state(black_box("abuja"))));
    c.bench_function("find_state_by_lga (last state)", |b| {
        b.iter(|| db.find_state_by_lga(black_box("Zurmi")))
    });
    c.bench_function("search_towns", |b| b.iter(|| db.search_towns(black_box("ka"))));
    c.bench_function("states_by_region", |b| {
        b.iter(|| db.states_by_region(black_box("north-west")))
    });
}

criterion_group!(benches, bench_load, bench_queries);
criterion_main!(benches);
