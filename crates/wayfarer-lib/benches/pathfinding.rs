use std::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use wayfarer_lib::{fewest_hops, shortest_path, AppearanceNetwork, CampusMap, Graph};

static CAMPUS: Lazy<CampusMap> = Lazy::new(|| {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures");
    CampusMap::load(&dir).unwrap()
});

static LABELED: Lazy<Graph<String, String>> = Lazy::new(|| {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/appearances.tsv");
    AppearanceNetwork::load(&path)
        .unwrap()
        .unweighted_graph()
        .unwrap()
});

fn bench_shortest_walk(c: &mut Criterion) {
    let map = &*CAMPUS;
    c.bench_function("shortest_walk lib-eng", |b| {
        b.iter(|| map.shortest_walk(black_box("LIB"), black_box("ENG")).unwrap())
    });
}

fn bench_point_dijkstra(c: &mut Criterion) {
    let map = &*CAMPUS;
    let start = map.building("LIB").unwrap().location;
    let goal = map.building("ENG").unwrap().location;
    c.bench_function("dijkstra point graph", |b| {
        b.iter(|| shortest_path(map.graph(), black_box(&start), black_box(&goal)).unwrap())
    });
}

fn bench_fewest_hops(c: &mut Criterion) {
    let graph = &*LABELED;
    let start = "Cinder".to_string();
    let goal = "Dusk".to_string();
    c.bench_function("fewest_hops fixture network", |b| {
        b.iter(|| fewest_hops(graph, black_box(&start), black_box(&goal)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_shortest_walk,
    bench_point_dijkstra,
    bench_fewest_hops
);
criterion_main!(benches);
