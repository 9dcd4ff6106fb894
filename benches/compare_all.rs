use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

use city_router::graph::generators::generate_city_network;
use city_router::graph::Bounds;
use city_router::{AlgorithmKind, CompareOutcome, Dimension, EngineConfig, RouteEngine};

// Cache off so every iteration recomputes all eighteen runs
fn uncached() -> EngineConfig {
    EngineConfig::default().with_cache(false)
}

fn benchmark_gujarat(c: &mut Criterion) {
    let mut engine = RouteEngine::gujarat_preset(uncached());

    c.bench_function("compare_all_ahmedabad_surat", |b| {
        b.iter(|| {
            let outcome = engine.compare_all("AHMEDABAD", "SURAT").expect("cities exist");
            match outcome {
                CompareOutcome::Compared(comparison) => black_box(comparison.runs.len()),
                CompareOutcome::Unreachable { .. } => 0,
            }
        });
    });

    c.bench_function("alt_astar_bhuj_vapi", |b| {
        b.iter(|| {
            let result = engine
                .find_path_with(AlgorithmKind::AltAStar, "BHUJ", "VAPI", Dimension::Cost)
                .expect("cities exist");
            black_box(result.map(|path| path.hop_count()))
        });
    });
}

fn benchmark_generated(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_all_generated");
    for cities in [16usize, 32, 48] {
        let mut rng = StdRng::seed_from_u64(cities as u64);
        let network = generate_city_network(&mut rng, cities, cities / 4, &Bounds::GUJARAT);
        let mut engine = RouteEngine::with_config(network.positions.clone(), uncached());
        for (from, to, record) in &network.routes {
            engine.add_route(from, to, record.cost, record.time);
        }
        let labels = network.cities();
        let (start, end) = (labels[0].clone(), labels[labels.len() - 1].clone());

        group.bench_with_input(BenchmarkId::from_parameter(cities), &cities, |b, _| {
            b.iter(|| black_box(engine.compare_all(&start, &end).expect("cities exist")));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_gujarat, benchmark_generated);
criterion_main!(benches);
