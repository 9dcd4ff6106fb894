use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use city_router::graph::generators::{generate_city_network, CityNetwork};
use city_router::graph::Bounds;
use city_router::{AlgorithmKind, Dimension, EngineConfig, RouteEngine};

// Builds an engine over a generated network with caching off, so every
// query is computed
fn build_engine(network: &CityNetwork) -> RouteEngine {
    let config = EngineConfig::default().with_cache(false);
    let mut engine = RouteEngine::with_config(network.positions.clone(), config);
    for (from, to, record) in &network.routes {
        engine.add_route(from, to, record.cost, record.time);
    }
    engine
}

fn main() {
    env_logger::init();

    // Exhaustive strategies refuse the largest sizes
    let network_sizes = [8, 16, 32, 64, 128, 256];
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: all strategies, cost dimension");
    println!("Networks: random spanning tree plus size/4 extra routes");
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &network_sizes {
        let network = generate_city_network(&mut rng, size, size / 4, &Bounds::GUJARAT);
        let mut engine = build_engine(&network);
        let cities = network.cities();
        let (Some(start), Some(end)) = (cities.first(), cities.last()) else {
            continue;
        };

        println!(
            "\n{} cities, {} directed edges: {} -> {}",
            size,
            network.routes.len() * 2,
            start,
            end
        );

        let mut row = Vec::new();
        for algorithm in AlgorithmKind::ALL {
            let started = Instant::now();
            let outcome = engine.find_path_with(algorithm, start, end, Dimension::Cost);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            match outcome {
                Ok(Some(result)) => {
                    println!(
                        "  {:<24} cost {:>10.2} over {:>3} hops in {:>9.3} ms",
                        algorithm.name(),
                        result.cost,
                        result.hop_count(),
                        elapsed_ms
                    );
                    row.push(Some(elapsed_ms));
                }
                Ok(None) => {
                    println!("  {:<24} no path", algorithm.name());
                    row.push(None);
                }
                Err(err) => {
                    println!("  {:<24} skipped: {}", algorithm.name(), err);
                    row.push(None);
                }
            }
        }
        results.push((size, row));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results (ms)");
    println!("=====================================================");
    print!("{:<8}", "Cities");
    for algorithm in AlgorithmKind::ALL {
        print!(" | {:>14}", algorithm.id());
    }
    println!();

    for (size, row) in &results {
        print!("{:<8}", size);
        for timing in row {
            match timing {
                Some(ms) => print!(" | {:>14.3}", ms),
                None => print!(" | {:>14}", "-"),
            }
        }
        println!();
    }
}
