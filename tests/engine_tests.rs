use city_router::graph::Bounds;
use city_router::{
    AlgorithmKind, CompareOutcome, Dimension, EngineConfig, Error, Graph, Position, Positions, RouteEngine,
    RunOutcome,
};

const EPSILON: f64 = 1e-9;

// A-B (10, 1), B-C (10, 1), A-C (30, 1)
fn triangle_engine(config: EngineConfig) -> RouteEngine {
    let mut engine = RouteEngine::with_config(Positions::new(), config);
    assert!(engine.add_route("A", "B", 10.0, 1.0));
    assert!(engine.add_route("B", "C", 10.0, 1.0));
    assert!(engine.add_route("A", "C", 30.0, 1.0));
    engine
}

fn compared(outcome: CompareOutcome) -> city_router::Comparison {
    match outcome {
        CompareOutcome::Compared(comparison) => comparison,
        other => panic!("expected a comparison, got {:?}", other),
    }
}

#[test]
fn test_find_path_on_triangle() {
    let mut engine = triangle_engine(EngineConfig::default());

    let by_cost = engine.find_path("A", "C", Dimension::Cost).unwrap().unwrap();
    assert_eq!(by_cost.path, vec!["A", "B", "C"]);
    assert_eq!(by_cost.cost, 20.0);

    let by_time = engine.find_path("A", "C", Dimension::Time).unwrap().unwrap();
    assert_eq!(by_time.path, vec!["A", "C"]);
    assert_eq!(by_time.cost, 1.0);
}

#[test]
fn test_labels_are_normalized() {
    let mut engine = RouteEngine::new(Positions::new());
    assert!(engine.add_route(" surat ", "Vadodara", 150.0, 2.5));

    assert!(engine.graph().has_node("SURAT"));
    let result = engine.find_path("surat", "VADODARA ", Dimension::Cost).unwrap().unwrap();
    assert_eq!(result.path, vec!["SURAT", "VADODARA"]);
}

#[test]
fn test_unknown_city_is_an_error() {
    let mut engine = triangle_engine(EngineConfig::default());

    match engine.find_path("NOPLACE", "B", Dimension::Cost) {
        Err(Error::UnknownCity(city)) => assert_eq!(city, "NOPLACE"),
        other => panic!("expected unknown city, got {:?}", other),
    }
    assert!(matches!(engine.compare_all("A", "nowhere"), Err(Error::UnknownCity(_))));
    assert!(matches!(engine.is_reachable("Z", "A"), Err(Error::UnknownCity(_))));
}

#[test]
fn test_disconnected_cities_have_no_path() {
    let mut engine = triangle_engine(EngineConfig::default());
    engine.add_route("X", "Y", 1.0, 1.0);

    assert_eq!(engine.find_path("A", "X", Dimension::Cost).unwrap(), None);
    assert!(!engine.is_reachable("A", "X").unwrap());
    assert!(engine.is_reachable("C", "A").unwrap());
}

#[test]
fn test_disconnected_comparison_skips_the_batch() {
    let mut engine = triangle_engine(EngineConfig::default());
    engine.add_route("X", "Y", 1.0, 1.0);
    let before = engine.cache_stats();

    match engine.compare_all("a", "y").unwrap() {
        CompareOutcome::Unreachable { start, end } => {
            assert_eq!(start, "A");
            assert_eq!(end, "Y");
        }
        other => panic!("expected unreachable, got {:?}", other),
    }
    assert_eq!(engine.cache_stats(), before);
}

#[test]
fn test_repeated_queries_hit_the_cache() {
    let mut engine = triangle_engine(EngineConfig::default());

    let first = engine.find_path("A", "C", Dimension::Cost).unwrap();
    let second = engine.find_path("A", "C", Dimension::Cost).unwrap();
    assert_eq!(first, second);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.entries, 1);
}

#[test]
fn test_no_path_answers_are_cached_too() {
    let mut engine = triangle_engine(EngineConfig::default());
    engine.add_route("X", "Y", 1.0, 1.0);

    assert_eq!(engine.find_path("A", "Y", Dimension::Time).unwrap(), None);
    assert_eq!(engine.find_path("A", "Y", Dimension::Time).unwrap(), None);
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn test_mutation_invalidates_entries_touching_the_city() {
    let mut engine = triangle_engine(EngineConfig::default());
    engine.add_route("C", "D", 5.0, 0.5);

    engine.find_path("A", "C", Dimension::Cost).unwrap();
    engine.find_path("A", "B", Dimension::Cost).unwrap();
    engine.find_path("D", "A", Dimension::Time).unwrap();
    assert_eq!(engine.cache_stats().entries, 3);

    // Touches A and C: every entry above has A or C as an endpoint
    engine.add_route("A", "C", 5.0, 1.0);
    assert_eq!(engine.cache_stats().entries, 0);

    let result = engine.find_path("A", "C", Dimension::Cost).unwrap().unwrap();
    assert_eq!(result.path, vec!["A", "C"]);
    assert_eq!(result.cost, 5.0);

    engine.find_path("A", "B", Dimension::Cost).unwrap();
    // Touches C and D only, so the A -> B entry survives
    engine.add_route("C", "D", 6.0, 0.6);
    assert_eq!(engine.cache_stats().entries, 1);
    let hits = engine.cache_stats().hits;
    engine.find_path("A", "B", Dimension::Cost).unwrap();
    assert_eq!(engine.cache_stats().hits, hits + 1);
}

#[test]
fn test_directed_route_invalidates_and_is_asymmetric() {
    let mut engine = triangle_engine(EngineConfig::default());
    assert_eq!(engine.find_path("A", "B", Dimension::Cost).unwrap().unwrap().cost, 10.0);

    assert!(engine.set_directed_route("a", "b", 4.0, 0.4));
    assert_eq!(engine.find_path("A", "B", Dimension::Cost).unwrap().unwrap().cost, 4.0);
    assert_eq!(engine.find_path("B", "A", Dimension::Cost).unwrap().unwrap().cost, 10.0);
    assert_ne!(
        engine.graph().weight("A", "B", Dimension::Time),
        engine.graph().weight("B", "A", Dimension::Time)
    );
}

#[test]
fn test_rejected_routes_change_nothing() {
    let mut engine = triangle_engine(EngineConfig::default());
    engine.find_path("A", "C", Dimension::Cost).unwrap();

    assert!(!engine.add_route("A", "D", -1.0, 1.0));
    assert!(!engine.add_route("A", "a", 1.0, 1.0));
    assert!(!engine.set_directed_route("A", "C", 1.0, f64::NAN));

    assert!(!engine.graph().has_node("D"));
    assert_eq!(engine.cache_stats().entries, 1);
}

#[test]
fn test_disabled_cache_stores_nothing() {
    let mut engine = triangle_engine(EngineConfig::default().with_cache(false));
    engine.find_path("A", "C", Dimension::Cost).unwrap();
    engine.find_path("A", "C", Dimension::Cost).unwrap();

    let stats = engine.cache_stats();
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.hits, 0);
}

#[test]
fn test_reset_clears_graph_and_cache_but_keeps_positions() {
    let mut engine = RouteEngine::gujarat_preset(EngineConfig::default());
    engine.find_path("AHMEDABAD", "SURAT", Dimension::Cost).unwrap();
    engine
        .find_path_with(AlgorithmKind::AltAStar, "AHMEDABAD", "SURAT", Dimension::Cost)
        .unwrap();
    let positions = engine.positions().len();

    engine.reset();
    assert_eq!(engine.graph().node_count(), 0);
    assert_eq!(engine.cache_stats().entries, 0);
    assert!(engine.landmark_table(Dimension::Cost).is_none());
    assert_eq!(engine.positions().len(), positions);
    assert!(matches!(
        engine.find_path("AHMEDABAD", "SURAT", Dimension::Cost),
        Err(Error::UnknownCity(_))
    ));
}

#[test]
fn test_route_metrics_report_both_totals() {
    let engine = triangle_engine(EngineConfig::default());
    let metrics = engine.route_metrics(&["A", "B", "C"]).unwrap();
    assert_eq!(metrics.cost, 20.0);
    assert_eq!(metrics.time, 2.0);
    assert!(engine.route_metrics(&["A", "Z"]).is_none());
}

#[test]
fn test_auto_placement_positions_new_cities() {
    let config = EngineConfig::default().with_auto_placement(true);
    let mut engine = RouteEngine::with_config(Positions::new(), config);
    engine.add_route("north", "south", 10.0, 1.0);

    assert!(engine.positions().contains("NORTH"));
    assert!(engine.positions().contains("SOUTH"));
    assert_ne!(engine.positions().get("NORTH"), engine.positions().get("SOUTH"));

    // Placement is off by default
    let mut plain = RouteEngine::new(Positions::new());
    plain.add_route("north", "south", 10.0, 1.0);
    assert!(plain.positions().is_empty());
}

#[test]
fn test_auto_placement_stays_inside_custom_bounds() {
    let bounds = Bounds {
        min_lat: 10.0,
        max_lat: 12.0,
        min_lng: 40.0,
        max_lng: 42.0,
        anchor: Position::new(11.0, 41.0),
    };
    let config = EngineConfig::default().with_auto_placement(true);
    let mut engine = RouteEngine::with_config(Positions::new(), config).with_bounds(bounds);
    engine.add_route("A", "B", 10.0, 1.0);
    engine.add_route("B", "C", 10.0, 1.0);

    assert_eq!(engine.positions().get("A"), Some(&bounds.anchor));
    for city in ["B", "C"] {
        let position = engine.positions().get(city).unwrap();
        assert!(bounds.contains(position), "{} placed at {:?}", city, position);
    }
}

#[test]
fn test_dense_network_comparison_survives_exhaustive_blowup() {
    let config = EngineConfig::default().with_exhaustive_expansion_limit(10_000);
    let mut engine = RouteEngine::with_config(Positions::new(), config);
    let cities: Vec<String> = (0..13).map(|i| format!("C{:02}", i)).collect();
    for (i, a) in cities.iter().enumerate() {
        for b in &cities[i + 1..] {
            assert!(engine.add_route(a, b, 5.0, 1.0));
        }
    }

    let comparison = compared(engine.compare_all("C00", "C12").unwrap());
    assert_eq!(comparison.runs.len(), 18);
    assert_eq!(comparison.failures().count(), 4);
    for run in comparison.failures() {
        assert!(matches!(run.algorithm, AlgorithmKind::ExhaustiveDfs | AlgorithmKind::LengthFirstSearch));
        assert!(matches!(&run.outcome, RunOutcome::Failed { message } if message.contains("expansions")));
    }
    assert_eq!(comparison.best(Dimension::Cost).unwrap().result.cost, 5.0);
}

#[test]
fn test_compare_all_on_triangle() {
    let mut engine = triangle_engine(EngineConfig::default());
    let comparison = compared(engine.compare_all("A", "C").unwrap());

    assert_eq!(comparison.runs.len(), 18);
    assert_eq!(comparison.failures().count(), 0);
    assert_eq!(comparison.runs_for(Dimension::Cost).count(), 9);

    for run in comparison.runs_for(Dimension::Cost) {
        let result = run.outcome.result().unwrap();
        assert!((result.cost - 20.0).abs() < EPSILON, "{}", run.name);
        assert!(!run.cached);
    }

    let best_cost = comparison.best(Dimension::Cost).unwrap();
    assert_eq!(best_cost.algorithm, AlgorithmKind::Dijkstra);
    assert_eq!(best_cost.result.path, vec!["A", "B", "C"]);
    let metrics = best_cost.metrics.unwrap();
    assert_eq!((metrics.cost, metrics.time), (20.0, 2.0));

    let best_time = comparison.best(Dimension::Time).unwrap();
    assert_eq!(best_time.algorithm, AlgorithmKind::Dijkstra);
    assert_eq!(best_time.result.cost, 1.0);
    assert_eq!(best_time.metrics.unwrap().cost, 30.0);

    // A second comparison is answered from the cache
    let again = compared(engine.compare_all("A", "C").unwrap());
    assert!(again.runs.iter().all(|run| run.cached));
}

#[test]
fn test_compare_all_isolates_failures() {
    let config = EngineConfig::default().with_exhaustive_node_limit(2);
    let mut engine = triangle_engine(config);
    let comparison = compared(engine.compare_all("A", "C").unwrap());

    assert_eq!(comparison.runs.len(), 18);
    let failed: Vec<_> = comparison.failures().map(|run| run.algorithm).collect();
    assert_eq!(
        failed,
        vec![
            AlgorithmKind::ExhaustiveDfs,
            AlgorithmKind::LengthFirstSearch,
            AlgorithmKind::ExhaustiveDfs,
            AlgorithmKind::LengthFirstSearch,
        ]
    );
    let dfs = comparison.run(AlgorithmKind::ExhaustiveDfs, Dimension::Time).unwrap();
    assert!(matches!(&dfs.outcome, RunOutcome::Failed { message } if message.contains("refuses")));
    assert!(dfs.metrics.is_none());

    assert_eq!(comparison.best(Dimension::Cost).unwrap().result.cost, 20.0);
    // Failed runs are not cached
    assert_eq!(engine.cache_stats().entries, 14);
}

#[test]
fn test_gujarat_preset_asymmetry() {
    let mut engine = RouteEngine::gujarat_preset(EngineConfig::default());

    let up = engine.find_path("SURAT", "VADODARA", Dimension::Cost).unwrap().unwrap();
    let down = engine.find_path("VADODARA", "SURAT", Dimension::Cost).unwrap().unwrap();
    assert_eq!(up.cost, 150.0);
    assert_eq!(down.cost, 130.0);
    assert_eq!(down.path, vec!["VADODARA", "SURAT"]);

    let north = engine.find_path("VADODARA", "AHMEDABAD", Dimension::Time).unwrap().unwrap();
    let south = engine.find_path("AHMEDABAD", "VADODARA", Dimension::Time).unwrap().unwrap();
    assert!((north.cost - 2.0).abs() < EPSILON);
    assert!((south.cost - 1.8).abs() < EPSILON);

    // DIU has coordinates but no roads
    assert!(engine.positions().contains("DIU"));
    assert!(matches!(
        engine.find_path("DIU", "SURAT", Dimension::Cost),
        Err(Error::UnknownCity(_))
    ));
}

#[test]
fn test_gujarat_comparison_finds_routes_everywhere() {
    let mut engine = RouteEngine::gujarat_preset(EngineConfig::default());
    let comparison = compared(engine.compare_all("ahmedabad", "surat").unwrap());

    assert_eq!(comparison.start, "AHMEDABAD");
    assert_eq!(comparison.failures().count(), 0);
    let exact = engine.find_path("AHMEDABAD", "SURAT", Dimension::Cost).unwrap().unwrap();
    let best = comparison.best(Dimension::Cost).unwrap();
    assert!((best.result.cost - exact.cost).abs() < EPSILON);
    for run in &comparison.runs {
        let result = run.outcome.result().unwrap();
        assert!(result.cost >= comparison.best(run.dimension).unwrap().result.cost - EPSILON);
    }
}
