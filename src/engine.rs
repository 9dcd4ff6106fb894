//! The route engine: graph store, result cache and landmark tables behind one
//! owner, so every mutation invalidates derived state in the same call.

use log::{debug, info, warn};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::algorithm::{AlgorithmKind, PathResult, SearchContext};
use crate::cache::{CacheKey, CacheStats, ResultCache};
use crate::compare::RouteMetrics;
use crate::config::EngineConfig;
use crate::graph::normalize_label;
use crate::graph::preset::{gujarat_positions, load_gujarat_routes};
use crate::graph::{Bounds, Dimension, EdgeRecord, Graph, MutableGraph, Positions, RouteGraph};
use crate::heuristic::{select_landmarks, LandmarkTable};
use crate::{Error, Result};

/// Relative tolerance when checking a reported cost against its path
const COST_TOLERANCE: f64 = 1e-6;

/// Multi-algorithm shortest path engine over a mutable city network
#[derive(Debug)]
pub struct RouteEngine {
    graph: RouteGraph,
    positions: Positions,
    cache: ResultCache,
    /// One table per dimension, built on first ALT query after a mutation
    landmarks: HashMap<Dimension, LandmarkTable>,
    config: EngineConfig,
    bounds: Bounds,
}

impl RouteEngine {
    /// Creates an empty engine that reads heuristic coordinates from `positions`
    pub fn new(positions: Positions) -> Self {
        Self::with_config(positions, EngineConfig::default())
    }

    pub fn with_config(positions: Positions, config: EngineConfig) -> Self {
        RouteEngine {
            graph: RouteGraph::new(),
            positions,
            cache: ResultCache::new(),
            landmarks: HashMap::new(),
            config,
            bounds: Bounds::GUJARAT,
        }
    }

    /// Engine loaded with the bundled Gujarat network
    pub fn gujarat_preset(config: EngineConfig) -> Self {
        let mut engine = Self::with_config(gujarat_positions(), config);
        engine.load_gujarat_preset();
        engine
    }

    /// Set the region used when auto placing cities
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The landmark table for a dimension, if it is currently built
    pub fn landmark_table(&self, dimension: Dimension) -> Option<&LandmarkTable> {
        self.landmarks.get(&dimension)
    }

    /// Adds a two-way route, or updates an existing one.
    ///
    /// Returns false and changes nothing when the input is rejected (empty
    /// label, self-loop, negative or non-finite weight).
    pub fn add_route(&mut self, start: &str, end: &str, cost: f64, time: f64) -> bool {
        let (start, end) = (normalize_label(start), normalize_label(end));
        let record = EdgeRecord::new(cost, time);
        if !self.graph.upsert_edge(&start, &end, record) {
            return false;
        }
        info!("Route {} <-> {} set to cost {} time {}", start, end, cost, time);
        self.after_mutation(&start, &end);
        true
    }

    /// Replaces a single direction of a route, leaving the reverse untouched
    /// (or creating it with equal weights if the pair was not connected).
    pub fn set_directed_route(&mut self, from: &str, to: &str, cost: f64, time: f64) -> bool {
        let (from, to) = (normalize_label(from), normalize_label(to));
        let record = EdgeRecord::new(cost, time);
        if !self.graph.set_directed_edge(&from, &to, record) {
            return false;
        }
        info!("Route {} -> {} overridden to cost {} time {}", from, to, cost, time);
        self.after_mutation(&from, &to);
        true
    }

    /// Shortest path by Dijkstra.
    ///
    /// `Err(Error::UnknownCity)` if an endpoint is not in the graph,
    /// `Ok(None)` if both exist but are not connected.
    pub fn find_path(&mut self, start: &str, end: &str, dimension: Dimension) -> Result<Option<PathResult>> {
        self.find_path_with(AlgorithmKind::Dijkstra, start, end, dimension)
    }

    /// Shortest path by the chosen strategy, answered from the cache when possible
    pub fn find_path_with(
        &mut self,
        algorithm: AlgorithmKind,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        let (start, end) = self.resolve(start, end)?;
        let (answer, _) = self.run_cached(algorithm, &start, &end, dimension)?;
        Ok(answer)
    }

    /// Whether any sequence of edges leads from `start` to `end`
    pub fn is_reachable(&self, start: &str, end: &str) -> Result<bool> {
        let (start, end) = self.resolve(start, end)?;
        Ok(reachable(&self.graph, &start, &end))
    }

    /// Totals of both dimensions along a path, `None` if a hop has no edge
    pub fn route_metrics<S: AsRef<str>>(&self, path: &[S]) -> Option<RouteMetrics> {
        Some(RouteMetrics {
            cost: self.graph.path_weight(path, Dimension::Cost)?,
            time: self.graph.path_weight(path, Dimension::Time)?,
        })
    }

    /// Clears the graph, the cache and every landmark table.
    ///
    /// The position lookup is supplied from outside and survives a reset.
    pub fn reset(&mut self) {
        self.graph.clear();
        self.cache.clear();
        self.landmarks.clear();
        info!("Engine reset");
    }

    /// Replaces the network with the bundled Gujarat one
    pub fn load_gujarat_preset(&mut self) {
        self.reset();
        for (city, position) in gujarat_positions().iter() {
            self.positions.insert(city, *position);
        }
        load_gujarat_routes(&mut self.graph);
        info!(
            "Loaded Gujarat preset: {} cities, {} directed edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
    }

    /// Normalizes both labels and checks that they are cities of the graph
    pub(crate) fn resolve(&self, start: &str, end: &str) -> Result<(String, String)> {
        let (start, end) = (normalize_label(start), normalize_label(end));
        for city in [&start, &end] {
            if !self.graph.has_node(city) {
                return Err(Error::UnknownCity(city.clone()));
            }
        }
        Ok((start, end))
    }

    /// Runs one strategy through the cache. The flag is true on a cache hit.
    ///
    /// Results are checked against the graph before they are stored; an
    /// error from the strategy or the check is returned and nothing is cached.
    pub(crate) fn run_cached(
        &mut self,
        algorithm: AlgorithmKind,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<(Option<PathResult>, bool)> {
        let key = CacheKey::new(algorithm, dimension, start, end);
        if self.config.cache_enabled {
            if let Some(answer) = self.cache.get(&key) {
                return Ok((answer, true));
            }
        }

        if algorithm.needs_landmarks() {
            self.ensure_landmarks(dimension);
        }

        let mut ctx = SearchContext::new(&self.positions, &self.config);
        if let Some(table) = self.landmarks.get(&dimension) {
            ctx = ctx.with_landmarks(table);
        }
        let answer = algorithm.run(&self.graph, &ctx, start, end, dimension)?;
        if let Some(result) = &answer {
            check_result(&self.graph, algorithm, result, start, end, dimension)?;
        }
        debug!(
            "{} {} {} -> {}: {:?}",
            algorithm,
            dimension,
            start,
            end,
            answer.as_ref().map(|result| result.cost)
        );

        if self.config.cache_enabled {
            self.cache.put(key, answer.clone());
        }
        Ok((answer, false))
    }

    fn ensure_landmarks(&mut self, dimension: Dimension) {
        if self.landmarks.contains_key(&dimension) {
            return;
        }
        let chosen = select_landmarks(&self.graph, self.config.landmark_count);
        let table = LandmarkTable::precompute(&self.graph, &chosen, dimension);
        self.landmarks.insert(dimension, table);
    }

    fn after_mutation(&mut self, a: &str, b: &str) {
        if self.config.auto_place_cities {
            for city in [a, b] {
                if !self.positions.contains(city) {
                    let position = self.positions.place_new(city, &self.bounds);
                    debug!("Placed {} at {:.4}, {:.4}", city, position.lat, position.lng);
                }
            }
        }
        self.cache.invalidate_node(a);
        self.cache.invalidate_node(b);
        self.landmarks.clear();
    }
}

/// Breadth-first flood fill from `start`
fn reachable<G: Graph>(graph: &G, start: &str, end: &str) -> bool {
    if start == end {
        return true;
    }
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for (next, _) in graph.neighbors(node) {
            if next == end {
                return true;
            }
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

/// Rejects a result whose path does not connect the endpoints through
/// existing edges or whose cost disagrees with the path
fn check_result<G: Graph>(
    graph: &G,
    algorithm: AlgorithmKind,
    result: &PathResult,
    start: &str,
    end: &str,
    dimension: Dimension,
) -> Result<()> {
    let malformed = |reason: String| {
        warn!("{} returned a malformed result: {}", algorithm, reason);
        Err(Error::MalformedResult {
            algorithm: algorithm.to_string(),
            reason,
        })
    };

    match (result.path.first(), result.path.last()) {
        (Some(first), Some(last)) if first == start && last == end => {}
        _ => return malformed(format!("path does not run from {} to {}", start, end)),
    }
    let Some(total) = graph.path_weight(&result.path, dimension) else {
        return malformed("path uses a missing edge".to_string());
    };
    if !result.cost.is_finite() || (total - result.cost).abs() > COST_TOLERANCE * total.max(1.0) {
        return malformed(format!("reported {} but path weighs {}", result.cost, total));
    }
    Ok(())
}
