use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use crate::algorithm::dijkstra::single_source;
use crate::graph::{Dimension, Graph};
use crate::heuristic::Heuristic;

/// Picks the lexicographically first `count` cities as landmarks.
///
/// Selection ignores reachability and spread; a graph with several components
/// may end up with every landmark in one of them, which only weakens the
/// estimate for the others.
pub fn select_landmarks<G: Graph>(graph: &G, count: usize) -> Vec<String> {
    // `nodes()` yields labels in sorted order
    graph.nodes().take(count).map(str::to_string).collect()
}

/// Single-source distances from each landmark under one dimension
#[derive(Debug, Clone)]
pub struct LandmarkTable {
    dimension: Dimension,
    distances: BTreeMap<String, HashMap<String, f64>>,
}

impl LandmarkTable {
    /// Runs a full Dijkstra from every landmark and stores the distances
    pub fn precompute<G: Graph>(graph: &G, landmarks: &[String], dimension: Dimension) -> Self {
        let started = Instant::now();
        let distances = landmarks
            .iter()
            .map(|landmark| {
                let table = single_source(graph, landmark, dimension)
                    .into_iter()
                    .map(|(node, distance)| (node.to_string(), distance))
                    .collect();
                (landmark.clone(), table)
            })
            .collect();

        debug!(
            "Precomputed {} landmark tables for {} in {:?}",
            landmarks.len(),
            dimension,
            started.elapsed()
        );

        LandmarkTable {
            dimension,
            distances,
        }
    }

    /// Dimension the distances were computed for
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn landmarks(&self) -> impl Iterator<Item = &str> + '_ {
        self.distances.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Shortest distance from `landmark` to `node`, if reachable
    pub fn distance(&self, landmark: &str, node: &str) -> Option<f64> {
        self.distances.get(landmark)?.get(node).copied()
    }
}

/// Triangle-inequality bound: max over landmarks L of |d(L,target) - d(L,node)|.
///
/// Landmarks that cannot reach either endpoint contribute nothing. With
/// asymmetric edges only the `d(L,target) - d(L,node)` side is a true lower
/// bound; the absolute value keeps the estimate informative in both
/// directions at the cost of strict admissibility.
#[derive(Debug, Clone, Copy)]
pub struct LandmarkHeuristic<'a> {
    table: &'a LandmarkTable,
}

impl<'a> LandmarkHeuristic<'a> {
    pub fn new(table: &'a LandmarkTable) -> Self {
        LandmarkHeuristic { table }
    }
}

impl Heuristic for LandmarkHeuristic<'_> {
    fn estimate(&self, node: &str, target: &str) -> f64 {
        self.table
            .distances
            .values()
            .filter_map(|table| Some((table.get(target)? - table.get(node)?).abs()))
            .fold(0.0, f64::max)
    }
}
