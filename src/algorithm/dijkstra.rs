use std::collections::{HashMap, HashSet};

use crate::algorithm::search::best_first_search;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::data_structures::MinHeap;
use crate::graph::{Dimension, Graph};
use crate::heuristic::ZeroHeuristic;
use crate::Result;

/// Classic Dijkstra's algorithm with early exit at the target
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl<G: Graph> PathAlgorithm<G> for Dijkstra {
    fn name(&self) -> &'static str {
        AlgorithmKind::Dijkstra.name()
    }

    fn find_path(
        &self,
        graph: &G,
        _ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        Ok(best_first_search(graph, start, end, dimension, &ZeroHeuristic))
    }
}

/// Distances from `source` to every reachable city, with no target.
///
/// Returns an empty map when `source` is not in the graph.
pub fn single_source<'a, G: Graph>(
    graph: &'a G,
    source: &str,
    dimension: Dimension,
) -> HashMap<&'a str, f64> {
    let mut distances: HashMap<&'a str, f64> = HashMap::new();
    let Some(source) = graph.node_key(source) else {
        return distances;
    };

    let mut finalized: HashSet<&str> = HashSet::new();
    let mut queue = MinHeap::new();
    distances.insert(source, 0.0);
    queue.push(source, 0.0);

    while let Some((node, dist)) = queue.pop() {
        if !finalized.insert(node) {
            continue;
        }
        for (next, edge) in graph.neighbors(node) {
            let candidate = dist + edge.weight(dimension);
            if candidate < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                distances.insert(next, candidate);
                queue.push(next, candidate);
            }
        }
    }

    distances
}
