use std::collections::HashMap;

use crate::algorithm::traits::{reconstruct_path, resolve_endpoints};
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::graph::{Dimension, Graph};
use crate::Result;

/// Bellman-Ford: |V| - 1 rounds relaxing every edge.
///
/// Weights are non-negative, so no negative-cycle pass is run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl<G: Graph> PathAlgorithm<G> for BellmanFord {
    fn name(&self) -> &'static str {
        AlgorithmKind::BellmanFord.name()
    }

    fn find_path(
        &self,
        graph: &G,
        _ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        let (start, end) = match resolve_endpoints(graph, start, end) {
            Ok(endpoints) => endpoints,
            Err(answer) => return Ok(answer),
        };

        let mut distances: HashMap<&str, f64> = HashMap::from([(start, 0.0)]);
        let mut predecessors: HashMap<&str, &str> = HashMap::new();

        for _ in 1..graph.node_count() {
            let mut changed = false;
            for node in graph.nodes() {
                let Some(&base) = distances.get(node) else {
                    continue;
                };
                for (next, edge) in graph.neighbors(node) {
                    let candidate = base + edge.weight(dimension);
                    if candidate < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                        distances.insert(next, candidate);
                        predecessors.insert(next, node);
                        changed = true;
                    }
                }
            }
            // A round without updates means every later round is a no-op too
            if !changed {
                break;
            }
        }

        let Some(&cost) = distances.get(end) else {
            return Ok(None);
        };
        Ok(reconstruct_path(&predecessors, start, end).map(|path| PathResult::new(path, cost)))
    }
}
