use std::collections::{HashMap, HashSet};

use crate::algorithm::traits::{reconstruct_path, resolve_endpoints};
use crate::algorithm::PathResult;
use crate::data_structures::MinHeap;
use crate::graph::{Dimension, Graph};
use crate::heuristic::Heuristic;

/// Best-first relaxation loop shared by Dijkstra, A* and ALT A*.
///
/// Priority is accumulated distance plus `heuristic`'s estimate to `end`. A
/// city is finalized the first time it is popped; later pops of the same city
/// are stale and skipped. The search stops as soon as `end` is finalized.
pub(crate) fn best_first_search<G, H>(
    graph: &G,
    start: &str,
    end: &str,
    dimension: Dimension,
    heuristic: &H,
) -> Option<PathResult>
where
    G: Graph,
    H: Heuristic + ?Sized,
{
    let (start, end) = match resolve_endpoints(graph, start, end) {
        Ok(endpoints) => endpoints,
        Err(answer) => return answer,
    };

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut finalized: HashSet<&str> = HashSet::new();
    let mut queue = MinHeap::new();

    distances.insert(start, 0.0);
    queue.push(start, heuristic.estimate(start, end));

    while let Some((node, _)) = queue.pop() {
        if !finalized.insert(node) {
            continue;
        }
        if node == end {
            break;
        }

        let base = distances.get(node).copied().unwrap_or(f64::INFINITY);
        for (next, edge) in graph.neighbors(node) {
            if finalized.contains(next) {
                continue;
            }
            let candidate = base + edge.weight(dimension);
            if candidate < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                distances.insert(next, candidate);
                predecessors.insert(next, node);
                queue.push(next, candidate + heuristic.estimate(next, end));
            }
        }
    }

    if !finalized.contains(end) {
        return None;
    }
    let cost = *distances.get(end)?;
    let path = reconstruct_path(&predecessors, start, end)?;
    Some(PathResult::new(path, cost))
}
