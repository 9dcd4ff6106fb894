use std::collections::VecDeque;

use crate::algorithm::traits::resolve_endpoints;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::graph::{Dimension, Graph};
use crate::{Error, Result};

/// Breadth-style search over partial paths, shortest (fewest cities) first.
///
/// Every simple path from the start is expanded in order of length; paths
/// that reach the end are not extended further, and the cheapest of them is
/// kept. This is not weight-aware BFS; it exists to contrast with the
/// weighted strategies.
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthFirstSearch;

struct Partial<'a> {
    node: &'a str,
    path: Vec<&'a str>,
    cost: f64,
}

impl<G: Graph> PathAlgorithm<G> for LengthFirstSearch {
    fn name(&self) -> &'static str {
        AlgorithmKind::LengthFirstSearch.name()
    }

    fn find_path(
        &self,
        graph: &G,
        ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        let limit = ctx.config.exhaustive_node_limit;
        if graph.node_count() > limit {
            return Err(Error::SearchLimitExceeded {
                algorithm: AlgorithmKind::LengthFirstSearch.to_string(),
                nodes: graph.node_count(),
                limit,
            });
        }

        let (start, end) = match resolve_endpoints(graph, start, end) {
            Ok(endpoints) => endpoints,
            Err(answer) => return Ok(answer),
        };

        // Every expansion adds exactly one city, so FIFO order dequeues
        // partial paths by non-decreasing length, ties in insertion order.
        let mut queue = VecDeque::from([Partial {
            node: start,
            path: vec![start],
            cost: 0.0,
        }]);
        let mut best: Option<(Vec<&str>, f64)> = None;
        let budget = ctx.config.exhaustive_expansion_limit;
        let mut expansions = 0usize;

        while let Some(Partial { node, path, cost }) = queue.pop_front() {
            if node == end {
                if best.as_ref().map_or(true, |(_, best_cost)| cost < *best_cost) {
                    best = Some((path, cost));
                }
                continue;
            }

            for (next, edge) in graph.neighbors(node) {
                if path.contains(&next) {
                    continue;
                }
                expansions += 1;
                if expansions > budget {
                    return Err(Error::ExpansionLimitExceeded {
                        algorithm: AlgorithmKind::LengthFirstSearch.to_string(),
                        limit: budget,
                    });
                }
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);
                queue.push_back(Partial {
                    node: next,
                    path: extended,
                    cost: cost + edge.weight(dimension),
                });
            }
        }

        Ok(best.map(|(path, cost)| {
            PathResult::new(path.into_iter().map(str::to_string).collect(), cost)
        }))
    }
}
