use ordered_float::OrderedFloat;
use std::collections::HashSet;

use crate::algorithm::traits::resolve_endpoints;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::graph::{Dimension, Graph};
use crate::{Error, Result};

/// Depth-first enumeration of every simple path, keeping the cheapest.
///
/// Cheaper edges are tried first at each step. There is no bound-based
/// pruning and no early exit, so the running time is exponential in the worst
/// case. Graphs above `exhaustive_node_limit` cities are refused, and the walk
/// stops with an error after `exhaustive_expansion_limit` visits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveDfs;

struct Walk<'a, G: Graph> {
    graph: &'a G,
    end: &'a str,
    dimension: Dimension,
    max_depth: usize,
    budget: usize,
    expansions: usize,
    on_path: HashSet<&'a str>,
    path: Vec<&'a str>,
    best: Option<(Vec<&'a str>, f64)>,
}

impl<'a, G: Graph> Walk<'a, G> {
    fn explore(&mut self, node: &'a str, cost: f64) -> Result<()> {
        self.expansions += 1;
        if self.expansions > self.budget {
            return Err(Error::ExpansionLimitExceeded {
                algorithm: AlgorithmKind::ExhaustiveDfs.to_string(),
                limit: self.budget,
            });
        }
        if node == self.end {
            if self.best.as_ref().map_or(true, |(_, best)| cost < *best) {
                self.best = Some((self.path.clone(), cost));
            }
            return Ok(());
        }
        if self.path.len() >= self.max_depth {
            return Ok(());
        }

        let mut neighbors: Vec<(&'a str, f64)> = self
            .graph
            .neighbors(node)
            .map(|(next, edge)| (next, edge.weight(self.dimension)))
            .collect();
        neighbors.sort_by_key(|&(_, weight)| OrderedFloat(weight));

        for (next, weight) in neighbors {
            if self.on_path.insert(next) {
                self.path.push(next);
                let explored = self.explore(next, cost + weight);
                self.path.pop();
                self.on_path.remove(next);
                explored?;
            }
        }
        Ok(())
    }
}

impl<G: Graph> PathAlgorithm<G> for ExhaustiveDfs {
    fn name(&self) -> &'static str {
        AlgorithmKind::ExhaustiveDfs.name()
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
                algorithm: AlgorithmKind::ExhaustiveDfs.to_string(),
                nodes: graph.node_count(),
                limit,
            });
        }

        let (start, end) = match resolve_endpoints(graph, start, end) {
            Ok(endpoints) => endpoints,
            Err(answer) => return Ok(answer),
        };

        let mut walk = Walk {
            graph,
            end,
            dimension,
            // A simple path never holds more cities than the graph
            max_depth: limit,
            budget: ctx.config.exhaustive_expansion_limit,
            expansions: 0,
            on_path: HashSet::from([start]),
            path: vec![start],
            best: None,
        };
        walk.explore(start, 0.0)?;

        Ok(walk.best.map(|(path, cost)| {
            PathResult::new(path.into_iter().map(str::to_string).collect(), cost)
        }))
    }
}
