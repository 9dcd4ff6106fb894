use std::collections::HashMap;

use crate::algorithm::traits::resolve_endpoints;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::graph::{Dimension, Graph};
use crate::Result;

/// Floyd-Warshall all-pairs distances with next-hop reconstruction.
///
/// O(V^3) time and O(V^2) memory on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

/// Complete all-pairs tables, indexed by position in `nodes`
#[derive(Debug, Clone)]
pub struct AllPairs<'a> {
    pub nodes: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
    pub dist: Vec<Vec<f64>>,
    pub next: Vec<Vec<Option<usize>>>,
}

impl<'a> AllPairs<'a> {
    /// Builds the distance and next-hop tables for one dimension
    pub fn compute<G: Graph>(graph: &'a G, dimension: Dimension) -> Self {
        let nodes: Vec<&'a str> = graph.nodes().collect();
        let n = nodes.len();
        let index: HashMap<&'a str, usize> =
            nodes.iter().enumerate().map(|(i, &node)| (node, i)).collect();

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];

        for (i, &node) in nodes.iter().enumerate() {
            dist[i][i] = 0.0;
            next[i][i] = Some(i);
            for (neighbor, edge) in graph.neighbors(node) {
                if let Some(&j) = index.get(neighbor) {
                    dist[i][j] = edge.weight(dimension);
                    next[i][j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if dist[i][k].is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        AllPairs {
            nodes,
            index,
            dist,
            next,
        }
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Follows next-hop pointers from `start` to `end`
    pub fn path(&self, start: &str, end: &str) -> Option<PathResult> {
        let (from, to) = (self.index_of(start)?, self.index_of(end)?);
        let cost = self.dist[from][to];
        if cost.is_infinite() {
            return None;
        }

        let mut path = vec![self.nodes[from].to_string()];
        let mut current = from;
        while current != to {
            current = self.next[current][to]?;
            path.push(self.nodes[current].to_string());
            if path.len() > self.nodes.len() {
                return None;
            }
        }

        Some(PathResult::new(path, cost))
    }
}

impl<G: Graph> PathAlgorithm<G> for FloydWarshall {
    fn name(&self) -> &'static str {
        AlgorithmKind::FloydWarshall.name()
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
        Ok(AllPairs::compute(graph, dimension).path(start, end))
    }
}
