use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::config::EngineConfig;
use crate::graph::{Dimension, Graph, Positions};
use crate::heuristic::LandmarkTable;
use crate::Result;

/// A path between two cities and its accumulated weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Cities from start to end, both inclusive
    pub path: Vec<String>,

    /// Sum of edge weights along `path` under the queried dimension
    pub cost: f64,
}

impl PathResult {
    pub fn new(path: Vec<String>, cost: f64) -> Self {
        PathResult { path, cost }
    }

    /// The trivial path from a city to itself
    pub fn single(node: &str) -> Self {
        PathResult::new(vec![node.to_string()], 0.0)
    }

    /// Number of edges in the path
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Read-only inputs shared by every algorithm besides the graph itself
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub positions: &'a Positions,
    pub config: &'a EngineConfig,
    /// Present only when the landmark table for the queried dimension is built
    pub landmarks: Option<&'a LandmarkTable>,
}

impl<'a> SearchContext<'a> {
    pub fn new(positions: &'a Positions, config: &'a EngineConfig) -> Self {
        SearchContext {
            positions,
            config,
            landmarks: None,
        }
    }

    pub fn with_landmarks(mut self, table: &'a LandmarkTable) -> Self {
        self.landmarks = Some(table);
        self
    }
}

/// Trait for single-pair shortest path strategies
pub trait PathAlgorithm<G: Graph> {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Find a path from `start` to `end`.
    ///
    /// `Ok(None)` means no path exists or an endpoint is not in the graph.
    fn find_path(
        &self,
        graph: &G,
        ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>>;
}

/// Resolves the endpoints against the graph.
///
/// Returns `Err(answer)` when no search is needed: an endpoint is missing
/// (`None`) or both are the same city (single-node path).
pub(crate) fn resolve_endpoints<'a, G: Graph>(
    graph: &'a G,
    start: &str,
    end: &str,
) -> std::result::Result<(&'a str, &'a str), Option<PathResult>> {
    let (Some(start), Some(end)) = (graph.node_key(start), graph.node_key(end)) else {
        return Err(None);
    };
    if start == end {
        return Err(Some(PathResult::single(start)));
    }
    Ok((start, end))
}

/// Walks a predecessor map back from `end` to `start`.
///
/// Returns `None` if the chain breaks or loops.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<&str, &str>,
    start: &str,
    end: &str,
) -> Option<Vec<String>> {
    let mut path = vec![end.to_string()];
    let mut visited = HashSet::new();
    let mut current = end;

    while current != start {
        if !visited.insert(current) {
            return None;
        }
        current = *predecessors.get(current)?;
        path.push(current.to_string());
    }

    path.reverse();
    Some(path)
}
