use crate::algorithm::search::best_first_search;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::graph::{Dimension, Graph};
use crate::heuristic::GeodesicHeuristic;
use crate::Result;

/// A* guided by scaled great-circle distance.
///
/// The estimate is not a proven lower bound in cost or time units, so the
/// returned path can occasionally be worse than Dijkstra's.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl<G: Graph> PathAlgorithm<G> for AStar {
    fn name(&self) -> &'static str {
        AlgorithmKind::AStar.name()
    }

    fn find_path(
        &self,
        graph: &G,
        ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        let heuristic = GeodesicHeuristic::for_dimension(ctx.positions, dimension, ctx.config);
        Ok(best_first_search(graph, start, end, dimension, &heuristic))
    }
}
