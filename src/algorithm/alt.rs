use crate::algorithm::search::best_first_search;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::graph::{Dimension, Graph};
use crate::heuristic::LandmarkHeuristic;
use crate::{Error, Result};

/// A* with landmark (ALT) lower bounds.
///
/// Needs `ctx.landmarks` to hold a table built for the queried dimension.
#[derive(Debug, Default, Clone, Copy)]
pub struct AltAStar;

impl<G: Graph> PathAlgorithm<G> for AltAStar {
    fn name(&self) -> &'static str {
        AlgorithmKind::AltAStar.name()
    }

    fn find_path(
        &self,
        graph: &G,
        ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        let table = ctx
            .landmarks
            .filter(|table| table.dimension() == dimension)
            .ok_or(Error::LandmarksUnavailable(dimension))?;

        let heuristic = LandmarkHeuristic::new(table);
        Ok(best_first_search(graph, start, end, dimension, &heuristic))
    }
}
