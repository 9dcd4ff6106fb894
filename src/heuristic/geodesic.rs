use crate::config::EngineConfig;
use crate::graph::{Dimension, Positions};
use crate::heuristic::Heuristic;

/// Great-circle distance scaled into the units of one weight dimension.
///
/// The scale factors are rough conversions (rupees per km, hours per km), not
/// proven lower bounds, so A* guided by this estimate may miss the optimum.
#[derive(Debug, Clone, Copy)]
pub struct GeodesicHeuristic<'a> {
    positions: &'a Positions,
    scale: f64,
}

impl<'a> GeodesicHeuristic<'a> {
    pub fn new(positions: &'a Positions, scale: f64) -> Self {
        GeodesicHeuristic { positions, scale }
    }

    /// Uses the configured scale for `dimension`
    pub fn for_dimension(positions: &'a Positions, dimension: Dimension, config: &EngineConfig) -> Self {
        GeodesicHeuristic::new(positions, config.heuristic_scale(dimension))
    }
}

impl Heuristic for GeodesicHeuristic<'_> {
    fn estimate(&self, node: &str, target: &str) -> f64 {
        match (self.positions.get(node), self.positions.get(target)) {
            (Some(from), Some(to)) => from.haversine_km(to) * self.scale,
            _ => 0.0,
        }
    }
}
