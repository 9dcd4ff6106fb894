//! Distance estimates that guide the informed searches.

pub mod geodesic;
pub mod landmarks;

pub use geodesic::GeodesicHeuristic;
pub use landmarks::{select_landmarks, LandmarkHeuristic, LandmarkTable};

/// Estimate of the remaining distance from `node` to `target`
pub trait Heuristic {
    fn estimate(&self, node: &str, target: &str) -> f64;
}

/// Uninformed estimate; turns A* into Dijkstra
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _node: &str, _target: &str) -> f64 {
        0.0
    }
}
