use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::graph::Dimension;
use crate::Result;

/// Tunables for a [`crate::RouteEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of landmarks used by ALT A*
    pub landmark_count: usize,

    /// Geodesic heuristic multiplier for the cost dimension (per km)
    pub cost_heuristic_scale: f64,

    /// Geodesic heuristic multiplier for the time dimension (per km)
    pub time_heuristic_scale: f64,

    /// Exhaustive searches (DFS, length-first) refuse graphs larger than this,
    /// which also bounds their recursion depth
    pub exhaustive_node_limit: usize,

    /// Partial paths an exhaustive search may expand before giving up; the
    /// number of simple paths grows factorially on dense graphs
    pub exhaustive_expansion_limit: usize,

    /// Whether query results are memoized
    pub cache_enabled: bool,

    /// Give cities without a known position a generated one on insertion
    pub auto_place_cities: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            landmark_count: 4,
            cost_heuristic_scale: 20.0,
            time_heuristic_scale: 0.3,
            exhaustive_node_limit: 64,
            exhaustive_expansion_limit: 1_000_000,
            cache_enabled: true,
            auto_place_cities: false,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Geodesic multiplier for a dimension
    pub fn heuristic_scale(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Cost => self.cost_heuristic_scale,
            Dimension::Time => self.time_heuristic_scale,
        }
    }

    /// Set the number of ALT landmarks
    pub fn with_landmark_count(mut self, count: usize) -> Self {
        self.landmark_count = count;
        self
    }

    /// Set the node limit for exhaustive searches
    pub fn with_exhaustive_node_limit(mut self, limit: usize) -> Self {
        self.exhaustive_node_limit = limit;
        self
    }

    /// Set the expansion budget for exhaustive searches
    pub fn with_exhaustive_expansion_limit(mut self, limit: usize) -> Self {
        self.exhaustive_expansion_limit = limit;
        self
    }

    /// Enable or disable result caching
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Enable or disable automatic placement of unknown cities
    pub fn with_auto_placement(mut self, enabled: bool) -> Self {
        self.auto_place_cities = enabled;
        self
    }

    /// Set both heuristic multipliers
    pub fn with_heuristic_scales(mut self, cost: f64, time: f64) -> Self {
        self.cost_heuristic_scale = cost;
        self.time_heuristic_scale = time;
        self
    }
}
