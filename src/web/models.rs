use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm::PathResult;
use crate::cache::CacheStats;
use crate::compare::RouteMetrics;
use crate::graph::{Graph, Position};
use crate::RouteEngine;

/// A city for map rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// One direction of a route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub cost: f64,
    pub time: f64,
    /// Set apart from the reverse direction
    #[serde(default)]
    pub asymmetric: bool,
}

/// Snapshot of the current network
#[derive(Debug, Clone, Serialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
    pub cache: CacheStats,
}

impl WebGraph {
    pub fn from_engine(engine: &RouteEngine) -> Self {
        let graph = engine.graph();
        let nodes = graph
            .nodes()
            .map(|city| {
                let position: Option<&Position> = engine.positions().get(city);
                WebNode {
                    id: city.to_string(),
                    lat: position.map(|p| p.lat),
                    lng: position.map(|p| p.lng),
                }
            })
            .collect();
        let links = graph
            .edges()
            .map(|(from, to, record)| WebEdge {
                source: from.to_string(),
                target: to.to_string(),
                cost: record.cost,
                time: record.time,
                asymmetric: graph.is_override(from, to),
            })
            .collect();

        WebGraph {
            nodes,
            links,
            cache: engine.cache_stats(),
        }
    }
}

/// Body of `POST /api/routes` and `PUT /api/routes/directed`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub time: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Query string of `GET /api/path`
#[derive(Debug, Clone, Deserialize)]
pub struct PathQuery {
    pub start: String,
    pub end: String,
    #[serde(default = "default_dimension")]
    pub dimension: String,
    /// Strategy id, Dijkstra when absent
    #[serde(default)]
    pub algorithm: Option<String>,
}

fn default_dimension() -> String {
    "cost".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub start: String,
    pub end: String,
    pub dimension: String,
    pub algorithm: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PathResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RouteMetrics>,
}

/// Query string of `GET /api/compare`
#[derive(Debug, Clone, Deserialize)]
pub struct CompareQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
