//! City Router - multi-algorithm shortest paths over a dual-weighted city network
//!
//! The engine keeps a small, mutable graph of named cities where every directed
//! edge carries two independent weights, `cost` and `time`. Nine interchangeable
//! strategies (Dijkstra, A*, both bidirectional variants, landmark-guided A*,
//! exhaustive DFS, length-first search, Bellman-Ford, Floyd-Warshall) answer
//! queries over either weight, backed by a memoizing cache that is invalidated
//! whenever the network changes.

pub mod algorithm;
pub mod cache;
pub mod compare;
pub mod config;
pub mod data_structures;
pub mod engine;
pub mod graph;
pub mod heuristic;
pub mod web;

/// Re-export main types for convenient use
pub use algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
pub use cache::CacheStats;
pub use compare::{AlgorithmRun, BestRoute, CompareOutcome, Comparison, RouteMetrics, RunOutcome};
pub use config::EngineConfig;
pub use engine::RouteEngine;
pub use graph::{Dimension, EdgeRecord, Graph, MutableGraph, Position, Positions, RouteGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown weight dimension: {0}")]
    UnknownDimension(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Landmark table for {0} has not been computed")]
    LandmarksUnavailable(Dimension),

    #[error("{algorithm} refuses graphs larger than {limit} nodes (got {nodes})")]
    SearchLimitExceeded {
        algorithm: String,
        nodes: usize,
        limit: usize,
    },

    #[error("{algorithm} gave up after {limit} expansions")]
    ExpansionLimitExceeded { algorithm: String, limit: usize },

    #[error("{algorithm} produced a malformed result: {reason}")]
    MalformedResult { algorithm: String, reason: String },

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
