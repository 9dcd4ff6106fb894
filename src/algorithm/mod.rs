pub mod alt;
pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
mod search;
pub mod traits;

pub use traits::{PathAlgorithm, PathResult, SearchContext};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::graph::{Dimension, Graph};
use crate::{Error, Result};

use alt::AltAStar;
use astar::AStar;
use bellman_ford::BellmanFord;
use bfs::LengthFirstSearch;
use bidirectional::{BidirectionalAStar, BidirectionalDijkstra};
use dfs::ExhaustiveDfs;
use dijkstra::Dijkstra;
use floyd_warshall::FloydWarshall;

/// The interchangeable path-finding strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlgorithmKind {
    #[serde(rename = "dijkstra")]
    Dijkstra,
    #[serde(rename = "a-star")]
    AStar,
    #[serde(rename = "bidirectional-dijkstra")]
    BidirectionalDijkstra,
    #[serde(rename = "bidirectional-a-star")]
    BidirectionalAStar,
    #[serde(rename = "alt-a-star")]
    AltAStar,
    #[serde(rename = "dfs")]
    ExhaustiveDfs,
    #[serde(rename = "bfs")]
    LengthFirstSearch,
    #[serde(rename = "bellman-ford")]
    BellmanFord,
    #[serde(rename = "floyd-warshall")]
    FloydWarshall,
}

impl AlgorithmKind {
    /// Every strategy, in comparison order
    pub const ALL: [AlgorithmKind; 9] = [
        AlgorithmKind::Dijkstra,
        AlgorithmKind::AStar,
        AlgorithmKind::BidirectionalDijkstra,
        AlgorithmKind::BidirectionalAStar,
        AlgorithmKind::AltAStar,
        AlgorithmKind::ExhaustiveDfs,
        AlgorithmKind::LengthFirstSearch,
        AlgorithmKind::BellmanFord,
        AlgorithmKind::FloydWarshall,
    ];

    /// Machine-readable identifier, as accepted by `FromStr`
    pub fn id(self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::AStar => "a-star",
            AlgorithmKind::BidirectionalDijkstra => "bidirectional-dijkstra",
            AlgorithmKind::BidirectionalAStar => "bidirectional-a-star",
            AlgorithmKind::AltAStar => "alt-a-star",
            AlgorithmKind::ExhaustiveDfs => "dfs",
            AlgorithmKind::LengthFirstSearch => "bfs",
            AlgorithmKind::BellmanFord => "bellman-ford",
            AlgorithmKind::FloydWarshall => "floyd-warshall",
        }
    }

    /// Whether the strategy needs the landmark table of the queried dimension
    pub fn needs_landmarks(self) -> bool {
        matches!(self, AlgorithmKind::AltAStar)
    }

    /// Display name of the strategy
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::AStar => "A*",
            AlgorithmKind::BidirectionalDijkstra => "Bidirectional Dijkstra",
            AlgorithmKind::BidirectionalAStar => "Bidirectional A*",
            AlgorithmKind::AltAStar => "ALT A*",
            AlgorithmKind::ExhaustiveDfs => "DFS",
            AlgorithmKind::LengthFirstSearch => "BFS",
            AlgorithmKind::BellmanFord => "Bellman-Ford",
            AlgorithmKind::FloydWarshall => "Floyd-Warshall",
        }
    }

    /// Runs the strategy this kind names
    pub fn run<G: Graph>(
        self,
        graph: &G,
        ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        match self {
            AlgorithmKind::Dijkstra => Dijkstra.find_path(graph, ctx, start, end, dimension),
            AlgorithmKind::AStar => AStar.find_path(graph, ctx, start, end, dimension),
            AlgorithmKind::BidirectionalDijkstra => {
                BidirectionalDijkstra.find_path(graph, ctx, start, end, dimension)
            }
            AlgorithmKind::BidirectionalAStar => {
                BidirectionalAStar.find_path(graph, ctx, start, end, dimension)
            }
            AlgorithmKind::AltAStar => AltAStar.find_path(graph, ctx, start, end, dimension),
            AlgorithmKind::ExhaustiveDfs => ExhaustiveDfs.find_path(graph, ctx, start, end, dimension),
            AlgorithmKind::LengthFirstSearch => {
                LengthFirstSearch.find_path(graph, ctx, start, end, dimension)
            }
            AlgorithmKind::BellmanFord => BellmanFord.find_path(graph, ctx, start, end, dimension),
            AlgorithmKind::FloydWarshall => FloydWarshall.find_path(graph, ctx, start, end, dimension),
        }
    }
}

impl Default for AlgorithmKind {
    fn default() -> Self {
        AlgorithmKind::Dijkstra
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or(Error::UnknownAlgorithm(wanted))
    }
}
