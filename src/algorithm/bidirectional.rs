use std::collections::{HashMap, HashSet};

use crate::algorithm::traits::resolve_endpoints;
use crate::algorithm::{AlgorithmKind, PathAlgorithm, PathResult, SearchContext};
use crate::data_structures::MinHeap;
use crate::graph::{Dimension, Graph};
use crate::heuristic::{GeodesicHeuristic, Heuristic, ZeroHeuristic};
use crate::Result;

/// Bidirectional Dijkstra: one frontier from the start, one from the end
#[derive(Debug, Default, Clone, Copy)]
pub struct BidirectionalDijkstra;

/// Bidirectional A*: each frontier is guided toward the opposite endpoint
#[derive(Debug, Default, Clone, Copy)]
pub struct BidirectionalAStar;

impl<G: Graph> PathAlgorithm<G> for BidirectionalDijkstra {
    fn name(&self) -> &'static str {
        AlgorithmKind::BidirectionalDijkstra.name()
    }

    fn find_path(
        &self,
        graph: &G,
        _ctx: &SearchContext<'_>,
        start: &str,
        end: &str,
        dimension: Dimension,
    ) -> Result<Option<PathResult>> {
        Ok(bidirectional_search::<G, ZeroHeuristic>(
            graph, start, end, dimension, None,
        ))
    }
}

impl<G: Graph> PathAlgorithm<G> for BidirectionalAStar {
    fn name(&self) -> &'static str {
        AlgorithmKind::BidirectionalAStar.name()
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
        Ok(bidirectional_search(
            graph,
            start,
            end,
            dimension,
            Some(&heuristic),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Follows edges as stored, from the start
    Forward,
    /// Follows edges in reverse, from the end
    Backward,
}

/// Best meeting point found so far
#[derive(Debug, Clone, Copy)]
struct Meeting<'a> {
    node: &'a str,
    total: f64,
}

/// One side of the search
struct Frontier<'a> {
    direction: Direction,
    /// Endpoint this side is heading for, used by the heuristic
    goal: &'a str,
    distances: HashMap<&'a str, f64>,
    /// Forward: previous city toward the start. Backward: next city toward the end.
    predecessors: HashMap<&'a str, &'a str>,
    finalized: HashSet<&'a str>,
    queue: MinHeap<&'a str, f64>,
}

impl<'a> Frontier<'a> {
    fn new<H: Heuristic>(direction: Direction, origin: &'a str, goal: &'a str, heuristic: Option<&H>) -> Self {
        let mut queue = MinHeap::new();
        queue.push(origin, estimate(heuristic, origin, goal));
        Frontier {
            direction,
            goal,
            distances: HashMap::from([(origin, 0.0)]),
            predecessors: HashMap::new(),
            finalized: HashSet::new(),
            queue,
        }
    }

    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Finalizes one city and relaxes its edges, updating `best` whenever a
    /// city reached by both sides yields a shorter total
    fn step<G: Graph, H: Heuristic>(
        &mut self,
        graph: &'a G,
        other: &Frontier<'a>,
        dimension: Dimension,
        heuristic: Option<&H>,
        best: &mut Option<Meeting<'a>>,
    ) {
        let node = loop {
            match self.queue.pop() {
                Some((node, _)) if self.finalized.contains(node) => continue,
                Some((node, _)) => break node,
                None => return,
            }
        };
        self.finalized.insert(node);
        let base = self.distance(node);
        record_meeting(best, node, base + other.distance(node));

        for (next, edge) in graph.neighbors(node) {
            if self.finalized.contains(next) {
                continue;
            }
            let weight = match self.direction {
                Direction::Forward => edge.weight(dimension),
                // Travelling next -> node, which may differ from node -> next
                Direction::Backward => match graph.weight(next, node, dimension) {
                    Some(weight) => weight,
                    None => continue,
                },
            };

            let candidate = base + weight;
            if candidate < self.distance(next) {
                self.distances.insert(next, candidate);
                self.predecessors.insert(next, node);
                self.queue
                    .push(next, candidate + estimate(heuristic, next, self.goal));
            }
            record_meeting(best, next, self.distance(next) + other.distance(next));
        }
    }
}

fn estimate<H: Heuristic>(heuristic: Option<&H>, node: &str, goal: &str) -> f64 {
    heuristic.map_or(0.0, |h| h.estimate(node, goal))
}

fn record_meeting<'a>(best: &mut Option<Meeting<'a>>, node: &'a str, total: f64) {
    if total.is_finite() && best.map_or(true, |meeting| total < meeting.total) {
        *best = Some(Meeting { node, total });
    }
}

/// Whether no unexplored path can beat the best meeting found.
///
/// Without a heuristic the two smallest queue keys add up to a lower bound on
/// any path not yet seen. With one, each side's smallest key is itself such a
/// bound when the estimate is admissible.
fn should_stop(forward: &Frontier<'_>, backward: &Frontier<'_>, guided: bool, best: Option<Meeting<'_>>) -> bool {
    if forward.queue.is_empty() || backward.queue.is_empty() {
        return true;
    }
    let Some(best) = best else {
        return false;
    };
    let (top_forward, top_backward) = (forward.queue.min_priority(), backward.queue.min_priority());
    if guided {
        top_forward >= best.total || top_backward >= best.total
    } else {
        top_forward + top_backward >= best.total
    }
}

/// Alternates one step per side until the stopping bound proves the best
/// meeting point optimal (or, with an inexact heuristic, good enough).
pub(crate) fn bidirectional_search<G, H>(
    graph: &G,
    start: &str,
    end: &str,
    dimension: Dimension,
    heuristic: Option<&H>,
) -> Option<PathResult>
where
    G: Graph,
    H: Heuristic,
{
    let (start, end) = match resolve_endpoints(graph, start, end) {
        Ok(endpoints) => endpoints,
        Err(answer) => return answer,
    };

    let mut forward = Frontier::new(Direction::Forward, start, end, heuristic);
    let mut backward = Frontier::new(Direction::Backward, end, start, heuristic);
    let mut best: Option<Meeting<'_>> = None;
    let guided = heuristic.is_some();

    loop {
        if should_stop(&forward, &backward, guided, best) {
            break;
        }
        forward.step(graph, &backward, dimension, heuristic, &mut best);

        if should_stop(&forward, &backward, guided, best) {
            break;
        }
        backward.step(graph, &forward, dimension, heuristic, &mut best);
    }

    let meeting = best?;
    let mut path = Vec::new();

    let mut current = meeting.node;
    path.push(current.to_string());
    while current != start {
        current = *forward.predecessors.get(current)?;
        path.push(current.to_string());
    }
    path.reverse();

    let mut current = meeting.node;
    while current != end {
        current = *backward.predecessors.get(current)?;
        path.push(current.to_string());
    }

    Some(PathResult::new(path, meeting.total))
}
