use std::fmt::Debug;

use crate::graph::{Dimension, EdgeRecord};

/// Trait representing a dual-weighted graph of labelled cities
pub trait Graph: Debug {
    /// Returns the number of cities in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every city label, in a stable order
    fn nodes(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns the label as stored in the graph, so callers can key maps by it
    fn node_key<'a>(&'a self, node: &str) -> Option<&'a str>;

    /// Returns an iterator over the outgoing edges from a city
    fn neighbors<'a>(&'a self, node: &str) -> Box<dyn Iterator<Item = (&'a str, EdgeRecord)> + 'a>;

    /// Gets the record of a directed edge if it exists
    fn edge(&self, from: &str, to: &str) -> Option<EdgeRecord>;

    /// Returns true if the city exists in the graph
    fn has_node(&self, node: &str) -> bool {
        self.node_key(node).is_some()
    }

    /// Returns true if there's an edge between the two cities
    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edge(from, to).is_some()
    }

    /// Gets the weight of an edge under one dimension
    fn weight(&self, from: &str, to: &str, dimension: Dimension) -> Option<f64> {
        self.edge(from, to).map(|edge| edge.weight(dimension))
    }

    /// Accumulated weight along a path, or `None` if a hop has no edge
    fn path_weight<S: AsRef<str>>(&self, path: &[S], dimension: Dimension) -> Option<f64>
    where
        Self: Sized,
    {
        path.windows(2).try_fold(0.0, |total, hop| {
            self.weight(hop[0].as_ref(), hop[1].as_ref(), dimension)
                .map(|w| total + w)
        })
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Inserts or updates a route in both directions.
    ///
    /// A direction previously set through [`MutableGraph::set_directed_edge`]
    /// keeps its override unless it is the direction `from -> to` of this call.
    /// When `from -> to` is the override, the flag is cleared and both
    /// directions take the new values, as for a plain two-way route.
    fn upsert_edge(&mut self, from: &str, to: &str, record: EdgeRecord) -> bool;

    /// Replaces a single direction, creating the reverse with equal weights if
    /// the pair was not connected yet
    fn set_directed_edge(&mut self, from: &str, to: &str, record: EdgeRecord) -> bool;

    /// Removes every city and edge
    fn clear(&mut self);
}
