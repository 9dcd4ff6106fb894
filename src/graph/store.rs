use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};

use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::EdgeRecord;

/// City network stored as nested adjacency maps: city -> neighbour -> weights.
///
/// Ordered maps keep neighbour iteration deterministic, so algorithms that
/// break ties by encounter order give reproducible answers.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: BTreeMap<String, BTreeMap<String, EdgeRecord>>,

    /// Directions written through `set_directed_edge`: (from, to)
    overrides: HashSet<(String, String)>,
}

impl RouteGraph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        RouteGraph::default()
    }

    /// Returns true if the direction was explicitly set apart from its reverse
    pub fn is_override(&self, from: &str, to: &str) -> bool {
        self.overrides.contains(&(from.to_string(), to.to_string()))
    }

    /// Iterates over every directed edge as (from, to, record)
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeRecord)> + '_ {
        self.adjacency.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, record)| (from.as_str(), to.as_str(), *record))
        })
    }

    fn validate(from: &str, to: &str, record: &EdgeRecord) -> bool {
        if from.is_empty() || to.is_empty() {
            warn!("Rejected route with an empty city label");
            return false;
        }
        if from == to {
            warn!("Rejected self-loop route at {}", from);
            return false;
        }
        if !record.is_valid() {
            warn!(
                "Rejected route {} -> {} with invalid weights {:?}",
                from, to, record
            );
            return false;
        }
        true
    }

    fn write(&mut self, from: &str, to: &str, record: EdgeRecord) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), record);
    }
}

impl Graph for RouteGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|targets| targets.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.adjacency.keys().map(String::as_str))
    }

    fn node_key<'a>(&'a self, node: &str) -> Option<&'a str> {
        self.adjacency
            .get_key_value(node)
            .map(|(key, _)| key.as_str())
    }

    fn neighbors<'a>(&'a self, node: &str) -> Box<dyn Iterator<Item = (&'a str, EdgeRecord)> + 'a> {
        if let Some(targets) = self.adjacency.get(node) {
            Box::new(targets.iter().map(|(to, record)| (to.as_str(), *record)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge(&self, from: &str, to: &str) -> Option<EdgeRecord> {
        self.adjacency
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
    }
}

impl MutableGraph for RouteGraph {
    fn upsert_edge(&mut self, from: &str, to: &str, record: EdgeRecord) -> bool {
        if !Self::validate(from, to, &record) {
            return false;
        }

        // Both adjacency entries are written before returning, so the pair is
        // never left half-connected.
        self.write(from, to, record);
        self.overrides.remove(&(from.to_string(), to.to_string()));

        if self.is_override(to, from) {
            debug!(
                "Kept asymmetric override {} -> {} while updating {} -> {}",
                to, from, from, to
            );
        } else {
            self.write(to, from, record);
        }

        true
    }

    fn set_directed_edge(&mut self, from: &str, to: &str, record: EdgeRecord) -> bool {
        if !Self::validate(from, to, &record) {
            return false;
        }

        if !self.has_edge(to, from) {
            self.write(to, from, record);
        }
        self.write(from, to, record);
        self.overrides.insert((from.to_string(), to.to_string()));

        true
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.overrides.clear();
    }
}
