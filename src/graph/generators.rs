use rand::prelude::*;
use std::collections::HashSet;

use crate::graph::{Bounds, EdgeRecord, MutableGraph, Position, Positions, RouteGraph};

/// Average road speed, in km/h, used to derive travel times
const AVERAGE_SPEED_KMH: f64 = 60.0;

/// A generated network: city coordinates plus the routes between them
#[derive(Debug, Clone)]
pub struct CityNetwork {
    pub positions: Positions,
    pub routes: Vec<(String, String, EdgeRecord)>,
}

impl CityNetwork {
    /// Builds a graph holding every route of the network
    pub fn build_graph(&self) -> RouteGraph {
        let mut graph = RouteGraph::new();
        for (from, to, record) in &self.routes {
            graph.upsert_edge(from, to, *record);
        }
        graph
    }

    /// Labels of every generated city, sorted
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.positions.iter().map(|(label, _)| label.to_string()).collect();
        cities.sort();
        cities
    }
}

/// Label of the i-th generated city
pub fn city_label(index: usize) -> String {
    format!("C{:03}", index)
}

/// Generates a connected network of `cities` cities scattered over `bounds`.
///
/// A random spanning tree guarantees connectivity; `extra_routes` additional
/// random routes add cycles. Cost is distance times a random toll factor and
/// time is distance over a random fraction of the average speed, so the two
/// dimensions disagree on which routes are best.
pub fn generate_city_network<R: Rng>(
    rng: &mut R,
    cities: usize,
    extra_routes: usize,
    bounds: &Bounds,
) -> CityNetwork {
    assert!(cities > 0, "cities must be positive");

    let mut positions = Positions::new();
    let mut placed = Vec::with_capacity(cities);
    for i in 0..cities {
        let position = Position::new(
            rng.gen_range(bounds.min_lat..bounds.max_lat),
            rng.gen_range(bounds.min_lng..bounds.max_lng),
        );
        positions.insert(&city_label(i), position);
        placed.push(position);
    }

    let mut routes = Vec::new();
    let mut connected = HashSet::new();

    let mut add_route = |rng: &mut R, a: usize, b: usize| {
        let key = (a.min(b), a.max(b));
        if a == b || !connected.insert(key) {
            return;
        }
        let km = placed[a].haversine_km(&placed[b]).max(1.0);
        let cost = km * rng.gen_range(1.0..3.0);
        let time = km / (AVERAGE_SPEED_KMH * rng.gen_range(0.5..1.5));
        routes.push((city_label(a), city_label(b), EdgeRecord::new(cost, time)));
    };

    for i in 1..cities {
        let parent = rng.gen_range(0..i);
        add_route(&mut *rng, i, parent);
    }

    if cities > 1 {
        for _ in 0..extra_routes {
            let a = rng.gen_range(0..cities);
            let b = rng.gen_range(0..cities);
            add_route(&mut *rng, a, b);
        }
    }

    CityNetwork { positions, routes }
}
