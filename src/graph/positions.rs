use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::graph::normalize_label;

/// Mean Earth radius in kilometres
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Grid step, in degrees, used when searching for a free spot for a new city
const PLACEMENT_STEP_DEG: f64 = 0.3;

/// Preferred spacing, in degrees, between an auto-placed city and the others
const PLACEMENT_SPACING_DEG: f64 = 0.5;

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Position { lat, lng }
    }

    /// Great-circle distance in kilometres (haversine formula)
    pub fn haversine_km(&self, other: &Position) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    fn planar_distance(&self, other: &Position) -> f64 {
        ((self.lat - other.lat).powi(2) + (self.lng - other.lng).powi(2)).sqrt()
    }
}

/// Rectangular region used for auto placement and random networks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    /// Where the first city of an empty map goes
    pub anchor: Position,
}

impl Bounds {
    /// Bounds of the Gujarat state, anchored at its geographic centre
    pub const GUJARAT: Bounds = Bounds {
        min_lat: 20.1,
        max_lat: 24.7,
        min_lng: 68.1,
        max_lng: 74.4,
        anchor: Position {
            lat: 22.2587,
            lng: 71.1924,
        },
    };

    pub fn contains(&self, position: &Position) -> bool {
        (self.min_lat..=self.max_lat).contains(&position.lat)
            && (self.min_lng..=self.max_lng).contains(&position.lng)
    }
}

/// Static lookup of city coordinates consumed by the heuristics.
///
/// Cities without an entry are still valid graph members; heuristics simply
/// estimate zero for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Positions {
    entries: HashMap<String, Position>,
}

impl Positions {
    pub fn new() -> Self {
        Positions::default()
    }

    /// Records a position under the normalized label
    pub fn insert(&mut self, label: &str, position: Position) {
        self.entries.insert(normalize_label(label), position);
    }

    pub fn get(&self, label: &str) -> Option<&Position> {
        self.entries.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Position)> + '_ {
        self.entries.iter().map(|(label, position)| (label.as_str(), position))
    }

    /// Picks a grid point inside `bounds` that keeps roughly even spacing to
    /// every known city, records it for `label`, and returns it.
    pub fn place_new(&mut self, label: &str, bounds: &Bounds) -> Position {
        let position = if self.entries.is_empty() {
            bounds.anchor
        } else {
            let mut best = bounds.anchor;
            let mut best_score = f64::INFINITY;

            let mut lat = bounds.min_lat;
            while lat <= bounds.max_lat {
                let mut lng = bounds.min_lng;
                while lng <= bounds.max_lng {
                    let candidate = Position::new(lat, lng);
                    let score: f64 = self
                        .entries
                        .values()
                        .map(|existing| {
                            (candidate.planar_distance(existing) - PLACEMENT_SPACING_DEG).abs()
                        })
                        .sum();
                    if score < best_score {
                        best_score = score;
                        best = candidate;
                    }
                    lng += PLACEMENT_STEP_DEG;
                }
                lat += PLACEMENT_STEP_DEG;
            }
            best
        };

        self.insert(label, position);
        position
    }
}

impl<S: AsRef<str>> FromIterator<(S, Position)> for Positions {
    fn from_iter<I: IntoIterator<Item = (S, Position)>>(iter: I) -> Self {
        let mut positions = Positions::new();
        for (label, position) in iter {
            positions.insert(label.as_ref(), position);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_matches_known_distance() {
        // Ahmedabad to Vadodara is roughly 100 km as the crow flies
        let ahmedabad = Position::new(23.0225, 72.5714);
        let vadodara = Position::new(22.3072, 73.1812);
        let km = ahmedabad.haversine_km(&vadodara);
        assert!((95.0..105.0).contains(&km), "got {km}");
        assert_eq!(ahmedabad.haversine_km(&ahmedabad), 0.0);
    }

    #[test]
    fn first_placement_uses_anchor() {
        let mut positions = Positions::new();
        let placed = positions.place_new("x", &Bounds::GUJARAT);
        assert_eq!(placed, Bounds::GUJARAT.anchor);
        assert!(positions.contains("X"));
    }

    #[test]
    fn later_placements_stay_in_bounds_and_apart() {
        let mut positions = Positions::new();
        let first = positions.place_new("A", &Bounds::GUJARAT);
        let second = positions.place_new("B", &Bounds::GUJARAT);
        assert!(Bounds::GUJARAT.contains(&second));
        assert_ne!(first, second);
    }
}
