pub mod generators;
pub mod positions;
pub mod preset;
pub mod store;
pub mod traits;

pub use positions::{Bounds, Position, Positions};
pub use store::RouteGraph;
pub use traits::{Graph, MutableGraph};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the two independent edge attributes every algorithm is parameterized over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Cost,
    Time,
}

impl Dimension {
    /// Both dimensions in comparison order
    pub const ALL: [Dimension; 2] = [Dimension::Cost, Dimension::Time];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Cost => "cost",
            Dimension::Time => "time",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cost" => Ok(Dimension::Cost),
            "time" => Ok(Dimension::Time),
            other => Err(Error::UnknownDimension(other.to_string())),
        }
    }
}

/// Weights carried by a single directed edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub cost: f64,
    pub time: f64,
}

impl EdgeRecord {
    pub fn new(cost: f64, time: f64) -> Self {
        EdgeRecord { cost, time }
    }

    /// Weight of this edge under the given dimension
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Cost => self.cost,
            Dimension::Time => self.time,
        }
    }

    /// Both weights must be finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.cost.is_finite() && self.time.is_finite() && self.cost >= 0.0 && self.time >= 0.0
    }
}

/// Canonical form of a city label: trimmed and upper-cased
pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}
