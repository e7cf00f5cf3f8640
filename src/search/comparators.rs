use std::collections::HashMap;

use rand::Rng;

use crate::ConfigError;
use crate::grid::Coord;

/// An estimate of remaining distance to a target tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Manhattan,
    Chebyshev,
    Euclidean,
}

impl Heuristic {
    /// All variants, in menu order.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Manhattan,
        Heuristic::Chebyshev,
        Heuristic::Euclidean,
    ];

    /// The identifier this heuristic is selected by.
    pub fn id(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Euclidean => "euclidean",
        }
    }

    /// Distance between two coordinates under this metric.
    pub fn distance(self, from: Coord, to: Coord) -> f64 {
        let d_row = (from.0 as i32 - to.0 as i32).abs();
        let d_col = (from.1 as i32 - to.1 as i32).abs();
        match self {
            Heuristic::Manhattan => (d_row + d_col) as f64,
            Heuristic::Chebyshev => d_row.max(d_col) as f64,
            Heuristic::Euclidean => ((d_row * d_row + d_col * d_col) as f64).sqrt(),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Heuristic::Manhattan),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(ConfigError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "Manhattan distance"),
            Heuristic::Chebyshev => write!(f, "Chebyshev distance"),
            Heuristic::Euclidean => write!(f, "Euclidean distance"),
        }
    }
}

/// A relative-ordering strategy for the priority frontier.
///
/// `compare(a, b, distances)` returns a signed number: positive means `a`
/// should be dequeued before `b`. The A* comparator is the sum of the
/// Dijkstra and heuristic comparisons, which only works because all variants
/// share this sign convention.
#[derive(Debug, Clone)]
pub enum Comparator {
    /// Prefer the coordinate with the smaller heuristic distance to `goal`.
    Heuristic { kind: Heuristic, goal: Coord },
    /// Prefer the coordinate with the smaller accumulated cost from the
    /// search origin.
    Dijkstra,
    /// Accumulated cost plus heuristic-to-goal, summed componentwise.
    AStar { kind: Heuristic, goal: Coord },
    /// Input-independent noise. Deliberately not antisymmetric, so the pop
    /// order is arbitrary rather than uniformly random; callers may only
    /// rely on the search still terminating.
    Random,
}

impl Comparator {
    pub fn heuristic(kind: Heuristic, goal: Coord) -> Self {
        Comparator::Heuristic { kind, goal }
    }

    pub fn a_star(kind: Heuristic, goal: Coord) -> Self {
        Comparator::AStar { kind, goal }
    }

    /// Compares two coordinates.
    ///
    /// The Dijkstra and A* variants index `distances` directly: the engine
    /// records a coordinate's cost before it ever enters a frontier, so a
    /// missing entry is an invariant violation and panics.
    pub fn compare(&self, a: Coord, b: Coord, distances: &HashMap<Coord, u32>) -> f64 {
        match *self {
            Comparator::Heuristic { kind, goal } => {
                kind.distance(b, goal) - kind.distance(a, goal)
            }
            Comparator::Dijkstra => distances[&b] as f64 - distances[&a] as f64,
            Comparator::AStar { kind, goal } => {
                let dijkstra = distances[&b] as f64 - distances[&a] as f64;
                let heuristic = kind.distance(b, goal) - kind.distance(a, goal);
                dijkstra + heuristic
            }
            Comparator::Random => rand::rng().random::<f64>() - 0.6,
        }
    }
}
