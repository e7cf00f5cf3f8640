//! Grid pathfinding visualizer core.
//!
//! The engine explores a bounded 2-D grid from a start tile to a goal tile
//! and records one [`GridFrame`](grid::GridFrame) per expansion step, so a
//! front-end can play the search back one snapshot at a time. Fifteen
//! algorithm variants share one traversal skeleton, parameterized by the
//! frontier collection and comparator strategy; maze generators populate the
//! wall or weight matrices a search runs against.

pub mod app;
pub mod generators;
pub mod grid;
pub mod search;

pub use generators::{Pattern, generate_pattern};
pub use grid::{Coord, Grid, GridFrame, NeighborMode, TileFrame};
pub use search::{Algorithm, Heuristic, search};

/// Selecting an identifier with no registered implementation.
///
/// Surfaced before any execution happens; a search or generation never runs
/// partially with an unknown id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownAlgorithm(String),
    UnknownHeuristic(String),
    UnknownPattern(String),
    UnknownNeighborMode(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownAlgorithm(id) => write!(f, "unknown algorithm id: {id}"),
            ConfigError::UnknownHeuristic(id) => write!(f, "unknown heuristic id: {id}"),
            ConfigError::UnknownPattern(id) => write!(f, "unknown pattern id: {id}"),
            ConfigError::UnknownNeighborMode(id) => write!(f, "unknown neighbor mode id: {id}"),
        }
    }
}

impl std::error::Error for ConfigError {}
