mod beam;
mod comparators;
pub(crate) mod engine;
mod frontier;

pub use comparators::{Comparator, Heuristic};
pub use engine::{bidirectional_search, unidirectional_search};
pub use frontier::Frontier;

use beam::beam_search;

use crate::ConfigError;
use crate::grid::{Coord, Grid, GridFrame, NeighborMode};

/// Every algorithm variant the engine can run.
///
/// All of them share the same traversal skeleton; a variant is just a choice
/// of frontier ordering, comparator, direction count and branching bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    BestFirst,
    Dijkstra,
    AStar,
    Random,
    BidirectionalBfs,
    BidirectionalDfs,
    BidirectionalGbfs,
    BidirectionalDijkstra,
    BidirectionalAStar,
    BidirectionalRandom,
    HillClimbing,
    TwoBeam,
    ThreeBeam,
}

impl Algorithm {
    /// All variants, in menu order.
    pub const ALL: [Algorithm; 15] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::BestFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Random,
        Algorithm::BidirectionalBfs,
        Algorithm::BidirectionalDfs,
        Algorithm::BidirectionalGbfs,
        Algorithm::BidirectionalDijkstra,
        Algorithm::BidirectionalAStar,
        Algorithm::BidirectionalRandom,
        Algorithm::HillClimbing,
        Algorithm::TwoBeam,
        Algorithm::ThreeBeam,
    ];

    /// The identifier this variant is selected by.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "breadth-first-search",
            Algorithm::DepthFirst => "depth-first-search",
            Algorithm::BestFirst => "best-first-search",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a-star",
            Algorithm::Random => "random",
            Algorithm::BidirectionalBfs => "bidirectional-BFS",
            Algorithm::BidirectionalDfs => "bidirectional-DFS",
            Algorithm::BidirectionalGbfs => "bidirectional-GBFS",
            Algorithm::BidirectionalDijkstra => "bidirectional-dijkstra",
            Algorithm::BidirectionalAStar => "bidirectional-a-star",
            Algorithm::BidirectionalRandom => "bidirectional-random",
            Algorithm::HillClimbing => "hill-climbing",
            Algorithm::TwoBeam => "two-beam",
            Algorithm::ThreeBeam => "three-beam",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == s)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "Breadth-First Search (BFS)"),
            Algorithm::DepthFirst => write!(f, "Depth-First Search (DFS)"),
            Algorithm::BestFirst => write!(f, "Greedy Best-First Search"),
            Algorithm::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Algorithm::AStar => write!(f, "A* Search"),
            Algorithm::Random => write!(f, "Random Search"),
            Algorithm::BidirectionalBfs => write!(f, "Bidirectional BFS"),
            Algorithm::BidirectionalDfs => write!(f, "Bidirectional DFS"),
            Algorithm::BidirectionalGbfs => write!(f, "Bidirectional Greedy Best-First"),
            Algorithm::BidirectionalDijkstra => write!(f, "Bidirectional Dijkstra"),
            Algorithm::BidirectionalAStar => write!(f, "Bidirectional A*"),
            Algorithm::BidirectionalRandom => write!(f, "Bidirectional Random"),
            Algorithm::HillClimbing => write!(f, "Hill-Climbing"),
            Algorithm::TwoBeam => write!(f, "2-Beam Search"),
            Algorithm::ThreeBeam => write!(f, "3-Beam Search"),
        }
    }
}

/// Runs one complete search and returns its recorded frames.
///
/// `heuristic` is ignored by algorithms that do not use one. The walls and
/// weights matrices are only read; all search state is allocated fresh, so
/// the caller may rerun or discard at will. Start/goal validity (in bounds,
/// not walled) is the caller's precondition.
pub fn search(
    start: Coord,
    goal: Coord,
    walls: &Grid<bool>,
    mode: NeighborMode,
    weights: &Grid<u32>,
    algorithm: Algorithm,
    heuristic: Heuristic,
) -> Vec<GridFrame> {
    debug_assert_eq!(walls.width(), weights.width());
    debug_assert_eq!(walls.height(), weights.height());
    tracing::debug!(
        "[search] {} from {:?} to {:?} on {}x{} grid",
        algorithm.id(),
        start,
        goal,
        walls.width(),
        walls.height()
    );

    let frames = match algorithm {
        Algorithm::BreadthFirst => {
            unidirectional_search(start, goal, Frontier::queue(), walls, weights, mode)
        }
        Algorithm::DepthFirst => {
            unidirectional_search(start, goal, Frontier::stack(), walls, weights, mode)
        }
        Algorithm::BestFirst => unidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::heuristic(heuristic, goal)),
            walls,
            weights,
            mode,
        ),
        Algorithm::Dijkstra => unidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::Dijkstra),
            walls,
            weights,
            mode,
        ),
        Algorithm::AStar => unidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::a_star(heuristic, goal)),
            walls,
            weights,
            mode,
        ),
        Algorithm::Random => unidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::Random),
            walls,
            weights,
            mode,
        ),
        Algorithm::BidirectionalBfs => bidirectional_search(
            start,
            goal,
            Frontier::queue(),
            Frontier::queue(),
            walls,
            weights,
            mode,
        ),
        Algorithm::BidirectionalDfs => bidirectional_search(
            start,
            goal,
            Frontier::stack(),
            Frontier::stack(),
            walls,
            weights,
            mode,
        ),
        Algorithm::BidirectionalGbfs => bidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::heuristic(heuristic, goal)),
            // The backward direction aims at the start tile.
            Frontier::priority(Comparator::heuristic(heuristic, start)),
            walls,
            weights,
            mode,
        ),
        Algorithm::BidirectionalDijkstra => bidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::Dijkstra),
            Frontier::priority(Comparator::Dijkstra),
            walls,
            weights,
            mode,
        ),
        Algorithm::BidirectionalAStar => bidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::a_star(heuristic, goal)),
            Frontier::priority(Comparator::a_star(heuristic, start)),
            walls,
            weights,
            mode,
        ),
        Algorithm::BidirectionalRandom => bidirectional_search(
            start,
            goal,
            Frontier::priority(Comparator::Random),
            Frontier::priority(Comparator::Random),
            walls,
            weights,
            mode,
        ),
        Algorithm::HillClimbing => beam_search(
            start,
            goal,
            1,
            Comparator::heuristic(heuristic, goal),
            walls,
            weights,
            mode,
        ),
        Algorithm::TwoBeam => beam_search(
            start,
            goal,
            2,
            Comparator::heuristic(heuristic, goal),
            walls,
            weights,
            mode,
        ),
        Algorithm::ThreeBeam => beam_search(
            start,
            goal,
            3,
            Comparator::heuristic(heuristic, goal),
            walls,
            weights,
            mode,
        ),
    };

    tracing::debug!("[search] recorded {} frames", frames.len());
    frames
}

#[cfg(test)]
mod tests {
    use super::engine::tests::{has_path_frame, open_grid, path_cells};
    use super::*;
    use crate::grid::TileFrame;

    #[test]
    fn test_all_algorithm_ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!(matches!(
            "best-search".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_bfs_and_dijkstra_agree_on_uniform_grids() {
        let (walls, weights) = open_grid(7, 6);
        let (start, goal) = ((1, 1), (4, 6));
        let manhattan = 3 + 5;
        for algorithm in [Algorithm::BreadthFirst, Algorithm::Dijkstra] {
            let frames = search(
                start,
                goal,
                &walls,
                NeighborMode::NonDiagonal,
                &weights,
                algorithm,
                Heuristic::Manhattan,
            );
            let path = path_cells(frames.last().unwrap());
            assert_eq!(path.len(), manhattan, "{algorithm} path is not shortest");
        }
    }

    #[test]
    fn test_path_is_a_connected_chain() {
        let (mut walls, weights) = open_grid(8, 8);
        for row in 1..8 {
            walls[(row, 3)] = true;
        }
        let (start, goal) = ((7, 0), (7, 7));
        for algorithm in [
            Algorithm::BreadthFirst,
            Algorithm::DepthFirst,
            Algorithm::AStar,
            Algorithm::BestFirst,
            Algorithm::BidirectionalBfs,
        ] {
            let frames = search(
                start,
                goal,
                &walls,
                NeighborMode::NonDiagonal,
                &weights,
                algorithm,
                Heuristic::Manhattan,
            );
            let last = frames.last().unwrap();
            let mut path = path_cells(last);
            assert!(!path.is_empty(), "{algorithm} found no path");
            // Endpoints are drawn by the renderer, not the path overlay; a
            // bidirectional meeting-point path excludes both of them.
            for endpoint in [start, goal] {
                if !path.contains(&endpoint) {
                    path.push(endpoint);
                }
            }

            // Flood the path set from the start; every path cell and the
            // goal must be reachable through path cells alone.
            let mut reached = vec![start];
            let mut frontier = vec![start];
            while let Some(cell) = frontier.pop() {
                for neighbor in last.neighbors(cell, NeighborMode::NonDiagonal) {
                    if path.contains(&neighbor) && !reached.contains(&neighbor) {
                        reached.push(neighbor);
                        frontier.push(neighbor);
                    }
                }
            }
            assert_eq!(reached.len(), path.len(), "{algorithm} path is disconnected");
            assert!(reached.contains(&goal), "{algorithm} path misses the goal");
        }
    }

    #[test]
    fn test_deterministic_algorithms_are_idempotent() {
        let (mut walls, mut weights) = open_grid(9, 7);
        walls[(3, 4)] = true;
        walls[(4, 4)] = true;
        weights[(2, 2)] = 42;
        for algorithm in Algorithm::ALL {
            if matches!(
                algorithm,
                Algorithm::Random | Algorithm::BidirectionalRandom
            ) {
                continue;
            }
            let run = || {
                search(
                    (0, 0),
                    (6, 8),
                    &walls,
                    NeighborMode::All,
                    &weights,
                    algorithm,
                    Heuristic::Euclidean,
                )
            };
            assert_eq!(run(), run(), "{algorithm} is not deterministic");
        }
    }

    #[test]
    fn test_sealed_goal_yields_no_path_for_any_algorithm() {
        let (mut walls, weights) = open_grid(6, 6);
        for row in 0..6 {
            walls[(row, 3)] = true;
        }
        for algorithm in Algorithm::ALL {
            let frames = search(
                (2, 1),
                (2, 5),
                &walls,
                NeighborMode::NonDiagonal,
                &weights,
                algorithm,
                Heuristic::Manhattan,
            );
            assert!(
                !has_path_frame(&frames),
                "{algorithm} claims a path through a sealed wall"
            );
        }
    }

    #[test]
    fn test_random_search_still_finds_reachable_goal() {
        let (walls, weights) = open_grid(5, 5);
        for algorithm in [Algorithm::Random, Algorithm::BidirectionalRandom] {
            let frames = search(
                (0, 0),
                (4, 4),
                &walls,
                NeighborMode::NonDiagonal,
                &weights,
                algorithm,
                Heuristic::Manhattan,
            );
            assert!(
                has_path_frame(&frames),
                "{algorithm} failed to find an existing path"
            );
        }
    }

    #[test]
    fn test_tile_states_never_regress() {
        // Visited and considered are monotonic for the lifetime of a search:
        // an expanded tile stays expanded (or becomes path), a discovered
        // tile never drops back to blank.
        let (mut walls, weights) = open_grid(7, 7);
        walls[(2, 2)] = true;
        walls[(4, 5)] = true;
        for algorithm in [Algorithm::AStar, Algorithm::BidirectionalDijkstra] {
            let frames = search(
                (0, 0),
                (6, 6),
                &walls,
                NeighborMode::NonDiagonal,
                &weights,
                algorithm,
                Heuristic::Chebyshev,
            );
            for pair in frames.windows(2) {
                for coord in pair[0].coords() {
                    match pair[0][coord] {
                        TileFrame::Searching => assert!(
                            matches!(pair[1][coord], TileFrame::Searching | TileFrame::Path),
                            "{algorithm}: expanded tile {coord:?} regressed"
                        ),
                        TileFrame::Frontier => assert_ne!(
                            pair[1][coord],
                            TileFrame::Blank,
                            "{algorithm}: discovered tile {coord:?} regressed"
                        ),
                        _ => {}
                    }
                }
            }
        }
    }
}
