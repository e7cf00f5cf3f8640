use std::cmp::Ordering;

use crate::grid::{Coord, Grid, GridFrame, NeighborMode};

use super::comparators::Comparator;
use super::engine::{DirectionState, snapshot};
use super::frontier::Frontier;

/// Bounded-branching greedy search. `width` 1 is hill-climbing; 2 and 3 are
/// the beam widths.
///
/// Differs from the generic engine in its neighbor filter: a neighbor is
/// only kept when it is strictly heuristically closer to the goal than the
/// cell being expanded, and at most `width` of the kept candidates (the
/// heuristically best ones) are enqueued. The monotonic-improvement filter
/// is what makes hill-climbing stop when no better neighbor exists.
pub fn beam_search(
    start: Coord,
    goal: Coord,
    width: usize,
    comparator: Comparator,
    walls: &Grid<bool>,
    weights: &Grid<u32>,
    mode: NeighborMode,
) -> Vec<GridFrame> {
    let mut state = DirectionState::new(
        start,
        Frontier::priority(comparator.clone()),
        walls.width(),
        walls.height(),
    );
    let mut frames = Vec::new();

    while !state.frontier.is_empty() {
        let current = state.frontier.remove(&state.distances);
        state.considered[current] = true;
        frames.push(snapshot(&state.visited, &state.considered, None));

        if current == goal {
            let path = state.path_from(goal);
            frames.push(snapshot(&state.visited, &state.considered, Some(&path)));
            break;
        }

        let mut candidates: Vec<Coord> = walls
            .neighbors(current, mode)
            .into_iter()
            .filter(|&neighbor| !walls[neighbor] && !state.visited[neighbor])
            .filter(|&neighbor| comparator.compare(neighbor, current, &state.distances) > 0.0)
            .collect();

        if candidates.len() > width {
            // Safe to sort here: beam comparators are deterministic
            // heuristics, never the random strategy.
            candidates.sort_by(|&a, &b| {
                comparator
                    .compare(b, a, &state.distances)
                    .partial_cmp(&0.0)
                    .unwrap_or(Ordering::Equal)
            });
            candidates.truncate(width);
        }

        for neighbor in candidates {
            let cost = state.distances[&current] + weights[neighbor];
            state.distances.insert(neighbor, cost);
            state.frontier.add(neighbor);
            state.visited[neighbor] = true;
            state.predecessors.insert(neighbor, current);
        }
    }

    frames
}
