use std::collections::HashMap;

use crate::grid::{self, Coord, Grid, GridFrame, NeighborMode, TileFrame};

use super::frontier::Frontier;

/// All search-scoped state for one direction of a traversal.
///
/// Created fresh per invocation and discarded once the caller owns the frame
/// list; nothing persists across searches.
pub(crate) struct DirectionState {
    pub frontier: Frontier,
    /// Accumulated cost from this direction's origin. Only reached
    /// coordinates are present; absence means unknown, never zero.
    pub distances: HashMap<Coord, u32>,
    /// Which coordinate each reached coordinate was discovered from.
    pub predecessors: HashMap<Coord, Coord>,
    /// Ever added to the frontier.
    pub visited: Grid<bool>,
    /// Actually dequeued and expanded. Always a subset of `visited`.
    pub considered: Grid<bool>,
}

impl DirectionState {
    pub fn new(origin: Coord, frontier: Frontier, width: u16, height: u16) -> Self {
        let mut state = DirectionState {
            frontier,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            visited: Grid::new(width, height, false),
            considered: Grid::new(width, height, false),
        };
        // The cost must be on record before the origin enters the frontier,
        // or a cost-ordered comparator could be asked about an unknown cell.
        state.distances.insert(origin, 0);
        state.frontier.add(origin);
        state.visited[origin] = true;
        state
    }

    /// Makes one expansion step toward `target` and records a frame.
    ///
    /// Returns `true` if the dequeued coordinate is the target. Neighbors
    /// that are out of bounds, walls, or already visited are skipped; each
    /// kept neighbor gets its cost recorded before it is enqueued.
    pub fn expand(
        &mut self,
        target: Coord,
        walls: &Grid<bool>,
        weights: &Grid<u32>,
        mode: NeighborMode,
        frames: &mut Vec<GridFrame>,
    ) -> bool {
        let current = self.frontier.remove(&self.distances);
        self.considered[current] = true;
        frames.push(snapshot(&self.visited, &self.considered, None));

        if current == target {
            return true;
        }

        for neighbor in walls.neighbors(current, mode) {
            if walls[neighbor] || self.visited[neighbor] {
                continue;
            }
            let cost = self.distances[&current] + weights[neighbor];
            self.distances.insert(neighbor, cost);
            self.frontier.add(neighbor);
            self.visited[neighbor] = true;
            self.predecessors.insert(neighbor, current);
        }

        false
    }

    /// Converts the predecessor map into a boolean path mask by walking
    /// backward from `target` until a coordinate has no predecessor.
    ///
    /// The origin itself is never marked: it has no predecessor, and the
    /// renderer draws the start tile over it anyway.
    pub fn path_from(&self, target: Coord) -> Grid<bool> {
        let mut path = Grid::new(self.visited.width(), self.visited.height(), false);
        let mut pos = target;
        while let Some(&pred) = self.predecessors.get(&pos) {
            path[pos] = true;
            pos = pred;
        }
        path
    }
}

/// Encodes the state of a search into one self-contained frame.
/// Precedence per tile: path, then considered, then visited.
pub(crate) fn snapshot(
    visited: &Grid<bool>,
    considered: &Grid<bool>,
    path: Option<&Grid<bool>>,
) -> GridFrame {
    let mut frame = Grid::new(visited.width(), visited.height(), TileFrame::Blank);
    for coord in frame.coords() {
        frame[coord] = if path.is_some_and(|path| path[coord]) {
            TileFrame::Path
        } else if considered[coord] {
            TileFrame::Searching
        } else if visited[coord] {
            TileFrame::Frontier
        } else {
            TileFrame::Blank
        };
    }
    frame
}

/// Logical OR of two boolean masks.
pub(crate) fn merge_masks(a: &Grid<bool>, b: &Grid<bool>) -> Grid<bool> {
    let mut merged = Grid::new(a.width(), a.height(), false);
    for coord in merged.coords() {
        merged[coord] = a[coord] || b[coord];
    }
    merged
}

/// Collapses the two most recent frames (one per direction of a paired step)
/// into a single frame. `Searching` wins over `Frontier` where the
/// directions disagree on a tile.
fn merge_last_frames(frames: &mut Vec<GridFrame>) {
    let backward = frames.pop().expect("merge requires a backward frame");
    let forward = frames.pop().expect("merge requires a forward frame");
    let mut merged = Grid::new(forward.width(), forward.height(), TileFrame::Blank);
    for coord in merged.coords() {
        if forward[coord] == TileFrame::Searching || backward[coord] == TileFrame::Searching {
            merged[coord] = TileFrame::Searching;
        } else if forward[coord] == TileFrame::Frontier || backward[coord] == TileFrame::Frontier {
            merged[coord] = TileFrame::Frontier;
        }
    }
    frames.push(merged);
}

/// Searches from `start` toward `goal` with the given frontier ordering.
///
/// One frame per expansion step, plus one final path-overlay frame if the
/// goal was reached. Exhausting the frontier is a valid terminal outcome,
/// not an error: the caller infers "no path" from the absence of a path
/// frame.
pub fn unidirectional_search(
    start: Coord,
    goal: Coord,
    frontier: Frontier,
    walls: &Grid<bool>,
    weights: &Grid<u32>,
    mode: NeighborMode,
) -> Vec<GridFrame> {
    let mut state = DirectionState::new(start, frontier, walls.width(), walls.height());
    let mut frames = Vec::new();

    while !state.frontier.is_empty() {
        if state.expand(goal, walls, weights, mode, &mut frames) {
            let path = state.path_from(goal);
            frames.push(snapshot(&state.visited, &state.considered, Some(&path)));
            break;
        }
    }

    frames
}

/// Searches from `start` and `goal` concurrently, one paired step at a time.
///
/// Both directions expand on every iteration (each with its own frontier,
/// cost map, predecessor map and masks) and the two resulting frames are
/// merged into one. Termination is checked after each paired step in
/// priority order: forward direct hit on the goal, backward direct hit on
/// the start, then overlap of the two considered masks at a meeting point.
/// Direct hits come first because a direction can land on its target before
/// the considered masks share any cell.
pub fn bidirectional_search(
    start: Coord,
    goal: Coord,
    forward_frontier: Frontier,
    backward_frontier: Frontier,
    walls: &Grid<bool>,
    weights: &Grid<u32>,
    mode: NeighborMode,
) -> Vec<GridFrame> {
    let mut forward = DirectionState::new(start, forward_frontier, walls.width(), walls.height());
    let mut backward = DirectionState::new(goal, backward_frontier, walls.width(), walls.height());
    let mut frames = Vec::new();

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        let found_forward = forward.expand(goal, walls, weights, mode, &mut frames);
        let found_backward = backward.expand(start, walls, weights, mode, &mut frames);
        merge_last_frames(&mut frames);

        let path = if found_forward {
            forward.path_from(goal)
        } else if found_backward {
            backward.path_from(start)
        } else if let Some(meeting) = grid::overlap(&forward.considered, &backward.considered) {
            tracing::debug!("[search] directions met at {:?}", meeting);
            merge_masks(&forward.path_from(meeting), &backward.path_from(meeting))
        } else {
            continue;
        };

        let visited = merge_masks(&forward.visited, &backward.visited);
        let considered = merge_masks(&forward.considered, &backward.considered);
        frames.push(snapshot(&visited, &considered, Some(&path)));
        break;
    }

    frames
}
