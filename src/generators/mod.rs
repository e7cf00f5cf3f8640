use rand::{SeedableRng, rngs::StdRng};

mod random_fill;
mod recur_div;

use random_fill::random_maze;
use recur_div::{divide_horizontal, divide_vertical};

use crate::ConfigError;
use crate::grid::Coord;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Procedural obstacle patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Low-structure noise: a fixed fraction of every row is obstructed.
    RandomMaze,
    /// Recursive division with horizontal wall lines.
    DivideHorizontal,
    /// Recursive division with vertical wall lines.
    DivideVertical,
}

impl Pattern {
    /// All variants, in menu order.
    pub const ALL: [Pattern; 3] = [
        Pattern::RandomMaze,
        Pattern::DivideHorizontal,
        Pattern::DivideVertical,
    ];

    /// The identifier this pattern is selected by.
    pub fn id(self) -> &'static str {
        match self {
            Pattern::RandomMaze => "random-maze",
            Pattern::DivideHorizontal => "divide-horizontal",
            Pattern::DivideVertical => "divide-vertical",
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.id() == s)
            .ok_or_else(|| ConfigError::UnknownPattern(s.to_string()))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::RandomMaze => write!(f, "Random Maze"),
            Pattern::DivideHorizontal => write!(f, "Recursive Division (Horizontal)"),
            Pattern::DivideVertical => write!(f, "Recursive Division (Vertical)"),
        }
    }
}

/// Generates a pattern for a `width` x `height` grid, calling `place` once
/// per obstructed coordinate.
///
/// The callback decides what an obstacle is (a wall, a weight), so the
/// generators stay agnostic of the matrices they populate. Pass a seed for a
/// reproducible pattern, `None` for OS entropy.
pub fn generate_pattern(
    pattern: Pattern,
    width: u16,
    height: u16,
    seed: Option<u64>,
    place: &mut impl FnMut(Coord),
) {
    tracing::debug!("[generate] {} on {}x{} grid", pattern.id(), width, height);
    let mut rng = get_rng(seed);
    match pattern {
        Pattern::RandomMaze => random_maze(place, width, height, &mut rng),
        Pattern::DivideHorizontal => divide_horizontal(place, width, height, &mut rng),
        Pattern::DivideVertical => divide_vertical(place, width, height, &mut rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, NeighborMode};

    fn generate_walls(pattern: Pattern, width: u16, height: u16, seed: u64) -> Grid<bool> {
        let mut walls = Grid::new(width, height, false);
        generate_pattern(pattern, width, height, Some(seed), &mut |coord| {
            walls[coord] = true;
        });
        walls
    }

    /// Flood fill from the first open cell; returns how many open cells were
    /// reached.
    fn reachable_open_cells(walls: &Grid<bool>) -> usize {
        let start = match walls.coords().find(|&coord| !walls[coord]) {
            Some(coord) => coord,
            None => return 0,
        };
        let mut reached = Grid::new(walls.width(), walls.height(), false);
        reached[start] = true;
        let mut frontier = vec![start];
        let mut count = 1;
        while let Some(cell) = frontier.pop() {
            for neighbor in walls.neighbors(cell, NeighborMode::NonDiagonal) {
                if !walls[neighbor] && !reached[neighbor] {
                    reached[neighbor] = true;
                    count += 1;
                    frontier.push(neighbor);
                }
            }
        }
        count
    }

    #[test]
    fn test_recursive_division_never_seals_a_chamber() {
        for pattern in [Pattern::DivideVertical, Pattern::DivideHorizontal] {
            for seed in 0..8 {
                let walls = generate_walls(pattern, 13, 11, seed);
                let open = walls.coords().filter(|&coord| !walls[coord]).count();
                assert_eq!(
                    reachable_open_cells(&walls),
                    open,
                    "{pattern} sealed off a chamber with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_recursive_division_leaves_small_regions_untouched() {
        for pattern in [Pattern::DivideVertical, Pattern::DivideHorizontal] {
            let walls = generate_walls(pattern, 2, 2, 0);
            assert!(walls.coords().all(|coord| !walls[coord]));
        }
    }

    #[test]
    fn test_random_maze_row_density() {
        let walls = generate_walls(Pattern::RandomMaze, 10, 6, 42);
        for row in 0..6 {
            let obstructed = (0..10).filter(|&col| walls[(row, col)]).count();
            // One cell in four, rounded up: 10 columns -> 3 obstacles.
            assert_eq!(obstructed, 3, "wrong density in row {row}");
        }
    }

    #[test]
    fn test_same_seed_same_pattern() {
        for pattern in Pattern::ALL {
            let a = generate_walls(pattern, 12, 9, 7);
            let b = generate_walls(pattern, 12, 9, 7);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_pattern_ids_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.id().parse::<Pattern>().unwrap(), pattern);
        }
        assert!(matches!(
            "divide-diagonal".parse::<Pattern>(),
            Err(ConfigError::UnknownPattern(_))
        ));
    }
}
