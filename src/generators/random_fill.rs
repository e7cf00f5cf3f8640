use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::grid::Coord;

/// Fraction of each row to obstruct: one cell in `DENSITY`.
const DENSITY: u16 = 4;

/// Obstructs a random selection of cells in every row, with no connectivity
/// guarantee. Purely random noise, not a spanning maze.
pub fn random_maze(place: &mut impl FnMut(Coord), width: u16, height: u16, rng: &mut StdRng) {
    for row in 0..height {
        fill_row_randomly(place, row, width, rng);
    }
}

fn fill_row_randomly(place: &mut impl FnMut(Coord), row: u16, width: u16, rng: &mut StdRng) {
    let mut columns: Vec<u16> = (0..width).collect();
    columns.shuffle(rng);
    for &col in columns.iter().take(width.div_ceil(DENSITY) as usize) {
        place((row, col));
    }
}
