use rand::{Rng, rngs::StdRng};

use crate::grid::Coord;

/// Recursive division with vertical wall lines.
///
/// Each recursion places one full-height wall line at a random interior
/// column with one random hole, then divides the sub-regions on either side.
/// Regions with either dimension of 2 or less are left untouched, so every
/// pair of adjacent chambers keeps exactly one passage.
pub fn divide_vertical(place: &mut impl FnMut(Coord), width: u16, height: u16, rng: &mut StdRng) {
    divide(place, 0, 0, height, width, rng);

    fn divide(
        place: &mut impl FnMut(Coord),
        base_row: u16,
        base_col: u16,
        height: u16,
        width: u16,
        rng: &mut StdRng,
    ) {
        if width <= 2 || height <= 2 {
            return;
        }

        let upper_row = base_row + height;
        let upper_col = base_col + width;
        let wall_col = rng.random_range(base_col + 1..upper_col - 1);
        let hole_row = rng.random_range(base_row..upper_row);

        for row in base_row..upper_row {
            if row != hole_row {
                place((row, wall_col));
            }
        }

        divide(place, base_row, base_col, height, wall_col - base_col - 1, rng);
        divide(
            place,
            base_row,
            wall_col + 1,
            height,
            upper_col - wall_col - 1,
            rng,
        );
    }
}

/// Recursive division with horizontal wall lines. Mirror of
/// [`divide_vertical`].
pub fn divide_horizontal(place: &mut impl FnMut(Coord), width: u16, height: u16, rng: &mut StdRng) {
    divide(place, 0, 0, height, width, rng);

    fn divide(
        place: &mut impl FnMut(Coord),
        base_row: u16,
        base_col: u16,
        height: u16,
        width: u16,
        rng: &mut StdRng,
    ) {
        if width <= 2 || height <= 2 {
            return;
        }

        let upper_row = base_row + height;
        let upper_col = base_col + width;
        let wall_row = rng.random_range(base_row + 1..upper_row - 1);
        let hole_col = rng.random_range(base_col..upper_col);

        for col in base_col..upper_col {
            if col != hole_col {
                place((wall_row, col));
            }
        }

        divide(place, base_row, base_col, wall_row - base_row - 1, width, rng);
        divide(
            place,
            wall_row + 1,
            base_col,
            upper_row - wall_row - 1,
            width,
            rng,
        );
    }
}
