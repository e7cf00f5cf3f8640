mod tile;

pub use tile::{GridFrame, TileFrame};

use crate::ConfigError;

/// A grid coordinate as `(row, col)`.
pub type Coord = (u16, u16);

/// Which neighbors a search may step to from a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborMode {
    /// The four cardinal neighbors.
    NonDiagonal,
    /// The four diagonal neighbors.
    Diagonal,
    /// All eight surrounding neighbors.
    All,
}

impl NeighborMode {
    /// All variants, in menu order.
    pub const ALL: [NeighborMode; 3] = [
        NeighborMode::NonDiagonal,
        NeighborMode::Diagonal,
        NeighborMode::All,
    ];

    /// The identifier this mode is selected by.
    pub fn id(self) -> &'static str {
        match self {
            NeighborMode::NonDiagonal => "non-diagonals",
            NeighborMode::Diagonal => "diagonals",
            NeighborMode::All => "both",
        }
    }
}

impl std::str::FromStr for NeighborMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "non-diagonals" => Ok(NeighborMode::NonDiagonal),
            "diagonals" => Ok(NeighborMode::Diagonal),
            "both" => Ok(NeighborMode::All),
            _ => Err(ConfigError::UnknownNeighborMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for NeighborMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NeighborMode::NonDiagonal => write!(f, "Non-diagonal neighbors"),
            NeighborMode::Diagonal => write!(f, "Diagonal neighbors"),
            NeighborMode::All => write!(f, "All neighbors"),
        }
    }
}

/// A fixed-size row-major matrix indexed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    /// Creates a new grid of the given dimensions with every cell set to `fill`.
    pub fn new(width: u16, height: u16, fill: T) -> Self {
        let data = vec![fill; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Returns the number of columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.height && coord.1 < self.width
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    fn ravel_index(&self, row: u16, col: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        row as usize * self.width as usize + col as usize
    }

    /// Generates the neighbors of a cell under the given mode, silently
    /// dropping out-of-bounds candidates.
    ///
    /// The candidate order is fixed so that unweighted searches tie-break
    /// deterministically: `+row`, `-row`, `+col`, `-col`, then the diagonals
    /// `(+,+)`, `(+,-)`, `(-,+)`, `(-,-)`.
    pub fn neighbors(&self, coord: Coord, mode: NeighborMode) -> Vec<Coord> {
        let (row, col) = coord;
        // NOTE: This way of handling underflow/overflow is overflow-safe.
        // When row < 1 or col < 1, wrap to u16::MAX to avoid underflow and let
        // the bounds check filter it out. When an increment would exceed
        // u16::MAX, saturate to u16::MAX, which is likewise never a valid
        // index (the largest index numerically possible is u16::MAX - 1).
        let cardinals = [
            (row.saturating_add(1), col),
            (row.wrapping_sub(1), col),
            (row, col.saturating_add(1)),
            (row, col.wrapping_sub(1)),
        ];
        let diagonals = [
            (row.saturating_add(1), col.saturating_add(1)),
            (row.saturating_add(1), col.wrapping_sub(1)),
            (row.wrapping_sub(1), col.saturating_add(1)),
            (row.wrapping_sub(1), col.wrapping_sub(1)),
        ];

        let candidates: Vec<Coord> = match mode {
            NeighborMode::NonDiagonal => cardinals.to_vec(),
            NeighborMode::Diagonal => diagonals.to_vec(),
            NeighborMode::All => cardinals.iter().chain(diagonals.iter()).copied().collect(),
        };

        candidates
            .into_iter()
            .filter(|&c| self.in_bounds(c))
            .collect()
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

/// Returns the first coordinate (in row-major scan order) marked in both
/// masks, or `None` if the masks are disjoint.
pub fn overlap(a: &Grid<bool>, b: &Grid<bool>) -> Option<Coord> {
    a.coords().find(|&coord| a[coord] && b[coord])
}
