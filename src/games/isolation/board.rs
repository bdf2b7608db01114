//! Board geometry: cell indexing and knight moves.

use serde::{Deserialize, Serialize};

/// Knight offsets, in the fixed order destinations are enumerated.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Largest board the open-cell bitmask can hold.
pub const MAX_CELLS: usize = 128;

/// Index of a cell on the board (row-major, `y * width + x`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub u8);

impl Cell {
    /// Get the raw index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Bit for this cell in an open-cell mask.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u128 {
        1u128 << self.0
    }
}

/// Board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    /// Create a board of the given size.
    ///
    /// Panics if the board is empty or has more than 128 cells.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "Board must have at least one cell");
        assert!(
            width as usize * height as usize <= MAX_CELLS,
            "Board must have at most {} cells",
            MAX_CELLS
        );
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Mask with every cell of the board set.
    #[must_use]
    pub fn full_mask(&self) -> u128 {
        if self.size() == MAX_CELLS {
            u128::MAX
        } else {
            (1u128 << self.size()) - 1
        }
    }

    /// The cell at column `x`, row `y`, if it is on the board.
    #[must_use]
    pub fn cell(&self, x: i16, y: i16) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some(Cell((y * self.width as i16 + x) as u8))
    }

    /// Column and row of a cell.
    #[must_use]
    pub fn coords(&self, cell: Cell) -> (i16, i16) {
        let w = self.width as i16;
        (cell.0 as i16 % w, cell.0 as i16 / w)
    }

    /// On-board knight destinations from `cell`, in canonical order.
    pub fn knight_moves(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let (x, y) = self.coords(cell);
        KNIGHT_OFFSETS
            .iter()
            .filter_map(move |&(dx, dy)| self.cell(x + dx as i16, y + dy as i16))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(11, 9)
    }
}
