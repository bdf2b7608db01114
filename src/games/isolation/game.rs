//! Isolation game state.

use std::fmt;

use crate::core::PlayerId;
use crate::rules::GameState;

use super::board::{Board, Cell};

/// An immutable Isolation position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Isolation {
    board: Board,
    /// Bitmask of cells no piece has occupied yet.
    open: u128,
    locs: [Option<Cell>; 2],
    ply_count: u32,
}

impl Isolation {
    /// A fresh game on the default 11 x 9 board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// A fresh game on the given board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            open: board.full_mask(),
            locs: [None, None],
            ply_count: 0,
        }
    }

    /// Get the board geometry.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether no piece has occupied `cell` yet.
    #[inline]
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.open & cell.bit() != 0
    }

    /// Number of open cells left.
    #[must_use]
    pub fn open_count(&self) -> u32 {
        self.open.count_ones()
    }

    fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.board.size() as u8)
            .map(Cell)
            .filter(move |&c| self.is_open(c))
    }
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Isolation {
    type Action = Cell;
    type Location = Option<Cell>;

    fn ply_count(&self) -> u32 {
        self.ply_count
    }

    fn actions(&self) -> Vec<Cell> {
        self.liberties(self.loc(self.player()))
    }

    fn result(&self, action: &Cell) -> Self {
        let player = self.player();
        assert!(
            self.liberties(self.locs[player.index()]).contains(action),
            "Illegal action {:?} for {} at ply {}",
            action,
            player,
            self.ply_count
        );

        let mut next = self.clone();
        next.open &= !action.bit();
        next.locs[player.index()] = Some(*action);
        next.ply_count += 1;
        next
    }

    fn terminal_test(&self) -> bool {
        !self.has_liberties(self.player())
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.terminal_test() {
            0.0
        } else if self.player() == player {
            -1.0
        } else {
            1.0
        }
    }

    fn loc(&self, player: PlayerId) -> Option<Cell> {
        self.locs[player.index()]
    }

    /// Unplaced pieces may go to any open cell.
    fn liberties(&self, loc: Option<Cell>) -> Vec<Cell> {
        match loc {
            None => self.open_cells().collect(),
            Some(cell) => self
                .board
                .knight_moves(cell)
                .filter(|&c| self.is_open(c))
                .collect(),
        }
    }

    fn player(&self) -> PlayerId {
        PlayerId::to_move(self.ply_count)
    }

    fn has_liberties(&self, player: PlayerId) -> bool {
        match self.locs[player.index()] {
            None => self.open != 0,
            Some(cell) => self.board.knight_moves(cell).any(|c| self.is_open(c)),
        }
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.board.height() as i16 {
            for x in 0..self.board.width() as i16 {
                let Some(cell) = self.board.cell(x, y) else {
                    continue;
                };
                let symbol = if self.locs[0] == Some(cell) {
                    '1'
                } else if self.locs[1] == Some(cell) {
                    '2'
                } else if self.is_open(cell) {
                    '.'
                } else {
                    'X'
                };
                write!(f, "{symbol}")?;
                if x + 1 < self.board.width() as i16 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builder for arbitrary Isolation positions.
///
/// ```
/// use isolation_search::games::isolation::IsolationBuilder;
/// use isolation_search::rules::GameState;
///
/// let state = IsolationBuilder::new(5, 5)
///     .open_only(&[(1, 1), (2, 2), (1, 3), (2, 3)])
///     .first_at(0, 1)
///     .second_at(4, 3)
///     .ply_count(2)
///     .build();
///
/// assert_eq!(state.actions().len(), 2);
/// ```
pub struct IsolationBuilder {
    board: Board,
    open: u128,
    locs: [Option<(i16, i16)>; 2],
    ply_count: u32,
}

impl IsolationBuilder {
    /// Start from an empty board of the given size.
    pub fn new(width: u8, height: u8) -> Self {
        let board = Board::new(width, height);
        Self {
            board,
            open: board.full_mask(),
            locs: [None, None],
            ply_count: 0,
        }
    }

    fn cell(&self, x: i16, y: i16) -> Cell {
        self.board
            .cell(x, y)
            .unwrap_or_else(|| panic!("Cell ({x}, {y}) is off the board"))
    }

    /// Close a cell.
    pub fn block(mut self, x: i16, y: i16) -> Self {
        self.open &= !self.cell(x, y).bit();
        self
    }

    /// Close every cell except the listed ones.
    pub fn open_only(mut self, cells: &[(i16, i16)]) -> Self {
        self.open = cells.iter().fold(0, |mask, &(x, y)| mask | self.cell(x, y).bit());
        self
    }

    /// Place the first player's piece.
    pub fn first_at(mut self, x: i16, y: i16) -> Self {
        self.locs[0] = Some((x, y));
        self
    }

    /// Place the second player's piece.
    pub fn second_at(mut self, x: i16, y: i16) -> Self {
        self.locs[1] = Some((x, y));
        self
    }

    /// Plies already played; decides whose turn it is.
    pub fn ply_count(mut self, ply_count: u32) -> Self {
        self.ply_count = ply_count;
        self
    }

    /// Build the position. Occupied cells are closed.
    pub fn build(self) -> Isolation {
        let mut open = self.open;
        let mut locs = [None, None];
        for (slot, loc) in locs.iter_mut().zip(self.locs) {
            if let Some((x, y)) = loc {
                let cell = self.cell(x, y);
                open &= !cell.bit();
                *slot = Some(cell);
            }
        }
        assert!(
            locs[0].is_none() || locs[0] != locs[1],
            "Both pieces cannot share a cell"
        );

        Isolation {
            board: self.board,
            open,
            locs,
            ply_count: self.ply_count,
        }
    }
}
