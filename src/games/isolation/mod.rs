//! Knight's Isolation.
//!
//! Two players each own a single piece on a rectangular grid:
//! - On the first two plies each player places its piece on any open cell
//! - Afterwards a piece moves like a chess knight to an open cell
//! - Every cell a piece has occupied is closed for the rest of the game
//! - The player to move with no legal destination loses
//!
//! The default board is 11 x 9, the size used by the match driver.

mod board;
mod game;

pub use board::{Board, Cell};
pub use game::{Isolation, IsolationBuilder};
