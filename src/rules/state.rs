//! The state abstraction both engines search over.
//!
//! Rules engines implement `GameState` to expose:
//! - Legal actions and their successors
//! - Terminal and utility tests
//! - Per-player locations and liberties
//!
//! ## Implementation Notes
//!
//! - States are immutable values: `result` returns a fresh state
//! - `actions` must enumerate in the same order on equal states; both
//!   engines break ties by first occurrence in that order
//! - A state with no legal actions for the player to move is terminal

use std::fmt::Debug;

use crate::core::PlayerId;

/// Immutable two-player game state.
pub trait GameState: Clone {
    /// A move, as enumerated by `actions`.
    type Action: Clone + PartialEq + Debug;

    /// A player's position on the board.
    type Location: Copy + Debug;

    /// Number of plies played from the initial state.
    fn ply_count(&self) -> u32;

    /// Legal actions for the player to move, in canonical order.
    fn actions(&self) -> Vec<Self::Action>;

    /// The state reached by applying `action`.
    ///
    /// Applying an action not returned by `actions` is a contract violation.
    fn result(&self, action: &Self::Action) -> Self;

    /// Whether the game is over.
    fn terminal_test(&self) -> bool;

    /// +1 if `player` has won, -1 if it has lost, 0 while the game continues.
    fn utility(&self, player: PlayerId) -> f64;

    /// Current location of `player`.
    fn loc(&self, player: PlayerId) -> Self::Location;

    /// Destinations reachable from `loc`.
    fn liberties(&self, loc: Self::Location) -> Vec<Self::Action>;

    /// The player to move.
    fn player(&self) -> PlayerId;

    // === Convenience Methods ===

    /// Whether `player` has at least one destination from its location.
    fn has_liberties(&self, player: PlayerId) -> bool {
        !self.liberties(self.loc(player)).is_empty()
    }
}
