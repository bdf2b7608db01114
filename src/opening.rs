//! Moves chosen without search.
//!
//! On the first two plies neither piece has a position worth reasoning
//! about, so both engines place uniformly at random. The same uniform
//! choice is the fallback when an engine is handed a terminal root.

use tracing::trace;

use crate::core::{GameRng, SearchError};
use crate::rules::GameState;

/// Plies played at random before search takes over.
pub const OPENING_PLIES: u32 = 2;

/// Whether `state` is still in the opening.
#[inline]
#[must_use]
pub fn in_opening<S: GameState>(state: &S) -> bool {
    state.ply_count() < OPENING_PLIES
}

/// A uniformly random legal action.
///
/// Fails with `NoLegalActions` when the player to move has none.
pub fn random_action<S: GameState>(state: &S, rng: &mut GameRng) -> Result<S::Action, SearchError> {
    let actions = state.actions();
    let action = rng.choose(&actions).cloned().ok_or(SearchError::NoLegalActions)?;
    trace!(ply = state.ply_count(), ?action, "random action");
    Ok(action)
}
