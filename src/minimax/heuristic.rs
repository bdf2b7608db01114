//! Static evaluation at the search frontier.

use crate::core::PlayerId;
use crate::rules::GameState;

/// Static evaluation of a non-terminal frontier state.
pub trait Heuristic<S: GameState> {
    /// Score `state` from `player`'s point of view. Higher is better.
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

/// Mobility: own liberties minus opponent liberties.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mobility;

impl<S: GameState> Heuristic<S> for Mobility {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        let own = state.liberties(state.loc(player)).len();
        let opp = state.liberties(state.loc(player.opponent())).len();
        own as f64 - opp as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::isolation::IsolationBuilder;

    #[test]
    fn test_mobility_difference() {
        // First player in a corner (2 moves), second in the center (8 moves)
        let state = IsolationBuilder::new(5, 5)
            .first_at(0, 0)
            .second_at(2, 2)
            .ply_count(2)
            .build();

        assert_eq!(Mobility.evaluate(&state, PlayerId::FIRST), -6.0);
        assert_eq!(Mobility.evaluate(&state, PlayerId::SECOND), 6.0);
    }
}
