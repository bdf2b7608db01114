//! Match driver: alternates two engines over one game.
//!
//! Each turn the player to move gets a fresh `LatestDecision` and one call
//! to `decide`. Whatever it last pushed is played. A player whose engine
//! fails, pushes nothing, or pushes an illegal action forfeits.

use tracing::{debug, info};

use crate::agent::DecisionEngine;
use crate::core::{LatestDecision, PlayerId, SearchError};
use crate::rules::GameState;

/// Why a player lost without being stranded.
#[derive(Clone, Debug, PartialEq)]
pub enum Forfeit {
    /// `decide` returned an error, or returned `Ok` with an empty sink
    /// (`SearchError::NoDecision`).
    EngineError(SearchError),

    /// The pushed action is not legal in the current state.
    IllegalAction(String),
}

/// Everything that happened in one match.
#[derive(Clone, Debug)]
pub struct MatchRecord<A> {
    /// Actions played, in order.
    pub moves: Vec<A>,

    /// The winner, or `None` if the ply cap ended the game first.
    pub winner: Option<PlayerId>,

    /// Set when the loser forfeited instead of running out of moves.
    pub forfeit: Option<(PlayerId, Forfeit)>,
}

impl<A> MatchRecord<A> {
    /// Number of plies played by the engines.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Play `first` against `second` from `initial_state`.
///
/// `first` moves whenever the first player is to move, whatever the ply
/// count of `initial_state`. The match stops at a terminal state, a
/// forfeit, or after `max_plies` plies.
pub fn play_match<S: GameState>(
    first: &mut dyn DecisionEngine<S>,
    second: &mut dyn DecisionEngine<S>,
    initial_state: S,
    max_plies: u32,
) -> MatchRecord<S::Action> {
    let mut state = initial_state;
    let mut record = MatchRecord {
        moves: Vec::new(),
        winner: None,
        forfeit: None,
    };

    for _ in 0..max_plies {
        if state.terminal_test() {
            break;
        }

        let player = state.player();
        let engine: &mut dyn DecisionEngine<S> = if player == PlayerId::FIRST {
            &mut *first
        } else {
            &mut *second
        };

        let mut sink = LatestDecision::new();
        let outcome = engine.decide(&state, &mut sink);

        let action = match (outcome, sink.take()) {
            (Err(e), _) => Err(Forfeit::EngineError(e)),
            (Ok(()), None) => Err(Forfeit::EngineError(SearchError::NoDecision)),
            (Ok(()), Some(action)) if !state.actions().contains(&action) => {
                Err(Forfeit::IllegalAction(format!("{action:?}")))
            }
            (Ok(()), Some(action)) => Ok(action),
        };

        match action {
            Ok(action) => {
                debug!(ply = state.ply_count(), %player, ?action, pushes = sink.pushes(), "move");
                state = state.result(&action);
                record.moves.push(action);
            }
            Err(reason) => {
                info!(%player, ?reason, ply = state.ply_count(), "forfeit");
                record.winner = Some(player.opponent());
                record.forfeit = Some((player, reason));
                return record;
            }
        }
    }

    if state.terminal_test() {
        record.winner = PlayerId::all().find(|&p| state.utility(p) > 0.0);
    }

    match record.winner {
        Some(winner) => info!(%winner, plies = record.plies(), "match finished"),
        None => info!(plies = record.plies(), "match stopped at ply cap"),
    }

    record
}
