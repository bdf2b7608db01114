//! Match driver integration tests.

mod common;

use common::forced_win;
use isolation_search::agent::{Agent, DecisionEngine, Strategy};
use isolation_search::core::DecisionSink;
use isolation_search::driver::{play_match, Forfeit};
use isolation_search::games::isolation::{Board, Cell, Isolation};
use isolation_search::mcts::MctsConfig;
use isolation_search::minimax::AlphaBetaConfig;
use isolation_search::{GameState, PlayerId, SearchError};

fn agent(strategy: Strategy, seed: u64) -> Agent<Isolation> {
    Agent::new(
        strategy,
        AlphaBetaConfig::default().with_depth_limit(3).with_seed(seed),
        MctsConfig::default()
            .with_time_limit(60_000)
            .with_max_iterations(60)
            .with_seed(seed),
    )
}

/// Replays `moves` from `start`, checking each is legal.
fn replay(start: &Isolation, moves: &[Cell]) -> Isolation {
    moves.iter().fold(start.clone(), |state, action| {
        assert!(state.actions().contains(action), "illegal move {action:?}");
        state.result(action)
    })
}

#[test]
fn test_full_game_between_engines() {
    let start = Isolation::with_board(Board::new(5, 5));
    let mut first = agent(Strategy::AlphaBeta, 1);
    let mut second = agent(Strategy::Mcts, 2);

    let record = play_match(&mut first, &mut second, start.clone(), 25);

    let end = replay(&start, &record.moves);
    assert!(record.forfeit.is_none());
    assert!(end.terminal_test());
    assert_eq!(record.winner, Some(end.player().opponent()));
}

#[test]
fn test_match_is_reproducible() {
    let start = Isolation::with_board(Board::new(5, 5));

    let play = || {
        let mut first = agent(Strategy::Mcts, 7);
        let mut second = agent(Strategy::AlphaBeta, 8);
        play_match(&mut first, &mut second, start.clone(), 25)
    };

    let a = play();
    let b = play();
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.winner, b.winner);
}

#[test]
fn test_engines_convert_forced_win() {
    for strategy in Strategy::ALL {
        let mut first = agent(strategy, 3);
        let mut second = agent(Strategy::AlphaBeta, 4);

        let record = play_match(&mut first, &mut second, forced_win(), 10);

        assert_eq!(record.plies(), 1, "{strategy} should strand the opponent at once");
        assert_eq!(record.winner, Some(PlayerId::FIRST));
    }
}

/// Always fails.
struct Broken;

impl DecisionEngine<Isolation> for Broken {
    fn decide(&mut self, _: &Isolation, _: &mut dyn DecisionSink<Cell>) -> Result<(), SearchError> {
        Err(SearchError::InvalidConfig("broken".to_string()))
    }
}

#[test]
fn test_engine_error_forfeits() {
    let mut first = agent(Strategy::AlphaBeta, 1);

    let record = play_match(&mut first, &mut Broken, forced_win(), 10);

    // The first player wins outright before the broken engine is asked
    assert_eq!(record.winner, Some(PlayerId::FIRST));
    assert!(record.forfeit.is_none());

    let record = play_match(&mut Broken, &mut first, forced_win(), 10);
    assert_eq!(record.winner, Some(PlayerId::SECOND));
    assert_eq!(
        record.forfeit,
        Some((
            PlayerId::FIRST,
            Forfeit::EngineError(SearchError::InvalidConfig("broken".to_string()))
        ))
    );
}
