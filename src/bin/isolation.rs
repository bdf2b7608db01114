//! Isolation CLI - play matches between the search engines.
//!
//! ```text
//! isolation play --first alpha-beta --second mcts --games 10 --time-limit 150
//! ```

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use isolation_search::games::isolation::{Board, Isolation};
use isolation_search::{play_match, Agent, AlphaBetaConfig, GameRng, MctsConfig, PlayerId, Strategy};

#[derive(Parser)]
#[command(name = "isolation")]
#[command(version, about = "Alpha-beta and MCTS engines for knight's Isolation", long_about = None)]
struct Cli {
    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one or more games between two engines
    Play(PlayArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Engine for the first player
    #[arg(long, default_value = "alpha-beta")]
    first: Strategy,

    /// Engine for the second player
    #[arg(long, default_value = "mcts")]
    second: Strategy,

    /// Number of games
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Base seed; game `i` forks both engines' seeds from `seed + i`
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Alpha-beta depth ceiling
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Per-move allowance in milliseconds
    #[arg(long, env = "TIME_LIMIT", default_value_t = 150)]
    time_limit: u64,

    /// Board width
    #[arg(long, default_value_t = 11)]
    width: u8,

    /// Board height
    #[arg(long, default_value_t = 9)]
    height: u8,
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn play(args: PlayArgs) -> Result<()> {
    ensure!(args.games > 0, "--games must be at least 1");
    ensure!(args.width > 0 && args.height > 0, "board must have at least one cell");
    ensure!(
        u32::from(args.width) * u32::from(args.height) <= 128,
        "board must have at most 128 cells"
    );

    let board = Board::new(args.width, args.height);
    let max_plies = board.size() as u32;
    let mut wins = [0u32; 2];
    let mut unfinished = 0u32;

    for game in 0..args.games {
        let mut match_rng = GameRng::new(args.seed.wrapping_add(u64::from(game)));
        let mut agent = |strategy: Strategy| -> Result<Agent<Isolation>> {
            let seed = match_rng.fork().seed();
            let alpha_beta = AlphaBetaConfig::default()
                .with_depth_limit(args.depth)
                .with_time_limit(args.time_limit)
                .with_seed(seed);
            let mcts = MctsConfig::default().with_time_limit(args.time_limit).with_seed(seed);
            alpha_beta.validate()?;
            mcts.validate()?;
            Ok(Agent::new(strategy, alpha_beta, mcts))
        };

        let mut first = agent(args.first)?;
        let mut second = agent(args.second)?;

        let record = play_match(&mut first, &mut second, Isolation::with_board(board), max_plies);

        let outcome = match (record.winner, &record.forfeit) {
            (Some(winner), Some((loser, reason))) => {
                wins[winner.index()] += 1;
                format!("{winner} wins ({loser} forfeits: {reason:?})")
            }
            (Some(winner), None) => {
                wins[winner.index()] += 1;
                format!("{winner} wins")
            }
            (None, _) => {
                unfinished += 1;
                "unfinished".to_string()
            }
        };
        println!("game {:>3}: {:>3} plies, {}", game + 1, record.plies(), outcome);
    }

    println!();
    println!(
        "{} ({}): {} wins",
        PlayerId::FIRST,
        args.first,
        wins[PlayerId::FIRST.index()]
    );
    println!(
        "{} ({}): {} wins",
        PlayerId::SECOND,
        args.second,
        wins[PlayerId::SECOND.index()]
    );
    if unfinished > 0 {
        println!("unfinished: {unfinished}");
    }

    info!(games = args.games, first = wins[0], second = wins[1], "all games finished");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Play(args) => play(args),
    }
}
