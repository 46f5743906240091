//! connect4 - headless driver for the Connect-Four search bot
//!
//! - `connect4 match` plays the bot (player two) against a random opponent
//! - `connect4 move` reads a position and prints the bot's reply

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use connect4_arena::{play_match_with, GameResult, RandomOpponent};
use connect4_core::{outcome, Board, Player};
use connect4_mcts::{Mcts, MctsConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

mod config;

use crate::config::{load_config, FileConfig, SearchOverrides};

#[derive(Debug, Parser)]
#[command(name = "connect4", version, about = "Connect-Four Monte Carlo tree search bot")]
struct Cli {
    /// TOML file with [mcts] and [arena] tables
    #[arg(long, env = "CONNECT4_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(flatten)]
    search: SearchArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Search iterations per move
    #[arg(long, global = true)]
    iterations: Option<u32>,

    /// UCB1 exploration constant
    #[arg(long, global = true)]
    exploration_constant: Option<f64>,

    /// Seed for the search's random rollouts
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Rollouts take a winning drop whenever one is available
    #[arg(long, global = true)]
    adopt_wins: bool,
}

impl From<&SearchArgs> for SearchOverrides {
    fn from(args: &SearchArgs) -> Self {
        Self {
            iterations: args.iterations,
            exploration_constant: args.exploration_constant,
            seed: args.seed,
            adopt_wins: args.adopt_wins,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play the bot against a random opponent
    Match {
        /// Number of games
        #[arg(long)]
        games: Option<u32>,

        /// Seed for the opponent's moves
        #[arg(long)]
        opponent_seed: Option<u64>,
    },
    /// Let the bot answer a position where player one has just moved
    Move {
        /// Board file: six rows of seven cells (`.`, `X`, `O`). Reads stdin when omitted.
        board: Option<PathBuf>,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut config = load_config(cli.config.as_deref());
    config.apply_search_overrides(&SearchOverrides::from(&cli.search));
    config.mcts.validate()?;

    match cli.command {
        Command::Match {
            games,
            opponent_seed,
        } => {
            if let Some(games) = games {
                config.arena.games = games;
            }
            if opponent_seed.is_some() {
                config.arena.opponent_seed = opponent_seed;
            }
            run_match(&config)
        }
        Command::Move { board } => run_move(&config.mcts, board.as_deref()),
    }
}

fn run_match(config: &FileConfig) -> Result<()> {
    info!(
        games = config.arena.games,
        iterations = config.mcts.num_iterations,
        "Starting match against random opponent"
    );

    let mut opponent = RandomOpponent::new(rng_from(config.arena.opponent_seed));
    let mut rng = rng_from(config.mcts.seed);

    let stats = play_match_with(
        config.arena.games,
        &mut opponent,
        &config.mcts,
        &mut rng,
        |index, record| {
            let verdict = match record.result {
                Some(GameResult::PlayerTwoWin) => "bot wins",
                Some(GameResult::PlayerOneWin) => "opponent wins",
                Some(GameResult::Draw) | None => "draw",
            };
            println!("Game {}: {} in {} moves", index + 1, verdict, record.len());
            println!("{}\n", record.final_board());
        },
    )?;

    println!(
        "Bot {} / opponent {} / draws {} over {} games (win rate {:.1}%, {:.1} moves per game)",
        stats.bot_wins,
        stats.opponent_wins,
        stats.draws,
        stats.games,
        stats.bot_win_rate() * 100.0,
        stats.average_length(),
    );

    Ok(())
}

fn read_board(path: Option<&Path>) -> Result<Board> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read board from stdin")?;
            text
        }
    };
    text.parse::<Board>().context("invalid board")
}

fn run_move(config: &MctsConfig, path: Option<&Path>) -> Result<()> {
    let board = read_board(path)?;

    let (ones, twos) = (board.count(Player::One), board.count(Player::Two));
    if ones != twos + 1 {
        warn!(
            player_one = ones,
            player_two = twos,
            "Chip counts do not look like player two is to move"
        );
    }

    let result = Mcts::new().search(&board, Player::One, config)?;

    println!("{}\n", result.board);
    println!("Bot drops in column {}", result.column);
    for (column, visits) in &result.root_visit_counts {
        println!("  column {column}: {visits} visits");
    }
    println!("Root value {:+.3}", result.root_value);

    if let Some(finished) = outcome(&result.board) {
        match finished.winner() {
            Some(player) => println!("Game over: {player} wins"),
            None => println!("Game over: draw"),
        }
    }

    Ok(())
}
