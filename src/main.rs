//! Othello-Engine: an Othello player with minimax, heuristic and MCTS strategies.
//!
//! ## Usage
//!
//! - `othello-engine` - Show a demo
//! - `othello-engine console` - Start the command loop
//! - `othello-engine selfplay --games 3` - Play computer against computer
//! - `othello-engine demo` - Show each strategy's choice at the opening
//!
//! Global flags (`--black`, `--white`, `--depth`, `--iterations`,
//! `--exploration`, `--seed`, `--verbose`) go before the subcommand.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello_engine::board::{Board, Color, str_coord};
use othello_engine::config::EngineConfig;
use othello_engine::console::ConsoleSession;
use othello_engine::game::Game;
use othello_engine::player::Player;
use othello_engine::rules::legal_moves;
use othello_engine::strategy::{Agent, Strategy, StrategyKind};

/// Othello-Engine: minimax, heuristic and MCTS Othello players
#[derive(Parser)]
#[command(name = "othello-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Strategy for black: minimax, heuristic, mcts or human
    #[arg(long, global = true, default_value = "heuristic")]
    black: String,

    /// Strategy for white: minimax, heuristic, mcts or human
    #[arg(long, global = true, default_value = "mcts")]
    white: String,

    /// Search depth for the alpha-beta strategies
    #[arg(long, global = true)]
    depth: Option<u32>,

    /// MCTS rounds per move
    #[arg(long, global = true)]
    iterations: Option<usize>,

    /// UCT exploration constant
    #[arg(long, global = true)]
    exploration: Option<f64>,

    /// Seed for MCTS randomness
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the line-oriented command loop on stdin/stdout
    Console,
    /// Play complete games between the two configured strategies
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
    /// Show the opening position and each strategy's choice
    Demo,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            depth: self.depth.unwrap_or(defaults.depth),
            iterations: self.iterations.unwrap_or(defaults.iterations),
            exploration: self.exploration.unwrap_or(defaults.exploration),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.engine_config();
    config.validate().context("invalid engine configuration")?;
    let black = Agent::from_name(&cli.black, &config)
        .with_context(|| format!("cannot seat black player '{}'", cli.black))?;
    let white = Agent::from_name(&cli.white, &config)
        .with_context(|| format!("cannot seat white player '{}'", cli.white))?;

    match cli.command {
        Some(Commands::Console) => {
            let mut session = ConsoleSession::new(black, white);
            session.run().context("console i/o failed")?;
        }
        Some(Commands::Selfplay { games }) => {
            run_selfplay(black, white, games)?;
        }
        Some(Commands::Demo) | None => {
            run_demo(&config)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_selfplay(mut black: Agent, mut white: Agent, games: usize) -> Result<()> {
    if black.is_human() || white.is_human() {
        bail!("selfplay needs two computer strategies");
    }

    let mut wins = [0usize; 2];
    let mut draws = 0usize;

    for g in 1..=games {
        let mut game = Game::new(Color::Black, Color::White)?;
        while !game.is_over() {
            let color = game.turn();
            let agent = match color {
                Color::Black => &mut black,
                Color::White => &mut white,
            };
            let played = game
                .step(agent)
                .with_context(|| format!("game {g}: {color} chose an illegal move"))?;
            if played.is_none() {
                bail!("game {g}: {color} has moves but offered none");
            }
        }

        let (b, w) = game.score();
        println!("=== Game {g} ===");
        println!("{}", game.board());
        println!(
            "black ({}) {b} - white ({}) {w}: {} after {} moves, {} passes\n",
            black.kind(),
            white.kind(),
            game.outcome(),
            game.moves_played(),
            game.passes()
        );
        match b.cmp(&w) {
            std::cmp::Ordering::Greater => wins[0] += 1,
            std::cmp::Ordering::Less => wins[1] += 1,
            std::cmp::Ordering::Equal => draws += 1,
        }
        info!(game = g, black = b, white = w, "game finished");
    }

    println!(
        "{games} games: black ({}) {} wins, white ({}) {} wins, {draws} draws",
        black.kind(),
        wins[0],
        white.kind(),
        wins[1]
    );
    Ok(())
}

fn run_demo(config: &EngineConfig) -> Result<()> {
    println!("Othello-Engine\n");

    println!("=== Opening Position ===");
    let board = Board::new();
    println!("{board}");

    let moves: Vec<String> = legal_moves(&board, Color::Black)
        .keys()
        .map(|&pt| str_coord(pt))
        .collect();
    println!("Black to move: {}\n", moves.join(" "));

    println!("=== Strategy Choices ===");
    let black = Player::from_board(Color::Black, &board);
    let white = Player::from_board(Color::White, &board);
    for kind in [StrategyKind::Minimax, StrategyKind::Heuristic, StrategyKind::Mcts] {
        let mut agent = Agent::new(kind, config)?;
        match agent.select_move(&board, &black, &white) {
            Some(mv) => println!("{kind:>9}: {}", str_coord(mv.dest)),
            None => println!("{kind:>9}: pass"),
        }
    }
    Ok(())
}
