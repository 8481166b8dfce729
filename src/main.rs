//! kalah-agent - time-budgeted Kalah move chooser
//!
//! `choose` prints the move for the near side of a KGP board; `selfplay`
//! runs the agent against itself from the opening position.

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand};
use kalah_agent::{Agent, AgentConfig};
use kalah_engine::{Board, GameState, Score, Side};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kalah-agent")]
#[command(about = "Alpha-beta Kalah agent with iterative deepening")]
struct Cli {
    #[command(flatten)]
    search: SearchArgs,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// JSON config file (time_budget_ms, min_depth, max_depth)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Thinking time per move in milliseconds
    #[arg(long, global = true)]
    budget_ms: Option<u64>,

    /// First search depth
    #[arg(long, global = true)]
    min_depth: Option<u32>,

    /// Exclusive upper search depth
    #[arg(long, global = true)]
    max_depth: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a move for the near (south) side of a board
    Choose {
        /// Board in KGP notation, e.g. <3,0,0,3,3,3,3,3,3>
        #[arg(long)]
        board: String,
    },
    /// Play a full game of the agent against itself
    Selfplay {
        /// Pits per side
        #[arg(long, default_value_t = 6)]
        pits: usize,

        /// Stones per pit at the start
        #[arg(long, default_value_t = 6)]
        stones: u32,

        /// Stop after this many moves even if the game is not over
        #[arg(long, default_value_t = 500)]
        max_moves: usize,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_config(args: &SearchArgs) -> Result<AgentConfig> {
    let mut config = match &args.config {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::default(),
    };
    if let Some(budget_ms) = args.budget_ms {
        config.time_budget_ms = budget_ms;
    }
    if let Some(min_depth) = args.min_depth {
        config.min_depth = min_depth;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    config.validate()?;
    Ok(config)
}

fn choose(agent: &Agent, board: &str) -> Result<()> {
    let board: Board = board.parse()?;
    let report = agent.decide(&board)?;
    match report.best_move {
        // KGP numbers pits from 1.
        Some(pit) => println!("{}", pit + 1),
        None => println!("none"),
    }
    Ok(())
}

fn selfplay(agent: &Agent, pits: usize, stones: u32, max_moves: usize) -> Result<()> {
    let total = 2 * pits as u64 * u64::from(stones);
    ensure!(
        total <= Score::MAX as u64,
        "{} stones in play, at most {} supported",
        total,
        Score::MAX
    );
    let mut board = Board::new(pits, stones);
    let mut side = Side::Near;

    for turn in 0..max_moves {
        if board.is_final() {
            break;
        }

        // The agent always searches for the near side, so the far player
        // looks at the board from across the table.
        let view = match side {
            Side::Near => board.clone(),
            Side::Far => board.mirrored(),
        };
        let Some(pit) = agent.choose_move(&view)? else {
            break;
        };

        let (next, again) = board.play(side, pit)?;
        info!(turn, %side, pit = pit + 1, again, board = %next, "move");
        board = next;
        if !again {
            side = side.other();
        }
    }

    let near = board[Side::Near];
    let far = board[Side::Far];
    println!("{}", board);
    match near.cmp(&far) {
        std::cmp::Ordering::Greater => println!("near wins {}-{}", near, far),
        std::cmp::Ordering::Less => println!("far wins {}-{}", far, near),
        std::cmp::Ordering::Equal => println!("draw {}-{}", near, far),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = resolve_config(&cli.search)?;
    info!(
        budget_ms = config.time_budget_ms,
        min_depth = config.min_depth,
        max_depth = config.max_depth,
        "configuration loaded"
    );
    let agent = Agent::from_config(&config)?;

    match cli.command {
        Command::Choose { board } => choose(&agent, &board),
        Command::Selfplay {
            pits,
            stones,
            max_moves,
        } => selfplay(&agent, pits, stones, max_moves),
    }
}
