use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use gravity_four::ai::{Agent, RandomAgent};
use gravity_four::config::EngineConfig;
use gravity_four::game::{MatchState, Outcome, Piece};

/// Play the automated opponent against a random mover for a session of games.
#[derive(Parser)]
#[command(name = "autoplay", about = "Run headless games against the minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "engine.toml")]
    config: PathBuf,

    /// Override number of rows (4-8)
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns (4-8)
    #[arg(long)]
    cols: Option<usize>,

    /// Number of games in the session
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Seed for the random mover
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board of every game
    #[arg(long)]
    print_boards: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    config.validate().context("validating board overrides")?;
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut state = MatchState::from_config(&config).context("starting match")?;
    let mut mover = match cli.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };

    info!(
        "playing {} games on {}x{} ({} vs automated opponent)",
        cli.games,
        config.board.rows,
        config.board.cols,
        mover.name()
    );

    for game in 1..=cli.games {
        let outcome = play_game(&mut state, &mut mover)?;
        println!("Game {game}: {}", describe(outcome));
        if cli.print_boards {
            println!("{}", state.grid());
        }
        state.reset_grid();
    }

    let (a, b) = state.scores();
    println!("-------------------------------------------");
    println!("Player 1 ({}) scores: {a}, Player 2 ({}) scores: {b}", Piece::A, Piece::B);
    match state.winner() {
        Some(piece) => println!("Session winner: {piece}"),
        None => println!("Session tied"),
    }
    Ok(())
}

/// Drive one game through the same calls an interactive front end makes.
fn play_game(state: &mut MatchState, mover: &mut RandomAgent) -> Result<Outcome> {
    loop {
        let column = mover
            .select_column(state.grid())
            .context("random mover found no open column")?
            + 1;
        if !state.in_range(column) || state.is_column_full(column) {
            bail!("random mover picked unplayable column {column}");
        }
        state.apply_human_move(column)?;
        if state.is_game_over(state.current_turn()) {
            break;
        }

        state.apply_automated_move()?;
        if state.is_game_over(state.current_turn()) {
            break;
        }
    }

    state
        .last_outcome()
        .context("game ended without a recorded outcome")
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(piece) => format!("{piece} wins"),
        Outcome::Tie => "tie".to_string(),
    }
}
