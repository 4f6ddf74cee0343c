//! Gomoku self-play driver
//!
//! Black is played by the minimax engine, White by the chosen opponent.
//! Every committed move is logged; set `RUST_LOG=debug` for search details.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gomoku::{GameConfig, GameSession, Opponent, Outcome, Side};

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(version, about = "Play the Gomoku engine against itself or a random opponent", long_about = None)]
struct Args {
    /// Board dimension
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = 5)]
    win_length: usize,

    /// Search depth in plies
    #[arg(long, default_value_t = 2)]
    depth: u8,

    /// Opponent playing White
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> gomoku::Result<()> {
    let mut config = GameConfig::new(args.size, args.win_length)
        .with_depth(args.depth)
        .with_opponent(args.opponent);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = GameSession::from_config(config)?;
    info!(size = args.size, win_length = args.win_length, depth = args.depth, opponent = ?args.opponent, "starting self-play");

    loop {
        let side = game.next_side();
        let mov = match side {
            Side::Black => game.request_ai_move(side, args.depth)?,
            // Human has no automated moves, so the engine stands in
            Side::White => match game.opponent_move(side)? {
                Some(mov) => mov,
                None => game.request_ai_move(side, args.depth)?,
            },
        };
        let outcome = game.apply_move(side, mov.row as usize, mov.col as usize)?;
        info!(turn = game.move_count(), ?side, %mov, "move");

        match outcome {
            Outcome::InProgress => {}
            Outcome::Won(side) => {
                println!("{side:?} wins after {} moves", game.move_count());
                return Ok(());
            }
            Outcome::Drawn => {
                println!("Draw after {} moves", game.move_count());
                return Ok(());
            }
        }
    }
}
