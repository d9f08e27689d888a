//! peerchess - query and play positions from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use peerchess_core::FenParser;
use peerchess_engine::Game;
use tracing::Level;

#[derive(Parser)]
#[command(name = "peerchess")]
#[command(about = "Bitboard chess position explorer")]
struct Cli {
    /// Position to start from
    #[arg(long, global = true, default_value = FenParser::STARTPOS)]
    fen: String,

    /// Log every applied and rejected move
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the squares the piece on SQUARE can move to
    Moves {
        /// Square in algebraic notation, e.g. e2
        square: String,
    },
    /// Play moves in coordinate notation and print the resulting FEN
    Play {
        /// Moves such as e2e4 or e7e8q
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Print the board diagram and FEN
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let mut game = Game::from_fen(&cli.fen).context("invalid --fen")?;
    tracing::debug!(fen = %game.to_fen(), "position loaded");

    match cli.command {
        Commands::Moves { square } => {
            let targets = game
                .find_moves(&square)
                .with_context(|| format!("cannot list moves for {}", square))?;
            println!("{}", targets.join(" "));
        }
        Commands::Play { moves } => {
            for mv in &moves {
                game.make_move_uci(mv)
                    .with_context(|| format!("move {} rejected", mv))?;
            }
            tracing::info!(
                start = %game.start_position().to_fen(),
                plies = game.ply_count(),
                "moves played"
            );
            println!("{}", game.to_fen());
        }
        Commands::Show => {
            print!("{}", game.position().board);
            println!("{}", game.to_fen());
        }
    }

    Ok(())
}
