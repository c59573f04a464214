use std::process::ExitCode;

use clap::Parser;

use duel_chess::console::console_top::{run_stdio_loop, ConsoleConfig, EngineKind, PlayAs};
use duel_chess::search::minimax::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

/// Play chess against the engine in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth in plies.
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH,
          value_parser = clap::value_parser!(u8).range(1..=MAX_SEARCH_DEPTH as i64))]
    depth: u8,

    #[arg(short, long, value_enum, default_value_t = EngineKind::Minimax)]
    engine: EngineKind,

    /// Side entered by hand; `both` leaves the engine idle until `go`.
    #[arg(short, long, value_enum, default_value_t = PlayAs::White)]
    play_as: PlayAs,

    /// Start from this position instead of the standard layout.
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = ConsoleConfig {
        engine: cli.engine,
        depth: cli.depth,
        play_as: cli.play_as,
        fen: cli.fen,
    };

    match run_stdio_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    }
}
