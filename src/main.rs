//! fair-rps CLI - play one round of N-move rock-paper-scissors against
//! the computer, with an HMAC commitment you can verify afterwards.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fair_rps::round::render;
use fair_rps::{MoveSet, Round, Session, SessionEnd};
use tracing::{debug, error, info};

/// Every argument is a move name, including ones that look like flags.
#[derive(Parser, Debug)]
#[command(name = "fair-rps")]
#[command(about = "Generalized rock-paper-scissors with a verifiable computer move")]
#[command(disable_help_flag = true, disable_version_flag = true, allow_hyphen_values = true)]
struct Args {
    /// Move names in cycle order: an odd number (at least 3) of distinct names
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    moves: Vec<String>,
}

/// Validate the move list, printing the error and usage line on rejection.
fn load_moves<W: Write>(names: Vec<String>, out: &mut W) -> io::Result<Option<MoveSet>> {
    match MoveSet::new(names) {
        Ok(moves) => Ok(Some(moves)),
        Err(err) => {
            render::write_usage_error(out, &err)?;
            Ok(None)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays a clean transcript
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(io::stderr)
        .init();

    let moves = match load_moves(args.moves, &mut io::stdout().lock()) {
        Ok(Some(moves)) => moves,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "could not write usage");
            return ExitCode::FAILURE;
        }
    };
    info!(count = moves.len(), "starting round");

    match play(moves) {
        Ok(end) => {
            if let SessionEnd::Resolved(summary) = &end {
                match serde_json::to_string(summary) {
                    Ok(json) => debug!(summary = %json, "round finished"),
                    Err(err) => debug!(%err, "could not serialize round summary"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "round aborted");
            ExitCode::FAILURE
        }
    }
}

fn play(moves: MoveSet) -> fair_rps::Result<SessionEnd> {
    let round = Round::start(moves)?;
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());
    session.run(round)
}
