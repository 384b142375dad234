//! Fair RPS command-line front end
//!
//! Plays one provably fair game of N-move rock-paper-scissors on the
//! console, or checks a finished game's HMAC against its revealed key.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fair_rps_core::{Commitment, GameSession, MoveSet, Secret, StdTerminal};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for a rejected move list or malformed verify arguments
const USAGE_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "fair-rps",
    about = "Rock-paper-scissors for any odd number of moves, with an HMAC proof that the computer did not cheat",
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true
)]
struct Cli {
    /// Log level used when RUST_LOG is unset: "trace", "debug", "info", "warn", "error".
    /// Logs go to stderr.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// Move labels in circle order: an odd number, at least 3, no repeats.
    /// Each move beats the half of the list before it and loses to the half after it.
    /// Labels may start with '-'. A first label of "verify" selects the verify subcommand.
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a revealed key and computer move reproduce a published HMAC.
    Verify {
        /// The "HMAC key" printed at the end of the game.
        #[arg(long)]
        key: String,

        /// The "HMAC" printed at the start of the game.
        #[arg(long)]
        hmac: String,

        /// The computer's move as announced.
        #[arg(value_name = "MOVE")]
        move_label: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Some(Command::Verify {
            key,
            hmac,
            move_label,
        }) => Ok(verify(&key, &hmac, &move_label)),
        None => play(cli.moves).await,
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn play(labels: Vec<String>) -> anyhow::Result<ExitCode> {
    let moves = match load_moves(labels) {
        Ok(moves) => moves,
        Err(diagnostic) => {
            eprintln!("{}", diagnostic);
            return Ok(ExitCode::from(USAGE_ERROR));
        }
    };

    let mut session = GameSession::new(moves).context("failed to start the game")?;
    let mut terminal = StdTerminal::new();
    session
        .run(&mut terminal)
        .await
        .with_context(|| format!("game {} aborted", session.id()))?;

    Ok(ExitCode::SUCCESS)
}

/// Validate the move list, or produce the one-line diagnostic for stderr
fn load_moves(labels: Vec<String>) -> Result<MoveSet, String> {
    MoveSet::new(labels).map_err(|err| {
        debug!(%err, "rejected move list");
        format!(
            "Error: Invalid number of moves or repeated moves ({}). \
             Please provide an odd number (at least 3) of unique moves, \
             e.g. fair-rps Rock Paper Scissors",
            err
        )
    })
}

fn verify(key: &str, hmac: &str, move_label: &str) -> ExitCode {
    match check_proof(key, hmac, move_label) {
        Ok(true) => {
            println!("HMAC verified: the computer committed to {}.", move_label);
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("HMAC mismatch: {} was not the committed move.", move_label);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn check_proof(key: &str, hmac: &str, move_label: &str) -> anyhow::Result<bool> {
    let secret = Secret::from_hex(key).context("invalid --key")?;
    let commitment = Commitment::from_hex(hmac).context("invalid --hmac")?;
    Ok(commitment.verify(&secret, move_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_are_positional() {
        let cli = Cli::try_parse_from(["fair-rps", "Rock", "Paper", "Scissors"]).unwrap();
        assert_eq!(cli.moves, ["Rock", "Paper", "Scissors"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_log_level_flag() {
        let cli =
            Cli::try_parse_from(["fair-rps", "--log-level", "debug", "a", "b", "c"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.moves.len(), 3);
    }

    #[test]
    fn test_help_is_an_ordinary_label() {
        let cli = Cli::try_parse_from(["fair-rps", "help", "Paper", "Scissors"]).unwrap();
        assert_eq!(cli.moves, ["help", "Paper", "Scissors"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_labels_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["fair-rps", "-1", "0", "1"]).unwrap();
        assert_eq!(cli.moves, ["-1", "0", "1"]);
    }

    #[test]
    fn test_rejected_move_lists_produce_diagnostic() {
        for labels in [vec!["A", "A", "B"], vec!["A", "B"], vec![]] {
            let labels: Vec<String> = labels.into_iter().map(String::from).collect();
            let diagnostic = load_moves(labels).unwrap_err();
            assert!(diagnostic.starts_with("Error: Invalid number of moves or repeated moves"));
            assert_eq!(diagnostic.lines().count(), 1);
        }
        assert!(load_moves(vec!["A".into(), "B".into(), "C".into()]).is_ok());
    }

    #[test]
    fn test_verify_subcommand() {
        let cli = Cli::try_parse_from([
            "fair-rps", "verify", "--key", "aa", "--hmac", "bb", "Paper",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Verify {
                key,
                hmac,
                move_label,
            }) => {
                assert_eq!(key, "aa");
                assert_eq!(hmac, "bb");
                assert_eq!(move_label, "Paper");
            }
            None => panic!("expected verify subcommand"),
        }
        assert!(cli.moves.is_empty());
    }

    #[test]
    fn test_check_proof() {
        let secret = Secret::random().unwrap();
        let commitment = Commitment::new(&secret, "Lizard").unwrap();
        let key = secret.to_hex();
        let hmac = commitment.to_string();

        assert!(check_proof(&key, &hmac, "Lizard").unwrap());
        assert!(!check_proof(&key, &hmac, "Spock").unwrap());
        assert!(check_proof("zz", &hmac, "Lizard").is_err());
        assert!(check_proof(&key, "abcd", "Lizard").is_err());
    }
}
