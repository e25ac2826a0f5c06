//! # holdem CLI Library
//!
//! Terminal front end for the Hold'em engine. It only translates between the
//! terminal and the engine; all game logic lives in `holdem_engine` and the
//! opponents and coach in `holdem_ai`.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "As", "Ks"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("AKs"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against AI opponents with coaching
//! - `sim`: Let AI opponents play each other, optionally writing JSONL history
//! - `eval`: Describe hole cards or evaluate a 5-7 card hand
//! - `cfg`: Display the resolved configuration

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level. Calling it twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Command-line arguments, program name first
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with success
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: holdem <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: holdem --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            players,
            stack,
            small_blind,
            big_blind,
            opponents,
            seed,
            hands,
            timeout,
            no_coach,
        } => {
            let opts = PlayOptions {
                players,
                stack,
                small_blind,
                big_blind,
                opponents,
                seed,
                hands,
                timeout,
                coach: !no_coach,
            };
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            players,
            stack,
            opponents,
            seed,
            output,
            verbose,
        } => handle_sim_command(
            SimOptions {
                hands,
                players,
                stack,
                opponents,
                seed,
                output,
                verbose,
            },
            out,
            err,
        ),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &format!("interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
