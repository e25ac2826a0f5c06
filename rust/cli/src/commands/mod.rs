//! Command handlers, one module per subcommand.
//!
//! Each handler takes its output streams as `&mut dyn Write` and returns
//! `Result<(), CliError>`; [`crate::run`] turns the result into an exit code.

mod cfg;
mod eval;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};

use crate::config::{self, Config};
use crate::error::CliError;

/// Flag values that override the loaded configuration.
#[derive(Debug, Default, Clone)]
pub(crate) struct TableOverrides {
    pub players: Option<usize>,
    pub stack: Option<u32>,
    pub small_blind: Option<u32>,
    pub big_blind: Option<u32>,
    pub opponents: Option<String>,
    pub seed: Option<u64>,
    pub timeout: Option<u64>,
}

/// Loads configuration, applies the command-line flags on top and checks
/// the merged result.
pub(crate) fn resolve_config(overrides: TableOverrides) -> Result<Config, CliError> {
    let mut cfg = config::load()?;
    if let Some(v) = overrides.players {
        cfg.players = v;
    }
    if let Some(v) = overrides.stack {
        cfg.starting_stack = v;
    }
    if let Some(v) = overrides.small_blind {
        cfg.small_blind = v;
    }
    if let Some(v) = overrides.big_blind {
        cfg.big_blind = v;
    }
    if let Some(v) = overrides.opponents {
        cfg.opponents = v;
    }
    if overrides.seed.is_some() {
        cfg.seed = overrides.seed;
    }
    if let Some(v) = overrides.timeout {
        cfg.timeout_secs = v;
    }
    config::validate(&cfg)?;
    Ok(cfg)
}
