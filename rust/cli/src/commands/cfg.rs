//! Configuration command handler.
//!
//! Prints every setting with the layer it came from:
//!
//! ```json
//! {
//!   "players": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "blinds": {
            "value": format!("{}/{}", config.small_blind, config.big_blind),
            "source": sources.blinds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "opponents": {
            "value": config.opponents,
            "source": sources.opponents,
        },
        "timeout_secs": {
            "value": config.timeout_secs,
            "source": sources.timeout_secs,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
