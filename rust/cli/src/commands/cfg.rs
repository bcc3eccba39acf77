//! `cfg`: prints the resolved configuration with the source of every value.
//!
//! ```json
//! {
//!   "decks": { "value": 1, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Loads the configuration and writes it as pretty JSON.
///
/// A configuration that fails to load or validate is returned as
/// [`CliError::Config`] for the caller to report; nothing is written.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "decks": { "value": config.decks, "source": sources.decks },
        "burn": { "value": config.burn, "source": sources.burn },
        "stake": { "value": config.stake, "source": sources.stake },
        "limit": { "value": config.limit, "source": sources.limit },
        "betting": { "value": config.betting, "source": sources.betting },
        "hit_threshold": { "value": config.hit_threshold, "source": sources.hit_threshold },
        "dealer_rule": { "value": config.dealer_rule, "source": sources.dealer_rule },
        "rounds": { "value": config.rounds, "source": sources.rounds },
        "sessions": { "value": config.sessions, "source": sources.sessions },
        "seed": { "value": config.seed, "source": sources.seed },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
