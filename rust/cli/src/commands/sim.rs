//! `sim`: runs many independent sessions in parallel.
//!
//! Session `i` plays on its own table seeded with `base_seed + i`, so a run
//! is reproducible from its base seed regardless of how rayon schedules the
//! sessions. Results are reported in session order.

use crate::cli::SimArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::io_utils::create_output;
use crate::ui;
use cardsim_engine::record::SessionSummary;
use cardsim_engine::session::run_session;
use chrono::{SecondsFormat, Utc};
use rayon::prelude::*;
use std::io::Write;
use tracing::info;

/// Runs the configured sessions and prints one aggregate line.
///
/// With `--output`, each [`SessionSummary`] is also written as a JSON line
/// carrying an RFC 3339 `ts`. The file is replaced, not appended to.
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = apply_overrides(config::load()?, &args)?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random);
    let sessions = usize::try_from(cfg.sessions)
        .map_err(|_| CliError::InvalidInput(format!("too many sessions: {}", cfg.sessions)))?;

    let summaries = (0..sessions)
        .into_par_iter()
        .map(|i| {
            let id = i as u64;
            run_session(id, &cfg.session_config(base_seed.wrapping_add(id)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(path) = &args.output {
        if path.exists() {
            ui::display_warning(err, &format!("overwriting {}", path.display()))?;
        }
        let mut w = create_output(path)?;
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        for s in &summaries {
            let mut rec = serde_json::to_value(s).map_err(std::io::Error::other)?;
            rec["ts"] = serde_json::Value::String(ts.clone());
            writeln!(w, "{}", rec)?;
        }
        w.flush()?;
    }

    let totals = Totals::from(summaries.as_slice());
    info!(
        sessions = summaries.len(),
        base_seed,
        rounds = totals.rounds,
        net = totals.net,
        "simulation finished"
    );
    writeln!(
        out,
        "Simulated: {} sessions, {} rounds (seed {}, {})",
        summaries.len(),
        totals.rounds,
        base_seed,
        cfg.betting
    )?;
    writeln!(
        out,
        "Wins: {} Losses: {} Pushes: {} Net: {:+} Busted: {} Reshuffles: {}",
        totals.wins, totals.losses, totals.pushes, totals.net, totals.busted, totals.reshuffles
    )?;
    Ok(())
}

fn apply_overrides(mut cfg: Config, args: &SimArgs) -> Result<Config, CliError> {
    if let Some(v) = args.sessions {
        cfg.sessions = v;
    }
    if let Some(v) = args.rounds {
        cfg.rounds = v;
    }
    if let Some(v) = args.betting {
        cfg.betting = v;
    }
    if let Some(v) = args.stake {
        cfg.stake = v;
    }
    if let Some(v) = args.limit {
        cfg.limit = v;
    }
    if let Some(v) = args.decks {
        cfg.decks = v;
    }
    if let Some(v) = args.hit_threshold {
        cfg.hit_threshold = v;
    }
    if let Some(v) = args.dealer_rule {
        cfg.dealer_rule = v;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    config::validate(&cfg)?;
    Ok(cfg)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Totals {
    rounds: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    net: i64,
    /// Sessions that ended with an empty bankroll.
    busted: u64,
    reshuffles: u64,
}

impl From<&[SessionSummary]> for Totals {
    fn from(summaries: &[SessionSummary]) -> Self {
        summaries.iter().fold(Totals::default(), |mut t, s| {
            t.rounds += u64::from(s.rounds);
            t.wins += u64::from(s.wins);
            t.losses += u64::from(s.losses);
            t.pushes += u64::from(s.pushes);
            t.net += s.net();
            if s.final_stake == 0 {
                t.busted += 1;
            }
            t.reshuffles += u64::from(s.reshuffles);
            t
        })
    }
}
