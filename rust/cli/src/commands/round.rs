//! `round`: plays a single session and prints every round snapshot.

use crate::config;
use crate::error::CliError;
use cardsim_engine::betting::BettingKind;
use cardsim_engine::session::run_session_with_rounds;
use std::io::Write;

/// Writes one [`RoundRecord`](cardsim_engine::record::RoundRecord) JSON
/// object per line, in play order.
pub fn handle_round_command(
    seed: Option<u64>,
    betting: Option<BettingKind>,
    rounds: Option<u32>,
    limit: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(b) = betting {
        cfg.betting = b;
    }
    if let Some(r) = rounds {
        cfg.rounds = r;
    }
    if let Some(l) = limit {
        cfg.limit = l;
    }
    config::validate(&cfg)?;

    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let (_, records) = run_session_with_rounds(0, &cfg.session_config(seed))?;
    for rec in &records {
        let line = serde_json::to_string(rec).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsim_engine::record::RoundRecord;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_round_prints_parsable_records() {
        let mut out = Vec::new();
        handle_round_command(
            Some(9),
            Some(BettingKind::Martingale),
            Some(12),
            None,
            &mut out,
        )
        .unwrap();

        let records: Vec<RoundRecord> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert!(!records.is_empty());
        assert!(records.len() <= 12);
        assert_eq!(records[0].bet_amount, 1);
    }

    #[test]
    #[serial]
    fn test_round_rejects_zero_rounds() {
        let mut out = Vec::new();
        let err = handle_round_command(Some(1), None, Some(0), None, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(out.is_empty());
    }
}
