//! `deal`: deals one hand from a fresh table and shows it.

use crate::config;
use crate::error::CliError;
use cardsim_engine::table::{Table, TableConfig};
use std::io::Write;

/// Deals the dealer up-card and two player cards.
///
/// Deck count and burn come from the configuration unless `decks` is given.
/// Without a seed a random one is drawn and printed so the hand can be
/// reproduced.
///
/// ```text
/// Seed: 42
/// Dealer: 7♦
/// Player: A♠ 9♣
/// Total: 20 (soft)
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    decks: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let mut table = Table::new(TableConfig {
        num_decks: decks.unwrap_or(cfg.decks),
        burn: cfg.burn,
        seed: seed.or(cfg.seed),
    })?;
    let hand = table.deal_hand()?;

    let player = hand
        .cards()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(out, "Seed: {}", table.seed())?;
    writeln!(out, "Dealer: {}", hand.dealer_card())?;
    writeln!(out, "Player: {}", player)?;
    if hand.is_blackjack() {
        writeln!(out, "Total: {} (blackjack)", hand.total())?;
    } else if hand.is_soft() {
        writeln!(out, "Total: {} (soft)", hand.total())?;
    } else {
        writeln!(out, "Total: {}", hand.total())?;
    }
    Ok(())
}
