use tracing::debug;

use crate::betting::{create_betting, BettingKind};
use crate::errors::GameError;
use crate::player::{Player, DEFAULT_MAX_ROUNDS, DEFAULT_TABLE_LIMIT, STARTING_STAKE};
use crate::record::{RoundRecord, SessionSummary};
use crate::strategy::{DealerRule, HitThreshold, DEFAULT_HIT_THRESHOLD};
use crate::table::{Table, TableConfig};

/// Everything needed to run one player's session from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub table: TableConfig,
    pub betting: BettingKind,
    pub hit_threshold: u32,
    pub dealer_rule: DealerRule,
    /// Initial bankroll in betting units
    pub stake: u32,
    pub max_rounds: u32,
    /// Table maximum per wager; `None` lets the progression run unbounded
    pub limit: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            betting: BettingKind::Flat,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            dealer_rule: DealerRule::Hit17,
            stake: STARTING_STAKE,
            max_rounds: DEFAULT_MAX_ROUNDS,
            limit: Some(DEFAULT_TABLE_LIMIT),
        }
    }
}

/// Plays a session until the player runs out of rounds or money.
///
/// # Examples
///
/// ```
/// use cardsim_engine::session::{run_session, SessionConfig};
/// use cardsim_engine::table::TableConfig;
///
/// let config = SessionConfig {
///     table: TableConfig { seed: Some(42), ..TableConfig::default() },
///     ..SessionConfig::default()
/// };
/// let summary = run_session(0, &config).unwrap();
/// assert_eq!(summary.rounds, summary.wins + summary.losses + summary.pushes);
/// assert_eq!(summary.seed, 42);
/// ```
pub fn run_session(id: u64, config: &SessionConfig) -> Result<SessionSummary, GameError> {
    play(id, config, |_| {})
}

/// Like [`run_session`], also returning every round snapshot in order.
pub fn run_session_with_rounds(
    id: u64,
    config: &SessionConfig,
) -> Result<(SessionSummary, Vec<RoundRecord>), GameError> {
    let mut rounds = Vec::new();
    let summary = play(id, config, |r| rounds.push(r))?;
    Ok((summary, rounds))
}

fn play(
    id: u64,
    config: &SessionConfig,
    mut on_round: impl FnMut(RoundRecord),
) -> Result<SessionSummary, GameError> {
    let mut table = Table::new(config.table)?;
    let mut player = Player::new(
        create_betting(config.betting),
        Box::new(HitThreshold::new(config.hit_threshold)),
        config.stake,
        config.max_rounds,
    )
    .with_limit(config.limit);

    while player.can_continue() {
        on_round(player.play_round(&mut table, config.dealer_rule)?);
    }

    let summary = SessionSummary {
        session: id,
        seed: table.seed(),
        rounds: player.rounds(),
        wins: player.wins(),
        losses: player.losses(),
        pushes: player.pushes(),
        initial_stake: config.stake,
        final_stake: player.stake(),
        max_stake: player.max_stake(),
        reshuffles: table.reshuffles(),
    };
    debug!(
        session = id,
        rounds = summary.rounds,
        final_stake = summary.final_stake,
        "session finished"
    );
    Ok(summary)
}
