use tracing::trace;

use crate::betting::BettingStrategy;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::record::{Outcome, RoundRecord};
use crate::strategy::{DealerRule, GameStrategy};
use crate::table::Table;

/// Default bankroll, in betting units, a player sits down with.
pub const STARTING_STAKE: u32 = 50;

/// Default number of rounds a player plays before leaving the table.
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Default table maximum, in betting units.
pub const DEFAULT_TABLE_LIMIT: u32 = 100;

/// A seat at the table: a bankroll plus the two policies that drive it.
///
/// The betting strategy decides how much to stake each round and is told
/// about wins and losses; the game strategy decides when to hit. Pushes
/// return the stake and notify neither. An optional table limit caps every
/// wager, whatever the progression asks for.
pub struct Player {
    betting: Box<dyn BettingStrategy>,
    game: Box<dyn GameStrategy>,
    limit: Option<u32>,
    stake: u32,
    max_stake: u32,
    max_rounds: u32,
    rounds: u32,
    wins: u32,
    losses: u32,
    pushes: u32,
}

impl Player {
    pub fn new(
        betting: Box<dyn BettingStrategy>,
        game: Box<dyn GameStrategy>,
        stake: u32,
        max_rounds: u32,
    ) -> Self {
        Self {
            betting,
            game,
            limit: None,
            stake,
            max_stake: stake,
            max_rounds,
            rounds: 0,
            wins: 0,
            losses: 0,
            pushes: 0,
        }
    }

    /// Caps every wager at `limit` units.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn stake(&self) -> u32 {
        self.stake
    }
    pub fn max_stake(&self) -> u32 {
        self.max_stake
    }
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn pushes(&self) -> u32 {
        self.pushes
    }

    pub fn betting(&self) -> &dyn BettingStrategy {
        self.betting.as_ref()
    }

    /// The stake the next round would place: the strategy's bet, clamped
    /// to the table limit.
    pub fn next_wager(&self) -> u32 {
        let bet = self.betting.bet();
        self.limit.map_or(bet, |limit| bet.min(limit))
    }

    /// Rounds remain and the bankroll covers the next stake.
    pub fn can_continue(&self) -> bool {
        self.rounds < self.max_rounds && self.stake > 0 && self.stake >= self.next_wager()
    }

    /// Plays one round against the dealer and settles the stake.
    ///
    /// The player draws first; a bust loses immediately without the dealer
    /// drawing. Otherwise the dealer plays out their up-card and hole card
    /// under `dealer_rule` and the higher total wins.
    pub fn play_round(
        &mut self,
        table: &mut Table,
        dealer_rule: DealerRule,
    ) -> Result<RoundRecord, GameError> {
        let requested = table.place_bet(self.betting.as_ref());
        let bet = self.limit.map_or(requested, |limit| requested.min(limit));
        let mut hand = table.deal_hand()?;
        let hole_card = table.deal_card()?;

        while !hand.is_bust() && self.game.should_hit(&hand) {
            hand.add_card(table.deal_card()?);
        }

        let (outcome, dealer_total) = if hand.is_bust() {
            (Outcome::Loss, None)
        } else {
            let up = hand.dealer_card();
            let mut dealer = Hand::new(up, [up, hole_card]);
            while dealer_rule.should_draw(dealer.total(), dealer.is_soft()) {
                dealer.add_card(table.deal_card()?);
            }
            (resolve(&hand, &dealer), Some(dealer.total()))
        };

        self.settle(bet, outcome);
        trace!(
            round = self.rounds,
            bet,
            total = hand.total(),
            ?dealer_total,
            ?outcome,
            stake = self.stake,
            "round settled"
        );

        Ok(RoundRecord {
            dealer_card: hand.dealer_card(),
            player_cards: hand.cards().to_vec(),
            final_total: hand.total(),
            dealer_total,
            bet_amount: bet,
            outcome,
        })
    }

    fn settle(&mut self, bet: u32, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Win => {
                self.stake = self.stake.saturating_add(bet);
                self.max_stake = self.max_stake.max(self.stake);
                self.wins += 1;
                self.betting.record_win();
            }
            Outcome::Loss => {
                self.stake = self.stake.saturating_sub(bet);
                self.losses += 1;
                self.betting.record_loss();
            }
            Outcome::Push => {
                self.pushes += 1;
            }
        }
    }
}

fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    if dealer.is_bust() || player > dealer {
        Outcome::Win
    } else if player < dealer {
        Outcome::Loss
    } else {
        Outcome::Push
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::betting::{Flat, Martingale};
    use crate::cards::{make_card, Suit};
    use crate::strategy::HitThreshold;
    use crate::table::TableConfig;

    fn hand(ranks: &[u8]) -> Hand {
        let up = make_card(9, Suit::Club).unwrap();
        Hand::new(up, ranks.iter().map(|&r| make_card(r, Suit::Spade).unwrap()))
    }

    #[test]
    fn resolve_compares_totals_and_dealer_bust() {
        assert_eq!(resolve(&hand(&[10, 9]), &hand(&[10, 8])), Outcome::Win);
        assert_eq!(resolve(&hand(&[10, 7]), &hand(&[10, 8])), Outcome::Loss);
        assert_eq!(resolve(&hand(&[10, 8]), &hand(&[9, 9])), Outcome::Push);
        assert_eq!(
            resolve(&hand(&[10, 2]), &hand(&[10, 6, 10])),
            Outcome::Win
        );
    }

    #[test]
    fn settle_moves_bankroll_and_notifies_strategy() {
        let mut p = Player::new(
            Box::new(Martingale::new()),
            Box::new(HitThreshold::default()),
            10,
            5,
        );
        p.settle(1, Outcome::Loss);
        assert_eq!(p.stake(), 9);
        assert_eq!(p.betting().bet(), 2);
        p.settle(2, Outcome::Push);
        assert_eq!(p.stake(), 9);
        assert_eq!(p.betting().bet(), 2);
        p.settle(2, Outcome::Win);
        assert_eq!(p.stake(), 11);
        assert_eq!(p.max_stake(), 11);
        assert_eq!(p.betting().bet(), 1);
        assert_eq!((p.wins(), p.losses(), p.pushes()), (1, 1, 1));
        assert_eq!(p.rounds(), 3);
    }

    #[test]
    fn cannot_continue_when_stake_does_not_cover_bet() {
        let mut p = Player::new(
            Box::new(Martingale::new()),
            Box::new(HitThreshold::default()),
            3,
            100,
        );
        p.settle(1, Outcome::Loss);
        assert!(p.can_continue());
        p.settle(2, Outcome::Loss);
        // stake 0 and the next bet would be 4
        assert!(!p.can_continue());
    }

    #[test]
    fn martingale_losing_streak_is_capped_by_limit() {
        let mut p = Player::new(
            Box::new(Martingale::new()),
            Box::new(HitThreshold::default()),
            1_000,
            100,
        )
        .with_limit(Some(8));
        let mut wagers = Vec::new();
        for _ in 0..7 {
            let bet = p.next_wager();
            wagers.push(bet);
            p.settle(bet, Outcome::Loss);
        }
        assert_eq!(wagers, vec![1, 2, 4, 8, 8, 8, 8]);
        // the progression keeps doubling underneath the cap
        assert_eq!(p.betting().bet(), 128);
        assert_eq!(p.stake(), 1_000 - 39);
        assert!(p.can_continue());
    }

    #[test]
    fn limit_applies_to_played_rounds() {
        let mut table = Table::new(TableConfig {
            seed: Some(21),
            ..TableConfig::default()
        })
        .unwrap();
        let mut p = Player::new(
            Box::new(Martingale::new()),
            Box::new(HitThreshold::default()),
            1_000,
            200,
        )
        .with_limit(Some(4));
        assert_eq!(p.limit(), Some(4));
        while p.can_continue() {
            let rec = p.play_round(&mut table, DealerRule::Hit17).unwrap();
            assert!(rec.bet_amount <= 4);
        }
        assert_eq!(p.rounds(), 200);
    }

    #[test]
    fn cannot_continue_past_max_rounds() {
        let mut p = Player::new(Box::new(Flat), Box::new(HitThreshold::default()), 10, 2);
        p.settle(1, Outcome::Push);
        p.settle(1, Outcome::Push);
        assert!(!p.can_continue());
    }

    #[test]
    fn played_round_is_consistent_with_record() {
        let mut table = Table::new(TableConfig {
            seed: Some(5),
            ..TableConfig::default()
        })
        .unwrap();
        let mut p = Player::new(Box::new(Flat), Box::new(HitThreshold::default()), 10, 10);
        let rec = p.play_round(&mut table, DealerRule::Hit17).unwrap();

        assert!(rec.player_cards.len() >= 2);
        assert_eq!(rec.bet_amount, 1);
        assert_eq!(rec.final_total, crate::hand::score(&rec.player_cards));
        // the baseline keeps hitting until it passes 17
        assert!(rec.final_total > 17);
        match rec.outcome {
            Outcome::Win => assert_eq!(p.stake(), 11),
            Outcome::Loss => assert_eq!(p.stake(), 9),
            Outcome::Push => assert_eq!(p.stake(), 10),
        }
        if rec.final_total > 21 {
            assert_eq!(rec.outcome, Outcome::Loss);
            assert_eq!(rec.dealer_total, None);
        } else {
            assert!(rec.dealer_total.unwrap() >= 17);
        }
    }
}
