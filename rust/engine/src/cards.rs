use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four suits of a standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs (♣)
    Club,
    /// Diamonds (♦)
    Diamond,
    /// Hearts (♥)
    Heart,
    /// Spades (♠)
    Spade,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

pub const ACE: u8 = 1;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

/// A single playing card with its two scoring values.
///
/// `hard` is the value used in the low total and `soft` the value used in the
/// high total. They differ only for an Ace (`hard = 1`, `soft = 11`), so
/// `soft >= hard` always holds. Cards are only built through [`make_card`],
/// which is why the fields are private.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr", into = "CardRepr")]
pub struct Card {
    rank: u8,
    suit: Suit,
    hard: u32,
    soft: u32,
}

impl Card {
    /// Rank ordinal: 1 = Ace, 2..=10 numeric, 11 = Jack, 12 = Queen, 13 = King.
    pub fn rank(&self) -> u8 {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn hard(&self) -> u32 {
        self.hard
    }
    pub fn soft(&self) -> u32 {
        self.soft
    }

    /// Points gained when this card is counted high instead of low.
    pub fn soft_delta(&self) -> u32 {
        self.soft - self.hard
    }

    pub fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    pub fn is_face(&self) -> bool {
        (JACK..=KING).contains(&self.rank)
    }

    /// Whether a dealer showing this card offers insurance.
    pub fn can_insure(&self) -> bool {
        self.is_ace()
    }

    fn rank_label(&self) -> String {
        match self.rank {
            ACE => "A".to_string(),
            JACK => "J".to_string(),
            QUEEN => "Q".to_string(),
            KING => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// Builds a card, deriving its hard and soft values from the rank.
///
/// # Errors
///
/// Returns [`GameError::InvalidRank`] for any rank outside `1..=13`.
///
/// # Examples
///
/// ```
/// use cardsim_engine::cards::{make_card, Suit};
///
/// let ace = make_card(1, Suit::Spade).unwrap();
/// assert_eq!((ace.hard(), ace.soft()), (1, 11));
///
/// let king = make_card(13, Suit::Heart).unwrap();
/// assert_eq!((king.hard(), king.soft()), (10, 10));
///
/// assert!(make_card(14, Suit::Club).is_err());
/// ```
pub fn make_card(rank: u8, suit: Suit) -> Result<Card, GameError> {
    let (hard, soft) = match rank {
        ACE => (1, 11),
        2..=10 => (rank as u32, rank as u32),
        JACK..=KING => (10, 10),
        _ => return Err(GameError::InvalidRank { rank }),
    };
    Ok(Card {
        rank,
        suit,
        hard,
        soft,
    })
}

/// Wire form of a [`Card`]; the point values are rebuilt by the factory.
#[derive(Serialize, Deserialize)]
struct CardRepr {
    rank: u8,
    suit: Suit,
}

impl TryFrom<CardRepr> for Card {
    type Error = GameError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        make_card(repr.rank, repr.suit)
    }
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        CardRepr {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
}

pub fn all_ranks() -> std::ops::RangeInclusive<u8> {
    ACE..=KING
}

/// The 52 cards of one standard deck, ranks outer and suits inner.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for r in all_ranks() {
        for s in all_suits() {
            // every rank in all_ranks() is valid
            if let Ok(c) = make_card(r, s) {
                v.push(c);
            }
        }
    }
    v
}
