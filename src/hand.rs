//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score a hand can have without busting.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.rank.points());
    }

    // Each ace may be promoted from 1 to 11 as long as the hand stays at or under 21.
    let mut soft = false;
    for _ in 0..aces {
        if value + 10 <= BLACKJACK {
            value += 10;
            soft = true;
        }
    }

    (value, soft)
}

/// Calculates the best score for a set of cards.
///
/// Aces count as 11 where that keeps the total at or under 21, and as 1
/// otherwise. The result is not capped, so a bust hand scores above 21.
///
/// ```
/// use bjcore::{Card, Rank, Suit, calculate_hand_score};
///
/// let hand = [Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Spades, Rank::Ace)];
/// assert_eq!(calculate_hand_score(&hand), 12);
/// ```
#[must_use]
pub fn calculate_hand_score(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// A hand of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`, in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        calculate_hand_score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
