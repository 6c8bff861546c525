//! The deck: construction, shuffling and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered stack of cards. The last card is the next one drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a complete, unshuffled 52-card deck.
    ///
    /// Cards are laid out suit by suit, each suit running from two to ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck from cards listed bottom to top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the deck in a random order drawn from `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cards.shuffle(rng);
        self
    }

    /// Removes the top card, returning it together with the rest of the deck.
    ///
    /// Returns `None` if the deck is empty.
    #[must_use]
    pub fn draw(mut self) -> Option<(Card, Self)> {
        let card = self.pop()?;
        Some((card, self))
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Splits off the top `count` cards, keeping their deck order.
    pub(crate) fn take_top(&mut self, count: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a complete, unshuffled 52-card deck.
#[must_use]
pub fn new_deck() -> Deck {
    Deck::new()
}

/// Shuffles `deck` with the thread-local random number generator.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle(deck: Deck) -> Deck {
    deck.shuffled(&mut rand::rng())
}

/// Draws the top card of `deck`.
///
/// Returns `None` if the deck is empty.
#[must_use]
pub fn draw_one(deck: Deck) -> Option<(Card, Deck)> {
    deck.draw()
}
