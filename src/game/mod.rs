//! Game state and setup.

use log::{debug, warn};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{BLACKJACK, Hand};
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use actions::{player_hits, player_stands};
pub use state::Turn;

/// A snapshot of a single-player round.
///
/// Transitions never modify a state in place: [`player_hits`] and
/// [`player_stands`] borrow the current state and return the next one, so a
/// rejected action leaves the caller's copy untouched. Scores are always
/// derived from their hands and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    player_hand: Hand,
    dealer_hand: Hand,
    player_score: u16,
    dealer_score: u16,
    card_deck: Deck,
    turn: Turn,
    options: GameOptions,
}

impl GameState {
    /// Builds a state from explicit hands and deck.
    ///
    /// Scores are computed from the hands. No check is made that the cards
    /// form a complete deck, which makes this useful for staging positions.
    #[must_use]
    pub fn from_parts(
        player_hand: Hand,
        dealer_hand: Hand,
        card_deck: Deck,
        turn: Turn,
        options: GameOptions,
    ) -> Self {
        Self {
            player_score: player_hand.value(),
            dealer_score: dealer_hand.value(),
            player_hand,
            dealer_hand,
            card_deck,
            turn,
            options,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn player_score(&self) -> u16 {
        self.player_score
    }

    /// Returns the dealer's score.
    #[must_use]
    pub const fn dealer_score(&self) -> u16 {
        self.dealer_score
    }

    /// Returns the cards left to draw.
    #[must_use]
    pub const fn card_deck(&self) -> &Deck {
        &self.card_deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.card_deck.len()
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the table rules this round is played under.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns whether hit and stand should be offered to the player.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.turn == Turn::PlayerTurn && self.player_score < BLACKJACK
    }

    /// Returns whether the round is over and a result can be shown.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.player_score >= BLACKJACK || self.turn == Turn::DealerTurn
    }

    /// Returns the dealer cards the player may see.
    ///
    /// During the player's turn the dealer's first card is face down.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        match (self.turn, cards.split_first()) {
            (Turn::PlayerTurn, Some((_, rest))) => rest,
            _ => cards,
        }
    }

    /// Draws the top card of the deck.
    fn draw(&mut self) -> Result<Card, ActionError> {
        self.card_deck.pop().ok_or_else(|| {
            warn!("draw from an empty deck");
            ActionError::NoCards
        })
    }
}

/// Deals a new round from a deck shuffled with `rng`.
///
/// The player takes the top two cards and the dealer the two below them.
#[must_use]
pub fn setup_game_with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> GameState {
    let mut card_deck = Deck::new().shuffled(rng);
    let player_hand = Hand::from_cards(card_deck.take_top(2));
    let dealer_hand = Hand::from_cards(card_deck.take_top(2));

    debug!(
        "dealt player [{player_hand}] dealer [{dealer_hand}], {} cards left",
        card_deck.len()
    );

    GameState::from_parts(player_hand, dealer_hand, card_deck, Turn::PlayerTurn, options)
}

/// Deals a new round with a deterministic shuffle.
///
/// # Example
///
/// ```
/// use bjcore::{GameOptions, setup_game_seeded};
///
/// let a = setup_game_seeded(GameOptions::default(), 42);
/// let b = setup_game_seeded(GameOptions::default(), 42);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn setup_game_seeded(options: GameOptions, seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    setup_game_with_rng(options, &mut rng)
}

/// Deals a new round with default rules, shuffling with the thread-local
/// random number generator.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn setup_game() -> GameState {
    setup_game_with_rng(GameOptions::default(), &mut rand::rng())
}
