use log::{debug, warn};

use crate::error::ActionError;

use super::{GameState, Turn};

impl GameState {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.turn != Turn::PlayerTurn {
            warn!("player action rejected during {:?}", self.turn);
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the state with one more card in the player's hand. Busting does
    /// not end the turn here; callers check [`GameState::can_act`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        let card = next.draw()?;
        next.player_hand.add_card(card);
        next.player_score = next.player_hand.value();

        debug!(
            "player hits {card}, score {}, {} cards left",
            next.player_score,
            next.card_deck.len()
        );

        Ok(next)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Hands the turn to the dealer, who then plays out their hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// while the dealer must draw.
    pub fn stand(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        debug!("player stands on {}", self.player_score);

        let mut next = self.clone();
        next.turn = Turn::DealerTurn;
        next.dealer_play()?;

        Ok(next)
    }
}

/// Draws a card into the player's hand. See [`GameState::hit`].
///
/// # Errors
///
/// Returns an error if it is not the player's turn or the deck is empty.
pub fn player_hits(state: &GameState) -> Result<GameState, ActionError> {
    state.hit()
}

/// Ends the player's turn and plays the dealer's hand. See [`GameState::stand`].
///
/// # Errors
///
/// Returns an error if it is not the player's turn or the deck runs out while
/// the dealer must draw.
pub fn player_stands(state: &GameState) -> Result<GameState, ActionError> {
    state.stand()
}
