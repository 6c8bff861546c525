use log::{debug, trace};

use crate::error::ActionError;

use super::GameState;

impl GameState {
    /// Dealer plays their hand according to the table rules.
    ///
    /// The dealer draws until reaching `dealer_stands_on`. If
    /// `stand_on_soft_17` is false, a soft total at that mark draws as well.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        while self
            .options
            .dealer_must_hit(self.dealer_score, self.dealer_hand.is_soft())
        {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            self.dealer_score = self.dealer_hand.value();
            trace!("dealer draws {card}, score {}", self.dealer_score);
        }

        debug!(
            "dealer stands with [{}] on {}",
            self.dealer_hand, self.dealer_score
        );

        Ok(())
    }
}
