//! Table rule options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// The dealer draws while their score is below this value.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Returns whether the dealer must draw on a hand with this score.
    #[must_use]
    pub fn dealer_must_hit(&self, score: u16, is_soft: bool) -> bool {
        let stands_on = u16::from(self.dealer_stands_on);
        if score < stands_on {
            return true;
        }
        score == stands_on && is_soft && !self.stand_on_soft_17
    }
}
