//! Turn types.

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer has played out their hand. No further actions are accepted.
    DealerTurn,
}
