//! The capability a holder needs to take part in card transfers.

use crate::cards::Card;
use crate::core::entity::CardId;
use crate::core::error::GainRejection;

/// A card as seen by a store: identity plus value.
///
/// Stores compare `card` for duplicate checks and `id` for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardHandle {
    pub id: CardId,
    pub card: Card,
}

impl CardHandle {
    #[must_use]
    pub const fn new(id: CardId, card: Card) -> Self {
        Self { id, card }
    }
}

/// Anything that can store cards.
///
/// The table calls these while changing a card's holder: `lose_card` on the
/// old holder first, then `gain_card` on the new one. Clients do not call
/// them directly on table-owned collections.
pub trait CardStore {
    /// Take ownership of a card. A refusal leaves the store unchanged.
    fn gain_card(&mut self, card: CardHandle) -> Result<(), GainRejection>;

    /// Give up a card. Returns the index it was stored at, or `None` if the
    /// store did not have it.
    fn lose_card(&mut self, id: CardId) -> Option<usize>;
}
