//! Card instances - a card value plus its current holder.
//!
//! `CardInstance` is the record a [`Table`](crate::Table) keeps for every
//! card it created. Suit and rank never change; the holder changes only
//! through `Table::transfer` and the operations built on it.
//!
//! ## Holders
//!
//! A holder is a closed variant:
//! - `Holder::None`: nobody has the card
//! - `Holder::Collection`: a tracked collection or deck on the same table
//! - `Holder::External`: an untracked owner, notified of nothing

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::entity::{CardId, CollectionId, ExternalId};

/// Who currently possesses a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holder {
    #[default]
    None,
    Collection(CollectionId),
    External(ExternalId),
}

impl Holder {
    /// The collection, if the holder takes part in gain/lose notifications.
    #[must_use]
    pub const fn collection(self) -> Option<CollectionId> {
        match self {
            Holder::Collection(id) => Some(id),
            Holder::None | Holder::External(_) => None,
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Holder::None)
    }

    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl From<CollectionId> for Holder {
    fn from(id: CollectionId) -> Self {
        Holder::Collection(id)
    }
}

impl From<ExternalId> for Holder {
    fn from(id: ExternalId) -> Self {
        Holder::External(id)
    }
}

impl std::fmt::Display for Holder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holder::None => f.write_str("nobody"),
            Holder::Collection(id) => write!(f, "{id}"),
            Holder::External(id) => write!(f, "{id}"),
        }
    }
}

/// A card on a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Identity of this physical card.
    pub id: CardId,

    /// Suit and rank.
    pub card: Card,

    holder: Holder,
}

impl CardInstance {
    /// A card that nobody holds yet.
    #[must_use]
    pub(crate) fn new(id: CardId, card: Card) -> Self {
        Self {
            id,
            card,
            holder: Holder::None,
        }
    }

    /// Current holder.
    #[must_use]
    pub fn holder(&self) -> Holder {
        self.holder
    }

    #[must_use]
    pub fn has_holder(&self) -> bool {
        self.holder.is_some()
    }

    /// Value equality on suit and rank; id and holder are ignored.
    #[must_use]
    pub fn is_equal_to(&self, other: &CardInstance) -> bool {
        self.card.is_equal_to(&other.card)
    }

    pub(crate) fn set_holder(&mut self, holder: Holder) {
        self.holder = holder;
    }
}
