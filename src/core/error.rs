//! Error types for card transfers.

use thiserror::Error;

use super::entity::{CardId, CollectionId};

/// Why a store refused to gain a card.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GainRejection {
    #[error("a value-equal card is already stored")]
    Duplicate,
    #[error("the store is at capacity")]
    Full,
}

/// A failed holder change.
///
/// The boolean operations (`add`, `deal_top_to`, ...) collapse these into
/// `false`; `Table::transfer` and `Table::try_add` return them as is.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("unknown card {0}")]
    UnknownCard(CardId),
    #[error("unknown collection {0}")]
    UnknownCollection(CollectionId),
    #[error("{collection} already holds a card equal to {card}")]
    Duplicate { card: CardId, collection: CollectionId },
    #[error("{collection} is full ({max_size} cards), cannot take {card}")]
    Full {
        card: CardId,
        collection: CollectionId,
        max_size: usize,
    },
}

impl TransferError {
    /// Build the error for a store's refusal.
    #[must_use]
    pub fn rejected(
        rejection: GainRejection,
        card: CardId,
        collection: CollectionId,
        max_size: usize,
    ) -> Self {
        match rejection {
            GainRejection::Duplicate => TransferError::Duplicate { card, collection },
            GainRejection::Full => TransferError::Full {
                card,
                collection,
                max_size,
            },
        }
    }

    /// The store-level reason, if this was a refusal rather than a bad id.
    #[must_use]
    pub fn rejection(&self) -> Option<GainRejection> {
        match self {
            TransferError::Duplicate { .. } => Some(GainRejection::Duplicate),
            TransferError::Full { .. } => Some(GainRejection::Full),
            TransferError::UnknownCard(_) | TransferError::UnknownCollection(_) => None,
        }
    }
}
