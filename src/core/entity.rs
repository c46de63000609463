//! Identifiers for cards, collections and untracked holders.
//!
//! Every card created on a [`Table`](crate::Table) gets a `CardId`, every
//! collection (plain or deck) gets a `CollectionId`. Both are allocated
//! sequentially by the table and double as indices into its storage.
//!
//! `ExternalId` is chosen by the caller. It names a holder the table does
//! not track, such as "face down in front of player 2".
//!
//! ```
//! use rust_cards::core::{CardId, CollectionId, ExternalId};
//!
//! assert_eq!(CardId(3).index(), 3);
//! assert_eq!(format!("{}", CollectionId(1)), "Collection(1)");
//! assert_eq!(format!("{}", ExternalId(7)), "External(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Identity of a single physical card.
///
/// Two cards can be value-equal (same suit and rank) while having
/// different ids. Removal from a collection is always by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the table's card storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identity of a collection or deck owned by a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionId(pub u32);

impl CollectionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the table's collection storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Collection({})", self.0)
    }
}

/// Caller-assigned tag for a holder that receives no notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalId(pub u32);

impl ExternalId {
    /// Create a new external holder tag.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExternalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "External({})", self.0)
    }
}
