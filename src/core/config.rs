//! Configuration types.
//!
//! - `CollectionConfig`: capacity and duplicate policy of a collection
//! - `DeckKind`: the two standard deck layouts
//! - `TableConfig`: table-wide behaviour, currently what happens when a
//!   collection refuses a card
//!
//! All configs are plain data with builder methods and serde derives.

use serde::{Deserialize, Serialize};

/// Configuration for a single collection or deck.
///
/// ```
/// use rust_cards::core::CollectionConfig;
///
/// let hand = CollectionConfig::new(5).allow_duplicates();
/// assert_eq!(hand.max_size, 5);
/// assert!(hand.allow_duplicates);
///
/// let default = CollectionConfig::default();
/// assert_eq!(default.max_size, 54);
/// assert!(!default.allow_duplicates);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Maximum number of cards the collection will hold.
    pub max_size: usize,

    /// Whether value-equal cards may coexist in the collection.
    pub allow_duplicates: bool,
}

impl CollectionConfig {
    /// A collection of the given capacity that rejects duplicates.
    #[must_use]
    pub const fn new(max_size: usize) -> Self {
        Self {
            max_size,
            allow_duplicates: false,
        }
    }

    /// Permit value-equal cards.
    #[must_use]
    pub const fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Change the capacity.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self::new(DeckKind::Standard54.size())
    }
}

/// Standard deck layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// Four suits, Two through Ace.
    Standard52,
    /// The 52 plus the Big and Little jokers.
    Standard54,
}

impl DeckKind {
    /// Number of cards in a full deck of this kind.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            DeckKind::Standard52 => 52,
            DeckKind::Standard54 => 54,
        }
    }

    /// Whether the jokers are included.
    #[must_use]
    pub const fn has_jokers(self) -> bool {
        matches!(self, DeckKind::Standard54)
    }

    /// Collection config for a deck of this kind: exact capacity, no
    /// duplicates.
    #[must_use]
    pub const fn config(self) -> CollectionConfig {
        CollectionConfig::new(self.size())
    }
}

/// What a transfer does when the destination collection refuses the card.
///
/// The old holder has already been notified of the loss by then, so the
/// card has to end up somewhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectedGain {
    /// Put the card back where it was, at its previous position, and keep
    /// its previous holder.
    #[default]
    Restore,
    /// Leave the card with no holder.
    Release,
    /// Record the refusing collection as holder even though it does not
    /// store the card.
    Retain,
}

/// Table-wide configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Outcome of a refused gain.
    pub rejected_gain: RejectedGain,
}

impl TableConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the refused-gain policy.
    #[must_use]
    pub fn with_rejected_gain(mut self, policy: RejectedGain) -> Self {
        self.rejected_gain = policy;
        self
    }
}
