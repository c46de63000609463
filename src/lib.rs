//! # rust-cards
//!
//! Playing cards, collections of them, and the rules for moving cards
//! between collections.
//!
//! ## Design Principles
//!
//! 1. **One way to move a card**: a card changes hands only through
//!    [`Table::transfer`]. The old holder loses it, then the new holder is
//!    asked to gain it.
//!
//! 2. **Silent refusals**: collections enforce capacity and (optionally)
//!    uniqueness by refusing cards, never by panicking. Boolean operations
//!    report `false`; `transfer` and `try_add` say why.
//!
//! 3. **Injected randomness**: shuffles draw from an [`IndexSource`] the
//!    caller owns, so every shuffle can be replayed.
//!
//! ## Modules
//!
//! - `core`: ids, configuration, errors, index sources
//! - `cards`: card values, card instances, holders
//! - `collections`: the `CardStore` capability, collections, decks
//! - `table`: the mediator owning cards and collections
//!
//! ## Example
//!
//! ```
//! use rust_cards::{CollectionConfig, DeckKind, Holder, ShuffleRng, Table};
//!
//! let mut table = Table::default();
//! let deck = table.standard_deck(DeckKind::Standard54);
//! let hand = table.new_collection(CollectionConfig::new(5));
//!
//! let mut rng = ShuffleRng::new(7);
//! assert!(table.shuffle_times(deck, &mut rng, 3));
//! assert!(table.cut_from_top(deck, 10));
//!
//! for _ in 0..5 {
//!     table.deal_top_to(deck, Holder::Collection(hand));
//! }
//! assert_eq!(table.collection(hand).unwrap().len(), 5);
//! assert_eq!(table.collection(deck).unwrap().len(), 49);
//! ```

pub mod cards;
pub mod collections;
pub mod core;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    CardId, CollectionId, ExternalId,
    CollectionConfig, DeckKind, RejectedGain, TableConfig,
    GainRejection, TransferError,
    IndexSource, ShuffleRng, ScriptedIndices, FnIndices,
};

pub use crate::cards::{Card, CardInstance, Color, Holder, JokerKind, Rank, Suit};

pub use crate::collections::{CardCollection, CardHandle, CardStore, Deck};

pub use crate::table::Table;
