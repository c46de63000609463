//! Core types: identifiers, configuration, errors, and random index sources.
//!
//! Everything here is independent of how cards and collections are stored.

pub mod entity;
pub mod config;
pub mod error;
pub mod rng;

pub use entity::{CardId, CollectionId, ExternalId};
pub use config::{CollectionConfig, DeckKind, RejectedGain, TableConfig};
pub use error::{GainRejection, TransferError};
pub use rng::{FnIndices, IndexSource, ScriptedIndices, ShuffleRng, ShuffleRngState};
