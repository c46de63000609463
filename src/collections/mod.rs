//! Card containers.
//!
//! ## Key Types
//!
//! - `CardStore`: the gain/lose capability a holder implements
//! - `CardHandle`: a card's id and value, as stored
//! - `CardCollection`: ordered container with capacity and duplicate policy
//! - `Deck`: a collection with a top, plus cutting and shuffling

pub mod collection;
pub mod deck;
pub mod store;

pub use collection::CardCollection;
pub use deck::Deck;
pub use store::{CardHandle, CardStore};
