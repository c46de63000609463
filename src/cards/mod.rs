//! Card system: values and instances.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Color`, `JokerKind`: card vocabulary
//! - `Card`: immutable suit/rank value with joker normalization
//! - `CardInstance`: a card on a table, with its current `Holder`
//! - `Holder`: none, a tracked collection, or an external owner

pub mod card;
pub mod instance;

pub use card::{Card, Color, JokerKind, Rank, Suit};
pub use instance::{CardInstance, Holder};
