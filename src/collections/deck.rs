//! Decks: collections with a top and a bottom.
//!
//! Index 0 is the top card, the last index is the bottom. A deck stores
//! nothing beyond its collection; it adds the positional algorithms:
//!
//! - `cut_from_top`: move the top `n` cards under the rest
//! - `ideal_shuffle`: a perfect out-shuffle
//! - `shuffle`: a full-range swap shuffle driven by an [`IndexSource`]
//!
//! Reordering and dealing both go through [`Table`](crate::Table), which
//! owns every deck.

use std::ops::Deref;

use tracing::debug;

use super::collection::CardCollection;
use super::store::CardHandle;
use crate::core::config::CollectionConfig;
use crate::core::rng::IndexSource;

/// A collection read top (index 0) to bottom.
///
/// Decks are created and reordered through [`Table`](crate::Table), which
/// keeps every card's holder in step with the deck contents:
///
/// ```compile_fail
/// use rust_cards::{CollectionConfig, Deck};
///
/// let deck = Deck::new(CollectionConfig::new(52));
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    collection: CardCollection,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub(crate) fn new(config: CollectionConfig) -> Self {
        Self {
            collection: CardCollection::new(config),
        }
    }

    /// The underlying collection.
    #[must_use]
    pub fn collection(&self) -> &CardCollection {
        &self.collection
    }

    pub(crate) fn collection_mut(&mut self) -> &mut CardCollection {
        &mut self.collection
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&CardHandle> {
        self.collection.cards().first()
    }

    /// Bottom card, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<&CardHandle> {
        self.collection.cards().last()
    }

    /// Move the top `n` cards, in order, to the bottom.
    ///
    /// Valid only when `n < len`: cutting the whole deck is refused and
    /// returns `false`. Afterwards the card that was at index `n` is on top.
    pub(crate) fn cut_from_top(&mut self, n: usize) -> bool {
        let cards = self.collection.sequence_mut();
        if n >= cards.len() {
            return false;
        }
        cards.rotate_left(n);
        debug!(deck_size = cards.len(), n, "cut deck");
        true
    }

    /// One perfect out-shuffle pass.
    ///
    /// The top `len / 2` cards form the top half, the rest the bottom half.
    /// Cards are dealt back alternately, top half first. For an odd length
    /// the bottom half has one more card, which lands last.
    pub(crate) fn ideal_shuffle(&mut self) {
        self.ideal_shuffle_times(1);
    }

    /// `times` consecutive out-shuffle passes.
    pub(crate) fn ideal_shuffle_times(&mut self, times: usize) {
        let cards = self.collection.sequence_mut();
        for _ in 0..times {
            out_shuffle(cards);
        }
        debug!(deck_size = cards.len(), passes = times, "ideal shuffle");
    }

    /// One full-range swap shuffle pass.
    ///
    /// Every position `i`, in order, is swapped with a position drawn from
    /// the whole deck, not just `i..len`. This is not Fisher-Yates and is
    /// biased; the exact swap trace depends only on `source`.
    pub(crate) fn shuffle<S: IndexSource + ?Sized>(&mut self, source: &mut S) {
        self.shuffle_times(source, 1);
    }

    /// `times` consecutive swap shuffle passes.
    pub(crate) fn shuffle_times<S: IndexSource + ?Sized>(&mut self, source: &mut S, times: usize) {
        let cards = self.collection.sequence_mut();
        for _ in 0..times {
            full_range_swap(cards, source);
        }
        debug!(deck_size = cards.len(), passes = times, "swap shuffle");
    }
}

impl Deref for Deck {
    type Target = CardCollection;

    fn deref(&self) -> &CardCollection {
        &self.collection
    }
}

fn out_shuffle(cards: &mut [CardHandle]) {
    let len = cards.len();
    let half = len / 2;
    let top_half = cards[..half].to_vec();

    let (mut top, mut bottom, mut out) = (0, half, 0);
    let mut take_top = true;

    // `out` never passes `bottom`, so unread bottom cards are not overwritten.
    while top < half || bottom < len {
        if take_top && top < half {
            cards[out] = top_half[top];
            top += 1;
            out += 1;
        } else if bottom < len {
            cards[out] = cards[bottom];
            bottom += 1;
            out += 1;
        }
        take_top = !take_top;
    }
}

fn full_range_swap<S: IndexSource + ?Sized>(cards: &mut [CardHandle], source: &mut S) {
    let len = cards.len();
    for i in 0..len {
        // Out-of-contract sources still land inside the deck.
        let j = source.next_index(len) % len;
        cards.swap(i, j);
    }
}
