//! Ordered card container with capacity and duplicate policy.
//!
//! A `CardCollection` keeps cards in the order they arrived. It never grows
//! past its `max_size`, and unless configured otherwise it refuses a card
//! that is value-equal to one it already holds. Both refusals are silent:
//! the store is left unchanged and the caller learns about it through the
//! `Err` of [`CardStore::gain_card`].
//!
//! ```
//! use rust_cards::cards::{Card, Rank, Suit};
//! use rust_cards::collections::{CardCollection, CardHandle, CardStore};
//! use rust_cards::core::{CardId, CollectionConfig, GainRejection};
//!
//! let mut pile = CardCollection::new(CollectionConfig::new(2));
//! let ace = Card::new(Suit::Spades, Rank::Ace);
//!
//! assert!(pile.gain_card(CardHandle::new(CardId(0), ace)).is_ok());
//! assert_eq!(
//!     pile.gain_card(CardHandle::new(CardId(1), ace)),
//!     Err(GainRejection::Duplicate)
//! );
//! assert_eq!(pile.len(), 1);
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;

use super::store::{CardHandle, CardStore};
use crate::cards::Card;
use crate::core::config::CollectionConfig;
use crate::core::entity::CardId;
use crate::core::error::GainRejection;

/// An ordered collection of cards.
#[derive(Clone, Debug, Default)]
pub struct CardCollection {
    config: CollectionConfig,

    /// Cards in insertion order.
    cards: Vec<CardHandle>,

    /// How many cards of each value are stored.
    counts: FxHashMap<Card, usize>,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new(config: CollectionConfig) -> Self {
        Self {
            config,
            cards: Vec::with_capacity(config.max_size.min(64)),
            counts: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> CollectionConfig {
        self.config
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.config.max_size
    }

    #[must_use]
    pub fn allows_duplicates(&self) -> bool {
        self.config.allow_duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.config.max_size
    }

    /// Card at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardHandle> {
        self.cards.get(index)
    }

    /// Read-only view of the sequence.
    #[must_use]
    pub fn cards(&self) -> &[CardHandle] {
        &self.cards
    }

    /// Card ids in order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|handle| handle.id)
    }

    /// Is this exact card stored here?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Index of this exact card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|handle| handle.id == id)
    }

    /// Is a card with this suit and rank stored here?
    #[must_use]
    pub fn contains_value(&self, card: &Card) -> bool {
        self.counts.get(card).is_some_and(|&count| count > 0)
    }

    /// Move the most recently added card (the last one) to `index`.
    ///
    /// Cards from `index` onwards shift back by one. Only valid when
    /// `index < len - 1`; otherwise nothing happens and `false` is returned.
    pub fn relocate_last_to(&mut self, index: usize) -> bool {
        if index >= self.cards.len().saturating_sub(1) {
            return false;
        }
        self.cards[index..].rotate_right(1);
        true
    }

    /// Sequence access for deck algorithms. Reordering only: the slice
    /// cannot change which cards are stored.
    pub(crate) fn sequence_mut(&mut self) -> &mut [CardHandle] {
        &mut self.cards
    }

    /// Put a card back at a position it was just removed from, bypassing
    /// the gain checks.
    pub(crate) fn restore_card(&mut self, index: usize, card: CardHandle) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
        *self.counts.entry(card.card).or_insert(0) += 1;
    }
}

impl CardStore for CardCollection {
    fn gain_card(&mut self, card: CardHandle) -> Result<(), GainRejection> {
        if !self.config.allow_duplicates && self.contains_value(&card.card) {
            return Err(GainRejection::Duplicate);
        }
        if self.is_full() {
            return Err(GainRejection::Full);
        }
        self.cards.push(card);
        *self.counts.entry(card.card).or_insert(0) += 1;
        Ok(())
    }

    fn lose_card(&mut self, id: CardId) -> Option<usize> {
        let index = self.position(id)?;
        let removed = self.cards.remove(index);
        if let Some(count) = self.counts.get_mut(&removed.card) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&removed.card);
            }
        }
        Some(index)
    }
}

impl Index<usize> for CardCollection {
    type Output = CardHandle;

    fn index(&self, index: usize) -> &CardHandle {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a CardHandle;
    type IntoIter = std::slice::Iter<'a, CardHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn handle(id: u32, suit: Suit, rank: Rank) -> CardHandle {
        CardHandle::new(CardId(id), Card::new(suit, rank))
    }

    fn filled(count: u32) -> CardCollection {
        let mut collection = CardCollection::new(CollectionConfig::new(10));
        for i in 0..count {
            collection
                .gain_card(handle(i, Suit::Hearts, Rank::REGULAR[i as usize]))
                .unwrap();
        }
        collection
    }

    fn ids(collection: &CardCollection) -> Vec<u32> {
        collection.ids().map(|id| id.0).collect()
    }

    #[test]
    fn test_gain_appends_in_order() {
        let collection = filled(3);
        assert_eq!(ids(&collection), vec![0, 1, 2]);
        assert_eq!(collection[0].card, Card::new(Suit::Hearts, Rank::Two));
        assert_eq!(collection.get(3), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut collection = CardCollection::new(CollectionConfig::new(5));
        collection.gain_card(handle(0, Suit::Clubs, Rank::Four)).unwrap();

        let result = collection.gain_card(handle(1, Suit::Clubs, Rank::Four));
        assert_eq!(result, Err(GainRejection::Duplicate));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut collection = CardCollection::new(CollectionConfig::new(5).allow_duplicates());
        collection.gain_card(handle(0, Suit::Clubs, Rank::Four)).unwrap();
        collection.gain_card(handle(1, Suit::Clubs, Rank::Four)).unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_capacity_rejected() {
        let mut collection = CardCollection::new(CollectionConfig::new(1));
        collection.gain_card(handle(0, Suit::Clubs, Rank::Four)).unwrap();
        assert!(collection.is_full());

        let result = collection.gain_card(handle(1, Suit::Clubs, Rank::Five));
        assert_eq!(result, Err(GainRejection::Full));
        assert_eq!(ids(&collection), vec![0]);
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut collection = CardCollection::new(CollectionConfig::new(1));
        collection.gain_card(handle(0, Suit::Clubs, Rank::Four)).unwrap();

        let result = collection.gain_card(handle(1, Suit::Clubs, Rank::Four));
        assert_eq!(result, Err(GainRejection::Duplicate));
    }

    #[test]
    fn test_zero_capacity() {
        let mut collection = CardCollection::new(CollectionConfig::new(0));
        assert!(collection.is_full());
        assert_eq!(
            collection.gain_card(handle(0, Suit::Spades, Rank::Ace)),
            Err(GainRejection::Full)
        );
    }

    #[test]
    fn test_lose_by_identity() {
        let mut collection = CardCollection::new(CollectionConfig::new(5).allow_duplicates());
        collection.gain_card(handle(0, Suit::Clubs, Rank::Four)).unwrap();
        collection.gain_card(handle(1, Suit::Clubs, Rank::Four)).unwrap();

        // Value-equal card 0 stays; card 1 goes.
        assert_eq!(collection.lose_card(CardId(1)), Some(1));
        assert_eq!(ids(&collection), vec![0]);
        assert!(collection.contains_value(&Card::new(Suit::Clubs, Rank::Four)));

        assert_eq!(collection.lose_card(CardId(1)), None);
        assert_eq!(collection.lose_card(CardId(0)), Some(0));
        assert!(!collection.contains_value(&Card::new(Suit::Clubs, Rank::Four)));
    }

    #[test]
    fn test_lose_frees_value_for_duplicate_check() {
        let mut collection = CardCollection::new(CollectionConfig::new(5));
        collection.gain_card(handle(0, Suit::Clubs, Rank::Four)).unwrap();
        collection.lose_card(CardId(0));
        assert!(collection.gain_card(handle(1, Suit::Clubs, Rank::Four)).is_ok());
    }

    #[test]
    fn test_relocate_last_to_front() {
        let mut collection = filled(4);
        assert!(collection.relocate_last_to(0));
        assert_eq!(ids(&collection), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_relocate_last_to_middle() {
        let mut collection = filled(5);
        assert!(collection.relocate_last_to(2));
        assert_eq!(ids(&collection), vec![0, 1, 4, 2, 3]);
    }

    #[test]
    fn test_relocate_out_of_range() {
        let mut collection = filled(3);
        // Index of the last card itself is not a move.
        assert!(!collection.relocate_last_to(2));
        assert!(!collection.relocate_last_to(7));
        assert_eq!(ids(&collection), vec![0, 1, 2]);

        let mut empty = CardCollection::new(CollectionConfig::new(3));
        assert!(!empty.relocate_last_to(0));

        let mut single = filled(1);
        assert!(!single.relocate_last_to(0));
    }

    #[test]
    fn test_restore_card() {
        let mut collection = filled(3);
        let removed = collection[1];
        let index = collection.lose_card(removed.id).unwrap();
        collection.restore_card(index, removed);
        assert_eq!(ids(&collection), vec![0, 1, 2]);
        assert!(collection.contains_value(&removed.card));
    }

    #[test]
    fn test_accessors() {
        let collection = CardCollection::new(CollectionConfig::new(8).allow_duplicates());
        assert_eq!(collection.max_size(), 8);
        assert!(collection.allows_duplicates());
        assert!(collection.is_empty());
        assert_eq!(collection.config(), CollectionConfig::new(8).allow_duplicates());

        let collection = filled(2);
        assert!(collection.contains(CardId(1)));
        assert_eq!(collection.position(CardId(1)), Some(1));
        assert!(!collection.contains(CardId(5)));
        assert_eq!((&collection).into_iter().count(), 2);
    }
}
