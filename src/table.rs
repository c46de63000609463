//! The table: every card and every collection, and the holder protocol.
//!
//! Cards never point at their holder directly. The table keeps one
//! [`CardInstance`] per card and one store per collection, and
//! [`Table::transfer`] is the only way a card changes hands:
//!
//! 1. if the current holder is a collection, it loses the card;
//! 2. the card's holder is replaced;
//! 3. if the new holder is a collection, it is asked to gain the card.
//!
//! A collection may refuse in step 3 (duplicate or full). What happens then
//! is set by [`TableConfig::rejected_gain`]; by default the card goes back
//! to where it came from.
//!
//! ```
//! use rust_cards::cards::Holder;
//! use rust_cards::core::{CollectionConfig, DeckKind};
//! use rust_cards::Table;
//!
//! let mut table = Table::default();
//! let deck = table.standard_deck(DeckKind::Standard52);
//! let hand = table.new_collection(CollectionConfig::new(5).allow_duplicates());
//!
//! assert!(table.deal_top_to(deck, Holder::Collection(hand)));
//!
//! let dealt = table.collection(hand).unwrap()[0].id;
//! assert_eq!(table.holder_of(dealt), Some(Holder::Collection(hand)));
//! assert_eq!(table.collection(deck).unwrap().len(), 51);
//! ```

use tracing::{debug, trace};

use crate::cards::{Card, CardInstance, Holder, JokerKind, Rank, Suit};
use crate::collections::{CardCollection, CardHandle, CardStore, Deck};
use crate::core::config::{CollectionConfig, DeckKind, RejectedGain, TableConfig};
use crate::core::entity::{CardId, CollectionId};
use crate::core::error::TransferError;
use crate::core::rng::IndexSource;

/// A table-owned container.
#[derive(Clone, Debug)]
enum Store {
    Collection(CardCollection),
    Deck(Deck),
}

impl Store {
    fn collection(&self) -> &CardCollection {
        match self {
            Store::Collection(collection) => collection,
            Store::Deck(deck) => deck.collection(),
        }
    }

    fn collection_mut(&mut self) -> &mut CardCollection {
        match self {
            Store::Collection(collection) => collection,
            Store::Deck(deck) => deck.collection_mut(),
        }
    }

    fn as_card_store(&mut self) -> &mut dyn CardStore {
        self.collection_mut()
    }
}

/// Owns cards and collections and mediates every holder change.
#[derive(Clone, Debug, Default)]
pub struct Table {
    config: TableConfig,

    /// Card records, indexed by `CardId`.
    cards: Vec<CardInstance>,

    /// Collections and decks, indexed by `CollectionId`.
    stores: Vec<Store>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
            stores: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> TableConfig {
        self.config
    }

    // === Collections ===

    /// Add an empty collection.
    pub fn new_collection(&mut self, config: CollectionConfig) -> CollectionId {
        self.push_store(Store::Collection(CardCollection::new(config)))
    }

    /// Add an empty deck.
    pub fn new_deck(&mut self, config: CollectionConfig) -> CollectionId {
        self.push_store(Store::Deck(Deck::new(config)))
    }

    /// Add a full standard deck, in construction order.
    ///
    /// Suits Hearts, Diamonds, Spades, Clubs, each Two through Ace; a
    /// 54-card deck then gets the Big Joker and the Little Joker.
    pub fn standard_deck(&mut self, kind: DeckKind) -> CollectionId {
        let deck = self.new_deck(kind.config());
        for suit in Suit::REGULAR {
            for rank in Rank::REGULAR {
                self.create_card(suit, rank, Holder::Collection(deck));
            }
        }
        if kind.has_jokers() {
            self.create_joker(JokerKind::Big, Holder::Collection(deck));
            self.create_joker(JokerKind::Little, Holder::Collection(deck));
        }
        debug!(%deck, size = kind.size(), "built standard deck");
        deck
    }

    fn push_store(&mut self, store: Store) -> CollectionId {
        let id = CollectionId(self.stores.len() as u32);
        self.stores.push(store);
        id
    }

    /// A collection, or the collection underlying a deck.
    #[must_use]
    pub fn collection(&self, id: CollectionId) -> Option<&CardCollection> {
        self.stores.get(id.index()).map(Store::collection)
    }

    #[must_use]
    pub fn deck(&self, id: CollectionId) -> Option<&Deck> {
        match self.stores.get(id.index())? {
            Store::Deck(deck) => Some(deck),
            Store::Collection(_) => None,
        }
    }

    fn deck_mut(&mut self, id: CollectionId) -> Option<&mut Deck> {
        match self.stores.get_mut(id.index())? {
            Store::Deck(deck) => Some(deck),
            Store::Collection(_) => None,
        }
    }

    #[must_use]
    pub fn is_deck(&self, id: CollectionId) -> bool {
        self.deck(id).is_some()
    }

    /// Number of collections and decks.
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.stores.len()
    }

    /// All collection ids, in creation order.
    pub fn collection_ids(&self) -> impl Iterator<Item = CollectionId> {
        (0..self.stores.len() as u32).map(CollectionId)
    }

    /// See [`CardCollection::relocate_last_to`]. `false` for unknown ids.
    pub fn relocate_last_to(&mut self, id: CollectionId, index: usize) -> bool {
        self.stores
            .get_mut(id.index())
            .is_some_and(|store| store.collection_mut().relocate_last_to(index))
    }

    // === Deck order ===
    //
    // Reordering never changes holders. Each call returns `false` when `id`
    // is unknown or names a plain collection.

    /// Move the top `n` cards of a deck to its bottom.
    ///
    /// Also `false` when `n` is not smaller than the deck size.
    pub fn cut_from_top(&mut self, id: CollectionId, n: usize) -> bool {
        self.deck_mut(id).is_some_and(|deck| deck.cut_from_top(n))
    }

    /// One perfect out-shuffle pass over a deck.
    pub fn ideal_shuffle(&mut self, id: CollectionId) -> bool {
        self.deck_mut(id).map(Deck::ideal_shuffle).is_some()
    }

    /// `times` out-shuffle passes over a deck.
    pub fn ideal_shuffle_times(&mut self, id: CollectionId, times: usize) -> bool {
        self.deck_mut(id)
            .map(|deck| deck.ideal_shuffle_times(times))
            .is_some()
    }

    /// One full-range swap shuffle pass over a deck, drawing from `source`.
    pub fn shuffle<S: IndexSource + ?Sized>(&mut self, id: CollectionId, source: &mut S) -> bool {
        self.deck_mut(id).map(|deck| deck.shuffle(source)).is_some()
    }

    /// `times` swap shuffle passes over a deck.
    pub fn shuffle_times<S: IndexSource + ?Sized>(
        &mut self,
        id: CollectionId,
        source: &mut S,
        times: usize,
    ) -> bool {
        self.deck_mut(id)
            .map(|deck| deck.shuffle_times(source, times))
            .is_some()
    }

    // === Cards ===

    /// Create a card and hand it to `holder`.
    ///
    /// Suit and rank are normalized (see [`Card::new`]). The card starts
    /// with no holder and then goes through the normal transfer, so a
    /// collection that refuses it leaves it per the table's policy.
    pub fn create_card(&mut self, suit: Suit, rank: Rank, holder: Holder) -> CardId {
        let id = CardId(self.cards.len() as u32);
        self.cards.push(CardInstance::new(id, Card::new(suit, rank)));
        if holder.is_some() {
            if let Err(error) = self.transfer(id, holder) {
                debug!(card = %id, %error, "new card not placed");
            }
        }
        id
    }

    /// Create the Little or Big joker and hand it to `holder`.
    pub fn create_joker(&mut self, kind: JokerKind, holder: Holder) -> CardId {
        let joker = Card::joker(kind);
        self.create_card(joker.suit(), joker.rank(), holder)
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardInstance> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn holder_of(&self, id: CardId) -> Option<Holder> {
        self.card(id).map(CardInstance::holder)
    }

    /// Every card ever created on this table, by id.
    #[must_use]
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // === Transfers ===

    /// Change a card's holder.
    ///
    /// Unknown card or collection ids fail before anything changes. A
    /// refusal by the new collection is reported after the table's
    /// `rejected_gain` policy has been applied.
    pub fn transfer(&mut self, card: CardId, holder: Holder) -> Result<(), TransferError> {
        let instance = *self.card(card).ok_or(TransferError::UnknownCard(card))?;
        if let Some(target) = holder.collection() {
            if target.index() >= self.stores.len() {
                return Err(TransferError::UnknownCollection(target));
            }
        }

        let previous = instance.holder();
        let handle = CardHandle::new(card, instance.card);

        let vacated = previous
            .collection()
            .and_then(|from| self.stores.get_mut(from.index()))
            .and_then(|store| store.as_card_store().lose_card(card));

        self.cards[card.index()].set_holder(holder);

        let Some(target) = holder.collection() else {
            trace!(%card, from = %previous, to = %holder, "transferred");
            return Ok(());
        };

        let store = &mut self.stores[target.index()];
        let max_size = store.collection().max_size();
        match store.as_card_store().gain_card(handle) {
            Ok(()) => {
                trace!(%card, from = %previous, to = %holder, "transferred");
                Ok(())
            }
            Err(rejection) => {
                debug!(
                    %card,
                    collection = %target,
                    %rejection,
                    policy = ?self.config.rejected_gain,
                    "gain refused"
                );
                self.settle_refused(handle, previous, vacated);
                Err(TransferError::rejected(rejection, card, target, max_size))
            }
        }
    }

    /// Where a refused card ends up.
    fn settle_refused(&mut self, handle: CardHandle, previous: Holder, vacated: Option<usize>) {
        match self.config.rejected_gain {
            RejectedGain::Retain => {}
            RejectedGain::Release => self.cards[handle.id.index()].set_holder(Holder::None),
            RejectedGain::Restore => {
                self.cards[handle.id.index()].set_holder(previous);
                if let (Some(from), Some(index)) = (previous.collection(), vacated) {
                    if let Some(store) = self.stores.get_mut(from.index()) {
                        store.collection_mut().restore_card(index, handle);
                    }
                }
            }
        }
    }

    /// Take a card away from whoever holds it.
    pub fn release(&mut self, card: CardId) -> Result<(), TransferError> {
        self.transfer(card, Holder::None)
    }

    /// Give a card to a collection.
    ///
    /// Returns whether the collection's length changed. A card already in
    /// this collection is removed and appended again, so re-adding it
    /// returns `false` even though it moved to the back.
    pub fn add(&mut self, collection: CollectionId, card: CardId) -> bool {
        let Some(before) = self.collection(collection).map(CardCollection::len) else {
            return false;
        };
        let _ = self.transfer(card, Holder::Collection(collection));
        self.collection(collection)
            .is_some_and(|after| after.len() != before)
    }

    /// Give a card to a collection, reporting why it was refused.
    pub fn try_add(&mut self, collection: CollectionId, card: CardId) -> Result<(), TransferError> {
        self.transfer(card, Holder::Collection(collection))
    }

    // === Dealing ===

    /// Deal the top card of a deck to `holder`.
    ///
    /// Returns whether there was a card to deal, not whether `holder`
    /// accepted it. `false` for empty decks, plain collections and unknown
    /// ids.
    pub fn deal_top_to(&mut self, deck: CollectionId, holder: Holder) -> bool {
        let top = self.deck(deck).and_then(Deck::top).map(|handle| handle.id);
        self.deal(top, holder)
    }

    /// Deal the bottom card of a deck to `holder`. Same contract as
    /// [`Table::deal_top_to`].
    pub fn deal_bottom_to(&mut self, deck: CollectionId, holder: Holder) -> bool {
        let bottom = self.deck(deck).and_then(Deck::bottom).map(|handle| handle.id);
        self.deal(bottom, holder)
    }

    fn deal(&mut self, card: Option<CardId>, holder: Holder) -> bool {
        let Some(card) = card else {
            return false;
        };
        let _ = self.transfer(card, holder);
        true
    }
}
