//! Deck scenario tests.
//!
//! These tests exercise standard decks end to end:
//! - Construction of 52 and 54 card decks
//! - Cutting, out-shuffles and swap shuffles on real decks
//! - Dealing into hands, including hands that refuse the card

use rust_cards::{
    Card, CardId, CollectionConfig, CollectionId, DeckKind, Holder, JokerKind, RejectedGain,
    ScriptedIndices, ShuffleRng, Table, TableConfig,
};

fn deck_ids(table: &Table, deck: CollectionId) -> Vec<CardId> {
    table.collection(deck).unwrap().ids().collect()
}

// =============================================================================
// Construction
// =============================================================================

/// A 52-card deck has 52 distinct cards and no joker.
#[test]
fn test_standard_52() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let cards = table.collection(deck).unwrap();

    assert_eq!(cards.len(), 52);
    assert_eq!(cards.max_size(), 52);
    assert!(!cards.allows_duplicates());
    assert!(cards.cards().iter().all(|handle| !handle.card.is_joker()));

    let mut values: Vec<Card> = cards.cards().iter().map(|handle| handle.card).collect();
    values.sort();
    values.dedup();
    assert_eq!(values.len(), 52);
}

/// A 54-card deck has exactly one of each joker.
#[test]
fn test_standard_54() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard54);
    let cards = table.collection(deck).unwrap();

    assert_eq!(cards.len(), 54);
    let big = cards.cards().iter().filter(|h| h.card.is_big_joker()).count();
    let little = cards.cards().iter().filter(|h| h.card.is_little_joker()).count();
    assert_eq!(big, 1);
    assert_eq!(little, 1);
    assert!(cards.contains_value(&Card::joker(JokerKind::Big)));
}

/// Every card of a fresh deck names the deck as its holder.
#[test]
fn test_fresh_deck_holders() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard54);

    for handle in table.collection(deck).unwrap().cards() {
        assert_eq!(table.holder_of(handle.id), Some(Holder::Collection(deck)));
    }
}

// =============================================================================
// Cutting and shuffling
// =============================================================================

/// Cutting 10 puts the 11th card on top and the old top 10 at the bottom.
#[test]
fn test_cut_ten() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let before = deck_ids(&table, deck);

    assert!(table.cut_from_top(deck, 10));
    let after = deck_ids(&table, deck);

    assert_eq!(after[0], before[10]);
    assert_eq!(&after[42..], &before[..10]);
    assert_eq!(&after[..42], &before[10..]);
}

/// Cutting the entire deck is refused.
#[test]
fn test_cut_entire_deck() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let before = deck_ids(&table, deck);

    assert!(!table.cut_from_top(deck, 52));
    assert_eq!(deck_ids(&table, deck), before);
}

/// An out-shuffle on 52 cards interleaves the two halves.
#[test]
fn test_ideal_shuffle_52() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let before = deck_ids(&table, deck);

    assert!(table.ideal_shuffle(deck));
    let after = deck_ids(&table, deck);

    for i in 0..26 {
        assert_eq!(after[2 * i], before[i]);
        assert_eq!(after[2 * i + 1], before[26 + i]);
    }
}

/// An out-shuffle on 53 cards keeps the extra bottom card last.
#[test]
fn test_ideal_shuffle_odd_deck() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard54);
    let top = table.deck(deck).unwrap().top().unwrap().id;
    table.release(top).unwrap();
    let before = deck_ids(&table, deck);
    assert_eq!(before.len(), 53);

    assert!(table.ideal_shuffle(deck));
    let after = deck_ids(&table, deck);

    for i in 0..26 {
        assert_eq!(after[2 * i], before[i]);
        assert_eq!(after[2 * i + 1], before[26 + i]);
    }
    assert_eq!(after[52], before[52]);
}

/// The swap shuffle follows the injected indices exactly.
#[test]
fn test_scripted_shuffle_matches_manual_trace() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let mut expected = deck_ids(&table, deck);

    let script: Vec<usize> = (0..52).map(|i| (i * 17 + 5) % 52).collect();
    for (i, &j) in script.iter().enumerate() {
        expected.swap(i, j);
    }

    assert!(table.shuffle(deck, &mut ScriptedIndices::new(script)));
    assert_eq!(deck_ids(&table, deck), expected);
}

/// Same seed, same shuffled order.
#[test]
fn test_seeded_shuffle_reproducible() {
    let mut first = Table::default();
    let mut second = Table::default();
    let a = first.standard_deck(DeckKind::Standard52);
    let b = second.standard_deck(DeckKind::Standard52);

    assert!(first.shuffle_times(a, &mut ShuffleRng::new(99), 5));
    assert!(second.shuffle_times(b, &mut ShuffleRng::new(99), 5));

    let order = |table: &Table, deck: CollectionId| -> Vec<Card> {
        table.collection(deck).unwrap().cards().iter().map(|h| h.card).collect()
    };
    assert_eq!(order(&first, a), order(&second, b));
}

// =============================================================================
// Dealing
// =============================================================================

/// Dealing to a hand with room moves the card and its holder.
#[test]
fn test_deal_to_hand_with_room() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let hand = table.new_collection(CollectionConfig::new(5).allow_duplicates());
    let top = table.deck(deck).unwrap().top().unwrap().id;

    assert!(table.deal_top_to(deck, Holder::Collection(hand)));

    assert_eq!(table.collection(deck).unwrap().len(), 51);
    assert_eq!(table.collection(hand).unwrap().len(), 1);
    assert_eq!(table.holder_of(top), Some(Holder::Collection(hand)));
}

fn full_hand_scenario(policy: RejectedGain) -> (Table, CollectionId, CollectionId, CardId) {
    let mut table = Table::new(TableConfig::new().with_rejected_gain(policy));
    let deck = table.standard_deck(DeckKind::Standard52);
    let hand = table.new_collection(CollectionConfig::new(2).allow_duplicates());
    table.deal_bottom_to(deck, Holder::Collection(hand));
    table.deal_bottom_to(deck, Holder::Collection(hand));
    assert!(table.collection(hand).unwrap().is_full());

    let top = table.deck(deck).unwrap().top().unwrap().id;
    assert!(table.deal_top_to(deck, Holder::Collection(hand)));
    (table, deck, hand, top)
}

/// Literal behaviour: the holder dangles at the full hand.
#[test]
fn test_deal_to_full_hand_retain() {
    let (table, deck, hand, top) = full_hand_scenario(RejectedGain::Retain);

    assert_eq!(table.holder_of(top), Some(Holder::Collection(hand)));
    assert_eq!(table.collection(hand).unwrap().len(), 2);
    assert!(!table.collection(hand).unwrap().contains(top));
    assert_eq!(table.collection(deck).unwrap().len(), 49);
}

/// Default behaviour: the refused card goes back on top of the deck.
#[test]
fn test_deal_to_full_hand_restore() {
    let (table, deck, hand, top) = full_hand_scenario(RejectedGain::Restore);

    assert_eq!(table.holder_of(top), Some(Holder::Collection(deck)));
    assert_eq!(table.collection(hand).unwrap().len(), 2);
    assert_eq!(table.collection(deck).unwrap().len(), 50);
    assert_eq!(table.deck(deck).unwrap().top().unwrap().id, top);
}

/// Release: the refused card leaves the deck and belongs to nobody.
#[test]
fn test_deal_to_full_hand_release() {
    let (table, deck, hand, top) = full_hand_scenario(RejectedGain::Release);

    assert_eq!(table.holder_of(top), Some(Holder::None));
    assert_eq!(table.collection(hand).unwrap().len(), 2);
    assert_eq!(table.collection(deck).unwrap().len(), 49);
}

/// Dealing a whole deck round-robin into four hands.
#[test]
fn test_deal_out_whole_deck() {
    let mut table = Table::default();
    let deck = table.standard_deck(DeckKind::Standard52);
    let hands: Vec<_> = (0..4)
        .map(|_| table.new_collection(CollectionConfig::new(13)))
        .collect();

    let mut turn = 0;
    while table.deal_top_to(deck, Holder::Collection(hands[turn % 4])) {
        turn += 1;
    }

    assert_eq!(turn, 52);
    assert!(table.collection(deck).unwrap().is_empty());
    for &hand in &hands {
        assert_eq!(table.collection(hand).unwrap().len(), 13);
    }
}
