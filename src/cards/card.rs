//! Card values: suit, rank, and the joker normalization rule.
//!
//! A `Card` is a plain `Copy` value. Which collection it currently sits in
//! is tracked separately by [`CardInstance`](super::CardInstance).
//!
//! ## Jokers
//!
//! Asking for a joker suit or a joker rank forces both fields to the
//! matching joker pair, so a card can never mix a joker suit with a regular
//! rank:
//!
//! ```
//! use rust_cards::cards::{Card, Rank, Suit};
//!
//! let card = Card::new(Suit::Hearts, Rank::BigJoker);
//! assert_eq!(card.suit(), Suit::BigJoker);
//! assert_eq!(card.rank(), Rank::BigJoker);
//! assert!(card.is_big_joker());
//! ```

use serde::{Deserialize, Serialize};

/// Card suit. Declaration order is standard-deck construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
    LittleJoker,
    BigJoker,
}

impl Suit {
    /// The four regular suits, in construction order.
    pub const REGULAR: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Is this one of the two joker suits?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Suit::LittleJoker | Suit::BigJoker)
    }

    /// Colour of a regular suit, `None` for jokers.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Suit::Hearts | Suit::Diamonds => Some(Color::Red),
            Suit::Spades | Suit::Clubs => Some(Color::Black),
            Suit::LittleJoker | Suit::BigJoker => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
            Suit::LittleJoker => "Little Joker",
            Suit::BigJoker => "Big Joker",
        };
        f.write_str(name)
    }
}

/// Card rank. Regular ranks carry their numeric value (Jack = 11 … Ace = 14).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    LittleJoker,
    BigJoker,
}

impl Rank {
    /// The thirteen regular ranks, Two through Ace.
    pub const REGULAR: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Is this one of the two joker ranks?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::LittleJoker | Rank::BigJoker)
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Numeric value of a regular rank.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        if self.is_joker() {
            None
        } else {
            Some(self as u8)
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            Rank::LittleJoker => "Little Joker",
            Rank::BigJoker => "Big Joker",
        };
        f.write_str(name)
    }
}

/// Suit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Which joker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JokerKind {
    Little,
    Big,
}

/// A playing card value.
///
/// Equality, hashing and ordering look at suit and rank only. Fields are
/// private so the joker invariant survives; construct through [`Card::new`]
/// or [`Card::joker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawCard", into = "RawCard")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card, normalizing joker suit/rank pairs.
    ///
    /// Precedence: little-joker suit, little-joker rank, big-joker suit,
    /// big-joker rank. The first match decides both fields.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        let (suit, rank) = match (suit, rank) {
            (Suit::LittleJoker, _) | (_, Rank::LittleJoker) => (Suit::LittleJoker, Rank::LittleJoker),
            (Suit::BigJoker, _) | (_, Rank::BigJoker) => (Suit::BigJoker, Rank::BigJoker),
            (suit, rank) => (suit, rank),
        };
        Self { suit, rank }
    }

    /// The Little or Big joker.
    #[must_use]
    pub const fn joker(kind: JokerKind) -> Self {
        match kind {
            JokerKind::Little => Self::new(Suit::LittleJoker, Rank::LittleJoker),
            JokerKind::Big => Self::new(Suit::BigJoker, Rank::BigJoker),
        }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Value equality: same suit and rank.
    #[must_use]
    pub fn is_equal_to(&self, other: &Card) -> bool {
        self == other
    }

    #[must_use]
    pub const fn is_little_joker(self) -> bool {
        matches!(self.suit, Suit::LittleJoker)
    }

    #[must_use]
    pub const fn is_big_joker(self) -> bool {
        matches!(self.suit, Suit::BigJoker)
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        self.suit.is_joker()
    }

    /// Which joker this is, if any.
    #[must_use]
    pub const fn joker_kind(self) -> Option<JokerKind> {
        match self.suit {
            Suit::LittleJoker => Some(JokerKind::Little),
            Suit::BigJoker => Some(JokerKind::Big),
            _ => None,
        }
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_face_card(self) -> bool {
        self.rank.is_face()
    }

    /// Two through Ten, or Ace: neither a face card nor a joker.
    #[must_use]
    pub const fn is_spot_card(self) -> bool {
        !self.is_face_card() && !self.is_joker()
    }

    #[must_use]
    pub const fn is_heart(self) -> bool {
        matches!(self.suit, Suit::Hearts)
    }

    #[must_use]
    pub const fn is_diamond(self) -> bool {
        matches!(self.suit, Suit::Diamonds)
    }

    #[must_use]
    pub const fn is_spade(self) -> bool {
        matches!(self.suit, Suit::Spades)
    }

    #[must_use]
    pub const fn is_club(self) -> bool {
        matches!(self.suit, Suit::Clubs)
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.suit.color(), Some(Color::Red))
    }

    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self.suit.color(), Some(Color::Black))
    }

    /// Suit colour; jokers have none.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        self.suit.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_joker() {
            write!(f, "{}", self.suit)
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

/// Wire form of a card; deserializing goes back through normalization.
#[derive(Serialize, Deserialize)]
struct RawCard {
    suit: Suit,
    rank: Rank,
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        Card::new(raw.suit, raw.rank)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        RawCard {
            suit: card.suit,
            rank: card.rank,
        }
    }
}
