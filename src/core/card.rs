//! Card identity and orientation.
//!
//! A card's suit and rank never change; the only mutable property is
//! whether it is face up. Value and color are derived.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// All suits in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Color of cards in this suit.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Spades | Suit::Clubs => CardColor::Black,
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }
}

/// Card rank. The discriminant is the card value (Ace = 1, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
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
}

impl Rank {
    /// All ranks, Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Numeric value in `1..=13`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a value in `1..=13`.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Short label as printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Dense card identity in `0..52`, independent of orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// A playing card.
///
/// Equality compares orientation too; use [`Card::id`] or [`Card::same_card`]
/// when only identity matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Numeric value, Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub const fn color(self) -> CardColor {
        self.suit.color()
    }

    /// Identity of the card, ignoring orientation.
    #[must_use]
    pub const fn id(self) -> CardId {
        CardId(self.suit.index() as u8 * 13 + self.rank.value() - 1)
    }

    /// True if both cards have the same suit and rank.
    #[must_use]
    pub fn same_card(self, other: Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Set the orientation.
    pub fn flip(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    #[must_use]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    #[must_use]
    pub fn is_ace(self) -> bool {
        self.rank == Rank::Ace
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        } else {
            write!(f, "##")
        }
    }
}

/// A fresh, face-down, unshuffled 52-card deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_value_and_color() {
        let card = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(card.value(), 12);
        assert_eq!(card.color(), CardColor::Red);
        assert_eq!(Card::new(Suit::Clubs, Rank::Ace).color(), CardColor::Black);
    }

    #[test]
    fn test_rank_from_value() {
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(13), Some(Rank::King));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let deck = standard_deck();
        let mut ids: Vec<_> = deck.iter().map(|c| c.id().raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_flip_keeps_identity() {
        let mut card = Card::new(Suit::Spades, Rank::Ten);
        let before = card.id();
        card.flip(true);
        assert!(card.face_up);
        assert_eq!(card.id(), before);
        assert!(card.same_card(Card::new(Suit::Spades, Rank::Ten)));
        assert_ne!(card, Card::new(Suit::Spades, Rank::Ten));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::face_up(Suit::Diamonds, Rank::Ten).to_string(), "10♦");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ten).to_string(), "##");
    }
}
