//! A single ordered pile of cards.
//!
//! Index 0 is the bottom of the pile; the last card is the top.
//! Backed by an `im` vector so cloning a pile (and therefore a whole
//! layout for an undo snapshot) shares structure instead of copying.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::card::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top (last) card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// The bottom (first) card.
    #[must_use]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Cards bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Cards from `start` to the top.
    pub fn suffix(&self, start: usize) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().skip(start).copied()
    }

    /// Index of the lowest face-up card, if any card is face up.
    ///
    /// In a well-formed tableau every card from here to the top is face up.
    #[must_use]
    pub fn face_up_start(&self) -> Option<usize> {
        self.cards.iter().position(|card| card.face_up)
    }

    /// True if the cards from `start` to the top equal `cards`
    /// (identity and orientation).
    #[must_use]
    pub fn ends_with(&self, cards: &[Card]) -> bool {
        let Some(start) = self.len().checked_sub(cards.len()) else {
            return false;
        };
        self.suffix(start).eq(cards.iter().copied())
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the top `count` cards, bottom-most first.
    ///
    /// Returns `None` (and leaves the pile alone) if the pile is shorter
    /// than `count`.
    pub fn take_top(&mut self, count: usize) -> Option<Vec<Card>> {
        let at = self.len().checked_sub(count)?;
        let taken = self.cards.split_off(at);
        Some(taken.into_iter().collect())
    }

    /// Empty the pile, returning its cards bottom to top.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards).into_iter().collect()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Turn the top card face up. Returns true if it was face down.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.back_mut() {
            Some(card) if !card.face_up => {
                card.flip(true);
                true
            }
            _ => false,
        }
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn sample() -> Pile {
        Pile::from_cards([
            Card::new(Suit::Clubs, Rank::Four),
            Card::new(Suit::Hearts, Rank::King),
            Card::face_up(Suit::Spades, Rank::Nine),
            Card::face_up(Suit::Diamonds, Rank::Eight),
        ])
    }

    #[test]
    fn test_top_and_bottom() {
        let pile = sample();
        assert_eq!(pile.top(), Some(Card::face_up(Suit::Diamonds, Rank::Eight)));
        assert_eq!(pile.bottom(), Some(Card::new(Suit::Clubs, Rank::Four)));
        assert_eq!(Pile::new().top(), None);
    }

    #[test]
    fn test_face_up_start() {
        assert_eq!(sample().face_up_start(), Some(2));
        assert_eq!(Pile::from_cards([Card::new(Suit::Clubs, Rank::Ace)]).face_up_start(), None);
    }

    #[test]
    fn test_take_top() {
        let mut pile = sample();
        let taken = pile.take_top(2).unwrap();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].rank, Rank::Nine);
        assert_eq!(pile.len(), 2);
        assert!(pile.take_top(3).is_none());
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_ends_with() {
        let pile = sample();
        assert!(pile.ends_with(&[
            Card::face_up(Suit::Spades, Rank::Nine),
            Card::face_up(Suit::Diamonds, Rank::Eight),
        ]));
        assert!(!pile.ends_with(&[Card::face_up(Suit::Spades, Rank::Nine)]));
        assert!(!Pile::new().ends_with(&[Card::new(Suit::Clubs, Rank::Ace)]));
    }

    #[test]
    fn test_reveal_top() {
        let mut pile = sample();
        pile.take_top(2);
        assert!(pile.reveal_top());
        assert!(!pile.reveal_top());
        assert!(pile.top().unwrap().face_up);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pile = sample();
        let snapshot = pile.clone();
        pile.pop();
        pile.reveal_top();
        assert_eq!(snapshot.len(), 4);
        assert_ne!(snapshot, pile);
    }
}
