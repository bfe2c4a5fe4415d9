//! Placement predicates.
//!
//! Pure and total: every function answers for any input and never touches
//! the layout. Emptiness of a move is the caller's concern.

use crate::core::card::{Card, Rank};
use crate::zones::Pile;

/// May `card` go on top of `foundation`?
///
/// An empty foundation takes an ace; otherwise the card must follow the
/// top card in the same suit.
#[must_use]
pub fn can_place_on_foundation(card: Card, foundation: &Pile) -> bool {
    fits_foundation(card, foundation.top())
}

/// May `card` (the lead of a run) go on top of `tableau`?
///
/// An empty tableau takes a king; otherwise the card must be one lower
/// than the top card and of the opposite color.
#[must_use]
pub fn can_place_on_tableau(card: Card, tableau: &Pile) -> bool {
    fits_tableau(card, tableau.top())
}

/// [`can_place_on_foundation`] against an optional top card.
#[must_use]
pub fn fits_foundation(card: Card, top: Option<Card>) -> bool {
    match top {
        Some(top) => card.suit == top.suit && card.value() == top.value() + 1,
        None => card.rank == Rank::Ace,
    }
}

/// [`can_place_on_tableau`] against an optional top card.
#[must_use]
pub fn fits_tableau(card: Card, top: Option<Card>) -> bool {
    match top {
        Some(top) => card.color() != top.color() && card.value() + 1 == top.value(),
        None => card.rank == Rank::King,
    }
}

/// True if `cards` is a non-empty, face-up, strictly descending run of
/// alternating colors (bottom-most card first).
#[must_use]
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.is_empty() || cards.iter().any(|card| !card.face_up) {
        return false;
    }
    cards
        .windows(2)
        .all(|pair| fits_tableau(pair[1], Some(pair[0])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::face_up(suit, rank)
    }

    #[test]
    fn test_foundation_empty_takes_ace() {
        assert!(can_place_on_foundation(up(Suit::Spades, Rank::Ace), &Pile::new()));
        assert!(!can_place_on_foundation(up(Suit::Spades, Rank::Two), &Pile::new()));
    }

    #[test]
    fn test_foundation_follows_suit() {
        let foundation = Pile::from_cards([up(Suit::Spades, Rank::Ace)]);
        assert!(can_place_on_foundation(up(Suit::Spades, Rank::Two), &foundation));
        assert!(!can_place_on_foundation(up(Suit::Hearts, Rank::Two), &foundation));
        assert!(!can_place_on_foundation(up(Suit::Spades, Rank::Three), &foundation));
    }

    #[test]
    fn test_tableau_rules() {
        assert!(can_place_on_tableau(up(Suit::Spades, Rank::King), &Pile::new()));
        assert!(!can_place_on_tableau(up(Suit::Spades, Rank::Queen), &Pile::new()));

        let tableau = Pile::from_cards([up(Suit::Spades, Rank::King)]);
        assert!(can_place_on_tableau(up(Suit::Hearts, Rank::Queen), &tableau));
        assert!(!can_place_on_tableau(up(Suit::Spades, Rank::Queen), &tableau));
        assert!(!can_place_on_tableau(up(Suit::Hearts, Rank::Jack), &tableau));
    }

    #[test]
    fn test_valid_run() {
        assert!(is_valid_run(&[up(Suit::Clubs, Rank::Nine)]));
        assert!(is_valid_run(&[
            up(Suit::Clubs, Rank::Nine),
            up(Suit::Hearts, Rank::Eight),
            up(Suit::Spades, Rank::Seven),
        ]));
        assert!(!is_valid_run(&[]));
        assert!(!is_valid_run(&[
            up(Suit::Clubs, Rank::Nine),
            up(Suit::Spades, Rank::Eight),
        ]));
        assert!(!is_valid_run(&[
            up(Suit::Clubs, Rank::Nine),
            Card::new(Suit::Hearts, Rank::Eight),
        ]));
    }
}
