//! Domain errors.
//!
//! None of these are fatal: a rejected move leaves the game untouched.
//! The public command surface reports them as `false`/`None`; the
//! `try_*` variants hand back the reason.

use thiserror::Error;

use super::action::PileRef;
use super::card::Card;

/// Why a move or command was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("autoplay is running")]
    AutoplayActive,

    #[error("no cards to move")]
    EmptyMove,

    #[error("cards are not the top of {0}")]
    NotOnSource(PileRef),

    #[error("{0} is face down")]
    FaceDown(Card),

    #[error("cards do not form a descending alternating run")]
    BrokenRun,

    #[error("only one card at a time may move to a foundation")]
    FoundationTakesOneCard,

    #[error("only the top card of {0} can move")]
    SingleCardSource(PileRef),

    #[error("cards cannot be played from or onto the stock")]
    StockIsNotPlayable,

    #[error("source and destination are the same pile")]
    SamePile,

    #[error("no such pile: {0}")]
    NoSuchPile(PileRef),

    #[error("{card} cannot be placed on {destination}")]
    Rejected { card: Card, destination: PileRef },

    #[error("nothing to play")]
    NothingToPlay,

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Undo with nothing recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("undo history is empty")]
    Empty,
}

/// A broken structural invariant. Always a programming error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("expected 52 cards, found {found}")]
    CardCount { found: usize },

    #[error("{0} appears more than once")]
    Duplicate(Card),

    #[error("tableau {tableau} has a face-down card above a face-up card")]
    FaceDownAboveFaceUp { tableau: usize },

    #[error("tableau {tableau} face-up cards are not a descending alternating run")]
    BrokenTableauRun { tableau: usize },

    #[error("foundation {foundation} is not an ascending single-suit run from the ace")]
    FoundationOrder { foundation: usize },

    #[error("a stock card is face up")]
    StockFaceUp,

    #[error("a waste card is face down")]
    WasteFaceDown,

    #[error("foundation {foundation} holds a face-down card")]
    FoundationFaceDown { foundation: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_messages() {
        let err = MoveError::Rejected {
            card: Card::face_up(Suit::Spades, Rank::Queen),
            destination: PileRef::Tableau(3),
        };
        assert_eq!(err.to_string(), "Q♠ cannot be placed on tableau-3");
        assert_eq!(HistoryError::Empty.to_string(), "undo history is empty");
        assert_eq!(
            InvariantViolation::CardCount { found: 51 }.to_string(),
            "expected 52 cards, found 51"
        );
    }
}
