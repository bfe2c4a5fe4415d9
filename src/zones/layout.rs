//! The full table: stock, waste, four foundations and seven tableaus.
//!
//! The layout owns every card of the game. Exactly 52 distinct cards are
//! spread across its piles at all times; [`Layout::check_invariants`]
//! verifies that and the per-pile ordering rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::Pile;
use crate::core::action::{PileRef, FOUNDATIONS, TABLEAUS};
use crate::core::card::Card;
use crate::core::error::InvariantViolation;
use crate::rules::validator::is_valid_run;

/// Cards in a complete deck.
pub const DECK_SIZE: usize = 52;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub stock: Pile,
    pub waste: Pile,
    pub foundations: [Pile; FOUNDATIONS],
    pub tableaus: [Pile; TABLEAUS],
}

impl Layout {
    /// A table with no cards on it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal a shuffled deck.
    ///
    /// Cards are taken from the end of `deck`. Tableau `i` receives `i + 1`
    /// cards with only the last one face up; the remaining 24 form the
    /// face-down stock, whose top is the last card left in `deck`.
    pub fn deal(mut deck: Vec<Card>) -> Result<Self, InvariantViolation> {
        if deck.len() != DECK_SIZE {
            return Err(InvariantViolation::CardCount { found: deck.len() });
        }
        let mut layout = Self::empty();
        for (column, tableau) in layout.tableaus.iter_mut().enumerate() {
            for row in 0..=column {
                let mut card = deck
                    .pop()
                    .ok_or(InvariantViolation::CardCount { found: 0 })?;
                card.flip(row == column);
                tableau.push(card);
            }
        }
        for card in &mut deck {
            card.flip(false);
        }
        layout.stock = Pile::from_cards(deck);
        layout.check_invariants()?;
        Ok(layout)
    }

    #[must_use]
    pub fn pile(&self, pile: PileRef) -> Option<&Pile> {
        match pile {
            PileRef::Stock => Some(&self.stock),
            PileRef::Waste => Some(&self.waste),
            PileRef::Foundation(i) => self.foundations.get(i),
            PileRef::Tableau(i) => self.tableaus.get(i),
        }
    }

    pub fn pile_mut(&mut self, pile: PileRef) -> Option<&mut Pile> {
        match pile {
            PileRef::Stock => Some(&mut self.stock),
            PileRef::Waste => Some(&mut self.waste),
            PileRef::Foundation(i) => self.foundations.get_mut(i),
            PileRef::Tableau(i) => self.tableaus.get_mut(i),
        }
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top(&self, pile: PileRef) -> Option<Card> {
        self.pile(pile)?.top()
    }

    /// Cards across all foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation_count()
            + self.tableaus.iter().map(Pile::len).sum::<usize>()
    }

    /// True once every card sits on a foundation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.foundation_count() == DECK_SIZE
    }

    /// Lowest-index empty tableau.
    #[must_use]
    pub fn first_empty_tableau(&self) -> Option<usize> {
        self.tableaus.iter().position(Pile::is_empty)
    }

    /// Every card on the table, in pile order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flat_map(Pile::iter))
            .chain(self.tableaus.iter().flat_map(Pile::iter))
    }

    /// Verify the structural invariants.
    ///
    /// - exactly 52 cards, each (suit, rank) once
    /// - stock face down, waste and foundations face up
    /// - foundations ascend from the ace in one suit
    /// - tableaus are a face-down prefix under a descending, alternating run
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(InvariantViolation::CardCount { found });
        }

        let mut seen = FxHashSet::default();
        for card in self.cards() {
            if !seen.insert(card.id()) {
                return Err(InvariantViolation::Duplicate(card));
            }
        }

        if self.stock.iter().any(|card| card.face_up) {
            return Err(InvariantViolation::StockFaceUp);
        }
        if self.waste.iter().any(|card| !card.face_up) {
            return Err(InvariantViolation::WasteFaceDown);
        }

        for (foundation, pile) in self.foundations.iter().enumerate() {
            if pile.iter().any(|card| !card.face_up) {
                return Err(InvariantViolation::FoundationFaceDown { foundation });
            }
            let ordered = pile.iter().enumerate().all(|(i, card)| {
                pile.bottom().is_some_and(|ace| ace.suit == card.suit)
                    && usize::from(card.value()) == i + 1
            });
            if !ordered {
                return Err(InvariantViolation::FoundationOrder { foundation });
            }
        }

        for (tableau, pile) in self.tableaus.iter().enumerate() {
            let Some(start) = pile.face_up_start() else {
                continue;
            };
            let run: Vec<Card> = pile.suffix(start).collect();
            if run.iter().any(|card| !card.face_up) {
                return Err(InvariantViolation::FaceDownAboveFaceUp { tableau });
            }
            if !is_valid_run(&run) {
                return Err(InvariantViolation::BrokenTableauRun { tableau });
            }
        }

        Ok(())
    }

    /// Assert the invariants in debug builds.
    pub(crate) fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("layout invariant violated: {violation}\n{self}");
            }
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "stock: {}", self.stock)?;
        writeln!(f, "waste: {}", self.waste)?;
        for (i, pile) in self.foundations.iter().enumerate() {
            writeln!(f, "foundation-{i}: {pile}")?;
        }
        for (i, pile) in self.tableaus.iter().enumerate() {
            writeln!(f, "tableau-{i}: {pile}")?;
        }
        Ok(())
    }
}
