//! Pile references and moves.
//!
//! A [`Move`] names a contiguous run of cards taken from the top of a
//! source pile and the pile it should land on. A [`Play`] is one unit of
//! progress a search policy can choose: a move, or a stock draw.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::zones::Layout;

/// Number of foundation piles.
pub const FOUNDATIONS: usize = 4;

/// Number of tableau piles.
pub const TABLEAUS: usize = 7;

/// Reference to one of the thirteen piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

/// The kind of a pile, without its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

impl PileRef {
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileRef::Stock => PileKind::Stock,
            PileRef::Waste => PileKind::Waste,
            PileRef::Foundation(_) => PileKind::Foundation,
            PileRef::Tableau(_) => PileKind::Tableau,
        }
    }

    /// True if the index (if any) names an existing pile.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            PileRef::Stock | PileRef::Waste => true,
            PileRef::Foundation(i) => i < FOUNDATIONS,
            PileRef::Tableau(i) => i < TABLEAUS,
        }
    }

    /// Every pile, stock first, tableaus last.
    pub fn all() -> impl Iterator<Item = PileRef> {
        [PileRef::Stock, PileRef::Waste]
            .into_iter()
            .chain((0..FOUNDATIONS).map(PileRef::Foundation))
            .chain((0..TABLEAUS).map(PileRef::Tableau))
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Stock => write!(f, "stock"),
            PileRef::Waste => write!(f, "waste"),
            PileRef::Foundation(i) => write!(f, "foundation-{i}"),
            PileRef::Tableau(i) => write!(f, "tableau-{i}"),
        }
    }
}

/// Cards moving as a unit. A King-led run is at most 13 long.
pub type MoveCards = SmallVec<[Card; 13]>;

/// A run of cards leaving the top of `source` for `destination`.
///
/// `cards` is ordered bottom-most first, exactly as it sits in the source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub cards: MoveCards,
    pub source: PileRef,
    pub destination: PileRef,
}

impl Move {
    /// Create a move from explicit cards.
    #[must_use]
    pub fn new(cards: &[Card], source: PileRef, destination: PileRef) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
            source,
            destination,
        }
    }

    /// Take the cards from `start_index` to the top of `source`.
    ///
    /// Returns `None` if the pile does not exist or `start_index` is past
    /// its top.
    #[must_use]
    pub fn from_pile(
        layout: &Layout,
        source: PileRef,
        start_index: usize,
        destination: PileRef,
    ) -> Option<Self> {
        let pile = layout.pile(source)?;
        if start_index >= pile.len() {
            return None;
        }
        Some(Self {
            cards: pile.suffix(start_index).collect(),
            source,
            destination,
        })
    }

    /// Take only the top card of `source`.
    #[must_use]
    pub fn top_of(layout: &Layout, source: PileRef, destination: PileRef) -> Option<Self> {
        let len = layout.pile(source)?.len();
        Self::from_pile(layout, source, len.checked_sub(1)?, destination)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The bottom-most card of the run, the one that must fit the destination.
    #[must_use]
    pub fn lead(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// True if performing the move would expose a face-down card.
    #[must_use]
    pub fn uncovers(&self, layout: &Layout) -> bool {
        let Some(pile) = layout.pile(self.source) else {
            return false;
        };
        pile.len()
            .checked_sub(self.cards.len() + 1)
            .and_then(|below| pile.get(below))
            .is_some_and(|card| !card.face_up)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lead() {
            Some(lead) if self.cards.len() > 1 => write!(
                f,
                "{lead}..({} cards) {} -> {}",
                self.cards.len(),
                self.source,
                self.destination
            ),
            Some(lead) => write!(f, "{lead} {} -> {}", self.source, self.destination),
            None => write!(f, "(empty) {} -> {}", self.source, self.destination),
        }
    }
}

/// One step a policy can take.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Play {
    Move(Move),
    /// Draw from the stock, or recycle the waste when the stock is empty.
    Draw,
}

/// Outcome of a stock draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    /// One card went from stock to waste, face up.
    Drawn(Card),
    /// The waste was turned back into the stock; carries the card count.
    Recycled(usize),
    /// Stock and waste were both empty.
    NoOp,
}
