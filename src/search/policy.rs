//! Policy trait and the candidate generators the policies share.
//!
//! Every generator scans in a fixed order, lowest pile index first, and
//! returns the first legal candidate it meets. Ties are therefore always
//! broken the same way for the same layout.

use crate::core::action::{Move, PileRef, Play, FOUNDATIONS, TABLEAUS};
use crate::core::card::Card;
use crate::rules::validator::{can_place_on_foundation, can_place_on_tableau};
use crate::zones::Layout;

/// A deterministic move-selection strategy.
pub trait Policy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Pick the next play for `layout`, or `None` if the policy has nothing.
    fn choose(&self, layout: &Layout) -> Option<Play>;
}

/// Lowest-index foundation that accepts `card`.
#[must_use]
pub fn foundation_for(layout: &Layout, card: Card) -> Option<usize> {
    (0..FOUNDATIONS).find(|&i| can_place_on_foundation(card, &layout.foundations[i]))
}

/// Top card of `source` to the first foundation that takes it.
#[must_use]
pub fn top_to_foundation(layout: &Layout, source: PileRef) -> Option<Move> {
    let card = layout.top(source).filter(|card| card.face_up)?;
    let foundation = foundation_for(layout, card)?;
    Some(Move::new(&[card], source, PileRef::Foundation(foundation)))
}

/// Waste top to a foundation.
#[must_use]
pub fn waste_to_foundation(layout: &Layout) -> Option<Move> {
    top_to_foundation(layout, PileRef::Waste)
}

/// First tableau top (by tableau index) that fits a foundation.
#[must_use]
pub fn tableau_to_foundation(layout: &Layout) -> Option<Move> {
    (0..TABLEAUS).find_map(|i| top_to_foundation(layout, PileRef::Tableau(i)))
}

/// A tableau-to-tableau move that exposes a face-down card.
///
/// The whole face-up run of the source is moved; sources and destinations
/// are scanned in index order.
#[must_use]
pub fn uncovering_move(layout: &Layout) -> Option<Move> {
    (0..TABLEAUS).find_map(|src| {
        let start = layout.tableaus[src].face_up_start().filter(|&start| start > 0)?;
        run_to_other_tableau(layout, src, start, |_| true)
    })
}

/// Any other tableau-to-tableau move of a whole face-up run.
///
/// A run that already starts at the base of its pile is never sent to an
/// empty tableau: that would only relocate it.
#[must_use]
pub fn rearranging_move(layout: &Layout) -> Option<Move> {
    (0..TABLEAUS).find_map(|src| {
        let start = layout.tableaus[src].face_up_start()?;
        run_to_other_tableau(layout, src, start, |dst| {
            start > 0 || !layout.tableaus[dst].is_empty()
        })
    })
}

/// Waste top to the first tableau that takes it.
#[must_use]
pub fn waste_to_tableau(layout: &Layout) -> Option<Move> {
    let card = layout.waste.top()?;
    let dst = (0..TABLEAUS).find(|&dst| can_place_on_tableau(card, &layout.tableaus[dst]))?;
    Some(Move::new(&[card], PileRef::Waste, PileRef::Tableau(dst)))
}

/// A King on top of the waste to the lowest-index empty tableau.
///
/// Tableau Kings with cards beneath them are already found by
/// [`uncovering_move`]; a King at the base of its pile is left alone.
#[must_use]
pub fn waste_king_to_empty(layout: &Layout) -> Option<Move> {
    let dst = PileRef::Tableau(layout.first_empty_tableau()?);
    layout
        .waste
        .top()
        .filter(|card| card.is_king())
        .map(|king| Move::new(&[king], PileRef::Waste, dst))
}

/// True if drawing would change anything.
#[must_use]
pub fn can_draw(layout: &Layout) -> bool {
    !layout.stock.is_empty() || !layout.waste.is_empty()
}

fn run_to_other_tableau(
    layout: &Layout,
    src: usize,
    start: usize,
    allow: impl Fn(usize) -> bool,
) -> Option<Move> {
    let lead = layout.tableaus[src].get(start)?;
    let dst = (0..TABLEAUS).find(|&dst| {
        dst != src && allow(dst) && can_place_on_tableau(lead, &layout.tableaus[dst])
    })?;
    Move::from_pile(layout, PileRef::Tableau(src), start, PileRef::Tableau(dst))
}
