//! Applying moves to a layout.
//!
//! The low-level placements ([`move_to_foundation`], [`move_to_tableau`])
//! only append to the destination: removing the cards from their source and
//! flipping the newly exposed tableau card is the caller's job.
//! [`apply_move`] does the whole thing for a [`Move`].

use crate::core::action::{Move, PileKind, PileRef, StockAction};
use crate::core::card::Card;
use crate::core::error::MoveError;
use crate::zones::Layout;

use super::validator::{can_place_on_foundation, can_place_on_tableau, is_valid_run};

/// Put a single card on a foundation.
///
/// Fails without touching anything unless `cards` holds exactly one card
/// that the foundation accepts.
pub fn move_to_foundation(layout: &mut Layout, cards: &[Card], foundation: usize) -> bool {
    let [card] = cards else {
        return false;
    };
    let Some(pile) = layout.foundations.get_mut(foundation) else {
        return false;
    };
    if !can_place_on_foundation(*card, pile) {
        return false;
    }
    pile.push(*card);
    true
}

/// Put a run of cards on a tableau, preserving their order.
///
/// Only the lead (first) card is checked against the destination.
pub fn move_to_tableau(layout: &mut Layout, cards: &[Card], tableau: usize) -> bool {
    let Some(&lead) = cards.first() else {
        return false;
    };
    let Some(pile) = layout.tableaus.get_mut(tableau) else {
        return false;
    };
    if !can_place_on_tableau(lead, pile) {
        return false;
    }
    pile.extend(cards.iter().copied());
    true
}

/// Draw one card, or turn the waste over when the stock is empty.
pub fn draw_from_stock(layout: &mut Layout) -> StockAction {
    if let Some(mut card) = layout.stock.pop() {
        card.flip(true);
        layout.waste.push(card);
        return StockAction::Drawn(card);
    }
    if layout.waste.is_empty() {
        return StockAction::NoOp;
    }
    let recycled = layout.waste.drain();
    let count = recycled.len();
    layout.stock = recycled
        .into_iter()
        .rev()
        .map(|mut card| {
            card.flip(false);
            card
        })
        .collect();
    StockAction::Recycled(count)
}

/// True when all 52 cards are on the foundations.
#[must_use]
pub fn check_win(layout: &Layout) -> bool {
    layout.is_complete()
}

/// Turn the exposed top card of a tableau face up.
///
/// Does nothing for other piles. Returns true if a card was turned.
pub fn reveal_source(layout: &mut Layout, source: PileRef) -> bool {
    match source {
        PileRef::Tableau(i) => layout.tableaus.get_mut(i).is_some_and(|pile| pile.reveal_top()),
        _ => false,
    }
}

/// Check a move against the current layout without applying it.
pub fn check_move(layout: &Layout, mv: &Move) -> Result<(), MoveError> {
    for pile in [mv.source, mv.destination] {
        if !pile.is_valid() {
            return Err(MoveError::NoSuchPile(pile));
        }
    }
    let Some(lead) = mv.lead() else {
        return Err(MoveError::EmptyMove);
    };
    if mv.source == mv.destination {
        return Err(MoveError::SamePile);
    }
    if mv.source == PileRef::Stock || mv.destination == PileRef::Stock {
        return Err(MoveError::StockIsNotPlayable);
    }

    let source = layout
        .pile(mv.source)
        .ok_or(MoveError::NoSuchPile(mv.source))?;
    if !source.ends_with(&mv.cards) {
        return Err(MoveError::NotOnSource(mv.source));
    }
    if let Some(card) = mv.cards.iter().find(|card| !card.face_up) {
        return Err(MoveError::FaceDown(*card));
    }
    if mv.len() > 1 {
        if matches!(mv.source.kind(), PileKind::Waste | PileKind::Foundation) {
            return Err(MoveError::SingleCardSource(mv.source));
        }
        if !is_valid_run(&mv.cards) {
            return Err(MoveError::BrokenRun);
        }
    }

    let rejected = MoveError::Rejected {
        card: lead,
        destination: mv.destination,
    };
    match mv.destination {
        PileRef::Foundation(i) => {
            if mv.len() != 1 {
                return Err(MoveError::FoundationTakesOneCard);
            }
            if !can_place_on_foundation(lead, &layout.foundations[i]) {
                return Err(rejected);
            }
        }
        PileRef::Tableau(i) => {
            if !can_place_on_tableau(lead, &layout.tableaus[i]) {
                return Err(rejected);
            }
        }
        PileRef::Stock | PileRef::Waste => return Err(rejected),
    }
    Ok(())
}

/// Validate and perform a move: lift the cards off the source, place them,
/// and turn over the newly exposed tableau card.
///
/// On error the layout is unchanged.
pub fn apply_move(layout: &mut Layout, mv: &Move) -> Result<(), MoveError> {
    check_move(layout, mv)?;

    let source = layout
        .pile_mut(mv.source)
        .ok_or(MoveError::NoSuchPile(mv.source))?;
    let cards = source
        .take_top(mv.len())
        .ok_or(MoveError::NotOnSource(mv.source))?;

    let placed = match mv.destination {
        PileRef::Foundation(i) => move_to_foundation(layout, &cards, i),
        PileRef::Tableau(i) => move_to_tableau(layout, &cards, i),
        PileRef::Stock | PileRef::Waste => false,
    };
    if !placed {
        if let Some(source) = layout.pile_mut(mv.source) {
            source.extend(cards);
        }
        return Err(MoveError::Rejected {
            card: mv.cards[0],
            destination: mv.destination,
        });
    }

    reveal_source(layout, mv.source);
    Ok(())
}
