//! Auto-complete: send everything that fits onto the foundations.

use crate::core::action::{Move, PileRef, TABLEAUS};
use crate::rules::executor::apply_move;
use crate::zones::Layout;

use super::policy::top_to_foundation;

/// Sources visited by one pass: tableau tops in index order, then the waste.
const PASS_ORDER: [PileRef; TABLEAUS + 1] = [
    PileRef::Tableau(0),
    PileRef::Tableau(1),
    PileRef::Tableau(2),
    PileRef::Tableau(3),
    PileRef::Tableau(4),
    PileRef::Tableau(5),
    PileRef::Tableau(6),
    PileRef::Waste,
];

/// Repeated foundation passes until a pass moves nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FoundationSweep;

impl FoundationSweep {
    /// The foundation move for the `position`-th source of a pass, if any.
    #[must_use]
    pub fn next_in_pass(layout: &Layout, position: usize) -> Option<Move> {
        PASS_ORDER
            .get(position)
            .and_then(|&source| top_to_foundation(layout, source))
    }

    /// Run one pass. Each source is tried once, after the moves before it.
    pub fn pass(layout: &mut Layout) -> usize {
        let mut moved = 0;
        for position in 0..PASS_ORDER.len() {
            let Some(mv) = Self::next_in_pass(layout, position) else {
                continue;
            };
            if apply_move(layout, &mv).is_ok() {
                moved += 1;
            }
        }
        moved
    }

    /// Run passes until one moves nothing. Returns the cards moved in total.
    pub fn sweep(layout: &mut Layout) -> usize {
        let mut total = 0;
        loop {
            let moved = Self::pass(layout);
            if moved == 0 {
                return total;
            }
            total += moved;
        }
    }
}
