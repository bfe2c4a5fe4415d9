//! Read-only hint search.

use serde::{Deserialize, Serialize};

use crate::core::action::{Move, PileRef, Play};
use crate::zones::Layout;

use super::policy::{
    rearranging_move, tableau_to_foundation, uncovering_move, waste_to_foundation,
    waste_to_tableau, Policy,
};

/// The two locations a hint highlights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    pub source: PileRef,
    pub destination: PileRef,
}

impl From<&Move> for Hint {
    fn from(mv: &Move) -> Self {
        Self {
            source: mv.source,
            destination: mv.destination,
        }
    }
}

/// Suggests the first move found, in priority order:
///
/// 1. waste top to a foundation
/// 2. a tableau top to a foundation
/// 3. a tableau move that uncovers a face-down card
/// 4. any other tableau-to-tableau move
/// 5. waste top to a tableau
///
/// Never suggests drawing.
#[derive(Clone, Copy, Debug, Default)]
pub struct HintPolicy;

impl HintPolicy {
    /// The move behind the hint, if any.
    #[must_use]
    pub fn find(layout: &Layout) -> Option<Move> {
        waste_to_foundation(layout)
            .or_else(|| tableau_to_foundation(layout))
            .or_else(|| uncovering_move(layout))
            .or_else(|| rearranging_move(layout))
            .or_else(|| waste_to_tableau(layout))
    }

    #[must_use]
    pub fn hint(layout: &Layout) -> Option<Hint> {
        Self::find(layout).as_ref().map(Hint::from)
    }
}

impl Policy for HintPolicy {
    fn name(&self) -> &'static str {
        "hint"
    }

    fn choose(&self, layout: &Layout) -> Option<Play> {
        Self::find(layout).map(Play::Move)
    }
}
