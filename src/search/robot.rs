//! The autoplay policy.
//!
//! ## Step order
//!
//! 1. waste top to a foundation
//! 2. a tableau top to a foundation
//! 3. a tableau move that uncovers a face-down card, which includes a
//!    King-led run going to an empty tableau
//! 4. a King on top of the waste to an empty tableau
//! 5. draw from the stock, or recycle the waste
//!
//! Drawing succeeds for as long as any card is left in the stock or waste,
//! so the policy alone never runs dry. [`StallGuard`] spots the point where
//! another recycle would replay a cycle already seen.

use serde::{Deserialize, Serialize};

use crate::core::action::{Play, StockAction};
use crate::zones::Layout;

use super::policy::{
    can_draw, waste_king_to_empty, tableau_to_foundation, uncovering_move, waste_to_foundation,
    Policy,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct RobotPolicy;

impl Policy for RobotPolicy {
    fn name(&self) -> &'static str {
        "robot"
    }

    fn choose(&self, layout: &Layout) -> Option<Play> {
        waste_to_foundation(layout)
            .or_else(|| tableau_to_foundation(layout))
            .or_else(|| uncovering_move(layout))
            .or_else(|| waste_king_to_empty(layout))
            .map(Play::Move)
            .or_else(|| can_draw(layout).then_some(Play::Draw))
    }
}

/// Counters for one autoplay run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayStats {
    /// Ticks that ran a step, including the one that halted the run.
    pub ticks: u32,
    /// Card moves made.
    pub moves: u32,
    /// Cards drawn from the stock.
    pub draws: u32,
    /// Times the waste was turned back into the stock.
    pub recycles: u32,
}

impl AutoplayStats {
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    pub fn record_stock(&mut self, action: StockAction) {
        match action {
            StockAction::Drawn(_) => self.draws += 1,
            StockAction::Recycled(_) => self.recycles += 1,
            StockAction::NoOp => {}
        }
    }
}

/// Detects an autoplay run going round in circles.
///
/// Once the waste has been recycled, recycling it again with no card move
/// in between would bring back a layout the run has already passed through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StallGuard {
    recycled: bool,
    moved_since_recycle: bool,
}

impl StallGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a recycle now could still lead somewhere new.
    #[must_use]
    pub fn allows_recycle(&self) -> bool {
        !self.recycled || self.moved_since_recycle
    }

    /// True if `play` would be the stalling recycle.
    #[must_use]
    pub fn is_stalled(&self, layout: &Layout, play: &Play) -> bool {
        matches!(play, Play::Draw) && layout.stock.is_empty() && !self.allows_recycle()
    }

    pub fn record_move(&mut self) {
        self.moved_since_recycle = true;
    }

    pub fn record_stock(&mut self, action: StockAction) {
        if let StockAction::Recycled(_) = action {
            self.recycled = true;
            self.moved_since_recycle = false;
        }
    }
}
