//! Game state: the table, the game phase and the undo history.
//!
//! ## Phases
//!
//! `Setup -> Playing -> Won`. Dealing moves `Setup` straight to `Playing`;
//! a new deal from `Playing` or `Won` goes back through `Setup`, discarding
//! the piles and the history.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::{HistoryError, InvariantViolation};
use crate::history::History;
use crate::rules::executor::check_win;
use crate::zones::Layout;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No cards dealt yet.
    #[default]
    Setup,
    /// Cards are on the table and moves are accepted.
    Playing,
    /// All 52 cards reached the foundations. Terminal until the next deal.
    Won,
}

/// Everything a single game owns.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    /// The piles.
    pub layout: Layout,

    phase: Phase,

    history: History,
}

impl GameState {
    /// Create an undealt game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to `Setup`, then deal `deck` and enter `Playing`.
    pub fn deal(&mut self, deck: Vec<Card>) -> Result<(), InvariantViolation> {
        self.phase = Phase::Setup;
        self.history.clear();
        self.layout = Layout::empty();
        self.layout = Layout::deal(deck)?;
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Continue from a prepared layout, discarding the history.
    ///
    /// The layout must satisfy every structural invariant. A complete
    /// layout starts out `Won`.
    pub fn set_layout(&mut self, layout: Layout) -> Result<(), InvariantViolation> {
        layout.check_invariants()?;
        self.history.clear();
        self.phase = if check_win(&layout) {
            Phase::Won
        } else {
            Phase::Playing
        };
        self.layout = layout;
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while moves are accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Move to `Won` if the layout is complete.
    ///
    /// Returns true only on the transition itself, so a caller signalling
    /// the win does so exactly once.
    pub fn check_win(&mut self) -> bool {
        if self.phase == Phase::Playing && check_win(&self.layout) {
            self.phase = Phase::Won;
            return true;
        }
        false
    }

    // === History ===

    /// Record the current layout for undo.
    pub fn snapshot(&mut self) {
        self.history.snapshot(&self.layout);
    }

    /// Drop a snapshot recorded by a command that changed nothing.
    pub fn discard_snapshot(&mut self) {
        self.history.discard_last();
    }

    /// Restore the most recent snapshot. The phase is left alone: `Won`
    /// stays terminal, so callers refuse undo once the game is over.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo(&mut self.layout)
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{standard_deck, Rank, Suit};
    use crate::zones::Pile;

    #[test]
    fn test_new_is_setup() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Setup);
        assert!(!state.is_active());
        assert_eq!(state.layout.card_count(), 0);
    }

    #[test]
    fn test_deal_enters_playing_and_clears_history() {
        let mut state = GameState::new();
        state.deal(standard_deck()).unwrap();
        state.snapshot();
        assert_eq!(state.history().len(), 1);

        state.deal(standard_deck()).unwrap();
        assert_eq!(state.phase(), Phase::Playing);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_bad_deck_stays_in_setup() {
        let mut state = GameState::new();
        assert!(state.deal(Vec::new()).is_err());
        assert_eq!(state.phase(), Phase::Setup);
    }

    #[test]
    fn test_set_layout_checks_invariants() {
        let mut state = GameState::new();
        assert_eq!(
            state.set_layout(Layout::empty()),
            Err(InvariantViolation::CardCount { found: 0 })
        );
        assert_eq!(state.phase(), Phase::Setup);

        let dealt = Layout::deal(standard_deck()).unwrap();
        state.set_layout(dealt.clone()).unwrap();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.layout, dealt);
    }

    #[test]
    fn test_win_transition_happens_once() {
        let mut state = GameState::new();
        state.deal(standard_deck()).unwrap();
        state.snapshot();

        let mut layout = Layout::empty();
        for (i, suit) in Suit::ALL.iter().enumerate() {
            layout.foundations[i] =
                Rank::ALL.iter().map(|&rank| Card::face_up(*suit, rank)).collect::<Pile>();
        }
        state.layout = layout;

        assert!(state.check_win());
        assert!(!state.check_win());
        assert_eq!(state.phase(), Phase::Won);
        assert!(!state.is_active());
    }

    #[test]
    fn test_undo_keeps_phase() {
        let mut state = GameState::new();
        state.deal(standard_deck()).unwrap();
        let dealt = state.layout.clone();
        state.snapshot();
        state.layout.stock.clear();

        state.undo().unwrap();
        assert_eq!(state.layout, dealt);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.undo(), Err(HistoryError::Empty));
    }
}
