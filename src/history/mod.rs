//! Snapshot-based undo.
//!
//! Before anything mutates the table, the caller records a [`Snapshot`] of
//! the current layout. Undo pops the most recent one and puts every pile
//! back exactly as it was, card orientation included.
//!
//! Snapshots share structure with the live layout (`im` vectors), so
//! recording one per move costs next to nothing.
//!
//! ## Speculative snapshots
//!
//! A command that may turn out to change nothing records first and calls
//! [`History::discard_last`] if it did nothing, so history never holds
//! no-op entries.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::HistoryError;
use crate::zones::Layout;

/// Pile contents at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    layout: Layout,
}

impl Snapshot {
    /// Capture the current layout.
    #[must_use]
    pub fn capture(layout: &Layout) -> Self {
        Self {
            layout: layout.clone(),
        }
    }

    /// The recorded layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

/// Append-only undo stack. Unbounded for the length of a game.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<Snapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the layout as it is now.
    pub fn snapshot(&mut self, layout: &Layout) {
        self.snapshots.push_back(Snapshot::capture(layout));
    }

    /// Drop the most recent snapshot without restoring it.
    ///
    /// Used when the command that recorded it changed nothing.
    pub fn discard_last(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Restore the most recent snapshot into `layout`.
    pub fn undo(&mut self, layout: &mut Layout) -> Result<(), HistoryError> {
        let snapshot = self.snapshots.pop_back().ok_or(HistoryError::Empty)?;
        *layout = snapshot.layout;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::standard_deck;
    use crate::rules::executor::draw_from_stock;

    #[test]
    fn test_undo_empty() {
        let mut history = History::new();
        let mut layout = Layout::empty();
        assert_eq!(history.undo(&mut layout), Err(HistoryError::Empty));
    }

    #[test]
    fn test_round_trip_restores_orientation() {
        let mut layout = Layout::deal(standard_deck()).unwrap();
        let before = layout.clone();
        let mut history = History::new();

        history.snapshot(&layout);
        draw_from_stock(&mut layout);
        draw_from_stock(&mut layout);
        assert_eq!(layout.waste.len(), 2);

        history.undo(&mut layout).unwrap();
        assert_eq!(layout, before);
        assert!(layout.stock.iter().all(|card| !card.face_up));
        assert!(history.is_empty());
    }

    #[test]
    fn test_snapshots_stack() {
        let mut layout = Layout::deal(standard_deck()).unwrap();
        let mut history = History::new();
        let mut states = Vec::new();

        for _ in 0..3 {
            states.push(layout.clone());
            history.snapshot(&layout);
            draw_from_stock(&mut layout);
        }
        assert_eq!(history.len(), 3);

        while let Some(expected) = states.pop() {
            history.undo(&mut layout).unwrap();
            assert_eq!(layout, expected);
        }
    }

    #[test]
    fn test_discard_last() {
        let layout = Layout::deal(standard_deck()).unwrap();
        let mut history = History::new();
        history.snapshot(&layout);
        let dropped = history.discard_last();
        assert_eq!(dropped.as_ref().map(Snapshot::layout), Some(&layout));
        assert!(history.discard_last().is_none());
        assert!(history.is_empty());
    }
}
