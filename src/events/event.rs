//! Events the engine signals to its host.

use serde::{Deserialize, Serialize};

use crate::search::{AutoplayStats, Hint};

/// Why an autoplay run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HaltReason {
    /// The robot found nothing to do.
    NoMoreMoves,
    /// Only waste recycling was left, and it would repeat a cycle.
    Stalled,
    /// The host asked it to stop.
    Stopped,
    /// The game was won.
    GameWon,
    /// A new game was dealt mid-run.
    NewDeal,
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            HaltReason::NoMoreMoves => "no more moves",
            HaltReason::Stalled => "stalled",
            HaltReason::Stopped => "stopped",
            HaltReason::GameWon => "game won",
            HaltReason::NewDeal => "new deal",
        };
        f.write_str(text)
    }
}

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Pile contents changed; re-render.
    PilesChanged,
    /// The last card reached the foundations. Fires once per game.
    Won,
    /// Highlight these two locations.
    HintAvailable(Hint),
    /// The hint highlight expired or went stale.
    HintCleared,
    AutoplayStarted,
    AutoplayHalted {
        reason: HaltReason,
        stats: AutoplayStats,
    },
    /// The win celebration ran its course.
    CelebrationFinished,
}

impl GameEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::PilesChanged => EventKind::PilesChanged,
            GameEvent::Won => EventKind::Won,
            GameEvent::HintAvailable(_) => EventKind::HintAvailable,
            GameEvent::HintCleared => EventKind::HintCleared,
            GameEvent::AutoplayStarted => EventKind::AutoplayStarted,
            GameEvent::AutoplayHalted { .. } => EventKind::AutoplayHalted,
            GameEvent::CelebrationFinished => EventKind::CelebrationFinished,
        }
    }
}

/// Payload-free discriminant of [`GameEvent`], used to subscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    PilesChanged,
    Won,
    HintAvailable,
    HintCleared,
    AutoplayStarted,
    AutoplayHalted,
    CelebrationFinished,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::PileRef;

    #[test]
    fn test_kind_matches_variant() {
        let hint = GameEvent::HintAvailable(Hint {
            source: PileRef::Waste,
            destination: PileRef::Foundation(1),
        });
        assert_eq!(hint.kind(), EventKind::HintAvailable);

        let halted = GameEvent::AutoplayHalted {
            reason: HaltReason::Stalled,
            stats: AutoplayStats::default(),
        };
        assert_eq!(halted.kind(), EventKind::AutoplayHalted);
        assert_eq!(HaltReason::NoMoreMoves.to_string(), "no more moves");
    }
}
