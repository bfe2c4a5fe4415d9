//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the deal stream. `None` seeds from the OS on every new game.
    pub seed: Option<u64>,

    /// Delay between two autoplay moves, in milliseconds.
    pub autoplay_interval_ms: u64,

    /// How long a hint highlight stays up, in milliseconds.
    pub hint_duration_ms: u64,

    /// Length of the win celebration, in milliseconds.
    pub celebration_ms: u64,

    /// Halt autoplay when a full pass through the stock made no progress.
    pub stall_detection: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            autoplay_interval_ms: 800,
            hint_duration_ms: 1500,
            celebration_ms: 15_000,
            stall_detection: true,
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed so deals are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = duration_ms(interval);
        self
    }

    #[must_use]
    pub fn with_hint_duration(mut self, duration: Duration) -> Self {
        self.hint_duration_ms = duration_ms(duration);
        self
    }

    #[must_use]
    pub fn with_celebration(mut self, duration: Duration) -> Self {
        self.celebration_ms = duration_ms(duration);
        self
    }

    #[must_use]
    pub fn with_stall_detection(mut self, enabled: bool) -> Self {
        self.stall_detection = enabled;
        self
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        // A zero interval would make the repeating timer fire forever in one advance.
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }

    #[must_use]
    pub fn hint_duration(&self) -> Duration {
        Duration::from_millis(self.hint_duration_ms)
    }

    #[must_use]
    pub fn celebration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
