//! Cancellable timers on a logical clock.
//!
//! Nothing here sleeps. The host tells the engine how much time passed and
//! the scheduler hands back the timers that came due, earliest first. Tests
//! and benchmarks drive time explicitly, so timer behavior is deterministic.

use std::time::Duration;

/// Shortest period a repeating timer may have.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What a timer is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// One autoplay step.
    AutoplayTick,
    /// Take the hint highlight down.
    HintExpiry,
    /// End of the win celebration.
    Celebration,
}

#[derive(Clone, Debug)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    due: Duration,
    period: Option<Duration>,
}

#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    timers: Vec<Timer>,
    next_id: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical time since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `kind` once, `delay` from now.
    pub fn schedule_once(&mut self, kind: TimerKind, delay: Duration) -> TimerId {
        self.insert(kind, delay, None)
    }

    /// Fire `kind` every `period`, the first time one period from now.
    pub fn schedule_repeating(&mut self, kind: TimerKind, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(kind, period, Some(period))
    }

    /// Remove a timer. Returns false if it had already fired or been cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Fire the earliest timer due at or before `deadline`.
    ///
    /// The clock moves to the timer's due time. When nothing more is due the
    /// clock moves to `deadline` and `None` is returned. Repeating timers are
    /// re-armed before being returned, so cancelling one between calls stops
    /// it for good.
    pub fn fire_next(&mut self, deadline: Duration) -> Option<(TimerId, TimerKind)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index);

        let Some(index) = index else {
            self.now = self.now.max(deadline);
            return None;
        };

        let timer = &mut self.timers[index];
        let fired = (timer.id, timer.kind);
        self.now = self.now.max(timer.due);
        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(fired)
    }

    /// Let `elapsed` pass and return every timer that fired, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, TimerKind)> {
        let deadline = self.now + elapsed;
        std::iter::from_fn(|| self.fire_next(deadline)).collect()
    }

    fn insert(&mut self, kind: TimerKind, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            due: self.now + delay,
            period,
        });
        id
    }
}
