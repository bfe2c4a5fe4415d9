//! The game façade.
//!
//! [`Klondike`] owns the game state, undo history, timers and listeners,
//! and is the only thing a host talks to. Every command runs to completion
//! synchronously; time-driven behavior (autoplay ticks, hint expiry, the win
//! celebration) happens inside [`Klondike::advance`].
//!
//! ## Single writer
//!
//! While autoplay runs it is the only actor allowed to change the table:
//! user commands are refused with [`MoveError::AutoplayActive`]. Once the
//! game is won, commands that would change the table are refused with
//! [`MoveError::GameOver`] until the next deal.
//!
//! ## Example
//!
//! ```
//! use klondike_engine::engine::Klondike;
//! use klondike_engine::core::Phase;
//!
//! let mut game = Klondike::builder().with_seed(42).build();
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.stock().len(), 24);
//!
//! game.draw_from_stock();
//! assert_eq!(game.waste().len(), 1);
//! assert!(game.undo());
//! assert!(game.waste().is_empty());
//! ```

use std::time::Duration;

use crate::core::action::{Move, PileKind, PileRef, Play, StockAction, FOUNDATIONS};
use crate::core::card::{standard_deck, Card, Rank, Suit};
use crate::core::config::EngineConfig;
use crate::core::error::{InvariantViolation, MoveError};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::events::{EventBus, EventKind, GameEvent, HaltReason, SubscriptionId};
use crate::rules::executor;
use crate::search::policy::top_to_foundation;
use crate::search::{
    AutoplayStats, FoundationSweep, Hint, HintPolicy, Policy, RobotPolicy, StallGuard,
};
use crate::zones::{Layout, Pile};

use super::scheduler::{Scheduler, TimerId, TimerKind};

#[derive(Clone, Copy, Debug)]
struct AutoplayRun {
    timer: TimerId,
    stats: AutoplayStats,
    guard: StallGuard,
}

#[derive(Clone, Copy, Debug)]
struct ActiveHint {
    hint: Hint,
    timer: TimerId,
}

/// A Klondike game and everything that drives it.
#[derive(Debug)]
pub struct Klondike {
    state: GameState,
    config: EngineConfig,
    rng: GameRng,
    seed: Option<u64>,
    events: EventBus,
    scheduler: Scheduler,
    autoplay: Option<AutoplayRun>,
    last_stats: AutoplayStats,
    hint: Option<ActiveHint>,
    celebration: Option<TimerId>,
}

impl Default for Klondike {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Klondike {
    /// Create a game and deal the first hand.
    ///
    /// With a configured seed the first deal uses that seed and later deals
    /// follow deterministically from it.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let first_seed = config.seed;
        let mut game = Self::undealt(config);
        match first_seed {
            Some(seed) => game.deal_with_seed(seed),
            None => game.deal_new_game(),
        }
        game
    }

    /// Create a game that continues from a prepared table.
    ///
    /// Fails if `layout` breaks a structural invariant. Such a game has no
    /// deal seed.
    pub fn from_layout(config: EngineConfig, layout: Layout) -> Result<Self, InvariantViolation> {
        let mut game = Self::undealt(config);
        game.state.set_layout(layout)?;
        Ok(game)
    }

    fn undealt(config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            state: GameState::new(),
            config,
            rng,
            seed: None,
            events: EventBus::new(),
            scheduler: Scheduler::new(),
            autoplay: None,
            last_stats: AutoplayStats::default(),
            hint: None,
            celebration: None,
        }
    }

    #[must_use]
    pub fn builder() -> KlondikeBuilder {
        KlondikeBuilder::new()
    }

    // === Queries ===

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.state.layout
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.state.layout.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.state.layout.waste
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.state.layout.foundations.get(index)
    }

    #[must_use]
    pub fn tableau(&self, index: usize) -> Option<&Pile> {
        self.state.layout.tableaus.get(index)
    }

    /// True while the game accepts moves.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Undo steps available.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state.history().len()
    }

    /// Seed of the current deal. Dealing this seed again gives the same game.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Counters of the running autoplay, or of the last one if none is running.
    #[must_use]
    pub fn autoplay_stats(&self) -> AutoplayStats {
        self.autoplay.map_or(self.last_stats, |run| run.stats)
    }

    /// The hint currently on display.
    #[must_use]
    pub fn current_hint(&self) -> Option<Hint> {
        self.hint.map(|active| active.hint)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Logical time the engine has been advanced by.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    // === Listeners ===

    pub fn subscribe(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&GameEvent) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(kind, listener)
    }

    pub fn subscribe_all(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        self.events.subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // === Dealing ===

    /// Shuffle a fresh deck and deal it.
    pub fn deal_new_game(&mut self) {
        let seed = self.rng.next_seed();
        self.deal_with_seed(seed);
    }

    /// Deal the game identified by `seed`.
    ///
    /// Any running autoplay halts and the undo history starts over.
    pub fn deal_with_seed(&mut self, seed: u64) {
        self.halt_autoplay(HaltReason::NewDeal);
        self.clear_hint();
        if let Some(timer) = self.celebration.take() {
            self.scheduler.cancel(timer);
        }

        let mut deck = standard_deck();
        GameRng::new(seed).shuffle(&mut deck);
        match self.state.deal(deck) {
            Ok(()) => {
                self.seed = Some(seed);
                tracing::info!(seed, "dealt new game");
            }
            Err(violation) => tracing::error!(seed, %violation, "deal failed"),
        }
        self.events.emit(&GameEvent::PilesChanged);
    }

    // === User commands ===

    /// Draw one card, or recycle the waste. False if refused or nothing to draw.
    pub fn draw_from_stock(&mut self) -> bool {
        self.try_draw().is_ok()
    }

    pub fn try_draw(&mut self) -> Result<StockAction, MoveError> {
        self.check_user_turn()?;
        self.state.snapshot();
        let action = executor::draw_from_stock(&mut self.state.layout);
        if action == StockAction::NoOp {
            self.state.discard_snapshot();
            return Err(MoveError::NothingToPlay);
        }
        tracing::debug!(?action, "stock");
        self.after_mutation();
        Ok(action)
    }

    /// Perform `mv` if it is legal. False leaves the game untouched.
    pub fn attempt_move(&mut self, mv: &Move) -> bool {
        self.try_move(mv).is_ok()
    }

    pub fn try_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        let result = self
            .check_user_turn()
            .and_then(|()| self.apply_recorded(mv));
        if let Err(error) = &result {
            tracing::debug!(%mv, %error, "move rejected");
        }
        result
    }

    /// Move the cards from `start` to the top of `source` onto `destination`.
    pub fn move_cards(&mut self, source: PileRef, start: usize, destination: PileRef) -> bool {
        Move::from_pile(&self.state.layout, source, start, destination)
            .is_some_and(|mv| self.attempt_move(&mv))
    }

    /// Send the top card of the waste or a tableau to a foundation.
    pub fn activate(&mut self, source: PileRef) -> bool {
        self.try_activate(source).is_ok()
    }

    pub fn try_activate(&mut self, source: PileRef) -> Result<(), MoveError> {
        self.check_user_turn()?;
        if !source.is_valid() {
            return Err(MoveError::NoSuchPile(source));
        }
        let mv = match source.kind() {
            PileKind::Waste | PileKind::Tableau => top_to_foundation(&self.state.layout, source),
            PileKind::Stock | PileKind::Foundation => None,
        }
        .ok_or(MoveError::NothingToPlay)?;
        self.try_move(&mv)
    }

    /// Restore the table to before the last change. False if there is none,
    /// autoplay is running or the game is already won.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "undo refused");
                false
            }
        }
    }

    pub fn try_undo(&mut self) -> Result<(), MoveError> {
        self.check_user_turn()?;
        self.state.undo()?;
        self.state.layout.debug_check();
        self.clear_hint();
        tracing::debug!(remaining = self.history_len(), "undo");
        self.events.emit(&GameEvent::PilesChanged);
        Ok(())
    }

    /// Move everything that fits onto the foundations. One undo step.
    ///
    /// Returns the number of cards moved.
    pub fn auto_complete_foundations(&mut self) -> usize {
        if let Err(error) = self.check_user_turn() {
            tracing::debug!(%error, "auto-complete refused");
            return 0;
        }
        self.state.snapshot();
        let moved = FoundationSweep::sweep(&mut self.state.layout);
        if moved == 0 {
            self.state.discard_snapshot();
        } else {
            tracing::debug!(moved, "auto-complete");
            self.after_mutation();
        }
        moved
    }

    /// The move the player could make next, highlighted until it expires or
    /// the table changes.
    pub fn request_hint(&mut self) -> Option<Hint> {
        if let Err(error) = self.check_user_turn() {
            tracing::debug!(%error, "hint refused");
            return None;
        }
        let Some(hint) = HintPolicy::hint(&self.state.layout) else {
            tracing::debug!("no hint available");
            return None;
        };
        self.clear_hint();
        let timer = self
            .scheduler
            .schedule_once(TimerKind::HintExpiry, self.config.hint_duration());
        self.hint = Some(ActiveHint { hint, timer });
        tracing::debug!(source = %hint.source, destination = %hint.destination, "hint");
        self.events.emit(&GameEvent::HintAvailable(hint));
        Some(hint)
    }

    /// Stop autoplay and put every card on the foundations. One undo step.
    ///
    /// Suits already started on a foundation stay there.
    pub fn force_complete(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.halt_autoplay(HaltReason::Stopped);
        self.state.layout = completed_layout(&self.state.layout);
        tracing::info!("force complete");
        self.after_mutation();
        true
    }

    // === Autoplay ===

    /// Start the robot. False if it is already running or the game is over.
    pub fn start_autoplay(&mut self) -> bool {
        if self.autoplay.is_some() || !self.state.is_active() {
            return false;
        }
        self.clear_hint();
        let timer = self
            .scheduler
            .schedule_repeating(TimerKind::AutoplayTick, self.config.autoplay_interval());
        self.autoplay = Some(AutoplayRun {
            timer,
            stats: AutoplayStats::default(),
            guard: StallGuard::new(),
        });
        tracing::info!(interval_ms = self.config.autoplay_interval_ms, "autoplay started");
        self.events.emit(&GameEvent::AutoplayStarted);
        true
    }

    /// Stop the robot. No tick fires after this returns.
    pub fn stop_autoplay(&mut self) {
        self.halt_autoplay(HaltReason::Stopped);
    }

    /// Run one robot step now.
    ///
    /// Returns true if the step changed the table. When the robot has
    /// nothing left to do, or would only repeat itself, autoplay halts.
    pub fn autoplay_tick(&mut self) -> bool {
        let Some(mut run) = self.autoplay else {
            return false;
        };
        if !self.state.is_active() {
            self.halt_autoplay(HaltReason::GameWon);
            return false;
        }
        run.stats.ticks += 1;

        let outcome = match RobotPolicy.choose(&self.state.layout) {
            None => Err(HaltReason::NoMoreMoves),
            Some(play)
                if self.config.stall_detection
                    && run.guard.is_stalled(&self.state.layout, &play) =>
            {
                Err(HaltReason::Stalled)
            }
            Some(Play::Move(mv)) => {
                self.state.snapshot();
                match executor::apply_move(&mut self.state.layout, &mv) {
                    Ok(()) => {
                        tracing::trace!(%mv, "robot move");
                        run.stats.record_move();
                        run.guard.record_move();
                        Ok(())
                    }
                    Err(error) => {
                        self.state.discard_snapshot();
                        tracing::warn!(%mv, %error, "robot chose an illegal move");
                        Err(HaltReason::NoMoreMoves)
                    }
                }
            }
            Some(Play::Draw) => {
                self.state.snapshot();
                let action = executor::draw_from_stock(&mut self.state.layout);
                tracing::trace!(?action, "robot draw");
                run.stats.record_stock(action);
                run.guard.record_stock(action);
                Ok(())
            }
        };

        self.autoplay = Some(run);
        match outcome {
            Ok(()) => {
                self.after_mutation();
                true
            }
            Err(reason) => {
                self.halt_autoplay(reason);
                false
            }
        }
    }

    // === Time ===

    /// Let `elapsed` pass, firing whatever timers come due.
    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.scheduler.now() + elapsed;
        while let Some((id, kind)) = self.scheduler.fire_next(deadline) {
            self.on_timer(id, kind);
        }
    }

    fn on_timer(&mut self, id: TimerId, kind: TimerKind) {
        match kind {
            TimerKind::AutoplayTick => {
                if self.autoplay.is_some_and(|run| run.timer == id) {
                    self.autoplay_tick();
                }
            }
            TimerKind::HintExpiry => {
                if self.hint.is_some_and(|active| active.timer == id) {
                    self.hint = None;
                    self.events.emit(&GameEvent::HintCleared);
                }
            }
            TimerKind::Celebration => {
                if self.celebration == Some(id) {
                    self.celebration = None;
                    self.events.emit(&GameEvent::CelebrationFinished);
                }
            }
        }
    }

    // === Internals ===

    fn check_user_turn(&self) -> Result<(), MoveError> {
        if self.autoplay.is_some() {
            return Err(MoveError::AutoplayActive);
        }
        if !self.state.is_active() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn apply_recorded(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.state.snapshot();
        if let Err(error) = executor::apply_move(&mut self.state.layout, mv) {
            self.state.discard_snapshot();
            return Err(error);
        }
        self.after_mutation();
        Ok(())
    }

    fn after_mutation(&mut self) {
        self.state.layout.debug_check();
        self.clear_hint();
        self.events.emit(&GameEvent::PilesChanged);
        if self.state.check_win() {
            tracing::info!(seed = ?self.seed, "game won");
            self.events.emit(&GameEvent::Won);
            let timer = self
                .scheduler
                .schedule_once(TimerKind::Celebration, self.config.celebration());
            self.celebration = Some(timer);
            self.halt_autoplay(HaltReason::GameWon);
        }
    }

    fn clear_hint(&mut self) {
        if let Some(active) = self.hint.take() {
            self.scheduler.cancel(active.timer);
            self.events.emit(&GameEvent::HintCleared);
        }
    }

    fn halt_autoplay(&mut self, reason: HaltReason) {
        let Some(run) = self.autoplay.take() else {
            return;
        };
        self.scheduler.cancel(run.timer);
        self.last_stats = run.stats;
        tracing::info!(
            %reason,
            ticks = run.stats.ticks,
            moves = run.stats.moves,
            draws = run.stats.draws,
            recycles = run.stats.recycles,
            "autoplay halted"
        );
        self.events.emit(&GameEvent::AutoplayHalted {
            reason,
            stats: run.stats,
        });
    }
}

/// Every card on the foundations, one suit per foundation.
fn completed_layout(layout: &Layout) -> Layout {
    let started: [Option<Suit>; FOUNDATIONS] =
        std::array::from_fn(|i| layout.foundations[i].bottom().map(|card| card.suit));
    let mut unplaced = Suit::ALL
        .into_iter()
        .filter(|suit| !started.contains(&Some(*suit)));

    let mut complete = Layout::empty();
    for (pile, suit) in complete.foundations.iter_mut().zip(started) {
        if let Some(suit) = suit.or_else(|| unplaced.next()) {
            *pile = Rank::ALL
                .iter()
                .map(|&rank| Card::face_up(suit, rank))
                .collect();
        }
    }
    complete
}

// =============================================================================
// Builder
// =============================================================================

/// Configures and builds a [`Klondike`].
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    config: EngineConfig,
}

impl KlondikeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    #[must_use]
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.config = self.config.with_autoplay_interval(interval);
        self
    }

    #[must_use]
    pub fn with_hint_duration(mut self, duration: Duration) -> Self {
        self.config = self.config.with_hint_duration(duration);
        self
    }

    #[must_use]
    pub fn with_celebration(mut self, duration: Duration) -> Self {
        self.config = self.config.with_celebration(duration);
        self
    }

    #[must_use]
    pub fn with_stall_detection(mut self, enabled: bool) -> Self {
        self.config = self.config.with_stall_detection(enabled);
        self
    }

    /// Build the engine with the first game dealt.
    #[must_use]
    pub fn build(self) -> Klondike {
        Klondike::new(self.config)
    }
}
