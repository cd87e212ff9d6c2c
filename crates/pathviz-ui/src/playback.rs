//! Playback controller: drives one [`AlgorithmRunner`] from timer ticks.
//!
//! Timers are [`Effect::Cmd`] closures that sleep and then post a
//! [`PlaybackTick`]. The controller stamps each tick with a token and bumps
//! the token whenever pending timers become meaningless (pause, reset,
//! restart, completion), so late ticks from a discarded run are dropped.

use std::time::Duration;

use pathviz_core::app::{self, Effect};
use pathviz_core::{Board, Matrix, Msg, Point};
use pathviz_paths::{Algorithm, AlgorithmRunner, RunnerState};

/// Delay between automatic search steps while playing.
pub const AUTO_STEP_INTERVAL: Duration = Duration::from_millis(50);

/// Delay between revealing successive cells of the found path.
pub const PATH_REVEAL_INTERVAL: Duration = Duration::from_millis(40);

/// Which timer a [`PlaybackTick`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Auto-play: pull one more search step.
    Step,
    /// Path reveal: show one more path cell.
    Reveal,
}

/// Timer message posted back to the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlaybackTick {
    pub kind: TickKind,
    pub token: u64,
}

/// Coarse playback state, for status lines and input gating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackStatus {
    /// No search started.
    Idle,
    /// Search in progress, not auto-stepping.
    Paused,
    /// Search in progress, auto-stepping.
    Playing,
    /// End found; path still being revealed.
    Revealing,
    /// End found and the whole path revealed.
    Found,
    /// Search exhausted without reaching the end.
    NoPath,
}

impl PlaybackStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Idle => "idle",
            PlaybackStatus::Paused => "paused",
            PlaybackStatus::Playing => "playing",
            PlaybackStatus::Revealing => "revealing path",
            PlaybackStatus::Found => "path found",
            PlaybackStatus::NoPath => "no path",
        }
    }

    /// Whether a search is underway, so the board must not be edited.
    pub const fn is_active(self) -> bool {
        matches!(
            self,
            PlaybackStatus::Paused | PlaybackStatus::Playing | PlaybackStatus::Revealing
        )
    }
}

/// Timer intervals for a [`PlaybackController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub auto_step_interval: Duration,
    pub reveal_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            auto_step_interval: AUTO_STEP_INTERVAL,
            reveal_interval: PATH_REVEAL_INTERVAL,
        }
    }
}

/// Paces a single search run and the reveal of its path.
///
/// The controller owns the runner and only ever talks to it through
/// `start`/`next`/`reset`. Operations that need a timer return an
/// [`Effect`] for the application loop to run.
#[derive(Debug, Default)]
pub struct PlaybackController {
    config: PlaybackConfig,
    runner: Option<AlgorithmRunner>,
    playing: bool,
    revealed: usize,
    token: u64,
    pending: Option<TickKind>,
}

impl PlaybackController {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace any previous run with a fresh search and start playing it.
    pub fn start_search(
        &mut self,
        algorithm: Algorithm,
        board: &Board,
        start: Point,
        end: Point,
    ) -> Option<Effect> {
        self.cancel_timers();
        self.playing = false;
        self.revealed = 0;
        let mut runner = AlgorithmRunner::new(algorithm, board, start, end);
        runner.start();
        self.runner = Some(runner);
        match self.settle() {
            Some(eff) => Some(eff),
            None => self.play(),
        }
    }

    /// Pull exactly one step by hand. Stops auto-play.
    pub fn step(&mut self) -> Option<Effect> {
        if !self.is_running() {
            return None;
        }
        self.pause();
        self.advance()
    }

    /// Resume auto-stepping. A no-op unless a search is in progress and
    /// paused.
    pub fn play(&mut self) -> Option<Effect> {
        if self.playing || !self.is_running() {
            return None;
        }
        self.playing = true;
        log::debug!("playback resumed");
        Some(self.schedule(TickKind::Step))
    }

    /// Stop auto-stepping, keeping the search where it is.
    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.cancel_timers();
        log::debug!("playback paused after {} steps", self.steps_taken());
    }

    pub fn toggle_play(&mut self) -> Option<Effect> {
        if self.playing {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    /// Discard the run entirely and go back to [`PlaybackStatus::Idle`].
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.playing = false;
        self.revealed = 0;
        if let Some(mut runner) = self.runner.take() {
            runner.reset();
        }
    }

    /// Apply a timer tick. Ticks that are stale (old token) or of a kind no
    /// longer expected are ignored.
    pub fn update_tick(&mut self, tick: PlaybackTick) -> Option<Effect> {
        if tick.token != self.token || self.pending != Some(tick.kind) {
            log::trace!(
                "dropping stale {:?} tick {} (current token {})",
                tick.kind,
                tick.token,
                self.token
            );
            return None;
        }
        self.pending = None;
        match tick.kind {
            TickKind::Step => {
                if !self.playing {
                    return None;
                }
                let eff = self.advance();
                if eff.is_none() && self.playing && self.is_running() {
                    return Some(self.schedule(TickKind::Step));
                }
                eff
            }
            TickKind::Reveal => {
                let len = self.path().map_or(0, <[Point]>::len);
                self.revealed = (self.revealed + 1).min(len);
                if self.revealed < len {
                    Some(self.schedule(TickKind::Reveal))
                } else {
                    log::debug!("path of {} cells fully revealed", len);
                    None
                }
            }
        }
    }

    /// Route a message: [`PlaybackTick`]s are applied, anything else is
    /// ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Effect> {
        let tick = *msg.downcast_ref::<PlaybackTick>()?;
        self.update_tick(tick)
    }

    pub fn status(&self) -> PlaybackStatus {
        let Some(runner) = &self.runner else {
            return PlaybackStatus::Idle;
        };
        match runner.state() {
            RunnerState::Idle => PlaybackStatus::Idle,
            RunnerState::Running if self.playing => PlaybackStatus::Playing,
            RunnerState::Running => PlaybackStatus::Paused,
            RunnerState::Found if self.is_revealing() => PlaybackStatus::Revealing,
            RunnerState::Found => PlaybackStatus::Found,
            RunnerState::Exhausted => PlaybackStatus::NoPath,
        }
    }

    /// Visited matrix of the latest step.
    pub fn visited(&self) -> Option<&Matrix<bool>> {
        self.latest().map(|s| &s.visited)
    }

    /// Node processed by the latest step.
    pub fn current(&self) -> Option<Point> {
        self.latest().map(|s| s.current)
    }

    pub fn found(&self) -> bool {
        self.latest().is_some_and(|s| s.found)
    }

    /// The full path, once found.
    pub fn path(&self) -> Option<&[Point]> {
        self.runner.as_ref().and_then(AlgorithmRunner::path)
    }

    /// The prefix of the path revealed so far.
    pub fn revealed_path(&self) -> &[Point] {
        match self.path() {
            Some(path) => &path[..self.revealed.min(path.len())],
            None => &[],
        }
    }

    pub fn steps_taken(&self) -> usize {
        self.runner.as_ref().map_or(0, AlgorithmRunner::step_count)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_revealing(&self) -> bool {
        self.path().is_some_and(|p| self.revealed < p.len())
    }

    pub fn runner(&self) -> Option<&AlgorithmRunner> {
        self.runner.as_ref()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// The tick the controller currently waits for, if any.
    pub fn pending_tick(&self) -> Option<PlaybackTick> {
        self.pending.map(|kind| PlaybackTick {
            kind,
            token: self.token,
        })
    }

    fn latest(&self) -> Option<&pathviz_paths::AlgorithmStep> {
        self.runner.as_ref().and_then(AlgorithmRunner::current_step)
    }

    fn is_running(&self) -> bool {
        self.runner
            .as_ref()
            .is_some_and(|r| r.state() == RunnerState::Running)
    }

    fn advance(&mut self) -> Option<Effect> {
        self.runner.as_mut()?.next();
        self.settle()
    }

    /// React to the runner reaching a terminal state.
    fn settle(&mut self) -> Option<Effect> {
        let state = self.runner.as_ref()?.state();
        match state {
            RunnerState::Found => {
                self.playing = false;
                self.cancel_timers();
                self.revealed = 0;
                if self.path().is_some_and(|p| !p.is_empty()) {
                    Some(self.schedule(TickKind::Reveal))
                } else {
                    None
                }
            }
            RunnerState::Exhausted => {
                self.playing = false;
                self.cancel_timers();
                log::debug!("playback stopped: no path");
                None
            }
            RunnerState::Idle | RunnerState::Running => None,
        }
    }

    fn cancel_timers(&mut self) {
        self.token = self.token.wrapping_add(1);
        self.pending = None;
    }

    fn schedule(&mut self, kind: TickKind) -> Effect {
        let delay = match kind {
            TickKind::Step => self.config.auto_step_interval,
            TickKind::Reveal => self.config.reveal_interval,
        };
        let tick = PlaybackTick {
            kind,
            token: self.token,
        };
        self.pending = Some(kind);
        log::trace!("scheduling {:?} tick {} in {:?}", kind, tick.token, delay);
        app::cmd(move || {
            std::thread::sleep(delay);
            Some(Msg::custom(tick))
        })
    }
}
