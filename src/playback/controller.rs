//! Playback controller state machine
//!
//! ```text
//!            start(Continuous)            tick (exhausted)
//!   Idle ─────────────────────▶ Running ───────────────────▶ Finished
//!    │                          │    ▲                          ▲
//!    │ start(Step)       pause  │    │ resume                   │
//!    └─────────────────────▶ Paused ─┘──── nextStep (exhausted) ┘
//!
//!   reset() from any state ──▶ Idle
//! ```
//!
//! Continuous playback is driven by [`Controller::pump`], which the host
//! calls from its event loop. Everything else executes synchronously.

use super::scheduler::{Scheduler, TickToken};
use super::session::{PlaybackMode, PlaybackSession, PlaybackState};
use crate::constants::{BASE_DELAY_MS, DELAY_STEP_MS, MAX_SPEED, MIN_SPEED};
use crate::engine::{Algorithm, AlgorithmInfo, EngineError, Step, Value};
use crate::generator::{ArrayGenerator, Distribution};
use rustc_hash::FxHashSet;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// The visual surface driven by the controller
pub trait Renderer {
    /// Show the effect of `step`; `working` and `sorted` reflect the state
    /// after it was applied
    fn render(&mut self, step: &Step<Value>, working: &[Value], sorted: &FxHashSet<usize>);

    /// Draw `array` from scratch with no marks and nothing sorted
    fn redraw(&mut self, array: &[Value]);

    /// Show `array` with every element sorted
    fn mark_all_sorted(&mut self, array: &[Value]);
}

/// Delay between ticks at `speed`, clamped to the valid speed range.
///
/// Speed 1 waits 1000ms and speed 10 waits 100ms.
pub fn delay_for_speed(speed: u8) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED) as u64;
    Duration::from_millis(BASE_DELAY_MS - speed * DELAY_STEP_MS)
}

/// Owns the playback session and drives a [`Renderer`] through it
pub struct Controller<R: Renderer, S: Scheduler> {
    session: PlaybackSession,
    /// The array as it was before sorting started
    original: Vec<Value>,
    /// Bumped whenever outstanding ticks must be invalidated
    generation: u64,
    renderer: R,
    scheduler: S,
    generator: ArrayGenerator,
}

impl<R: Renderer, S: Scheduler> Controller<R, S> {
    pub fn new(
        renderer: R,
        scheduler: S,
        generator: ArrayGenerator,
        mode: PlaybackMode,
        speed: u8,
    ) -> Self {
        Controller {
            session: PlaybackSession::new(mode, speed.clamp(MIN_SPEED, MAX_SPEED)),
            original: Vec::new(),
            generation: 0,
            renderer,
            scheduler,
            generator,
        }
    }

    /// Replace the pre-sort array with a generated one and reset
    pub fn generate(&mut self, distribution: Distribution, size: usize) -> &[Value] {
        self.original = self.generator.generate(distribution, size);
        debug!(%distribution, size, "generated array");
        self.reset();
        &self.original
    }

    /// Replace the pre-sort array with `array` and reset
    pub fn load(&mut self, array: &[Value]) {
        self.original = array.to_vec();
        self.reset();
    }

    /// Run `algorithm_key` over `array` and begin playback.
    ///
    /// The renderer is redrawn with `array` before any step is applied. Does
    /// nothing while a run is in progress. An unknown key leaves the
    /// controller untouched.
    pub fn start(
        &mut self,
        algorithm_key: &str,
        array: &[Value],
        mode: PlaybackMode,
    ) -> Result<(), EngineError> {
        if self.session.state.is_active() {
            debug!(state = ?self.session.state, "start ignored, run in progress");
            return Ok(());
        }

        let algorithm: Algorithm = algorithm_key.parse().inspect_err(|e| {
            warn!(error = %e, "refusing to start");
        })?;

        let trace = algorithm.run(array);
        info!(
            algorithm = algorithm.key(),
            len = array.len(),
            steps = trace.steps.len(),
            ?mode,
            "starting playback"
        );

        self.invalidate();
        self.original = array.to_vec();
        self.session.mode = mode;
        self.session.begin(algorithm, trace, array);
        self.renderer.redraw(array);

        match mode {
            PlaybackMode::Step => self.session.state = PlaybackState::Paused,
            PlaybackMode::Continuous => {
                self.session.state = PlaybackState::Running;
                self.schedule_tick(Duration::ZERO);
            }
        }
        Ok(())
    }

    /// Stop autonomous advancement, keeping the cursor
    pub fn pause(&mut self) {
        if self.session.state != PlaybackState::Running {
            return;
        }
        self.invalidate();
        self.session.state = PlaybackState::Paused;
        debug!(cursor = self.session.cursor, "paused");
    }

    /// Continue autonomous advancement from the cursor
    pub fn resume(&mut self) {
        if self.session.state != PlaybackState::Paused {
            return;
        }
        self.invalidate();
        self.session.state = PlaybackState::Running;
        debug!(cursor = self.session.cursor, "resumed");
        self.schedule_tick(Duration::ZERO);
    }

    /// Apply exactly one step. Only valid while paused in step mode.
    pub fn next_step(&mut self) {
        if self.session.state != PlaybackState::Paused || self.session.mode != PlaybackMode::Step {
            return;
        }
        self.advance();
    }

    /// Discard the run and restore the pre-sort array
    pub fn reset(&mut self) {
        self.invalidate();
        self.session.clear(&self.original);
        self.renderer.redraw(&self.original);
        debug!("reset");
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.session.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Record the mode; switching to step mode pauses a running playback
    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.session.mode = mode;
        if mode == PlaybackMode::Step {
            self.pause();
        }
    }

    /// Fire every due tick. Returns the number of tokens processed.
    pub fn pump(&mut self) -> usize {
        let due = self.scheduler.take_due();
        let count = due.len();
        for token in due {
            self.on_tick(token);
        }
        count
    }

    /// Handle one scheduled continuation. Stale tokens are dropped.
    pub fn on_tick(&mut self, token: TickToken) {
        if token.generation != self.generation || self.session.state != PlaybackState::Running {
            trace!(
                token = token.generation,
                current = self.generation,
                "dropping stale tick"
            );
            return;
        }

        self.advance();

        if self.session.state == PlaybackState::Running {
            self.schedule_tick(delay_for_speed(self.session.speed));
        }
    }

    fn advance(&mut self) {
        if self.session.apply_next().is_some() {
            if let Some(step) = self.session.current_step() {
                self.renderer
                    .render(step, &self.session.working, &self.session.sorted);
            }
        }

        if self.session.is_exhausted() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.invalidate();
        self.session.state = PlaybackState::Finished;
        self.session.mark_all_sorted();
        self.session.caption = "Sorting completed!".to_string();
        self.renderer.mark_all_sorted(&self.session.working);
        info!(steps = self.session.cursor, "playback finished");
    }

    fn schedule_tick(&mut self, delay: Duration) {
        let token = TickToken {
            generation: self.generation,
        };
        self.scheduler.schedule(token, delay);
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.scheduler.clear();
    }

    pub fn state(&self) -> PlaybackState {
        self.session.state
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn original(&self) -> &[Value] {
        &self.original
    }

    /// Metadata of the algorithm being played, if a run has started
    pub fn algorithm_info(&self) -> Option<AlgorithmInfo> {
        self.session.algorithm.map(Algorithm::info)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
