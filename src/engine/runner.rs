//! Engine facade the UI shell drives
//!
//! [`SortEngine`] owns the shared array, the signal flags, the counters and
//! the run-state cell, and spawns one worker thread per run. All commands
//! are guarded: invalid ones (start while running, resize while not idle)
//! are rejected as no-ops rather than faults, independently of whatever the
//! shell disables.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::engine::algorithms::SortRun;
use crate::engine::constants::{DEFAULT_SPEED, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::engine::control::SortSignals;
use crate::engine::shared::{HighlightCell, SharedArray};
use crate::engine::stats::{RunState, RunStateCell, StatsCounter};
use crate::engine::Algorithm;

/// The sort engine: shared state plus at most one live worker
pub struct SortEngine {
    array: Arc<SharedArray>,
    signals: Arc<SortSignals>,
    stats: Arc<StatsCounter>,
    highlight: Arc<HighlightCell>,
    state: Arc<RunStateCell>,
    worker: Option<JoinHandle<()>>,
}

impl SortEngine {
    /// Engine with a freshly generated array of `size` values (clamped to
    /// [10, 200]) and the default speed
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        Self::from_array(SharedArray::generate(size))
    }

    /// Engine over known values; size is taken as-is. Used for deterministic
    /// runs in tests.
    pub fn with_values(values: &[u32]) -> Self {
        Self::from_array(SharedArray::from_values(values))
    }

    fn from_array(array: SharedArray) -> Self {
        SortEngine {
            array: Arc::new(array),
            signals: Arc::new(SortSignals::new(DEFAULT_SPEED)),
            stats: Arc::new(StatsCounter::new()),
            highlight: Arc::new(HighlightCell::new()),
            state: Arc::new(RunStateCell::new()),
            worker: None,
        }
    }

    /// Begin sorting with `algorithm` on a worker thread.
    ///
    /// Only valid from Idle; returns false (and changes nothing) if a run is
    /// active or a finished run has not been reset yet.
    pub fn start(&mut self, algorithm: Algorithm) -> bool {
        self.reap_worker();
        if !self.state.transition(RunState::Idle, RunState::Running) {
            return false;
        }
        self.signals.clear();

        let array = Arc::clone(&self.array);
        let signals = Arc::clone(&self.signals);
        let stats = Arc::clone(&self.stats);
        let highlight = Arc::clone(&self.highlight);
        let state = Arc::clone(&self.state);

        self.worker = Some(thread::spawn(move || {
            let run = SortRun::new(&array, &signals, &stats, &highlight);
            match run.execute(algorithm) {
                Ok(()) => state.set(RunState::Completed),
                Err(_) => state.set(RunState::Cancelled),
            }
        }));
        true
    }

    /// Pause a running sort, or resume a paused one. No-op (false) from any
    /// other state. The worker honors the flag at its next step boundary.
    pub fn toggle_pause(&self) -> bool {
        match self.state.get() {
            RunState::Running => {
                if self.state.transition(RunState::Running, RunState::Paused) {
                    self.signals.request_pause();
                    true
                } else {
                    false
                }
            }
            RunState::Paused => {
                self.signals.request_resume();
                self.state.transition(RunState::Paused, RunState::Running);
                true
            }
            _ => false,
        }
    }

    /// Request cooperative cancellation of the active run. The worker
    /// observes it within one poll or pacing interval and reports Cancelled;
    /// no partial-sortedness is guaranteed. No-op when no run is active.
    pub fn cancel(&self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.signals.request_cancel();
        true
    }

    /// Cancel any live run, wait for the worker to unwind, regenerate the
    /// array at its current size, and return to Idle.
    pub fn reset(&mut self) {
        self.signals.request_cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.signals.clear();
        self.regenerate(self.array.len());
        self.state.set(RunState::Idle);
    }

    /// Regenerate the array at `size` (clamped to [10, 200]).
    ///
    /// Permitted only when Idle; rejected as a no-op otherwise.
    pub fn resize(&mut self, size: usize) -> bool {
        if self.state.get() != RunState::Idle {
            return false;
        }
        self.reap_worker();
        self.regenerate(size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE));
        true
    }

    /// Set the pacing speed, clamped to [1, 100]. Valid in any state and
    /// effective at the worker's next step.
    pub fn set_speed(&self, speed: u32) {
        self.signals.set_speed(speed);
    }

    pub fn speed(&self) -> u32 {
        self.signals.speed()
    }

    pub fn state(&self) -> RunState {
        self.state.get()
    }

    pub fn comparisons(&self) -> u64 {
        self.stats.comparisons()
    }

    pub fn swaps(&self) -> u64 {
        self.stats.swaps()
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Copy of the current array for rendering
    pub fn snapshot(&self) -> Vec<u32> {
        self.array.snapshot()
    }

    /// Index pair currently under the algorithm's cursor, if any
    pub fn highlight(&self) -> Option<(usize, usize)> {
        self.highlight.get()
    }

    fn regenerate(&mut self, size: usize) {
        self.array = Arc::new(SharedArray::generate(size));
        self.stats.reset();
        self.highlight.clear();
    }

    /// Join a worker that already finished so the handle doesn't linger
    fn reap_worker(&mut self) {
        if self.worker.as_ref().is_some_and(|w| w.is_finished()) {
            if let Some(worker) = self.worker.take() {
                let _ = worker.join();
            }
        }
    }
}

impl Drop for SortEngine {
    fn drop(&mut self) {
        self.signals.request_cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
