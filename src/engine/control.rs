//! Pause/cancel/speed signalling between the UI context and the sort worker
//!
//! The worker polls a [`SortSignals`] at every step boundary via
//! [`SortSignals::checkpoint`]: cancel aborts the run, pause parks the worker
//! in a coarse polling loop, and otherwise the worker sleeps for the pacing
//! interval derived from the speed setting. Cancellation is cooperative —
//! the worker is never forcibly terminated.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use crate::engine::constants::{MAX_SPEED, MIN_SPEED, PAUSE_POLL_MS};

/// Signal that a run was cancelled at a step boundary.
///
/// This is a normal termination path, not a fault: it unwinds the algorithm
/// through `?` the same way the completion path returns `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sort run interrupted by cancellation")
    }
}

impl std::error::Error for Interrupted {}

/// Shared flags the UI context toggles and the worker polls
#[derive(Debug)]
pub struct SortSignals {
    pause: AtomicBool,
    cancel: AtomicBool,
    speed: AtomicU32,
}

impl SortSignals {
    pub fn new(speed: u32) -> Self {
        SortSignals {
            pause: AtomicBool::new(false),
            cancel: AtomicBool::new(false),
            speed: AtomicU32::new(speed.clamp(MIN_SPEED, MAX_SPEED)),
        }
    }

    pub fn request_pause(&self) {
        self.pause.store(true, Ordering::SeqCst);
    }

    pub fn request_resume(&self) {
        self.pause.store(false, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.pause.load(Ordering::SeqCst)
    }

    pub fn request_cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    /// Clear pause and cancel before a fresh run
    pub fn clear(&self) {
        self.pause.store(false, Ordering::SeqCst);
        self.cancel.store(false, Ordering::SeqCst);
    }

    /// Set the speed, clamped to [1, 100]. Takes effect at the next step.
    pub fn set_speed(&self, speed: u32) {
        self.speed
            .store(speed.clamp(MIN_SPEED, MAX_SPEED), Ordering::Relaxed);
    }

    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Delay inserted after each step: speed 100 -> 1ms, speed 1 -> 100ms
    pub fn pacing_interval(&self) -> Duration {
        Duration::from_millis(u64::from(101 - self.speed()))
    }

    /// The step-boundary protocol.
    ///
    /// In order: cancel aborts immediately; pause parks the worker at a
    /// coarse poll (still cancellable); otherwise the worker sleeps for one
    /// pacing interval and proceeds.
    pub fn checkpoint(&self) -> Result<(), Interrupted> {
        loop {
            if self.is_cancelled() {
                return Err(Interrupted);
            }
            if !self.is_paused() {
                break;
            }
            thread::sleep(Duration::from_millis(PAUSE_POLL_MS));
        }
        thread::sleep(self.pacing_interval());
        Ok(())
    }
}
