//! Run state machine and step counters
//!
//! Both are written from the worker context and read from the UI context, so
//! they live in atomics. The counters are monotonic within a run and only
//! observed for display — eventual consistency is acceptable.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

/// Where a run currently is in its lifecycle.
///
/// Idle → Running → {Paused ⇄ Running} → {Completed, Cancelled} → Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl RunState {
    /// A run is in flight (worker alive, array length frozen)
    pub fn is_active(self) -> bool {
        matches!(self, RunState::Running | RunState::Paused)
    }

    /// Status text shown to the user
    pub fn label(self) -> &'static str {
        match self {
            RunState::Idle => "Ready",
            RunState::Running => "Sorting...",
            RunState::Paused => "Paused",
            RunState::Completed => "Completed!",
            RunState::Cancelled => "Stopped",
        }
    }

    fn from_u8(raw: u8) -> RunState {
        match raw {
            0 => RunState::Idle,
            1 => RunState::Running,
            2 => RunState::Paused,
            3 => RunState::Completed,
            _ => RunState::Cancelled,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            RunState::Idle => 0,
            RunState::Running => 1,
            RunState::Paused => 2,
            RunState::Completed => 3,
            RunState::Cancelled => 4,
        }
    }
}

/// Atomic cell holding the current [`RunState`]
#[derive(Debug)]
pub struct RunStateCell(AtomicU8);

impl RunStateCell {
    pub fn new() -> Self {
        RunStateCell(AtomicU8::new(RunState::Idle.as_u8()))
    }

    pub fn get(&self) -> RunState {
        RunState::from_u8(self.0.load(Ordering::SeqCst))
    }

    pub fn set(&self, state: RunState) {
        self.0.store(state.as_u8(), Ordering::SeqCst);
    }

    /// Move from `from` to `to`; returns false if the state changed under us
    pub fn transition(&self, from: RunState, to: RunState) -> bool {
        self.0
            .compare_exchange(
                from.as_u8(),
                to.as_u8(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    pub fn is_active(&self) -> bool {
        self.get().is_active()
    }
}

impl Default for RunStateCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Comparison and swap counters for the current run.
///
/// "Swaps" deliberately counts every data movement — merge placements and
/// insertion shifts included — matching the original visualizer's counting.
#[derive(Debug)]
pub struct StatsCounter {
    comparisons: AtomicU64,
    swaps: AtomicU64,
}

impl StatsCounter {
    pub fn new() -> Self {
        StatsCounter {
            comparisons: AtomicU64::new(0),
            swaps: AtomicU64::new(0),
        }
    }

    pub fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_swap(&self) {
        self.swaps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    pub fn swaps(&self) -> u64 {
        self.swaps.load(Ordering::Relaxed)
    }

    /// Zero both counters (new array, or restart)
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
        self.swaps.store(0, Ordering::Relaxed);
    }
}

impl Default for StatsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_requires_expected_state() {
        let cell = RunStateCell::new();
        assert!(cell.transition(RunState::Idle, RunState::Running));
        assert!(!cell.transition(RunState::Idle, RunState::Running));
        assert!(cell.transition(RunState::Running, RunState::Paused));
        assert!(cell.is_active());
        cell.set(RunState::Cancelled);
        assert!(!cell.is_active());
    }

    #[test]
    fn counters_accumulate_and_reset() {
        let stats = StatsCounter::new();
        stats.record_comparison();
        stats.record_comparison();
        stats.record_swap();
        assert_eq!(stats.comparisons(), 2);
        assert_eq!(stats.swaps(), 1);
        stats.reset();
        assert_eq!(stats.comparisons(), 0);
        assert_eq!(stats.swaps(), 0);
    }
}
