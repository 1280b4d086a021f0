//! The sort engine: algorithms, pacing, and the shared-state contract
//!
//! The engine owns the array of bar values and executes one algorithm at a
//! time on a dedicated worker thread, so the UI context never blocks on
//! algorithm progress. The worker is the only writer of the array; the UI
//! reads it (and the highlight pair and counters) through relaxed atomics.
//!
//! - [`runner::SortEngine`] — the facade the shell drives: start, pause
//!   toggle, cancel, reset, resize, speed.
//! - [`algorithms::SortRun`] — the six algorithms and the shared step
//!   discipline they follow.
//! - [`control::SortSignals`] — pause/cancel flags and the pacing
//!   checkpoint the worker polls at every step boundary.
//! - [`shared`] — the atomic array and highlight pair.
//! - [`stats`] — run-state machine and comparison/swap counters.

pub mod algorithms;
pub mod constants;
pub mod control;
pub mod runner;
pub mod shared;
pub mod stats;

use std::fmt;

pub use algorithms::SortRun;
pub use control::{Interrupted, SortSignals};
pub use runner::SortEngine;
pub use shared::{HighlightCell, SharedArray};
pub use stats::{RunState, RunStateCell, StatsCounter};

/// The six supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// Selection order presented by the shell
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
