//! # Introduction
//!
//! Sortscope animates six classic sorting algorithms (bubble, selection,
//! insertion, merge, quick, heap) as a bar chart in the terminal, with live
//! control over pacing, pause/resume, and cancellation.  The algorithm runs
//! on a worker thread and mutates a shared array; the UI reads that array
//! every frame to repaint, so the bars move as the sort progresses.
//!
//! ## Execution pipeline
//!
//! ```text
//! start(algorithm) → worker thread → SortRun steps → shared array/counters → TUI
//! ```
//!
//! 1. [`engine`] — the sort engine: the six algorithms, the step/pacing/
//!    cancellation protocol, and the shared-state contract between the
//!    worker and the UI context.
//! 2. [`ui`] — ratatui-based TUI shell; not part of the stable library API.
//!
//! ## Coordination contract
//!
//! The worker is the only writer of the array; the UI only reads it.  Pause
//! and cancel are cooperative flags the worker polls at every step boundary,
//! so both take effect within one pacing interval (or one 50ms poll while
//! paused).  Counters and the highlight pair are relaxed atomics observed
//! only for display.

pub mod engine;
pub mod ui;
