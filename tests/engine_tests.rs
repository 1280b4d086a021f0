// Lifecycle tests for the engine facade: the run-state machine, command
// guards, and the pause/cancel protocol observed through the public API.

use std::time::{Duration, Instant};

use sortscope::engine::constants::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use sortscope::engine::{Algorithm, RunState, SortEngine};

/// Poll the engine until it reaches `target` or `timeout` elapses
fn wait_for_state(engine: &SortEngine, target: RunState, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if engine.state() == target {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    engine.state() == target
}

/// A descending array of `len` values, worst case for most of the algorithms
fn descending(len: u32) -> Vec<u32> {
    (0..len).rev().map(|v| v + 10).collect()
}

#[test]
fn run_to_completion_sorts_and_reports_completed() {
    let mut engine = SortEngine::with_values(&descending(20));
    engine.set_speed(100);

    assert!(engine.start(Algorithm::Bubble));
    assert!(wait_for_state(&engine, RunState::Completed, Duration::from_secs(10)));

    let snapshot = engine.snapshot();
    let mut expected = descending(20);
    expected.sort_unstable();
    assert_eq!(snapshot, expected);
    assert!(engine.comparisons() > 0);
}

#[test]
fn start_is_rejected_while_a_run_is_active() {
    let mut engine = SortEngine::with_values(&descending(50));
    engine.set_speed(1); // 100ms per step, plenty of run time

    assert!(engine.start(Algorithm::Selection));
    assert!(!engine.start(Algorithm::Bubble));
    assert!(engine.state().is_active());

    engine.cancel();
    assert!(wait_for_state(&engine, RunState::Cancelled, Duration::from_secs(2)));
}

#[test]
fn cancel_mid_run_lands_in_cancelled_until_reset() {
    let mut engine = SortEngine::with_values(&descending(50));
    engine.set_speed(1);

    assert!(engine.start(Algorithm::Quick));
    std::thread::sleep(Duration::from_millis(120));
    assert!(engine.cancel());
    assert!(wait_for_state(&engine, RunState::Cancelled, Duration::from_secs(2)));

    // Running is never re-entered without an explicit start after reset
    assert!(!engine.start(Algorithm::Quick));
    assert_eq!(engine.state(), RunState::Cancelled);

    engine.reset();
    assert_eq!(engine.state(), RunState::Idle);
    assert!(engine.start(Algorithm::Quick));
    engine.cancel();
}

#[test]
fn pause_freezes_progress_and_resume_finishes_the_sort() {
    let input = descending(30);
    let mut engine = SortEngine::with_values(&input);
    engine.set_speed(100);

    assert!(engine.start(Algorithm::Insertion));
    assert!(engine.toggle_pause());
    assert_eq!(engine.state(), RunState::Paused);

    // Give the worker time to park at its step boundary, then verify the
    // counters hold still
    std::thread::sleep(Duration::from_millis(200));
    let comparisons = engine.comparisons();
    let swaps = engine.swaps();
    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(engine.comparisons(), comparisons);
    assert_eq!(engine.swaps(), swaps);

    assert!(engine.toggle_pause());
    assert!(wait_for_state(&engine, RunState::Completed, Duration::from_secs(10)));

    // Pausing must not alter the logical outcome
    let mut expected = input;
    expected.sort_unstable();
    assert_eq!(engine.snapshot(), expected);
}

#[test]
fn cancel_reaches_a_paused_worker() {
    let mut engine = SortEngine::with_values(&descending(50));
    engine.set_speed(1);

    assert!(engine.start(Algorithm::Merge));
    assert!(engine.toggle_pause());
    std::thread::sleep(Duration::from_millis(120));

    assert!(engine.cancel());
    assert!(wait_for_state(&engine, RunState::Cancelled, Duration::from_secs(2)));
}

#[test]
fn pause_and_cancel_are_noops_outside_a_run() {
    let mut engine = SortEngine::with_values(&descending(12));

    assert!(!engine.toggle_pause());
    assert!(!engine.cancel());
    assert_eq!(engine.state(), RunState::Idle);

    engine.set_speed(100);
    assert!(engine.start(Algorithm::Heap));
    assert!(wait_for_state(&engine, RunState::Completed, Duration::from_secs(10)));

    assert!(!engine.toggle_pause());
    assert!(!engine.cancel());
    assert_eq!(engine.state(), RunState::Completed);
}

#[test]
fn resize_only_while_idle() {
    let mut engine = SortEngine::new(100);

    assert!(engine.resize(50));
    assert_eq!(engine.len(), 50);
    assert_eq!(engine.comparisons(), 0);
    assert_eq!(engine.swaps(), 0);

    engine.set_speed(1);
    assert!(engine.start(Algorithm::Bubble));
    assert!(!engine.resize(80));
    assert_eq!(engine.len(), 50);

    engine.cancel();
    assert!(wait_for_state(&engine, RunState::Cancelled, Duration::from_secs(2)));

    // Still not idle until reset
    assert!(!engine.resize(80));
    engine.reset();
    assert!(engine.resize(80));
    assert_eq!(engine.len(), 80);
}

#[test]
fn resize_clamps_to_supported_bounds() {
    let mut engine = SortEngine::new(100);
    assert!(engine.resize(1));
    assert_eq!(engine.len(), MIN_ARRAY_SIZE);
    assert!(engine.resize(5000));
    assert_eq!(engine.len(), MAX_ARRAY_SIZE);
}

#[test]
fn speed_clamps_to_supported_bounds() {
    let engine = SortEngine::new(10);
    engine.set_speed(0);
    assert_eq!(engine.speed(), 1);
    engine.set_speed(900);
    assert_eq!(engine.speed(), 100);
}

#[test]
fn reset_is_idempotent() {
    let mut engine = SortEngine::new(40);

    engine.reset();
    assert_eq!(engine.state(), RunState::Idle);
    assert_eq!(engine.len(), 40);
    assert_eq!(engine.comparisons(), 0);
    assert_eq!(engine.swaps(), 0);

    engine.reset();
    assert_eq!(engine.state(), RunState::Idle);
    assert_eq!(engine.len(), 40);
    assert_eq!(engine.comparisons(), 0);
    assert_eq!(engine.swaps(), 0);
}

#[test]
fn reset_cancels_a_live_run() {
    let mut engine = SortEngine::with_values(&descending(50));
    engine.set_speed(1);

    assert!(engine.start(Algorithm::Heap));
    std::thread::sleep(Duration::from_millis(80));
    engine.reset();

    assert_eq!(engine.state(), RunState::Idle);
    assert_eq!(engine.comparisons(), 0);
    assert_eq!(engine.swaps(), 0);
    assert_eq!(engine.highlight(), None);
    assert!(engine.start(Algorithm::Heap));
    engine.cancel();
}

#[test]
fn generated_values_stay_in_range() {
    let engine = SortEngine::new(150);
    assert_eq!(engine.len(), 150);
    for value in engine.snapshot() {
        assert!((10..=509).contains(&value));
    }
}
