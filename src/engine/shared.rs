//! State shared between the sort worker and the render surface
//!
//! The worker is the sole writer of [`SharedArray`] during a run; the UI
//! context only reads it for painting. Elements are relaxed atomics, so a
//! render pass may observe an in-progress swap — the visualization tolerates
//! that transient inconsistency by design, and no correctness property
//! depends on a consistent snapshot. The array's length never changes while
//! a run is active: resizing swaps in a whole new `SharedArray`.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use rand::Rng;

use crate::engine::constants::{VALUE_MAX, VALUE_MIN};

/// The bar values being sorted
#[derive(Debug)]
pub struct SharedArray {
    slots: Vec<AtomicU32>,
}

impl SharedArray {
    /// Fill `len` slots with independent uniform values in [10, 509]
    pub fn generate(len: usize) -> Self {
        let mut rng = rand::thread_rng();
        SharedArray {
            slots: (0..len)
                .map(|_| AtomicU32::new(rng.gen_range(VALUE_MIN..=VALUE_MAX)))
                .collect(),
        }
    }

    /// Build an array with known contents (deterministic runs and tests)
    pub fn from_values(values: &[u32]) -> Self {
        SharedArray {
            slots: values.iter().map(|&v| AtomicU32::new(v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> u32 {
        self.slots[index].load(Ordering::Relaxed)
    }

    pub fn set(&self, index: usize, value: u32) {
        self.slots[index].store(value, Ordering::Relaxed);
    }

    /// Exchange two slots. A concurrent render may see the intermediate
    /// state where both slots hold the same value.
    pub fn swap(&self, i: usize, j: usize) {
        let a = self.get(i);
        let b = self.get(j);
        self.set(i, b);
        self.set(j, a);
    }

    /// Copy the current values out for rendering
    pub fn snapshot(&self) -> Vec<u32> {
        self.slots
            .iter()
            .map(|slot| slot.load(Ordering::Relaxed))
            .collect()
    }
}

/// Sentinel for "no index highlighted"
const NO_HIGHLIGHT: usize = usize::MAX;

/// The index pair currently being compared or moved, published by the worker
/// and polled by the render surface for accent coloring.
#[derive(Debug)]
pub struct HighlightCell {
    first: AtomicUsize,
    second: AtomicUsize,
}

impl HighlightCell {
    pub fn new() -> Self {
        HighlightCell {
            first: AtomicUsize::new(NO_HIGHLIGHT),
            second: AtomicUsize::new(NO_HIGHLIGHT),
        }
    }

    pub fn set(&self, i: usize, j: usize) {
        self.first.store(i, Ordering::Relaxed);
        self.second.store(j, Ordering::Relaxed);
    }

    pub fn clear(&self) {
        self.first.store(NO_HIGHLIGHT, Ordering::Relaxed);
        self.second.store(NO_HIGHLIGHT, Ordering::Relaxed);
    }

    pub fn get(&self) -> Option<(usize, usize)> {
        let first = self.first.load(Ordering::Relaxed);
        let second = self.second.load(Ordering::Relaxed);
        if first == NO_HIGHLIGHT {
            None
        } else {
            Some((first, second))
        }
    }
}

impl Default for HighlightCell {
    fn default() -> Self {
        Self::new()
    }
}
