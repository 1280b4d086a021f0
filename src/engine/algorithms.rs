//! The six sorting algorithms and their shared step discipline
//!
//! Every algorithm follows the same contract: publish the highlight pair and
//! count a comparison before comparing, count a swap after any data movement,
//! and hit a [`SortSignals::checkpoint`] at each step boundary. Where the
//! boundary falls differs per algorithm:
//!
//! | Algorithm | Step boundary |
//! |---|---|
//! | Bubble    | each inner-loop comparison |
//! | Selection | each inner-loop comparison |
//! | Insertion | each shift-left operation |
//! | Merge     | each element placed into the merged span (copy tails too) |
//! | Quick     | each partition comparison; the final pivot swap is unpaced |
//! | Heap      | each sibling comparison in sift-down; each root swap |
//!
//! Merge and quick sort recurse natively; the checkpoint fires at the same
//! boundaries regardless of depth, so pause and cancel reach arbitrarily deep
//! calls within one step.

use crate::engine::control::{Interrupted, SortSignals};
use crate::engine::shared::{HighlightCell, SharedArray};
use crate::engine::stats::StatsCounter;
use crate::engine::Algorithm;

/// One sorting run: the shared state an algorithm mutates and the signals it
/// polls. Borrowed by the worker for the duration of the run.
pub struct SortRun<'a> {
    array: &'a SharedArray,
    signals: &'a SortSignals,
    stats: &'a StatsCounter,
    highlight: &'a HighlightCell,
}

impl<'a> SortRun<'a> {
    pub fn new(
        array: &'a SharedArray,
        signals: &'a SortSignals,
        stats: &'a StatsCounter,
        highlight: &'a HighlightCell,
    ) -> Self {
        SortRun {
            array,
            signals,
            stats,
            highlight,
        }
    }

    /// Run the chosen algorithm to completion or cancellation.
    ///
    /// The highlight pair is cleared on both exits.
    pub fn execute(&self, algorithm: Algorithm) -> Result<(), Interrupted> {
        let result = match algorithm {
            Algorithm::Bubble => self.bubble_sort(),
            Algorithm::Selection => self.selection_sort(),
            Algorithm::Insertion => self.insertion_sort(),
            Algorithm::Merge => {
                if self.array.is_empty() {
                    Ok(())
                } else {
                    self.merge_sort(0, self.array.len() - 1)
                }
            }
            Algorithm::Quick => {
                if self.array.is_empty() {
                    Ok(())
                } else {
                    self.quick_sort(0, self.array.len() - 1)
                }
            }
            Algorithm::Heap => self.heap_sort(),
        };
        self.highlight.clear();
        result
    }

    /// Publish the pair about to be compared and count the comparison
    fn mark_comparison(&self, i: usize, j: usize) {
        self.highlight.set(i, j);
        self.stats.record_comparison();
    }

    /// Exchange two slots and count the swap
    fn swap(&self, i: usize, j: usize) {
        self.array.swap(i, j);
        self.stats.record_swap();
    }

    /// Overwrite a slot and count the movement toward the swap counter
    fn place(&self, index: usize, value: u32) {
        self.array.set(index, value);
        self.stats.record_swap();
    }

    /// Step boundary: pause/cancel poll, then the pacing delay
    fn step(&self) -> Result<(), Interrupted> {
        self.signals.checkpoint()
    }

    fn bubble_sort(&self) -> Result<(), Interrupted> {
        let n = self.array.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                self.mark_comparison(j, j + 1);
                if self.array.get(j) > self.array.get(j + 1) {
                    self.swap(j, j + 1);
                }
                self.step()?;
            }
        }
        Ok(())
    }

    fn selection_sort(&self) -> Result<(), Interrupted> {
        let n = self.array.len();
        for i in 0..n.saturating_sub(1) {
            let mut min_idx = i;
            for j in i + 1..n {
                self.mark_comparison(min_idx, j);
                if self.array.get(j) < self.array.get(min_idx) {
                    min_idx = j;
                }
                self.step()?;
            }
            if min_idx != i {
                self.swap(i, min_idx);
            }
        }
        Ok(())
    }

    fn insertion_sort(&self) -> Result<(), Interrupted> {
        let n = self.array.len();
        for i in 1..n {
            let key = self.array.get(i);
            let mut j = i;
            // Comparisons are only counted when the shift executes, like the
            // swaps counter, so both track realized work.
            while j > 0 && self.array.get(j - 1) > key {
                self.mark_comparison(j - 1, j);
                self.place(j, self.array.get(j - 1));
                j -= 1;
                self.step()?;
            }
            self.array.set(j, key);
        }
        Ok(())
    }

    fn merge_sort(&self, lo: usize, hi: usize) -> Result<(), Interrupted> {
        if lo < hi {
            let mid = lo + (hi - lo) / 2;
            self.merge_sort(lo, mid)?;
            self.merge_sort(mid + 1, hi)?;
            self.merge(lo, mid, hi)?;
        }
        Ok(())
    }

    fn merge(&self, lo: usize, mid: usize, hi: usize) -> Result<(), Interrupted> {
        // Temporary buffers sized to the split
        let left: Vec<u32> = (lo..=mid).map(|k| self.array.get(k)).collect();
        let right: Vec<u32> = (mid + 1..=hi).map(|k| self.array.get(k)).collect();

        let mut i = 0;
        let mut j = 0;
        let mut k = lo;

        while i < left.len() && j < right.len() {
            self.mark_comparison(k, k);
            if left[i] <= right[j] {
                self.place(k, left[i]);
                i += 1;
            } else {
                self.place(k, right[j]);
                j += 1;
            }
            k += 1;
            self.step()?;
        }

        while i < left.len() {
            self.place(k, left[i]);
            i += 1;
            k += 1;
            self.step()?;
        }

        while j < right.len() {
            self.place(k, right[j]);
            j += 1;
            k += 1;
            self.step()?;
        }

        Ok(())
    }

    fn quick_sort(&self, lo: usize, hi: usize) -> Result<(), Interrupted> {
        if lo < hi {
            let p = self.partition(lo, hi)?;
            if p > 0 {
                self.quick_sort(lo, p - 1)?;
            }
            self.quick_sort(p + 1, hi)?;
        }
        Ok(())
    }

    /// Lomuto partition with the last element as pivot
    fn partition(&self, lo: usize, hi: usize) -> Result<usize, Interrupted> {
        let pivot = self.array.get(hi);
        // Next slot for a value below the pivot
        let mut i = lo;

        for j in lo..hi {
            self.mark_comparison(j, hi);
            if self.array.get(j) < pivot {
                self.swap(i, j);
                i += 1;
            }
            self.step()?;
        }

        // Final pivot swap is not a paced step
        self.swap(i, hi);
        Ok(i)
    }

    fn heap_sort(&self) -> Result<(), Interrupted> {
        let n = self.array.len();

        for i in (0..n / 2).rev() {
            self.sift_down(n, i)?;
        }

        for i in (1..n).rev() {
            self.swap(0, i);
            self.step()?;
            self.sift_down(i, 0)?;
        }
        Ok(())
    }

    /// Restore the max-heap property for the subtree rooted at `i`, within
    /// the first `n` elements
    fn sift_down(&self, n: usize, i: usize) -> Result<(), Interrupted> {
        let mut largest = i;
        let left = 2 * i + 1;
        let right = 2 * i + 2;

        if left < n {
            self.mark_comparison(left, largest);
            self.step()?;
            if self.array.get(left) > self.array.get(largest) {
                largest = left;
            }
        }

        if right < n {
            self.mark_comparison(right, largest);
            self.step()?;
            if self.array.get(right) > self.array.get(largest) {
                largest = right;
            }
        }

        if largest != i {
            self.swap(i, largest);
            self.step()?;
            self.sift_down(n, largest)?;
        }

        Ok(())
    }
}
