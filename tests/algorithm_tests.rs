// Correctness and counter tests for the six algorithms, driven synchronously
// through SortRun at maximum speed.

use sortscope::engine::{
    Algorithm, HighlightCell, Interrupted, SharedArray, SortRun, SortSignals, StatsCounter,
};

/// Run `algorithm` over `input` and return (final array, comparisons, swaps)
fn run_sort(algorithm: Algorithm, input: &[u32]) -> (Vec<u32>, u64, u64) {
    let array = SharedArray::from_values(input);
    let signals = SortSignals::new(100);
    let stats = StatsCounter::new();
    let highlight = HighlightCell::new();

    let run = SortRun::new(&array, &signals, &stats, &highlight);
    run.execute(algorithm).expect("run should not be cancelled");

    assert_eq!(highlight.get(), None, "highlight must be cleared after a run");
    (array.snapshot(), stats.comparisons(), stats.swaps())
}

fn assert_sorted_permutation(algorithm: Algorithm, input: &[u32]) {
    let (output, _, _) = run_sort(algorithm, input);

    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(
        output, expected,
        "{} failed on input {:?}",
        algorithm, input
    );
}

#[test]
fn all_algorithms_sort_a_scrambled_array() {
    let input = [403, 17, 251, 10, 509, 88, 88, 144, 371, 29, 466, 202];
    for algorithm in Algorithm::ALL {
        assert_sorted_permutation(algorithm, &input);
    }
}

#[test]
fn all_algorithms_handle_degenerate_inputs() {
    let empty: [u32; 0] = [];
    let single = [42];
    let all_equal = [7, 7, 7, 7, 7];
    let already_sorted = [10, 20, 30, 40, 50, 60];
    let reverse_sorted = [60, 50, 40, 30, 20, 10];

    for algorithm in Algorithm::ALL {
        assert_sorted_permutation(algorithm, &empty);
        assert_sorted_permutation(algorithm, &single);
        assert_sorted_permutation(algorithm, &all_equal);
        assert_sorted_permutation(algorithm, &already_sorted);
        assert_sorted_permutation(algorithm, &reverse_sorted);
    }
}

#[test]
fn counters_are_deterministic_per_input() {
    let input = [55, 13, 200, 481, 97, 301, 13, 164];
    for algorithm in Algorithm::ALL {
        let (_, comparisons_a, swaps_a) = run_sort(algorithm, &input);
        let (_, comparisons_b, swaps_b) = run_sort(algorithm, &input);
        assert_eq!(comparisons_a, comparisons_b, "{}", algorithm);
        assert_eq!(swaps_a, swaps_b, "{}", algorithm);
    }
}

#[test]
fn bubble_counts_on_descending_triple() {
    // [5,3,1]: three comparisons, every one of them swaps
    let (output, comparisons, swaps) = run_sort(Algorithm::Bubble, &[5, 3, 1]);
    assert_eq!(output, vec![1, 3, 5]);
    assert_eq!(comparisons, 3);
    assert_eq!(swaps, 3);
}

#[test]
fn insertion_counts_shifts_as_moves() {
    // key=2 shifts once, key=7 shifts zero times, key=1 shifts three times.
    // A comparison is only counted when the shift executes, so both counters
    // land on 4.
    let (output, comparisons, swaps) = run_sort(Algorithm::Insertion, &[4, 2, 7, 1]);
    assert_eq!(output, vec![1, 2, 4, 7]);
    assert_eq!(comparisons, 4);
    assert_eq!(swaps, 4);
}

#[test]
fn selection_swaps_once_per_misplaced_minimum() {
    // i=0 compares twice and swaps, i=1 compares once and swaps
    let (output, comparisons, swaps) = run_sort(Algorithm::Selection, &[3, 1, 2]);
    assert_eq!(output, vec![1, 2, 3]);
    assert_eq!(comparisons, 3);
    assert_eq!(swaps, 2);
}

#[test]
fn merge_counts_every_placement() {
    // merge([3],[1]): 1 comparison, 2 placements;
    // merge([1,3],[2]): 2 comparisons, 3 placements
    let (output, comparisons, swaps) = run_sort(Algorithm::Merge, &[3, 1, 2]);
    assert_eq!(output, vec![1, 2, 3]);
    assert_eq!(comparisons, 3);
    assert_eq!(swaps, 5);
}

#[test]
fn quick_counts_partition_comparisons_and_swaps() {
    // partition(0..=2, pivot=2): two comparisons, one swap inside the scan,
    // plus the final pivot swap
    let (output, comparisons, swaps) = run_sort(Algorithm::Quick, &[3, 1, 2]);
    assert_eq!(output, vec![1, 2, 3]);
    assert_eq!(comparisons, 2);
    assert_eq!(swaps, 2);
}

#[test]
fn cancellation_interrupts_every_algorithm() {
    let input = [9, 8, 7, 6, 5, 4, 3, 2, 1];
    for algorithm in Algorithm::ALL {
        let array = SharedArray::from_values(&input);
        let signals = SortSignals::new(100);
        let stats = StatsCounter::new();
        let highlight = HighlightCell::new();
        signals.request_cancel();

        let run = SortRun::new(&array, &signals, &stats, &highlight);
        assert_eq!(run.execute(algorithm), Err(Interrupted), "{}", algorithm);
        assert_eq!(highlight.get(), None);
    }
}

#[test]
fn counters_only_grow_during_a_run() {
    let input = [120, 43, 388, 16, 271, 99];
    let (_, comparisons, swaps) = run_sort(Algorithm::Heap, &input);
    assert!(comparisons > 0);
    assert!(swaps > 0);
}
