//! Randomized introsort.
//!
//! Per segment the driver picks one of three strategies: insertion sort below
//! [`INSERTION_SORT_THRESHOLD`], heapsort once the depth budget is exhausted, otherwise
//! a Hoare partition around a uniformly random pivot. After a partition it recurses
//! into the smaller side and iterates on the larger one, so the call stack stays
//! O(log n) even for adversarial inputs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Segments shorter than this are insertion sorted.
pub(crate) const INSERTION_SORT_THRESHOLD: usize = 16;

// Arbitrary fixed value, the classic xorshift64 seed. The sorted result must never
// depend on the seed, only the pivot choices do.
const DEFAULT_SEED: u64 = 88172645463393265;

sort_impl!("introsort_unstable");

/// Sorts `v` in place into non-decreasing order.
///
/// Unstable (may reorder equal elements), allocation-free and O(n * log(n))
/// worst-case. Pivot selection is randomized but uses a fixed seed, so behavior is
/// deterministic from run to run.
#[inline]
pub fn sort(v: &mut [i64]) {
    sort_with_seed(v, DEFAULT_SEED);
}

/// Same as [`sort`], with caller-controlled pivot selection.
///
/// The generator is owned by this one invocation; no state persists across calls.
pub fn sort_with_seed(v: &mut [i64], seed: u64) {
    sort_with_counters(v, seed);
}

/// How one sort invocation dispatched its work. Used by the tests to pin down the
/// depth-budget behavior, in the spirit of the comparison counting done for benchmarks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortCounters {
    /// Partition steps allowed before heapsort takes over, `2 * floor(log2(len))`.
    pub depth_budget: u32,
    /// Total partition steps performed.
    pub partitions: u64,
    /// Deepest partition step taken on any segment chain. Never exceeds `depth_budget`.
    pub max_partition_depth: u32,
    /// Segments finished by heapsort because their budget ran out.
    pub heapsort_fallbacks: u64,
    /// Segments finished by insertion sort.
    pub insertion_sorts: u64,
}

/// Same as [`sort_with_seed`], additionally reporting how the work was dispatched.
pub fn sort_with_counters(v: &mut [i64], seed: u64) -> SortCounters {
    let len = v.len();

    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let mut counters = SortCounters {
        depth_budget: 2 * (len | 1).ilog2(),
        ..SortCounters::default()
    };

    if len < 2 {
        return counters;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    introsort_loop(v, counters.depth_budget, &mut rng, &mut counters);

    counters
}

// --- IMPL ---

/// `limit` is the number of partition steps this segment and its iterative
/// continuations may still take before falling back to heapsort.
fn introsort_loop(
    mut v: &mut [i64],
    mut limit: u32,
    rng: &mut SmallRng,
    counters: &mut SortCounters,
) {
    while v.len() > 1 {
        if v.len() < INSERTION_SORT_THRESHOLD {
            counters.insertion_sorts += 1;
            insertion_sort(v);
            return;
        }

        // Too many bad pivot choices. Heapsort the whole remaining segment to keep the
        // total at O(n * log(n)).
        if limit == 0 {
            counters.heapsort_fallbacks += 1;
            heapsort(v);
            return;
        }

        limit -= 1;

        counters.partitions += 1;
        counters.max_partition_depth = counters
            .max_partition_depth
            .max(counters.depth_budget - limit);

        let mid = partition_rand(v, rng);

        // v[..=mid] <= pivot <= v[mid + 1..]. The sides are data-dependent and can be
        // arbitrarily lopsided, the right one even empty; such a round re-partitions
        // the same segment with a fresh pivot and the decremented limit caps how often
        // that can repeat.
        let (left, right) = v.split_at_mut(mid + 1);

        // Recurse into the smaller side, iterate on the larger one. Only the smaller
        // half ever lands on the call stack, which bounds recursion depth to O(log n)
        // regardless of pivot quality.
        if left.len() < right.len() {
            introsort_loop(left, limit, rng, counters);
            v = right;
        } else {
            introsort_loop(right, limit, rng, counters);
            v = left;
        }
    }
}

/// Hoare partition of `v` around a pivot copied from a uniformly random index.
///
/// Returns `mid` such that every element of `v[..=mid]` is <= pivot and every element
/// of `v[mid + 1..]` is >= pivot. Both scans stop at elements equal to the pivot, and
/// the pivot value itself lies inside the segment, so neither cursor can run past the
/// segment bounds. Holds for all-equal segments too.
pub(crate) fn partition_rand(v: &mut [i64], rng: &mut SmallRng) -> usize {
    debug_assert!(v.len() >= 2);

    let pivot = v[rng.gen_range(0..v.len())];

    let mut i = 0;
    let mut j = v.len() - 1;

    loop {
        while v[i] < pivot {
            i += 1;
        }

        while v[j] > pivot {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// In-place insertion sort. Stable within the segment.
pub(crate) fn insertion_sort(v: &mut [i64]) {
    for i in 1..v.len() {
        let x = v[i];

        let mut j = i;
        while j > 0 && v[j - 1] > x {
            v[j] = v[j - 1];
            j -= 1;
        }

        v[j] = x;
    }
}

/// In-place heapsort, guarantees O(n * log(n)) worst-case. Meant as unlikely
/// algorithmic fallback, never as the hot path.
fn heapsort(v: &mut [i64]) {
    // Build the heap in linear time.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i);
    }

    // Pop maximal elements from the heap.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0);
    }
}

// This binary heap respects the invariant `parent >= child`.
fn sift_down(v: &mut [i64], mut node: usize) {
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            break;
        }

        // Choose the greater child.
        if child + 1 < v.len() && v[child] < v[child + 1] {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if v[node] >= v[child] {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
