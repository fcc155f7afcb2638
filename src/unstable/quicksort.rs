//! Plain randomized quicksort, the baseline the introsort fallbacks are measured
//! against. Same Hoare partition, same smaller-side recursion, but no small-segment
//! strategy and no depth budget: termination rests on the random pivots alone.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::unstable::introsort::partition_rand;

const DEFAULT_SEED: u64 = 123456789;

sort_impl!("quicksort_unstable");

/// Sorts `v` in place into non-decreasing order.
///
/// Unstable and allocation-free. O(n * log(n)) expected, O(n^2) worst-case.
#[inline]
pub fn sort(v: &mut [i64]) {
    sort_with_seed(v, DEFAULT_SEED);
}

/// Same as [`sort`], with caller-controlled pivot selection.
pub fn sort_with_seed(v: &mut [i64], seed: u64) {
    if v.len() < 2 {
        return;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    quicksort_loop(v, &mut rng);
}

fn quicksort_loop(mut v: &mut [i64], rng: &mut SmallRng) {
    while v.len() > 1 {
        let mid = partition_rand(v, rng);

        let (left, right) = v.split_at_mut(mid + 1);

        // Only the smaller half goes on the call stack.
        if left.len() < right.len() {
            quicksort_loop(left, rng);
            v = right;
        } else {
            quicksort_loop(right, rng);
            v = left;
        }
    }
}
