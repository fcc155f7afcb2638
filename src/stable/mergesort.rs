//! Top-down merge sort with an insertion sort base case. The one sort in this crate
//! that is stable and the one that allocates: a single scratch buffer per call.

use crate::unstable::introsort::insertion_sort;

/// Segments of at most this length are insertion sorted instead of split further.
const INSERTION_SORT_THRESHOLD: usize = 15;

sort_impl!("mergesort_stable");

/// Sorts `v` into non-decreasing order, preserving the order of equal elements.
pub fn sort(v: &mut [i64]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut scratch = vec![0i64; len];
    merge_sort(v, &mut scratch);
}

// `scratch` always has the same length as `v`.
fn merge_sort(v: &mut [i64], scratch: &mut [i64]) {
    let len = v.len();
    if len <= INSERTION_SORT_THRESHOLD {
        insertion_sort(v);
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], &mut scratch[..mid]);
    merge_sort(&mut v[mid..], &mut scratch[mid..]);

    merge(v, mid, scratch);
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]` through `scratch` back into `v`.
fn merge(v: &mut [i64], mid: usize, scratch: &mut [i64]) {
    let len = v.len();

    let mut i = 0;
    let mut j = mid;
    let mut k = 0;
    while i < mid && j < len {
        // `<=` keeps the merge stable.
        if v[i] <= v[j] {
            scratch[k] = v[i];
            i += 1;
        } else {
            scratch[k] = v[j];
            j += 1;
        }
        k += 1;
    }

    scratch[k..k + (mid - i)].copy_from_slice(&v[i..mid]);
    scratch[k + (mid - i)..len].copy_from_slice(&v[j..]);

    v.copy_from_slice(&scratch[..len]);
}
