//! Testbed for a randomized introsort: quicksort with uniformly random pivots, a
//! depth-limited heapsort fallback that caps the worst case at O(n * log(n)), and
//! insertion sort for short segments. Compared against a plain randomized quicksort,
//! a stable top-down merge sort and the stdlib sorts.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(v: &mut [i64]) {
                sort(v);
            }
        }
    };
}

/// Uniform entry point for the test suite and the benchmark harness.
///
/// All sorts in this crate operate on `i64` slices with their total order. There is
/// deliberately no comparator variant.
pub trait Sort {
    fn name() -> String;

    fn sort(v: &mut [i64]);
}

pub mod patterns;
pub mod stable;
pub mod unstable;
