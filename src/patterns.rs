//! Provides a set of patterns useful for testing and benchmarking the sort
//! implementations. All patterns produce `i64` values.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(size: usize) -> Vec<i64> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i64>
where
    R: Into<rand::distributions::Uniform<i64>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i64> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(size: usize, exponent: f64) -> Vec<i64> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if size == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(size, exponent).unwrap();

    (0..size).map(|_| dist.sample(&mut rng) as i64).collect()
}

pub fn all_equal(size: usize) -> Vec<i64> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i64).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i64> {
    // :.
    // :::.
    // :::::.

    (0..size as i64).rev().collect::<Vec<_>>()
}

pub fn almost_sorted(size: usize) -> Vec<i64> {
    //   .:.:
    // ::::::
    // Ascending order perturbed by `size / 20` random transpositions.

    let mut v = ascending(size);
    if size < 2 {
        return v;
    }

    let mut rng = new_rng();
    for _ in 0..(size / 20) {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        v.swap(x, y);
    }

    v
}

pub fn pipe_organ(size: usize) -> Vec<i64> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    // Random seed, but the test suite prints it for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i64> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i64>()).collect()
}
