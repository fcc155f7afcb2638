use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use introsort_comp::{patterns, stable, unstable, Sort};

#[inline(never)]
fn bench_sort<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i64>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{}-hot-{pattern_name}-{test_size}", <S as Sort>::name()),
        |b| {
            b.iter_batched(
                || pattern_provider(test_size),
                |mut test_data| <S as Sort>::sort(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn bench_pattern(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i64>,
) {
    bench_sort::<unstable::introsort::SortImpl>(c, test_size, pattern_name, pattern_provider);
    bench_sort::<unstable::quicksort::SortImpl>(c, test_size, pattern_name, pattern_provider);
    bench_sort::<unstable::rust_std::SortImpl>(c, test_size, pattern_name, pattern_provider);
    bench_sort::<stable::mergesort::SortImpl>(c, test_size, pattern_name, pattern_provider);
    bench_sort::<stable::rust_std::SortImpl>(c, test_size, pattern_name, pattern_provider);
}

fn criterion_benchmark(c: &mut Criterion) {
    // Distinct inputs per sample instead of one fixed vector per process.
    patterns::disable_fixed_seed();

    let test_sizes = [500, 5_000, 50_000, 500_000];

    let pattern_providers: [(&str, fn(usize) -> Vec<i64>); 5] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("almost_sorted", patterns::almost_sorted),
        ("all_equal", patterns::all_equal),
    ];

    for test_size in test_sizes {
        for (pattern_name, pattern_provider) in pattern_providers {
            bench_pattern(c, test_size, pattern_name, pattern_provider);
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
