sort_impl!("rust_std_stable");

#[inline]
pub fn sort(v: &mut [i64]) {
    v.sort();
}
