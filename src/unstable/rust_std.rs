sort_impl!("rust_std_unstable");

#[inline]
pub fn sort(v: &mut [i64]) {
    v.sort_unstable();
}
