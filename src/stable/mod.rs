pub mod mergesort;
pub mod rust_std;
