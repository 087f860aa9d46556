pub mod merge_sort;

pub use merge_sort::{merge_sort, merge_sort_by};
