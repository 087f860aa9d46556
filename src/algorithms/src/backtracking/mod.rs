pub mod subset_sum;

pub use subset_sum::{SubsetSumError, subset_sum_distinct, subset_sum_with_repetition};
