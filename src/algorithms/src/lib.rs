pub mod backtracking;
pub mod hashing;
pub mod linked_list;
pub mod queue;
pub mod sorting;

pub use backtracking::{SubsetSumError, subset_sum_distinct, subset_sum_with_repetition};
pub use hashing::HashMapOpenAddressing;
pub use linked_list::{LinkedList, LinkedListError};
pub use queue::{ArrayQueue, QueueError, QueueSnapshot};
pub use sorting::{merge_sort, merge_sort_by};
