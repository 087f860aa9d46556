pub mod array_queue;
pub mod error;

pub use array_queue::{ArrayQueue, Iter, QueueSnapshot};
pub use error::QueueError;
