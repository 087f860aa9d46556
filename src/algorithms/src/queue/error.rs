use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    InvalidCapacity { capacity: usize },

    QueueFull { capacity: usize },

    QueueEmpty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "invalid queue capacity {}, must be positive and fit in memory",
                    capacity
                )
            }
            Self::QueueFull { capacity } => write!(f, "queue is full ({} items)", capacity),
            Self::QueueEmpty => write!(f, "queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}
