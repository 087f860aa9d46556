/* A bounded FIFO queue backed by a circular array.

The `ArrayQueue<T>` stores up to a fixed number of elements (`capacity`).
Storage is allocated once and never grows. The queue tracks the index of
its first element (`front`) and its length; the rear is derived as
`(front + len) % capacity`, so removing from the front never shifts
elements.

Key details:
- `push` appends at the rear, failing with `QueueFull` when at capacity.
- `pop` removes from the front, failing with `QueueEmpty` when empty.
- `peek` reads the front without consuming it.
- `to_vec` returns the logical contents in front-to-back order.
- Slots outside the logical window keep stale values and are never read.
*/

use std::fmt;

use serde::Serialize;

use super::error::QueueError;

pub struct ArrayQueue<T> {
    nums: Box<[T]>,
    front: usize,
    len: usize,
}

/// Point-in-time view of a queue, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot<T> {
    pub capacity: usize,
    pub front: usize,
    pub len: usize,
    pub items: Vec<T>,
}

impl<T: Copy + Default> ArrayQueue<T> {
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity { capacity });
        }

        let mut nums = Vec::new();
        nums.try_reserve_exact(capacity)
            .map_err(|_| QueueError::InvalidCapacity { capacity })?;
        nums.resize(capacity, T::default());

        Ok(Self {
            nums: nums.into_boxed_slice(),
            front: 0,
            len: 0,
        })
    }

    /// Appends `item` at the rear.
    ///
    /// A full queue is left untouched and the item is rejected.
    pub fn push(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::QueueFull {
                capacity: self.capacity(),
            });
        }

        let rear = (self.front + self.len) % self.capacity();
        self.nums[rear] = item;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let item = self.peek()?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Ok(item)
    }

    pub fn peek(&self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::QueueEmpty);
        }
        Ok(self.nums[self.front])
    }

    /// Copies the logical contents out in front-to-back order.
    pub fn to_vec(&self) -> Vec<T> {
        let (head, tail) = self.as_slices();
        let mut items = Vec::with_capacity(self.len);
        items.extend_from_slice(head);
        items.extend_from_slice(tail);
        items
    }

    pub fn snapshot(&self) -> QueueSnapshot<T> {
        QueueSnapshot {
            capacity: self.capacity(),
            front: self.front,
            len: self.len,
            items: self.to_vec(),
        }
    }
}

impl<T> ArrayQueue<T> {
    pub fn capacity(&self) -> usize {
        self.nums.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Forgets every element. `front` and the stored slots are left as they are.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.as_slices();
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }

    /// Splits the logical window into the segment running to the end of
    /// storage and the segment that wrapped around to the start.
    fn as_slices(&self) -> (&[T], &[T]) {
        let rear = self.front + self.len;
        if rear > self.capacity() {
            let wrapped = rear % self.capacity();
            (&self.nums[self.front..], &self.nums[..wrapped])
        } else {
            (&self.nums[self.front..rear], &[])
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("capacity", &self.capacity())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a ArrayQueue<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Front-to-back iterator over an [`ArrayQueue`].
pub struct Iter<'a, T> {
    head: std::slice::Iter<'a, T>,
    tail: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.next().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.head.len() + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
