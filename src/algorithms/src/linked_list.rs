/* A singly linked list that owns its nodes.

Each node owns the next one through `Option<Box<Node<T>>>`. Nodes are
addressed by their position from the head, so "the node after n0"
becomes "the node after index i".

Key details:
- `insert_after(i, val)` links a new node right after node `i`.
- `remove_after(i)` unlinks the node right after node `i` and returns its value.
- `get(i)` walks `i` links from the head.
- `find(&val)` returns the index of the first node holding `val`.
*/

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedListError {
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for LinkedListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for list of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for LinkedListError {}

struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, val: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { val, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    /// Links `val` in directly after the node at `index`.
    pub fn insert_after(&mut self, index: usize, val: T) -> Result<(), LinkedListError> {
        let len = self.len;
        let node = self
            .node_mut(index)
            .ok_or(LinkedListError::IndexOutOfBounds { index, len })?;
        let next = node.next.take();
        node.next = Some(Box::new(Node { val, next }));
        self.len += 1;
        Ok(())
    }

    /// Unlinks the node following `index`. Returns `None` when `index` is
    /// the tail or past the end.
    pub fn remove_after(&mut self, index: usize) -> Option<T> {
        let node = self.node_mut(index)?;
        let mut removed = node.next.take()?;
        node.next = removed.next.take();
        self.len -= 1;
        Some(removed.val)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn find(&self, target: &T) -> Option<usize> {
        self.iter().position(|val| val == target)
    }
}

impl<T> Drop for LinkedList<T> {
    // iterative, so long lists cannot overflow the stack
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for val in iter {
            let node = tail.insert(Box::new(Node { val, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
