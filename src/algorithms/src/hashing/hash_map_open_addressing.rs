/* A hash map from integer keys that resolves collisions by open addressing.

Buckets live in one `Vec`. A key hashes to `key mod capacity` and
collisions are resolved with linear probing. Removal leaves a tombstone
so that probe chains running through the removed bucket stay intact.
Once the load factor exceeds `LOAD_THRESHOLD`, the next `put` grows the
table by `EXTEND_RATIO` and rehashes every live pair.

Key details:
- `get` returns `None` for a missing key.
- `put` returns the previous value when it overwrites a key.
- `remove` returns the removed value.
- A lookup that finds its key beyond a tombstone moves the pair into the
  first tombstone it passed, which shortens later probes.
*/

use std::fmt;
use std::mem;

const INITIAL_CAPACITY: usize = 4;
const LOAD_THRESHOLD: f64 = 2.0 / 3.0;
const EXTEND_RATIO: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Bucket<V> {
    Empty,
    Tombstone,
    Occupied { key: i32, val: V },
}

enum Probe {
    Found(usize),
    Vacant(usize),
}

pub struct HashMapOpenAddressing<V> {
    buckets: Vec<Bucket<V>>,
    len: usize,
}

impl<V> Default for HashMapOpenAddressing<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashMapOpenAddressing<V> {
    pub fn new() -> Self {
        Self {
            buckets: Self::empty_buckets(INITIAL_CAPACITY),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: i32) -> Option<&V> {
        let (probe, _) = self.probe(key);
        match probe {
            Probe::Found(index) => self.value_at(index),
            Probe::Vacant(_) => None,
        }
    }

    pub fn put(&mut self, key: i32, val: V) -> Option<V> {
        if self.load_factor() > LOAD_THRESHOLD {
            self.extend();
        }

        match self.find_bucket(key) {
            Probe::Found(index) => match &mut self.buckets[index] {
                Bucket::Occupied { val: slot, .. } => Some(mem::replace(slot, val)),
                _ => None,
            },
            Probe::Vacant(index) => {
                self.buckets[index] = Bucket::Occupied { key, val };
                self.len += 1;
                None
            }
        }
    }

    pub fn remove(&mut self, key: i32) -> Option<V> {
        let Probe::Found(index) = self.find_bucket(key) else {
            return None;
        };
        match mem::replace(&mut self.buckets[index], Bucket::Tombstone) {
            Bucket::Occupied { val, .. } => {
                self.len -= 1;
                Some(val)
            }
            other => {
                self.buckets[index] = other;
                None
            }
        }
    }

    /// Live pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &V)> {
        self.buckets.iter().filter_map(|bucket| match bucket {
            Bucket::Occupied { key, val } => Some((*key, val)),
            _ => None,
        })
    }

    fn hash(&self, key: i32) -> usize {
        (key as i64).rem_euclid(self.capacity() as i64) as usize
    }

    fn empty_buckets(capacity: usize) -> Vec<Bucket<V>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || Bucket::Empty);
        buckets
    }

    fn value_at(&self, index: usize) -> Option<&V> {
        match &self.buckets[index] {
            Bucket::Occupied { val, .. } => Some(val),
            _ => None,
        }
    }

    /// Linear probe from the key's home bucket. Also reports the first
    /// tombstone passed on the way.
    fn probe(&self, key: i32) -> (Probe, Option<usize>) {
        let mut index = self.hash(key);
        let mut first_tombstone = None;

        // at most one full lap: a table without empty buckets still ends
        for _ in 0..self.capacity() {
            match &self.buckets[index] {
                Bucket::Empty => {
                    return (Probe::Vacant(first_tombstone.unwrap_or(index)), first_tombstone);
                }
                Bucket::Occupied { key: found, .. } if *found == key => {
                    return (Probe::Found(index), first_tombstone);
                }
                Bucket::Tombstone if first_tombstone.is_none() => {
                    first_tombstone = Some(index);
                }
                _ => {}
            }
            index = (index + 1) % self.capacity();
        }

        (Probe::Vacant(first_tombstone.unwrap_or(index)), first_tombstone)
    }

    fn find_bucket(&mut self, key: i32) -> Probe {
        match self.probe(key) {
            (Probe::Found(index), Some(tombstone)) => {
                self.buckets.swap(tombstone, index);
                Probe::Found(tombstone)
            }
            (probe, _) => probe,
        }
    }

    fn extend(&mut self) {
        let new_capacity = self.capacity() * EXTEND_RATIO;
        let old = mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        self.len = 0;
        for bucket in old {
            if let Bucket::Occupied { key, val } = bucket {
                if let Probe::Vacant(index) = self.find_bucket(key) {
                    self.buckets[index] = Bucket::Occupied { key, val };
                    self.len += 1;
                }
            }
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for HashMapOpenAddressing<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
