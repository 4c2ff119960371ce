//! The simulated resizing table.
//!
//! The table does not resolve collisions: each bucket holds only the last
//! value written to it and every write into an occupied bucket is counted.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::model::RehashMode;

/// Largest capacity that can still double.
const MAX_GROWABLE: u64 = u64::MAX / 2;

/// A linear hash `(a * x + b) mod capacity` over some coefficient domain.
pub(crate) trait LinearHash {
    /// Bucket identifier.
    type Slot: Copy + Eq + Hash + Debug;

    /// Bucket of an original key.
    fn of_key(&self, key: u64, capacity: u64) -> Self::Slot;

    /// Bucket of an old bucket, re-hashed as if it were a key.
    fn of_slot(&self, slot: Self::Slot, capacity: u64) -> Self::Slot;
}

/// Integer coefficients. Buckets are exact and always in `[0, capacity)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntegerHash {
    a: i128,
    b: i128,
}

impl IntegerHash {
    pub(crate) fn new(a: i64, b: i64) -> Self {
        Self {
            a: a as i128,
            b: b as i128,
        }
    }
}

impl LinearHash for IntegerHash {
    type Slot = u64;

    fn of_key(&self, key: u64, capacity: u64) -> u64 {
        (self.a * key as i128 + self.b).rem_euclid(capacity as i128) as u64
    }

    fn of_slot(&self, slot: u64, capacity: u64) -> u64 {
        self.of_key(slot, capacity)
    }
}

/// Real coefficients. Buckets are real remainders, identified by their bits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RealHash {
    a: f64,
    b: f64,
}

impl RealHash {
    pub(crate) fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    fn bucket(&self, x: f64, capacity: u64) -> u64 {
        let r = (self.a * x + self.b).rem_euclid(capacity as f64);
        // -0.0 + 0.0 is +0.0: both zeros are one bucket.
        (r + 0.0).to_bits()
    }
}

impl LinearHash for RealHash {
    type Slot = u64;

    fn of_key(&self, key: u64, capacity: u64) -> u64 {
        self.bucket(key as f64, capacity)
    }

    fn of_slot(&self, slot: u64, capacity: u64) -> u64 {
        self.bucket(f64::from_bits(slot), capacity)
    }
}

/// Per-evaluation table state. Built fresh by every cost evaluation.
#[derive(Debug)]
pub(crate) struct SimulatedTable<H: LinearHash> {
    hash: H,
    capacity: u64,
    threshold: f64,
    mode: RehashMode,
    /// Bucket -> original key last written there.
    slots: HashMap<H::Slot, u64>,
    /// Occupied buckets in first-write order.
    order: Vec<H::Slot>,
    rehashes: u32,
    collisions: u64,
}

impl<H: LinearHash> SimulatedTable<H> {
    pub(crate) fn new(hash: H, capacity: u64, threshold: f64, mode: RehashMode) -> Self {
        debug_assert!(capacity >= 2);
        Self {
            hash,
            capacity,
            threshold,
            mode,
            slots: HashMap::new(),
            order: Vec::new(),
            rehashes: 0,
            collisions: 0,
        }
    }

    /// Hashes `key` into the table.
    pub(crate) fn insert(&mut self, key: u64) {
        let index = self.hash.of_key(key, self.capacity);
        self.place(index, key);
    }

    /// Stores `origin` in bucket `index` and rehashes if the load factor
    /// now exceeds the threshold. Growth stops once capacity can no longer
    /// double.
    fn place(&mut self, index: H::Slot, origin: u64) {
        match self.slots.insert(index, origin) {
            Some(_) => self.collisions += 1,
            None => self.order.push(index),
        }
        if self.load_factor() > self.threshold && self.capacity <= MAX_GROWABLE {
            self.rehash();
        }
    }

    fn rehash(&mut self) {
        self.rehashes += 1;
        self.capacity *= 2;

        let old_slots = std::mem::take(&mut self.slots);
        let old_order = std::mem::take(&mut self.order);

        for index in old_order {
            let origin = old_slots[&index];
            let moved = match self.mode {
                RehashMode::Quirk => self.hash.of_slot(index, self.capacity),
                RehashMode::Rekey => self.hash.of_key(origin, self.capacity),
            };
            self.place(moved, origin);
        }
    }

    pub(crate) fn load_factor(&self) -> f64 {
        self.slots.len() as f64 / self.capacity as f64
    }

    pub(crate) fn occupied(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn capacity(&self) -> u64 {
        self.capacity
    }

    pub(crate) fn rehashes(&self) -> u32 {
        self.rehashes
    }

    pub(crate) fn collisions(&self) -> u64 {
        self.collisions
    }
}
