/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use rand::Rng;

use crate::Snapshot;

/// A fixed-memory sample store over an unbounded stream of observations.
///
/// `update` must be safe under concurrent callers and never fails;
/// `snapshot` may run concurrently with updates and never observes a
/// torn sample.
pub trait Reservoir: Send + Sync {
    fn update(&self, value: i64);
    fn snapshot(&self) -> Snapshot;
}

/// Vitter's Algorithm R over a fixed slot array.
///
/// The first `capacity` values fill the slots in order. After that each
/// new value replaces a uniformly chosen slot with probability
/// `capacity / seen`, so every value of the stream is represented in the
/// sample with equal probability at any instant.
pub struct UniformReservoir {
    slots: Box<[AtomicI64]>,
    count: AtomicU64,
}

impl UniformReservoir {
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        UniformReservoir::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "reservoir capacity should be positive");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || AtomicI64::new(0));
        UniformReservoir {
            slots: slots.into_boxed_slice(),
            count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        let seen = self.count.load(Ordering::Acquire);
        seen.min(self.slots.len() as u64) as usize
    }
}

impl Default for UniformReservoir {
    fn default() -> Self {
        UniformReservoir::new()
    }
}

impl Reservoir for UniformReservoir {
    fn update(&self, value: i64) {
        let seen = self.count.fetch_add(1, Ordering::AcqRel);
        let capacity = self.slots.len() as u64;
        if seen < capacity {
            self.slots[seen as usize].store(value, Ordering::Release);
        } else {
            let i = rand::rng().random_range(0..=seen);
            if i < capacity {
                self.slots[i as usize].store(value, Ordering::Release);
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        // only the copy-out touches shared state, sorting happens on the
        // private copy inside Snapshot
        let len = self.len();
        let mut values = Vec::with_capacity(len);
        for slot in self.slots.iter().take(len) {
            values.push(slot.load(Ordering::Acquire));
        }
        Snapshot::new(values)
    }
}
