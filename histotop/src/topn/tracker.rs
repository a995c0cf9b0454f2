// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

// upper bound on the up-front reservation; the heap grows past it on demand
const MAX_PREALLOCATED: usize = 1024;

/// Size-bounded tracker of the largest values seen.
///
/// See the [module documentation](super) for more details.
#[derive(Debug, Clone)]
pub struct TopN {
    capacity: usize,
    // min-heap: the root is the smallest retained value
    heap: BinaryHeap<MinEntry>,
}

impl TopN {
    /// Creates a tracker that retains at most `capacity` values.
    ///
    /// # Panics
    ///
    /// If capacity is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1");
        TopN {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.min(MAX_PREALLOCATED)),
        }
    }

    /// Offers a value to the tracker, returning true if it was retained.
    ///
    /// # Panics
    ///
    /// If `value` is NaN.
    pub fn update(&mut self, value: f64) -> bool {
        assert!(!value.is_nan(), "value must not be NaN");
        if self.heap.len() < self.capacity {
            self.heap.push(MinEntry(value));
            return true;
        }

        match self.heap.peek_mut() {
            Some(mut min) if value > min.0 => {
                *min = MinEntry(value);
                true
            }
            _ => false,
        }
    }

    /// Returns the maximum number of retained values.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of retained values.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no value has been retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the smallest retained value, the one the next candidate must beat once
    /// the tracker is full.
    pub fn min_value(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.0)
    }

    /// Consumes the tracker, returning the retained values in descending order.
    pub fn into_sorted_vec(self) -> Vec<f64> {
        // ascending in MinEntry order is descending in value order
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.0)
            .collect()
    }
}

/// Heap entry with reversed ordering so that [`BinaryHeap`] keeps its minimum on top.
///
/// NaN never enters the heap, which makes `total_cmp` a valid total order here.
#[derive(Debug, Clone, Copy)]
struct MinEntry(f64);

impl PartialEq for MinEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinEntry {}

impl PartialOrd for MinEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}
