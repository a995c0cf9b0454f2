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
use std::fmt;

/// One bin of a histogram: the half-open interval `[lower_bound, upper_bound)` together
/// with the number of values that fell into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    lower_bound: f64,
    upper_bound: f64,
    frequency: u64,
}

impl HistogramBin {
    /// Creates a bin of the given width starting at `lower_bound`.
    pub fn new(lower_bound: f64, bin_width: f64, frequency: u64) -> Self {
        Self {
            lower_bound,
            upper_bound: lower_bound + bin_width,
            frequency,
        }
    }

    /// Returns the inclusive lower bound.
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Returns the exclusive upper bound.
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Returns the number of values counted in this bin.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Returns true if `value` lies in `[lower_bound, upper_bound)`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value < self.upper_bound
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) {}",
            self.lower_bound, self.upper_bound, self.frequency
        )
    }
}

/// Map key for a bin lower bound.
///
/// Lower bounds are never NaN or negative zero, so `total_cmp` agrees with `==` and
/// the key can implement `Eq` and `Ord`.
#[derive(Debug, Clone, Copy)]
pub(super) struct BinKey(pub(super) f64);

impl PartialEq for BinKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BinKey {}

impl PartialOrd for BinKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
