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

use std::collections::BTreeMap;
use std::collections::btree_map;

use super::bin::BinKey;
use super::bin_lower_bound;
use super::HistogramBin;

/// Frequency histogram over fixed-width bins.
///
/// See the [module documentation](super) for more details.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bin_width: f64,
    total_count: u64,
    bins: BTreeMap<BinKey, u64>,
}

impl Histogram {
    /// Creates an empty histogram with the given bin width.
    ///
    /// # Panics
    ///
    /// If `bin_width` is not a positive finite number.
    pub fn new(bin_width: f64) -> Self {
        assert!(
            bin_width > 0.0 && bin_width.is_finite(),
            "bin width must be positive and finite"
        );
        Histogram {
            bin_width,
            total_count: 0,
            bins: BTreeMap::new(),
        }
    }

    /// Counts `value` in the bin that contains it, creating the bin if needed.
    ///
    /// When `value / bin_width` overflows, the value is counted in a bin with an
    /// infinite lower bound.
    ///
    /// # Panics
    ///
    /// If `value` is NaN.
    pub fn update(&mut self, value: f64) {
        assert!(!value.is_nan(), "value must not be NaN");
        let lower = bin_lower_bound(value, self.bin_width);
        *self.bins.entry(BinKey(lower)).or_insert(0) += 1;
        self.total_count += 1;
    }

    /// Returns the configured bin width.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Returns the number of non-empty bins.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Returns the number of values counted, which is the sum of all bin frequencies.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns true if no value has been counted.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Returns the frequency of the bin that would contain `value`.
    pub fn frequency(&self, value: f64) -> u64 {
        if value.is_nan() {
            return 0;
        }
        let lower = bin_lower_bound(value, self.bin_width);
        self.bins.get(&BinKey(lower)).copied().unwrap_or(0)
    }

    /// Iterates over the bins in ascending order of lower bound.
    pub fn iter(&self) -> HistogramIter<'_> {
        HistogramIter {
            bin_width: self.bin_width,
            inner: self.bins.iter(),
        }
    }

    /// Consumes the histogram, returning its bins in ascending order of lower bound.
    pub fn into_bins(self) -> Vec<HistogramBin> {
        self.iter().collect()
    }
}

/// Ascending iterator over the bins of a [`Histogram`].
#[derive(Debug, Clone)]
pub struct HistogramIter<'a> {
    bin_width: f64,
    inner: btree_map::Iter<'a, BinKey, u64>,
}

impl Iterator for HistogramIter<'_> {
    type Item = HistogramBin;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, frequency) = self.inner.next()?;
        Some(HistogramBin::new(key.0, self.bin_width, *frequency))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for HistogramIter<'_> {}

impl<'a> IntoIterator for &'a Histogram {
    type Item = HistogramBin;
    type IntoIter = HistogramIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
