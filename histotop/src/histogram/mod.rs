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

//! Fixed-width frequency histograms.
//!
//! Every bin is the half-open interval `[lower, lower + bin_width)` where `lower` is a
//! multiple of the bin width measured from zero. Bins are created lazily the first time
//! a value falls into them and are reported in ascending order of their lower bound.
//!
//! # Usage
//!
//! ```rust
//! use histotop::histogram::Histogram;
//!
//! let mut histogram = Histogram::new(2.0);
//! for value in [0.0, 1.2, 1.3, -2.3, 10.0] {
//!     histogram.update(value);
//! }
//!
//! let bins = histogram.into_bins();
//! assert_eq!(bins.len(), 3);
//! assert_eq!(bins[0].lower_bound(), -4.0);
//! assert_eq!(bins[1].frequency(), 3);
//! ```

mod accumulator;
mod bin;

pub use self::accumulator::Histogram;
pub use self::accumulator::HistogramIter;
pub use self::bin::HistogramBin;

/// Returns the lower bound of the bin containing `value`.
///
/// The quotient is floored, so negative values fall into the bin below zero:
/// with a width of `2.0`, `-2.3` maps to `-4.0`. Negative zero is folded into `+0.0`.
///
/// `bin_width` must be positive and finite; callers validate it up front.
///
/// # Examples
///
/// ```
/// use histotop::histogram::bin_lower_bound;
///
/// assert_eq!(bin_lower_bound(1.2, 0.5), 1.0);
/// assert_eq!(bin_lower_bound(-2.3, 2.0), -4.0);
/// assert_eq!(bin_lower_bound(-2.0, 2.0), -2.0);
/// ```
pub fn bin_lower_bound(value: f64, bin_width: f64) -> f64 {
    debug_assert!(bin_width > 0.0 && bin_width.is_finite());
    // adding +0.0 turns -0.0 into +0.0
    (value / bin_width).floor() * bin_width + 0.0
}

#[cfg(test)]
mod tests {
    use super::bin_lower_bound;

    #[test]
    fn test_floor_not_truncate() {
        assert_eq!(bin_lower_bound(-0.1, 1.0), -1.0);
        assert_eq!(bin_lower_bound(-29.66339874, 5.0), -30.0);
        assert_eq!(bin_lower_bound(-18.5052939, 5.0), -20.0);
        assert_eq!(bin_lower_bound(4.830790915, 5.0), 0.0);
    }

    #[test]
    fn test_exact_multiples_open_new_bin() {
        assert_eq!(bin_lower_bound(10.0, 2.0), 10.0);
        assert_eq!(bin_lower_bound(1.5, 0.5), 1.5);
        assert_eq!(bin_lower_bound(-4.0, 2.0), -4.0);
    }

    #[test]
    fn test_negative_zero_folds_into_zero_bin() {
        let lower = bin_lower_bound(-0.0, 2.0);
        assert_eq!(lower, 0.0);
        assert!(lower.is_sign_positive());

        let lower = bin_lower_bound(0.3, 2.0);
        assert!(lower.is_sign_positive());
    }
}
