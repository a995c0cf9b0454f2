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

use googletest::assert_that;
use googletest::prelude::eq;
use histotop::histogram::Histogram;
use histotop::histogram::HistogramBin;

#[test]
fn test_empty() {
    let histogram = Histogram::new(1.0);
    assert!(histogram.is_empty());
    assert_eq!(histogram.num_bins(), 0);
    assert_eq!(histogram.total_count(), 0);
    assert_eq!(histogram.iter().count(), 0);
    assert_eq!(histogram.frequency(0.5), 0);
}

#[test]
fn test_bins_are_created_lazily_and_sorted() {
    let mut histogram = Histogram::new(0.5);
    for value in [3.1, -0.2, 1.2, 1.4, -7.0, 3.2] {
        histogram.update(value);
    }
    assert_that!(histogram.num_bins(), eq(4usize));
    assert_that!(histogram.total_count(), eq(6u64));
    assert_eq!(histogram.frequency(1.0), 2);
    assert_eq!(histogram.frequency(3.4), 2);
    assert_eq!(histogram.frequency(100.0), 0);

    let lowers: Vec<f64> = histogram.iter().map(|bin| bin.lower_bound()).collect();
    assert_eq!(lowers, vec![-7.0, -0.5, 1.0, 3.0]);

    let mut total = 0;
    for bin in &histogram {
        assert_eq!(bin.upper_bound() - bin.lower_bound(), 0.5);
        total += bin.frequency();
    }
    assert_eq!(total, histogram.total_count());

    let bins = histogram.into_bins();
    assert_eq!(bins[1], HistogramBin::new(-0.5, 0.5, 1));
    assert!(bins[1].contains(-0.2));
    assert!(!bins[1].contains(0.0));
}

#[test]
fn test_signed_zero_share_a_bin() {
    let mut histogram = Histogram::new(2.0);
    histogram.update(0.0);
    histogram.update(-0.0);
    histogram.update(1.9);
    let bins = histogram.into_bins();
    assert_eq!(bins, vec![HistogramBin::new(0.0, 2.0, 3)]);
    assert!(bins[0].lower_bound().is_sign_positive());
}

#[test]
fn test_bin_display() {
    let bin = HistogramBin::new(-4.0, 2.0, 7);
    assert_eq!(bin.to_string(), "[-4, -2) 7");
}

#[test]
#[should_panic(expected = "bin width must be positive and finite")]
fn test_zero_width_panics() {
    let _ = Histogram::new(0.0);
}
