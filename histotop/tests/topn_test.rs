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

use histotop::topn::TopN;

#[test]
fn test_fewer_values_than_capacity() {
    let mut top = TopN::new(10);
    for value in [1.2, -3.0, 8.5] {
        assert!(top.update(value));
    }
    assert_eq!(top.len(), 3);
    assert_eq!(top.capacity(), 10);
    assert_eq!(top.into_sorted_vec(), vec![8.5, 1.2, -3.0]);
}

#[test]
fn test_matches_full_sort() {
    let values: Vec<f64> = (0..500).map(|i| ((i * 7919) % 503) as f64 * 0.25).collect();

    let mut top = TopN::new(17);
    for &value in &values {
        top.update(value);
    }

    let mut expected = values.clone();
    expected.sort_by(|a, b| b.total_cmp(a));
    expected.truncate(17);
    assert_eq!(top.into_sorted_vec(), expected);
}

#[test]
fn test_duplicates_are_individual_entries() {
    let mut top = TopN::new(3);
    for value in [7.0, 7.0, 7.0, 7.0, 1.0] {
        top.update(value);
    }
    assert_eq!(top.min_value(), Some(7.0));
    assert_eq!(top.into_sorted_vec(), vec![7.0, 7.0, 7.0]);
}
