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

//! Walkthrough of the histotop building blocks.

use histotop::analysis::Analyzer;
use histotop::analysis::analyze;
use histotop::histogram::Histogram;
use histotop::source::IterSource;
use histotop::source::LineSource;
use histotop::topn::TopN;

fn main() {
    println!("=== histotop quickstart ===\n");

    // Example 1: analyze an in-memory stream
    println!("1. Analyze a stream of tokens:");
    let tokens = ["0.0", "1.2", "1.3", "-2.3", "10"];
    let analysis = analyze(IterSource::new(tokens), 10, 2.0).unwrap();
    println!("   Count: {}", analysis.count());
    println!("   Top N: {:?}", analysis.top_n());
    for bin in analysis.histogram() {
        println!("   Bin {bin}");
    }
    println!();

    // Example 2: one malformed token fails the whole run
    println!("2. A malformed token fails the whole run:");
    let input = "1.2\ninvalid\n232\n";
    match analyze(LineSource::new(input.as_bytes()), 10, 0.5) {
        Ok(analysis) => println!("   Unexpected success: {analysis:?}"),
        Err(err) => println!("   Error: {err}"),
    }
    println!();

    // Example 3: parameters are checked before any token is read
    println!("3. Parameters are validated up front:");
    match Analyzer::new(10, -0.5) {
        Ok(_) => println!("   Unexpected success"),
        Err(err) => println!("   Error: {err}"),
    }
    println!();

    // Example 4: the components on their own
    println!("4. Histogram and top-N by hand:");
    let mut histogram = Histogram::new(5.0);
    let mut top = TopN::new(3);
    for i in 0..50 {
        let value = ((i * 37) % 101) as f64 - 50.0;
        histogram.update(value);
        top.update(value);
    }
    println!("   Bins: {}", histogram.num_bins());
    println!("   Values counted: {}", histogram.total_count());
    println!("   Top 3: {:?}", top.into_sorted_vec());
}
