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

use std::fmt;

use crate::histogram::HistogramBin;

/// The outcome of a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    count: u64,
    top_n: Vec<f64>,
    histogram: Vec<HistogramBin>,
    bin_width: f64,
}

impl Analysis {
    pub(super) fn new(
        count: u64,
        top_n: Vec<f64>,
        histogram: Vec<HistogramBin>,
        bin_width: f64,
    ) -> Self {
        Analysis {
            count,
            top_n,
            histogram,
            bin_width,
        }
    }

    /// Returns the number of tokens processed.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the largest values seen, in descending order.
    pub fn top_n(&self) -> &[f64] {
        &self.top_n
    }

    /// Returns the non-empty bins, in ascending order of lower bound.
    pub fn histogram(&self) -> &[HistogramBin] {
        &self.histogram
    }

    /// Returns the bin width the analysis ran with.
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Splits the analysis into count, top-N values and histogram bins.
    pub fn into_parts(self) -> (u64, Vec<f64>, Vec<HistogramBin>) {
        (self.count, self.top_n, self.histogram)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count: {}", self.count)?;
        writeln!(f, "top {}:", self.top_n.len())?;
        for value in &self.top_n {
            writeln!(f, "  {value}")?;
        }
        writeln!(f, "histogram (bin width {}):", self.bin_width)?;
        for bin in &self.histogram {
            writeln!(f, "  {bin}")?;
        }
        Ok(())
    }
}
