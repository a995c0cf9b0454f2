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

use super::Analysis;
use crate::error::Error;
use crate::histogram::Histogram;
use crate::histogram::bin_lower_bound;
use crate::parse::parse_token;
use crate::topn::TopN;

/// State of one analysis: the token count, the histogram and the top-N tracker.
///
/// An analyzer whose [`update`](Self::update) returned an error must be discarded;
/// [`analyze`](super::analyze) does so and never exposes partial results.
#[derive(Debug, Clone)]
pub struct Analyzer {
    count: u64,
    histogram: Histogram,
    top_n: TopN,
}

impl Analyzer {
    /// Creates an analyzer retaining the `top_n` largest values with bins `bin_width` wide.
    ///
    /// # Errors
    ///
    /// If `top_n` is zero, or `bin_width` is negative, zero, or not finite.
    pub fn new(top_n: usize, bin_width: f64) -> Result<Self, Error> {
        if top_n < 1 {
            return Err(Error::config_invalid(top_n, bin_width, "top N must be at least 1"));
        }
        if bin_width < 0.0 {
            return Err(Error::config_invalid(
                top_n,
                bin_width,
                "bin width must not be negative",
            ));
        }
        if bin_width == 0.0 {
            return Err(Error::config_invalid(top_n, bin_width, "bin width must not be zero"));
        }
        if !bin_width.is_finite() {
            return Err(Error::config_invalid(top_n, bin_width, "bin width must be finite"));
        }

        Ok(Analyzer {
            count: 0,
            histogram: Histogram::new(bin_width),
            top_n: TopN::new(top_n),
        })
    }

    /// Counts one token, then parses it and feeds the value to the histogram and the
    /// top-N tracker.
    ///
    /// A value whose bin boundary overflows (`1e300` with a width of `1e-10`) is rejected
    /// like a malformed token.
    pub fn update(&mut self, token: &str) -> Result<(), Error> {
        self.count += 1;
        let value = parse_token(token).map_err(|err| err.with_context("position", self.count))?;
        if !bin_lower_bound(value, self.histogram.bin_width()).is_finite() {
            return Err(
                Error::parse_failed(token, "token is out of range for the bin width")
                    .with_context("position", self.count),
            );
        }
        self.histogram.update(value);
        self.top_n.update(value);
        Ok(())
    }

    /// Returns the number of tokens counted so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Assembles the result: top-N values descending, bins ascending.
    pub fn finish(self) -> Analysis {
        let bin_width = self.histogram.bin_width();
        Analysis::new(
            self.count,
            self.top_n.into_sorted_vec(),
            self.histogram.into_bins(),
            bin_width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rejects_invalid_parameters() {
        for (top_n, bin_width) in [
            (0, 1.0),
            (10, -0.5),
            (10, 0.0),
            (10, -0.0),
            (10, f64::NAN),
            (10, f64::INFINITY),
            (0, -1.0),
        ] {
            let err = Analyzer::new(top_n, bin_width).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
            assert_eq!(err.context("top_n"), Some(top_n.to_string().as_str()));
            assert_eq!(err.context("bin_width"), Some(bin_width.to_string().as_str()));
        }
    }

    #[test]
    fn test_count_includes_failed_token() {
        let mut analyzer = Analyzer::new(3, 1.0).unwrap();
        analyzer.update("1").unwrap();
        let err = analyzer.update("x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.context("position"), Some("2"));
        assert_eq!(analyzer.count(), 2);
    }

    #[test]
    fn test_overflowing_bin_is_rejected() {
        let mut analyzer = Analyzer::new(3, 1e-10).unwrap();
        analyzer.update("1e-5").unwrap();
        let err = analyzer.update("1e300").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.context("token"), Some("\"1e300\""));
        assert_eq!(err.context("position"), Some("2"));
    }
}
