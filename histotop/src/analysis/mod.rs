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

//! Single-pass histogram and top-N analysis of a token stream.
//!
//! [`analyze`] validates its parameters, then pulls every token from a [`TokenSource`],
//! parses it, counts it in its histogram bin and offers it to the top-N tracker. The
//! result is all-or-nothing: a parameter, parse or source failure yields only an
//! [`Error`] and every partial result is dropped.
//!
//! # Usage
//!
//! ```rust
//! use histotop::analysis::analyze;
//! use histotop::source::IterSource;
//!
//! let mut source = IterSource::new(["0.0", "1.2", "1.3", "-2.3", "10"]);
//! let analysis = analyze(&mut source, 10, 2.0).unwrap();
//!
//! assert_eq!(analysis.count(), 5);
//! assert_eq!(analysis.top_n(), &[10.0, 1.3, 1.2, 0.0, -2.3]);
//! assert_eq!(analysis.histogram().len(), 3);
//! ```
//!
//! # Push-style input
//!
//! ```rust
//! use histotop::analysis::Analyzer;
//!
//! let mut analyzer = Analyzer::new(2, 0.5).unwrap();
//! for token in ["1.2", "3", "0.1"] {
//!     analyzer.update(token).unwrap();
//! }
//! let analysis = analyzer.finish();
//! assert_eq!(analysis.top_n(), &[3.0, 1.2]);
//! ```

mod analyzer;
mod result;

pub use self::analyzer::Analyzer;
pub use self::result::Analysis;

use crate::error::Error;
use crate::source::TokenSource;

/// Analyzes every token of `source`, keeping the `top_n` largest values and a histogram
/// with bins `bin_width` wide.
///
/// Parameters are checked before the first token is requested: `top_n` must be at least
/// one and `bin_width` must be positive and finite.
///
/// # Errors
///
/// * [`ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid) for invalid parameters.
/// * [`ParseFailed`](crate::error::ErrorKind::ParseFailed) for the first token that is not
///   a finite number.
/// * [`SourceFailed`](crate::error::ErrorKind::SourceFailed) if the source stopped because
///   of an error.
pub fn analyze<S: TokenSource>(
    mut source: S,
    top_n: usize,
    bin_width: f64,
) -> Result<Analysis, Error> {
    let mut analyzer = Analyzer::new(top_n, bin_width)?;
    while source.advance() {
        analyzer.update(source.current())?;
    }
    if let Some(err) = source.take_error() {
        return Err(Error::source_failed(err).with_context("tokens_read", analyzer.count()));
    }
    Ok(analyzer.finish())
}
