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

//! Single-pass streaming analysis of numeric text tokens.
//!
//! From a stream of tokens, histotop computes a frequency histogram over fixed-width bins
//! and the N largest values seen. Memory use is bounded by N plus the number of distinct
//! non-empty bins; the input itself is never buffered.
//!
//! The building blocks can be used on their own:
//!
//! - [`parse::parse_token`] converts a token into a finite `f64`.
//! - [`histogram::Histogram`] counts values per bin.
//! - [`topn::TopN`] keeps the largest values.
//! - [`source::TokenSource`] abstracts where tokens come from.
//! - [`analysis::analyze`] drives a source through all of the above.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod analysis;
pub mod error;
pub mod histogram;
pub mod parse;
pub mod source;
pub mod topn;

pub use self::analysis::analyze;
