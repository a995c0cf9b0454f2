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

//! Exact tracking of the N largest values of a stream.
//!
//! The tracker holds at most N values. Until it is full every value is accepted; after
//! that a value replaces the current minimum only when it is strictly greater than it.
//! A value equal to the minimum is discarded, so the first-seen value wins a tie at the
//! boundary. Entries are individual observations: duplicates are kept, not merged.
//!
//! # Usage
//!
//! ```rust
//! use histotop::topn::TopN;
//!
//! let mut top = TopN::new(3);
//! for value in [5.0, 1.0, 9.0, 1.0, 7.0, 5.0] {
//!     top.update(value);
//! }
//! assert_eq!(top.into_sorted_vec(), vec![9.0, 7.0, 5.0]);
//! ```

mod tracker;

pub use self::tracker::TopN;
