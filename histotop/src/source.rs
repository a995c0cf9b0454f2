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

//! Token sources feeding an analysis.
//!
//! A [`TokenSource`] yields text tokens one at a time. Iteration stops either because
//! the input is exhausted or because of a failure; in the latter case the failure is
//! reported once by [`TokenSource::take_error`].
//!
//! # Usage
//!
//! ```rust
//! use histotop::source::LineSource;
//! use histotop::source::TokenSource;
//!
//! let mut source = LineSource::new("1.5\n-2\n".as_bytes());
//! let mut tokens = vec![];
//! while source.advance() {
//!     tokens.push(source.current().to_string());
//! }
//! assert!(source.take_error().is_none());
//! assert_eq!(tokens, ["1.5", "-2"]);
//! ```

use std::io::BufRead;

/// A forward-only producer of text tokens.
pub trait TokenSource {
    /// Attempts to produce the next token, returning false when the input is exhausted
    /// or iteration stopped because of an error.
    fn advance(&mut self) -> bool;

    /// Returns the token produced by the last successful [`advance`](Self::advance).
    fn current(&self) -> &str;

    /// Returns the error that stopped iteration, if any.
    ///
    /// Meaningful once `advance` has returned false.
    fn take_error(&mut self) -> Option<anyhow::Error>;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn current(&self) -> &str {
        (**self).current()
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        (**self).take_error()
    }
}

/// Yields one token per line of a reader.
///
/// The line terminator (`\n` or `\r\n`) is stripped. A last line without terminator is
/// still yielded, while nothing is yielded for an empty remainder after the final
/// terminator. Empty lines in the middle of the input are yielded as empty tokens.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    line: String,
    error: Option<std::io::Error>,
    done: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Creates a line source over `reader`.
    pub fn new(reader: R) -> Self {
        LineSource {
            reader,
            line: String::new(),
            error: None,
            done: false,
        }
    }
}

impl<R: BufRead> TokenSource for LineSource<R> {
    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                self.done = true;
                false
            }
            Ok(_) => {
                if self.line.ends_with('\n') {
                    self.line.pop();
                    if self.line.ends_with('\r') {
                        self.line.pop();
                    }
                }
                true
            }
            Err(err) => {
                self.line.clear();
                self.error = Some(err);
                self.done = true;
                false
            }
        }
    }

    fn current(&self) -> &str {
        &self.line
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take().map(anyhow::Error::from)
    }
}

/// Yields one token per whitespace-separated word of a reader.
#[derive(Debug)]
pub struct WordSource<R> {
    lines: LineSource<R>,
    words: Vec<String>,
    next: usize,
}

impl<R: BufRead> WordSource<R> {
    /// Creates a word source over `reader`.
    pub fn new(reader: R) -> Self {
        WordSource {
            lines: LineSource::new(reader),
            words: vec![],
            next: 0,
        }
    }
}

impl<R: BufRead> TokenSource for WordSource<R> {
    fn advance(&mut self) -> bool {
        loop {
            if self.next < self.words.len() {
                self.next += 1;
                return true;
            }
            if !self.lines.advance() {
                self.words.clear();
                self.next = 0;
                return false;
            }
            self.words.clear();
            self.words
                .extend(self.lines.current().split_whitespace().map(String::from));
            self.next = 0;
        }
    }

    fn current(&self) -> &str {
        match self.next.checked_sub(1) {
            Some(idx) => &self.words[idx],
            None => "",
        }
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        self.lines.take_error()
    }
}

/// Yields the items of an in-memory sequence. Never fails.
pub struct IterSource<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I> IterSource<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    /// Creates a source over the items of `iter`.
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        IterSource {
            iter: iter.into_iter(),
            current: None,
        }
    }
}

impl<I> TokenSource for IterSource<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn advance(&mut self) -> bool {
        self.current = self.iter.next();
        self.current.is_some()
    }

    fn current(&self) -> &str {
        self.current.as_ref().map_or("", |item| item.as_ref())
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::BufReader;
    use std::io::Read;

    use super::*;

    fn collect(source: &mut impl TokenSource) -> Vec<String> {
        let mut tokens = vec![];
        while source.advance() {
            tokens.push(source.current().to_string());
        }
        tokens
    }

    struct FailingReader {
        data: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::other("disk on fire"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_line_source_terminators() {
        let mut source = LineSource::new("1\r\n2\n\n3".as_bytes());
        assert_eq!(collect(&mut source), ["1", "2", "", "3"]);
        assert!(source.take_error().is_none());
        assert!(!source.advance());

        let mut source = LineSource::new("1.2\n".as_bytes());
        assert_eq!(collect(&mut source), ["1.2"]);

        let mut source = LineSource::new("".as_bytes());
        assert!(collect(&mut source).is_empty());
    }

    #[test]
    fn test_line_source_reports_io_error() {
        let reader = BufReader::new(FailingReader { data: b"1\n2\n" });
        let mut source = LineSource::new(reader);
        assert_eq!(collect(&mut source), ["1", "2"]);
        let err = source.take_error().unwrap();
        assert_eq!(err.to_string(), "disk on fire");
        assert!(source.take_error().is_none());
    }

    #[test]
    fn test_line_source_rejects_invalid_utf8() {
        let mut source = LineSource::new(&b"1\n\xff\xfe\n"[..]);
        assert_eq!(collect(&mut source), ["1"]);
        assert!(source.take_error().is_some());
    }

    #[test]
    fn test_word_source_splits_on_whitespace() {
        let mut source = WordSource::new("1 2\t3\n\n  4  \n5".as_bytes());
        assert_eq!(collect(&mut source), ["1", "2", "3", "4", "5"]);
        assert!(source.take_error().is_none());
    }

    #[test]
    fn test_iter_source() {
        let mut source = IterSource::new(["a", "b"]);
        assert_eq!(source.current(), "");
        assert_eq!(collect(&mut source), ["a", "b"]);
        assert!(source.take_error().is_none());

        let mut source = IterSource::new(vec![String::from("x")]);
        assert_eq!(collect(&mut &mut source), ["x"]);
    }
}
