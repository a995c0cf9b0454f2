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

//! Error types for histotop operations

use std::fmt;

/// ErrorKind is all kinds of Error of histotop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The analysis parameters are invalid.
    ConfigInvalid,
    /// A token could not be converted to a finite number.
    ParseFailed,
    /// The token source stopped because of a failure rather than exhaustion.
    SourceFailed,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::SourceFailed => "SourceFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all histotop functions.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::default(),
            source: None,
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Set source for error.
    ///
    /// # Panics
    ///
    /// Panics if the source has been set.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error as _;
    /// use histotop::error::{Error, ErrorKind};
    ///
    /// let cause = "x1".parse::<f64>().unwrap_err();
    /// let error = Error::new(ErrorKind::ParseFailed, "bad token").set_source(cause);
    /// assert!(error.source().is_some());
    /// ```
    pub fn set_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        assert!(self.source.is_none(), "the source error has been set");
        self.source = Some(src.into());
        self
    }

    pub(crate) fn config_invalid(top_n: usize, bin_width: f64, reason: &str) -> Self {
        Self::new(
            ErrorKind::ConfigInvalid,
            format!("invalid top N or bin width - {top_n}, {bin_width}: {reason}"),
        )
        .with_context("top_n", top_n)
        .with_context("bin_width", bin_width)
    }

    pub(crate) fn parse_failed(token: &str, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, reason).with_context("token", format!("{token:?}"))
    }

    pub(crate) fn source_failed(source: anyhow::Error) -> Self {
        Self::new(ErrorKind::SourceFailed, "token source stopped with an error").set_source(source)
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Return the value recorded for a context key, if any.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return fmt::Display::fmt(self, f);
        }
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("context", &self.context)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        for (i, (k, v)) in self.context.iter().enumerate() {
            let sep = if i == 0 { ", context: { " } else { ", " };
            write!(f, "{sep}{k}: {v}")?;
        }
        if !self.context.is_empty() {
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|v| v.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::parse_token;

    #[test]
    fn test_debug_output() {
        let err = parse_token("1.2x").unwrap_err().with_context("position", 3);

        let expected = "ParseFailed, context: { token: \"1.2x\", position: 3 } => \
                        token is not a number, source: invalid float literal";
        assert_eq!(err.to_string(), expected);
        assert_eq!(format!("{err:?}"), expected);

        let alternate = format!("{err:#?}");
        assert!(alternate.starts_with("Error {\n"), "{alternate}");
        assert!(alternate.contains("kind: ParseFailed,"), "{alternate}");
        assert!(alternate.contains("\"position\","), "{alternate}");
        assert!(alternate.contains("ParseFloatError"), "{alternate}");
    }
}
