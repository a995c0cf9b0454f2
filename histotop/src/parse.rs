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

//! Conversion of text tokens into finite numbers.

use crate::error::Error;

/// Parses a token as a base-10 floating-point literal.
///
/// The accepted grammar is that of [`f64::from_str`]: an optional sign, digits with an
/// optional decimal point, and an optional exponent. The token is not trimmed. Literals
/// that denote a non-finite value (`inf`, `NaN`, or a magnitude beyond `f64::MAX`) are
/// rejected as well.
///
/// # Examples
///
/// ```
/// use histotop::parse::parse_token;
///
/// assert_eq!(parse_token("-2.5e1").unwrap(), -25.0);
/// assert!(parse_token("1.2.3").is_err());
/// assert!(parse_token(" 1").is_err());
/// ```
pub fn parse_token(token: &str) -> Result<f64, Error> {
    let value = token
        .parse::<f64>()
        .map_err(|err| Error::parse_failed(token, "token is not a number").set_source(err))?;
    if !value.is_finite() {
        return Err(Error::parse_failed(token, "token is not a finite number"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_accepts_literal_forms() {
        assert_eq!(parse_token("0.0").unwrap(), 0.0);
        assert_eq!(parse_token("10").unwrap(), 10.0);
        assert_eq!(parse_token("+1.5").unwrap(), 1.5);
        assert_eq!(parse_token("-.5").unwrap(), -0.5);
        assert_eq!(parse_token("5.").unwrap(), 5.0);
        assert_eq!(parse_token("1e3").unwrap(), 1000.0);
        assert_eq!(parse_token("2.5E-1").unwrap(), 0.25);
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in ["", "invalid", "1.2.3", "12abc", " 1", "1 ", "1,5", "--1", "e5"] {
            let err = parse_token(token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseFailed, "token {token:?}");
            assert_eq!(err.context("token"), Some(format!("{token:?}").as_str()));
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        for token in ["inf", "-infinity", "NaN", "1e400", "-1e400"] {
            let err = parse_token(token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseFailed, "token {token:?}");
            assert_eq!(err.message(), "token is not a finite number");
        }
    }
}
