// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parsing of input values.

use miette::SourceSpan;
use tracing::debug;

use crate::error::{Error, Result};

/// Parse an input value into an `f64`.
///
/// Accepts decimal literals (optionally signed, with a fraction and/or exponent) and the special
/// values `nan`, `inf` and `infinity` in any case, optionally signed. Surrounding whitespace is
/// ignored.
///
/// # Parameters
/// - `input`: the text to parse.
///
/// # Returns
/// - the parsed value.
/// - `Error::ParseValue` if the input is empty, is not a valid literal, or is a finite literal
///   too big for an `f64`. Its span points into `input`.
pub fn parse_value(input: &str) -> Result<f64> {
    let text = input.trim();
    let start = input.len() - input.trim_start().len();
    let span: SourceSpan = (start, text.len()).into();

    if text.is_empty() {
        return Err(Box::new(Error::ParseValue {
            span: (0, input.len()).into(),
            desc: "empty value".to_owned(),
        }));
    }

    match text.parse::<f64>() {
        Ok(f) if f.is_infinite() && !names_infinity(text) => Err(Box::new(Error::ParseValue {
            span,
            desc: "number does not fit in 64-bit float data type".to_owned(),
        })),
        Ok(f) => {
            debug!(input = text, value = f, "parsed value");
            Ok(f)
        }
        Err(e) => Err(Box::new(Error::ParseValue {
            span,
            desc: format!("invalid value {text:?}: {e}"),
        })),
    }
}

// Whether a literal that parsed successfully spells out an infinity rather than overflowing.
fn names_infinity(text: &str) -> bool {
    text.to_ascii_lowercase().contains("inf")
}
