// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Definitions relating to primitive output values.

use serde::Serialize;

/// A primitive value that can be written to any serde data format.
///
/// JSON has no representation for NaN or the infinities (`serde_json` writes them as `null`), so
/// non-finite floats are carried as strings instead.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Primitive {
    F64(f64),
    Str(String),
}

impl From<f64> for Primitive {
    /// Finite values stay numbers; NaN becomes `"NaN"` and infinities become `"inf"`/`"-inf"`.
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::F64(value)
        } else {
            // f64's Display gives exactly "NaN", "inf" and "-inf".
            Self::Str(value.to_string())
        }
    }
}
