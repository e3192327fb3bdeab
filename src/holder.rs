// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The `ValueHolder` type.

use tracing::trace;

use crate::error::{Error, Result};

/// Holds a single 64-bit float and computes its principal square root.
///
/// Any value is accepted, including NaN and the infinities. The holder is never mutated after
/// construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[must_use]
pub struct ValueHolder {
    value: f64,
}

impl ValueHolder {
    /// Create a holder for `value`.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Get the stored value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the principal square root of the stored value.
    ///
    /// # Returns
    /// - `0` for zero.
    /// - the positive square root for positive values (`+inf` for `+inf`).
    /// - NaN for negative values and for NaN. No error is raised: callers that care must check the
    ///   result with `f64::is_nan`, or use `try_compute` instead.
    pub fn compute(&self) -> f64 {
        let root = self.value.sqrt();
        trace!(value = self.value, root, "computed square root");
        root
    }

    /// Get the principal square root of the stored value, or an error where `compute` would
    /// return NaN.
    ///
    /// # Returns
    /// - `Error::NegativeInput` if the value is negative (including `-inf`). `-0.0` is not
    ///   negative here: its square root is `-0.0`.
    /// - `Error::NotANumber` if the value is NaN.
    /// - the result of `compute` otherwise.
    pub fn try_compute(&self) -> Result<f64> {
        if self.value.is_nan() {
            return Err(Box::new(Error::NotANumber));
        }
        if self.value < 0f64 {
            return Err(Box::new(Error::NegativeInput { value: self.value }));
        }
        Ok(self.compute())
    }
}

impl From<f64> for ValueHolder {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
