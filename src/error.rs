// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error types.
use miette::{Diagnostic, SourceSpan};
use thiserror::Error as ThisError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ParseValue,
    NegativeInput,
    NotANumber,
    Serialize,
}

/// Type of error used throughout valroot.
///
/// Errors that come from the command line value have a `span: SourceSpan` member pointing to the
/// part of the input that is invalid.
#[derive(Debug, Diagnostic, ThisError)]
#[must_use]
pub enum Error {
    /// An error parsing the input value into a 64-bit float.
    #[error("{desc}")]
    #[diagnostic()]
    ParseValue {
        #[label("failed to parse this")]
        span: SourceSpan,

        desc: String,
    },

    /// A strict computation of the square root of a negative number.
    #[error("cannot take the square root of negative value {value}")]
    #[diagnostic(help("run without --strict to get NaN instead of an error"))]
    NegativeInput { value: f64 },

    /// A strict computation of the square root of NaN.
    #[error("cannot take the square root of NaN")]
    #[diagnostic()]
    NotANumber,

    /// An error when the output serializer fails.
    #[error("internal error: failed to serialize results: {msg}")]
    #[diagnostic()]
    Serialize { msg: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ParseValue { .. } => ErrorKind::ParseValue,
            Error::NegativeInput { .. } => ErrorKind::NegativeInput,
            Error::NotANumber => ErrorKind::NotANumber,
            Error::Serialize { .. } => ErrorKind::Serialize,
        }
    }
}

/// A value or an `Error`
pub type Result<T> = std::result::Result<T, Box<Error>>;
