// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Functions to generate the results of a square root computation.

use std::io::Write;

use serde::{Serialize, Serializer};
use tracing::warn;

use crate::error::{Error, ErrorKind, Result};
use crate::holder::ValueHolder;
use crate::primitive::Primitive;

/// How to treat inputs that have no real square root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Report NaN as the result.
    #[default]
    Lenient,

    /// Fail with an error.
    Strict,
}

/// The result document for a single computation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct SqrtReport {
    pub value: Primitive,
    pub sqrt: Primitive,
}

impl SqrtReport {
    /// Compute the square root of the value in `holder` and build a report.
    ///
    /// # Returns
    /// - `Error::NegativeInput` or `Error::NotANumber` in `Mode::Strict` when the value has no real
    ///   square root.
    pub fn new(holder: &ValueHolder, mode: Mode) -> Result<Self> {
        let sqrt = match mode {
            Mode::Lenient => {
                let root = holder.compute();
                if root.is_nan() && !holder.value().is_nan() {
                    warn!(
                        value = holder.value(),
                        "square root of negative value is NaN"
                    );
                }
                root
            }
            Mode::Strict => holder.try_compute()?,
        };
        Ok(Self {
            value: Primitive::from(holder.value()),
            sqrt: Primitive::from(sqrt),
        })
    }
}

/// Generate the results for the value in `holder` and serialize them.
///
/// # Parameters
/// - `holder`: the value to take the square root of.
/// - `serializer`: the serde `Serializer` to write the results with.
/// - `mode`: how to treat values without a real square root.
pub fn generate_results<S: Serializer>(
    holder: &ValueHolder,
    serializer: S,
    mode: Mode,
) -> Result<()> {
    let report = SqrtReport::new(holder, mode)?;
    match report.serialize(serializer) {
        Err(e) => Err(Box::new(Error::Serialize { msg: e.to_string() })),
        Ok(_) => Ok(()),
    }
}

/// Generate the results for the value in `holder` as JSON, followed by a newline.
///
/// # Parameters
/// - `holder`: the value to take the square root of.
/// - `writer`: where to write the JSON.
/// - `mode`: how to treat values without a real square root.
/// - `compact`: write the JSON on a single line instead of pretty-printing it.
pub fn write_results<W: Write>(
    holder: &ValueHolder,
    mut writer: W,
    mode: Mode,
    compact: bool,
) -> Result<()> {
    let result = if compact {
        generate_results(holder, &mut serde_json::Serializer::new(&mut writer), mode)
    } else {
        generate_results(holder, &mut serde_json::Serializer::pretty(&mut writer), mode)
    };

    // Serde won't add a newline at the end of its output. Add one even if serialization failed:
    // we've probably already written partial output.
    let wrote_output = match &result {
        Ok(()) => true,
        Err(e) => e.kind() == ErrorKind::Serialize,
    };
    if wrote_output {
        let newline = writeln!(writer).and_then(|_| writer.flush());
        result?;
        return newline.map_err(|e| Box::new(Error::Serialize { msg: e.to_string() }));
    }
    result
}
