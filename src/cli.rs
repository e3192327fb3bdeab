// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Types and methods related to parsing the command line.

use clap::Parser;

use crate::results::Mode;

/// Command line arguments passed to valroot.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about=None)]
#[must_use]
pub struct Cli {
    /// The value to take the square root of, e.g. 2, -1.5, 1e10, inf or nan
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Fail instead of printing NaN when the value has no real square root
    #[arg(long)]
    pub strict: bool,

    /// Print the results on a single line
    #[arg(long)]
    pub compact: bool,

    /// Log filter to use when VALROOT_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Get the computation mode selected by the arguments.
    pub fn mode(&self) -> Mode {
        if self.strict {
            Mode::Strict
        } else {
            Mode::Lenient
        }
    }
}

/// Parse the command line.
///
/// # Returns
/// - a `Cli` struct containing the command line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
