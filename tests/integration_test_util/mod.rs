// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use pretty_assertions::assert_eq;
use serde_json::Value as JsonValue;

use valroot::error::{ErrorKind, Result};
use valroot::results::{self, Mode};
use valroot::{parser, ValueHolder};

pub fn run_query(input: &str, mode: Mode) -> Result<String> {
    let holder = ValueHolder::new(parser::parse_value(input)?);

    let buff = Vec::new();
    let mut serializer = serde_json::Serializer::pretty(buff);
    results::generate_results(&holder, &mut serializer, mode)?;
    Ok(String::from_utf8(serializer.into_inner()).unwrap())
}

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
fn run_query_json(input: &str, mode: Mode) -> JsonValue {
    serde_json::from_str::<JsonValue>(run_query(input, mode).unwrap().as_str()).unwrap()
}

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_query_ok(input: &str, mode: Mode, expected: JsonValue) {
    assert_eq!(run_query_json(input, mode), expected);
}

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_query_approx_f64_ulp(input: &str, mode: Mode, expected: f64, max_ulps: u32) {
    let sqrt = run_query_json(input, mode)["sqrt"].as_f64().unwrap();
    approx::assert_ulps_eq!(sqrt, expected, max_ulps = max_ulps);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_query_ok {
    ($name:ident, $mode:ident, $($case_name:ident, $input:expr, $expected:expr;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            use serde_json::Value as JsonValue;
            use serde_json::json;
            use valroot::results::Mode;
            #[rstest]
            $(#[case::$case_name($input, $expected)])*
            fn test_query_ok(#[case] input: &str, #[case] expected: JsonValue) {
                $crate::integration_test_util::test_query_ok(input, Mode::$mode, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_query_ok;

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_query_approx_f64_ulp {
    ($name:ident, $mode:ident, $($case_name:ident, $input:expr, $expected:expr, $max_ulps:expr;)*) => {
        mod $name {
            use rstest::rstest;
            use valroot::results::Mode;
            #[rstest]
            $(#[case::$case_name($input, $expected, $max_ulps)])*
            fn test_query_approx(#[case] input: &str, #[case] expected: f64, #[case] max_ulps: u32) {
                $crate::integration_test_util::test_query_approx_f64_ulp(
                    input,
                    Mode::$mode,
                    expected,
                    max_ulps,
                );
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_query_approx_f64_ulp;

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_query_err(input: &str, mode: Mode, kind: ErrorKind) {
    assert_eq!(run_query(input, mode).unwrap_err().kind(), kind);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_query_err {
    ($name:ident, $mode:ident, $($case_name:ident, $input:expr, $expected:ident;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            use valroot::error::ErrorKind;
            use valroot::results::Mode;
            #[rstest]
            $(#[case::$case_name($input, ErrorKind::$expected)])*
            fn test_query_err(#[case] input: &str, #[case] expected: ErrorKind) {
                $crate::integration_test_util::test_query_err(input, Mode::$mode, expected);
            }
        }
    }
}

#[allow(unused_imports)]
pub(crate) use test_simple_query_err;
