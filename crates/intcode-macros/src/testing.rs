// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Listing assertions.

/// Build a listing (`Vec<Vec<String>>`) from rows of string literals.
///
/// # Example
///
/// ```
/// use intcode_macros::intcodes;
///
/// let rows = intcodes![["COPY", "a", ".%3"], ["COPY", "b", "a"]];
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0][2], ".%3");
///
/// let empty: Vec<Vec<String>> = intcodes![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! intcodes {
    ($([$($field:expr),+ $(,)?]),* $(,)?) => {
        ::std::vec![$(::std::vec![$(::std::string::String::from($field)),+]),*]
    };
}

/// Assert that a listing equals the expected rows.
///
/// The first argument is anything that compares equal to `Vec<Vec<String>>`.
/// On mismatch both listings are printed one instruction per line.
///
/// # Example
///
/// ```
/// use intcode_macros::{assert_listing, intcodes};
///
/// let actual = intcodes![["BR", "L0"], ["LAB", "L0"]];
/// assert_listing!(actual, [["BR", "L0"], ["LAB", "L0"]]);
/// ```
#[macro_export]
macro_rules! assert_listing {
    ($actual:expr, [$($row:tt),* $(,)?]) => {{
        let actual: ::std::vec::Vec<::std::vec::Vec<::std::string::String>> = $actual;
        let expected = $crate::intcodes![$($row),*];
        if actual != expected {
            let render = |rows: &[::std::vec::Vec<::std::string::String>]| {
                rows.iter()
                    .map(|row| format!("    {}", row.join(" ")))
                    .collect::<::std::vec::Vec<_>>()
                    .join("\n")
            };
            panic!(
                "assertion failed: listings differ\n  expression: `{}`\n  actual:\n{}\n  expected:\n{}",
                stringify!($actual),
                render(&actual),
                render(&expected)
            );
        }
    }};
}

/// Assert that a `Result` is an `Err` whose value matches a pattern.
///
/// # Example
///
/// ```
/// use intcode_macros::assert_lowering_error;
///
/// #[derive(Debug)]
/// enum LowerError { Unsupported(String) }
///
/// let result: Result<(), LowerError> = Err(LowerError::Unsupported("call".into()));
/// assert_lowering_error!(result, LowerError::Unsupported(what) if what == "call");
/// ```
#[macro_export]
macro_rules! assert_lowering_error {
    ($expr:expr, $pat:pat $(if $guard:expr)?) => {
        match $expr {
            Err($pat) $(if $guard)? => {}
            Err(ref e) => panic!(
                "assertion failed: `{}` failed with an unexpected error\n  expected: `{}`\n  error: {:?}",
                stringify!($expr),
                stringify!($pat),
                e
            ),
            Ok(ref v) => panic!(
                "assertion failed: expected Err, got Ok\n  expression: `{}`\n  value: {:?}",
                stringify!($expr),
                v
            ),
        }
    };
}
