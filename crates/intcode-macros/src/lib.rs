// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Helper macros for intcode tests.
//!
//! Expected listings are written as rows of string literals, the same shape
//! the JSON output of the compiler uses.
//!
//! # Macros Overview
//!
//! - [`intcodes!`] - Build a listing from rows of string literals
//! - [`assert_listing!`] - Compare a listing against expected rows, printing both on mismatch
//! - [`assert_lowering_error!`] - Assert that a `Result` failed with a matching error
//!
//! # Examples
//!
//! ```
//! use intcode_macros::*;
//!
//! let rows = intcodes![
//!     ["NOT", "@t0", "b"],
//!     ["OR", "a", ".%1", "@t0"],
//! ];
//! assert_eq!(rows[1], vec!["OR", "a", ".%1", "@t0"]);
//!
//! assert_listing!(rows, [["NOT", "@t0", "b"], ["OR", "a", ".%1", "@t0"]]);
//! ```

mod testing;
