// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Statement parsing documentation and tests.
//!
//! The statement methods live in `parser.rs`.
//!
//! | Statement | Method |
//! |-----------|--------|
//! | Variable | `parse_variable_declaration_no_semi` |
//! | Function | `parse_function_declaration` |
//! | If | `parse_if_statement` |
//! | While | `parse_while_statement` |
//! | Do-While | `parse_do_while_statement` |
//! | For | `parse_for_statement` |
//! | Return | `parse_return_statement` |
//! | Break / Continue | inline in `parse_statement` |
//! | Throw | `parse_throw_statement` |
//! | Block | `parse_block_statement` |
//! | Empty | inline in `parse_statement` |
//! | Expression | `parse_expression_statement` |
//!
//! `for` only takes the three-clause form; `for-in` and `for-of` are not
//! part of the language.
//!
//! ## Semicolons
//!
//! A missing `;` is accepted before `}`, at the end of input, and when the
//! next token starts on a new line. The semicolon after `do ... while (...)`
//! is always optional.
