// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Expression parsing documentation and tests.
//!
//! Expression parsing uses recursive descent with one method per precedence
//! level, all in `parser.rs`.
//!
//! ## Precedence Table (lowest to highest)
//!
//! | Precedence | Operators | Method |
//! |------------|-----------|--------|
//! | 1 | `=` `+=` `-=` etc. | `parse_assignment` |
//! | 2 | `?:` | `parse_conditional` |
//! | 3 | `\|\|` `??` | `parse_logical_or` |
//! | 4 | `&&` | `parse_logical_and` |
//! | 5 | `\|` | `parse_bitwise_or` |
//! | 6 | `^` | `parse_bitwise_xor` |
//! | 7 | `&` | `parse_bitwise_and` |
//! | 8 | `==` `!=` `===` `!==` | `parse_equality` |
//! | 9 | `<` `>` `<=` `>=` `in` `instanceof` | `parse_comparison` |
//! | 10 | `<<` `>>` `>>>` | `parse_shift` |
//! | 11 | `+` `-` | `parse_additive` |
//! | 12 | `*` `/` `%` | `parse_multiplicative` |
//! | 13 | `**` (right associative) | `parse_exponent` |
//! | 14 | `!` `~` `+` `-` `typeof` `void` `delete` `++` `--` | `parse_unary` |
//! | 15 | `.` `[]` `()` postfix `++` `--` | `parse_call` |
//! | 16 | primary | `parse_primary` |
//!
//! ## Primary Expressions
//!
//! - Identifiers: `foo`, `bar` (`undefined` becomes a literal)
//! - Literals: `42`, `12n`, `"hello"`, `true`, `null`, and templates without substitutions
//! - Array literals: `[1, 2, 3]`
//! - Object literals: `{ a: 1, b }`
//! - Parenthesized: `(a + b)`, kept as its own node
//! - `this`
//!
//! There is no comma operator; `,` only separates declarators, arguments
//! and literal elements.
