// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Type annotation support.
//!
//! Type annotations are parsed and thrown away, producing the same AST as the
//! unannotated program. They are accepted after variable declarators,
//! function parameters and function parameter lists (the return type).
//!
//! ## Accepted Type Syntax
//!
//! ```typescript
//! let x: number = 42;
//! let ids: string[] = [];
//! let id: string | number = 1;
//! let v: Map<string, number[]> = m;
//! let dir: 'north' | 'south' = 'north';
//! function add(a: u256, b: u256): u256 { return a + b; }
//! ```
//!
//! Nested generic arguments closed by `>>` are not supported.
