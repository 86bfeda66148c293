// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # intcode-codegen
//!
//! The lowering pass of the intcode compiler. It walks a syntax tree produced
//! by [`intcode_syntax`] and emits a flat, label-addressed instruction
//! sequence.
//!
//! ## Architecture
//!
//! - [`Generator`] - Owns the output buffer and the fresh-name counters for one run
//! - [`OpcodeProfile`] - Describes which branch forms the target machine has
//! - [`select`] - Maps a source operator to a mnemonic
//! - [`Intcode`] / [`Instruction`] / [`Operand`] - The emitted program
//!
//! ## Quick Start
//!
//! ```rust
//! use intcode_codegen::{Generator, ProfileKind};
//!
//! let source = "if (i > 8) { b = 3 }";
//! let program = intcode_syntax::parse(source).expect("valid source");
//! let intcode = Generator::new(source, ProfileKind::Branch.build())
//!     .generate(&program)
//!     .expect("lowerable program");
//!
//! assert_eq!(intcode.to_string(), "BGT L0, i, .%8\nBR L1\nLAB L0\nCOPY b, .%3\nLAB L1\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codegen;
pub mod error;
pub mod intcode;
pub mod profile;
pub mod selector;

pub use codegen::{FreshNames, Generator, NameNode, format_operand, resolve_name};
pub use error::{CodegenError, Result};
pub use intcode::{Instruction, Intcode, Label, Mnemonic, Operand, Temp};
pub use profile::{
    BranchProfile, MachineProfile, OpcodeProfile, ProfileKind, Relation, Sense, TruthBranch,
};
pub use selector::{OperatorToken, select};
