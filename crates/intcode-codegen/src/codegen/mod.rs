// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lowering from syntax tree to intcode.
//!
//! The [`Generator`] is split across several files, each adding one `impl`
//! block:
//!
//! - `statements.rs` - declarations, blocks and loops
//! - `expressions.rs` - expressions in value context
//! - `control.rs` - conditions lowered straight into branches
//! - `operands.rs` - names and literal operands
//! - `names.rs` - temporary and label allocation

mod control;
mod expressions;
mod names;
mod operands;
mod statements;

#[cfg(test)]
mod tests;

pub use names::FreshNames;
pub use operands::{NameNode, format_operand, resolve_name};

use intcode_syntax::ast::Program;
use tracing::{debug, debug_span};

use crate::error::Result;
use crate::intcode::{Instruction, Intcode, Label, Mnemonic, Operand, Temp};
use crate::profile::{OpcodeProfile, Sense, TruthBranch};

/// Lowers one program to intcode.
///
/// A generator owns its output buffer and counters, and [`generate`] consumes
/// it, so temporary and label numbering always starts from zero.
///
/// [`generate`]: Generator::generate
pub struct Generator<'src> {
    source: &'src str,
    profile: Box<dyn OpcodeProfile>,
    output: Intcode,
    names: FreshNames,
}

impl<'src> Generator<'src> {
    /// Creates a generator for a tree parsed from `source`.
    pub fn new(source: &'src str, profile: Box<dyn OpcodeProfile>) -> Self {
        Self {
            source,
            profile,
            output: Intcode::new(),
            names: FreshNames::new(),
        }
    }

    /// Lowers every top-level statement and returns the listing.
    pub fn generate(mut self, program: &Program) -> Result<Intcode> {
        let span = debug_span!("generate", profile = self.profile.name());
        let _enter = span.enter();

        for statement in &program.body {
            self.lower_statement(statement)?;
        }

        debug!(
            "Lowered {} statements to {} instructions ({} temporaries, {} labels)",
            program.body.len(),
            self.output.len(),
            self.names.temp_count(),
            self.names.label_count()
        );
        Ok(self.output)
    }

    fn emit(&mut self, opcode: Mnemonic, operands: Vec<Operand>) {
        self.output.emit(Instruction::new(opcode, operands));
    }

    fn temp(&mut self) -> Temp {
        self.names.temp()
    }

    fn label(&mut self) -> Label {
        self.names.label()
    }

    fn emit_label(&mut self, label: Label) {
        let opcode = self.profile.label();
        self.emit(opcode, vec![label.into()]);
    }

    fn emit_jump(&mut self, target: Label) {
        let opcode = self.profile.jump();
        self.emit(opcode, vec![target.into()]);
    }

    /// Branches to `target` when `operand` has the given truth value.
    fn emit_truth_branch(&mut self, sense: Sense, target: Label, operand: Operand) {
        match self.profile.truth_branch(sense) {
            TruthBranch::CompareZero(opcode) => {
                self.emit(opcode, vec![target.into(), operand, Operand::zero()]);
            }
            TruthBranch::Conditional { jump, negate } => {
                let condition = match negate {
                    Some(opcode) => {
                        let temp = self.temp();
                        self.emit(opcode, vec![temp.into(), operand]);
                        Operand::from(temp)
                    }
                    None => operand,
                };
                self.emit(jump, vec![target.into(), condition]);
            }
        }
    }
}
