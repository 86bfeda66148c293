// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Intcode definitions.
//!
//! Operands stay typed inside the compiler. Text is produced only when a
//! listing is displayed or serialized:
//!
//! | Operand | Text |
//! |---------|------|
//! | variable | `name` |
//! | temporary | `@t<N>` |
//! | label | `L<N>` |
//! | numeric immediate | `.%<digits>` |
//! | string immediate | `%<text>` |

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A compiled intcode listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intcode {
    /// The instructions, in execution order
    pub instructions: Vec<Instruction>,
}

impl Intcode {
    /// Creates a new empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instruction.
    pub fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterates over the instructions.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Renders every instruction as a row of strings.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.instructions.iter().map(Instruction::to_row).collect()
    }
}

impl<'a> IntoIterator for &'a Intcode {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One instruction per line.
impl fmt::Display for Intcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}

impl Serialize for Intcode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.instructions)
    }
}

/// A single instruction: a mnemonic and up to three operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation
    pub opcode: Mnemonic,
    /// The operands, destination or branch target first
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// Creates a new instruction.
    pub fn new(opcode: Mnemonic, operands: Vec<Operand>) -> Self {
        Self { opcode, operands }
    }

    /// Renders the instruction as `[MNEMONIC, operand...]`.
    pub fn to_row(&self) -> Vec<String> {
        std::iter::once(self.opcode.to_string())
            .chain(self.operands.iter().map(Operand::to_string))
            .collect()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        for (i, operand) in self.operands.iter().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{separator}{operand}")?;
        }
        Ok(())
    }
}

/// Serialized as an array of strings, mnemonic first.
impl Serialize for Instruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.operands.len() + 1))?;
        seq.serialize_element(self.opcode.as_str())?;
        for operand in &self.operands {
            seq.serialize_element(&operand.to_string())?;
        }
        seq.end()
    }
}

/// A generated temporary, `@t<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temp(pub u32);

impl fmt::Display for Temp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@t{}", self.0)
    }
}

/// A generated branch target, `L<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub u32);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// An instruction operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A source variable, by name
    Variable(String),
    /// A generated temporary
    Temporary(Temp),
    /// A generated label
    Label(Label),
    /// A numeric immediate, digits exactly as written in source
    ImmediateNumber(String),
    /// A string immediate
    ImmediateString(String),
}

impl Operand {
    /// The numeric immediate `.%0`, used for false, null and undefined.
    pub fn zero() -> Self {
        Operand::ImmediateNumber("0".to_string())
    }

    /// The numeric immediate `.%1`, used for true and by `++`/`--`.
    pub fn one() -> Self {
        Operand::ImmediateNumber("1".to_string())
    }

    /// Shorthand for [`Operand::Variable`].
    pub fn variable(name: impl Into<String>) -> Self {
        Operand::Variable(name.into())
    }
}

impl From<Temp> for Operand {
    fn from(temp: Temp) -> Self {
        Operand::Temporary(temp)
    }
}

impl From<Label> for Operand {
    fn from(label: Label) -> Self {
        Operand::Label(label)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Variable(name) => f.write_str(name),
            Operand::Temporary(temp) => write!(f, "{temp}"),
            Operand::Label(label) => write!(f, "{label}"),
            Operand::ImmediateNumber(digits) => write!(f, ".%{digits}"),
            Operand::ImmediateString(text) => write!(f, "%{text}"),
        }
    }
}

/// Target mnemonics.
///
/// The core arithmetic and relational set is shared by every profile. The
/// relational branches, `BR` and `LAB` belong to the branch profile; `JUMP`,
/// `JUMPI`, `JUMPDEST`, `ISZERO` and the environment queries belong to the
/// machine profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Mnemonic {
    // Arithmetic
    Add,
    Sub,
    Mult,
    Exp,
    Div,
    Mod,
    // Bitwise
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
    Sar,
    // Relational
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Neq,
    // Data movement
    Copy,
    Unp,
    // Branch profile control flow
    Lab,
    Br,
    Blt,
    Blte,
    Bgt,
    Bgte,
    Beq,
    Bneq,
    // Machine profile control flow
    Jump,
    Jumpi,
    Jumpdest,
    IsZero,
    // Environment queries
    Address,
    Caller,
    CallValue,
    Origin,
    GasPrice,
    Coinbase,
    Timestamp,
    Number,
    Difficulty,
    GasLimit,
    ChainId,
    BaseFee,
    SelfBalance,
    Gas,
}

impl Mnemonic {
    /// The mnemonic as it appears in a listing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mnemonic::Add => "ADD",
            Mnemonic::Sub => "SUB",
            Mnemonic::Mult => "MULT",
            Mnemonic::Exp => "EXP",
            Mnemonic::Div => "DIV",
            Mnemonic::Mod => "MOD",
            Mnemonic::And => "AND",
            Mnemonic::Or => "OR",
            Mnemonic::Xor => "XOR",
            Mnemonic::Not => "NOT",
            Mnemonic::Shl => "SHL",
            Mnemonic::Shr => "SHR",
            Mnemonic::Sar => "SAR",
            Mnemonic::Lt => "LT",
            Mnemonic::Lte => "LTE",
            Mnemonic::Gt => "GT",
            Mnemonic::Gte => "GTE",
            Mnemonic::Eq => "EQ",
            Mnemonic::Neq => "NEQ",
            Mnemonic::Copy => "COPY",
            Mnemonic::Unp => "UNP",
            Mnemonic::Lab => "LAB",
            Mnemonic::Br => "BR",
            Mnemonic::Blt => "BLT",
            Mnemonic::Blte => "BLTE",
            Mnemonic::Bgt => "BGT",
            Mnemonic::Bgte => "BGTE",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bneq => "BNEQ",
            Mnemonic::Jump => "JUMP",
            Mnemonic::Jumpi => "JUMPI",
            Mnemonic::Jumpdest => "JUMPDEST",
            Mnemonic::IsZero => "ISZERO",
            Mnemonic::Address => "ADDRESS",
            Mnemonic::Caller => "CALLER",
            Mnemonic::CallValue => "CALLVALUE",
            Mnemonic::Origin => "ORIGIN",
            Mnemonic::GasPrice => "GASPRICE",
            Mnemonic::Coinbase => "COINBASE",
            Mnemonic::Timestamp => "TIMESTAMP",
            Mnemonic::Number => "NUMBER",
            Mnemonic::Difficulty => "DIFFICULTY",
            Mnemonic::GasLimit => "GASLIMIT",
            Mnemonic::ChainId => "CHAINID",
            Mnemonic::BaseFee => "BASEFEE",
            Mnemonic::SelfBalance => "SELFBALANCE",
            Mnemonic::Gas => "GAS",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Intcode {
        let mut intcode = Intcode::new();
        intcode.emit(Instruction::new(
            Mnemonic::Add,
            vec![Temp(0).into(), Operand::variable("a"), Operand::one()],
        ));
        intcode.emit(Instruction::new(Mnemonic::Lab, vec![Label(3).into()]));
        intcode.emit(Instruction::new(
            Mnemonic::Copy,
            vec![
                Operand::variable("s"),
                Operand::ImmediateString("hi".into()),
            ],
        ));
        intcode
    }

    #[test]
    fn test_operand_text() {
        assert_eq!(Operand::from(Temp(12)).to_string(), "@t12");
        assert_eq!(Operand::from(Label(0)).to_string(), "L0");
        assert_eq!(
            Operand::ImmediateNumber("999999999999999999999".into()).to_string(),
            ".%999999999999999999999"
        );
        assert_eq!(Operand::ImmediateString("abc".into()).to_string(), "%abc");
        assert_eq!(Operand::zero().to_string(), ".%0");
        assert_eq!(Operand::variable("x").to_string(), "x");
    }

    #[test]
    fn test_emit_appends_in_order() {
        let mut intcode = Intcode::new();
        assert!(intcode.is_empty());
        intcode.emit(Instruction::new(Mnemonic::Br, vec![Label(0).into()]));
        intcode.emit(Instruction::new(Mnemonic::Lab, vec![Label(0).into()]));
        assert_eq!(intcode.len(), 2);
        assert_eq!(intcode.instructions[0].opcode, Mnemonic::Br);
        assert_eq!(intcode.instructions[1].opcode, Mnemonic::Lab);
    }

    #[test]
    fn test_rows() {
        assert_eq!(
            sample().to_rows(),
            vec![
                vec!["ADD", "@t0", "a", ".%1"],
                vec!["LAB", "L3"],
                vec!["COPY", "s", "%hi"],
            ]
        );
    }

    #[test]
    fn test_text_listing() {
        assert_eq!(sample().to_string(), "ADD @t0, a, .%1\nLAB L3\nCOPY s, %hi\n");
    }

    #[test]
    fn test_mnemonic_text() {
        assert_eq!(Mnemonic::Mult.to_string(), "MULT");
        assert_eq!(Mnemonic::Bneq.as_str(), "BNEQ");
        assert_eq!(Mnemonic::IsZero.as_str(), "ISZERO");
        assert_eq!(Mnemonic::CallValue.as_str(), "CALLVALUE");
    }
}
