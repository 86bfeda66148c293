// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Opcode profiles.
//!
//! Both targets share the arithmetic and relational mnemonics. They differ in
//! how control flow is expressed:
//!
//! - [`BranchProfile`] has one conditional branch per relation (`BLT`, `BGTE`,
//!   ...), an unconditional `BR` and `LAB` pseudo-instructions.
//! - [`MachineProfile`] only has `JUMPI label, cond`, so every condition is
//!   first materialized as a value. It also understands environment queries
//!   such as `msg.sender`.

use std::fmt;
use std::str::FromStr;

use intcode_syntax::ast::BinaryOperator;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::intcode::Mnemonic;

/// A comparison that a branch can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==` and `===`
    Equal,
    /// `!=` and `!==`
    NotEqual,
}

impl Relation {
    /// Maps a comparison operator to its relation.
    pub fn from_operator(operator: BinaryOperator) -> Option<Self> {
        match operator {
            BinaryOperator::LessThan => Some(Relation::Less),
            BinaryOperator::LessThanEqual => Some(Relation::LessEqual),
            BinaryOperator::GreaterThan => Some(Relation::Greater),
            BinaryOperator::GreaterThanEqual => Some(Relation::GreaterEqual),
            BinaryOperator::Equal | BinaryOperator::StrictEqual => Some(Relation::Equal),
            BinaryOperator::NotEqual | BinaryOperator::StrictNotEqual => {
                Some(Relation::NotEqual)
            }
            _ => None,
        }
    }
}

/// Which truth value of an operand a branch is taken on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Taken when the operand is non-zero (truthy)
    NonZero,
    /// Taken when the operand is zero (falsy)
    Zero,
}

/// How a profile branches on the truthiness of a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthBranch {
    /// `(mnemonic, label, operand, .%0)`
    CompareZero(Mnemonic),
    /// `(jump, label, operand)`, with the operand first replaced by
    /// `(negate, temp, operand)` when `negate` is set
    Conditional {
        /// The conditional jump
        jump: Mnemonic,
        /// Inverts the operand into a fresh temporary before jumping
        negate: Option<Mnemonic>,
    },
}

/// The control-flow vocabulary of a target machine.
pub trait OpcodeProfile: fmt::Debug {
    /// A short name used in logs.
    fn name(&self) -> &'static str;

    /// The conditional branch for a relation, if the target has one.
    fn branch_on(&self, relation: Relation) -> Option<Mnemonic>;

    /// The unconditional jump.
    fn jump(&self) -> Mnemonic;

    /// The label pseudo-instruction.
    fn label(&self) -> Mnemonic;

    /// How to branch when an operand has the given truth value.
    fn truth_branch(&self, sense: Sense) -> TruthBranch;

    /// The query instruction for `object.property`, if it names a value the
    /// target reads from its environment.
    fn environment_query(&self, _object: &str, _property: &str) -> Option<Mnemonic> {
        None
    }

    /// Whether relational conditions can branch directly.
    fn has_native_branches(&self) -> bool {
        self.branch_on(Relation::Equal).is_some()
    }
}

/// Target with native relational branches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchProfile;

impl OpcodeProfile for BranchProfile {
    fn name(&self) -> &'static str {
        "branch"
    }

    fn branch_on(&self, relation: Relation) -> Option<Mnemonic> {
        Some(match relation {
            Relation::Less => Mnemonic::Blt,
            Relation::LessEqual => Mnemonic::Blte,
            Relation::Greater => Mnemonic::Bgt,
            Relation::GreaterEqual => Mnemonic::Bgte,
            Relation::Equal => Mnemonic::Beq,
            Relation::NotEqual => Mnemonic::Bneq,
        })
    }

    fn jump(&self) -> Mnemonic {
        Mnemonic::Br
    }

    fn label(&self) -> Mnemonic {
        Mnemonic::Lab
    }

    fn truth_branch(&self, sense: Sense) -> TruthBranch {
        match sense {
            Sense::NonZero => TruthBranch::CompareZero(Mnemonic::Bneq),
            Sense::Zero => TruthBranch::CompareZero(Mnemonic::Beq),
        }
    }
}

/// Well-known `object.property` values read from the machine environment.
const ENVIRONMENT: [(&str, &str, Mnemonic); 14] = [
    ("msg", "sender", Mnemonic::Caller),
    ("msg", "value", Mnemonic::CallValue),
    ("tx", "origin", Mnemonic::Origin),
    ("tx", "gasprice", Mnemonic::GasPrice),
    ("block", "coinbase", Mnemonic::Coinbase),
    ("block", "timestamp", Mnemonic::Timestamp),
    ("block", "number", Mnemonic::Number),
    ("block", "difficulty", Mnemonic::Difficulty),
    ("block", "gaslimit", Mnemonic::GasLimit),
    ("block", "chainid", Mnemonic::ChainId),
    ("block", "basefee", Mnemonic::BaseFee),
    ("self", "address", Mnemonic::Address),
    ("self", "balance", Mnemonic::SelfBalance),
    ("gas", "left", Mnemonic::Gas),
];

/// Stack-machine style target: jumps only, plus environment queries.
#[derive(Debug, Clone)]
pub struct MachineProfile {
    environment: FxHashMap<&'static str, FxHashMap<&'static str, Mnemonic>>,
}

impl MachineProfile {
    /// Creates the profile with its environment table.
    pub fn new() -> Self {
        let mut environment: FxHashMap<&'static str, FxHashMap<&'static str, Mnemonic>> =
            FxHashMap::default();
        for (object, property, mnemonic) in ENVIRONMENT {
            environment
                .entry(object)
                .or_default()
                .insert(property, mnemonic);
        }
        Self { environment }
    }
}

impl Default for MachineProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl OpcodeProfile for MachineProfile {
    fn name(&self) -> &'static str {
        "machine"
    }

    fn branch_on(&self, _relation: Relation) -> Option<Mnemonic> {
        None
    }

    fn jump(&self) -> Mnemonic {
        Mnemonic::Jump
    }

    fn label(&self) -> Mnemonic {
        Mnemonic::Jumpdest
    }

    fn truth_branch(&self, sense: Sense) -> TruthBranch {
        let negate = match sense {
            Sense::NonZero => None,
            Sense::Zero => Some(Mnemonic::IsZero),
        };
        TruthBranch::Conditional {
            jump: Mnemonic::Jumpi,
            negate,
        }
    }

    fn environment_query(&self, object: &str, property: &str) -> Option<Mnemonic> {
        self.environment
            .get(object)
            .and_then(|properties| properties.get(property))
            .copied()
    }
}

/// Selects a profile by name, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// [`BranchProfile`]
    #[default]
    Branch,
    /// [`MachineProfile`]
    Machine,
}

impl ProfileKind {
    /// Builds the profile.
    pub fn build(self) -> Box<dyn OpcodeProfile> {
        match self {
            ProfileKind::Branch => Box::new(BranchProfile),
            ProfileKind::Machine => Box::new(MachineProfile::new()),
        }
    }

    /// The profile name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Branch => "branch",
            ProfileKind::Machine => "machine",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "branch" => Ok(ProfileKind::Branch),
            "machine" => Ok(ProfileKind::Machine),
            other => Err(format!(
                "unknown profile `{other}` (expected `branch` or `machine`)"
            )),
        }
    }
}
