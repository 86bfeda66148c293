// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator to mnemonic selection.
//!
//! `>>` is an arithmetic shift in the source language and selects `SAR`;
//! `>>>` selects `SHR`. Strict and loose equality share `EQ` and `NEQ`.

use std::fmt;

use intcode_syntax::ast::{AssignmentOperator, BinaryOperator, UnaryOperator, UpdateOperator};

use crate::error::{CodegenError, Result};
use crate::intcode::Mnemonic;

/// Any operator that can appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorToken {
    /// A binary or logical operator
    Binary(BinaryOperator),
    /// A plain or compound assignment
    Assignment(AssignmentOperator),
    /// A prefix unary operator
    Unary(UnaryOperator),
    /// `++` or `--`
    Update(UpdateOperator),
}

impl OperatorToken {
    /// The operator as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorToken::Binary(op) => op.as_str(),
            OperatorToken::Assignment(op) => op.as_str(),
            OperatorToken::Unary(op) => op.as_str(),
            OperatorToken::Update(op) => op.as_str(),
        }
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BinaryOperator> for OperatorToken {
    fn from(op: BinaryOperator) -> Self {
        OperatorToken::Binary(op)
    }
}

impl From<AssignmentOperator> for OperatorToken {
    fn from(op: AssignmentOperator) -> Self {
        OperatorToken::Assignment(op)
    }
}

impl From<UnaryOperator> for OperatorToken {
    fn from(op: UnaryOperator) -> Self {
        OperatorToken::Unary(op)
    }
}

impl From<UpdateOperator> for OperatorToken {
    fn from(op: UpdateOperator) -> Self {
        OperatorToken::Update(op)
    }
}

/// Selects the mnemonic for an operator.
///
/// A plain operator and its compound-assignment form select the same
/// mnemonic; the caller decides between expression and assignment shapes.
pub fn select(token: impl Into<OperatorToken>) -> Result<Mnemonic> {
    use AssignmentOperator as A;
    use BinaryOperator as B;

    let token = token.into();
    let mnemonic = match token {
        OperatorToken::Binary(op) => match op {
            B::Add => Mnemonic::Add,
            B::Subtract => Mnemonic::Sub,
            B::Multiply => Mnemonic::Mult,
            B::Exponent => Mnemonic::Exp,
            B::Divide => Mnemonic::Div,
            B::Modulo => Mnemonic::Mod,
            B::LeftShift => Mnemonic::Shl,
            B::RightShift => Mnemonic::Sar,
            B::UnsignedRightShift => Mnemonic::Shr,
            B::BitwiseAnd | B::LogicalAnd => Mnemonic::And,
            B::BitwiseOr | B::LogicalOr => Mnemonic::Or,
            B::BitwiseXor => Mnemonic::Xor,
            B::LessThan => Mnemonic::Lt,
            B::LessThanEqual => Mnemonic::Lte,
            B::GreaterThan => Mnemonic::Gt,
            B::GreaterThanEqual => Mnemonic::Gte,
            B::Equal | B::StrictEqual => Mnemonic::Eq,
            B::NotEqual | B::StrictNotEqual => Mnemonic::Neq,
            B::NullishCoalescing | B::In | B::InstanceOf => {
                return Err(CodegenError::UnsupportedOperator(token.to_string()));
            }
        },
        OperatorToken::Assignment(op) => match op {
            A::Assign => Mnemonic::Copy,
            A::AddAssign => Mnemonic::Add,
            A::SubtractAssign => Mnemonic::Sub,
            A::MultiplyAssign => Mnemonic::Mult,
            A::ExponentAssign => Mnemonic::Exp,
            A::DivideAssign => Mnemonic::Div,
            A::ModuloAssign => Mnemonic::Mod,
            A::LeftShiftAssign => Mnemonic::Shl,
            A::RightShiftAssign => Mnemonic::Sar,
            A::UnsignedRightShiftAssign => Mnemonic::Shr,
            A::BitwiseAndAssign => Mnemonic::And,
            A::BitwiseOrAssign => Mnemonic::Or,
            A::BitwiseXorAssign => Mnemonic::Xor,
            A::LogicalAndAssign | A::LogicalOrAssign | A::NullishCoalescingAssign => {
                return Err(CodegenError::UnsupportedOperator(token.to_string()));
            }
        },
        OperatorToken::Unary(UnaryOperator::BitwiseNot) => Mnemonic::Not,
        OperatorToken::Unary(_) => {
            return Err(CodegenError::UnsupportedOperator(token.to_string()));
        }
        OperatorToken::Update(UpdateOperator::Increment) => Mnemonic::Add,
        OperatorToken::Update(UpdateOperator::Decrement) => Mnemonic::Sub,
    };
    Ok(mnemonic)
}
