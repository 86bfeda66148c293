// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Conditions lowered straight into branches.

use intcode_syntax::ast::{BinaryExpression, BinaryOperator, Expression, Literal};

use super::Generator;
use crate::error::Result;
use crate::intcode::Label;
use crate::profile::{Relation, Sense};

impl Generator<'_> {
    /// Lowers a condition into jumps.
    ///
    /// Control reaches `on_true` when the condition holds. When it does not,
    /// control reaches `on_false`, or falls through if no false label is given.
    pub(super) fn lower_branch(
        &mut self,
        expr: &Expression,
        on_true: Label,
        on_false: Option<Label>,
    ) -> Result<()> {
        if !self.profile.has_native_branches() {
            return self.branch_on_value(expr, on_true, on_false);
        }

        match expr {
            Expression::Parenthesized(inner) => {
                self.lower_branch(&inner.expression, on_true, on_false)
            }
            Expression::Binary(binary) => {
                self.lower_binary_branch(expr, binary, on_true, on_false)
            }
            Expression::Literal(Literal::Boolean(true)) => {
                self.emit_jump(on_true);
                Ok(())
            }
            Expression::Literal(Literal::Boolean(false)) => {
                if let Some(on_false) = on_false {
                    self.emit_jump(on_false);
                }
                Ok(())
            }
            _ => self.branch_on_value(expr, on_true, on_false),
        }
    }

    fn lower_binary_branch(
        &mut self,
        expr: &Expression,
        binary: &BinaryExpression,
        on_true: Label,
        on_false: Option<Label>,
    ) -> Result<()> {
        match binary.operator {
            BinaryOperator::LogicalOr => {
                let rhs = self.label();
                self.lower_branch(&binary.left, on_true, Some(rhs))?;
                self.emit_label(rhs);
                self.lower_branch(&binary.right, on_true, on_false)
            }
            BinaryOperator::LogicalAnd => {
                let rhs = self.label();
                self.lower_branch(&binary.left, rhs, on_false)?;
                self.emit_label(rhs);
                self.lower_branch(&binary.right, on_true, on_false)
            }
            operator => {
                let branch =
                    Relation::from_operator(operator).and_then(|r| self.profile.branch_on(r));
                let Some(opcode) = branch else {
                    return self.branch_on_value(expr, on_true, on_false);
                };
                let left = self.lower_expression(&binary.left, None)?;
                let right = self.lower_expression(&binary.right, None)?;
                self.emit(opcode, vec![on_true.into(), left, right]);
                if let Some(on_false) = on_false {
                    self.emit_jump(on_false);
                }
                Ok(())
            }
        }
    }

    /// Computes the condition as a value and tests it against zero.
    fn branch_on_value(
        &mut self,
        expr: &Expression,
        on_true: Label,
        on_false: Option<Label>,
    ) -> Result<()> {
        let value = self.lower_expression(expr, None)?;
        self.emit_truth_branch(Sense::NonZero, on_true, value);
        if let Some(on_false) = on_false {
            self.emit_jump(on_false);
        }
        Ok(())
    }
}
