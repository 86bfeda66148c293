// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Expressions in value context.

use intcode_syntax::ast::{
    AssignmentExpression, AssignmentOperator, BinaryExpression, BinaryOperator, Expression,
    MemberExpression, MemberProperty, UnaryExpression, UpdateExpression,
};

use super::Generator;
use super::operands::{NameNode, format_operand, resolve_name};
use crate::error::{CodegenError, Result};
use crate::intcode::{Mnemonic, Operand};
use crate::profile::Sense;
use crate::selector::select;

impl Generator<'_> {
    /// Lowers an expression and returns the operand holding its value.
    ///
    /// `hint` names a location the caller would like the result written to.
    /// Only binary operators and the left side of assignments honor it.
    pub(super) fn lower_expression(
        &mut self,
        expr: &Expression,
        hint: Option<&Operand>,
    ) -> Result<Operand> {
        match expr {
            Expression::Identifier(_) | Expression::Literal(_) => {
                format_operand(self.source, expr)
            }
            Expression::Parenthesized(inner) => self.lower_expression(&inner.expression, hint),
            Expression::Member(member) => self.lower_member(member),
            Expression::Update(update) => self.lower_update(update),
            Expression::Unary(unary) => self.lower_unary(unary),
            Expression::Assignment(assignment) => self.lower_assignment(assignment, hint),
            Expression::Binary(binary) => match binary.operator {
                BinaryOperator::LogicalAnd => self.lower_logical(binary, Sense::Zero, hint),
                BinaryOperator::LogicalOr => self.lower_logical(binary, Sense::NonZero, hint),
                _ => self.lower_binary(binary, hint),
            },
            Expression::This
            | Expression::Array(_)
            | Expression::Object(_)
            | Expression::Call(_)
            | Expression::Conditional(_) => Err(CodegenError::UnsupportedExpression(
                expr.kind_name().to_string(),
            )),
        }
    }

    fn destination(&mut self, hint: Option<&Operand>) -> Operand {
        match hint {
            Some(location) => location.clone(),
            None => self.temp().into(),
        }
    }

    fn lower_member(&mut self, member: &MemberExpression) -> Result<Operand> {
        if let (Expression::Identifier(object), MemberProperty::Identifier(property)) =
            (member.object.as_ref(), &member.property)
        {
            if let Some(query) = self.profile.environment_query(&object.name, &property.name) {
                let temp = self.temp();
                self.emit(query, vec![temp.into()]);
                return Ok(temp.into());
            }
        }

        let base = self.lower_expression(&member.object, None)?;
        let key = match &member.property {
            MemberProperty::Identifier(_) => {
                Operand::variable(resolve_name(NameNode::Member(member))?)
            }
            MemberProperty::Expression(key) => self.lower_expression(key, None)?,
        };
        let temp = self.temp();
        self.emit(Mnemonic::Unp, vec![temp.into(), base, key]);
        Ok(temp.into())
    }

    // Prefix and postfix forms both yield the updated location.
    fn lower_update(&mut self, update: &UpdateExpression) -> Result<Operand> {
        let opcode = select(update.operator)?;
        let location = self.lower_expression(&update.argument, None)?;
        self.emit(
            opcode,
            vec![location.clone(), location.clone(), Operand::one()],
        );
        Ok(location)
    }

    fn lower_unary(&mut self, unary: &UnaryExpression) -> Result<Operand> {
        let opcode = select(unary.operator)?;
        let operand = self.lower_expression(&unary.argument, None)?;
        let temp = self.temp();
        self.emit(opcode, vec![temp.into(), operand]);
        Ok(temp.into())
    }

    fn lower_assignment(
        &mut self,
        assignment: &AssignmentExpression,
        hint: Option<&Operand>,
    ) -> Result<Operand> {
        let opcode = select(assignment.operator)?;
        let left = self.lower_expression(&assignment.left, hint)?;
        let right = self.lower_expression(&assignment.right, None)?;
        let operands = match assignment.operator {
            AssignmentOperator::Assign => vec![left.clone(), right],
            _ => vec![left.clone(), left.clone(), right],
        };
        self.emit(opcode, operands);
        Ok(left)
    }

    fn lower_binary(
        &mut self,
        binary: &BinaryExpression,
        hint: Option<&Operand>,
    ) -> Result<Operand> {
        let opcode = select(binary.operator)?;
        let dest = self.destination(hint);
        let left = self.lower_expression(&binary.left, None)?;
        let right = self.lower_expression(&binary.right, None)?;
        self.emit(opcode, vec![dest.clone(), left, right]);
        Ok(dest)
    }

    /// `&&` and `||` in value context.
    ///
    /// The right operand is only evaluated when the left one does not decide
    /// the result; `short_circuit` is the truth value of the left operand that
    /// skips it.
    fn lower_logical(
        &mut self,
        binary: &BinaryExpression,
        short_circuit: Sense,
        hint: Option<&Operand>,
    ) -> Result<Operand> {
        let dest = self.destination(hint);
        let keep_left = self.label();
        let exit = self.label();

        let left = self.lower_expression(&binary.left, None)?;
        self.emit_truth_branch(short_circuit, keep_left, left.clone());
        let right = self.lower_expression(&binary.right, None)?;
        self.emit(Mnemonic::Copy, vec![dest.clone(), right]);
        self.emit_jump(exit);
        self.emit_label(keep_left);
        self.emit(Mnemonic::Copy, vec![dest.clone(), left]);
        self.emit_label(exit);
        Ok(dest)
    }
}
