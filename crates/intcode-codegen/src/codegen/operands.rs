// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Names and literal operands.

use intcode_syntax::ast::{
    Expression, Identifier, Literal, MemberExpression, MemberProperty, Parameter,
    VariableDeclarator,
};

use crate::error::{CodegenError, Result};
use crate::intcode::Operand;

/// A node that may carry a name.
#[derive(Debug, Clone, Copy)]
pub enum NameNode<'a> {
    /// `var name = ...`
    Declarator(&'a VariableDeclarator),
    /// A function parameter
    Parameter(&'a Parameter),
    /// A bare identifier
    Identifier(&'a Identifier),
    /// A dotted name such as `a.b.c`
    Member(&'a MemberExpression),
}

impl<'a> TryFrom<&'a Expression> for NameNode<'a> {
    type Error = CodegenError;

    fn try_from(expr: &'a Expression) -> Result<Self> {
        match expr {
            Expression::Identifier(id) => Ok(NameNode::Identifier(id)),
            Expression::Member(member) => Ok(NameNode::Member(member)),
            other => Err(CodegenError::InvalidNode(other.kind_name().to_string())),
        }
    }
}

/// Returns the name a node binds or refers to.
///
/// A dotted name resolves to its last segment. Computed member access has no
/// static name.
pub fn resolve_name(node: NameNode<'_>) -> Result<&str> {
    match node {
        NameNode::Declarator(declarator) => Ok(&declarator.id.name),
        NameNode::Parameter(parameter) => Ok(&parameter.name.name),
        NameNode::Identifier(id) => Ok(&id.name),
        NameNode::Member(member) => match &member.property {
            MemberProperty::Identifier(id) => Ok(&id.name),
            MemberProperty::Expression(_) => Err(CodegenError::InvalidNode(
                "computed member expression".to_string(),
            )),
        },
    }
}

/// Encodes a leaf expression as an operand.
///
/// Numeric literals use their text as written in `source`, so integers too
/// large for an `f64` keep every digit.
pub fn format_operand(source: &str, expr: &Expression) -> Result<Operand> {
    match expr {
        Expression::Identifier(id) => Ok(Operand::Variable(id.name.clone())),
        Expression::Literal(literal) => match literal {
            Literal::Number(number) => number
                .span
                .slice(source)
                .map(|text| Operand::ImmediateNumber(text.to_string()))
                .ok_or_else(|| {
                    CodegenError::InvalidLiteral(format!(
                        "numeric literal at {} is outside the source text",
                        number.span
                    ))
                }),
            Literal::BigInt(digits) => Ok(Operand::ImmediateNumber(digits.clone())),
            Literal::String(text) => Ok(Operand::ImmediateString(text.clone())),
            Literal::Boolean(true) => Ok(Operand::one()),
            Literal::Boolean(false) | Literal::Null | Literal::Undefined => Ok(Operand::zero()),
            Literal::Template(_) => Err(CodegenError::InvalidLiteral(
                literal.kind_name().to_string(),
            )),
        },
        other => Err(CodegenError::InvalidLiteral(other.kind_name().to_string())),
    }
}

/// Returns true for expressions [`format_operand`] can encode.
pub(crate) fn is_leaf(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Identifier(_)
            | Expression::Literal(
                Literal::Number(_)
                    | Literal::BigInt(_)
                    | Literal::String(_)
                    | Literal::Boolean(_)
                    | Literal::Null
                    | Literal::Undefined
            )
    )
}
