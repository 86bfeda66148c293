// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Statement lowering.
//!
//! Label layout per statement form (`branch(c, t, f)` is a condition lowered
//! into jumps):
//!
//! ```text
//! if:        branch(c, T, F)  LAB T  then  LAB F
//! if-else:   branch(c, T, F)  LAB T  then  BR N  LAB F  else  LAB N
//! while:     LAB B  branch(c, T, N)  LAB T  body  BR B  LAB N
//! do-while:  LAB B  body  branch(c, B)
//! for:       init  LAB H  branch(c, B, X)  LAB B  body  update  BR H  LAB X
//! ```

use intcode_syntax::ast::{
    DoWhileStatement, ForInit, ForStatement, IfStatement, Statement, VariableDeclaration,
    WhileStatement,
};
use tracing::trace;

use super::Generator;
use super::operands::{NameNode, format_operand, is_leaf, resolve_name};
use crate::error::{CodegenError, Result};
use crate::intcode::{Mnemonic, Operand};

impl Generator<'_> {
    pub(super) fn lower_statement(&mut self, statement: &Statement) -> Result<()> {
        trace!("Lowering {}", statement.kind_name());
        match statement {
            Statement::VariableDeclaration(declaration) => self.lower_declaration(declaration),
            Statement::Expression(stmt) => {
                self.lower_expression(&stmt.expression, None)?;
                Ok(())
            }
            Statement::Block(block) => {
                for statement in &block.body {
                    self.lower_statement(statement)?;
                }
                Ok(())
            }
            Statement::Empty => Ok(()),
            Statement::If(stmt) => self.lower_if(stmt),
            Statement::While(stmt) => self.lower_while(stmt),
            Statement::DoWhile(stmt) => self.lower_do_while(stmt),
            Statement::For(stmt) => self.lower_for(stmt),
            Statement::FunctionDeclaration(_)
            | Statement::Return(_)
            | Statement::Break
            | Statement::Continue
            | Statement::Throw(_) => Err(CodegenError::UnsupportedStatement(
                statement.kind_name().to_string(),
            )),
        }
    }

    fn lower_declaration(&mut self, declaration: &VariableDeclaration) -> Result<()> {
        for declarator in &declaration.declarations {
            let name = Operand::variable(resolve_name(NameNode::Declarator(declarator))?);
            let Some(init) = &declarator.init else {
                continue;
            };

            if is_leaf(init) {
                let value = format_operand(self.source, init)?;
                self.emit(Mnemonic::Copy, vec![name, value]);
                continue;
            }

            // Initializers such as `a.b` or `(a = 2)` ignore the hint; copy
            // their result so the declared name is always written.
            let location = self.lower_expression(init, Some(&name))?;
            if location != name {
                self.emit(Mnemonic::Copy, vec![name, location]);
            }
        }
        Ok(())
    }

    fn lower_if(&mut self, stmt: &IfStatement) -> Result<()> {
        let on_true = self.label();
        let on_false = self.label();

        let Some(alternate) = &stmt.alternate else {
            self.lower_branch(&stmt.test, on_true, Some(on_false))?;
            self.emit_label(on_true);
            self.lower_statement(&stmt.consequent)?;
            self.emit_label(on_false);
            return Ok(());
        };

        let next = self.label();
        self.lower_branch(&stmt.test, on_true, Some(on_false))?;
        self.emit_label(on_true);
        self.lower_statement(&stmt.consequent)?;
        self.emit_jump(next);
        self.emit_label(on_false);
        self.lower_statement(alternate)?;
        self.emit_label(next);
        Ok(())
    }

    fn lower_while(&mut self, stmt: &WhileStatement) -> Result<()> {
        let begin = self.label();
        let body = self.label();
        let next = self.label();

        self.emit_label(begin);
        self.lower_branch(&stmt.test, body, Some(next))?;
        self.emit_label(body);
        self.lower_statement(&stmt.body)?;
        self.emit_jump(begin);
        self.emit_label(next);
        Ok(())
    }

    // A false condition falls through, so no exit label is allocated.
    fn lower_do_while(&mut self, stmt: &DoWhileStatement) -> Result<()> {
        let begin = self.label();

        self.emit_label(begin);
        self.lower_statement(&stmt.body)?;
        self.lower_branch(&stmt.test, begin, None)
    }

    fn lower_for(&mut self, stmt: &ForStatement) -> Result<()> {
        match &stmt.init {
            Some(ForInit::Declaration(declaration)) => self.lower_declaration(declaration)?,
            Some(ForInit::Expression(expr)) => {
                self.lower_expression(expr, None)?;
            }
            None => {}
        }

        let head = self.label();
        let body = self.label();
        let exit = self.label();

        self.emit_label(head);
        if let Some(test) = &stmt.test {
            self.lower_branch(test, body, Some(exit))?;
        }
        self.emit_label(body);
        if !matches!(*stmt.body, Statement::Empty) {
            self.lower_statement(&stmt.body)?;
        }
        if let Some(update) = &stmt.update {
            self.lower_expression(update, None)?;
        }
        self.emit_jump(head);
        self.emit_label(exit);
        Ok(())
    }
}
