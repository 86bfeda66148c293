// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The main parser implementation.

use crate::ast::*;
use crate::error::{Result, SyntaxError};
use crate::lexer::{Scanner, Span, Token, TokenKind};

/// A recursive descent parser for the intcode source language.
pub struct Parser<'a> {
    source: &'a str,
    scanner: Scanner<'a>,
    current: Token,
    previous: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given source code.
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        Self {
            source,
            scanner,
            current,
            previous: Token::new(TokenKind::Eof, Span::new(0, 0)),
        }
    }

    /// Parses the source code into a Program AST node.
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.parse_statement()?);
        }

        Ok(Program { body })
    }

    /// Parses a single statement.
    pub fn parse_statement(&mut self) -> Result<Statement> {
        match &self.current.kind {
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                let declaration = self.parse_variable_declaration_no_semi()?;
                self.consume_semicolon()?;
                Ok(Statement::VariableDeclaration(declaration))
            }
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Do => self.parse_do_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Break => {
                self.advance();
                self.consume_semicolon()?;
                Ok(Statement::Break)
            }
            TokenKind::Continue => {
                self.advance();
                self.consume_semicolon()?;
                Ok(Statement::Continue)
            }
            TokenKind::Throw => self.parse_throw_statement(),
            TokenKind::LeftBrace => self.parse_block_statement(),
            TokenKind::Semicolon => {
                self.advance();
                Ok(Statement::Empty)
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_variable_declaration_no_semi(&mut self) -> Result<VariableDeclaration> {
        let kind = match &self.current.kind {
            TokenKind::Var => VariableKind::Var,
            TokenKind::Let => VariableKind::Let,
            TokenKind::Const => VariableKind::Const,
            _ => return Err(self.unexpected("variable keyword")),
        };
        self.advance();

        let mut declarations = Vec::new();

        loop {
            let id = self.expect_identifier()?;
            self.skip_type_annotation()?;
            let init = if self.check(&TokenKind::Equal) {
                self.advance();
                Some(self.parse_assignment()?)
            } else {
                None
            };

            declarations.push(VariableDeclarator { id, init });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Ok(VariableDeclaration { kind, declarations })
    }

    fn parse_function_declaration(&mut self) -> Result<Statement> {
        self.advance(); // consume 'function'

        let id = self.expect_identifier()?;
        self.expect(&TokenKind::LeftParen)?;
        let params = self.parse_parameters()?;
        self.expect(&TokenKind::RightParen)?;
        self.skip_type_annotation()?;

        self.expect(&TokenKind::LeftBrace)?;
        let body = self.parse_block_body()?;
        self.expect(&TokenKind::RightBrace)?;

        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            id,
            params,
            body,
        }))
    }

    fn parse_parameters(&mut self) -> Result<Vec<Parameter>> {
        let mut params = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                let name = self.expect_identifier()?;
                self.skip_type_annotation()?;
                params.push(Parameter { name });
                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        Ok(params)
    }

    fn parse_if_statement(&mut self) -> Result<Statement> {
        self.advance(); // consume 'if'
        self.expect(&TokenKind::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;

        let consequent = Box::new(self.parse_statement()?);
        let alternate = if self.check(&TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If(IfStatement {
            test,
            consequent,
            alternate,
        }))
    }

    fn parse_while_statement(&mut self) -> Result<Statement> {
        self.advance(); // consume 'while'
        self.expect(&TokenKind::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(Statement::While(WhileStatement { test, body }))
    }

    fn parse_do_while_statement(&mut self) -> Result<Statement> {
        self.advance(); // consume 'do'
        let body = Box::new(self.parse_statement()?);
        self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;

        // The trailing semicolon after `do ... while (...)` is always optional
        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }

        Ok(Statement::DoWhile(DoWhileStatement { body, test }))
    }

    fn parse_for_statement(&mut self) -> Result<Statement> {
        self.advance(); // consume 'for'
        self.expect(&TokenKind::LeftParen)?;

        let init = match &self.current.kind {
            TokenKind::Semicolon => None,
            TokenKind::Var | TokenKind::Let | TokenKind::Const => Some(ForInit::Declaration(
                self.parse_variable_declaration_no_semi()?,
            )),
            _ => Some(ForInit::Expression(self.parse_expression()?)),
        };
        self.expect(&TokenKind::Semicolon)?;

        let test = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let update = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_statement()?);

        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body,
        }))
    }

    fn parse_return_statement(&mut self) -> Result<Statement> {
        self.advance(); // consume 'return'

        let argument = if self.at_statement_end() {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_semicolon()?;

        Ok(Statement::Return(ReturnStatement { argument }))
    }

    fn parse_throw_statement(&mut self) -> Result<Statement> {
        self.advance(); // consume 'throw'
        let argument = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Statement::Throw(ThrowStatement { argument }))
    }

    fn parse_block_statement(&mut self) -> Result<Statement> {
        self.expect(&TokenKind::LeftBrace)?;
        let body = self.parse_block_body()?;
        self.expect(&TokenKind::RightBrace)?;
        Ok(Statement::Block(BlockStatement { body }))
    }

    fn parse_block_body(&mut self) -> Result<Vec<Statement>> {
        let mut body = Vec::new();

        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            body.push(self.parse_statement()?);
        }

        Ok(body)
    }

    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let expression = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Statement::Expression(ExpressionStatement { expression }))
    }

    /// Parses an expression.
    pub fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Expression> {
        let target = self.parse_conditional()?;

        let Some(operator) = assignment_operator(&self.current.kind) else {
            return Ok(target);
        };

        if !matches!(
            target.unparenthesized(),
            Expression::Identifier(_) | Expression::Member(_)
        ) {
            return Err(SyntaxError::InvalidAssignmentTarget {
                span: self.current.span,
            });
        }

        self.advance();
        let value = self.parse_assignment()?;

        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(target),
            right: Box::new(value),
        }))
    }

    /// Parse conditional (ternary) expression: test ? consequent : alternate
    fn parse_conditional(&mut self) -> Result<Expression> {
        let test = self.parse_logical_or()?;

        if self.check(&TokenKind::Question) {
            self.advance(); // consume '?'
            let consequent = self.parse_assignment()?;
            self.expect(&TokenKind::Colon)?;
            let alternate = self.parse_assignment()?;

            return Ok(Expression::Conditional(ConditionalExpression {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            }));
        }

        Ok(test)
    }

    fn parse_logical_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_logical_and()?;

        loop {
            let operator = match &self.current.kind {
                TokenKind::PipePipe => BinaryOperator::LogicalOr,
                TokenKind::QuestionQuestion => BinaryOperator::NullishCoalescing,
                _ => break,
            };
            self.advance();
            let right = self.parse_logical_and()?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_bitwise_or()?;

        while self.check(&TokenKind::AmpersandAmpersand) {
            self.advance();
            let right = self.parse_bitwise_or()?;
            left = binary(BinaryOperator::LogicalAnd, left, right);
        }

        Ok(left)
    }

    fn parse_bitwise_or(&mut self) -> Result<Expression> {
        let mut left = self.parse_bitwise_xor()?;

        while self.check(&TokenKind::Pipe) {
            self.advance();
            let right = self.parse_bitwise_xor()?;
            left = binary(BinaryOperator::BitwiseOr, left, right);
        }

        Ok(left)
    }

    fn parse_bitwise_xor(&mut self) -> Result<Expression> {
        let mut left = self.parse_bitwise_and()?;

        while self.check(&TokenKind::Caret) {
            self.advance();
            let right = self.parse_bitwise_and()?;
            left = binary(BinaryOperator::BitwiseXor, left, right);
        }

        Ok(left)
    }

    fn parse_bitwise_and(&mut self) -> Result<Expression> {
        let mut left = self.parse_equality()?;

        while self.check(&TokenKind::Ampersand) {
            self.advance();
            let right = self.parse_equality()?;
            left = binary(BinaryOperator::BitwiseAnd, left, right);
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expression> {
        let mut left = self.parse_comparison()?;

        loop {
            let operator = match &self.current.kind {
                TokenKind::EqualEqual => BinaryOperator::Equal,
                TokenKind::NotEqual => BinaryOperator::NotEqual,
                TokenKind::StrictEqual => BinaryOperator::StrictEqual,
                TokenKind::StrictNotEqual => BinaryOperator::StrictNotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expression> {
        let mut left = self.parse_shift()?;

        loop {
            let operator = match &self.current.kind {
                TokenKind::LessThan => BinaryOperator::LessThan,
                TokenKind::LessThanEqual => BinaryOperator::LessThanEqual,
                TokenKind::GreaterThan => BinaryOperator::GreaterThan,
                TokenKind::GreaterThanEqual => BinaryOperator::GreaterThanEqual,
                TokenKind::In => BinaryOperator::In,
                TokenKind::Instanceof => BinaryOperator::InstanceOf,
                _ => break,
            };
            self.advance();
            let right = self.parse_shift()?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_shift(&mut self) -> Result<Expression> {
        let mut left = self.parse_additive()?;

        loop {
            let operator = match &self.current.kind {
                TokenKind::LeftShift => BinaryOperator::LeftShift,
                TokenKind::RightShift => BinaryOperator::RightShift,
                TokenKind::UnsignedRightShift => BinaryOperator::UnsignedRightShift,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expression> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let operator = match &self.current.kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression> {
        let mut left = self.parse_exponent()?;

        loop {
            let operator = match &self.current.kind {
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::Slash => BinaryOperator::Divide,
                TokenKind::Percent => BinaryOperator::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_exponent()?;
            left = binary(operator, left, right);
        }

        Ok(left)
    }

    /// `**` binds tighter than `*` and associates to the right.
    fn parse_exponent(&mut self) -> Result<Expression> {
        let base = self.parse_unary()?;

        if self.check(&TokenKind::StarStar) {
            self.advance();
            let exponent = self.parse_exponent()?;
            return Ok(binary(BinaryOperator::Exponent, base, exponent));
        }

        Ok(base)
    }

    fn parse_unary(&mut self) -> Result<Expression> {
        let update = match &self.current.kind {
            TokenKind::PlusPlus => Some(UpdateOperator::Increment),
            TokenKind::MinusMinus => Some(UpdateOperator::Decrement),
            _ => None,
        };

        if let Some(operator) = update {
            self.advance();
            let argument = self.parse_unary()?;
            return Ok(Expression::Update(UpdateExpression {
                operator,
                argument: Box::new(argument),
                prefix: true,
            }));
        }

        let operator = match &self.current.kind {
            TokenKind::Bang => Some(UnaryOperator::LogicalNot),
            TokenKind::Minus => Some(UnaryOperator::Minus),
            TokenKind::Plus => Some(UnaryOperator::Plus),
            TokenKind::Typeof => Some(UnaryOperator::Typeof),
            TokenKind::Void => Some(UnaryOperator::Void),
            TokenKind::Delete => Some(UnaryOperator::Delete),
            TokenKind::Tilde => Some(UnaryOperator::BitwiseNot),
            _ => None,
        };

        if let Some(operator) = operator {
            self.advance();
            let argument = self.parse_unary()?;
            return Ok(Expression::Unary(UnaryExpression {
                operator,
                argument: Box::new(argument),
            }));
        }

        self.parse_call()
    }

    fn parse_call(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary()?;

        loop {
            match &self.current.kind {
                TokenKind::LeftParen => {
                    self.advance();
                    let arguments = self.parse_arguments()?;
                    self.expect(&TokenKind::RightParen)?;
                    expr = Expression::Call(CallExpression {
                        callee: Box::new(expr),
                        arguments,
                    });
                }
                TokenKind::Dot => {
                    self.advance();
                    let property = self.expect_identifier()?;
                    expr = Expression::Member(MemberExpression {
                        object: Box::new(expr),
                        property: MemberProperty::Identifier(property),
                    });
                }
                TokenKind::LeftBracket => {
                    self.advance();
                    let property = self.parse_expression()?;
                    self.expect(&TokenKind::RightBracket)?;
                    expr = Expression::Member(MemberExpression {
                        object: Box::new(expr),
                        property: MemberProperty::Expression(Box::new(property)),
                    });
                }
                // A line break before `++`/`--` ends the expression
                TokenKind::PlusPlus | TokenKind::MinusMinus if !self.newline_before_current() => {
                    let operator = if self.check(&TokenKind::PlusPlus) {
                        UpdateOperator::Increment
                    } else {
                        UpdateOperator::Decrement
                    };
                    self.advance();
                    expr = Expression::Update(UpdateExpression {
                        operator,
                        argument: Box::new(expr),
                        prefix: false,
                    });
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>> {
        let mut args = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                args.push(self.parse_assignment()?);
                if !self.check(&TokenKind::Comma) {
                    break;
                }
                self.advance();
            }
        }

        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        let literal = match &self.current.kind {
            TokenKind::Number(value) => Literal::Number(NumericLiteral {
                value: *value,
                span: self.current.span,
            }),
            TokenKind::BigInt(digits) => Literal::BigInt(digits.clone()),
            TokenKind::String(value) => Literal::String(value.clone()),
            TokenKind::Template(value) => Literal::Template(value.clone()),
            TokenKind::True => Literal::Boolean(true),
            TokenKind::False => Literal::Boolean(false),
            TokenKind::Null => Literal::Null,
            TokenKind::Identifier(name) if name == "undefined" => Literal::Undefined,
            TokenKind::Identifier(name) => {
                let id = Identifier::new(name.clone());
                self.advance();
                return Ok(Expression::Identifier(id));
            }
            TokenKind::This => {
                self.advance();
                return Ok(Expression::This);
            }
            TokenKind::LeftParen => return self.parse_parenthesized(),
            TokenKind::LeftBracket => return self.parse_array_literal(),
            TokenKind::LeftBrace => return self.parse_object_literal(),
            _ => return Err(self.unexpected("expression")),
        };

        self.advance();
        Ok(Expression::Literal(literal))
    }

    fn parse_parenthesized(&mut self) -> Result<Expression> {
        self.expect(&TokenKind::LeftParen)?;
        let expression = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
        }))
    }

    fn parse_array_literal(&mut self) -> Result<Expression> {
        self.expect(&TokenKind::LeftBracket)?;
        let mut elements = Vec::new();

        while !self.check(&TokenKind::RightBracket) && !self.is_at_end() {
            if self.check(&TokenKind::Comma) {
                self.advance();
                elements.push(None);
                continue;
            }
            elements.push(Some(self.parse_assignment()?));
            if !self.check(&TokenKind::RightBracket) {
                self.expect(&TokenKind::Comma)?;
            }
        }

        self.expect(&TokenKind::RightBracket)?;
        Ok(Expression::Array(ArrayExpression { elements }))
    }

    fn parse_object_literal(&mut self) -> Result<Expression> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut properties = Vec::new();

        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            properties.push(self.parse_property()?);
            if !self.check(&TokenKind::RightBrace) {
                self.expect(&TokenKind::Comma)?;
            }
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(Expression::Object(ObjectExpression { properties }))
    }

    fn parse_property(&mut self) -> Result<Property> {
        let key = match &self.current.kind {
            TokenKind::Identifier(name) => PropertyKey::Identifier(Identifier::new(name.clone())),
            TokenKind::String(value) => PropertyKey::Literal(Literal::String(value.clone())),
            TokenKind::Number(value) => PropertyKey::Literal(Literal::Number(NumericLiteral {
                value: *value,
                span: self.current.span,
            })),
            TokenKind::LeftBracket => {
                self.advance();
                let key = self.parse_assignment()?;
                self.expect(&TokenKind::RightBracket)?;
                self.expect(&TokenKind::Colon)?;
                let value = self.parse_assignment()?;
                return Ok(Property {
                    key: PropertyKey::Computed(Box::new(key)),
                    value,
                    shorthand: false,
                });
            }
            _ => return Err(self.unexpected("property name")),
        };
        self.advance();

        if let PropertyKey::Identifier(id) = &key {
            if !self.check(&TokenKind::Colon) {
                let value = Expression::Identifier(id.clone());
                return Ok(Property {
                    key,
                    value,
                    shorthand: true,
                });
            }
        }

        self.expect(&TokenKind::Colon)?;
        let value = self.parse_assignment()?;
        Ok(Property {
            key,
            value,
            shorthand: false,
        })
    }

    // TypeScript annotations are erased while parsing.

    fn skip_type_annotation(&mut self) -> Result<()> {
        if self.check(&TokenKind::Colon) {
            self.advance();
            self.skip_type()?;
        }
        Ok(())
    }

    fn skip_type(&mut self) -> Result<()> {
        // Leading `|` is allowed: `type T = | A | B`
        if self.check(&TokenKind::Pipe) {
            self.advance();
        }

        loop {
            self.skip_primary_type()?;
            while self.check(&TokenKind::LeftBracket) {
                self.advance();
                self.expect(&TokenKind::RightBracket)?;
            }
            if self.check(&TokenKind::Pipe) || self.check(&TokenKind::Ampersand) {
                self.advance();
            } else {
                return Ok(());
            }
        }
    }

    fn skip_primary_type(&mut self) -> Result<()> {
        match &self.current.kind {
            TokenKind::Identifier(_) => {
                self.advance();
                while self.check(&TokenKind::Dot) {
                    self.advance();
                    self.expect_identifier()?;
                }
                if self.check(&TokenKind::LessThan) {
                    self.advance();
                    loop {
                        self.skip_type()?;
                        if !self.check(&TokenKind::Comma) {
                            break;
                        }
                        self.advance();
                    }
                    self.expect(&TokenKind::GreaterThan)?;
                }
                Ok(())
            }
            TokenKind::Void
            | TokenKind::Null
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Number(_)
            | TokenKind::String(_) => {
                self.advance();
                Ok(())
            }
            TokenKind::LeftParen => {
                self.advance();
                self.skip_type()?;
                self.expect(&TokenKind::RightParen)
            }
            _ => Err(self.unexpected("type")),
        }
    }

    fn advance(&mut self) {
        self.previous = std::mem::replace(&mut self.current, self.scanner.next_token());
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&describe(kind)))
        }
    }

    fn expect_identifier(&mut self) -> Result<Identifier> {
        if let TokenKind::Identifier(name) = &self.current.kind {
            let id = Identifier::new(name.clone());
            self.advance();
            Ok(id)
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Accepts an explicit `;`, or inserts one before `}`, at the end of
    /// input and after a line break.
    fn consume_semicolon(&mut self) -> Result<()> {
        if self.check(&TokenKind::Semicolon) {
            self.advance();
            return Ok(());
        }
        if self.at_statement_end() {
            return Ok(());
        }
        Err(self.unexpected("`;`"))
    }

    fn at_statement_end(&self) -> bool {
        self.check(&TokenKind::Semicolon)
            || self.check(&TokenKind::RightBrace)
            || self.is_at_end()
            || self.newline_before_current()
    }

    fn newline_before_current(&self) -> bool {
        self.source
            .get(self.previous.span.end..self.current.span.start)
            .is_some_and(|gap| gap.contains('\n'))
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        if matches!(self.current.kind, TokenKind::Invalid) {
            return SyntaxError::InvalidToken {
                span: self.current.span,
            };
        }
        SyntaxError::Unexpected {
            expected: expected.to_string(),
            found: describe(&self.current.kind),
            span: self.current.span,
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }
}

fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn assignment_operator(kind: &TokenKind) -> Option<AssignmentOperator> {
    let operator = match kind {
        TokenKind::Equal => AssignmentOperator::Assign,
        TokenKind::PlusEqual => AssignmentOperator::AddAssign,
        TokenKind::MinusEqual => AssignmentOperator::SubtractAssign,
        TokenKind::StarEqual => AssignmentOperator::MultiplyAssign,
        TokenKind::SlashEqual => AssignmentOperator::DivideAssign,
        TokenKind::PercentEqual => AssignmentOperator::ModuloAssign,
        TokenKind::StarStarEqual => AssignmentOperator::ExponentAssign,
        TokenKind::LeftShiftEqual => AssignmentOperator::LeftShiftAssign,
        TokenKind::RightShiftEqual => AssignmentOperator::RightShiftAssign,
        TokenKind::UnsignedRightShiftEqual => AssignmentOperator::UnsignedRightShiftAssign,
        TokenKind::AmpersandEqual => AssignmentOperator::BitwiseAndAssign,
        TokenKind::PipeEqual => AssignmentOperator::BitwiseOrAssign,
        TokenKind::CaretEqual => AssignmentOperator::BitwiseXorAssign,
        TokenKind::AmpersandAmpersandEqual => AssignmentOperator::LogicalAndAssign,
        TokenKind::PipePipeEqual => AssignmentOperator::LogicalOrAssign,
        TokenKind::QuestionQuestionEqual => AssignmentOperator::NullishCoalescingAssign,
        _ => return None,
    };
    Some(operator)
}

/// Describes a token for error messages.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Identifier(name) => format!("identifier `{name}`"),
        TokenKind::Number(_) | TokenKind::BigInt(_) => "number".to_string(),
        TokenKind::String(_) | TokenKind::Template(_) => "string".to_string(),
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::LeftBrace => "`{`".to_string(),
        TokenKind::RightBrace => "`}`".to_string(),
        TokenKind::LeftParen => "`(`".to_string(),
        TokenKind::RightParen => "`)`".to_string(),
        TokenKind::LeftBracket => "`[`".to_string(),
        TokenKind::RightBracket => "`]`".to_string(),
        TokenKind::Semicolon => "`;`".to_string(),
        TokenKind::Comma => "`,`".to_string(),
        TokenKind::Colon => "`:`".to_string(),
        TokenKind::Equal => "`=`".to_string(),
        TokenKind::GreaterThan => "`>`".to_string(),
        other if other.is_keyword() => {
            let keyword = format!("{other:?}").to_lowercase();
            format!("keyword `{keyword}`")
        }
        other => format!("{other:?}"),
    }
}
