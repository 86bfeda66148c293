// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Tests for the lowering pass.

use intcode_macros::{assert_listing, assert_lowering_error};

use super::*;
use crate::error::CodegenError;
use crate::profile::ProfileKind;

fn lower_source(kind: ProfileKind, src: &str) -> Result<Intcode> {
    let program = intcode_syntax::parse(src).expect("Source should parse");
    Generator::new(src, kind.build()).generate(&program)
}

fn lower(src: &str) -> Vec<Vec<String>> {
    lower_source(ProfileKind::Branch, src)
        .expect("Lowering should succeed")
        .to_rows()
}

fn lower_machine(src: &str) -> Vec<Vec<String>> {
    lower_source(ProfileKind::Machine, src)
        .expect("Lowering should succeed")
        .to_rows()
}

#[test]
fn test_empty_program() {
    assert!(lower("").is_empty());
    assert!(lower(";;").is_empty());
}

#[test]
fn test_literal_initializers_copy_directly() {
    assert_listing!(
        lower("var a = 3; var b = a; var s = 'hi'; var t = true; var n = null"),
        [
            ["COPY", "a", ".%3"],
            ["COPY", "b", "a"],
            ["COPY", "s", "%hi"],
            ["COPY", "t", ".%1"],
            ["COPY", "n", ".%0"],
        ]
    );
}

#[test]
fn test_large_integer_keeps_source_digits() {
    assert_listing!(
        lower("var n = 999999999999999999999"),
        [["COPY", "n", ".%999999999999999999999"]]
    );
}

#[test]
fn test_wide_hex_literal_keeps_source_digits() {
    let digits = format!("0x{}", "f".repeat(64));
    let operand = format!(".%{digits}");
    assert_listing!(
        lower(&format!("var m = {digits}")),
        [["COPY", "m", operand.as_str()]]
    );
}

#[test]
fn test_bigint_initializer() {
    assert_listing!(lower("var n = 12n"), [["COPY", "n", ".%12"]]);
}

#[test]
fn test_declaration_without_initializer_emits_nothing() {
    assert_listing!(lower("var a, b = 2"), [["COPY", "b", ".%2"]]);
}

#[test]
fn test_binary_initializer_uses_name_as_destination() {
    assert_listing!(lower("var a = 1 + 2"), [["ADD", "a", ".%1", ".%2"]]);
}

#[test]
fn test_temporaries_follow_evaluation_order() {
    assert_listing!(
        lower("var r = (a + b) * (c - d)"),
        [
            ["ADD", "@t0", "a", "b"],
            ["SUB", "@t1", "c", "d"],
            ["MULT", "r", "@t0", "@t1"],
        ]
    );
}

#[test]
fn test_compound_assignment_chain() {
    assert_listing!(
        lower("var a=1+2; var b=(a+=4)+(a=2)+a"),
        [
            ["ADD", "a", ".%1", ".%2"],
            ["ADD", "a", "a", ".%4"],
            ["COPY", "a", ".%2"],
            ["ADD", "@t0", "a", "a"],
            ["ADD", "b", "@t0", "a"],
        ]
    );
}

#[test]
fn test_right_shift_selects_arithmetic_shift() {
    assert_listing!(
        lower("var a=1>>2; var b=((a>>=4)>>(a=2))>>a"),
        [
            ["SAR", "a", ".%1", ".%2"],
            ["SAR", "a", "a", ".%4"],
            ["COPY", "a", ".%2"],
            ["SAR", "@t0", "a", "a"],
            ["SAR", "b", "@t0", "a"],
        ]
    );
}

#[test]
fn test_complement() {
    assert_listing!(
        lower("var a=1|(~b)"),
        [["NOT", "@t0", "b"], ["OR", "a", ".%1", "@t0"]]
    );
}

#[test]
fn test_complement_initializer_is_copied() {
    assert_listing!(
        lower("var a = ~b"),
        [["NOT", "@t0", "b"], ["COPY", "a", "@t0"]]
    );
}

#[test]
fn test_nested_assignment_initializer_is_copied() {
    assert_listing!(
        lower("var x = (y = 3)"),
        [["COPY", "y", ".%3"], ["COPY", "x", "y"]]
    );
}

#[test]
fn test_relational_value() {
    assert_listing!(
        lower("var t = a >= b; var u = a === b; var v = a !== b"),
        [
            ["GTE", "t", "a", "b"],
            ["EQ", "u", "a", "b"],
            ["NEQ", "v", "a", "b"],
        ]
    );
}

#[test]
fn test_prefix_and_postfix_update_are_equivalent() {
    assert_listing!(
        lower("i++; ++i; i--; --i"),
        [
            ["ADD", "i", "i", ".%1"],
            ["ADD", "i", "i", ".%1"],
            ["SUB", "i", "i", ".%1"],
            ["SUB", "i", "i", ".%1"],
        ]
    );
}

#[test]
fn test_property_access() {
    assert_listing!(
        lower("var v = o.k"),
        [["UNP", "@t0", "o", "k"], ["COPY", "v", "@t0"]]
    );
}

#[test]
fn test_index_access() {
    assert_listing!(
        lower("x = o[i + 1]"),
        [
            ["ADD", "@t0", "i", ".%1"],
            ["UNP", "@t1", "o", "@t0"],
            ["COPY", "x", "@t1"],
        ]
    );
}

#[test]
fn test_chained_property_access() {
    assert_listing!(
        lower("x = a.b.c"),
        [
            ["UNP", "@t0", "a", "b"],
            ["UNP", "@t1", "@t0", "c"],
            ["COPY", "x", "@t1"],
        ]
    );
}

#[test]
fn test_logical_and_value() {
    assert_listing!(
        lower("var x = a && b"),
        [
            ["BEQ", "L0", "a", ".%0"],
            ["COPY", "x", "b"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "x", "a"],
            ["LAB", "L1"],
        ]
    );
}

#[test]
fn test_logical_or_value_without_hint() {
    assert_listing!(
        lower("y = a || 2"),
        [
            ["BNEQ", "L0", "a", ".%0"],
            ["COPY", "@t0", ".%2"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "@t0", "a"],
            ["LAB", "L1"],
            ["COPY", "y", "@t0"],
        ]
    );
}

#[test]
fn test_if() {
    assert_listing!(
        lower("if (i > 8) { b = 3 }"),
        [
            ["BGT", "L0", "i", ".%8"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "b", ".%3"],
            ["LAB", "L1"],
        ]
    );
}

#[test]
fn test_if_else() {
    assert_listing!(
        lower("if (i > a) { b = 3 } else { b = 2 }"),
        [
            ["BGT", "L0", "i", "a"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "b", ".%3"],
            ["BR", "L2"],
            ["LAB", "L1"],
            ["COPY", "b", ".%2"],
            ["LAB", "L2"],
        ]
    );
}

#[test]
fn test_if_with_and_condition() {
    assert_listing!(
        lower("if (a && b) { c = 1 }"),
        [
            ["BNEQ", "L2", "a", ".%0"],
            ["BR", "L1"],
            ["LAB", "L2"],
            ["BNEQ", "L0", "b", ".%0"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "c", ".%1"],
            ["LAB", "L1"],
        ]
    );
}

#[test]
fn test_if_with_or_condition() {
    assert_listing!(
        lower("if (a < 1 || b) x = 1"),
        [
            ["BLT", "L0", "a", ".%1"],
            ["BR", "L2"],
            ["LAB", "L2"],
            ["BNEQ", "L0", "b", ".%0"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "x", ".%1"],
            ["LAB", "L1"],
        ]
    );
}

#[test]
fn test_if_with_arithmetic_condition() {
    assert_listing!(
        lower("if (a + 1) x = 2"),
        [
            ["ADD", "@t0", "a", ".%1"],
            ["BNEQ", "L0", "@t0", ".%0"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "x", ".%2"],
            ["LAB", "L1"],
        ]
    );
}

#[test]
fn test_if_false() {
    assert_listing!(
        lower("if (false) x = 1"),
        [["BR", "L1"], ["LAB", "L0"], ["COPY", "x", ".%1"], ["LAB", "L1"]]
    );
}

#[test]
fn test_strict_equality_branch() {
    assert_listing!(
        lower("if (a === b) x = 1"),
        [
            ["BEQ", "L0", "a", "b"],
            ["BR", "L1"],
            ["LAB", "L0"],
            ["COPY", "x", ".%1"],
            ["LAB", "L1"],
        ]
    );
}

#[test]
fn test_while() {
    assert_listing!(
        lower("while (i > 800) { i += 32 }"),
        [
            ["LAB", "L0"],
            ["BGT", "L1", "i", ".%800"],
            ["BR", "L2"],
            ["LAB", "L1"],
            ["ADD", "i", "i", ".%32"],
            ["BR", "L0"],
            ["LAB", "L2"],
        ]
    );
}

#[test]
fn test_while_true() {
    assert_listing!(
        lower("while (true) { i++ }"),
        [
            ["LAB", "L0"],
            ["BR", "L1"],
            ["LAB", "L1"],
            ["ADD", "i", "i", ".%1"],
            ["BR", "L0"],
            ["LAB", "L2"],
        ]
    );
}

#[test]
fn test_do_while_has_no_exit_label() {
    assert_listing!(
        lower("do { i += 32 } while (i < 1024)"),
        [
            ["LAB", "L0"],
            ["ADD", "i", "i", ".%32"],
            ["BLT", "L0", "i", ".%1024"],
        ]
    );
}

#[test]
fn test_do_while_with_logical_and_condition() {
    // A false `a` falls through into the test of `b`.
    assert_listing!(
        lower("do { i++ } while (a && b)"),
        [
            ["LAB", "L0"],
            ["ADD", "i", "i", ".%1"],
            ["BNEQ", "L1", "a", ".%0"],
            ["LAB", "L1"],
            ["BNEQ", "L0", "b", ".%0"],
        ]
    );
}

#[test]
fn test_empty_for() {
    assert_listing!(
        lower("for(;;);"),
        [["LAB", "L0"], ["LAB", "L1"], ["BR", "L0"], ["LAB", "L2"]]
    );
}

#[test]
fn test_for() {
    assert_listing!(
        lower("for (let j = 0; j < 3; j++) t = t * 2"),
        [
            ["COPY", "j", ".%0"],
            ["LAB", "L0"],
            ["BLT", "L1", "j", ".%3"],
            ["BR", "L2"],
            ["LAB", "L1"],
            ["MULT", "@t0", "t", ".%2"],
            ["COPY", "t", "@t0"],
            ["ADD", "j", "j", ".%1"],
            ["BR", "L0"],
            ["LAB", "L2"],
        ]
    );
}

#[test]
fn test_for_expression_initializer() {
    assert_listing!(
        lower("for (i = 0; i; i--) {}"),
        [
            ["COPY", "i", ".%0"],
            ["LAB", "L0"],
            ["BNEQ", "L1", "i", ".%0"],
            ["BR", "L2"],
            ["LAB", "L1"],
            ["SUB", "i", "i", ".%1"],
            ["BR", "L0"],
            ["LAB", "L2"],
        ]
    );
}

#[test]
fn test_machine_if() {
    assert_listing!(
        lower_machine("if (i > 8) { b = 3 }"),
        [
            ["GT", "@t0", "i", ".%8"],
            ["JUMPI", "L0", "@t0"],
            ["JUMP", "L1"],
            ["JUMPDEST", "L0"],
            ["COPY", "b", ".%3"],
            ["JUMPDEST", "L1"],
        ]
    );
}

#[test]
fn test_machine_logical_and_negates_with_iszero() {
    assert_listing!(
        lower_machine("var x = a && b"),
        [
            ["ISZERO", "@t0", "a"],
            ["JUMPI", "L0", "@t0"],
            ["COPY", "x", "b"],
            ["JUMP", "L1"],
            ["JUMPDEST", "L0"],
            ["COPY", "x", "a"],
            ["JUMPDEST", "L1"],
        ]
    );
}

#[test]
fn test_machine_do_while() {
    assert_listing!(
        lower_machine("do { i += 1 } while (i < 3)"),
        [
            ["JUMPDEST", "L0"],
            ["ADD", "i", "i", ".%1"],
            ["LT", "@t0", "i", ".%3"],
            ["JUMPI", "L0", "@t0"],
        ]
    );
}

#[test]
fn test_machine_environment_queries() {
    assert_listing!(
        lower_machine("var s = msg.sender; var v = msg.value + 1"),
        [
            ["CALLER", "@t0"],
            ["COPY", "s", "@t0"],
            ["CALLVALUE", "@t1"],
            ["ADD", "v", "@t1", ".%1"],
        ]
    );
}

#[test]
fn test_machine_unknown_property_unpacks() {
    assert_listing!(
        lower_machine("var d = msg.data"),
        [["UNP", "@t0", "msg", "data"], ["COPY", "d", "@t0"]]
    );
}

#[test]
fn test_branch_profile_has_no_environment_queries() {
    assert_listing!(
        lower("var s = msg.sender"),
        [["UNP", "@t0", "msg", "sender"], ["COPY", "s", "@t0"]]
    );
}

#[test]
fn test_generation_is_deterministic() {
    let src = "var i = 0; while (i < 10 && ok) { if (i % 2 == 0) t += i; else t -= 1; i++ }";
    let program = intcode_syntax::parse(src).unwrap();
    let first = Generator::new(src, ProfileKind::Branch.build())
        .generate(&program)
        .unwrap();
    let second = Generator::new(src, ProfileKind::Branch.build())
        .generate(&program)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unsupported_expressions() {
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "f()"),
        CodegenError::UnsupportedExpression(what) if what == "call expression"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "x = c ? 1 : 2"),
        CodegenError::UnsupportedExpression(what) if what == "conditional expression"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "x = this"),
        CodegenError::UnsupportedExpression(what) if what == "this"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "x = [1, 2]"),
        CodegenError::UnsupportedExpression(_)
    );
}

#[test]
fn test_unsupported_operators() {
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "x = -y"),
        CodegenError::UnsupportedOperator(op) if op == "-"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "x = a ?? b"),
        CodegenError::UnsupportedOperator(op) if op == "??"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "a &&= b"),
        CodegenError::UnsupportedOperator(op) if op == "&&="
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "if (!a) x = 1"),
        CodegenError::UnsupportedOperator(op) if op == "!"
    );
}

#[test]
fn test_unsupported_statements() {
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "function f(a) { return a }"),
        CodegenError::UnsupportedStatement(what) if what == "function declaration"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "while (x) { break }"),
        CodegenError::UnsupportedStatement(what) if what == "break statement"
    );
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "throw x"),
        CodegenError::UnsupportedStatement(what) if what == "throw statement"
    );
}

#[test]
fn test_template_literal_is_invalid() {
    assert_lowering_error!(
        lower_source(ProfileKind::Branch, "var t = `text`"),
        CodegenError::InvalidLiteral(what) if what == "template literal"
    );
}

#[test]
fn test_error_discards_partial_output() {
    let result = lower_source(ProfileKind::Branch, "var a = 1; var b = 2; f()");
    assert_eq!(
        result,
        Err(CodegenError::UnsupportedExpression("call expression".into()))
    );
}
