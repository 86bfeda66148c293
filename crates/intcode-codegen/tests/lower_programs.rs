//! Lowering integration tests
//!
//! Parses whole programs and checks the emitted listings through the public
//! API only.

use intcode_codegen::{CodegenError, Generator, Intcode, Mnemonic, ProfileKind};
use intcode_macros::{assert_listing, assert_lowering_error};

fn lower_with(kind: ProfileKind, source: &str) -> Result<Intcode, CodegenError> {
    let program = intcode_syntax::parse(source).unwrap_or_else(|err| panic!("{source}: {err}"));
    Generator::new(source, kind.build()).generate(&program)
}

fn lower(source: &str) -> Intcode {
    lower_with(ProfileKind::Branch, source).unwrap_or_else(|err| panic!("{source}: {err}"))
}

#[test]
fn test_arithmetic_and_bitwise_fixtures() {
    let cases = [
        ("+", "ADD"),
        ("-", "SUB"),
        ("*", "MULT"),
        ("/", "DIV"),
        ("%", "MOD"),
        ("**", "EXP"),
        ("<<", "SHL"),
        (">>", "SAR"),
        (">>>", "SHR"),
        ("&", "AND"),
        ("^", "XOR"),
        ("|", "OR"),
    ];
    for (op, mnemonic) in cases {
        let source = format!("var a=1{op}2; var b=((a{op}=4){op}(a=2)){op}a");
        assert_listing!(
            lower(&source).to_rows(),
            [
                [mnemonic, "a", ".%1", ".%2"],
                [mnemonic, "a", "a", ".%4"],
                ["COPY", "a", ".%2"],
                [mnemonic, "@t0", "a", "a"],
                [mnemonic, "b", "@t0", "a"],
            ]
        );
    }
}

#[test]
fn test_left_associative_fixture_without_extra_parentheses() {
    assert_listing!(
        lower("var a=1-2; var b=(a-=4)-(a=2)-a").to_rows(),
        [
            ["SUB", "a", ".%1", ".%2"],
            ["SUB", "a", "a", ".%4"],
            ["COPY", "a", ".%2"],
            ["SUB", "@t0", "a", "a"],
            ["SUB", "b", "@t0", "a"],
        ]
    );
}

#[test]
fn test_complement_fixture() {
    assert_listing!(
        lower("var a=1|(~b)").to_rows(),
        [["NOT", "@t0", "b"], ["OR", "a", ".%1", "@t0"]]
    );
}

#[test]
fn test_declaration_fixture() {
    assert_listing!(
        lower("var a=3; var b=a;").to_rows(),
        [["COPY", "a", ".%3"], ["COPY", "b", "a"]]
    );
}

#[test]
fn test_if_else_shape() {
    let intcode = lower("if (i > a) { b = 3 } else { b = 2 }");
    assert_eq!(intcode.len(), 8);
    let labels = intcode
        .iter()
        .filter(|instruction| instruction.opcode == Mnemonic::Lab)
        .count();
    assert_eq!(labels, 3);
}

#[test]
fn test_loop_shapes() {
    assert_eq!(lower("while (i > 800) { i += 32 }").len(), 7);

    let do_while = lower("do { i += 32 } while (i < 1024)");
    assert_eq!(do_while.len(), 3);
    assert_eq!(do_while.to_rows()[0], vec!["LAB", "L0"]);
    assert_eq!(do_while.to_rows()[2], vec!["BLT", "L0", "i", ".%1024"]);
}

#[test]
fn test_every_referenced_label_is_emitted_once() {
    let source = r#"
        var i = 0
        while (i < 10 && (ok || i == 3)) {
            if (i % 2 == 0) { t += i } else { t -= 1 }
            do { i++ } while (i < 5)
        }
        for (let j = 0; j < 3; j++) t = t * 2
    "#;
    let rows = lower(source).to_rows();

    let defined: Vec<&str> = rows
        .iter()
        .filter(|row| row[0] == "LAB")
        .map(|row| row[1].as_str())
        .collect();
    let mut unique = defined.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), defined.len(), "label emitted twice: {defined:?}");

    for row in rows.iter().filter(|row| row[0].starts_with('B')) {
        assert!(defined.contains(&row[1].as_str()), "{row:?} jumps to a missing label");
    }
}

#[test]
fn test_fresh_generators_agree() {
    let source = "var x = (a || b) && c; if (x >= 2) { y = x.z } else { y = x[1] }";
    assert_eq!(lower(source), lower(source));
}

#[test]
fn test_machine_profile_lowering() {
    let source = r#"
        var owner = msg.sender
        if (tx.origin == owner && block.number > 100) {
            paid = self.balance
        }
    "#;
    assert_listing!(
        lower_with(ProfileKind::Machine, source).unwrap().to_rows(),
        [
            ["CALLER", "@t0"],
            ["COPY", "owner", "@t0"],
            ["ORIGIN", "@t3"],
            ["EQ", "@t2", "@t3", "owner"],
            ["ISZERO", "@t4", "@t2"],
            ["JUMPI", "L2", "@t4"],
            ["NUMBER", "@t6"],
            ["GT", "@t5", "@t6", ".%100"],
            ["COPY", "@t1", "@t5"],
            ["JUMP", "L3"],
            ["JUMPDEST", "L2"],
            ["COPY", "@t1", "@t2"],
            ["JUMPDEST", "L3"],
            ["JUMPI", "L0", "@t1"],
            ["JUMP", "L1"],
            ["JUMPDEST", "L0"],
            ["SELFBALANCE", "@t7"],
            ["COPY", "paid", "@t7"],
            ["JUMPDEST", "L1"],
        ]
    );
}

#[test]
fn test_errors_abort_the_run() {
    assert_lowering_error!(
        lower_with(ProfileKind::Branch, "var a = 1; return a"),
        CodegenError::UnsupportedStatement(what) if what == "return statement"
    );
    assert_lowering_error!(
        lower_with(ProfileKind::Machine, "x = typeof y"),
        CodegenError::UnsupportedOperator(op) if op == "typeof"
    );
    assert_lowering_error!(
        lower_with(ProfileKind::Branch, "x = a instanceof b"),
        CodegenError::UnsupportedOperator(op) if op == "instanceof"
    );
}
