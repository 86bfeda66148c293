//! Front-end integration tests
//!
//! Parses whole programs through the public `parse` entry point.

use intcode_syntax::ast::{Expression, Literal, Statement};
use intcode_syntax::{SyntaxError, parse};

#[test]
fn test_arithmetic_fixture_programs() {
    for source in [
        "var a=1+2; var b=(a+=4)+(a=2)+a",
        "var a=1-2; var b=(a-=4)-(a=2)-a",
        "var a=1**2; var b=((a**=4)**(a=2))**a",
        "var a=1>>>2; var b=((a>>>=4)>>>(a=2))>>>a",
        "var a=1|(~b)",
        "var a=3; var b=a;",
    ] {
        let program = parse(source).unwrap_or_else(|err| panic!("{source}: {err}"));
        assert!(!program.body.is_empty(), "{source}");
    }
}

#[test]
fn test_control_flow_program() {
    let source = r#"
        var i = 0
        var total = 0
        while (i < 10) {
            if (i % 2 == 0 && i != 4) {
                total += i
            } else {
                total -= 1
            }
            i++
        }
        do { total >>= 1 } while (total > 100)
        for (let j = 0; j < 3; j++) total = total * 2
    "#;
    let program = parse(source).unwrap();
    assert_eq!(program.body.len(), 5);
    assert!(matches!(program.body[2], Statement::While(_)));
    assert!(matches!(program.body[3], Statement::DoWhile(_)));
    assert!(matches!(program.body[4], Statement::For(_)));
}

#[test]
fn test_numeric_literal_span_recovers_source_text() {
    let source = "var big = 999999999999999999999;";
    let program = parse(source).unwrap();
    let Statement::VariableDeclaration(decl) = &program.body[0] else {
        panic!("expected declaration");
    };
    let Some(Expression::Literal(Literal::Number(number))) = &decl.declarations[0].init else {
        panic!("expected numeric literal");
    };
    assert_eq!(number.span.slice(source), Some("999999999999999999999"));
    assert_eq!(number.value, 1e21);
}

#[test]
fn test_comments_are_ignored() {
    let program = parse("// leading\nvar a = 1; /* block\ncomment */ var b = a // trailing").unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_syntax_errors_carry_spans() {
    let err = parse("if (a { }").unwrap_err();
    assert!(matches!(err, SyntaxError::Unexpected { .. }));
    assert_eq!(err.span().start, 6);

    let err = parse("var x = 'unterminated").unwrap_err();
    assert!(matches!(err, SyntaxError::InvalidToken { .. }));
}
