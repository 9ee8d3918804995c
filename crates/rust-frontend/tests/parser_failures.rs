mod common;
use common::*;

use rust_frontend::{
    match_rule_named, EngineConfig, EngineError, Error, Expected, LineCol, TokenKind,
};

fn failure(rule: RuleName, source: &str) -> rust_frontend::Failure {
    match match_rule(rule, source).unwrap() {
        MatchResult::Failure(failure) => failure,
        MatchResult::Success(_) => panic!("{source:?} should not match {rule}"),
    }
}

#[test]
fn test_missing_closing_brace() {
    let source = "struct Point {x:i32, y: i32";
    let failure = failure(RuleName::Struct, source);
    assert_eq!(failure.position, 10);
    assert_eq!(failure.found, None);
    assert_eq!(failure.location, LineCol { line: 1, col: 28 });
    assert!(failure
        .expected
        .contains(&Expected::Token(TokenKind::RBrace)));
}

#[test]
fn test_unclosed_tuple() {
    let failure = failure(RuleName::TupleExpression, "(0.0,\n 4.5");
    assert_eq!(failure.position, 8);
    assert_eq!(failure.location, LineCol { line: 2, col: 5 });
    assert!(failure
        .expected
        .contains(&Expected::Token(TokenKind::RParen)));
}

#[test]
fn test_leftover_tokens() {
    let failure = failure(RuleName::Expression, "a b");
    assert_eq!(failure.position, 1);
    assert_eq!(failure.found, Some(TokenKind::Ident));
    assert!(failure.expected.contains(&Expected::EndOfInput));
    assert_eq!(failure.location, LineCol { line: 1, col: 3 });
}

#[test]
fn test_failure_on_later_line() {
    let source = "fn main() {\n    let v = vec![1, 2, 3];\n    for x in v {\n        println!(\"{}\", x);\n    \n}\n";
    let parse = parse_source(source).unwrap();
    assert!(!parse.ok());
    let failure = parse.failure().unwrap();
    assert_eq!(failure.found, None);
    assert_eq!(failure.location, LineCol { line: 7, col: 1 });
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_empty_input() {
    assert!(matches(RuleName::CompilationUnit, ""));
    assert!(matches(RuleName::Spc, ""));
    let failure = failure(RuleName::Expression, "");
    assert_eq!(failure.position, 0);
    assert_eq!(failure.found, None);
    assert_eq!(failure.location, LineCol { line: 1, col: 1 });
}

#[test]
fn test_rules_by_name() {
    assert!(match_rule_named("TUPLE_EXPRESSION", "(0.0, 4.5)")
        .unwrap()
        .is_success());
    assert!(!match_rule_named("CONSTANT_ITEM", "const X: u8 = 1")
        .unwrap()
        .is_success());
    assert!(matches!(
        match_rule_named("tuple_expression", "()"),
        Err(Error::UnknownRule(_))
    ));
}

#[test]
fn test_recursion_limit_aborts() {
    let source = format!("{}a{}", "(".repeat(64), ")".repeat(64));
    let config = EngineConfig {
        max_depth: 16,
        ..EngineConfig::default()
    };
    let mut session = Session::with_config(&source, config).unwrap();
    assert!(matches!(
        session.match_rule(RuleName::Expression),
        Err(EngineError::RecursionLimit { limit: 16, .. })
    ));

    // The default limit is deep enough for ordinary nesting.
    let shallow = format!("{}a{}", "(".repeat(16), ")".repeat(16));
    assert!(matches(RuleName::Expression, &shallow));
}

#[test]
fn test_lex_errors_are_errors() {
    assert!(matches!(
        match_rule(RuleName::Expression, "\"open"),
        Err(Error::Lex(_))
    ));
}
