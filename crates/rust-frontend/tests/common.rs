//! Shared helpers for grammar and tree tests.
#![allow(dead_code, unused_imports)]

pub use rust_frontend::{match_rule, parse_source, MatchResult, RuleName, Session};
#[allow(unused_imports)]
pub use rust_frontend::syntax::SyntaxKind;

/// Returns `true` if `rule` consumes all of `source`.
pub fn matches(rule: RuleName, source: &str) -> bool {
    match match_rule(rule, source) {
        Ok(result) => result.is_success(),
        Err(err) => panic!("{rule} on {source:?} aborted: {err}"),
    }
}

/// Asserts that every input matches `rule` in full.
pub fn assert_matches(rule: RuleName, inputs: &[&str]) {
    for input in inputs {
        if let MatchResult::Failure(failure) = match_rule(rule, input).unwrap() {
            panic!("{input:?} should match {rule}: {failure}");
        }
    }
}

/// Asserts that no input matches `rule` in full.
pub fn assert_no_match(rule: RuleName, inputs: &[&str]) {
    for input in inputs {
        assert!(!matches(rule, input), "{input:?} should not match {rule}");
    }
}

/// Helper to format a match tree for snapshot testing.
pub fn snapshot_match(rule: RuleName, source: &str) -> String {
    let mut session = Session::new(source).unwrap();
    let result = session.match_rule(rule).unwrap();

    let mut output = String::new();
    match &result {
        MatchResult::Success(found) => {
            let syntax = session.syntax(found).unwrap();
            format_node(&syntax, &mut output, 0);
        }
        MatchResult::Failure(failure) => {
            output.push_str(&format!("Failure: {failure}\n"));
        }
    }
    output
}

fn format_node(node: &rust_frontend::SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    // Print node kind
    out.push_str(&format!(
        "{}{:?}@{:?}\n",
        indent,
        node.kind(),
        node.text_range()
    ));

    // Print children
    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                // Only show non-trivial tokens
                let kind = t.kind();
                if !kind.is_trivia() {
                    out.push_str(&format!(
                        "{}{:?}@{:?} {:?}\n",
                        "  ".repeat(depth + 1),
                        kind,
                        t.text_range(),
                        t.text()
                    ));
                }
            }
        }
    }
}
