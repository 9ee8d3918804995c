//! Property tests over generated inputs:
//!
//! 1. Lexing and tree building never lose a byte
//! 2. Matching is deterministic, within and across sessions
//! 3. Trivia between tokens never changes an answer
//! 4. The memo table never changes an answer

use proptest::prelude::*;

use rust_frontend::{
    parse_source, EngineConfig, Error, MatchResult, RuleName, Session, TokenStream,
};

/// Whole tokens, so that joining them never glues two into one.
const FRAGMENTS: &[&str] = &[
    "x", "y", "Some", "0", "1.5", "\"s\"", "'c'", "true", "(", ")", "[", "]", "{", "}", ",", ";",
    ":", "::", ".", "+", "-", "*", "&", "!", "=", "==", "=>", "..", "|", "<", ">", "as", "let",
    "if", "else", "match", "fn", "struct", "mut", "_",
];

const RULES: &[RuleName] = &[
    RuleName::Expression,
    RuleName::Statement,
    RuleName::Pattern,
    RuleName::Type,
    RuleName::Item,
];

fn fragments() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..10)
}

fn rule() -> impl Strategy<Value = RuleName> {
    prop::sample::select(RULES)
}

fn run(rule: RuleName, source: &str, config: EngineConfig) -> Option<MatchResult> {
    let mut session = Session::with_config(source, config).ok()?;
    session.match_rule(rule).ok()
}

fn same_answer(a: &MatchResult, b: &MatchResult) -> bool {
    match (a, b) {
        (MatchResult::Success(x), MatchResult::Success(y)) => x.tokens == y.tokens,
        (MatchResult::Failure(x), MatchResult::Failure(y)) => {
            x.position == y.position && x.expected == y.expected
        }
        _ => false,
    }
}

proptest! {
    #[test]
    fn lexing_is_lossless(source in "\\PC{0,64}") {
        if let Ok(stream) = TokenStream::new(&source) {
            prop_assert_eq!(stream.reconstruct(), source);
        }
    }

    #[test]
    fn trees_are_lossless(source in "\\PC{0,48}") {
        match parse_source(&source) {
            Ok(parse) => prop_assert_eq!(parse.syntax().text().to_string(), source),
            Err(Error::Lex(_) | Error::Engine(_)) => {}
            Err(err) => prop_assert!(false, "unexpected error: {}", err),
        }
    }

    #[test]
    fn matching_is_deterministic(parts in fragments(), rule in rule()) {
        let source = parts.join(" ");
        let first = run(rule, &source, EngineConfig::default());
        let second = run(rule, &source, EngineConfig::default());
        prop_assert_eq!(&first, &second);

        if let Ok(mut session) = Session::new(&source) {
            let before = session.match_rule(rule).ok();
            let _ = session.match_rule(RuleName::Expression);
            let after = session.match_rule(rule).ok();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn trivia_is_insignificant(parts in fragments(), rule in rule()) {
        let spaced = parts.join(" ");
        let commented = parts.join(" /* c */\n\t// line\n");
        if let (Some(a), Some(b)) = (
            run(rule, &spaced, EngineConfig::default()),
            run(rule, &commented, EngineConfig::default()),
        ) {
            prop_assert!(same_answer(&a, &b), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn memoization_is_transparent(parts in fragments(), rule in rule()) {
        let source = parts.join(" ");
        let plain = EngineConfig { memoize: false, ..EngineConfig::default() };
        if let (Some(a), Some(b)) = (
            run(rule, &source, EngineConfig::default()),
            run(rule, &source, plain),
        ) {
            prop_assert_eq!(a.is_success(), b.is_success());
            if let (MatchResult::Failure(x), MatchResult::Failure(y)) = (&a, &b) {
                prop_assert_eq!(x.position, y.position);
            }
        }
    }
}
