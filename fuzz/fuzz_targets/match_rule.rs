#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_frontend::{EngineConfig, MatchResult, RuleName, Session};

// Without the memo table matching can take exponential time.
const MAX_SOURCE_BYTES: usize = 256;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let rules = RuleName::ALL;
    let rule = rules[usize::from(selector) % rules.len()];
    let capped = &rest[..rest.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped);

    let Ok(mut memoized) = Session::new(&source) else {
        return;
    };
    let config = EngineConfig {
        memoize: false,
        ..EngineConfig::default()
    };
    let Ok(mut plain) = Session::with_config(&source, config) else {
        return;
    };

    // The memo table must never change an answer.
    match (memoized.match_rule(rule), plain.match_rule(rule)) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a.is_success(), b.is_success());
            match (&a, &b) {
                (MatchResult::Success(x), MatchResult::Success(y)) => {
                    assert_eq!(x.range, y.range);
                    assert!(memoized.syntax(x).is_ok());
                }
                (MatchResult::Failure(x), MatchResult::Failure(y)) => {
                    assert_eq!(x.position, y.position);
                }
                _ => unreachable!(),
            }
        }
        // Memo hits skip nested calls, so only one side may hit the depth limit.
        _ => {}
    }
});
