//! Token trees and macros.

use crate::engine::{alt, and, any_except, kw, many, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::lexer::TokenKind as T;

const DELIMITERS: &[T] = &[
    T::LParen,
    T::RParen,
    T::LBracket,
    T::RBracket,
    T::LBrace,
    T::RBrace,
];

/// A delimited token tree whose form decides if a trailing `;` is needed:
/// braces stand alone, parentheses and brackets need the semicolon.
fn item_body() -> Rule {
    alt![
        seq![and(T::LBrace), R::DelimTokenTree],
        seq![R::DelimTokenTree, T::Semicolon]
    ]
}

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::DelimTokenTree,
        alt![
            seq![T::LParen, many(R::TokenTree), T::RParen],
            seq![T::LBracket, many(R::TokenTree), T::RBracket],
            seq![T::LBrace, many(R::TokenTree), T::RBrace]
        ],
    );
    g.inline(
        R::TokenTree,
        alt![R::DelimTokenTree, any_except(DELIMITERS)],
    );

    g.rule(
        R::MacroInvocation,
        seq![R::SimplePath, T::Bang, R::DelimTokenTree],
    );
    g.rule(
        R::MacroInvocationSemi,
        seq![R::SimplePath, T::Bang, item_body()],
    );
    g.rule(
        R::MacroRulesDefinition,
        seq![kw("macro_rules"), T::Bang, R::Identifier, item_body()],
    );
}

#[cfg(test)]
mod tests {
    use crate::grammar::RuleName;
    use crate::{match_rule, MatchResult};

    fn matches(rule: RuleName, input: &str) -> bool {
        matches!(match_rule(rule, input), Ok(MatchResult::Success(_)))
    }

    #[test]
    fn test_token_trees() {
        for input in ["()", "[]", "{}", "(a, [b], {c; d})", "($($t:tt)*)"] {
            assert!(matches(RuleName::DelimTokenTree, input), "{input:?}");
        }
        assert!(!matches(RuleName::DelimTokenTree, "(]"));
        assert!(!matches(RuleName::DelimTokenTree, "(()"));
    }

    #[test]
    fn test_invocations() {
        assert!(matches(RuleName::MacroInvocation, "vec![1, 2, 3]"));
        assert!(matches(RuleName::MacroInvocation, "std::println!(\"{}\", x)"));
        assert!(matches(RuleName::MacroInvocationSemi, "thread_local! { static X: u8 = 0; }"));
        assert!(matches(RuleName::MacroInvocationSemi, "foo!(a b c);"));
        assert!(!matches(RuleName::MacroInvocationSemi, "foo!(a b c)"));
    }

    #[test]
    fn test_macro_rules() {
        let input = "macro_rules! square {\n    ($x:expr) => { $x * $x };\n}";
        assert!(matches(RuleName::MacroRulesDefinition, input));
        assert!(matches(RuleName::MacroRulesDefinition, "macro_rules! m (() => ());"));
    }
}
