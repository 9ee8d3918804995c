//! Spacing, identifiers, lifetimes and literals.
//!
//! Numbers never contain a `.`, so float literals are assembled here from
//! joint tokens: `0.5` is `NUMBER ~. ~NUMBER`, and `1.` is a number and a
//! joint dot that is not followed by another dot, an identifier or `_`.

use crate::engine::{alt, joint, not, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::lexer::TokenKind as T;

pub(super) fn define(g: &mut GrammarBuilder) {
    // Trivia never reaches the rules, so spacing is always satisfied.
    g.inline(R::Spc, Rule::Empty);

    g.rule(R::Identifier, T::Ident);
    g.rule(R::LifetimeName, T::Lifetime);

    g.rule(
        R::FloatLiteral,
        alt![
            seq![T::NumberLiteral, joint(T::Dot), joint(T::NumberLiteral)],
            seq![
                T::NumberLiteral,
                joint(T::Dot),
                not(alt![T::Dot, T::Ident, T::Underscore, T::KwAwait])
            ]
        ],
    );

    g.rule(
        R::LiteralExpression,
        alt![
            R::FloatLiteral,
            T::NumberLiteral,
            T::StringLiteral,
            T::ByteStringLiteral,
            T::CStringLiteral,
            T::CharLiteral,
            T::ByteLiteral,
            T::KwTrue,
            T::KwFalse
        ],
    );
}
