//! Patterns.

use crate::engine::{alt, many, many1, not, opt, punct, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::grammar::{colon, comma_list, dot_dot, path_sep};
use crate::lexer::TokenKind as T;

/// An optionally negated numeric literal.
fn signed_number() -> Rule {
    seq![opt(T::Minus), alt![R::FloatLiteral, T::NumberLiteral]]
}

/// `..` in a struct pattern, possibly with attributes.
fn etcetera() -> Rule {
    seq![many(R::OuterAttribute), dot_dot()]
}

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::Pattern,
        seq![
            opt(T::Pipe),
            R::PatternNoTopAlt,
            many(seq![T::Pipe, R::PatternNoTopAlt])
        ],
    );
    g.inline(
        R::PatternNoTopAlt,
        alt![R::RangePattern, R::PatternWithoutRange],
    );
    g.inline(
        R::PatternWithoutRange,
        alt![
            R::LiteralPattern,
            R::WildcardPattern,
            R::RestPattern,
            R::ReferencePattern,
            R::StructPattern,
            R::TupleStructPattern,
            R::TuplePattern,
            R::GroupedPattern,
            R::SlicePattern,
            R::IdentifierPattern,
            R::MacroInvocation,
            R::PathPattern
        ],
    );

    g.rule(
        R::LiteralPattern,
        alt![
            T::KwTrue,
            T::KwFalse,
            T::CharLiteral,
            T::ByteLiteral,
            T::StringLiteral,
            T::ByteStringLiteral,
            T::CStringLiteral,
            signed_number()
        ],
    );
    g.rule(
        R::IdentifierPattern,
        seq![
            opt(T::KwRef),
            opt(T::KwMut),
            R::Identifier,
            not(alt![path_sep(), T::LParen, T::LBrace, T::Bang]),
            opt(seq![T::At, R::PatternNoTopAlt])
        ],
    );
    g.rule(R::WildcardPattern, T::Underscore);
    g.rule(R::RestPattern, dot_dot());
    g.rule(
        R::ReferencePattern,
        seq![T::Ampersand, opt(T::KwMut), R::PatternWithoutRange],
    );

    g.rule(
        R::StructPattern,
        seq![
            R::PathInExpression,
            T::LBrace,
            opt(alt![
                seq![
                    R::StructPatternField,
                    many(seq![T::Comma, R::StructPatternField]),
                    opt(seq![T::Comma, opt(etcetera())])
                ],
                etcetera()
            ]),
            T::RBrace
        ],
    );
    g.rule(
        R::StructPatternField,
        seq![
            many(R::OuterAttribute),
            alt![
                seq![T::NumberLiteral, colon(), R::Pattern],
                seq![R::Identifier, colon(), R::Pattern],
                seq![opt(T::KwRef), opt(T::KwMut), R::Identifier]
            ]
        ],
    );
    g.rule(
        R::TupleStructPattern,
        seq![
            R::PathInExpression,
            T::LParen,
            opt(comma_list(R::Pattern)),
            T::RParen
        ],
    );
    g.rule(
        R::TuplePattern,
        alt![
            seq![T::LParen, T::RParen],
            seq![T::LParen, R::RestPattern, T::RParen],
            seq![
                T::LParen,
                many1(seq![R::Pattern, T::Comma]),
                opt(R::Pattern),
                T::RParen
            ]
        ],
    );
    g.rule(R::GroupedPattern, seq![T::LParen, R::Pattern, T::RParen]);
    g.rule(
        R::SlicePattern,
        seq![T::LBracket, opt(comma_list(R::Pattern)), T::RBracket],
    );
    g.rule(R::PathPattern, R::PathExpression);

    g.rule(
        R::RangePattern,
        alt![
            seq![R::RangePatternBound, punct("..="), R::RangePatternBound],
            seq![R::RangePatternBound, punct("..."), R::RangePatternBound],
            seq![R::RangePatternBound, dot_dot(), R::RangePatternBound],
            seq![R::RangePatternBound, dot_dot()],
            seq![punct("..="), R::RangePatternBound]
        ],
    );
    g.rule(
        R::RangePatternBound,
        alt![
            T::CharLiteral,
            T::ByteLiteral,
            signed_number(),
            R::PathExpression
        ],
    );
}
