//! Statements and block expressions.

use crate::engine::{alt, many, not, opt, seq, GrammarBuilder};
use crate::grammar::RuleName as R;
use crate::grammar::{colon, eq};
use crate::lexer::TokenKind as T;

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::BlockExpression,
        seq![
            T::LBrace,
            many(R::InnerAttribute),
            many(R::Statement),
            opt(R::Expression),
            T::RBrace
        ],
    );

    g.rule(
        R::Statement,
        alt![
            T::Semicolon,
            R::Item,
            seq![
                many(R::OuterAttribute),
                alt![R::LetStatement, R::ExpressionStatement]
            ]
        ],
    );
    g.rule(
        R::LetStatement,
        seq![
            T::KwLet,
            R::PatternNoTopAlt,
            opt(seq![colon(), R::Type]),
            opt(seq![
                eq(),
                R::Expression,
                opt(seq![T::KwElse, R::BlockExpression])
            ]),
            T::Semicolon
        ],
    );
    // A block-like expression ends the statement unless a method call or
    // `?` continues it.
    g.rule(
        R::ExpressionStatement,
        alt![
            seq![
                R::ExpressionWithBlock,
                alt![T::Semicolon, not(alt![T::Dot, T::Question])]
            ],
            seq![R::Expression, T::Semicolon]
        ],
    );
}
