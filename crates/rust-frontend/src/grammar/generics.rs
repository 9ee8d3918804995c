//! Generic parameters and where clauses.

use crate::engine::{alt, many, opt, seq, GrammarBuilder};
use crate::grammar::RuleName as R;
use crate::grammar::{colon, comma_list, eq};
use crate::lexer::TokenKind as T;

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::GenericParams,
        alt![
            seq![T::Lt, T::Gt],
            seq![T::Lt, comma_list(R::GenericParam), T::Gt]
        ],
    );
    g.rule(
        R::GenericParam,
        seq![
            many(R::OuterAttribute),
            alt![R::LifetimeParam, R::TypeParam, R::ConstParam]
        ],
    );
    g.rule(
        R::LifetimeParam,
        seq![
            R::LifetimeName,
            opt(seq![colon(), opt(R::LifetimeBounds)])
        ],
    );
    g.rule(
        R::TypeParam,
        seq![
            R::Identifier,
            opt(seq![colon(), opt(R::TypeParamBounds)]),
            opt(seq![eq(), R::Type])
        ],
    );
    g.rule(
        R::ConstParam,
        seq![
            T::KwConst,
            R::Identifier,
            colon(),
            R::Type,
            opt(seq![
                eq(),
                alt![
                    R::BlockExpression,
                    R::Identifier,
                    seq![opt(T::Minus), R::LiteralExpression]
                ]
            ])
        ],
    );

    g.rule(
        R::WhereClause,
        seq![
            T::KwWhere,
            many(seq![R::WhereClauseItem, T::Comma]),
            opt(R::WhereClauseItem)
        ],
    );
    g.rule(
        R::WhereClauseItem,
        alt![
            seq![R::LifetimeName, colon(), R::LifetimeBounds],
            seq![
                opt(R::ForLifetimes),
                R::Type,
                colon(),
                opt(R::TypeParamBounds)
            ]
        ],
    );
}
