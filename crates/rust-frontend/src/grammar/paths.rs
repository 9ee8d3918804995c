//! Paths and generic arguments.

use crate::engine::{alt, joint, many, many1, opt, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::grammar::{arrow, colon, comma_list, eq, path_sep};
use crate::lexer::TokenKind as T;

/// `$crate`
fn dollar_crate() -> Rule {
    seq![T::Dollar, joint(T::KwCrate)]
}

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::SimplePath,
        seq![
            opt(path_sep()),
            R::SimplePathSegment,
            many(seq![path_sep(), R::SimplePathSegment])
        ],
    );
    g.rule(
        R::SimplePathSegment,
        alt![R::Identifier, T::KwSuper, T::KwSelfValue, T::KwCrate, dollar_crate()],
    );

    g.rule(
        R::PathInExpression,
        seq![
            opt(path_sep()),
            R::PathExprSegment,
            many(seq![path_sep(), R::PathExprSegment])
        ],
    );
    g.rule(
        R::PathExprSegment,
        seq![R::PathIdentSegment, opt(seq![path_sep(), R::GenericArgs])],
    );
    g.rule(
        R::PathIdentSegment,
        alt![
            R::Identifier,
            T::KwSuper,
            T::KwSelfValue,
            T::KwSelfType,
            T::KwCrate,
            dollar_crate()
        ],
    );

    g.rule(
        R::QualifiedPathType,
        seq![
            T::Lt,
            R::Type,
            opt(seq![T::KwAs, R::TypePath]),
            T::Gt
        ],
    );
    g.rule(
        R::QualifiedPathInExpression,
        seq![
            R::QualifiedPathType,
            many1(seq![path_sep(), R::PathExprSegment])
        ],
    );
    g.rule(
        R::QualifiedPathInType,
        seq![
            R::QualifiedPathType,
            many1(seq![path_sep(), R::TypePathSegment])
        ],
    );

    g.rule(
        R::TypePath,
        seq![
            opt(path_sep()),
            R::TypePathSegment,
            many(seq![path_sep(), R::TypePathSegment])
        ],
    );
    g.rule(
        R::TypePathSegment,
        seq![
            R::PathIdentSegment,
            opt(seq![opt(path_sep()), alt![R::GenericArgs, R::TypePathFn]])
        ],
    );
    g.rule(
        R::TypePathFn,
        seq![
            T::LParen,
            opt(comma_list(R::Type)),
            T::RParen,
            opt(seq![arrow(), R::TypeNoBounds])
        ],
    );

    g.rule(
        R::GenericArgs,
        alt![
            seq![T::Lt, T::Gt],
            seq![T::Lt, comma_list(R::GenericArg), T::Gt]
        ],
    );
    g.inline(
        R::GenericArg,
        alt![
            R::LifetimeName,
            R::GenericArgsBinding,
            R::GenericArgsBounds,
            R::Type,
            R::GenericArgsConst
        ],
    );
    g.rule(
        R::GenericArgsBinding,
        seq![R::Identifier, opt(R::GenericArgs), eq(), R::Type],
    );
    g.rule(
        R::GenericArgsBounds,
        seq![R::Identifier, opt(R::GenericArgs), colon(), R::TypeParamBounds],
    );
    g.rule(
        R::GenericArgsConst,
        alt![
            R::BlockExpression,
            R::LiteralExpression,
            seq![T::Minus, R::LiteralExpression],
            R::SimplePathSegment
        ],
    );
}
