//! Expressions.
//!
//! Binary operators form a flat chain: `OPERATOR_EXPRESSION` is a unary
//! operand followed by any number of `BINARY_OPERATOR operand` pairs, with
//! precedence left to later passes. The chain, unary and postfix layers
//! are inline so an expression node holds its operands and operators as
//! direct children.
//!
//! Every layer exists twice. The `*_NO_STRUCT` family is used for the
//! scrutinee of `if`, `while`, `for` and `match`, where `x {` must start
//! the body rather than a struct literal.

use crate::engine::{alt, and, joint, kw, many, many1, not, opt, punct, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::grammar::{arrow, colon, comma_list, dot_dot, eq};
use crate::lexer::TokenKind as T;

struct Family {
    expression: R,
    range: R,
    operator: R,
    unary: R,
    postfix: R,
    primary: R,
    structs: bool,
}

const NORMAL: Family = Family {
    expression: R::Expression,
    range: R::RangeExpression,
    operator: R::OperatorExpression,
    unary: R::UnaryExpression,
    postfix: R::PostfixExpression,
    primary: R::PrimaryExpression,
    structs: true,
};

const NO_STRUCT: Family = Family {
    expression: R::ExpressionNoStruct,
    range: R::RangeExpressionNoStruct,
    operator: R::OperatorExpressionNoStruct,
    unary: R::UnaryExpressionNoStruct,
    postfix: R::PostfixExpressionNoStruct,
    primary: R::PrimaryExpressionNoStruct,
    structs: false,
};

fn define_family(g: &mut GrammarBuilder, f: &Family) {
    g.rule(
        f.expression,
        seq![
            alt![f.range, f.operator],
            opt(seq![R::AssignmentOperator, f.expression])
        ],
    );

    // `for i in 0.. {}` ends the range before the loop body.
    let end = if f.structs {
        opt(f.operator)
    } else {
        opt(seq![not(T::LBrace), f.operator])
    };
    // `..=` needs an upper bound, `..` does not.
    let bounds = alt![
        seq![punct("..="), f.operator],
        seq![dot_dot(), end]
    ];
    g.rule(
        f.range,
        alt![bounds.clone(), seq![f.operator, bounds]],
    );

    g.inline(
        f.operator,
        seq![f.unary, many(seq![R::BinaryOperator, f.unary])],
    );
    g.inline(
        f.unary,
        alt![
            seq![R::PrefixOperator, f.unary],
            seq![f.postfix, many(R::TypeCastExpression)]
        ],
    );
    g.inline(
        f.postfix,
        seq![
            f.primary,
            many(alt![
                R::ErrorPropagationExpression,
                R::AwaitExpression,
                R::MethodCallExpression,
                R::FieldExpression,
                R::TupleIndex,
                R::CallExpression,
                R::IndexExpression
            ])
        ],
    );

    let mut primary = vec![Rule::from(R::LiteralExpression), Rule::from(R::MacroInvocation)];
    if f.structs {
        primary.push(R::StructExpression.into());
    }
    primary.extend([
        R::PathExpression,
        R::TupleExpression,
        R::GroupedExpression,
        R::ArrayExpression,
        R::ExpressionWithBlock,
        R::ClosureExpression,
        R::ContinueExpression,
        R::BreakExpression,
        R::ReturnExpression,
        R::UnderscoreExpression,
    ]
    .map(Rule::from));
    g.inline(f.primary, Rule::Choice(primary));
}

fn define_operators(g: &mut GrammarBuilder) {
    g.rule(
        R::AssignmentOperator,
        alt![
            eq(),
            punct("+="),
            punct("-="),
            punct("*="),
            punct("/="),
            punct("%="),
            punct("^="),
            punct("&="),
            punct("|="),
            punct("<<="),
            punct(">>=")
        ],
    );
    // Longest first, so `<=` is never read as `<` followed by `=`.
    g.rule(
        R::BinaryOperator,
        alt![
            punct("||"),
            punct("&&"),
            punct("=="),
            punct("!="),
            punct("<="),
            punct(">="),
            punct("<<"),
            punct(">>"),
            T::Lt,
            T::Gt,
            T::Pipe,
            T::Caret,
            T::Ampersand,
            T::Plus,
            T::Minus,
            T::Star,
            T::Slash,
            T::Percent
        ],
    );
    g.rule(
        R::PrefixOperator,
        alt![
            T::Minus,
            T::Bang,
            T::Star,
            seq![
                T::Ampersand,
                opt(alt![
                    seq![kw("raw"), alt![T::KwConst, T::KwMut]],
                    T::KwMut
                ])
            ]
        ],
    );
    g.rule(R::TypeCastExpression, seq![T::KwAs, R::TypeNoBounds]);
}

fn define_suffixes(g: &mut GrammarBuilder) {
    g.rule(R::ErrorPropagationExpression, T::Question);
    g.rule(R::AwaitExpression, seq![T::Dot, T::KwAwait]);
    g.rule(
        R::MethodCallExpression,
        seq![
            T::Dot,
            R::PathExprSegment,
            T::LParen,
            opt(R::CallParams),
            T::RParen
        ],
    );
    g.rule(R::FieldExpression, seq![T::Dot, R::Identifier]);
    // `point.1`: the index must touch the dot.
    g.rule(R::TupleIndex, seq![T::Dot, joint(T::NumberLiteral)]);
    g.rule(
        R::CallExpression,
        seq![T::LParen, opt(R::CallParams), T::RParen],
    );
    g.rule(
        R::IndexExpression,
        seq![T::LBracket, R::Expression, T::RBracket],
    );
    g.rule(R::CallParams, comma_list(R::Expression));
}

fn define_primaries(g: &mut GrammarBuilder) {
    g.rule(
        R::PathExpression,
        alt![R::PathInExpression, R::QualifiedPathInExpression],
    );

    g.rule(
        R::TupleExpression,
        seq![T::LParen, opt(R::TupleElements), T::RParen],
    );
    g.rule(
        R::TupleElements,
        seq![many1(seq![R::Expression, T::Comma]), opt(R::Expression)],
    );
    g.rule(
        R::GroupedExpression,
        seq![T::LParen, R::Expression, T::RParen],
    );

    g.rule(
        R::ArrayExpression,
        seq![T::LBracket, opt(R::ArrayElements), T::RBracket],
    );
    g.rule(
        R::ArrayElements,
        alt![
            seq![R::Expression, T::Semicolon, R::Expression],
            comma_list(R::Expression)
        ],
    );

    g.rule(
        R::StructExpression,
        seq![
            R::PathInExpression,
            T::LBrace,
            opt(alt![
                R::StructBase,
                seq![
                    R::StructExprField,
                    many(seq![T::Comma, R::StructExprField]),
                    opt(alt![seq![T::Comma, R::StructBase], T::Comma])
                ]
            ]),
            T::RBrace
        ],
    );
    g.rule(
        R::StructExprField,
        seq![
            many(R::OuterAttribute),
            alt![
                seq![
                    alt![R::Identifier, T::NumberLiteral],
                    colon(),
                    R::Expression
                ],
                R::Identifier
            ]
        ],
    );
    g.rule(R::StructBase, seq![dot_dot(), R::Expression]);

    g.rule(
        R::ClosureExpression,
        seq![
            opt(T::KwAsync),
            opt(T::KwMove),
            alt![
                seq![T::Pipe, T::Pipe],
                seq![T::Pipe, R::ClosureParameters, T::Pipe]
            ],
            alt![
                seq![arrow(), R::TypeNoBounds, R::BlockExpression],
                R::Expression
            ]
        ],
    );
    g.rule(R::ClosureParameters, comma_list(R::ClosureParam));
    g.rule(
        R::ClosureParam,
        seq![
            many(R::OuterAttribute),
            R::PatternNoTopAlt,
            opt(seq![colon(), R::Type])
        ],
    );

    g.rule(
        R::ContinueExpression,
        seq![T::KwContinue, opt(R::LifetimeName)],
    );
    g.rule(
        R::BreakExpression,
        seq![T::KwBreak, opt(R::LifetimeName), opt(R::Expression)],
    );
    g.rule(R::ReturnExpression, seq![T::KwReturn, opt(R::Expression)]);
    g.rule(R::UnderscoreExpression, T::Underscore);
}

fn define_block_like(g: &mut GrammarBuilder) {
    g.inline(
        R::ExpressionWithBlock,
        alt![
            R::BlockExpression,
            R::ConstBlockExpression,
            R::UnsafeBlockExpression,
            R::AsyncBlockExpression,
            R::LoopExpression,
            R::IfExpression,
            R::MatchExpression
        ],
    );
    g.rule(
        R::ConstBlockExpression,
        seq![T::KwConst, R::BlockExpression],
    );
    g.rule(
        R::UnsafeBlockExpression,
        seq![T::KwUnsafe, R::BlockExpression],
    );
    g.rule(
        R::AsyncBlockExpression,
        seq![T::KwAsync, opt(T::KwMove), R::BlockExpression],
    );

    g.rule(
        R::LoopExpression,
        alt![
            seq![
                opt(R::LoopLabel),
                alt![
                    R::InfiniteLoopExpression,
                    R::PredicateLoopExpression,
                    R::IteratorLoopExpression
                ]
            ],
            seq![R::LoopLabel, R::LabelBlockExpression]
        ],
    );
    g.rule(R::LoopLabel, seq![R::LifetimeName, colon()]);
    g.rule(
        R::InfiniteLoopExpression,
        seq![T::KwLoop, R::BlockExpression],
    );
    g.rule(
        R::PredicateLoopExpression,
        seq![T::KwWhile, R::Conditions, R::BlockExpression],
    );
    g.rule(
        R::IteratorLoopExpression,
        seq![
            T::KwFor,
            R::Pattern,
            T::KwIn,
            R::ExpressionNoStruct,
            R::BlockExpression
        ],
    );
    g.rule(R::LabelBlockExpression, R::BlockExpression);

    g.rule(
        R::IfExpression,
        seq![
            T::KwIf,
            R::Conditions,
            R::BlockExpression,
            opt(seq![
                T::KwElse,
                alt![R::BlockExpression, R::IfExpression]
            ])
        ],
    );
    let condition = || alt![R::LetCondition, R::ExpressionNoStruct];
    g.rule(
        R::Conditions,
        seq![condition(), many(seq![punct("&&"), condition()])],
    );
    g.rule(
        R::LetCondition,
        seq![T::KwLet, R::Pattern, eq(), R::ExpressionNoStruct],
    );

    g.rule(
        R::MatchExpression,
        seq![
            T::KwMatch,
            R::ExpressionNoStruct,
            T::LBrace,
            many(R::InnerAttribute),
            many(R::MatchArm),
            T::RBrace
        ],
    );
    // A block body ends the arm; any other body needs a `,` unless it is
    // the last arm.
    g.rule(
        R::MatchArm,
        seq![
            many(R::OuterAttribute),
            R::Pattern,
            opt(R::MatchArmGuard),
            punct("=>"),
            alt![
                seq![R::Expression, T::Comma],
                seq![R::ExpressionWithBlock, opt(T::Comma)],
                seq![R::Expression, and(T::RBrace)]
            ]
        ],
    );
    g.rule(R::MatchArmGuard, seq![T::KwIf, R::Expression]);
}

pub(super) fn define(g: &mut GrammarBuilder) {
    define_family(g, &NORMAL);
    define_family(g, &NO_STRUCT);
    define_operators(g);
    define_suffixes(g);
    define_primaries(g);
    define_block_like(g);
}
