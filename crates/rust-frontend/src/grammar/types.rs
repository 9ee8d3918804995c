//! Types and trait bounds.
//!
//! `TYPE` allows `impl A + B` and `dyn A + B`; `TYPE_NO_BOUNDS` is the
//! variant used where a `+` would be ambiguous, such as after `as` or
//! behind `&`.

use crate::engine::{alt, many, many1, opt, punct, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::grammar::{arrow, colon};
use crate::lexer::TokenKind as T;

/// `unsafe? (extern ABI?)?` in front of `fn` in a bare function type.
fn bare_fn_qualifiers() -> Rule {
    seq![opt(T::KwUnsafe), opt(seq![T::KwExtern, opt(R::Abi)])]
}

/// Parameters of a bare function type, including a trailing variadic.
fn bare_fn_params() -> Rule {
    let variadic = seq![many(R::OuterAttribute), punct("...")];
    alt![
        seq![
            R::MaybeNamedParam,
            many(seq![T::Comma, R::MaybeNamedParam]),
            opt(seq![T::Comma, opt(variadic.clone())])
        ],
        variadic
    ]
}

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::Type,
        alt![R::ImplTraitType, R::TraitObjectType, R::TypeNoBounds],
    );
    g.inline(
        R::TypeNoBounds,
        alt![
            R::TupleType,
            R::ParenthesizedType,
            R::ImplTraitTypeOneBound,
            R::TraitObjectTypeOneBound,
            R::NeverType,
            R::RawPointerType,
            R::ReferenceType,
            R::ArrayType,
            R::SliceType,
            R::InferredType,
            R::QualifiedPathInType,
            R::BareFunctionType,
            R::MacroInvocation,
            R::TypePath
        ],
    );

    g.rule(R::ParenthesizedType, seq![T::LParen, R::Type, T::RParen]);
    g.rule(
        R::TupleType,
        alt![
            seq![T::LParen, T::RParen],
            seq![
                T::LParen,
                many1(seq![R::Type, T::Comma]),
                opt(R::Type),
                T::RParen
            ]
        ],
    );
    g.rule(R::NeverType, T::Bang);
    g.rule(
        R::RawPointerType,
        seq![T::Star, alt![T::KwMut, T::KwConst], R::TypeNoBounds],
    );
    g.rule(
        R::ReferenceType,
        seq![
            T::Ampersand,
            opt(R::LifetimeName),
            opt(T::KwMut),
            R::TypeNoBounds
        ],
    );
    g.rule(
        R::ArrayType,
        seq![T::LBracket, R::Type, T::Semicolon, R::Expression, T::RBracket],
    );
    g.rule(R::SliceType, seq![T::LBracket, R::Type, T::RBracket]);
    g.rule(R::InferredType, T::Underscore);

    g.rule(R::ImplTraitType, seq![T::KwImpl, R::TypeParamBounds]);
    g.rule(R::ImplTraitTypeOneBound, seq![T::KwImpl, R::TraitBound]);
    g.rule(R::TraitObjectType, seq![T::KwDyn, R::TypeParamBounds]);
    g.rule(R::TraitObjectTypeOneBound, seq![T::KwDyn, R::TraitBound]);

    g.rule(
        R::BareFunctionType,
        seq![
            opt(R::ForLifetimes),
            bare_fn_qualifiers(),
            T::KwFn,
            T::LParen,
            opt(bare_fn_params()),
            T::RParen,
            opt(seq![arrow(), R::TypeNoBounds])
        ],
    );
    g.rule(
        R::MaybeNamedParam,
        seq![
            many(R::OuterAttribute),
            opt(seq![alt![R::Identifier, T::Underscore], colon()]),
            R::Type
        ],
    );

    g.rule(
        R::TypeParamBounds,
        seq![
            R::TypeParamBound,
            many(seq![T::Plus, R::TypeParamBound]),
            opt(T::Plus)
        ],
    );
    g.rule(
        R::TypeParamBound,
        alt![R::LifetimeName, R::TraitBound, R::UseBound],
    );

    let modifiers = || {
        seq![
            opt(alt![
                T::Question,
                seq![T::Tilde, T::KwConst],
                T::KwConst,
                T::KwAsync
            ]),
            opt(R::ForLifetimes),
            R::TypePath
        ]
    };
    g.rule(
        R::TraitBound,
        alt![seq![T::LParen, modifiers(), T::RParen], modifiers()],
    );
    g.rule(R::UseBound, seq![T::KwUse, R::GenericArgs]);
    g.rule(
        R::LifetimeBounds,
        seq![
            R::LifetimeName,
            many(seq![T::Plus, R::LifetimeName]),
            opt(T::Plus)
        ],
    );
    g.rule(R::ForLifetimes, seq![T::KwFor, R::GenericParams]);
}

#[cfg(test)]
mod tests {
    use crate::grammar::RuleName;
    use crate::{match_rule, MatchResult};

    fn matches(rule: RuleName, input: &str) -> bool {
        matches!(match_rule(rule, input), Ok(MatchResult::Success(_)))
    }

    #[test]
    fn test_types() {
        for input in [
            "u8",
            "()",
            "(u8,)",
            "(u8, String)",
            "(u8)",
            "!",
            "*const u8",
            "*mut [u8]",
            "&'a mut T",
            "&&str",
            "[u32; 2]",
            "[u8; N * 2]",
            "[T]",
            "_",
            "<T as Trait>::Output",
            "fn(u8) -> u8",
            "unsafe extern \"C\" fn(*const u8, ...) -> i32",
            "for<'a> fn(&'a str)",
            "impl Iterator<Item = u8> + Send + 'static",
            "dyn Fn(&str) -> bool + Send",
            "Box<dyn Error + Send + Sync>",
            "&dyn Any",
            "impl ?Sized",
            "impl Sized + use<'a, T>",
            "impl for<'a> Fn(&'a u8)",
            "impl ~const Clone",
            "Pin<&mut (dyn Future<Output = ()> + Send)>",
            "my_macro!(u8)",
        ] {
            assert!(matches(RuleName::Type, input), "{input:?}");
        }
    }

    #[test]
    fn test_rejected_types() {
        for input in ["&", "[u8; ]", "(u8", "dyn", "u8 + Send"] {
            assert!(!matches(RuleName::Type, input), "{input:?}");
        }
    }

    #[test]
    fn test_no_bounds_stops_before_plus() {
        assert!(matches(RuleName::TypeNoBounds, "&dyn Any"));
        assert!(!matches(RuleName::TypeNoBounds, "impl A + B"));
    }
}
