//! Items, associated items and the compilation unit.
//!
//! Items that share a keyword prefix are separated by what follows it:
//! `const fn` is tried as a function before `const X` as a constant, and
//! `extern crate` before `extern "C" fn` before `extern "C" { .. }`.

use crate::engine::{alt, kw, many, not, opt, punct, seq, GrammarBuilder, Rule};
use crate::grammar::RuleName as R;
use crate::grammar::{arrow, colon, comma_list, eq, path_sep};
use crate::lexer::TokenKind as T;

/// `{ inner-attributes items }` as used by impls, traits and extern blocks.
fn item_block(item: R) -> Rule {
    seq![
        T::LBrace,
        many(R::InnerAttribute),
        many(item),
        T::RBrace
    ]
}

/// `as name` or `as _`.
fn rename() -> Rule {
    seq![T::KwAs, alt![R::Identifier, T::Underscore]]
}

/// `prefix::` in front of a glob or a group; the prefix may be empty.
fn use_prefix() -> Rule {
    opt(seq![opt(R::SimplePath), path_sep()])
}

fn define_module_items(g: &mut GrammarBuilder) {
    g.rule(
        R::CompilationUnit,
        seq![many(R::InnerAttribute), many(R::Item)],
    );
    g.rule(
        R::Item,
        seq![
            many(R::OuterAttribute),
            alt![R::VisItem, R::MacroRulesDefinition, R::MacroInvocationSemi]
        ],
    );
    g.rule(
        R::VisItem,
        seq![
            opt(R::Visibility),
            alt![
                R::Module,
                R::ExternCrate,
                R::UseDeclaration,
                R::Function,
                R::TypeAlias,
                R::Struct,
                R::Enumeration,
                R::Union,
                R::ConstantItem,
                R::StaticItem,
                R::Trait,
                R::Implementation,
                R::ExternBlock
            ]
        ],
    );
    g.rule(
        R::Visibility,
        seq![
            T::KwPub,
            opt(seq![
                T::LParen,
                alt![
                    T::KwCrate,
                    T::KwSelfValue,
                    T::KwSuper,
                    seq![T::KwIn, R::SimplePath]
                ],
                T::RParen
            ])
        ],
    );

    g.rule(
        R::Module,
        seq![
            opt(T::KwUnsafe),
            T::KwMod,
            R::Identifier,
            alt![T::Semicolon, item_block(R::Item)]
        ],
    );
    g.rule(
        R::ExternCrate,
        seq![
            T::KwExtern,
            T::KwCrate,
            alt![R::Identifier, T::KwSelfValue],
            opt(rename()),
            T::Semicolon
        ],
    );
    g.rule(R::UseDeclaration, seq![T::KwUse, R::UseTree, T::Semicolon]);
    g.rule(
        R::UseTree,
        alt![
            seq![use_prefix(), T::Star],
            seq![
                use_prefix(),
                T::LBrace,
                opt(comma_list(R::UseTree)),
                T::RBrace
            ],
            seq![R::SimplePath, opt(rename())]
        ],
    );
}

fn define_functions(g: &mut GrammarBuilder) {
    g.rule(
        R::Function,
        seq![
            R::FunctionQualifiers,
            T::KwFn,
            R::Identifier,
            opt(R::GenericParams),
            T::LParen,
            opt(R::FunctionParameters),
            T::RParen,
            opt(R::FunctionReturnType),
            opt(R::WhereClause),
            alt![R::BlockExpression, T::Semicolon]
        ],
    );
    g.inline(
        R::FunctionQualifiers,
        seq![
            opt(T::KwConst),
            opt(T::KwAsync),
            opt(alt![T::KwUnsafe, kw("safe")]),
            opt(seq![T::KwExtern, opt(R::Abi)])
        ],
    );
    g.rule(R::Abi, T::StringLiteral);

    g.rule(
        R::FunctionParameters,
        alt![
            seq![R::SelfParam, T::Comma, comma_list(R::FunctionParam)],
            seq![R::SelfParam, opt(T::Comma)],
            comma_list(R::FunctionParam)
        ],
    );
    // The typed form goes first: `self: Self` would otherwise stop after
    // the shorthand `self`.
    g.rule(
        R::SelfParam,
        seq![
            many(R::OuterAttribute),
            alt![R::TypedSelf, R::ShorthandSelf]
        ],
    );
    g.rule(
        R::ShorthandSelf,
        seq![
            opt(seq![T::Ampersand, opt(R::LifetimeName)]),
            opt(T::KwMut),
            T::KwSelfValue,
            not(T::Colon)
        ],
    );
    g.rule(
        R::TypedSelf,
        seq![opt(T::KwMut), T::KwSelfValue, colon(), R::Type],
    );
    g.rule(
        R::FunctionParam,
        seq![
            many(R::OuterAttribute),
            alt![
                seq![R::PatternNoTopAlt, colon(), alt![R::Type, punct("...")]],
                punct("..."),
                R::Type
            ]
        ],
    );
    g.rule(R::FunctionReturnType, seq![arrow(), R::Type]);
}

fn define_type_items(g: &mut GrammarBuilder) {
    g.rule(
        R::TypeAlias,
        seq![
            T::KwType,
            R::Identifier,
            opt(R::GenericParams),
            opt(seq![colon(), opt(R::TypeParamBounds)]),
            opt(R::WhereClause),
            opt(seq![eq(), R::Type, opt(R::WhereClause)]),
            T::Semicolon
        ],
    );

    g.rule(R::Struct, alt![R::StructStruct, R::TupleStruct]);
    g.rule(
        R::StructStruct,
        seq![
            T::KwStruct,
            R::Identifier,
            opt(R::GenericParams),
            opt(R::WhereClause),
            alt![
                seq![T::LBrace, opt(R::StructFields), T::RBrace],
                T::Semicolon
            ]
        ],
    );
    g.rule(
        R::TupleStruct,
        seq![
            T::KwStruct,
            R::Identifier,
            opt(R::GenericParams),
            T::LParen,
            opt(R::TupleFields),
            T::RParen,
            opt(R::WhereClause),
            T::Semicolon
        ],
    );
    g.rule(R::StructFields, comma_list(R::StructField));
    g.rule(
        R::StructField,
        seq![
            many(R::OuterAttribute),
            opt(R::Visibility),
            R::Identifier,
            colon(),
            R::Type
        ],
    );
    g.rule(R::TupleFields, comma_list(R::TupleField));
    g.rule(
        R::TupleField,
        seq![many(R::OuterAttribute), opt(R::Visibility), R::Type],
    );

    g.rule(
        R::Enumeration,
        seq![
            T::KwEnum,
            R::Identifier,
            opt(R::GenericParams),
            opt(R::WhereClause),
            T::LBrace,
            opt(R::EnumItems),
            T::RBrace
        ],
    );
    g.rule(R::EnumItems, comma_list(R::EnumItem));
    // Payload and discriminant are independent: `A(u8) = 1` is accepted
    // here and left to later checks.
    g.rule(
        R::EnumItem,
        seq![
            many(R::OuterAttribute),
            opt(R::Visibility),
            R::Identifier,
            opt(alt![R::EnumItemTuple, R::EnumItemStruct]),
            opt(R::EnumItemDiscriminant)
        ],
    );
    g.rule(
        R::EnumItemTuple,
        seq![T::LParen, opt(R::TupleFields), T::RParen],
    );
    g.rule(
        R::EnumItemStruct,
        seq![T::LBrace, opt(R::StructFields), T::RBrace],
    );
    g.rule(R::EnumItemDiscriminant, seq![eq(), R::Expression]);

    g.rule(
        R::Union,
        seq![
            kw("union"),
            R::Identifier,
            opt(R::GenericParams),
            opt(R::WhereClause),
            T::LBrace,
            opt(R::StructFields),
            T::RBrace
        ],
    );
}

fn define_value_items(g: &mut GrammarBuilder) {
    g.rule(
        R::ConstantItem,
        seq![
            T::KwConst,
            alt![R::Identifier, T::Underscore],
            colon(),
            R::Type,
            opt(seq![eq(), R::Expression]),
            T::Semicolon
        ],
    );
    g.rule(
        R::StaticItem,
        seq![
            opt(alt![kw("safe"), T::KwUnsafe]),
            T::KwStatic,
            opt(T::KwMut),
            R::Identifier,
            colon(),
            R::Type,
            opt(seq![eq(), R::Expression]),
            T::Semicolon
        ],
    );
}

fn define_traits_and_impls(g: &mut GrammarBuilder) {
    g.rule(
        R::Trait,
        seq![
            opt(T::KwUnsafe),
            opt(kw("auto")),
            T::KwTrait,
            R::Identifier,
            opt(R::GenericParams),
            alt![
                // trait alias
                seq![eq(), R::TypeParamBounds, opt(R::WhereClause), T::Semicolon],
                seq![
                    opt(seq![colon(), opt(R::TypeParamBounds)]),
                    opt(R::WhereClause),
                    item_block(R::AssociatedItem)
                ]
            ]
        ],
    );

    g.rule(R::Implementation, alt![R::TraitImpl, R::InherentImpl]);
    g.rule(
        R::InherentImpl,
        seq![
            T::KwImpl,
            opt(R::GenericParams),
            R::Type,
            opt(R::WhereClause),
            item_block(R::AssociatedItem)
        ],
    );
    g.rule(
        R::TraitImpl,
        seq![
            opt(T::KwUnsafe),
            T::KwImpl,
            opt(R::GenericParams),
            opt(T::KwConst),
            opt(T::Bang),
            R::TypePath,
            T::KwFor,
            R::Type,
            opt(R::WhereClause),
            item_block(R::AssociatedItem)
        ],
    );
    g.rule(
        R::AssociatedItem,
        seq![
            many(R::OuterAttribute),
            alt![
                R::MacroInvocationSemi,
                seq![
                    opt(R::Visibility),
                    opt(kw("default")),
                    alt![R::TypeAlias, R::ConstantItem, R::Function]
                ]
            ]
        ],
    );

    g.rule(
        R::ExternBlock,
        seq![
            opt(T::KwUnsafe),
            T::KwExtern,
            opt(R::Abi),
            item_block(R::ExternalItem)
        ],
    );
    g.rule(
        R::ExternalItem,
        seq![
            many(R::OuterAttribute),
            alt![
                R::MacroInvocationSemi,
                seq![opt(R::Visibility), alt![R::StaticItem, R::Function]]
            ]
        ],
    );
}

pub(super) fn define(g: &mut GrammarBuilder) {
    define_module_items(g);
    define_functions(g);
    define_type_items(g);
    define_value_items(g);
    define_traits_and_impls(g);
}
