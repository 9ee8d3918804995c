//! Outer and inner attributes.
//!
//! Doc comments are trivia and never show up here.

use crate::engine::{alt, opt, seq, GrammarBuilder};
use crate::grammar::eq;
use crate::grammar::RuleName as R;
use crate::lexer::TokenKind as T;

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        R::OuterAttribute,
        seq![T::Hash, T::LBracket, R::Attr, T::RBracket],
    );
    g.rule(
        R::InnerAttribute,
        seq![T::Hash, T::Bang, T::LBracket, R::Attr, T::RBracket],
    );

    // `#[unsafe(no_mangle)]` wraps a whole attribute.
    g.rule(
        R::Attr,
        alt![
            seq![T::KwUnsafe, T::LParen, R::Attr, T::RParen],
            seq![R::SimplePath, opt(R::AttrInput)]
        ],
    );
    g.rule(
        R::AttrInput,
        alt![R::DelimTokenTree, seq![eq(), R::Expression]],
    );
}
