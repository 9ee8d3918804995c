//! The Rust grammar table.
//!
//! Every named construct is a [`RuleName`]; the rule bodies are spread over
//! the submodules by category:
//!
//! - `lexical.rs` - spacing, identifiers, lifetimes, literals
//! - `attributes.rs` - outer and inner attributes
//! - `macros.rs` - token trees, macro invocations, `macro_rules!`
//! - `paths.rs` - simple, expression, qualified and type paths, generic args
//! - `types.rs` - types and trait bounds
//! - `generics.rs` - generic parameters and where clauses
//! - `patterns.rs` - patterns
//! - `expressions.rs` - expressions, including the `*_NO_STRUCT` family
//! - `statements.rs` - statements and blocks
//! - `items.rs` - items, associated items and the compilation unit
//!
//! Alternatives are ordered from most to least specific. Multi-character
//! punctuation is matched as runs of joint single-character tokens, so the
//! two `>` that close `Vec<Vec<u8>>` are never confused with a shift.

mod attributes;
mod expressions;
mod generics;
mod items;
mod lexical;
mod macros;
mod paths;
mod patterns;
mod statements;
mod types;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::engine::{joint, many, not, opt, punct, seq, Grammar, GrammarBuilder, Rule};
use crate::error::{Error, GrammarError};
use crate::lexer::TokenKind;
use crate::token_kinds::for_each_rule_name;

macro_rules! define_rule_name {
    ($($rule:ident => $name:literal),* $(,)?) => {
        /// Key of a named rule in the grammar table.
        ///
        /// The display form is the upper snake case name used by callers,
        /// e.g. `TUPLE_EXPRESSION`.
        // One variant per construct; the names say it all.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum RuleName {
            $($rule,)*
        }

        impl RuleName {
            /// Every rule name, in declaration order.
            pub const ALL: &'static [RuleName] = &[$(RuleName::$rule,)*];

            /// The upper snake case name of the rule.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(RuleName::$rule => $name,)*
                }
            }

            fn lookup(name: &str) -> Option<RuleName> {
                match name {
                    $($name => Some(RuleName::$rule),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_rule_name!(define_rule_name);

impl RuleName {
    /// Dense index of this name, usable as an array slot.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RuleName::lookup(name).ok_or_else(|| Error::UnknownRule(name.to_string()))
    }
}

static GRAMMAR: Lazy<Result<Grammar, GrammarError>> = Lazy::new(build);

/// The shared Rust grammar, built and validated on first use.
///
/// # Errors
///
/// Returns the [`GrammarError`] found while validating the table. The
/// result is cached, so every call reports the same outcome.
pub fn rust_grammar() -> Result<&'static Grammar, GrammarError> {
    GRAMMAR.as_ref().map_err(Clone::clone)
}

fn build() -> Result<Grammar, GrammarError> {
    let mut builder = GrammarBuilder::new();
    lexical::define(&mut builder);
    attributes::define(&mut builder);
    macros::define(&mut builder);
    paths::define(&mut builder);
    types::define(&mut builder);
    generics::define(&mut builder);
    patterns::define(&mut builder);
    expressions::define(&mut builder);
    statements::define(&mut builder);
    items::define(&mut builder);
    builder.build()
}

/// `item (, item)* ,?`
fn comma_list(item: impl Into<Rule>) -> Rule {
    let item = item.into();
    seq![
        item.clone(),
        many(seq![TokenKind::Comma, item]),
        opt(TokenKind::Comma)
    ]
}

/// `::`
fn path_sep() -> Rule {
    punct("::")
}

/// A `:` that does not start a `::`.
fn colon() -> Rule {
    seq![TokenKind::Colon, not(joint(TokenKind::Colon))]
}

/// A `=` that does not start `==` or `=>`.
fn eq() -> Rule {
    seq![
        TokenKind::Eq,
        not(joint(TokenKind::Eq)),
        not(joint(TokenKind::Gt))
    ]
}

/// `->`
fn arrow() -> Rule {
    punct("->")
}

/// `..` that is not the start of `...` or `..=`.
fn dot_dot() -> Rule {
    seq![
        punct(".."),
        not(joint(TokenKind::Dot)),
        not(joint(TokenKind::Eq))
    ]
}
