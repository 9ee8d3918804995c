//! Rule combinator engine.
//!
//! A packrat PEG interpreter over the significant tokens of a
//! [`crate::TokenStream`]:
//!
//! - [`Rule`]: closed set of combinators (sequence, ordered choice,
//!   repetition, lookahead, terminals, references)
//! - [`Grammar`]: arena of named rules, validated by [`GrammarBuilder`]
//! - [`MemoTable`]: `(rule, position)` cache
//! - [`Evaluator`]: evaluates rules, tracks the furthest failure and
//!   replays successful matches into tree events
//!
//! Mismatches are ordinary values; only grammar defects and resource
//! limits surface as [`crate::EngineError`].

mod eval;
mod grammar;
mod memo;
mod rule;

use std::fmt;

use smol_str::SmolStr;

use crate::lexer::TokenKind;

pub use eval::{Evaluator, FurthestFailure};

pub(crate) use eval::flat_events;
pub use grammar::{Grammar, GrammarBuilder, RuleDef};
pub use memo::{Memo, MemoTable};
pub use rule::{and, any_except, joint, kw, many, many1, not, opt, punct, Rule, Terminal};

pub(crate) use rule::{alt, seq};

/// Something the engine looked for at the failure position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A token of this kind.
    Token(TokenKind),
    /// An identifier with this exact text.
    Keyword(SmolStr),
    /// Any token inside a token tree.
    AnyToken,
    /// Nothing more; the rule matched a prefix of the input.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(kind.describe()),
            Expected::Keyword(word) => write!(f, "`{word}`"),
            Expected::AnyToken => f.write_str("any token"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}
