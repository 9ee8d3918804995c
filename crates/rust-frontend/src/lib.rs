//! `rust-frontend` - Lexer, packrat PEG engine, and grammar table for Rust source code.
//!
//! This crate decides whether a piece of Rust source text is an instance of
//! a named syntactic construct, and where it stops matching if it is not:
//!
//! - **Lexer**: Tokenizes source text, keeping whitespace and comments as
//!   trivia on a side channel
//! - **Engine**: Evaluates PEG rules with ordered choice, lookahead and a
//!   `(rule, position)` memo table
//! - **Grammar**: The Rust rule table, one [`RuleName`] per construct
//! - **Parser**: Whole-input matching, spans with line/column, and
//!   lossless syntax trees on demand
//!
//! # Design Principles
//!
//! Syntax trees follow the design of `rust-analyzer` and use the `rowan`
//! library:
//!
//! - **Lossless**: All source text is preserved, including whitespace and comments
//! - **Failures are values**: A mismatch is a [`MatchResult::Failure`] with
//!   the furthest position reached, never an error
//! - **Shared grammar**: The table is built once and is read-only; each
//!   input gets its own [`Session`]
//!
//! # Example
//!
//! ```
//! use rust_frontend::{match_rule, MatchResult, RuleName};
//!
//! let result = match_rule(RuleName::Expression, "point.1").unwrap();
//! assert!(result.is_success());
//!
//! let result = match_rule(RuleName::Struct, "struct Point {x:i32, y: i32").unwrap();
//! let MatchResult::Failure(failure) = result else {
//!     panic!("missing brace accepted");
//! };
//! assert_eq!(failure.position, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use config::EngineConfig;
pub use engine::{Expected, Grammar};
pub use error::{ConfigError, EngineError, Error, GrammarError, LexError};
pub use grammar::{rust_grammar, RuleName};
pub use lexer::{lex, Lexer, Token, TokenKind, TokenStream};
pub use parser::{
    match_rule, match_rule_named, parse_source, Failure, LineCol, LineIndex, Match, MatchResult,
    Parse, Session,
};
pub use syntax::{RustLanguage, SyntaxKind, SyntaxNode, SyntaxToken};
