//! Matching entry points and results.
//!
//! Matching runs in two phases:
//!
//! 1. **Matching**: the packrat engine decides whether a rule consumes the
//!    whole input and reports spans or the furthest failure
//! 2. **Tree building**: on request, the match is replayed into a flat
//!    stream of events (start node, add token, finish node) that the sink
//!    turns into a lossless `rowan` green tree
//!
//! Trees are optional; callers that only need a yes/no answer never pay
//! for them.

pub mod event;
mod line_index;
mod session;
mod sink;

use std::fmt;
use std::ops::Range;

use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::engine::Expected;
use crate::error::Error;
use crate::grammar::RuleName;
use crate::lexer::TokenKind;
use crate::syntax::SyntaxNode;

pub use line_index::{LineCol, LineIndex};
pub use session::Session;

/// Outcome of matching a rule against a whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The rule consumed every significant token.
    Success(Match),
    /// The rule did not match, or left tokens over.
    Failure(Failure),
}

impl MatchResult {
    /// Returns `true` for [`MatchResult::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, MatchResult::Success(_))
    }

    /// The match, if any.
    #[must_use]
    pub fn success(&self) -> Option<&Match> {
        match self {
            MatchResult::Success(found) => Some(found),
            MatchResult::Failure(_) => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            MatchResult::Success(_) => None,
            MatchResult::Failure(failure) => Some(failure),
        }
    }
}

/// Spans of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The rule that matched.
    pub rule: RuleName,
    /// Significant token indices covered by the match.
    pub tokens: Range<usize>,
    /// Byte range from the first to the last matched token.
    pub range: TextRange,
    /// Position of `range.start()`.
    pub start: LineCol,
    /// Position of `range.end()`.
    pub end: LineCol,
}

/// Where and why a match failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The rule that was requested.
    pub rule: RuleName,
    /// Index of the significant token where matching got stuck; equal to
    /// the token count at end of input.
    pub position: usize,
    /// Byte offset of that token.
    pub offset: TextSize,
    /// Position of `offset`.
    pub location: LineCol,
    /// Kind of the token at `position`, `None` at end of input.
    pub found: Option<TokenKind>,
    /// What would have allowed matching to continue.
    pub expected: Vec<Expected>,
    /// Innermost rules active at the failure position.
    pub rules: Vec<RuleName>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.location.line, self.location.col)?;
        write!(f, "{} did not match: expected ", self.rule)?;
        match self.expected.as_slice() {
            [] => f.write_str("nothing")?,
            [only] => write!(f, "{only}")?,
            [init @ .., last] => {
                for (i, item) in init.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, " or {last}")?;
            }
        }
        match self.found {
            Some(kind) => write!(f, ", found {}", kind.describe()),
            None => f.write_str(", found end of input"),
        }
    }
}

/// Result of parsing a whole file.
#[derive(Debug)]
pub struct Parse {
    green_node: rowan::GreenNode,
    result: MatchResult,
}

impl Parse {
    /// The root syntax node. Always covers the full text; on failure it is
    /// a single `COMPILATION_UNIT` node holding every token.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    /// The match result for the compilation unit.
    #[must_use]
    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// The failure, if the file did not match.
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        self.result.failure()
    }

    /// Returns `true` if the whole file matched.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.result.is_success()
    }
}

/// Matches `rule` against the whole of `source`.
///
/// # Errors
///
/// Returns an error if `source` cannot be tokenized or matching is aborted.
/// A mismatch is a [`MatchResult::Failure`], not an error.
///
/// # Example
///
/// ```
/// use rust_frontend::{match_rule, MatchResult, RuleName};
///
/// let result = match_rule(RuleName::TupleExpression, "(0.0, 4.5)").unwrap();
/// assert!(matches!(result, MatchResult::Success(_)));
///
/// let result = match_rule(RuleName::TupleExpression, "(0.0, 4.5").unwrap();
/// assert!(matches!(result, MatchResult::Failure(_)));
/// ```
pub fn match_rule(rule: RuleName, source: &str) -> Result<MatchResult, Error> {
    let mut session = Session::new(source)?;
    Ok(session.match_rule(rule)?)
}

/// Like [`match_rule`], with the rule looked up by its upper snake case
/// name such as `"ENUM_ITEM"`.
///
/// # Errors
///
/// Returns [`Error::UnknownRule`] for a name that is not a rule, otherwise
/// the errors of [`match_rule`].
pub fn match_rule_named(name: &str, source: &str) -> Result<MatchResult, Error> {
    let rule: RuleName = name.parse()?;
    match_rule(rule, source)
}

/// Parses a whole file as a `COMPILATION_UNIT` and builds its tree.
///
/// # Errors
///
/// As [`match_rule`].
pub fn parse_source(source: &str) -> Result<Parse, Error> {
    let mut session = Session::new(source)?;
    let result = session.match_rule(RuleName::CompilationUnit)?;
    if let MatchResult::Failure(failure) = &result {
        debug!(%failure, "compilation unit did not match");
    }
    let green_node = session.tree(&result)?.green().into_owned();
    Ok(Parse { green_node, result })
}
