//! Rule expressions and the small DSL used to write grammar tables.

use std::fmt;

use crate::grammar::RuleName;
use crate::lexer::TokenKind;

use super::Expected;

/// What a single significant token must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Any token of this kind.
    Kind(TokenKind),
    /// A token of this kind with exactly this text. Used for weak keywords
    /// such as `union` or `macro_rules`, which lex as identifiers.
    Text(TokenKind, &'static str),
    /// Any token except the end of input and the listed kinds.
    AnyExcept(&'static [TokenKind]),
}

impl Terminal {
    /// Returns true if a token of `kind` with `text` satisfies this terminal.
    #[must_use]
    pub fn matches(self, kind: TokenKind, text: &str) -> bool {
        match self {
            Terminal::Kind(expected) => expected == kind,
            Terminal::Text(expected, word) => expected == kind && word == text,
            Terminal::AnyExcept(excluded) => kind != TokenKind::Eof && !excluded.contains(&kind),
        }
    }

    pub(crate) fn expected(self) -> Expected {
        match self {
            Terminal::Kind(kind) => Expected::Token(kind),
            Terminal::Text(_, word) => Expected::Keyword(smol_str::SmolStr::new_static(word)),
            Terminal::AnyExcept(_) => Expected::AnyToken,
        }
    }
}

/// A PEG expression over significant tokens.
///
/// Rules form a tree; cycles go through [`Rule::Reference`], which holds
/// a key into the owning [`super::Grammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// One token. When `joint` is set the token must directly follow the
    /// previous significant token with no trivia in between.
    Terminal { terminal: Terminal, joint: bool },
    /// All sub-rules in order.
    Sequence(Vec<Rule>),
    /// The first sub-rule that matches.
    Choice(Vec<Rule>),
    /// The sub-rule, or nothing.
    Optional(Box<Rule>),
    /// The sub-rule as often as it matches.
    ZeroOrMore(Box<Rule>),
    /// The sub-rule at least once.
    OneOrMore(Box<Rule>),
    /// Succeeds without consuming if the sub-rule matches.
    And(Box<Rule>),
    /// Succeeds without consuming if the sub-rule does not match.
    Not(Box<Rule>),
    /// Another named rule.
    Reference(RuleName),
    /// Always succeeds without consuming.
    Empty,
}

impl Rule {
    /// Calls `f` with every name referenced from this rule.
    pub fn for_each_reference(&self, f: &mut impl FnMut(RuleName)) {
        match self {
            Rule::Reference(name) => f(*name),
            Rule::Sequence(items) | Rule::Choice(items) => {
                for item in items {
                    item.for_each_reference(f);
                }
            }
            Rule::Optional(inner)
            | Rule::ZeroOrMore(inner)
            | Rule::OneOrMore(inner)
            | Rule::And(inner)
            | Rule::Not(inner) => inner.for_each_reference(f),
            Rule::Terminal { .. } | Rule::Empty => {}
        }
    }
}

impl From<TokenKind> for Rule {
    fn from(kind: TokenKind) -> Self {
        Rule::Terminal {
            terminal: Terminal::Kind(kind),
            joint: false,
        }
    }
}

impl From<RuleName> for Rule {
    fn from(name: RuleName) -> Self {
        Rule::Reference(name)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, items: &[Rule], sep: &str) -> fmt::Result {
            f.write_str("(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(")")
        }

        match self {
            Rule::Terminal { terminal, joint } => {
                if *joint {
                    f.write_str("~")?;
                }
                match terminal {
                    Terminal::Kind(kind) => f.write_str(kind.describe()),
                    Terminal::Text(_, word) => write!(f, "'{word}'"),
                    Terminal::AnyExcept(_) => f.write_str("ANY"),
                }
            }
            Rule::Sequence(items) => list(f, items, " "),
            Rule::Choice(items) => list(f, items, " / "),
            Rule::Optional(inner) => write!(f, "{inner}?"),
            Rule::ZeroOrMore(inner) => write!(f, "{inner}*"),
            Rule::OneOrMore(inner) => write!(f, "{inner}+"),
            Rule::And(inner) => write!(f, "&{inner}"),
            Rule::Not(inner) => write!(f, "!{inner}"),
            Rule::Reference(name) => f.write_str(name.as_str()),
            Rule::Empty => f.write_str("()"),
        }
    }
}

/// A token that must directly follow the previous one.
#[must_use]
pub fn joint(kind: TokenKind) -> Rule {
    Rule::Terminal {
        terminal: Terminal::Kind(kind),
        joint: true,
    }
}

/// A weak keyword: an identifier with exactly this text.
#[must_use]
pub fn kw(word: &'static str) -> Rule {
    Rule::Terminal {
        terminal: Terminal::Text(TokenKind::Ident, word),
        joint: false,
    }
}

/// Multi-character punctuation such as `::` or `>>=`, built from joint
/// single-character tokens.
#[must_use]
pub fn punct(text: &'static str) -> Rule {
    let mut parts: Vec<Rule> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            // Unknown characters map to a kind no token ever has.
            let kind = TokenKind::from_punct(c).unwrap_or(TokenKind::Error);
            if i == 0 {
                Rule::from(kind)
            } else {
                joint(kind)
            }
        })
        .collect();
    match parts.len() {
        0 => Rule::Empty,
        1 => parts.pop().unwrap_or(Rule::Empty),
        _ => Rule::Sequence(parts),
    }
}

/// Any single token except the listed kinds.
#[must_use]
pub fn any_except(excluded: &'static [TokenKind]) -> Rule {
    Rule::Terminal {
        terminal: Terminal::AnyExcept(excluded),
        joint: false,
    }
}

/// Zero or one occurrence.
#[must_use]
pub fn opt(rule: impl Into<Rule>) -> Rule {
    Rule::Optional(Box::new(rule.into()))
}

/// Zero or more occurrences.
#[must_use]
pub fn many(rule: impl Into<Rule>) -> Rule {
    Rule::ZeroOrMore(Box::new(rule.into()))
}

/// One or more occurrences.
#[must_use]
pub fn many1(rule: impl Into<Rule>) -> Rule {
    Rule::OneOrMore(Box::new(rule.into()))
}

/// Positive lookahead.
#[must_use]
pub fn and(rule: impl Into<Rule>) -> Rule {
    Rule::And(Box::new(rule.into()))
}

/// Negative lookahead.
#[must_use]
pub fn not(rule: impl Into<Rule>) -> Rule {
    Rule::Not(Box::new(rule.into()))
}

/// Builds a [`Rule::Sequence`] from anything convertible into a rule.
macro_rules! seq {
    ($($rule:expr),+ $(,)?) => {
        $crate::engine::Rule::Sequence(vec![$($crate::engine::Rule::from($rule)),+])
    };
}

/// Builds an ordered [`Rule::Choice`] from anything convertible into a rule.
macro_rules! alt {
    ($($rule:expr),+ $(,)?) => {
        $crate::engine::Rule::Choice(vec![$($crate::engine::Rule::from($rule)),+])
    };
}

pub(crate) use alt;
pub(crate) use seq;
