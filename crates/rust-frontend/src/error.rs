//! Error types.
//!
//! A grammar mismatch is not an error: it is reported as
//! [`crate::MatchResult::Failure`]. The types here cover inputs that cannot
//! be tokenized, grammar-authoring defects, and configuration problems.

use std::path::PathBuf;

use thiserror::Error;

use crate::grammar::RuleName;

/// A malformed token. Fatal for the input being lexed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// `/*` without a matching `*/`.
    #[error("unterminated block comment at offset {offset}")]
    UnterminatedBlockComment {
        /// Byte offset of the opening `/*`.
        offset: u32,
    },

    /// String, raw string, byte string, or C string without its closing quote.
    #[error("unterminated string literal at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the literal's prefix or opening quote.
        offset: u32,
    },

    /// A `'` that starts neither a char literal nor a lifetime.
    #[error("unterminated character literal at offset {offset}")]
    UnterminatedChar {
        /// Byte offset of the quote.
        offset: u32,
    },

    /// A character that cannot start any token.
    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter {
        /// Byte offset of the character.
        offset: u32,
        /// The character itself.
        character: char,
    },
}

impl LexError {
    /// Builds the error for an error token starting at `offset`.
    pub(crate) fn classify(text: &str, offset: text_size::TextSize) -> Self {
        let offset = u32::from(offset);
        let quoted = ["\"", "r\"", "r#", "b\"", "br", "c\"", "cr"];
        if text.starts_with("/*") {
            LexError::UnterminatedBlockComment { offset }
        } else if quoted.iter().any(|prefix| text.starts_with(prefix)) {
            LexError::UnterminatedString { offset }
        } else if text.starts_with('\'') || text.starts_with("b'") {
            LexError::UnterminatedChar { offset }
        } else {
            LexError::UnexpectedCharacter {
                offset,
                character: text.chars().next().unwrap_or('\0'),
            }
        }
    }

    /// Byte offset of the offending token.
    #[must_use]
    pub fn offset(&self) -> u32 {
        match self {
            LexError::UnterminatedBlockComment { offset }
            | LexError::UnterminatedString { offset }
            | LexError::UnterminatedChar { offset }
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}

/// A defect in a rule table, detected when the grammar is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A rule refers to a name that was never defined.
    #[error("rule {from} refers to undefined rule {missing}")]
    UndefinedRule {
        /// The rule holding the reference.
        from: RuleName,
        /// The name it refers to.
        missing: RuleName,
    },

    /// The same name was defined twice.
    #[error("rule {0} is defined more than once")]
    DuplicateRule(RuleName),

    /// A repetition whose body can succeed without consuming input.
    #[error("rule {0} repeats a sub-rule that can match the empty input")]
    NullableRepetition(RuleName),

    /// A rule can reach itself without consuming input.
    #[error("left recursion: {}", format_cycle(.0))]
    LeftRecursion(Vec<RuleName>),
}

fn format_cycle(cycle: &[RuleName]) -> String {
    cycle
        .iter()
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// A condition that aborts a whole match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rule nesting exceeded the configured depth.
    #[error("rule nesting exceeded {limit} levels in {rule} at token {position}")]
    RecursionLimit {
        /// The configured `max_depth`.
        limit: usize,
        /// The rule that would have exceeded it.
        rule: RuleName,
        /// Token index where that rule was entered.
        position: usize,
    },

    /// A repetition iteration succeeded without consuming a token.
    #[error("repetition in {rule} matched nothing at token {position}")]
    EmptyRepetition {
        /// Innermost named rule holding the repetition.
        rule: RuleName,
        /// Token index of the empty iteration.
        position: usize,
    },

    /// A rule was requested that the grammar does not define.
    #[error("rule {0} is not defined in this grammar")]
    UndefinedRule(RuleName),

    /// The input exceeds the configured size bound.
    #[error("input of {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge {
        /// Input length in bytes.
        len: usize,
        /// The configured `max_input_bytes`.
        limit: usize,
    },
}

/// Problems loading an [`crate::EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML text is malformed or has wrong value types.
    #[error("invalid engine configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid engine configuration: {0}")]
    Invalid(String),
}

/// Umbrella error for the convenience entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The grammar is ill-formed.
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// Matching was aborted.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No rule has the requested name.
    #[error("unknown rule name '{0}'")]
    UnknownRule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let at = text_size::TextSize::from(3);
        assert_eq!(
            LexError::classify("/* x", at),
            LexError::UnterminatedBlockComment { offset: 3 }
        );
        assert_eq!(
            LexError::classify("br#\"x", at),
            LexError::UnterminatedString { offset: 3 }
        );
        assert_eq!(
            LexError::classify("'", at),
            LexError::UnterminatedChar { offset: 3 }
        );
        assert_eq!(
            LexError::classify("§", at),
            LexError::UnexpectedCharacter {
                offset: 3,
                character: '§'
            }
        );
    }

    #[test]
    fn test_display() {
        let err = GrammarError::LeftRecursion(vec![
            RuleName::Expression,
            RuleName::RangeExpression,
            RuleName::Expression,
        ]);
        assert_eq!(
            err.to_string(),
            "left recursion: EXPRESSION -> RANGE_EXPRESSION -> EXPRESSION"
        );
    }
}
