//! Matching sessions.

use text_size::TextSize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::{flat_events, Evaluator, Expected, Grammar};
use crate::error::{EngineError, Error};
use crate::grammar::{rust_grammar, RuleName};
use crate::lexer::{Token, TokenStream};
use crate::parser::event::Event;
use crate::parser::line_index::{LineCol, LineIndex};
use crate::parser::sink::Sink;
use crate::parser::{Failure, Match, MatchResult};
use crate::syntax::SyntaxNode;

/// One input buffer, lexed once and matched against any number of rules.
///
/// The memo table belongs to the session and is never shared; create one
/// session per input and thread. The grammar itself is shared freely.
pub struct Session<'g, 'src> {
    evaluator: Evaluator<'g, 'src>,
    tokens: Vec<Token>,
    line_index: LineIndex,
}

impl<'src> Session<'static, 'src> {
    /// Lexes `source` for matching against the Rust grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] for malformed tokens and [`Error::Grammar`]
    /// if the grammar table is defective.
    pub fn new(source: &'src str) -> Result<Self, Error> {
        Self::with_config(source, EngineConfig::default())
    }

    /// Like [`Session::new`] with explicit resource bounds.
    ///
    /// # Errors
    ///
    /// As [`Session::with_grammar`].
    pub fn with_config(source: &'src str, config: EngineConfig) -> Result<Self, Error> {
        let grammar = rust_grammar()?;
        Session::with_grammar(grammar, source, config)
    }
}

impl<'g, 'src> Session<'g, 'src> {
    /// Lexes `source` for matching against `grammar`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InputTooLarge`] when `source` exceeds
    /// `config.max_input_bytes`, and [`Error::Lex`] for malformed tokens.
    pub fn with_grammar(
        grammar: &'g Grammar,
        source: &'src str,
        config: EngineConfig,
    ) -> Result<Self, Error> {
        if let Some(limit) = config.max_input_bytes {
            if source.len() > limit {
                return Err(EngineError::InputTooLarge {
                    len: source.len(),
                    limit,
                }
                .into());
            }
        }
        let stream = TokenStream::new(source)?;
        debug!(
            bytes = source.len(),
            tokens = stream.len(),
            trivia = stream.trivia().len(),
            "session created"
        );
        let tokens = stream.all_tokens().collect();
        Ok(Self {
            evaluator: Evaluator::new(grammar, stream, config),
            tokens,
            line_index: LineIndex::new(source),
        })
    }

    /// The lexed input.
    #[must_use]
    pub fn tokens(&self) -> &TokenStream<'src> {
        self.evaluator.stream()
    }

    /// The source text.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.evaluator.stream().source()
    }

    /// Line starts of the source text.
    #[must_use]
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Line and column of a byte offset.
    #[must_use]
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.line_index.line_col(self.source(), offset)
    }

    /// Matches `rule` against the whole input.
    ///
    /// Only a match that consumes every significant token is a success; a
    /// prefix match fails at the first token left over.
    ///
    /// # Errors
    ///
    /// Mismatches are [`MatchResult::Failure`]. Errors are reserved for an
    /// undefined rule, the depth limit and empty repetitions.
    pub fn match_rule(&mut self, rule: RuleName) -> Result<MatchResult, EngineError> {
        let end = self.evaluator.run(rule)?;
        let len = self.evaluator.stream().len();
        let result = match end {
            Some(end) if end == len => MatchResult::Success(self.make_match(rule, end)),
            Some(end) => MatchResult::Failure(self.prefix_failure(rule, end)),
            None => {
                let furthest = self.evaluator.furthest().clone();
                MatchResult::Failure(self.make_failure(
                    rule,
                    furthest.position,
                    furthest.expected,
                    furthest.rules,
                ))
            }
        };
        Ok(result)
    }

    /// Builds the syntax tree of a successful match of this session.
    ///
    /// The match is replayed through the memo table, so only the winning
    /// alternatives are visited again.
    ///
    /// # Errors
    ///
    /// As [`Session::match_rule`].
    pub fn syntax(&mut self, found: &Match) -> Result<SyntaxNode, EngineError> {
        let events = self.evaluator.record(found.rule)?;
        Ok(self.build_tree(events))
    }

    /// A tree for any result: the match tree on success, otherwise one
    /// node of the requested rule holding every token.
    pub(crate) fn tree(&mut self, result: &MatchResult) -> Result<SyntaxNode, EngineError> {
        match result {
            MatchResult::Success(found) => self.syntax(found),
            MatchResult::Failure(failure) => Ok(self.build_tree(flat_events(
                failure.rule,
                self.evaluator.stream().len(),
            ))),
        }
    }

    fn build_tree(&self, events: Vec<Event>) -> SyntaxNode {
        let green = Sink::new(&self.tokens, self.source(), events).finish();
        SyntaxNode::new_root(green)
    }

    fn make_match(&self, rule: RuleName, end: usize) -> Match {
        let range = self.evaluator.stream().text_range(0, end);
        Match {
            rule,
            tokens: 0..end,
            range,
            start: self.line_col(range.start()),
            end: self.line_col(range.end()),
        }
    }

    /// The rule matched `..end` but tokens remain. When a longer attempt
    /// got further, that attempt is the better report.
    fn prefix_failure(&self, rule: RuleName, end: usize) -> Failure {
        let furthest = self.evaluator.furthest().clone();
        if furthest.position > end {
            return self.make_failure(rule, furthest.position, furthest.expected, furthest.rules);
        }
        let (mut expected, mut rules) = if furthest.position == end {
            (furthest.expected, furthest.rules)
        } else {
            (Vec::new(), Vec::new())
        };
        expected.push(Expected::EndOfInput);
        if !rules.contains(&rule) {
            rules.push(rule);
        }
        self.make_failure(rule, end, expected, rules)
    }

    fn make_failure(
        &self,
        rule: RuleName,
        position: usize,
        expected: Vec<Expected>,
        rules: Vec<RuleName>,
    ) -> Failure {
        let stream = self.evaluator.stream();
        let offset = stream.offset(position);
        Failure {
            rule,
            position,
            offset,
            location: self.line_col(offset),
            found: stream.tokens().get(position).map(|token| token.kind),
            expected,
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use crate::syntax::SyntaxKind;

    #[test]
    fn test_success_spans() {
        let mut session = Session::new("\n  (0.0, 4.5)  ").unwrap();
        let MatchResult::Success(found) = session.match_rule(RuleName::TupleExpression).unwrap()
        else {
            panic!("expected a match");
        };
        assert_eq!(found.tokens, 0..9);
        assert_eq!(u32::from(found.range.start()), 3);
        assert_eq!(u32::from(found.range.end()), 13);
        assert_eq!(found.start, LineCol { line: 2, col: 3 });
        assert_eq!(found.end, LineCol { line: 2, col: 13 });
    }

    #[test]
    fn test_prefix_match_fails_at_leftover() {
        let mut session = Session::new("a b").unwrap();
        let MatchResult::Failure(failure) = session.match_rule(RuleName::Identifier).unwrap() else {
            panic!("expected a failure");
        };
        assert_eq!(failure.position, 1);
        assert_eq!(failure.found, Some(TokenKind::Ident));
        assert_eq!(failure.expected, vec![Expected::EndOfInput]);
        assert_eq!(failure.location, LineCol { line: 1, col: 3 });
    }

    #[test]
    fn test_shorthand_self_rejects_a_type_annotation() {
        let mut session = Session::new("self: Self").unwrap();
        let MatchResult::Failure(failure) = session.match_rule(RuleName::ShorthandSelf).unwrap()
        else {
            panic!("expected a failure");
        };
        // Fails outright rather than stopping after `self`.
        assert_eq!(failure.position, 0);
        assert!(!failure.expected.contains(&Expected::EndOfInput));
    }

    #[test]
    fn test_missing_brace_is_reported_at_end() {
        let source = "struct Point {x:i32, y: i32";
        let mut session = Session::new(source).unwrap();
        let MatchResult::Failure(failure) = session.match_rule(RuleName::Struct).unwrap() else {
            panic!("expected a failure");
        };
        assert_eq!(failure.position, 10);
        assert_eq!(failure.found, None);
        assert!(failure.expected.contains(&Expected::Token(TokenKind::RBrace)));
        assert_eq!(u32::from(failure.offset), source.len() as u32);
    }

    #[test]
    fn test_repeated_matches_agree() {
        let mut session = Session::new("fn f( {}").unwrap();
        let first = session.match_rule(RuleName::Item).unwrap();
        let _ = session.match_rule(RuleName::Type).unwrap();
        let second = session.match_rule(RuleName::Item).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_syntax_is_lossless() {
        let source = "// lead\nconst MAX: Self; /* tail */\n";
        let mut session = Session::new(source).unwrap();
        let MatchResult::Success(found) = session.match_rule(RuleName::ConstantItem).unwrap() else {
            panic!("expected a match");
        };
        let root = session.syntax(&found).unwrap();
        assert_eq!(root.kind(), SyntaxKind::ConstantItem);
        assert_eq!(root.text().to_string(), source);
    }

    #[test]
    fn test_input_size_limit() {
        let config = EngineConfig {
            max_input_bytes: Some(4),
            ..EngineConfig::default()
        };
        let err = Session::with_config("fn main() {}", config).err().unwrap();
        assert!(matches!(
            err,
            Error::Engine(EngineError::InputTooLarge { len: 12, limit: 4 })
        ));
    }
}
