//! Rule evaluation.

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grammar::RuleName;
use crate::lexer::TokenStream;
use crate::parser::event::{Event, Marker};
use crate::syntax::SyntaxKind;

use super::{Expected, Grammar, Memo, MemoTable, Rule, RuleDef, Terminal};

type Outcome = Result<Option<usize>, EngineError>;

/// Remaining stack below which a rule body runs on a fresh segment.
const RED_ZONE: usize = 64 * 1024;
/// Size of each heap-allocated stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// The furthest token position any terminal failed at, outside lookahead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FurthestFailure {
    /// Token index.
    pub position: usize,
    /// Terminals tried at `position`, in first-attempt order.
    pub expected: Vec<Expected>,
    /// Innermost rules that were active when those terminals failed.
    pub rules: Vec<RuleName>,
}

impl FurthestFailure {
    fn record(&mut self, position: usize, expected: Expected, rule: Option<RuleName>) {
        if position < self.position {
            return;
        }
        if position > self.position {
            self.position = position;
            self.expected.clear();
            self.rules.clear();
        }
        if !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
        if let Some(rule) = rule {
            if !self.rules.contains(&rule) {
                self.rules.push(rule);
            }
        }
    }
}

/// Evaluates rules of one grammar against one token stream.
///
/// Matching runs in two modes. The normal mode only answers "where does
/// this rule stop", filling the memo table as it goes. Recording mode
/// replays a successful match and emits tree events; it reuses the memo to
/// skip alternatives already known to fail and caches the events of every
/// sub-match so shared sub-rules are recorded once.
///
/// Every evaluation that fails leaves the event buffer as it found it.
pub struct Evaluator<'g, 'src> {
    grammar: &'g Grammar,
    stream: TokenStream<'src>,
    config: EngineConfig,
    memo: MemoTable,
    furthest: FurthestFailure,
    top: RuleName,
    stack: Vec<RuleName>,
    depth: usize,
    lookahead: usize,
    recording: bool,
    events: Vec<Event>,
    fragments: FxHashMap<(RuleName, usize), Vec<Event>>,
}

impl<'g, 'src> Evaluator<'g, 'src> {
    /// Creates an evaluator with an empty memo table.
    #[must_use]
    pub fn new(grammar: &'g Grammar, stream: TokenStream<'src>, config: EngineConfig) -> Self {
        Self {
            grammar,
            stream,
            config,
            memo: MemoTable::new(),
            furthest: FurthestFailure::default(),
            top: RuleName::CompilationUnit,
            stack: Vec::new(),
            depth: 0,
            lookahead: 0,
            recording: false,
            events: Vec::new(),
            fragments: FxHashMap::default(),
        }
    }

    /// The token stream being matched.
    #[must_use]
    pub fn stream(&self) -> &TokenStream<'src> {
        &self.stream
    }

    /// The grammar being evaluated.
    #[must_use]
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The memo table filled so far.
    #[must_use]
    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Furthest failure of the last [`Evaluator::run`].
    #[must_use]
    pub fn furthest(&self) -> &FurthestFailure {
        &self.furthest
    }

    /// Matches `rule` at the first token. Returns the token index where the
    /// match stopped, or `None` if it did not match.
    ///
    /// # Errors
    ///
    /// Fails if `rule` is undefined, the depth limit is hit, or a
    /// repetition matched nothing.
    pub fn run(&mut self, rule: RuleName) -> Outcome {
        // Memo hits skip failure tracking, so every run starts cold.
        self.memo.clear();
        self.fragments.clear();
        self.reset(rule);
        trace!(rule = %rule, tokens = self.stream.len(), "matching");
        let result = self.eval_reference(rule, 0);
        trace!(
            rule = %rule,
            matched = ?result.as_ref().ok().copied().flatten(),
            memo_entries = self.memo.len(),
            memo_hits = self.memo.hits(),
            "match finished"
        );
        result
    }

    /// Replays the match of `rule` at the first token and returns its tree
    /// events. The root node is always emitted, even for inline rules.
    ///
    /// # Errors
    ///
    /// Same as [`Evaluator::run`].
    pub fn record(&mut self, rule: RuleName) -> Result<Vec<Event>, EngineError> {
        let grammar = self.grammar;
        let def = grammar.get(rule).ok_or(EngineError::UndefinedRule(rule))?;
        self.reset(rule);
        self.recording = true;
        self.events.clear();

        let root = Marker::start(&mut self.events);
        let result = self.eval_body(rule, def, 0);
        self.recording = false;

        match result {
            Ok(Some(_)) => root.complete(&mut self.events, SyntaxKind::from(rule)),
            Ok(None) => {
                root.abandon(&mut self.events);
                return Ok(flat_events(rule, self.stream.len()));
            }
            Err(err) => {
                root.abandon(&mut self.events);
                return Err(err);
            }
        }
        Ok(std::mem::take(&mut self.events))
    }

    fn reset(&mut self, rule: RuleName) {
        self.top = rule;
        self.furthest = FurthestFailure::default();
        self.stack.clear();
        self.depth = 0;
        self.lookahead = 0;
    }

    fn eval(&mut self, rule: &'g Rule, pos: usize) -> Outcome {
        match rule {
            Rule::Terminal { terminal, joint } => Ok(self.eval_terminal(*terminal, *joint, pos)),
            Rule::Sequence(items) => {
                let mark = self.events.len();
                let mut cursor = pos;
                for item in items {
                    match self.eval(item, cursor)? {
                        Some(next) => cursor = next,
                        None => {
                            self.events.truncate(mark);
                            return Ok(None);
                        }
                    }
                }
                Ok(Some(cursor))
            }
            Rule::Choice(alternatives) => {
                for alternative in alternatives {
                    if let Some(end) = self.eval(alternative, pos)? {
                        return Ok(Some(end));
                    }
                }
                Ok(None)
            }
            Rule::Optional(inner) => Ok(Some(self.eval(inner, pos)?.unwrap_or(pos))),
            Rule::ZeroOrMore(inner) => self.repeat(inner, pos, false),
            Rule::OneOrMore(inner) => self.repeat(inner, pos, true),
            Rule::And(inner) => Ok(self.look_ahead(inner, pos)?.map(|_| pos)),
            Rule::Not(inner) => Ok(match self.look_ahead(inner, pos)? {
                Some(_) => None,
                None => Some(pos),
            }),
            Rule::Reference(name) => self.eval_reference(*name, pos),
            Rule::Empty => Ok(Some(pos)),
        }
    }

    fn eval_terminal(&mut self, terminal: Terminal, joint: bool, pos: usize) -> Option<usize> {
        let kind = self.stream.kind(pos);
        let matched = terminal.matches(kind, self.stream.text(pos))
            && (!joint || self.stream.is_joint(pos));
        if matched {
            if self.recording {
                self.events.push(Event::Token);
            }
            return Some(pos + 1);
        }
        if self.lookahead == 0 && !self.recording {
            let rule = self.stack.last().copied();
            self.furthest.record(pos, terminal.expected(), rule);
        }
        None
    }

    fn repeat(&mut self, inner: &'g Rule, pos: usize, at_least_one: bool) -> Outcome {
        let mut cursor = pos;
        let mut count = 0usize;
        while let Some(next) = self.eval(inner, cursor)? {
            if next == cursor {
                return Err(EngineError::EmptyRepetition {
                    rule: self.stack.last().copied().unwrap_or(self.top),
                    position: cursor,
                });
            }
            cursor = next;
            count += 1;
        }
        if at_least_one && count == 0 {
            return Ok(None);
        }
        Ok(Some(cursor))
    }

    fn look_ahead(&mut self, inner: &'g Rule, pos: usize) -> Outcome {
        let recording = std::mem::replace(&mut self.recording, false);
        self.lookahead += 1;
        let result = self.eval(inner, pos);
        self.lookahead -= 1;
        self.recording = recording;
        result
    }

    fn eval_reference(&mut self, name: RuleName, pos: usize) -> Outcome {
        if self.config.memoize {
            match self.memo.get(name, pos) {
                Some(Memo::Failure) => return Ok(None),
                Some(Memo::Success { end }) => {
                    let end = end as usize;
                    if !self.recording {
                        return Ok(Some(end));
                    }
                    if let Some(fragment) = self.fragments.get(&(name, pos)) {
                        self.events.extend_from_slice(fragment);
                        return Ok(Some(end));
                    }
                }
                None => {}
            }
        }

        let grammar = self.grammar;
        let def = grammar.get(name).ok_or(EngineError::UndefinedRule(name))?;

        let mark = self.events.len();
        let marker = (self.recording && def.node).then(|| Marker::start(&mut self.events));
        let result = self.eval_body(name, def, pos);

        match (&result, marker) {
            (Ok(Some(_)), Some(marker)) => marker.complete(&mut self.events, SyntaxKind::from(name)),
            (_, Some(marker)) => marker.abandon(&mut self.events),
            (_, None) => {}
        }
        let end = result?;

        if self.recording && end.is_some() {
            self.fragments
                .insert((name, pos), self.events[mark..].to_vec());
        }
        if self.config.memoize {
            self.memo.insert(name, pos, end);
        }
        Ok(end)
    }

    /// Evaluates a rule body. Only node-producing rules count towards the
    /// depth limit; inline rules are part of their caller's frame.
    fn eval_body(&mut self, name: RuleName, def: &'g RuleDef, pos: usize) -> Outcome {
        if def.node && self.depth >= self.config.max_depth {
            warn!(
                rule = %name,
                position = pos,
                limit = self.config.max_depth,
                "rule nesting limit reached"
            );
            return Err(EngineError::RecursionLimit {
                limit: self.config.max_depth,
                rule: name,
                position: pos,
            });
        }
        let counted = usize::from(def.node);
        self.depth += counted;
        self.stack.push(name);
        // Deep inputs outgrow the native stack long before the depth limit.
        let result = stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.eval(&def.body, pos));
        self.stack.pop();
        self.depth -= counted;
        result
    }
}

/// One root node holding every token, for input that did not match.
pub(crate) fn flat_events(rule: RuleName, tokens: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(tokens + 2);
    events.push(Event::start(SyntaxKind::from(rule)));
    events.extend(std::iter::repeat(Event::Token).take(tokens));
    events.push(Event::Finish);
    events
}
