//! The rule arena and its construction-time checks.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::GrammarError;
use crate::grammar::RuleName;

use super::Rule;

/// A named rule body plus whether it shows up in the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDef {
    /// The rule expression.
    pub body: Rule,
    /// Whether a match produces its own syntax node. Inline rules splice
    /// their children into the parent node.
    pub node: bool,
}

/// An immutable set of named rules, indexed by [`RuleName`].
///
/// Built once through [`GrammarBuilder`] and then shared read-only by any
/// number of sessions.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<Option<RuleDef>>,
}

impl Grammar {
    /// Looks up a rule definition.
    #[must_use]
    pub fn get(&self, name: RuleName) -> Option<&RuleDef> {
        self.rules.get(name.index()).and_then(Option::as_ref)
    }

    /// Returns true if `name` is defined.
    #[must_use]
    pub fn contains(&self, name: RuleName) -> bool {
        self.get(name).is_some()
    }

    /// Number of defined rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.iter().flatten().count()
    }

    /// Returns true if no rule is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Defined rules in [`RuleName`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleName, &RuleDef)> + '_ {
        RuleName::ALL
            .iter()
            .filter_map(move |&name| self.get(name).map(|def| (name, def)))
    }
}

/// Collects rule definitions and validates them into a [`Grammar`].
#[derive(Debug)]
pub struct GrammarBuilder {
    rules: Vec<Option<RuleDef>>,
    duplicate: Option<RuleName>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![None; RuleName::ALL.len()],
            duplicate: None,
        }
    }

    /// Defines a rule that produces a syntax node.
    pub fn rule(&mut self, name: RuleName, body: impl Into<Rule>) -> &mut Self {
        self.define(name, body.into(), true)
    }

    /// Defines a rule whose matches are spliced into the parent node.
    pub fn inline(&mut self, name: RuleName, body: impl Into<Rule>) -> &mut Self {
        self.define(name, body.into(), false)
    }

    fn define(&mut self, name: RuleName, body: Rule, node: bool) -> &mut Self {
        let slot = &mut self.rules[name.index()];
        if slot.is_some() && self.duplicate.is_none() {
            self.duplicate = Some(name);
        }
        *slot = Some(RuleDef { body, node });
        self
    }

    /// Validates the collected rules.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a rule defined twice, a reference
    /// to an undefined rule, a repetition over a sub-rule that can match
    /// the empty input, or left recursion.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(name) = self.duplicate {
            return Err(GrammarError::DuplicateRule(name));
        }
        let grammar = Grammar { rules: self.rules };

        check_references(&grammar)?;
        let nullable = nullable_rules(&grammar);
        check_repetitions(&grammar, &nullable)?;
        check_left_recursion(&grammar, &nullable)?;

        debug!(rules = grammar.len(), "grammar built");
        Ok(grammar)
    }
}

fn check_references(grammar: &Grammar) -> Result<(), GrammarError> {
    for (from, def) in grammar.iter() {
        let mut missing = None;
        def.body.for_each_reference(&mut |name| {
            if missing.is_none() && !grammar.contains(name) {
                missing = Some(name);
            }
        });
        if let Some(missing) = missing {
            return Err(GrammarError::UndefinedRule { from, missing });
        }
    }
    Ok(())
}

/// Fixpoint over "can match without consuming a token".
fn nullable_rules(grammar: &Grammar) -> Vec<bool> {
    let mut nullable = vec![false; RuleName::ALL.len()];
    loop {
        let mut changed = false;
        for (name, def) in grammar.iter() {
            if !nullable[name.index()] && is_nullable(&def.body, &nullable) {
                nullable[name.index()] = true;
                changed = true;
            }
        }
        if !changed {
            return nullable;
        }
    }
}

fn is_nullable(rule: &Rule, nullable: &[bool]) -> bool {
    match rule {
        Rule::Terminal { .. } => false,
        Rule::Sequence(items) => items.iter().all(|item| is_nullable(item, nullable)),
        Rule::Choice(items) => items.iter().any(|item| is_nullable(item, nullable)),
        Rule::OneOrMore(inner) => is_nullable(inner, nullable),
        Rule::Optional(_) | Rule::ZeroOrMore(_) | Rule::And(_) | Rule::Not(_) | Rule::Empty => {
            true
        }
        Rule::Reference(name) => nullable[name.index()],
    }
}

fn check_repetitions(grammar: &Grammar, nullable: &[bool]) -> Result<(), GrammarError> {
    fn walk(rule: &Rule, nullable: &[bool]) -> bool {
        match rule {
            Rule::ZeroOrMore(inner) | Rule::OneOrMore(inner) => {
                !is_nullable(inner, nullable) && walk(inner, nullable)
            }
            Rule::Sequence(items) | Rule::Choice(items) => {
                items.iter().all(|item| walk(item, nullable))
            }
            Rule::Optional(inner) | Rule::And(inner) | Rule::Not(inner) => walk(inner, nullable),
            Rule::Terminal { .. } | Rule::Reference(_) | Rule::Empty => true,
        }
    }

    for (name, def) in grammar.iter() {
        if !walk(&def.body, nullable) {
            return Err(GrammarError::NullableRepetition(name));
        }
    }
    Ok(())
}

/// Names a rule may invoke before it has consumed anything.
fn leading_references(rule: &Rule, nullable: &[bool], out: &mut Vec<RuleName>) {
    match rule {
        Rule::Reference(name) => out.push(*name),
        Rule::Sequence(items) => {
            for item in items {
                leading_references(item, nullable, out);
                if !is_nullable(item, nullable) {
                    break;
                }
            }
        }
        Rule::Choice(items) => {
            for item in items {
                leading_references(item, nullable, out);
            }
        }
        Rule::Optional(inner)
        | Rule::ZeroOrMore(inner)
        | Rule::OneOrMore(inner)
        | Rule::And(inner)
        | Rule::Not(inner) => leading_references(inner, nullable, out),
        Rule::Terminal { .. } | Rule::Empty => {}
    }
}

fn check_left_recursion(grammar: &Grammar, nullable: &[bool]) -> Result<(), GrammarError> {
    let edges: Vec<Vec<RuleName>> = RuleName::ALL
        .iter()
        .map(|&name| {
            let mut out = Vec::new();
            if let Some(def) = grammar.get(name) {
                leading_references(&def.body, nullable, &mut out);
            }
            out
        })
        .collect();

    let mut finished = FxHashSet::default();
    for &root in RuleName::ALL {
        let mut path = Vec::new();
        if let Some(cycle) = find_cycle(root, &edges, &mut path, &mut finished) {
            return Err(GrammarError::LeftRecursion(cycle));
        }
    }
    Ok(())
}

fn find_cycle(
    name: RuleName,
    edges: &[Vec<RuleName>],
    path: &mut Vec<RuleName>,
    finished: &mut FxHashSet<RuleName>,
) -> Option<Vec<RuleName>> {
    if let Some(start) = path.iter().position(|&n| n == name) {
        let mut cycle = path[start..].to_vec();
        cycle.push(name);
        return Some(cycle);
    }
    if finished.contains(&name) {
        return None;
    }
    path.push(name);
    for &next in &edges[name.index()] {
        if let Some(cycle) = find_cycle(next, edges, path, finished) {
            return Some(cycle);
        }
    }
    path.pop();
    finished.insert(name);
    None
}
