//! Packrat cache keyed by `(rule, token position)`.

use rustc_hash::FxHashMap;

use crate::grammar::RuleName;

/// Cached outcome of one rule at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Memo {
    /// The rule matched and stopped before token `end`.
    Success { end: u32 },
    /// The rule did not match.
    Failure,
}

/// Per-session memo table.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<(RuleName, u32), Memo>,
    hits: u64,
    misses: u64,
}

#[allow(clippy::cast_possible_truncation)]
fn key(rule: RuleName, pos: usize) -> (RuleName, u32) {
    (rule, pos as u32)
}

impl MemoTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached outcome, counting the hit or miss.
    pub fn get(&mut self, rule: RuleName, pos: usize) -> Option<Memo> {
        let found = self.entries.get(&key(rule, pos)).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Records the outcome of `rule` at `pos`.
    pub fn insert(&mut self, rule: RuleName, pos: usize, end: Option<usize>) {
        #[allow(clippy::cast_possible_truncation)]
        let memo = match end {
            Some(end) => Memo::Success { end: end as u32 },
            None => Memo::Failure,
        };
        self.entries.insert(key(rule, pos), memo);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to evaluate the rule.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut memo = MemoTable::new();
        assert_eq!(memo.get(RuleName::Type, 3), None);
        memo.insert(RuleName::Type, 3, Some(7));
        memo.insert(RuleName::Pattern, 3, None);
        assert_eq!(memo.get(RuleName::Type, 3), Some(Memo::Success { end: 7 }));
        assert_eq!(memo.get(RuleName::Pattern, 3), Some(Memo::Failure));
        assert_eq!(memo.get(RuleName::Type, 4), None);
        assert_eq!((memo.hits(), memo.misses()), (2, 2));
        assert_eq!(memo.len(), 2);

        memo.clear();
        assert!(memo.is_empty());
    }
}
