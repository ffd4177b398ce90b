//! Single-slot query cache
//!
//! A search scans many rows with the same query string, so the query's
//! derived tokens are memoized under a last-query-wins policy keyed by
//! raw-string equality. The cache only ever affects performance: a hit
//! returns exactly what recomputation would.

use crate::config::MatchConfig;
use crate::error::{Field, MatchResult};
use crate::normalize::normalize;
use crate::tokenize::tokenize;

/// Hit/miss counters for a [`FieldMatcher`](crate::FieldMatcher)'s
/// query cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
struct CachedQuery {
    raw: String,
    tokens: Vec<String>,
}

/// Memo of the most recently tokenized query.
#[derive(Debug, Default)]
pub(crate) struct QueryCache {
    slot: Option<CachedQuery>,
    stats: CacheStats,
}

impl QueryCache {
    /// Tokens for `query`, recomputed only when the raw string differs
    /// from the cached one.
    ///
    /// The slot is replaced after normalization and tokenization both
    /// succeed, so a failing query leaves the previous entry intact.
    pub(crate) fn tokens_for(&mut self, query: &str, config: &MatchConfig) -> MatchResult<&[String]> {
        if matches!(&self.slot, Some(cached) if cached.raw == query) {
            self.stats.hits += 1;
            return Ok(&self.slot.as_ref().unwrap().tokens);
        }
        let normalized = normalize(query, config, Field::Query)?;
        let tokens = tokenize(&normalized, config, Field::Query)?;
        self.stats.misses += 1;
        let entry = self.slot.insert(CachedQuery { raw: query.to_owned(), tokens });
        Ok(&entry.tokens)
    }

    pub(crate) fn stats(&self) -> CacheStats {
        self.stats
    }
}
