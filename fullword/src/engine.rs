//! Match engine: configuration plus query cache behind one call surface
//!
//! [`FieldMatcher`] is the injectable unit: one instance per scan session
//! evaluates `matches(document, query)` row by row, reusing its cached
//! query tokens across the scan. The cache is mutex-guarded so a shared
//! instance stays safe, but the single slot assumes one logical query at
//! a time; concurrent scans with different queries should use separate
//! instances.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::cache::{CacheStats, QueryCache};
use crate::config::MatchConfig;
use crate::error::{Field, MatchResult};
use crate::matcher::tokens_match;
use crate::normalize::normalize;
use crate::tokenize::tokenize;

/// Process-wide engine with default limits, backing the free [`matches`]
/// function. Never dropped.
static DEFAULT_ENGINE: Lazy<FieldMatcher> = Lazy::new(FieldMatcher::default);

/// Row-filter match engine.
#[derive(Debug, Default)]
pub struct FieldMatcher {
    config: MatchConfig,
    cache: Mutex<QueryCache>,
}

impl FieldMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            cache: Mutex::new(QueryCache::default()),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Test whether `document` contains every word of `query`, in order.
    ///
    /// A `None` document (a row with no data in the column) is `false`
    /// without validating either side. Limit violations identify the
    /// offending side; a query-side error leaves the cached entry
    /// unchanged.
    pub fn matches(&self, document: Option<&str>, query: &str) -> MatchResult<bool> {
        let Some(document) = document else {
            return Ok(false);
        };

        let normalized = normalize(document, &self.config, Field::Document)?;
        let doc_tokens = tokenize(&normalized, &self.config, Field::Document)?;

        let mut cache = self.cache.lock();
        let query_tokens = cache.tokens_for(query, &self.config)?;

        Ok(tokens_match(&doc_tokens, query_tokens))
    }

    /// Indices of the rows matching `query`, in row order.
    ///
    /// The scan access pattern in one call: the query is tokenized once
    /// and each row is normalized, tokenized and matched independently.
    /// The first limit violation aborts the scan.
    pub fn filter_indices<'a, I>(&self, rows: I, query: &str) -> MatchResult<Vec<usize>>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        let mut matching = Vec::new();
        for (idx, row) in rows.into_iter().enumerate() {
            if self.matches(row, query)? {
                matching.push(idx);
            }
        }

        #[cfg(feature = "perf-log")]
        {
            let stats = self.cache_stats();
            eprintln!(
                "[perf] scan={:.1}ms matched={} cache_hits={} cache_misses={}",
                t0.elapsed().as_secs_f64() * 1000.0,
                matching.len(),
                stats.hits,
                stats.misses,
            );
        }

        Ok(matching)
    }

    /// Hit/miss counters for this engine's query cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }
}

/// Match against the process-wide default engine.
///
/// For embedders that install the match test as a bare per-row predicate
/// without threading an engine instance through. All callers share one
/// cache slot, so interleaving different queries from multiple threads
/// forfeits the amortization (but stays correct).
pub fn matches(document: Option<&str>, query: &str) -> MatchResult<bool> {
    DEFAULT_ENGINE.matches(document, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;

    #[test]
    fn absent_document_is_false_not_an_error() {
        let engine = FieldMatcher::default();
        assert_eq!(engine.matches(None, "anything"), Ok(false));
        // Not even an oversize query is validated when the document is absent.
        let over = "x".repeat(engine.config().max_field_len + 1);
        assert_eq!(engine.matches(None, &over), Ok(false));
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let engine = FieldMatcher::default();
        assert_eq!(engine.matches(Some("Rock AND Roll"), "rock roll"), Ok(true));
        assert_eq!(engine.matches(Some("rock and roll"), "ROCK ROLL"), Ok(true));
    }

    #[test]
    fn break_chars_separate_like_spaces() {
        let engine = FieldMatcher::default();
        assert_eq!(engine.matches(Some("A/B_C,D.E"), "a b c d e"), Ok(true));
    }

    #[test]
    fn document_errors_name_the_document_side() {
        let engine = FieldMatcher::default();
        let over = "x".repeat(engine.config().max_field_len + 1);
        let err = engine.matches(Some(&over), "query").unwrap_err();
        assert!(matches!(err, MatchError::FieldTooLong { field: Field::Document, .. }));
    }

    #[test]
    fn query_errors_name_the_query_side_and_spare_the_cache() {
        let engine = FieldMatcher::default();
        assert_eq!(engine.matches(Some("Kind of Blue"), "blue"), Ok(true));

        let over = "x".repeat(engine.config().max_field_len + 1);
        let err = engine.matches(Some("Kind of Blue"), &over).unwrap_err();
        assert!(matches!(err, MatchError::FieldTooLong { field: Field::Query, .. }));

        // The earlier query is still cached.
        assert_eq!(engine.matches(Some("Kind of Blue"), "blue"), Ok(true));
        assert_eq!(engine.cache_stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn scan_reuses_cached_query_tokens() {
        let engine = FieldMatcher::default();
        let rows = [
            Some("Miles Davis - Kind of Blue"),
            Some("Kind of Blue"),
            None,
            Some("Agua De Beber (Water To Drink)"),
            Some("Blue Miles"),
        ];

        let hits = engine.filter_indices(rows, "miles blue").unwrap();
        assert_eq!(hits, [0]);

        // One miss for the query, then hits for every non-absent row.
        assert_eq!(engine.cache_stats(), CacheStats { hits: 3, misses: 1 });
    }

    #[test]
    fn empty_query_matches_every_present_row() {
        let engine = FieldMatcher::default();
        assert_eq!(engine.matches(Some("anything at all"), ""), Ok(true));
        assert_eq!(engine.matches(Some("anything at all"), "?!"), Ok(true));
        assert_eq!(engine.matches(None, ""), Ok(false));
    }

    #[test]
    fn all_separator_document_matches_only_empty_query() {
        let engine = FieldMatcher::default();
        assert_eq!(engine.matches(Some("-_/,."), ""), Ok(true));
        assert_eq!(engine.matches(Some("-_/,."), "word"), Ok(false));
    }

    #[test]
    fn module_level_matches_uses_shared_engine() {
        assert_eq!(super::matches(Some("Say What?!"), "say what"), Ok(true));
        assert_eq!(super::matches(None, "say what"), Ok(false));
    }

    #[test]
    fn custom_separator_sets_are_honored() {
        let config = MatchConfig {
            ignore_chars: "'".to_string(),
            break_chars: ":".to_string(),
            ..MatchConfig::default()
        };
        let engine = FieldMatcher::new(config);

        // Apostrophe deleted, colon breaks; dash is now a token character.
        assert_eq!(engine.matches(Some("Ain't No Sunshine: Live"), "aint live"), Ok(true));
        assert_eq!(engine.matches(Some("twenty-one"), "twenty one"), Ok(false));
        assert_eq!(engine.matches(Some("twenty-one"), "twenty-one"), Ok(true));
    }
}
