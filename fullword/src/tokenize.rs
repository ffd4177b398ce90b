//! Splitting normalized text into word tokens

use crate::config::MatchConfig;
use crate::error::{Field, MatchError, MatchResult};

/// Split a normalized field on single spaces into its word tokens.
///
/// The normalizer guarantees no leading, trailing, or doubled spaces, so
/// every segment is non-empty and segments are separated by exactly one
/// space. An empty normalized string yields zero tokens, for documents
/// and queries alike. Fails with [`MatchError::TooManyTokens`]
/// when the split would exceed the configured token count.
pub(crate) fn tokenize(normalized: &str, config: &MatchConfig, field: Field) -> MatchResult<Vec<String>> {
    if normalized.is_empty() {
        return Ok(Vec::new());
    }

    let count = normalized.bytes().filter(|&b| b == b' ').count() + 1;
    if count > config.max_tokens {
        return Err(MatchError::TooManyTokens {
            field,
            count,
            limit: config.max_tokens,
        });
    }

    Ok(normalized.split(' ').map(str::to_owned).collect())
}
