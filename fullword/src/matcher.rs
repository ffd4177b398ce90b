//! Ordered multi-token match
//!
//! The "all terms required, in order" core: every query token must be
//! satisfied by a distinct document token, and query tokens are consumed
//! in their left-to-right order.

/// True iff every query token is found among the document tokens in
/// non-decreasing position order.
///
/// Two cursors: the outer walks document tokens once; `next_i` marks the
/// first not-yet-consumed query token and never rewinds. Each document
/// token scans the remaining query tokens and consumes the first equal
/// one, so a document token satisfies at most one query token and each
/// query token is satisfied at most once. Query tokens skipped over by a
/// later match can never be satisfied afterwards, which is what enforces
/// ordering. Comparison is byte equality; both sides must already be
/// normalized.
///
/// O(documents × queries) worst case, both bounded by the configured
/// token limit.
pub(crate) fn tokens_match(doc_tokens: &[String], query_tokens: &[String]) -> bool {
    let mut next_i = 0;
    let mut matched = 0;

    for doc_word in doc_tokens {
        if next_i == query_tokens.len() {
            break;
        }
        for (i, query_word) in query_tokens.iter().enumerate().skip(next_i) {
            if query_word == doc_word {
                matched += 1;
                next_i = i + 1;
                break;
            }
        }
    }

    matched == query_tokens.len()
}
