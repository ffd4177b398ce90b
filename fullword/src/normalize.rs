//! Text normalization for matching
//!
//! Canonical form: ASCII-lowercased, ignore characters deleted, break
//! characters and whitespace runs collapsed to single interior spaces,
//! no leading or trailing space. Tokenization then only ever splits on
//! single spaces.

use crate::config::MatchConfig;
use crate::error::{Field, MatchError, MatchResult};

/// Normalize a raw field into canonical space-separated lowercase form.
///
/// Single left-to-right pass. Fails with [`MatchError::FieldTooLong`]
/// when the input exceeds the configured byte-length limit; input at
/// exactly the limit is accepted.
pub(crate) fn normalize(raw: &str, config: &MatchConfig, field: Field) -> MatchResult<String> {
    if raw.len() > config.max_field_len {
        return Err(MatchError::FieldTooLong {
            field,
            len: raw.len(),
            limit: config.max_field_len,
        });
    }

    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        let mut c = ch.to_ascii_lowercase();
        if config.is_ignore(c) {
            continue;
        }
        if c.is_ascii_whitespace() || config.is_break(c) {
            c = ' ';
        }
        // Suppress leading spaces, collapse interior runs to one.
        if c == ' ' && (out.is_empty() || out.ends_with(' ')) {
            continue;
        }
        out.push(c);
    }
    // Trailing separators collapse down to a single residual space.
    if out.ends_with(' ') {
        out.pop();
    }

    Ok(out)
}
