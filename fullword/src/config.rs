//! Match engine configuration
//!
//! Field-length and token-count limits plus the two separator sets.
//! Defaults carry a comfortable margin over the longest real-world rows
//! observed; oversize input is rejected, never truncated.

use serde::{Deserialize, Serialize};

/// Maximum byte length accepted for a document or query string.
pub const DEFAULT_MAX_FIELD_LEN: usize = 500;

/// Maximum token count accepted per field after normalization.
pub const DEFAULT_MAX_TOKENS: usize = 80;

/// Characters deleted outright: they contribute neither a token
/// character nor a separator.
pub const DEFAULT_IGNORE_CHARS: &str = "\"!?()";

/// Characters that separate tokens, equivalent to whitespace.
pub const DEFAULT_BREAK_CHARS: &str = "_-/,.";

/// Limits and separator sets for one [`FieldMatcher`](crate::FieldMatcher).
///
/// Deserializable so an embedding application can load overrides from its
/// own config file; absent keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum byte length for either field.
    pub max_field_len: usize,
    /// Maximum token count for either field after normalization.
    pub max_tokens: usize,
    /// Characters dropped from the input entirely.
    pub ignore_chars: String,
    /// Characters converted to a space before tokenization.
    pub break_chars: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_tokens: DEFAULT_MAX_TOKENS,
            ignore_chars: DEFAULT_IGNORE_CHARS.to_string(),
            break_chars: DEFAULT_BREAK_CHARS.to_string(),
        }
    }
}

impl MatchConfig {
    pub(crate) fn is_ignore(&self, c: char) -> bool {
        self.ignore_chars.contains(c)
    }

    pub(crate) fn is_break(&self, c: char) -> bool {
        self.break_chars.contains(c)
    }
}
