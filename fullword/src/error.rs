//! Error types for match operations

use std::fmt;
use thiserror::Error;

/// Which side of a match call a limit violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The per-row column value being filtered.
    Document,
    /// The search phrase, constant across a scan.
    Query,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Document => write!(f, "document"),
            Field::Query => write!(f, "query"),
        }
    }
}

/// Error type for match operations.
///
/// Both variants name the offending side and the configured limit.
/// Neither is recovered internally: the current call aborts and the
/// query cache is left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("{field} length {len} exceeds limit of {limit} bytes")]
    FieldTooLong { field: Field, len: usize, limit: usize },
    #[error("{field} token count {count} exceeds limit of {limit}")]
    TooManyTokens { field: Field, count: usize, limit: usize },
}

pub type MatchResult<T> = Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_side() {
        let e = MatchError::FieldTooLong { field: Field::Document, len: 501, limit: 500 };
        assert_eq!(e.to_string(), "document length 501 exceeds limit of 500 bytes");

        let e = MatchError::TooManyTokens { field: Field::Query, count: 81, limit: 80 };
        assert_eq!(e.to_string(), "query token count 81 exceeds limit of 80");
    }
}
