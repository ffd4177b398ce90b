//! Fullword - ordered full-word match filtering for table scans
//!
//! Approximates `MATCH( column ) AGAINST( value ) IN BOOLEAN MODE` for
//! row-by-row filtering: a document matches when every query word occurs
//! in it, in the query's order, case-insensitively, with punctuation
//! normalized away. Built for the scan access pattern where one query is
//! evaluated against many consecutive rows: the query's derived tokens
//! are memoized in a single-slot cache so only the document side is
//! reprocessed per row.

mod cache;
pub mod config;
pub mod error;
mod engine;
mod matcher;
mod normalize;
mod tokenize;

pub use cache::CacheStats;
pub use config::MatchConfig;
pub use engine::{matches, FieldMatcher};
pub use error::{Field, MatchError, MatchResult};
