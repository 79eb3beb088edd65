//! Core engine for the dbgsweep tools.
//!
//! This crate provides the pure detection-and-removal logic for debug
//! statements (`console.*` calls, `debugger`, `alert`) in JavaScript and
//! TypeScript source text:
//! - Building keep-aware pattern sets
//! - Scanning file contents for matches with line/column positions
//! - Rewriting contents with matched statements deleted, including calls
//!   whose argument lists span multiple lines
//! - Aggregating per-file outcomes into batch totals
//!
//! The crate never performs I/O; callers hand it file contents as strings
//! and write rewritten contents back themselves.

mod comment;
mod constants;
mod patterns;
mod remover;
mod scanner;
mod summary;
mod types;

// Re-export public API
pub use comment::is_comment_line;
pub use constants::SOURCE_EXTENSIONS;
pub use patterns::{PatternSet, build_patterns};
pub use remover::remove_statements;
pub use scanner::find_matches;
pub use summary::summarize;
pub use types::{ConsoleMethod, FileOutcome, KeepSet, Match, StatementKind, Summary};
