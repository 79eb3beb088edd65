//! Batch aggregation over per-file outcomes.

use crate::types::{FileOutcome, Summary};

/// Combine per-file outcomes into batch totals. Pure function of the list.
pub fn summarize(outcomes: &[FileOutcome]) -> Summary {
    Summary {
        total_matches: outcomes.iter().map(|o| o.matches.len()).sum(),
        files_with_matches: outcomes.iter().filter(|o| !o.matches.is_empty()).count(),
        files_modified: outcomes.iter().filter(|o| o.modified).count(),
    }
}
