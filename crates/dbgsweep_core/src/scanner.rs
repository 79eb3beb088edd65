//! Line-by-line detection of debug statements.

use log::trace;

use crate::comment::is_comment_line;
use crate::patterns::PatternSet;
use crate::types::{ConsoleMethod, Match, StatementKind};

/// Scan `content` and return every occurrence in discovery order:
/// top-to-bottom, left-to-right within a line. Commented lines never
/// contribute matches. The `file` field is left empty for the caller.
pub fn find_matches(content: &str, patterns: &PatternSet) -> Vec<Match> {
    let mut matches = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if is_comment_line(line) {
            continue;
        }

        let mut line_matches: Vec<Match> = Vec::new();

        if let Some(probe) = &patterns.console_probe {
            for caps in probe.captures_iter(line) {
                let Some(whole) = caps.get(0) else { continue };
                // The probe's own grouping yields the method name; fall back
                // to console.log if extraction somehow fails.
                let kind = caps
                    .get(1)
                    .and_then(|m| ConsoleMethod::from_name(m.as_str()))
                    .map(StatementKind::Console)
                    .unwrap_or(StatementKind::Console(ConsoleMethod::Log));
                line_matches.push(make_match(idx, whole.start(), kind, line));
            }
        }

        for found in patterns.debugger_probe.find_iter(line) {
            line_matches.push(make_match(idx, found.start(), StatementKind::Debugger, line));
        }

        for found in patterns.alert_probe.find_iter(line) {
            line_matches.push(make_match(idx, found.start(), StatementKind::Alert, line));
        }

        if !line_matches.is_empty() {
            trace!("Line {}: {} occurrence(s)", idx + 1, line_matches.len());
            line_matches.sort_by_key(|m| m.column);
            matches.append(&mut line_matches);
        }
    }

    matches
}

fn make_match(line_idx: usize, start: usize, kind: StatementKind, line: &str) -> Match {
    Match {
        file: String::new(),
        line: line_idx + 1,
        column: start + 1,
        kind,
        text: line.trim().to_string(),
    }
}
