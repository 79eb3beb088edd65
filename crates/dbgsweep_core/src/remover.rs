//! Line-level deletion of matched statements.
//!
//! Removal is monotonic: a line is either dropped whole or kept untouched.
//! A matched line is always dropped; when its call's argument list is left
//! unbalanced, consumption extends across the following lines until the
//! parenthesis balance closes (or input ends, for malformed source). The
//! rewrite is idempotent and has no error path.

use log::trace;

use crate::comment::is_comment_line;
use crate::patterns::PatternSet;

/// Per-line scan state. Consumption depth is the running count of
/// unmatched opening parentheses.
#[derive(Debug, Clone, Copy)]
enum State {
    Scanning,
    Consuming { depth: i32 },
    /// The consumed statement just closed; the next line is dropped too if
    /// it is the call's terminator stranded on its own line (exactly `;`).
    AfterConsume,
}

/// Rewrite `content` with every statement matched by `patterns` deleted.
pub fn remove_statements(content: &str, patterns: &PatternSet) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut state = State::Scanning;

    for line in content.lines() {
        match state {
            State::Consuming { depth } => {
                let depth = depth + paren_delta(line);
                trace!("Consuming continuation line, depth now {}", depth);
                state = if depth <= 0 { State::AfterConsume } else { State::Consuming { depth } };
                continue;
            }
            State::AfterConsume => {
                state = State::Scanning;
                if line.trim() == ";" {
                    continue;
                }
            }
            State::Scanning => {}
        }

        if is_comment_line(line) {
            kept.push(line);
            continue;
        }

        let trimmed = line.trim();
        if !patterns.matches_line(trimmed) {
            kept.push(line);
            continue;
        }

        // Matched lines are always dropped; the only question is whether the
        // statement continues onto the following lines.
        let cleaned = patterns.strip_statements(trimmed);
        if cleaned.trim().is_empty() {
            // Pure debug-statement payload.
            continue;
        }
        let delta = paren_delta(line);
        if delta > 0 {
            trace!("Statement opens a multi-line argument list (depth {})", delta);
            state = State::Consuming { depth: delta };
        }
        // Balanced but still matching: the line mixes a debug statement with
        // other code. Dropped wholesale rather than surgically edited, so a
        // regex-only rewrite cannot produce syntactically broken output.
    }

    assemble(content, &kept)
}

/// Opening minus closing parentheses on the line. String and comment
/// contents are counted too; that imprecision is accepted.
fn paren_delta(line: &str) -> i32 {
    let mut delta = 0;
    for c in line.chars() {
        match c {
            '(' => delta += 1,
            ')' => delta -= 1,
            _ => {}
        }
    }
    delta
}

/// Collapse blank-line runs left by deletions and restore the input's
/// trailing newline when anything survived.
fn assemble(content: &str, kept: &[&str]) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(kept.len());
    let mut prev_blank = false;
    for line in kept {
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        out.push(line);
        prev_blank = blank;
    }

    let mut result = out.join("\n");
    if !result.is_empty() && content.ends_with('\n') {
        result.push('\n');
    }
    result
}
