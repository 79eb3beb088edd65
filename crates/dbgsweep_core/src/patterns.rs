//! Keep-aware pattern compilation.
//!
//! A [`PatternSet`] carries two regexes per statement family: a *probe* that
//! detects an occurrence (used by the scanner and the remover's line
//! classification) and a *strip* that consumes the statement together with a
//! best-effort single-line argument list and trailing `;` (used by the
//! remover to decide whether a line is pure debug payload).

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::types::{ConsoleMethod, KeepSet};

/// Compiled matchers for one scan. Immutable; rebuilding from a new
/// [`KeepSet`] is the only way to change what is detected.
pub struct PatternSet {
    /// `console.<method>(` over the vocabulary minus the keep set, with the
    /// method name in capture group 1. None when every method is kept: an
    /// empty alternation must be skipped, not matched against everything.
    pub(crate) console_probe: Option<Regex>,
    pub(crate) console_strip: Option<Regex>,
    /// Bare `debugger`, optional trailing `;`. Probe and strip coincide.
    pub(crate) debugger_probe: Regex,
    pub(crate) alert_probe: Regex,
    pub(crate) alert_strip: Regex,
}

impl PatternSet {
    /// Does any active matcher report an occurrence on this line?
    pub(crate) fn matches_line(&self, line: &str) -> bool {
        if let Some(probe) = &self.console_probe
            && probe.is_match(line)
        {
            return true;
        }
        self.debugger_probe.is_match(line) || self.alert_probe.is_match(line)
    }

    /// Strip every matched statement (with its single-line argument list and
    /// terminator, best effort) out of the line. Nested parentheses in an
    /// argument list are not handled here; the remover's whole-line policy
    /// covers the residue.
    pub(crate) fn strip_statements(&self, line: &str) -> String {
        let mut cleaned = line.to_string();
        if let Some(strip) = &self.console_strip {
            cleaned = strip.replace_all(&cleaned, "").into_owned();
        }
        cleaned = self.alert_strip.replace_all(&cleaned, "").into_owned();
        cleaned = self.debugger_probe.replace_all(&cleaned, "").into_owned();
        cleaned
    }
}

/// Compile the matcher set for everything *not* in `keep`.
///
/// An empty keep set yields the maximal matcher set; a keep set covering the
/// whole console vocabulary still matches `debugger` and `alert`.
pub fn build_patterns(keep: &KeepSet) -> Result<PatternSet> {
    let active: Vec<&str> = ConsoleMethod::ALL
        .iter()
        .copied()
        .filter(|m| !keep.contains(m))
        .map(|m| m.name())
        .collect();
    debug!(
        "Building pattern set: {} of {} console methods active",
        active.len(),
        ConsoleMethod::ALL.len()
    );

    let (console_probe, console_strip) = if active.is_empty() {
        debug!("All console methods kept; console matcher omitted");
        (None, None)
    } else {
        let alternation = active.join("|");
        let probe = Regex::new(&format!(r"\bconsole\s*\.\s*({alternation})\s*\("))
            .context("Failed to compile console probe pattern")?;
        let strip = Regex::new(&format!(r"\bconsole\s*\.\s*(?:{alternation})\s*\([^)]*\)\s*;?"))
            .context("Failed to compile console strip pattern")?;
        (Some(probe), Some(strip))
    };

    Ok(PatternSet {
        console_probe,
        console_strip,
        debugger_probe: Regex::new(r"\bdebugger\b\s*;?")
            .context("Failed to compile debugger pattern")?,
        alert_probe: Regex::new(r"\balert\s*\(").context("Failed to compile alert probe pattern")?,
        alert_strip: Regex::new(r"\balert\s*\([^)]*\)\s*;?")
            .context("Failed to compile alert strip pattern")?,
    })
}
