//! Human and JSON rendering of scan results.

use std::io::{self, Write};

use colored::Colorize;
use log::debug;
use serde::Serialize;

use dbgsweep_core::{FileOutcome, Summary};

pub fn print_clean_message<W: Write>(writer: &mut W) -> io::Result<()> {
    debug!("No debug statements found");
    writeln!(writer, "{} No debug statements found.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

pub fn print_matches<W: Write>(
    writer: &mut W,
    outcomes: &[FileOutcome],
    summary: &Summary,
    fixed: bool,
) -> io::Result<()> {
    debug!("Printing report for {} files with matches", summary.files_with_matches);

    writeln!(writer, "{} Debug statements detected\n", "⚠".yellow().bold())?;

    for outcome in outcomes {
        if outcome.matches.is_empty() {
            continue;
        }

        let heading = if outcome.modified {
            format!("{} {}", outcome.file.blue(), "(fixed)".green())
        } else {
            outcome.file.blue().to_string()
        };
        writeln!(writer, "{}", heading)?;

        for (idx, m) in outcome.matches.iter().enumerate() {
            let is_last = idx == outcome.matches.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            writeln!(
                writer,
                "{}  {}  {}  {}",
                prefix.dimmed(),
                format!("{}:{}", m.line, m.column).cyan(),
                m.kind.to_string().yellow(),
                m.text.dimmed()
            )?;
        }

        writeln!(writer)?;
    }

    print_summary(writer, summary, fixed)?;
    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, summary: &Summary, fixed: bool) -> io::Result<()> {
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(
        writer,
        "  Total statements: {}",
        summary.total_matches.to_string().yellow().bold()
    )?;
    writeln!(
        writer,
        "  Files affected: {}",
        summary.files_with_matches.to_string().yellow().bold()
    )?;
    if fixed {
        writeln!(writer, "  Files fixed: {}", summary.files_modified.to_string().green().bold())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileOutcome],
    summary: &'a Summary,
}

pub fn print_json<W: Write>(
    writer: &mut W,
    outcomes: &[FileOutcome],
    summary: &Summary,
) -> io::Result<()> {
    debug!("Emitting JSON report");
    let report = JsonReport { files: outcomes, summary };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
