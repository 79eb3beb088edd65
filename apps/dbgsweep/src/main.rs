use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

mod config;
mod reporter;
mod runner;
mod staged;
mod walker;

use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let result = runner::run(&cfg)?;
    let summary = dbgsweep_core::summarize(&result.outcomes);
    let elapsed_ms = start.elapsed().as_millis();

    if cfg.json {
        reporter::print_json(&mut stdout, &result.outcomes, &summary)?;
    } else {
        if summary.total_matches > 0 {
            reporter::print_matches(&mut stdout, &result.outcomes, &summary, cfg.fix)?;
        } else {
            reporter::print_clean_message(&mut stdout)?;
        }
        writeln!(
            stdout,
            "\n{} Finished in {}ms on {} files.",
            "●".bright_blue(),
            elapsed_ms.to_string().cyan(),
            result.files_scanned.to_string().cyan()
        )?;
    }
    stdout.flush()?;

    if cfg.ci && summary.total_matches > 0 {
        info!("{} debug statements found; failing in CI mode", summary.total_matches);
        // Non-zero exit to fail CI
        std::process::exit(1);
    }

    Ok(())
}
