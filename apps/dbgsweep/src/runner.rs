//! Batch orchestration: gather files, scan them in parallel, fix in place.

use anyhow::Result;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

use dbgsweep_core::{FileOutcome, build_patterns, find_matches, remove_statements};

use crate::{config::Config, staged::staged_files, walker::collect_files};

pub struct RunResult {
    /// One outcome per scanned file, in traversal order.
    pub outcomes: Vec<FileOutcome>,
    pub files_scanned: usize,
}

pub fn run(cfg: &Config) -> Result<RunResult> {
    info!("Starting debug statement scan");

    let keep = cfg.keep_set()?;
    let patterns = build_patterns(&keep)?;
    let extensions = cfg.extensions();

    let files: Vec<PathBuf> = if cfg.staged {
        debug!("Listing git-staged files");
        staged_files(&extensions)
    } else {
        collect_files(&cfg.paths, &extensions)
    };
    let files_scanned = files.len();
    info!("Scanning {} files (fix: {})", files_scanned, cfg.fix);

    // Files are independent; scan them in parallel and collect outcomes in
    // input order.
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .filter_map(|path| {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    // Unreadable files are skipped, not fatal to the run.
                    debug!("Skipping {}: {}", path.display(), err);
                    return None;
                }
            };

            let display = path.display().to_string();
            let mut matches = find_matches(&content, &patterns);
            for m in &mut matches {
                m.file = display.clone();
            }

            let mut modified = false;
            if cfg.fix && !matches.is_empty() {
                // The rewrite is computed fully in memory before the file is
                // touched, so there is no partial-write hazard.
                let rewritten = remove_statements(&content, &patterns);
                match fs::write(path, &rewritten) {
                    Ok(()) => modified = true,
                    Err(err) => warn!("Failed to write {}: {}", display, err),
                }
            }

            Some(FileOutcome { file: display, matches, modified })
        })
        .collect();

    info!("Scan complete: {} outcomes", outcomes.len());
    Ok(RunResult { outcomes, files_scanned })
}
