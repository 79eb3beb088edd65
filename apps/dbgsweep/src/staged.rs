//! Git interop: listing staged files for pre-commit use.

use log::debug;
use std::path::PathBuf;
use std::process::Command;

use crate::walker::has_matching_extension;

/// Files currently staged in git, filtered by extension.
///
/// Any failure — git missing, not a repository, command error — degrades to
/// an empty list rather than an error, so the hook never blocks on a broken
/// environment.
pub fn staged_files(extensions: &[String]) -> Vec<PathBuf> {
    let output = Command::new("git")
        .arg("diff")
        .arg("--cached")
        .arg("--name-only")
        .arg("--diff-filter=ACMR")
        .output();

    let output = match output {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!("git diff --cached exited with {}", output.status);
            return Vec::new();
        }
        Err(err) => {
            debug!("Failed to run git: {}", err);
            return Vec::new();
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut files = Vec::new();
    for line in stdout.lines() {
        if line.is_empty() {
            continue;
        }
        let path = PathBuf::from(line);
        // Staged paths can refer to files renamed away in the working tree;
        // only keep ones that still exist.
        if has_matching_extension(&path, extensions) && path.is_file() {
            files.push(path);
        }
    }
    debug!("Found {} staged files matching extension filters", files.len());
    files
}
