//! Directory traversal and extension filtering.

use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Conventional build/dependency directories never descended into, in
/// addition to the dot-prefixed rule below.
pub const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    "dist",
    "build",
    "out",
    "coverage",
    "vendor",
    "target",
];

/// Walk each root collecting files whose extension is in `extensions`,
/// skipping [`SKIP_DIRS`] and any dot-prefixed directory. The result is
/// sorted and de-duplicated so batch output is deterministic.
pub fn collect_files(roots: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in roots {
        debug!("Walking directory tree from {}", root.display());
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| {
                // Depth 0 is the root itself; never filter it out even when
                // the user points at something like "./.config".
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                if !is_dir {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !name.starts_with('.') && !SKIP_DIRS.contains(&name.as_ref())
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Failed to access entry: {}", err);
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && has_matching_extension(path, extensions) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    debug!("Collected {} files", files.len());
    files
}

pub fn has_matching_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|f| f == ext))
        .unwrap_or(false)
}
