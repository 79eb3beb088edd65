use anyhow::{Result, bail};
use clap::Parser;
use dbgsweep_core::{ConsoleMethod, KeepSet, SOURCE_EXTENSIONS};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dbgsweep")]
#[command(version)]
#[command(about = "Find and optionally remove debug statements (console.*, debugger, alert) from source files")]
pub struct Config {
    /// Directories or files to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Remove the found statements in place
    #[arg(long, short)]
    pub fix: bool,

    /// Scan files staged in git instead of walking the paths
    #[arg(long)]
    pub staged: bool,

    /// Console methods to preserve, e.g. --keep error,warn
    #[arg(long, value_delimiter = ',', value_name = "METHOD")]
    pub keep: Vec<String>,

    /// File extensions to scan (defaults to the JS/TS set)
    #[arg(long = "ext", value_delimiter = ',', value_name = "EXT")]
    pub ext: Vec<String>,

    /// Emit a JSON report instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when any match is found
    #[arg(long)]
    pub ci: bool,
}

impl Config {
    /// Parse `--keep` names into a typed keep set. Names are case-sensitive
    /// and must belong to the console vocabulary; `debugger` and `alert`
    /// are not console methods and so can never be kept.
    pub fn keep_set(&self) -> Result<KeepSet> {
        let mut keep = KeepSet::new();
        for name in &self.keep {
            match ConsoleMethod::from_name(name) {
                Some(method) => {
                    keep.insert(method);
                }
                None => bail!(
                    "unknown console method '{}' (names are case-sensitive, e.g. timeEnd)",
                    name
                ),
            }
        }
        Ok(keep)
    }

    /// Extension filters, without leading dots, defaulting to the JS/TS set.
    pub fn extensions(&self) -> Vec<String> {
        if self.ext.is_empty() {
            SOURCE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.ext.iter().map(|e| e.trim_start_matches('.').to_string()).collect()
        }
    }
}
