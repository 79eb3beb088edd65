use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// The console methods the scanner knows about. Matching is case-sensitive
/// and limited to this vocabulary; anything else on `console` is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Log,
    Debug,
    Info,
    Warn,
    Error,
    Trace,
    Table,
    Dir,
    Time,
    TimeEnd,
    TimeLog,
    Count,
    CountReset,
    Group,
    GroupEnd,
    GroupCollapsed,
    Clear,
    Assert,
    Profile,
    ProfileEnd,
}

impl ConsoleMethod {
    pub const ALL: [ConsoleMethod; 20] = [
        ConsoleMethod::Log,
        ConsoleMethod::Debug,
        ConsoleMethod::Info,
        ConsoleMethod::Warn,
        ConsoleMethod::Error,
        ConsoleMethod::Trace,
        ConsoleMethod::Table,
        ConsoleMethod::Dir,
        ConsoleMethod::Time,
        ConsoleMethod::TimeEnd,
        ConsoleMethod::TimeLog,
        ConsoleMethod::Count,
        ConsoleMethod::CountReset,
        ConsoleMethod::Group,
        ConsoleMethod::GroupEnd,
        ConsoleMethod::GroupCollapsed,
        ConsoleMethod::Clear,
        ConsoleMethod::Assert,
        ConsoleMethod::Profile,
        ConsoleMethod::ProfileEnd,
    ];

    /// The method name as it appears in source (`timeEnd`, not `TimeEnd`).
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleMethod::Log => "log",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
            ConsoleMethod::Trace => "trace",
            ConsoleMethod::Table => "table",
            ConsoleMethod::Dir => "dir",
            ConsoleMethod::Time => "time",
            ConsoleMethod::TimeEnd => "timeEnd",
            ConsoleMethod::TimeLog => "timeLog",
            ConsoleMethod::Count => "count",
            ConsoleMethod::CountReset => "countReset",
            ConsoleMethod::Group => "group",
            ConsoleMethod::GroupEnd => "groupEnd",
            ConsoleMethod::GroupCollapsed => "groupCollapsed",
            ConsoleMethod::Clear => "clear",
            ConsoleMethod::Assert => "assert",
            ConsoleMethod::Profile => "profile",
            ConsoleMethod::ProfileEnd => "profileEnd",
        }
    }

    pub fn from_name(name: &str) -> Option<ConsoleMethod> {
        ConsoleMethod::ALL.iter().copied().find(|m| m.name() == name)
    }
}

/// Console methods the user wants preserved. `debugger` and `alert` are not
/// representable here, so they can never be kept.
pub type KeepSet = HashSet<ConsoleMethod>;

/// What a single occurrence was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Console(ConsoleMethod),
    Debugger,
    Alert,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Console(m) => write!(f, "console.{}", m.name()),
            StatementKind::Debugger => write!(f, "debugger"),
            StatementKind::Alert => write!(f, "alert"),
        }
    }
}

impl Serialize for StatementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One detected debug statement.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    /// Path of the file the match came from; the scanner leaves this empty
    /// and the caller fills it in.
    pub file: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based byte offset of the match start within the line
    pub column: usize,
    pub kind: StatementKind,
    /// The matched line, trimmed
    pub text: String,
}

/// Scan/fix result for one file. Matches are in discovery order:
/// top-to-bottom, left-to-right within a line.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file: String,
    pub matches: Vec<Match>,
    pub modified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_matches: usize,
    pub files_with_matches: usize,
    pub files_modified: usize,
}
