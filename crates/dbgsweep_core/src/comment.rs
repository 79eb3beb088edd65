//! Commented-line classification shared by the scanner and the remover.

/// Returns true if the line is commented out and should be neither matched
/// nor rewritten.
///
/// Simple prefix heuristic: `//` for single-line comments, `/*` for block
/// comment openers, `*` for block comment continuation lines. There is no
/// cross-line block-comment state, so a live line starting with `*` is
/// misclassified, and the body of a block comment whose lines lack a
/// leading `*` is treated as live code. Both are accepted limitations.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}
