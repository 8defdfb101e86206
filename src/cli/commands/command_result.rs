use crate::cli::report::compare_issues;
use crate::issues::{Issue, Severity};

/// Result of running the check command.
pub struct CommandResult {
    /// Number of error-severity issues; drives the exit status.
    pub error_count: usize,
    /// All issues found, sorted for display.
    pub issues: Vec<Issue>,
    /// Number of source files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
}

pub fn finish(mut issues: Vec<Issue>, source_files_checked: usize) -> CommandResult {
    issues.sort_by(compare_issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    CommandResult {
        error_count,
        issues,
        parse_error_count,
        source_files_checked,
    }
}
