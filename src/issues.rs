//! Issue types for check results.
//!
//! Each issue is self-contained: it carries the location to report at and
//! everything needed to render its message.

use crate::core::SourceContext;
use crate::utils::basename;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UndefClass,
    UnusedClass,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UndefClass => write!(f, "no-undef-class"),
            Rule::UnusedClass => write!(f, "no-unused-class"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// A property access that matches neither a declared class nor an
/// `:export` property of the imported stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefClassIssue {
    /// The access site; the column points at the property.
    pub context: SourceContext,
    /// The property name as written at the access site.
    pub property: String,
}

impl UndefClassIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UndefClass
    }

    pub fn message(&self) -> String {
        format!(
            "Class or exported property '{}' not found",
            self.property
        )
    }
}

/// Classes declared in a stylesheet but never referenced by the importing
/// file. One issue per import binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedClassIssue {
    /// The import declaration the stylesheet came in through.
    pub context: SourceContext,
    /// Path of the stylesheet, as resolved from the import specifier.
    pub stylesheet_path: String,
    /// Unused class names, in declaration order.
    pub classes: Vec<String>,
}

impl UnusedClassIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnusedClass
    }

    pub fn message(&self) -> String {
        format!(
            "Unused classes found in {}: {}",
            basename(&self.stylesheet_path),
            self.classes.join(", ")
        )
    }
}

/// A source file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }

    pub fn message(&self) -> String {
        self.error.clone()
    }
}

/// Any issue the check command can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UndefClass(UndefClassIssue),
    UnusedClass(UnusedClassIssue),
    ParseError(ParseErrorIssue),
}

/// Where an issue should be reported.
pub enum ReportLocation<'a> {
    Source(&'a SourceContext),
    File { path: &'a str },
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UndefClass(_) => UndefClassIssue::severity(),
            Issue::UnusedClass(_) => UnusedClassIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UndefClass(_) => UndefClassIssue::rule(),
            Issue::UnusedClass(_) => UnusedClassIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::UndefClass(issue) => issue.message(),
            Issue::UnusedClass(issue) => issue.message(),
            Issue::ParseError(issue) => issue.message(),
        }
    }

    pub fn location(&self) -> ReportLocation<'_> {
        match self {
            Issue::UndefClass(issue) => ReportLocation::Source(&issue.context),
            Issue::UnusedClass(issue) => ReportLocation::Source(&issue.context),
            Issue::ParseError(issue) => ReportLocation::File {
                path: &issue.file_path,
            },
        }
    }
}
