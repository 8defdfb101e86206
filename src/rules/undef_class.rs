//! Undefined class access rule.
//!
//! Reports property accesses on a stylesheet import binding that match
//! neither a declared class nor an `:export` property, once per offending
//! access expression. Accesses on bindings without facts (missing or
//! unparsable stylesheet) never get here; the resolver already skipped
//! them.

use crate::core::FileStyleUsage;
use crate::issues::UndefClassIssue;

/// Collect undefined-access findings across all analyzed files.
pub fn check_undef_class(usages: &[FileStyleUsage]) -> Vec<UndefClassIssue> {
    let mut issues: Vec<UndefClassIssue> = usages
        .iter()
        .flat_map(|file| file.undefined_accesses.iter())
        .map(|access| UndefClassIssue {
            context: access.context.clone(),
            property: access.property.clone(),
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.property.cmp(&b.property))
    });

    issues
}
