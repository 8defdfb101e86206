//! Unused class detection rule.
//!
//! For every stylesheet import binding, reports the declared classes that
//! were never accessed: one issue per binding, attached to its import
//! declaration, listing the classes in declaration order.
//!
//! `mark_as_used` names count as referenced in every binding; names that a
//! binding never declared are simply no-ops for it.

use crate::core::FileStyleUsage;
use crate::issues::UnusedClassIssue;

/// Collect unused-class findings across all analyzed files.
pub fn check_unused_class(
    usages: &[FileStyleUsage],
    mark_as_used: &[String],
) -> Vec<UnusedClassIssue> {
    let mut issues = Vec::new();

    for file in usages {
        for binding in file.registry.bindings() {
            let unused: Vec<String> = binding
                .usage
                .unused()
                .into_iter()
                .filter(|name| !mark_as_used.iter().any(|used| used == name))
                .map(str::to_string)
                .collect();

            if !unused.is_empty() {
                issues.push(UnusedClassIssue {
                    context: binding.import_context.clone(),
                    stylesheet_path: binding.stylesheet_path.to_string_lossy().into_owned(),
                    classes: unused,
                });
            }
        }
    }

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.stylesheet_path.cmp(&b.stylesheet_path))
    });

    issues
}
