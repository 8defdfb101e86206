//! Property-access resolution against a style binding.

use crate::core::registry::StyleBinding;

/// Outcome of resolving one property access on an import binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The object is not a registered stylesheet binding, or the binding
    /// produced no facts to check against. Not a finding.
    NotABinding,
    /// The accessor matched a declared class; carries the canonical name.
    ResolvedClass(String),
    /// The accessor matched an `:export` property.
    ResolvedExport,
    /// Neither the class map nor the export props contain the accessor:
    /// the undefined-class finding.
    UndefinedProperty,
}

/// Resolve `accessor` against `binding`, marking class usage on a match.
///
/// The access site's literal identifier is matched against the accessor
/// keys derived from declared names at build time; no casing transform is
/// applied to the access site itself. Classes win over exports when both
/// somehow contain the accessor. Marking usage is idempotent.
pub fn resolve_access(binding: &mut StyleBinding, accessor: &str) -> AccessOutcome {
    let canonical = binding.class_map.lookup(accessor).map(str::to_string);
    if let Some(canonical) = canonical {
        binding.usage.mark(&canonical);
        return AccessOutcome::ResolvedClass(canonical);
    }

    if binding.export_props.contains(accessor) {
        return AccessOutcome::ResolvedExport;
    }

    if binding.is_checkable() {
        AccessOutcome::UndefinedProperty
    } else {
        AccessOutcome::NotABinding
    }
}
