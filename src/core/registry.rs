//! Per-file registry of stylesheet import bindings.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::core::class_map::{ClassMap, UsageSet};
use crate::core::data::SourceContext;
use crate::core::resolve::{self, AccessOutcome};
use crate::core::stylesheet::FactsUnavailable;

/// One stylesheet import binding (`import s from './button.css'`).
#[derive(Debug, Clone)]
pub struct StyleBinding {
    /// Local identifier the stylesheet module is bound to.
    pub local_name: String,
    /// Path the import specifier resolved to. The file is not guaranteed to
    /// exist; see `unavailable`.
    pub stylesheet_path: PathBuf,
    /// Accessor identifier -> canonical class lookup.
    pub class_map: ClassMap,
    /// `:export` property names. Existence is all that matters; exports
    /// never take part in unused accounting.
    pub export_props: HashSet<String>,
    /// Referenced flags for declared classes, in declaration order.
    pub usage: UsageSet,
    /// Import declaration site, where unused-class findings attach.
    pub import_context: SourceContext,
    /// Set when no facts could be extracted for the stylesheet.
    pub unavailable: Option<FactsUnavailable>,
}

impl StyleBinding {
    /// A binding can be checked when it carries at least one class or
    /// export fact. Accesses on an uncheckable binding are skipped: absence
    /// cannot be asserted against a stylesheet that produced no facts.
    pub fn is_checkable(&self) -> bool {
        !self.class_map.is_empty() || !self.export_props.is_empty()
    }
}

/// All style bindings of one source file, keyed by local import name.
///
/// Constructed at the start of a file's pass and discarded with it; nothing
/// is shared across files. A later import re-using a local name replaces
/// the earlier binding, matching lexical shadowing.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    order: Vec<String>,
    bindings: HashMap<String, StyleBinding>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, binding: StyleBinding) {
        if !self.bindings.contains_key(&binding.local_name) {
            self.order.push(binding.local_name.clone());
        }
        self.bindings.insert(binding.local_name.clone(), binding);
    }

    pub fn lookup(&self, local_name: &str) -> Option<&StyleBinding> {
        self.bindings.get(local_name)
    }

    /// Bindings in first-registration order.
    pub fn bindings(&self) -> impl Iterator<Item = &StyleBinding> {
        self.order.iter().filter_map(|name| self.bindings.get(name))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolve one property access against the binding registered under
    /// `local_name`, marking class usage on a match.
    pub fn resolve_access(&mut self, local_name: &str, accessor: &str) -> AccessOutcome {
        match self.bindings.get_mut(local_name) {
            Some(binding) => resolve::resolve_access(binding, accessor),
            None => AccessOutcome::NotABinding,
        }
    }
}
