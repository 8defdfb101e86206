//! Typed lookup structures built from stylesheet facts.
//!
//! `ClassMap` answers "which declared class does this accessor spelling
//! refer to?"; `UsageSet` tracks which declared classes have been
//! referenced. Both are built once per stylesheet import and the class map
//! is read-only afterwards.

use std::collections::HashMap;

use crate::core::casing::CasingPolicy;

/// Accessor identifier -> canonical declared class name.
///
/// Under [`CasingPolicy::CamelCaseAndOriginal`] a single declared class may
/// be reachable under two keys. When two distinct declared classes collide
/// on an accessor key, the later declaration wins.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    entries: HashMap<String, String>,
}

impl ClassMap {
    /// Build the lookup table for `declared` names under `policy`.
    pub fn build(declared: &[String], policy: CasingPolicy) -> Self {
        let mut entries = HashMap::new();
        for canonical in declared {
            for key in policy.accessor_keys(canonical) {
                entries.insert(key, canonical.clone());
            }
        }
        Self { entries }
    }

    /// The canonical class name `accessor` refers to, if any.
    pub fn lookup(&self, accessor: &str) -> Option<&str> {
        self.entries.get(accessor).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Referenced flags for declared class names, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct UsageSet {
    order: Vec<String>,
    used: HashMap<String, bool>,
}

impl UsageSet {
    /// All flags start out false.
    pub fn from_declared(declared: &[String]) -> Self {
        Self {
            order: declared.to_vec(),
            used: declared.iter().map(|name| (name.clone(), false)).collect(),
        }
    }

    /// Mark `canonical` as referenced.
    ///
    /// Idempotent; names that were never declared are a no-op. Returns
    /// whether the name is tracked.
    pub fn mark(&mut self, canonical: &str) -> bool {
        match self.used.get_mut(canonical) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    /// Whether `canonical` has been marked referenced.
    pub fn is_used(&self, canonical: &str) -> bool {
        self.used.get(canonical).copied().unwrap_or(false)
    }

    /// Declared-but-never-referenced names, in declaration order.
    pub fn unused(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| !self.used[name.as_str()])
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::class_map::*;

    fn declared(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_class_map_identity_policy() {
        let map = ClassMap::build(&declared(&["foo", "foo-bar"]), CasingPolicy::None);
        assert_eq!(map.lookup("foo"), Some("foo"));
        assert_eq!(map.lookup("foo-bar"), Some("foo-bar"));
        assert_eq!(map.lookup("fooBar"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_class_map_camel_and_original() {
        let map = ClassMap::build(
            &declared(&["foo", "foo-bar"]),
            CasingPolicy::CamelCaseAndOriginal,
        );
        assert_eq!(map.lookup("foo"), Some("foo"));
        assert_eq!(map.lookup("foo-bar"), Some("foo-bar"));
        assert_eq!(map.lookup("fooBar"), Some("foo-bar"));
    }

    #[test]
    fn test_class_map_camel_only_rejects_hyphenated() {
        let map = ClassMap::build(&declared(&["foo-bar"]), CasingPolicy::CamelCaseOnly);
        assert_eq!(map.lookup("fooBar"), Some("foo-bar"));
        assert_eq!(map.lookup("foo-bar"), None);
    }

    #[test]
    fn test_class_map_collision_last_declaration_wins() {
        // Declared `foo-bar` and `fooBar` both map to the accessor `fooBar`
        // under CamelCaseAndOriginal. The later declaration owns the key.
        let map = ClassMap::build(
            &declared(&["foo-bar", "fooBar"]),
            CasingPolicy::CamelCaseAndOriginal,
        );
        assert_eq!(map.lookup("fooBar"), Some("fooBar"));
        assert_eq!(map.lookup("foo-bar"), Some("foo-bar"));
    }

    #[test]
    fn test_class_map_empty() {
        let map = ClassMap::build(&[], CasingPolicy::CamelCaseAndOriginal);
        assert!(map.is_empty());
        assert_eq!(map.lookup("anything"), None);
    }

    #[test]
    fn test_usage_set_starts_unused() {
        let usage = UsageSet::from_declared(&declared(&["a", "b"]));
        assert!(!usage.is_used("a"));
        assert!(!usage.is_used("b"));
        assert_eq!(usage.unused(), vec!["a", "b"]);
    }

    #[test]
    fn test_usage_set_mark_is_idempotent() {
        let mut usage = UsageSet::from_declared(&declared(&["a", "b"]));
        assert!(usage.mark("a"));
        assert!(usage.mark("a"));
        assert!(usage.is_used("a"));
        assert_eq!(usage.unused(), vec!["b"]);
    }

    #[test]
    fn test_usage_set_unknown_name_is_noop() {
        let mut usage = UsageSet::from_declared(&declared(&["a"]));
        assert!(!usage.mark("nope"));
        assert!(!usage.is_used("nope"));
        assert_eq!(usage.unused(), vec!["a"]);
    }

    #[test]
    fn test_usage_set_unused_keeps_declaration_order() {
        let mut usage = UsageSet::from_declared(&declared(&["zebra", "apple", "mango"]));
        usage.mark("apple");
        assert_eq!(usage.unused(), vec!["zebra", "mango"]);
    }
}
