//! Identifier casing policy for class-name accessors.
//!
//! Stylesheet class names are commonly hyphenated (`btn-primary`) while JS
//! property accesses are commonly camelCased (`styles.btnPrimary`). The
//! casing policy decides which accessor spellings resolve to a declared
//! class, mirroring the `camelCase` option of css-loader.

/// Which accessor spellings of a declared class name are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CasingPolicy {
    /// Only the name exactly as declared.
    #[default]
    None,
    /// The declared name plus its camelCased form.
    CamelCaseAndOriginal,
    /// Only the camelCased form.
    CamelCaseOnly,
    /// Only the hyphenated (declared) form; camelCased access is rejected.
    HyphenatedOnly,
}

impl CasingPolicy {
    /// Accessor spellings under which `canonical` may be looked up.
    ///
    /// The returned keys are unique and ordered: the declared spelling
    /// first, then the camelCased one when the policy admits both.
    pub fn accessor_keys(self, canonical: &str) -> Vec<String> {
        match self {
            CasingPolicy::None | CasingPolicy::HyphenatedOnly => vec![canonical.to_string()],
            CasingPolicy::CamelCaseOnly => vec![camel_case(canonical)],
            CasingPolicy::CamelCaseAndOriginal => {
                let camel = camel_case(canonical);
                if camel == canonical {
                    vec![camel]
                } else {
                    vec![canonical.to_string(), camel]
                }
            }
        }
    }
}

/// Convert a hyphenated name to camelCase.
///
/// Hyphen-separated segments after the first are capitalized and
/// concatenated (`foo-bar` -> `fooBar`). Hyphens are the only separator
/// treated specially; underscores and dots pass through unchanged.
pub fn camel_case(name: &str) -> String {
    let mut segments = name.split('-');
    let mut out = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        out.push_str(first);
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
