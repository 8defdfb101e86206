//! Stylesheet fact extraction.
//!
//! Parses a stylesheet and produces the only facts the checker needs: the
//! ordered set of declared class names, and the property names of a
//! top-level `:export` block (CSS Modules ICSS exports). Nothing else about
//! the stylesheet is modeled.
//!
//! A stylesheet that is missing, unreadable, or unparsable yields
//! [`FactsUnavailable`] instead of an error. Checking is then skipped for
//! that import rather than producing findings against facts we don't have.
//! SCSS and LESS sources are parsed with the same recovering CSS grammar;
//! rules using dialect-only syntax are dropped by error recovery and simply
//! contribute no facts.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use lightningcss::rules::{CssRule, CssRuleList};
use lightningcss::rules::style::StyleRule;
use lightningcss::selector::{Component, PseudoClass};
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use serde::{Deserialize, Serialize};

/// Stylesheet dialect of an import, from the `syntax` option or the file
/// extension. All dialects currently go through the recovering CSS parser;
/// the distinction is kept for option compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetSyntax {
    Css,
    Scss,
    Less,
}

impl StylesheetSyntax {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("css") => Some(StylesheetSyntax::Css),
            Some("scss") => Some(StylesheetSyntax::Scss),
            Some("less") => Some(StylesheetSyntax::Less),
            _ => None,
        }
    }
}

/// Facts extracted from one stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetFacts {
    /// Declared class names, deduplicated, in declaration order.
    pub classes: Vec<String>,
    /// Property names of the top-level `:export` block, in declaration
    /// order. Empty when the stylesheet has no `:export` block.
    pub export_props: Vec<String>,
}

/// Why no facts could be extracted for a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactsUnavailable {
    /// The import specifier did not resolve to an existing file.
    FileNotFound,
    /// The file exists but could not be read.
    Unreadable,
    /// The contents could not be parsed even with error recovery.
    Unparsable,
}

/// Outcome of fact extraction for one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Facts(StylesheetFacts),
    Unavailable(FactsUnavailable),
}

/// Extract facts from the stylesheet at `path`.
///
/// Never fails: every failure mode collapses into
/// [`ExtractOutcome::Unavailable`].
pub fn extract_facts(path: &Path, _syntax: StylesheetSyntax) -> ExtractOutcome {
    if !path.is_file() {
        return ExtractOutcome::Unavailable(FactsUnavailable::FileNotFound);
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => return ExtractOutcome::Unavailable(FactsUnavailable::Unreadable),
    };

    match extract_from_source(&source, &path.to_string_lossy()) {
        Some(facts) => ExtractOutcome::Facts(facts),
        None => ExtractOutcome::Unavailable(FactsUnavailable::Unparsable),
    }
}

/// Extract facts from stylesheet source text. `None` when even the
/// recovering parser gives up on the input.
pub fn extract_from_source(source: &str, filename: &str) -> Option<StylesheetFacts> {
    let stylesheet = StyleSheet::parse(
        source,
        ParserOptions {
            filename: filename.to_string(),
            error_recovery: true,
            ..ParserOptions::default()
        },
    )
    .ok()?;

    let mut facts = StylesheetFacts::default();
    let mut seen = HashSet::new();
    collect_rules(&stylesheet.rules, true, &mut facts, &mut seen);
    Some(facts)
}

fn collect_rules<'i, R>(
    rules: &CssRuleList<'i, R>,
    top_level: bool,
    facts: &mut StylesheetFacts,
    seen: &mut HashSet<String>,
) {
    for rule in &rules.0 {
        match rule {
            CssRule::Style(style) => {
                if top_level && is_export_rule(style) {
                    collect_export_props(style, facts);
                    continue;
                }
                collect_class_selectors(style, facts, seen);
                collect_rules(&style.rules, false, facts, seen);
            }
            CssRule::Media(media) => collect_rules(&media.rules, false, facts, seen),
            CssRule::Supports(supports) => collect_rules(&supports.rules, false, facts, seen),
            CssRule::Container(container) => collect_rules(&container.rules, false, facts, seen),
            CssRule::LayerBlock(layer) => collect_rules(&layer.rules, false, facts, seen),
            _ => {}
        }
    }
}

fn collect_class_selectors<'i, R>(
    style: &StyleRule<'i, R>,
    facts: &mut StylesheetFacts,
    seen: &mut HashSet<String>,
) {
    for selector in &style.selectors.0 {
        for component in selector.iter_raw_match_order() {
            if let Component::Class(name) = component {
                let class = name.0.to_string();
                if seen.insert(class.clone()) {
                    facts.classes.push(class);
                }
            }
        }
    }
}

/// A rule is the ICSS export block when its only selector is the bare
/// `:export` pseudo-class.
fn is_export_rule<'i, R>(style: &StyleRule<'i, R>) -> bool {
    if style.selectors.0.len() != 1 {
        return false;
    }
    let mut components = style.selectors.0[0].iter_raw_match_order();
    let is_export = matches!(
        components.next(),
        Some(Component::NonTSPseudoClass(PseudoClass::Custom { name })) if &**name == "export"
    );
    is_export && components.next().is_none()
}

fn collect_export_props<'i, R>(style: &StyleRule<'i, R>, facts: &mut StylesheetFacts) {
    let block = &style.declarations;
    for property in block
        .declarations
        .iter()
        .chain(block.important_declarations.iter())
    {
        let name = property.property_id().name().to_string();
        if !facts.export_props.contains(&name) {
            facts.export_props.push(name);
        }
    }
}
