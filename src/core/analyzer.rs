//! Single-pass source file analyzer.
//!
//! One AST traversal per file does all the work: import declarations
//! register stylesheet bindings, member expressions resolve property
//! accesses against them (marking usage as a side effect), and the caller
//! sweeps the registry for never-referenced classes once the traversal is
//! done. Import visits always precede access visits in source order, so a
//! binding exists by the time its accesses are seen.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{Expr, ImportDecl, ImportSpecifier, Lit, MemberExpr, MemberProp, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::casing::CasingPolicy;
use crate::core::class_map::{ClassMap, UsageSet};
use crate::core::data::{SourceContext, SourceLocation};
use crate::core::registry::{BindingRegistry, StyleBinding};
use crate::core::resolve::AccessOutcome;
use crate::core::stylesheet::{self, ExtractOutcome, FactsUnavailable, StylesheetSyntax};

/// Options governing one file's analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerOptions {
    pub casing_policy: CasingPolicy,
    /// Dialect override; by default the stylesheet extension decides.
    pub syntax: Option<StylesheetSyntax>,
}

/// A property access that matched neither a declared class nor an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedAccess {
    pub property: String,
    pub context: SourceContext,
}

/// Analysis results for one source file.
#[derive(Debug)]
pub struct FileStyleUsage {
    pub file_path: String,
    pub registry: BindingRegistry,
    pub undefined_accesses: Vec<UndefinedAccess>,
}

/// The visitor performing the traversal. Use [`FileAnalyzer::analyze`].
pub struct FileAnalyzer<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    options: AnalyzerOptions,
    registry: BindingRegistry,
    undefined_accesses: Vec<UndefinedAccess>,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, options: AnalyzerOptions) -> Self {
        Self {
            file_path,
            source_map,
            options,
            registry: BindingRegistry::new(),
            undefined_accesses: Vec::new(),
        }
    }

    pub fn analyze(mut self, module: &Module) -> FileStyleUsage {
        module.visit_with(&mut self);
        FileStyleUsage {
            file_path: self.file_path.to_string(),
            registry: self.registry,
            undefined_accesses: self.undefined_accesses,
        }
    }

    fn source_context(&self, pos: BytePos) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(pos);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }

    fn register_style_import(&mut self, node: &ImportDecl) {
        if node.type_only {
            return;
        }
        let Some(specifier) = node.src.value.as_str() else {
            return;
        };
        if !is_style_specifier(specifier) {
            return;
        }
        let Some(local_name) = style_local_name(node) else {
            return;
        };

        let stylesheet_path = resolve_stylesheet_path(Path::new(self.file_path), specifier);
        let syntax = self
            .options
            .syntax
            .or_else(|| stylesheet_path.as_deref().and_then(StylesheetSyntax::from_path))
            .unwrap_or(StylesheetSyntax::Css);

        let outcome = match &stylesheet_path {
            Some(path) => stylesheet::extract_facts(path, syntax),
            None => ExtractOutcome::Unavailable(FactsUnavailable::FileNotFound),
        };

        let (class_map, export_props, usage, unavailable) = match outcome {
            ExtractOutcome::Facts(facts) => (
                ClassMap::build(&facts.classes, self.options.casing_policy),
                facts.export_props.iter().cloned().collect(),
                UsageSet::from_declared(&facts.classes),
                None,
            ),
            ExtractOutcome::Unavailable(reason) => (
                ClassMap::default(),
                HashSet::new(),
                UsageSet::default(),
                Some(reason),
            ),
        };

        self.registry.register(StyleBinding {
            local_name,
            stylesheet_path: stylesheet_path.unwrap_or_else(|| PathBuf::from(specifier)),
            class_map,
            export_props,
            usage,
            import_context: self.source_context(node.span.lo),
            unavailable,
        });
    }
}

impl Visit for FileAnalyzer<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        self.register_style_import(node);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        if let Expr::Ident(object) = &*node.obj
            && let Some((property, prop_pos)) = static_property_name(&node.prop)
        {
            let outcome = self.registry.resolve_access(object.sym.as_str(), &property);
            if outcome == AccessOutcome::UndefinedProperty {
                self.undefined_accesses.push(UndefinedAccess {
                    context: self.source_context(prop_pos),
                    property,
                });
            }
        }
        node.visit_children_with(self);
    }
}

/// Stylesheet imports are recognized by their file extension.
fn is_style_specifier(specifier: &str) -> bool {
    StylesheetSyntax::from_path(Path::new(specifier)).is_some()
}

/// The local name bound to the whole module object: a default import or a
/// namespace import. Named specifiers don't bind the class table.
fn style_local_name(node: &ImportDecl) -> Option<String> {
    node.specifiers.iter().find_map(|specifier| match specifier {
        ImportSpecifier::Default(default) => Some(default.local.sym.to_string()),
        ImportSpecifier::Namespace(ns) => Some(ns.local.sym.to_string()),
        ImportSpecifier::Named(_) => None,
    })
}

/// Resolve a stylesheet specifier against the importing file's directory.
/// Package and bundler-alias specifiers have no filesystem meaning here.
fn resolve_stylesheet_path(importing_file: &Path, specifier: &str) -> Option<PathBuf> {
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        return None;
    }
    let dir = importing_file.parent().unwrap_or_else(|| Path::new("."));
    Some(dir.join(specifier))
}

/// The literal property name of a member access: a static identifier
/// (`s.foo`) or a computed string literal (`s['foo-bar']`).
fn static_property_name(prop: &MemberProp) -> Option<(String, BytePos)> {
    match prop {
        MemberProp::Ident(ident) => Some((ident.sym.to_string(), ident.span.lo)),
        MemberProp::Computed(computed) => match &*computed.expr {
            Expr::Lit(Lit::Str(s)) => s
                .value
                .as_str()
                .map(|value| (value.to_string(), computed.span.lo)),
            _ => None,
        },
        MemberProp::PrivateName(_) => None,
    }
}
