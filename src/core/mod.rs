//! Core class-resolution engine.
//!
//! The pipeline for one source file:
//!
//! 1. `stylesheet`: parse an imported stylesheet into declared class names
//!    and `:export` properties (or an explicit "no facts" outcome).
//! 2. `casing` + `class_map`: derive the accessor lookup table under the
//!    configured casing policy.
//! 3. `registry` + `resolve`: track bindings per local import name and
//!    resolve property accesses against them, marking usage.
//! 4. `analyzer`: the swc visitor driving 1-3 in a single traversal.
//! 5. `context`: per-run orchestration (config, scanning, parallel
//!    analysis across files).

pub mod analyzer;
pub mod casing;
pub mod class_map;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod registry;
pub mod resolve;
pub mod stylesheet;

pub use analyzer::{AnalyzerOptions, FileAnalyzer, FileStyleUsage, UndefinedAccess};
pub use casing::{CasingPolicy, camel_case};
pub use class_map::{ClassMap, UsageSet};
pub use context::{AnalysisData, CheckContext};
pub use data::{SourceContext, SourceLocation};
pub use registry::{BindingRegistry, StyleBinding};
pub use resolve::AccessOutcome;
pub use stylesheet::{
    ExtractOutcome, FactsUnavailable, StylesheetFacts, StylesheetSyntax, extract_facts,
};
