//! Per-run orchestration for the check command.
//!
//! `CheckContext` owns the merged configuration and the scanned file list,
//! and lazily runs the per-file analyses. Each file's analysis builds its
//! own binding registry and discards it with the file; files never share
//! state, so the whole fan-out is embarrassingly parallel.

use std::cell::OnceCell;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;

use crate::cli::args::CheckArgs;
use crate::config::{Config, load_config};
use crate::core::analyzer::{AnalyzerOptions, FileAnalyzer, FileStyleUsage};
use crate::core::file_scanner::scan_files;
use crate::core::parsers::js::parse_module_source;
use crate::issues::ParseErrorIssue;

/// Output of the parallel analysis phase.
pub struct AnalysisData {
    pub usages: Vec<FileStyleUsage>,
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Context for one `check` invocation.
///
/// Configuration priority (highest to lowest): CLI arguments, the
/// `.cmlintrc.json` config file, built-in defaults.
pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Source files to analyze, sorted for deterministic iteration.
    pub files: Vec<String>,
    pub verbose: bool,
    analysis: OnceCell<AnalysisData>,
}

impl CheckContext {
    pub fn new(args: &CheckArgs) -> Result<Self> {
        let root_dir = args.common.path.clone();
        let verbose = args.common.verbose;

        let mut config = load_config(&root_dir)?;
        if let Some(syntax) = args.syntax {
            config.syntax = Some(syntax);
        }
        if !args.mark_as_used.is_empty() {
            config.mark_as_used = args.mark_as_used.clone();
        }

        let scan_result = scan_files(
            &root_dir.to_string_lossy(),
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let mut files: Vec<String> = scan_result.files.into_iter().collect();
        files.sort();

        Ok(Self {
            config,
            root_dir,
            files,
            verbose,
            analysis: OnceCell::new(),
        })
    }

    /// Parse and analyze every scanned file (lazy, parallel).
    ///
    /// Unreadable or unparsable source files become `ParseErrorIssue`s
    /// instead of failing the run.
    pub fn analysis(&self) -> &AnalysisData {
        self.analysis.get_or_init(|| {
            let options = AnalyzerOptions {
                casing_policy: self.config.casing_policy(),
                syntax: self.config.syntax,
            };

            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let analyzed = std::fs::read_to_string(file_path)
                        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            // Each file gets its own SourceMap so parsing can
                            // run on any thread.
                            let source_map = Arc::new(swc_common::SourceMap::default());
                            parse_module_source(code, file_path, source_map)
                        })
                        .map(|parsed| {
                            FileAnalyzer::new(file_path, &parsed.source_map, options)
                                .analyze(&parsed.module)
                        });
                    (file_path.clone(), analyzed)
                })
                .collect();

            let mut usages = Vec::new();
            let mut parse_errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(usage) => usages.push(usage),
                    Err(e) => parse_errors.push(ParseErrorIssue {
                        file_path,
                        error: e.to_string(),
                    }),
                }
            }
            parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));

            AnalysisData {
                usages,
                parse_errors,
            }
        })
    }

    pub fn file_usages(&self) -> &[FileStyleUsage] {
        &self.analysis().usages
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.analysis().parse_errors
    }
}
