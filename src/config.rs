//! Configuration file loading and parsing.
//!
//! Configuration lives in `.cmlintrc.json`, discovered by walking up from
//! the checked directory (stopping at the repository root). Every field is
//! optional; a missing file means all defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{CasingPolicy, StylesheetSyntax};

pub const CONFIG_FILE_NAME: &str = ".cmlintrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// The `camelCase` option as written in the config file: either a boolean
/// or one of the string modes, mirroring css-loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CamelCaseOption {
    Enabled(bool),
    Mode(CamelCaseMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CamelCaseMode {
    Dashes,
    Only,
    DashesOnly,
}

impl CamelCaseOption {
    pub fn casing_policy(self) -> CasingPolicy {
        match self {
            CamelCaseOption::Enabled(true) => CasingPolicy::CamelCaseAndOriginal,
            CamelCaseOption::Enabled(false) => CasingPolicy::None,
            CamelCaseOption::Mode(CamelCaseMode::Only) => CasingPolicy::CamelCaseOnly,
            CamelCaseOption::Mode(CamelCaseMode::Dashes | CamelCaseMode::DashesOnly) => {
                CasingPolicy::HyphenatedOnly
            }
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Directories (or glob patterns) to scan; empty means the whole tree.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Accessor casing policy; absent means only declared spellings match.
    #[serde(default)]
    pub camel_case: Option<CamelCaseOption>,
    /// Stylesheet dialect override; absent means the file extension decides.
    #[serde(default)]
    pub syntax: Option<StylesheetSyntax>,
    /// Class names always treated as used, e.g. classes composed at runtime.
    /// Names that aren't declared anywhere are silently ignored.
    #[serde(default)]
    pub mark_as_used: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_ignores() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/dist/**",
        "**/build/**",
        "**/.next/**",
    ]
    .map(String::from)
    .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: Vec::new(),
            camel_case: None,
            syntax: None,
            mark_as_used: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// The casing policy selected by the `camelCase` option.
    pub fn casing_policy(&self) -> CasingPolicy {
        self.camel_case
            .map(CamelCaseOption::casing_policy)
            .unwrap_or_default()
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes`
    /// are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are literal directory paths
        // and need no validation.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate the nearest config file; defaults when none exists.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let Some(config_path) = find_config_file(start_dir) else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    config.validate()?;

    Ok(config)
}
