use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tagutilrc.json";

/// Suffix of Go test files, skipped when `ignoreTestFiles` is set.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    /// Keys reported by `scan` when no `--key` is given. Empty means all.
    #[serde(default)]
    pub keys: Vec<String>,
}

fn default_includes() -> Vec<String> {
    vec!["**/*.go".to_string()]
}

fn default_ignores() -> Vec<String> {
    vec!["vendor/**".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            keys: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `includes` or `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Compile `includes` and `ignores` into matchers.
    pub fn matchers(&self) -> Result<FileMatchers> {
        let compile = |patterns: &[String]| -> Result<Vec<Pattern>> {
            patterns
                .iter()
                .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{}\"", p)))
                .collect()
        };
        Ok(FileMatchers {
            includes: compile(&self.includes)?,
            ignores: compile(&self.ignores)?,
            ignore_test_files: self.ignore_test_files,
        })
    }
}

/// Compiled file filters from a [`Config`].
#[derive(Debug)]
pub struct FileMatchers {
    includes: Vec<Pattern>,
    ignores: Vec<Pattern>,
    ignore_test_files: bool,
}

impl FileMatchers {
    /// Check a path relative to the scan root.
    pub fn is_match(&self, relative: &Path) -> bool {
        if self.ignore_test_files
            && relative
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(TEST_FILE_SUFFIX))
        {
            return false;
        }
        self.includes.iter().any(|p| p.matches_path(relative))
            && !self.ignores.iter().any(|p| p.matches_path(relative))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

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

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when defaults are used.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
