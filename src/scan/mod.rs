//! Annotation scanning over a source tree.
//!
//! Files are selected with the `includes` / `ignores` globs of the
//! configuration, then read and scanned in parallel.

mod source;

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::Config;

pub use source::{TagSite, scan_source};

/// Result of listing files under a scan root.
pub struct FileList {
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Result of scanning a source tree.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Sites sorted by file, then line.
    pub sites: Vec<TagSite>,
    pub files_scanned: usize,
    /// Files or directory entries that could not be read.
    pub skipped_count: usize,
}

/// List the files under `root` selected by `config`, sorted.
///
/// A `root` that is itself a file is always selected.
pub fn collect_files(root: &Path, config: &Config, verbose: bool) -> Result<FileList> {
    if root.is_file() {
        return Ok(FileList {
            files: vec![root.to_path_buf()],
            skipped_count: 0,
        });
    }
    if !root.is_dir() {
        anyhow::bail!("Path does not exist: {}", root.display());
    }

    let matchers = config.matchers()?;
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != OsStr::new(".git"));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matchers.is_match(relative) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(FileList {
        files,
        skipped_count,
    })
}

/// Scan every selected file under `root` for field annotations.
pub fn scan_files(root: &Path, config: &Config, verbose: bool) -> Result<ScanReport> {
    let FileList {
        files,
        mut skipped_count,
    } = collect_files(root, config, verbose)?;

    // Parallel read + scan, sequential merge.
    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let sites = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
                .map(|source| scan_source(path, &source));
            (path, sites)
        })
        .collect();

    let mut report = ScanReport::default();
    for (path, sites) in results {
        match sites {
            Ok(sites) => {
                report.files_scanned += 1;
                report.sites.extend(sites);
            }
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} {}: {:#}",
                        "warning:".bold().yellow(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }
    report.skipped_count = skipped_count;

    // `files` was sorted and per-file sites are in line order.
    Ok(report)
}

/// Keep the sites whose annotation has `key`, and `option` among its options
/// when one is given.
pub fn filter_sites(sites: Vec<TagSite>, key: &str, option: Option<&str>) -> Vec<TagSite> {
    sites
        .into_iter()
        .filter(|site| site.tag.len(key) > 0)
        .filter(|site| option.is_none_or(|opt| site.tag.has_option(key, opt)))
        .collect()
}
