//! `tagutil scan`: list field annotations under a source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::ScanCommand, exit_status::ExitStatus, report};
use crate::{
    config::load_config,
    scan::{TagSite, filter_sites, scan_files},
};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let root = cmd.path.as_path();
    let config_dir = config_search_dir(root)?;
    let loaded = load_config(&config_dir)?;

    if cmd.verbose {
        match &loaded.path {
            Some(path) => eprintln!("{} using {}", "note:".bold(), path.display()),
            None => eprintln!("{} no config file found, using defaults", "note:".bold()),
        }
    }

    let scanned = scan_files(root, &loaded.config, cmd.verbose)?;

    let sites = match cmd.key.as_deref() {
        Some(key) => filter_sites(scanned.sites, key, cmd.option.as_deref()),
        None if !loaded.config.keys.is_empty() => scanned
            .sites
            .into_iter()
            .filter(|site| loaded.config.keys.iter().any(|k| site.tag.len(k) > 0))
            .collect(),
        None => scanned.sites,
    };
    let sites = relative_to(sites, root);

    if cmd.json {
        let json = serde_json::to_string_pretty(&sites).context("Failed to serialize results")?;
        println!("{}", json);
    } else {
        report::print_sites(&sites);
        report::print_scan_summary(scanned.files_scanned, sites.len());
    }
    report::print_skipped_warning(scanned.skipped_count, cmd.verbose);

    Ok(ExitStatus::Success)
}

/// Config lookup starts at the scan root (or its directory for a single file).
fn config_search_dir(root: &Path) -> Result<PathBuf> {
    let dir = if root.is_file() {
        root.parent().unwrap_or(Path::new("."))
    } else {
        root
    };
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    dir.canonicalize()
        .with_context(|| format!("Path does not exist: {}", root.display()))
}

/// Show file paths relative to the scan root.
fn relative_to(sites: Vec<TagSite>, root: &Path) -> Vec<TagSite> {
    let base = if root.is_file() {
        root.parent().unwrap_or(Path::new(""))
    } else {
        root
    };
    sites
        .into_iter()
        .map(|mut site| {
            if let Ok(relative) = site.file.strip_prefix(base) {
                site.file = relative.to_path_buf();
            }
            site
        })
        .collect()
}
