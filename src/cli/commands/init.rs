//! `tagutil init`: write the default configuration file.

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitCommand, exit_status::ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let dir = env::current_dir().context("Failed to resolve current directory")?;
    init_in(&dir, cmd.force)
}

/// Write `.tagutilrc.json` into `dir`. An existing file is kept unless `force`.
pub fn init_in(dir: &Path, force: bool) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists (use {} to overwrite)",
            "error:".bold().red(),
            CONFIG_FILE_NAME,
            "--force".cyan()
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
