//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `parse`: Show every key of an annotation with its main value and options
//! - `get` / `first` / `second` / `len` / `num-options`: Query one key
//! - `contains` / `has-option`: Test one key for a value (exit status 1 if absent)
//! - `scan`: List field annotations found in Go source files
//! - `init`: Initialize tagutil configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Annotation string, e.g. 'json:"name,omitempty" db:"name"'
    pub tag: String,

    /// Print the parsed annotation as a JSON object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Annotation string, e.g. 'json:"name,omitempty"'
    pub tag: String,

    /// Key to look up
    pub key: String,
}

#[derive(Debug, Args)]
pub struct ValueArgs {
    /// Annotation string, e.g. 'json:"name,omitempty"'
    pub tag: String,

    /// Key to look up
    pub key: String,

    /// Value to test for
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Directory or file to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only list annotations that have this key (overrides config file)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Only list annotations whose key carries this option
    #[arg(long, requires = "key")]
    pub option: Option<String>,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse an annotation and show its keys, main values and options
    Parse(ParseCommand),
    /// Print the full comma-joined value of a key
    Get(KeyArgs),
    /// Print the main value of a key
    First(KeyArgs),
    /// Print the first option of a key
    Second(KeyArgs),
    /// Print the number of comma-separated items of a key
    Len(KeyArgs),
    /// Print the number of options of a key
    NumOptions(KeyArgs),
    /// Test whether any item of a key equals a value
    Contains(ValueArgs),
    /// Test whether any option of a key equals a value
    HasOption(ValueArgs),
    /// List field annotations found in Go source files
    Scan(ScanCommand),
    /// Initialize a new .tagutilrc.json configuration file
    Init(InitCommand),
}
