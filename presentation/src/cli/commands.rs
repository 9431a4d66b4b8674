//! CLI command definitions

use crate::output::listing::SortKey;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for orgsettings
#[derive(Parser, Debug)]
#[command(name = "orgsettings")]
#[command(author, version, about = "Inspect and edit Dataverse organization settings (OrgDbOrgSettings)")]
#[command(long_about = r#"
orgsettings merges the community OrgDbOrgSettings catalogs with the live
values of a Dataverse environment into one table, stages edits locally and
writes them back as a single update when you save.

Configuration files are loaded from (in priority order):
1. ORGSETTINGS_* environment variables (e.g. ORGSETTINGS_CONNECTION__TOKEN)
2. --config <path>        Explicit config file
3. ./orgsettings.toml     Project-level config
4. ~/.config/orgsettings/config.toml   Global config

Example:
  orgsettings list --filter folder
  orgsettings show MaxFolderDepth
  orgsettings set MaxFolderDepth=5 EnableBulkDelete=true --dry-run
  orgsettings shell
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Environment URL (overrides [connection] url)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the canonical list as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List settings with their current values
    List {
        /// Only settings whose name contains TEXT (case-insensitive)
        #[arg(short, long, value_name = "TEXT")]
        filter: Option<String>,

        /// Only settings with staged changes
        #[arg(long)]
        dirty: bool,

        /// Sort column
        #[arg(long, value_enum, default_value = "name")]
        sort: SortKey,
    },

    /// Show everything known about one setting
    Show {
        /// Setting name (case-insensitive)
        name: String,
    },

    /// Stage values and save them in one update
    Set {
        /// Assignments such as MaxFolderDepth=5
        #[arg(required = true, value_name = "NAME=VALUE", value_parser = parse_assignment)]
        assignments: Vec<(String, String)>,

        /// Print the update payload without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Interactive edit shell
    Shell,
}

/// Parse `NAME=VALUE`. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got '{}'", raw));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing setting name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}
