pub mod global;

use std::path::PathBuf;

use crate::cli::Cli;
use global::GlobalConfig;

pub const DEFAULT_TERRAFORM: &str = "terraform";

/// Effective settings: command line (and its env fallbacks) over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub terraform: String,
    pub chdir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Settings {
    pub fn resolve(cli: Cli, config: GlobalConfig) -> Self {
        Self {
            terraform: cli
                .terraform
                .or(config.terraform)
                .unwrap_or_else(|| DEFAULT_TERRAFORM.to_string()),
            chdir: cli.chdir,
            log_file: config.log_file.or_else(default_log_file),
            debug: cli.debug,
        }
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("tfws").join("tfws.log"))
}
