//! Shared configuration flags for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{SearchConfig, SelectionPolicy};

/// Flags accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON file with search settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Root selection policy (first-acceptable, best); overrides the config file
    #[arg(long, global = true)]
    pub policy: Option<SelectionPolicy>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Resolve the search configuration: defaults, then the config file,
    /// then command-line overrides.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_json_file(path)
                .with_context(|| format!("loading search config from {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(policy) = self.policy {
            config = config.with_selection(policy);
        }
        Ok(config)
    }
}
