use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;

pub struct AppContext {
    /// The explicit config file, or the project config it would be
    pub config_path: PathBuf,
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| project_root.join(PROJECT_CONFIG_FILE));
        let config = Config::load(cli.config.as_deref(), &project_root)?;

        Ok(Self {
            config_path,
            config,
            output_format: cli.output_format(),
        })
    }
}
