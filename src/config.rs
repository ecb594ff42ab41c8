use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::data::registry::Registry;

/// Browse, search and export lead CSV files by service category.
#[derive(Parser, Debug, Default)]
#[command(name = "leads-dashboard", version, about)]
pub struct Cli {
    /// Directory holding the lead CSV files (defaults to the current directory).
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// TOML file listing `[[category]]` name/file pairs, replacing the built-in list.
    #[arg(short = 'r', long = "registry")]
    pub registry: Option<PathBuf>,

    /// Enable debug logging (ignored when RUST_LOG is set).
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Resolve the category registry for this run.
    pub fn registry(&self) -> Result<Registry> {
        let data_dir = self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        match &self.registry {
            Some(path) => Registry::from_file(data_dir, path)
                .with_context(|| format!("loading registry from {}", path.display())),
            None => Ok(Registry::builtin(data_dir)),
        }
    }
}

/// Initialise `env_logger`. `RUST_LOG` wins; otherwise `--debug` selects
/// `debug` and the default is `info`.
pub fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
