//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use jewel_site::SiteConfig;

use crate::config::{self, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Site configuration.
    pub config: SiteConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config path or the nearest `site.toml`.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (config::load(&path)?, Some(path))
        } else {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            match Self::find_config(&cwd) {
                Some(path) => (config::load(&path)?, Some(path)),
                None => (SiteConfig::default(), None),
            }
        };

        match &config_path {
            Some(path) => output.debug(&format!("Using config {}", path.display())),
            None => output.debug("No site.toml found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
