//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{StorefrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from; `None` means built-in defaults.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve_path(&cwd, path);
            (StorefrontConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        match &config_path {
            Some(path) => tracing::debug!(path = %path.display(), "config loaded"),
            None => tracing::debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, StorefrontConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StorefrontConfig::load(&config_path) {
                        Ok(config) => return Some((config_path, config)),
                        Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
