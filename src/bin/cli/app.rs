use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vocab_lib::pipeline;
use vocab_lib::{SiteConfig, VocabularyEntry};

/// Shared application state for CLI commands
pub struct App {
    pub config: SiteConfig,
}

impl App {
    /// Load the config file and apply command-line overrides
    pub fn new(
        config_path: &Path,
        output_dir: Option<PathBuf>,
        theme: Option<String>,
    ) -> Result<Self> {
        let mut config = SiteConfig::load(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?;

        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }
        if let Some(theme) = theme {
            config.theme = theme;
        }

        Ok(Self { config })
    }

    /// Load and validate every entry
    pub fn load_entries(&self) -> vocab_lib::BuildResult<Vec<VocabularyEntry>> {
        pipeline::check(&self.config)
    }
}
