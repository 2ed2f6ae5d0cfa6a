//! Site configuration loaded from `vocab.toml`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};
use crate::publish::PublishOptions;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "vocab.toml";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown in the header of every page
    pub site_title: String,
    /// Directory holding the entry markdown files
    pub content_dir: PathBuf,
    /// Directory the static site is written to
    pub output_dir: PathBuf,
    /// Theme name (see `available_themes`)
    pub theme: String,
    pub publish: PublishConfig,
}

/// `[publish]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Render the notes section of each entry on its card
    pub include_notes: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Vocabulary".to_string(),
            content_dir: PathBuf::from("content/vocabulary"),
            output_dir: PathBuf::from("dist"),
            theme: "light".to_string(),
            publish: PublishConfig::default(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            include_notes: true,
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults. Relative directories are resolved
    /// against the directory containing the config file.
    pub fn load(path: &Path) -> BuildResult<Self> {
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default().resolved(&base));
        }

        let text = fs::read_to_string(path).map_err(|source| BuildError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(path, &text)?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config.resolved(&base))
    }

    fn parse(path: &Path, text: &str) -> BuildResult<Self> {
        toml::from_str(text).map_err(|source| BuildError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn resolved(mut self, base: &Path) -> Self {
        if self.content_dir.is_relative() {
            self.content_dir = base.join(&self.content_dir);
        }
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }

    pub fn publish_options(&self) -> PublishOptions {
        PublishOptions {
            site_title: self.site_title.clone(),
            theme: self.theme.clone(),
            include_notes: self.publish.include_notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::load(&temp.path().join(DEFAULT_CONFIG_FILE)).unwrap();

        assert_eq!(config.site_title, "Vocabulary");
        assert_eq!(config.content_dir, temp.path().join("content/vocabulary"));
        assert_eq!(config.output_dir, temp.path().join("dist"));
        assert!(config.publish.include_notes);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            "site_title = \"Deutsch lernen\"\ntheme = \"dark\"\n\n\
             [publish]\ninclude_notes = false\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.site_title, "Deutsch lernen");
        assert_eq!(config.theme, "dark");
        assert_eq!(config.output_dir, temp.path().join("dist"));

        let options = config.publish_options();
        assert!(!options.include_notes);
        assert_eq!(options.theme, "dark");
    }

    #[test]
    fn test_absolute_dirs_are_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "output_dir = \"/srv/site\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "site_title = [").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, BuildError::ConfigParse { .. }));
    }
}
