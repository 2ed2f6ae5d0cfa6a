//! Build error types

use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentError;

/// Errors that can occur while building the site
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{} content problem(s) found, nothing was written", .0.len())]
    InvalidContent(Vec<ContentError>),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Entry already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl BuildError {
    /// Individual content problems, if this is a validation failure
    pub fn content_errors(&self) -> &[ContentError] {
        match self {
            BuildError::InvalidContent(errors) => errors,
            _ => &[],
        }
    }
}

impl From<BuildError> for String {
    fn from(err: BuildError) -> Self {
        err.to_string()
    }
}

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;
