//! Content error types

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// What is wrong with a single frontmatter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field is not present
    Missing,
    /// Required field is present but blank
    Empty,
    /// Field holds a number, list or map instead of text
    NotText,
    /// Value is outside the field's closed set
    InvalidVariant {
        value: String,
        allowed: Vec<&'static str>,
    },
    /// Another file already produced this slug
    DuplicateSlug { other: PathBuf },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "required field is missing"),
            ViolationKind::Empty => write!(f, "required field is empty"),
            ViolationKind::NotText => write!(f, "expected a text value"),
            ViolationKind::InvalidVariant { value, allowed } => write!(
                f,
                "invalid value '{}', expected one of: {}",
                value,
                allowed.join(", ")
            ),
            ViolationKind::DuplicateSlug { other } => {
                write!(f, "slug already used by {}", other.display())
            }
        }
    }
}

/// A schema violation in one content file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: field `{field}`: {kind}", .path.display())]
pub struct SchemaViolation {
    pub path: PathBuf,
    pub field: &'static str,
    pub kind: ViolationKind,
}

/// Errors that can occur while reading or validating content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{}: file does not start with a `---` frontmatter block", .0.display())]
    MissingFrontmatter(PathBuf),

    #[error("{}: frontmatter block is never closed with `---`", .0.display())]
    UnterminatedFrontmatter(PathBuf),

    #[error("{}: invalid YAML frontmatter: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{}: frontmatter must be a mapping of fields", .0.display())]
    NotAMapping(PathBuf),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Name of the offending field, when the error is about one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ContentError::Schema(violation) => Some(violation.field),
            _ => None,
        }
    }
}

impl From<ContentError> for String {
    fn from(err: ContentError) -> Self {
        err.to_string()
    }
}

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;
