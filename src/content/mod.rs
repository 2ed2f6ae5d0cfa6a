//! Vocabulary content: file format, schema validation and the content store

mod errors;
mod frontmatter;
mod models;
mod sections;
mod store;
mod validate;

pub use errors::{ContentError, ContentResult, SchemaViolation, ViolationKind};
pub use frontmatter::{format_entry_file, split_frontmatter};
pub use models::*;
pub use sections::{extract_sections, EntrySections};
pub use store::ContentStore;
pub use validate::{slug_for_path, validate_all, validate_entry};
