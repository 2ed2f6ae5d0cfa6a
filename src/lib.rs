//! Static site generator for vocabulary flashcard websites.
//!
//! Entries are markdown files with YAML frontmatter. A build reads every
//! file from the content directory, validates it against the entry schema,
//! and renders responsive card pages. Any invalid file aborts the build.

pub mod config;
pub mod content;
pub mod error;
pub mod pipeline;
pub mod publish;
pub mod query;

pub use config::SiteConfig;
pub use content::{Category, ContentStore, Difficulty, VocabularyEntry};
pub use error::{BuildError, BuildResult};
pub use query::{categorize_words, difficulty_color, Tone};
