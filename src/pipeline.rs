//! Build pipeline: content store → validation → rendering
//!
//! The pipeline is one-shot and fails closed: if any content file is
//! invalid, nothing is written.

use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::content::{
    format_entry_file, slug_for_path, split_frontmatter, validate_entry, Category, ContentError,
    ContentStore, Difficulty, RawEntry, VocabularyEntry,
};
use crate::error::{BuildError, BuildResult};
use crate::publish::{publish_site, slugify, ProgressFn, PublishResult};

/// Load and validate every entry of the configured content directory.
pub fn check(config: &SiteConfig) -> BuildResult<Vec<VocabularyEntry>> {
    let store = ContentStore::new(config.content_dir.clone());
    match store.load() {
        Ok(entries) => {
            log::info!("{} entries passed validation", entries.len());
            Ok(entries)
        }
        Err(errors) => {
            for error in &errors {
                log::error!("{}", error);
            }
            Err(BuildError::InvalidContent(errors))
        }
    }
}

/// Validate all content, then write the static site.
pub fn build(config: &SiteConfig, progress: Option<&ProgressFn>) -> BuildResult<PublishResult> {
    let entries = check(config)?;
    publish_site(
        &entries,
        &config.output_dir,
        &config.publish_options(),
        progress,
    )
}

/// Fields for scaffolding a new entry file
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub word: String,
    pub translation: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub example: Option<String>,
    pub notes: Option<String>,
}

impl NewEntry {
    fn body(&self) -> String {
        let mut sections = Vec::new();
        if let Some(example) = self.example.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            sections.push(format!("## Example\n\n{}", example));
        }
        if let Some(notes) = self.notes.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            sections.push(format!("## Notes\n\n{}", notes));
        }
        sections.join("\n\n")
    }
}

/// Write a new entry file into the content directory.
///
/// The entry goes through the same validation as a build before anything
/// is written. An existing file is never overwritten, and a slug already
/// taken anywhere under the content directory is refused.
pub fn create_entry(config: &SiteConfig, new: &NewEntry) -> BuildResult<PathBuf> {
    let store = ContentStore::new(config.content_dir.clone());

    let slug = match slugify(&new.word) {
        s if s.is_empty() => "untitled".to_string(),
        s => s,
    };
    let path = store.entry_path(&slug);

    let entry = VocabularyEntry {
        slug,
        word: new.word.trim().to_string(),
        translation: new.translation.trim().to_string(),
        category: new.category,
        difficulty: new.difficulty,
        body: new.body(),
    };

    let content = format_entry_file(&entry).map_err(|source| ContentError::Yaml {
        path: path.clone(),
        source,
    })?;
    let (fields, body) = split_frontmatter(&path, &content)?;
    validate_entry(&RawEntry {
        path: path.clone(),
        fields,
        body,
    })
    .map_err(ContentError::from)?;

    if config.content_dir.is_dir() {
        if let Some(taken) = store
            .entry_paths()?
            .into_iter()
            .find(|p| slug_for_path(p) == entry.slug)
        {
            return Err(BuildError::AlreadyExists(taken));
        }
    }

    store.create_entry(&entry).map_err(|e| match e {
        ContentError::Io { path, source } if source.kind() == std::io::ErrorKind::AlreadyExists => {
            BuildError::AlreadyExists(path)
        }
        other => BuildError::Content(other),
    })
}
