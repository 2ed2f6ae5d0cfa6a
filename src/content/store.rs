//! Directory-backed store of vocabulary entry files

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::errors::{ContentError, ContentResult};
use super::frontmatter::{format_entry_file, split_frontmatter};
use super::models::{RawEntry, VocabularyEntry};
use super::validate::validate_all;

/// A directory of markdown entry files.
///
/// Files are discovered recursively and in file-name order. Hidden files and
/// files whose name starts with `_` are skipped.
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Paths of every entry file under the root
    pub fn entry_paths(&self) -> ContentResult<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(e.file_name()))
        {
            let entry = entry.map_err(|e| ContentError::Io {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                source: e.into(),
            })?;

            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
                paths.push(path.to_path_buf());
            }
        }

        Ok(paths)
    }

    /// Load and validate every entry.
    ///
    /// Either every file conforms and all entries are returned, or the
    /// complete list of problems is returned.
    pub fn load(&self) -> Result<Vec<VocabularyEntry>, Vec<ContentError>> {
        let paths = self.entry_paths().map_err(|e| vec![e])?;
        log::info!("Found {} entry files in {}", paths.len(), self.root.display());
        let (raws, mut errors) = read_all(&paths);

        match validate_all(&raws) {
            Ok(entries) if errors.is_empty() => Ok(entries),
            Ok(_) => Err(errors),
            Err(violations) => {
                errors.extend(violations);
                Err(errors)
            }
        }
    }

    /// Path an entry with the given slug is stored at
    pub fn entry_path(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.md", slug))
    }

    /// Write a new entry file. Fails if the file already exists.
    pub fn create_entry(&self, entry: &VocabularyEntry) -> ContentResult<PathBuf> {
        let path = self.entry_path(&entry.slug);
        let io_err = |source: std::io::Error| ContentError::Io {
            path: path.clone(),
            source,
        };

        let content = format_entry_file(entry).map_err(|source| ContentError::Yaml {
            path: path.clone(),
            source,
        })?;

        fs::create_dir_all(&self.root).map_err(io_err)?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;

        log::info!("Created entry {}", path.display());
        Ok(path)
    }
}

fn is_skipped(name: &std::ffi::OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name.starts_with('_')
}

fn read_all(paths: &[PathBuf]) -> (Vec<RawEntry>, Vec<ContentError>) {
    let mut raws = Vec::with_capacity(paths.len());
    let mut errors = Vec::new();
    for path in paths {
        log::debug!("Reading {}", path.display());
        match read_raw(path) {
            Ok(raw) => raws.push(raw),
            Err(e) => errors.push(e),
        }
    }
    (raws, errors)
}

fn read_raw(path: &Path) -> ContentResult<RawEntry> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (fields, body) = split_frontmatter(path, &content)?;

    Ok(RawEntry {
        path: path.to_path_buf(),
        fields,
        body,
    })
}
