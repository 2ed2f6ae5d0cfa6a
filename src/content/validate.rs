//! Schema validation for raw content records

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::errors::{ContentError, SchemaViolation, ViolationKind};
use super::models::{Category, Difficulty, RawEntry, VocabularyEntry};

const KNOWN_FIELDS: [&str; 4] = ["word", "translation", "category", "difficulty"];

/// Validate a raw record, turning it into a `VocabularyEntry`.
///
/// Fields are checked in declaration order and the first violation is
/// returned. Optional fields that are absent or `null` are left unset.
pub fn validate_entry(raw: &RawEntry) -> Result<VocabularyEntry, SchemaViolation> {
    for key in raw.fields.keys() {
        match key.as_str() {
            Some(name) if KNOWN_FIELDS.contains(&name) => {}
            Some(name) => log::warn!("{}: ignoring unknown field `{}`", raw.path.display(), name),
            None => log::warn!("{}: ignoring non-text frontmatter key", raw.path.display()),
        }
    }

    let word = required_text(raw, "word")?;
    let translation = required_text(raw, "translation")?;
    let category = optional_variant::<Category>(raw, "category", Category::allowed)?;
    let difficulty = optional_variant::<Difficulty>(raw, "difficulty", Difficulty::allowed)?;

    Ok(VocabularyEntry {
        slug: slug_for_path(&raw.path),
        word,
        translation,
        category,
        difficulty,
        body: raw.body.trim().to_string(),
    })
}

/// Validate every record, collecting all violations.
///
/// Returns the entries only if no record was rejected; the order of the
/// input is preserved.
pub fn validate_all(raws: &[RawEntry]) -> Result<Vec<VocabularyEntry>, Vec<ContentError>> {
    let mut entries = Vec::with_capacity(raws.len());
    let mut errors = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for raw in raws {
        match validate_entry(raw) {
            Ok(entry) => {
                if let Some(other) = seen.get(&entry.slug) {
                    errors.push(ContentError::Schema(SchemaViolation {
                        path: raw.path.clone(),
                        field: "slug",
                        kind: ViolationKind::DuplicateSlug { other: other.clone() },
                    }));
                    continue;
                }
                seen.insert(entry.slug.clone(), raw.path.clone());
                entries.push(entry);
            }
            Err(violation) => errors.push(ContentError::Schema(violation)),
        }
    }

    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(errors)
    }
}

/// Slug derived from the file stem
pub fn slug_for_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn violation(raw: &RawEntry, field: &'static str, kind: ViolationKind) -> SchemaViolation {
    SchemaViolation {
        path: raw.path.clone(),
        field,
        kind,
    }
}

fn required_text(raw: &RawEntry, field: &'static str) -> Result<String, SchemaViolation> {
    match raw.fields.get(field) {
        None | Some(serde_yaml::Value::Null) => Err(violation(raw, field, ViolationKind::Missing)),
        Some(serde_yaml::Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Err(violation(raw, field, ViolationKind::Empty))
            } else {
                Ok(s.to_string())
            }
        }
        Some(_) => Err(violation(raw, field, ViolationKind::NotText)),
    }
}

fn optional_variant<T: FromStr>(
    raw: &RawEntry,
    field: &'static str,
    allowed: fn() -> Vec<&'static str>,
) -> Result<Option<T>, SchemaViolation> {
    match raw.fields.get(field) {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => s.parse::<T>().map(Some).map_err(|_| {
            violation(
                raw,
                field,
                ViolationKind::InvalidVariant {
                    value: s.clone(),
                    allowed: allowed(),
                },
            )
        }),
        Some(_) => Err(violation(raw, field, ViolationKind::NotText)),
    }
}
