// End-to-end tests: content directory → validation → static site
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vocab_lib::content::{ContentError, ContentStore, ViolationKind};
use vocab_lib::pipeline::{build, check};
use vocab_lib::*;

fn bundled_content() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content/vocabulary")
}

fn config_for(content_dir: PathBuf, temp: &TempDir) -> SiteConfig {
    SiteConfig {
        content_dir,
        output_dir: temp.path().join("dist"),
        ..Default::default()
    }
}

fn write_entry(dir: &Path, name: &str, frontmatter: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), format!("---\n{}\n---\n\nBody text.\n", frontmatter)).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════
// Bundled content
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bundled_content_is_valid() {
    let temp = TempDir::new().unwrap();
    let entries = check(&config_for(bundled_content(), &temp)).unwrap();
    assert_eq!(entries.len(), 6);
}

#[test]
fn test_bundled_content_builds() {
    let temp = TempDir::new().unwrap();
    let config = config_for(bundled_content(), &temp);

    let result = build(&config, None).unwrap();
    assert_eq!(result.page_count, 5);
    assert_eq!(result.entry_count, 6);

    let verbs = fs::read_to_string(config.output_dir.join("categories/verbs.html")).unwrap();
    assert_eq!(verbs.matches("<article").count(), 2);
    assert!(verbs.contains("tone-positive"));
    assert!(verbs.contains("tone-alert"));
}

// ═══════════════════════════════════════════════════════════════════════
// Schema scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_run_entry_is_a_beginner_verb() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");
    write_entry(
        &dir,
        "run.md",
        "word: run\ntranslation: laufen\ncategory: verbs\ndifficulty: beginner",
    );

    let entries = check(&config_for(dir, &temp)).unwrap();
    let verbs = categorize_words(&entries, Category::Verbs);
    assert_eq!(verbs.len(), 1);
    assert_eq!(verbs[0].word, "run");
    assert_eq!(difficulty_color(verbs[0].difficulty), Tone::Positive);
}

#[test]
fn test_missing_translation_fails_build() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");
    write_entry(&dir, "run.md", "word: run\ncategory: verbs");
    let config = config_for(dir, &temp);

    let err = build(&config, None).unwrap_err();
    let problems = err.content_errors();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].field(), Some("translation"));
    assert!(err.to_string().contains("nothing was written"));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_unknown_category_fails_build() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");
    write_entry(&dir, "ich.md", "word: ich\ntranslation: I\ncategory: pronouns");

    let err = build(&config_for(dir, &temp), None).unwrap_err();
    match &err.content_errors()[0] {
        ContentError::Schema(violation) => {
            assert_eq!(violation.field, "category");
            assert!(matches!(violation.kind, ViolationKind::InvalidVariant { .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_absent_difficulty_is_neutral() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");
    write_entry(&dir, "hello.md", "word: hello\ntranslation: hallo");

    let entries = check(&config_for(dir, &temp)).unwrap();
    assert_eq!(entries[0].difficulty, None);
    assert_eq!(difficulty_color(entries[0].difficulty), Tone::Neutral);
}

#[test]
fn test_one_bad_file_blocks_the_rest() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("content");
    write_entry(&dir, "a.md", "word: a\ntranslation: b");
    write_entry(&dir, "b.md", "word: b\ntranslation: c");
    fs::write(dir.join("c.md"), "no frontmatter here").unwrap();

    let err = build(&config_for(dir, &temp), None).unwrap_err();
    assert!(matches!(err, BuildError::InvalidContent(_)));
}

// ═══════════════════════════════════════════════════════════════════════
// Round trip through the store
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_bundled_entries_survive_a_rewrite() {
    let temp = TempDir::new().unwrap();
    let original = ContentStore::new(bundled_content()).load().unwrap();

    let copy = ContentStore::new(temp.path().to_path_buf());
    for entry in &original {
        copy.create_entry(entry).unwrap();
    }

    let mut reloaded = copy.load().unwrap();
    let mut expected = original.clone();
    reloaded.sort_by(|a, b| a.slug.cmp(&b.slug));
    expected.sort_by(|a, b| a.slug.cmp(&b.slug));
    assert_eq!(reloaded, expected);
}
