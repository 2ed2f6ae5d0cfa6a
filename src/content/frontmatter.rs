//! Splitting content files into YAML frontmatter and markdown body

use std::path::Path;

use super::errors::{ContentError, ContentResult};
use super::models::VocabularyEntry;

const DELIMITER: &str = "---";

/// Split a content file into its frontmatter mapping and trimmed body.
///
/// The file must open with a `---` line and the block must be closed by a
/// second `---` line. An empty block yields an empty mapping.
pub fn split_frontmatter(
    path: &Path,
    content: &str,
) -> ContentResult<(serde_yaml::Mapping, String)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = match lines.next() {
        Some(line) if line.trim_end() == DELIMITER => line,
        _ => return Err(ContentError::MissingFrontmatter(path.to_path_buf())),
    };

    let mut offset = first.len();
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &content[first.len()..offset];
            let body = &content[offset + line.len()..];
            let fields = parse_mapping(path, yaml)?;
            return Ok((fields, body.trim().to_string()));
        }
        offset += line.len();
    }

    Err(ContentError::UnterminatedFrontmatter(path.to_path_buf()))
}

fn parse_mapping(path: &Path, yaml: &str) -> ContentResult<serde_yaml::Mapping> {
    if yaml.trim().is_empty() {
        return Ok(serde_yaml::Mapping::new());
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    match value {
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        serde_yaml::Value::Null => Ok(serde_yaml::Mapping::new()),
        _ => Err(ContentError::NotAMapping(path.to_path_buf())),
    }
}

/// Serialize an entry back into the on-disk file format
pub fn format_entry_file(entry: &VocabularyEntry) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(&entry.frontmatter())?;

    let mut output = String::new();
    output.push_str(DELIMITER);
    output.push('\n');
    output.push_str(&yaml);
    if !yaml.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(DELIMITER);
    output.push('\n');

    if !entry.body.is_empty() {
        output.push('\n');
        output.push_str(&entry.body);
        output.push('\n');
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let content = r#"---
word: "run"
translation: laufen
category: verbs
---

## Example

I run every morning.
"#;
        let (fields, body) = split_frontmatter(Path::new("run.md"), content).unwrap();

        assert_eq!(fields.get("word").and_then(|v| v.as_str()), Some("run"));
        assert_eq!(fields.get("translation").and_then(|v| v.as_str()), Some("laufen"));
        assert!(body.starts_with("## Example"));
        assert!(body.ends_with("morning."));
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let content = "---\r\nword: run\r\ntranslation: laufen\r\n---\r\nBody\r\n";
        let (fields, body) = split_frontmatter(Path::new("run.md"), content).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_frontmatter_missing() {
        let err = split_frontmatter(Path::new("plain.md"), "# Just markdown\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter(_)));
    }

    #[test]
    fn test_split_frontmatter_unterminated() {
        let err = split_frontmatter(Path::new("open.md"), "---\nword: run\n").unwrap_err();
        assert!(matches!(err, ContentError::UnterminatedFrontmatter(_)));
    }

    #[test]
    fn test_split_frontmatter_not_a_mapping() {
        let err = split_frontmatter(Path::new("list.md"), "---\n- run\n- walk\n---\n").unwrap_err();
        assert!(matches!(err, ContentError::NotAMapping(_)));
    }

    #[test]
    fn test_split_frontmatter_empty_block() {
        let (fields, body) = split_frontmatter(Path::new("empty.md"), "---\n---\ntext").unwrap();
        assert!(fields.is_empty());
        assert_eq!(body, "text");
    }

    #[test]
    fn test_split_frontmatter_invalid_yaml() {
        let err =
            split_frontmatter(Path::new("bad.md"), "---\nword: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, ContentError::Yaml { .. }));
    }

    #[test]
    fn test_format_entry_file_without_body() {
        let entry = VocabularyEntry {
            slug: "run".to_string(),
            word: "run".to_string(),
            translation: "laufen".to_string(),
            category: None,
            difficulty: None,
            body: String::new(),
        };
        let file = format_entry_file(&entry).unwrap();
        assert_eq!(file, "---\nword: run\ntranslation: laufen\n---\n");
    }
}
