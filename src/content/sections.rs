//! Extracting the example sentence and usage notes from an entry body

use std::ops::Range;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

const EXAMPLE_HEADINGS: [&str; 4] = ["example", "examples", "example usage", "example sentence"];
const NOTES_HEADINGS: [&str; 3] = ["notes", "note", "usage notes"];

/// The conventional sections of an entry body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySections {
    /// Plain text of the example sentence
    pub example: Option<String>,
    /// Markdown of the notes section
    pub notes: Option<String>,
}

struct Heading {
    level: usize,
    text: String,
    range: Range<usize>,
}

/// Split a markdown body into its example and notes sections.
///
/// The example is the first paragraph under an "Example" heading, or the
/// first paragraph that precedes any heading when there is none.
pub fn extract_sections(body: &str) -> EntrySections {
    let headings = collect_headings(body);

    let example = section_markdown(body, &headings, &EXAMPLE_HEADINGS)
        .and_then(first_paragraph)
        .or_else(|| {
            let lead_end = headings.first().map(|h| h.range.start).unwrap_or(body.len());
            first_paragraph(&body[..lead_end])
        });

    let notes = section_markdown(body, &headings, &NOTES_HEADINGS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    EntrySections { example, notes }
}

fn collect_headings(body: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<Heading> = None;

    for (event, range) in Parser::new(body).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some(Heading {
                    level: level as usize,
                    text: String::new(),
                    range,
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    headings.push(heading);
                }
            }
            _ => {}
        }
    }

    headings
}

/// Markdown between a matching heading and the next heading of the same or higher rank
fn section_markdown<'a>(body: &'a str, headings: &[Heading], names: &[&str]) -> Option<&'a str> {
    let idx = headings
        .iter()
        .position(|h| names.contains(&h.text.trim().to_lowercase().as_str()))?;
    let heading = &headings[idx];

    let end = headings[idx + 1..]
        .iter()
        .find(|h| h.level <= heading.level)
        .map(|h| h.range.start)
        .unwrap_or(body.len());

    Some(&body[heading.range.end..end])
}

/// Plain text of the first paragraph in a markdown fragment
fn first_paragraph(markdown: &str) -> Option<String> {
    let mut text = String::new();
    let mut in_paragraph = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                text.clear();
                in_paragraph = false;
            }
            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_example_and_notes() {
        let body = r#"## Example

*Ich* laufe jeden Morgen.

## Notes

Irregular in the present tense: **läufst**, **läuft**.

### Related

rennen
"#;
        let sections = extract_sections(body);
        assert_eq!(sections.example.as_deref(), Some("Ich laufe jeden Morgen."));

        let notes = sections.notes.unwrap();
        assert!(notes.starts_with("Irregular"));
        assert!(notes.contains("### Related"));
    }

    #[test]
    fn test_notes_end_at_next_sibling_heading() {
        let body = "## Notes\n\nFirst.\n\n## Example\n\nSecond.\n";
        let sections = extract_sections(body);
        assert_eq!(sections.notes.as_deref(), Some("First."));
        assert_eq!(sections.example.as_deref(), Some("Second."));
    }

    #[test]
    fn test_example_falls_back_to_leading_paragraph() {
        let sections = extract_sections("The dog runs.\n\n## Notes\n\nCommon verb.");
        assert_eq!(sections.example.as_deref(), Some("The dog runs."));
        assert_eq!(sections.notes.as_deref(), Some("Common verb."));
    }

    #[test]
    fn test_notes_only_body_has_no_example() {
        let sections = extract_sections("## Notes\n\nCommon verb.");
        assert_eq!(sections.example, None);
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let sections = extract_sections("# EXAMPLE USAGE\n\nline one\nline two");
        assert_eq!(sections.example.as_deref(), Some("line one line two"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_sections(""), EntrySections::default());
    }
}
