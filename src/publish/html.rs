use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, Event, Options, Parser};
use regex::Regex;

use crate::content::{extract_sections, VocabularyEntry};
use crate::query::difficulty_color;

/// Viewport width (px) from which the card grid shows two columns
pub const MEDIUM_MIN_WIDTH: u32 = 768;
/// Viewport width (px) from which the card grid shows three columns
pub const WIDE_MIN_WIDTH: u32 = 1024;

/// Number of grid columns the stylesheet lays cards out in at `viewport_width`.
pub fn grid_columns(viewport_width: u32) -> usize {
    if viewport_width >= WIDE_MIN_WIDTH {
        3
    } else if viewport_width >= MEDIUM_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Render one entry as a card.
pub fn render_card(entry: &VocabularyEntry, include_notes: bool) -> String {
    let tone = difficulty_color(entry.difficulty);
    let sections = extract_sections(&entry.body);

    let mut html = format!(
        "<article class=\"word-card {}\" id=\"{}\"",
        tone.css_class(),
        encode_double_quoted_attribute(&entry.slug)
    );
    if let Some(category) = entry.category {
        html.push_str(&format!(" data-category=\"{}\"", category));
    }
    if let Some(difficulty) = entry.difficulty {
        html.push_str(&format!(" data-difficulty=\"{}\"", difficulty));
    }
    html.push_str(">\n");

    html.push_str("  <header class=\"word-card-header\">\n");
    html.push_str(&format!("    <h2 class=\"word\">{}</h2>\n", encode_text(&entry.word)));
    if let Some(difficulty) = entry.difficulty {
        html.push_str(&format!(
            "    <span class=\"badge {}\">{}</span>\n",
            tone.css_class(),
            difficulty
        ));
    }
    html.push_str("  </header>\n");

    html.push_str(&format!(
        "  <p class=\"translation\">{}</p>\n",
        encode_text(&entry.translation)
    ));

    if let Some(example) = &sections.example {
        html.push_str(&format!(
            "  <blockquote class=\"example\">{}</blockquote>\n",
            encode_text(example)
        ));
    }

    if include_notes {
        if let Some(notes) = &sections.notes {
            html.push_str(&format!(
                "  <div class=\"notes\">\n{}  </div>\n",
                markdown_to_html(notes)
            ));
        }
    }

    if let Some(category) = entry.category {
        html.push_str(&format!(
            "  <span class=\"category-tag\">{}</span>\n",
            category.label()
        ));
    }

    html.push_str("</article>");
    html
}

/// Render entries as a responsive card grid.
pub fn render_grid(entries: &[&VocabularyEntry], include_notes: bool) -> String {
    if entries.is_empty() {
        return "<p class=\"empty-state\">No words here yet.</p>".to_string();
    }

    let mut html = String::from("<section class=\"card-grid\">\n");
    for entry in entries {
        html.push_str(&render_card(entry, include_notes));
        html.push('\n');
    }
    html.push_str("</section>");
    html
}

/// Render a markdown fragment to HTML. Raw HTML in the source is escaped.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Create a URL-safe slug from a text string.
pub fn slugify(text: &str) -> String {
    let stripped = Regex::new(r"<[^>]+>")
        .map(|re| re.replace_all(text, "").to_string())
        .unwrap_or_else(|_| text.to_string());

    stripped
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
