use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use html_escape::encode_text;

use crate::content::{Category, Difficulty, VocabularyEntry};
use crate::error::{BuildError, BuildResult};
use crate::query::{categorize_words, count_by_category, difficulty_color};

use super::html::render_grid;
use super::themes::{get_theme, Theme};

const CATEGORY_DIR: &str = "categories";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
    pub site_title: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub include_notes: bool,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            site_title: "Vocabulary".to_string(),
            theme: default_theme(),
            include_notes: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    pub output_dir: String,
    pub page_count: usize,
    pub entry_count: usize,
}

/// Progress callback type used during publishing.
pub type ProgressFn = Box<dyn Fn(usize, usize, &str) + Send>;

/// Page file name for a category, relative to the output directory
pub fn category_page_path(category: Category) -> String {
    format!("{}/{}.html", CATEGORY_DIR, category)
}

/// Publish validated entries as a static site.
///
/// Writes `style.css`, `index.html` with every entry, and one page per
/// category under `categories/`.
pub fn publish_site(
    entries: &[VocabularyEntry],
    output_dir: &Path,
    options: &PublishOptions,
    progress: Option<&ProgressFn>,
) -> BuildResult<PublishResult> {
    let theme = get_theme(&options.theme);
    log::info!(
        "Publishing {} entries to {} with theme '{}'",
        entries.len(),
        output_dir.display(),
        theme.name
    );

    create_dir(output_dir)?;
    create_dir(&output_dir.join(CATEGORY_DIR))?;

    let total = Category::ALL.len() + 2; // +2 for index.html + style.css
    let mut current = 0;
    let date = Utc::now().format("%B %d, %Y").to_string();

    // Write style.css
    if let Some(cb) = progress {
        cb(current, total, "Writing style.css");
    }
    write_file(&output_dir.join("style.css"), &theme.css())?;
    current += 1;

    // Write index.html
    if let Some(cb) = progress {
        cb(current, total, "Writing index.html");
    }
    let all: Vec<&VocabularyEntry> = entries.iter().collect();
    let index_content = format!(
        "{}\n{}",
        build_legend_html(),
        render_grid(&all, options.include_notes)
    );
    let index_html = render_page(&theme, entries, options, "All words", "", &index_content, &date);
    write_file(&output_dir.join("index.html"), &index_html)?;
    current += 1;

    let mut page_count = 1;

    // One page per category
    for category in Category::ALL {
        if let Some(cb) = progress {
            cb(current, total, &format!("Rendering {}", category.label()));
        }

        let matched = categorize_words(entries, category);
        log::debug!("{}: {} entries", category, matched.len());

        let content = render_grid(&matched, options.include_notes);
        let page_html =
            render_page(&theme, entries, options, category.label(), "../", &content, &date);
        write_file(&output_dir.join(category_page_path(category)), &page_html)?;

        page_count += 1;
        current += 1;
    }

    Ok(PublishResult {
        output_dir: output_dir.to_string_lossy().to_string(),
        page_count,
        entry_count: entries.len(),
    })
}

// ---------------------------------------------------------------------------
// Internal
// ---------------------------------------------------------------------------

fn render_page(
    theme: &Theme,
    entries: &[VocabularyEntry],
    options: &PublishOptions,
    page_title: &str,
    root: &str,
    content: &str,
    date: &str,
) -> String {
    let nav_html = build_nav_html(entries, root);
    let site_title = encode_text(&options.site_title);
    let page_title = encode_text(page_title);

    fill_template(theme.page_template, |name| match name {
        "nav" => Some(nav_html.as_str()),
        "root" => Some(root),
        "site_title" => Some(&*site_title),
        "page_title" => Some(&*page_title),
        "date" => Some(date),
        "content" => Some(content),
        _ => None,
    })
}

/// Replace `{{name}}` placeholders in one pass.
///
/// Substituted values are never scanned again, so placeholder-like text in
/// titles or entries stays literal. Unknown placeholders are kept as is.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => match lookup(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            },
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Category navigation with entry counts
fn build_nav_html(entries: &[VocabularyEntry], root: &str) -> String {
    let mut html = format!(
        "        <li><a href=\"{}index.html\">All <span class=\"count\">{}</span></a></li>\n",
        root,
        entries.len()
    );

    for (category, count) in count_by_category(entries) {
        html.push_str(&format!(
            "        <li><a href=\"{root}{path}\">{label} \
             <span class=\"count\">{count}</span></a></li>\n",
            root = root,
            path = category_page_path(category),
            label = category.label(),
            count = count
        ));
    }

    html.trim_end().to_string()
}

/// Legend explaining the difficulty colors
fn build_legend_html() -> String {
    let mut html = String::from("<ul class=\"legend\">\n");
    for difficulty in Difficulty::ALL {
        html.push_str(&format!(
            "  <li><span class=\"badge {}\">{}</span></li>\n",
            difficulty_color(Some(difficulty)).css_class(),
            difficulty
        ));
    }
    html.push_str(&format!(
        "  <li><span class=\"badge {}\">unrated</span></li>\n",
        difficulty_color(None).css_class()
    ));
    html.push_str("</ul>");
    html
}

fn create_dir(path: &Path) -> BuildResult<()> {
    fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> BuildResult<()> {
    fs::write(path, content).map_err(|source| BuildError::Io {
        path: PathBuf::from(path),
        source,
    })
}
