use serde::Serialize;

use super::html::{MEDIUM_MIN_WIDTH, WIDE_MIN_WIDTH};

#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub page_template: &'static str,
    pub palette: &'static str,
}

impl Theme {
    /// Full stylesheet: shared layout rules followed by the theme palette
    pub fn css(&self) -> String {
        format!("{}\n{}", layout_css(), self.palette)
    }
}

pub fn get_theme(name: &str) -> Theme {
    match name {
        "dark" => theme_dark(),
        "light" => theme_light(),
        other => {
            log::warn!("Unknown theme '{}', using light", other);
            theme_light()
        }
    }
}

pub fn available_themes() -> Vec<&'static str> {
    vec!["light", "dark"]
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{page_title}} | {{site_title}}</title>
  <link rel="stylesheet" href="{{root}}style.css">
</head>
<body>
  <header class="site-header">
    <a href="{{root}}index.html" class="site-name">{{site_title}}</a>
    <nav class="category-nav">
      <ul>
{{nav}}
      </ul>
    </nav>
  </header>
  <main>
    <h1 class="page-heading">{{page_title}}</h1>
{{content}}
  </main>
  <footer class="site-footer">Built {{date}}</footer>
</body>
</html>"#;

/// Layout rules shared by every theme. Column count follows the viewport
/// width only: one column, two from the medium breakpoint, three from wide.
fn layout_css() -> String {
    format!(
        r#"*, *::before, *::after {{ box-sizing: border-box; margin: 0; padding: 0; }}
body {{
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
  line-height: 1.6;
  max-width: 1200px;
  margin: 0 auto;
  padding: 1.5rem 1rem;
}}
.site-header {{ display: flex; flex-wrap: wrap; align-items: baseline; gap: 1rem; margin-bottom: 2rem; }}
.site-name {{ text-decoration: none; font-weight: 700; font-size: 1.2rem; }}
.category-nav ul {{ list-style: none; display: flex; flex-wrap: wrap; gap: 0.75rem; }}
.category-nav a {{ text-decoration: none; }}
.category-nav .count {{ font-size: 0.8rem; opacity: 0.7; }}
.page-heading {{ font-size: 2rem; margin-bottom: 1.5rem; line-height: 1.2; }}
.legend {{ list-style: none; display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }}
.card-grid {{ display: grid; grid-template-columns: repeat(1, minmax(0, 1fr)); gap: 1rem; }}
@media (min-width: {medium}px) {{
  .card-grid {{ grid-template-columns: repeat(2, minmax(0, 1fr)); }}
}}
@media (min-width: {wide}px) {{
  .card-grid {{ grid-template-columns: repeat(3, minmax(0, 1fr)); }}
}}
.word-card {{ border-radius: 8px; padding: 1.25rem; border-top: 4px solid transparent; }}
.word-card-header {{ display: flex; justify-content: space-between; align-items: baseline; gap: 0.5rem; }}
.word {{ font-size: 1.4rem; }}
.translation {{ font-size: 1.05rem; margin-top: 0.25rem; }}
.badge {{ display: inline-block; font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 999px; white-space: nowrap; }}
.category-tag {{ display: inline-block; font-size: 0.75rem; margin-top: 0.5rem; text-transform: uppercase; letter-spacing: 0.05em; }}
.example {{ margin-top: 0.75rem; padding-left: 0.75rem; font-style: italic; }}
.notes {{ margin-top: 0.75rem; font-size: 0.9rem; }}
.notes > * + * {{ margin-top: 0.5rem; }}
.empty-state {{ font-style: italic; }}
.site-footer {{ margin-top: 3rem; font-size: 0.8rem; opacity: 0.7; }}
"#,
        medium = MEDIUM_MIN_WIDTH,
        wide = WIDE_MIN_WIDTH,
    )
}

// ---------------------------------------------------------------------------
// Light Theme
// ---------------------------------------------------------------------------
fn theme_light() -> Theme {
    Theme {
        name: "light",
        page_template: PAGE_TEMPLATE,
        palette: r#"body { color: #1f2328; background: #f6f8fa; }
a, .site-name { color: #0969da; }
.word-card { background: #fff; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12); }
.translation, .notes { color: #57606a; }
.example { border-left: 3px solid #d0d7de; color: #424a53; }
.category-tag { color: #6e7781; }
.empty-state { color: #6e7781; }
.tone-neutral.word-card { border-top-color: #afb8c1; }
.tone-positive.word-card { border-top-color: #1a7f37; }
.tone-caution.word-card { border-top-color: #bf8700; }
.tone-alert.word-card { border-top-color: #cf222e; }
.badge.tone-neutral { background: #eaeef2; color: #424a53; }
.badge.tone-positive { background: #dafbe1; color: #1a7f37; }
.badge.tone-caution { background: #fff8c5; color: #7d4e00; }
.badge.tone-alert { background: #ffebe9; color: #cf222e; }
"#,
    }
}

// ---------------------------------------------------------------------------
// Dark Theme
// ---------------------------------------------------------------------------
fn theme_dark() -> Theme {
    Theme {
        name: "dark",
        page_template: PAGE_TEMPLATE,
        palette: r#"body { color: #e6edf3; background: #0d1117; }
a, .site-name { color: #58a6ff; }
.word-card { background: #161b22; border: 1px solid #30363d; }
.translation, .notes { color: #9da7b3; }
.example { border-left: 3px solid #30363d; color: #c9d1d9; }
.category-tag { color: #8b949e; }
.empty-state { color: #8b949e; }
.tone-neutral.word-card { border-top-color: #6e7681; }
.tone-positive.word-card { border-top-color: #3fb950; }
.tone-caution.word-card { border-top-color: #d29922; }
.tone-alert.word-card { border-top-color: #f85149; }
.badge.tone-neutral { background: #21262d; color: #c9d1d9; }
.badge.tone-positive { background: #12261e; color: #3fb950; }
.badge.tone-caution { background: #272115; color: #d29922; }
.badge.tone-alert { background: #25171c; color: #f85149; }
"#,
    }
}
