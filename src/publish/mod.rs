//! Static site rendering: cards, grid pages and themes

pub mod html;
pub mod site;
pub mod themes;

pub use html::{grid_columns, render_card, render_grid, slugify};
pub use site::{publish_site, category_page_path, ProgressFn, PublishOptions, PublishResult};
pub use themes::{available_themes, get_theme, Theme};
