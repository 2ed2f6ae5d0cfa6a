use vocab_lib::content::ContentError;
use vocab_lib::Tone;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Terminal color for a difficulty tone
pub fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => Color::GRAY,
        Tone::Positive => Color::GREEN,
        Tone::Caution => Color::YELLOW,
        Tone::Alert => Color::RED,
    }
}

/// Wrap `text` in `color` when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// One line per content problem
pub fn render_content_errors(errors: &[ContentError], use_color: bool) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", paint("error:", Color::RED, use_color), e))
        .collect::<Vec<_>>()
        .join("\n")
}
