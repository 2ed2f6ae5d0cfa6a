use anyhow::Result;

use vocab_lib::query::{categorize_words, filter_by_difficulty};
use vocab_lib::{difficulty_color, Category, Difficulty, VocabularyEntry};

use crate::app::App;
use crate::commands::check::report_failure;
use crate::render::terminal::{paint, tone_color, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    category: Option<Category>,
    difficulty: Option<Difficulty>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let entries = match app.load_entries() {
        Ok(entries) => entries,
        Err(err) => {
            report_failure(&err, format, use_color)?;
            return Err(err.into());
        }
    };

    let mut selected: Vec<&VocabularyEntry> = match category {
        Some(c) => categorize_words(&entries, c),
        None => entries.iter().collect(),
    };
    if let Some(d) = difficulty {
        let keep = filter_by_difficulty(&entries, d);
        selected.retain(|e| keep.iter().any(|k| k.slug == e.slug));
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = selected
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "slug": e.slug,
                        "word": e.word,
                        "translation": e.translation,
                        "category": e.category,
                        "difficulty": e.difficulty,
                        "tone": difficulty_color(e.difficulty),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if selected.is_empty() {
                println!("No entries found.");
                return Ok(());
            }

            let max_word_len = selected
                .iter()
                .map(|e| e.word.chars().count())
                .max()
                .unwrap_or(4)
                .max(4);

            for e in &selected {
                let tone = difficulty_color(e.difficulty);
                let level = e.difficulty.map(|d| d.as_str()).unwrap_or("-");
                let category = e.category.map(|c| c.as_str()).unwrap_or("-");
                let padding = " ".repeat(max_word_len - e.word.chars().count());

                println!(
                    "{}{}  {} {:<10} {}",
                    paint(&e.word, Color::BOLD, use_color),
                    padding,
                    paint(&format!("{:<12}", level), tone_color(tone), use_color),
                    category,
                    e.translation
                );
            }

            println!("\n{} entries", selected.len());
        }
    }

    Ok(())
}
