use anyhow::Result;

use vocab_lib::pipeline::{self, NewEntry};

use crate::app::App;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, new: &NewEntry, format: &OutputFormat, use_color: bool) -> Result<()> {
    let path = pipeline::create_entry(&app.config, new)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path.to_string_lossy(),
                "word": new.word.trim(),
                "translation": new.translation.trim(),
                "category": new.category,
                "difficulty": new.difficulty,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} \"{}\" at {}",
                paint("created", Color::GREEN, use_color),
                new.word.trim(),
                path.display()
            );
            if let Some(category) = new.category {
                println!("  Category: {}", category);
            }
            if let Some(difficulty) = new.difficulty {
                println!("  Difficulty: {}", difficulty);
            }
        }
    }

    Ok(())
}
