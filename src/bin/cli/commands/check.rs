use anyhow::Result;

use vocab_lib::query::{count_by_category, count_uncategorized};
use vocab_lib::BuildError;

use crate::app::App;
use crate::render::terminal::{paint, render_content_errors, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let entries = match app.load_entries() {
        Ok(entries) => entries,
        Err(err) => {
            report_failure(&err, format, use_color)?;
            return Err(err.into());
        }
    };

    match format {
        OutputFormat::Json => {
            let categories: serde_json::Map<String, serde_json::Value> = count_by_category(&entries)
                .into_iter()
                .map(|(c, n)| (c.to_string(), serde_json::json!(n)))
                .collect();
            let output = serde_json::json!({
                "valid": true,
                "entryCount": entries.len(),
                "categories": categories,
                "uncategorized": count_uncategorized(&entries),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} {} entries in {}",
                paint("ok:", Color::GREEN, use_color),
                entries.len(),
                app.config.content_dir.display()
            );
        }
    }

    Ok(())
}

/// Print every content problem of a failed check or build
pub fn report_failure(err: &BuildError, format: &OutputFormat, use_color: bool) -> Result<()> {
    let problems = err.content_errors();
    if problems.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = problems
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "field": e.field(),
                        "message": e.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            eprintln!("{}", render_content_errors(problems, use_color));
        }
    }

    Ok(())
}
