use anyhow::Result;

use vocab_lib::pipeline;
use vocab_lib::publish::ProgressFn;

use crate::app::App;
use crate::commands::check::report_failure;
use crate::render::terminal::{paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let progress: ProgressFn = Box::new(|current: usize, total: usize, step: &str| {
        log::debug!("[{}/{}] {}", current + 1, total, step);
    });

    let result = match pipeline::build(&app.config, Some(&progress)) {
        Ok(result) => result,
        Err(err) => {
            report_failure(&err, format, use_color)?;
            return Err(err.into());
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Plain => {
            println!(
                "{} {} pages for {} entries in {}",
                paint("built", Color::GREEN, use_color),
                result.page_count,
                result.entry_count,
                result.output_dir
            );
        }
    }

    Ok(())
}
