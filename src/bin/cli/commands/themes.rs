use anyhow::Result;

use vocab_lib::publish::available_themes;

use crate::OutputFormat;

pub fn run(format: &OutputFormat) -> Result<()> {
    let themes = available_themes();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&themes)?);
        }
        OutputFormat::Plain => {
            for name in themes {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
