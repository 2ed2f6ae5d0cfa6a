mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use vocab_lib::config::DEFAULT_CONFIG_FILE;
use vocab_lib::{Category, Difficulty};

#[derive(Parser)]
#[command(name = "vocab-cli", about = "Build and check a vocabulary flashcard site", version)]
struct Cli {
    /// Path to the site config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Validate all entries and write the static site
    Build {
        /// Output directory (overrides the config)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Theme name (overrides the config)
        #[arg(long)]
        theme: Option<String>,
    },

    /// Validate all entries without writing anything
    Check,

    /// List entries
    List {
        /// Only entries in this category
        #[arg(long)]
        category: Option<Category>,
        /// Only entries with this difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Create a new entry file in the content directory
    New {
        /// The word being taught
        word: String,
        /// Its translation
        translation: String,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
        /// Usage notes (markdown)
        #[arg(long)]
        notes: Option<String>,
    },

    /// List available themes
    Themes,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    match cli.command {
        Command::Build { out, theme } => {
            let app = app::App::new(&cli.config, out, theme)?;
            commands::build::run(&app, &cli.format, use_color)?;
        }
        Command::Check => {
            let app = app::App::new(&cli.config, None, None)?;
            commands::check::run(&app, &cli.format, use_color)?;
        }
        Command::List { category, difficulty } => {
            let app = app::App::new(&cli.config, None, None)?;
            commands::list::run(&app, category, difficulty, &cli.format, use_color)?;
        }
        Command::New {
            word,
            translation,
            category,
            difficulty,
            example,
            notes,
        } => {
            let app = app::App::new(&cli.config, None, None)?;
            let new = vocab_lib::pipeline::NewEntry {
                word,
                translation,
                category,
                difficulty,
                example,
                notes,
            };
            commands::new::run(&app, &new, &cli.format, use_color)?;
        }
        Command::Themes => {
            commands::themes::run(&cli.format)?;
        }
    }

    Ok(())
}
