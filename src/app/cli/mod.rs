//! CLI Adapter.

mod generate;
mod input;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api;
use crate::domain::{AppError, Mode, TargetLanguage};

#[derive(Parser)]
#[command(name = "escribe")]
#[command(version)]
#[command(
    about = "Generate real-estate descriptions and translations from editable prompt templates",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to $ESCRIBE_CONFIG, then ./escribe.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a locality for a web page
    #[clap(visible_alias = "loc")]
    Locality {
        /// City name, e.g. Pune
        #[arg(long)]
        city: Option<String>,
        /// Locality within the city, e.g. Baner
        #[arg(long)]
        locality: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Write a listing description from property metadata
    #[clap(visible_alias = "ls")]
    Listing {
        /// Property metadata as free text
        #[arg(long)]
        metadata: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Translate project data into an Indian language
    #[clap(visible_alias = "tr")]
    Translate {
        /// Backend project identifier
        #[arg(long)]
        project_id: Option<String>,
        /// Target language (hindi or marathi)
        #[arg(long, default_value = "hindi", value_parser = parse_language)]
        language: TargetLanguage,
        /// Print the fetched project data before the translation
        #[arg(long)]
        show_data: bool,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the default prompt template for a mode
    #[clap(visible_alias = "tp")]
    Template {
        /// locality, listing or translation
        #[arg(value_parser = parse_mode)]
        mode: Mode,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct CommonArgs {
    /// Edited prompt template to use instead of the default
    #[arg(long)]
    template: Option<PathBuf>,
    /// Copy the generated content to the clipboard
    #[arg(long)]
    copy: bool,
    /// Save the generated content as a file in this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Print the rendered prompt without calling the generation API
    #[arg(long)]
    prompt_preview: bool,
}

impl CommonArgs {
    fn generate_options(&self, config: Option<PathBuf>) -> api::GenerateOptions {
        api::GenerateOptions { config, template: self.template.clone() }
    }

    fn delivery_options(&self) -> api::DeliveryOptions {
        api::DeliveryOptions { copy: self.copy, output_dir: self.output_dir.clone() }
    }
}

fn parse_language(value: &str) -> Result<TargetLanguage, String> {
    value.parse().map_err(|err: AppError| err.to_string())
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    value.parse().map_err(|err: AppError| err.to_string())
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config;

    let result: Result<(), AppError> = match cli.command {
        Commands::Locality { city, locality, common } => {
            generate::run_locality(city, locality, &common, config)
        }
        Commands::Listing { metadata, common } => generate::run_listing(metadata, &common, config),
        Commands::Translate { project_id, language, show_data, common } => {
            generate::run_translate(project_id, language, show_data, &common, config)
        }
        Commands::Template { mode } => run_template(mode),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_template(mode: Mode) -> Result<(), AppError> {
    print!("{}", api::default_template(mode)?);
    Ok(())
}
