//! Generation commands: collect input, run the pipeline, deliver the output.

use std::path::PathBuf;

use super::CommonArgs;
use super::input::require;
use crate::app::api::{self, Generated, Submission};
use crate::app::commands::PreparedRequest;
use crate::domain::{AppError, TargetLanguage};
use crate::ports::NoopClipboard;
use crate::services::ArboardClipboard;

pub fn run_locality(
    city: Option<String>,
    locality: Option<String>,
    common: &CommonArgs,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let Some(city) = require(city, "City")? else {
        return Ok(());
    };
    let Some(locality) = require(locality, "Locality")? else {
        return Ok(());
    };

    run_submission(&Submission::Locality { city, locality }, common, config, false)
}

pub fn run_listing(
    metadata: Option<String>,
    common: &CommonArgs,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let Some(metadata) = require(metadata, "Property metadata")? else {
        return Ok(());
    };

    run_submission(&Submission::Listing { metadata }, common, config, false)
}

pub fn run_translate(
    project_id: Option<String>,
    language: TargetLanguage,
    show_data: bool,
    common: &CommonArgs,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let Some(project_id) = require(project_id, "Project ID")? else {
        return Ok(());
    };

    run_submission(&Submission::Translation { project_id, language }, common, config, show_data)
}

fn run_submission(
    submission: &Submission,
    common: &CommonArgs,
    config: Option<PathBuf>,
    show_data: bool,
) -> Result<(), AppError> {
    let prepared = api::prepare(submission, &common.generate_options(config))?;
    if show_data {
        print_source_data(prepared.request().source_data());
    }

    if common.prompt_preview {
        print_preview(prepared.request());
        return Ok(());
    }

    let generated = prepared.send()?;
    println!("{}", generated.content);
    deliver(&generated, common)
}

fn deliver(generated: &Generated, common: &CommonArgs) -> Result<(), AppError> {
    let options = common.delivery_options();
    let saved = if options.copy {
        let mut clipboard = ArboardClipboard::open()?;
        let saved = api::deliver(generated, &options, &mut clipboard)?;
        eprintln!("✅ Copied {} content to clipboard", generated.mode);
        saved
    } else {
        api::deliver(generated, &options, &mut NoopClipboard)?
    };

    if let Some(path) = saved {
        eprintln!("✅ Saved {} ({})", path.display(), generated.artifact.mime_type);
    }
    Ok(())
}

fn print_preview(prepared: &PreparedRequest) {
    let request = prepared.request();
    println!("# mode: {}", request.mode);
    println!("# max_output_tokens: {}", request.max_output_tokens);
    println!("# temperature: {}", request.temperature);
    println!("# search: {}", if request.tools_enabled { "enabled" } else { "disabled" });
    if let Some(instruction) = &request.system_instruction {
        println!("# system_instruction: {}", instruction);
    }
    println!();
    println!("{}", request.rendered_prompt);
}

fn print_source_data(data: Option<&serde_json::Value>) {
    if let Some(data) = data {
        let text = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        println!("{}", text);
        println!();
    }
}
