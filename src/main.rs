use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use textgrab::batch::{self, BatchReport, SkipReason};
use textgrab::config::{CommonArgs, Config};
use textgrab::engines::TesseractEngine;

#[derive(Parser, Debug)]
#[command(name = "textgrab")]
#[command(about = "Extract text from every image in a directory with Tesseract OCR")]
#[command(version)]
struct Args {
    /// Directory containing images; prompted for on stdin when omitted
    directory: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    textgrab::init_tracing(&args.common.log_level);

    let config = Config::from(args.common);
    let engine = TesseractEngine::new(&config);

    if !engine.is_available() {
        // Nothing works without the engine. The message goes to stdout like
        // every other user-facing line of this variant.
        println!("Error: Tesseract is not installed or not in the system PATH.");
        return Ok(ExitCode::FAILURE);
    }

    let directory = match args.directory {
        Some(directory) => directory,
        None => prompt_for_directory()?,
    };

    let report = batch::process_directory(&engine, &directory, &config.language);
    print_report(&report);

    Ok(ExitCode::SUCCESS)
}

/// Read the target directory from stdin, interactive-style.
fn prompt_for_directory() -> anyhow::Result<PathBuf> {
    print!("Enter the path to the directory containing images: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Render a finished batch: per-file notices first, in encounter order,
/// then the directory fault if any, then the result blocks or the
/// nothing-extracted summary. A failed file gets two lines, the error and
/// the notice, because failure and "no text" both leave the mapping bare.
fn print_report(report: &BatchReport) {
    for skip in &report.skipped {
        if let SkipReason::Failed(err) = &skip.reason {
            println!("{}", err);
        }
        println!("No text extracted from {}", skip.filename);
    }

    if let Some(err) = &report.error {
        println!("{}", err);
    }

    if report.is_empty() {
        println!("No text was extracted from any images in the specified directory.");
        return;
    }

    println!("\nExtracted text from images:");
    for (filename, text) in &report.extracted {
        println!("\nFilename: {}", filename);
        println!("Extracted text:");
        println!("{}", text);
        println!("{}", "-".repeat(50));
    }
}
