mod app;
mod commands;
mod styled;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lesson_markup_config::Config;
use lesson_markup_engine::{classify, read_lesson, render::html::render_lesson_html, scan};
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "lesson-markup", about = "Parse and view lesson bullet markup")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether a bullet is a code sample or prose
    Classify { bullet: String },
    /// Split prose into plain, code and bold segments
    Scan { text: String },
    /// Print a lesson file as an HTML fragment
    Html { file: Option<PathBuf> },
    /// Browse a lesson file in the terminal
    View { file: Option<PathBuf> },
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    match args.command {
        Command::Classify { bullet } => {
            println!("{}", commands::describe_classified(&classify(&bullet)));
        }
        Command::Scan { text } => {
            let out = commands::describe_segments(&scan(&text));
            if !out.is_empty() {
                println!("{out}");
            }
        }
        Command::Html { file } => {
            let lesson = read_lesson(&resolve_lesson_path(file))?;
            print!("{}", render_lesson_html(&lesson));
        }
        Command::View { file } => {
            let lesson = read_lesson(&resolve_lesson_path(file))?;
            app::run(lesson)?;
        }
    }

    Ok(())
}

/// Uses the given path, falling back to the config file's `lesson_path`.
///
/// Exits with usage when neither is available.
fn resolve_lesson_path(file: Option<PathBuf>) -> PathBuf {
    if let Some(file) = file {
        return file;
    }

    let config_path = Config::config_path();
    match Config::load() {
        Ok(Some(config)) => {
            log::info!(
                "Using lesson {} from config file {}",
                config.lesson_path.display(),
                config_path.display()
            );
            config.lesson_path
        }
        Ok(None) => {
            eprintln!("Error: No lesson file provided and no config file found");
            eprintln!("Usage: lesson-markup <html|view> <lesson-file>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: lesson-markup <html|view> <lesson-file>");
            process::exit(1);
        }
    }
}
