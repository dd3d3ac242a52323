//! # love-theorem CLI
//!
//! Reads a WhatsApp export, scores it and prints the result.

use std::io::Write;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use love_theorem::cli::Args;
use love_theorem::format::{to_format_string, write_to_format};
use love_theorem::{Analyzer, LoveTheoremError, TranscriptParser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e.user_message());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // stdout carries the result, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), LoveTheoremError> {
    let start = Instant::now();
    let format = args.resolved_format();
    tracing::debug!(input = %args.input, output = ?args.output, %format, "starting");

    let parser = TranscriptParser::with_config(args.parser_config());
    let messages = parser.parse_file(Path::new(&args.input))?;

    let analyzer = Analyzer::with_config(args.analysis_config());
    let result = analyzer.analyze(&messages)?;

    match &args.output {
        Some(path) => {
            write_to_format(&result, path, format)?;
            tracing::info!(path = %path, "result written");
        }
        None => {
            let rendered = to_format_string(&result, format)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    tracing::debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}
