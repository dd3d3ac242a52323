//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - `--format` values, convertible to
//!   [`crate::format::OutputFormat`]

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, MAX_WINDOW_MINUTES, ParserConfig};

/// Score a two-person WhatsApp chat export: reply speed, balance, emoji,
/// streaks and a composite Love Score.
#[derive(Parser, Debug, Clone)]
#[command(name = "love-theorem")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    love-theorem chat.txt
    love-theorem chat.txt -f text
    love-theorem chat.txt -o score.csv
    love-theorem chat.txt --join-continuations --marker \"changed the subject\"
    RUST_LOG=debug love-theorem chat.txt")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Output format [default: from the output extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Append unmatched lines to the previous message (multi-line messages)
    #[arg(long)]
    pub join_continuations: bool,

    /// Extra sender text marking a system notice (repeatable)
    #[arg(long = "marker", value_name = "TEXT")]
    pub markers: Vec<String>,

    /// Silence in minutes that starts a new conversation
    #[arg(
        long,
        value_name = "MINUTES",
        default_value_t = 30,
        value_parser = clap::value_parser!(i64).range(1..=MAX_WINDOW_MINUTES)
    )]
    pub gap: i64,

    /// Log parser and analysis details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser configuration from `--join-continuations` and `--marker`.
    pub fn parser_config(&self) -> ParserConfig {
        self.markers.iter().fold(
            ParserConfig::new().with_join_continuations(self.join_continuations),
            |config, marker| config.with_extra_marker(marker.clone()),
        )
    }

    /// Analysis configuration from `--gap`.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new().with_conversation_gap_minutes(self.gap)
    }

    /// The format to write: `--format` if given, else the output file's
    /// extension, else JSON.
    pub fn resolved_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty JSON of the full result
    #[default]
    Json,

    /// `Metric;Value` table with semicolon delimiter
    Csv,

    /// Human-readable report
    #[value(alias = "txt")]
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Text => crate::format::OutputFormat::Text,
        }
    }
}
