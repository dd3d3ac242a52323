//! Output format selection.
//!
//! These types carry no CLI dependency, so library users can pick a format
//! from a string or a file extension the same way the binary does.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> love_theorem::Result<()> {
//! use love_theorem::format::{OutputFormat, write_to_format};
//! use love_theorem::{analyze, parse};
//!
//! let result = analyze(&parse(&std::fs::read_to_string("chat.txt")?))?;
//!
//! write_to_format(&result, "score.csv", OutputFormat::Csv)?;
//!
//! let format = OutputFormat::from_path("score.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::error::LoveTheoremError;

/// Output format for an analysis result.
///
/// ```rust
/// use love_theorem::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("text").unwrap();
/// assert_eq!(format, OutputFormat::Text);
/// assert_eq!(format.extension(), "txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Pretty-printed JSON of the full result (default)
    #[default]
    Json,

    /// `Metric;Value` table
    Csv,

    /// Human-readable report
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "text", "txt"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Csv, OutputFormat::Text]
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use love_theorem::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/REPORT.TXT").unwrap(), OutputFormat::Text);
    /// assert!(OutputFormat::from_path("score.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, LoveTheoremError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        if ext == "text" {
            return Ok(OutputFormat::Text);
        }

        Self::all()
            .iter()
            .copied()
            .find(|format| format.extension() == ext)
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::all().iter().map(|f| f.extension()).collect();
                LoveTheoremError::invalid_format(
                    "output",
                    format!(
                        "Unknown file extension: '.{ext}'. Expected one of: {}",
                        expected.join(", ")
                    ),
                )
            })
    }

    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Json => Some("json-output"),
            OutputFormat::Csv => Some("csv-output"),
            OutputFormat::Text => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_disabled(format: OutputFormat) -> LoveTheoremError {
    LoveTheoremError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or("default")
        ),
    )
}

/// Writes a result to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    result: &AnalysisResult,
    path: &str,
    format: OutputFormat,
) -> Result<(), LoveTheoremError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(result, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(result, path),
        OutputFormat::Text => crate::output::write_report(result, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts a result to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    result: &AnalysisResult,
    format: OutputFormat,
) -> Result<String, LoveTheoremError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(result),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(result),
        OutputFormat::Text => Ok(crate::output::to_report(result)),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
