//! # Love Theorem
//!
//! Parse an exported two-person WhatsApp chat and score it.
//!
//! ## Overview
//!
//! The crate has two pure stages:
//! - **Parsing** turns the raw `.txt` export into an ordered `Vec<`[`Message`]`>`.
//!   Lines that don't fit the `D/M/YYYY, H:MM[ am|pm] - Sender: text` grammar,
//!   system notices and impossible dates are dropped; parsing never fails.
//! - **Analysis** measures reply speed, message balance, emoji use, keyword
//!   sentiment, daily consistency, conversations and streaks, then folds four
//!   of them into a 0–100 Love Score with a fixed tier table.
//!
//! ## Quick Start
//!
//! ```rust
//! use love_theorem::prelude::*;
//!
//! let text = "\
//! 14/2/2024, 9:00 am - Alice: happy valentine's ❤️
//! 14/2/2024, 9:01 am - Bob: you too! 🥰
//! 14/2/2024, 9:02 am - Alice: dinner at 8?
//! 14/2/2024, 9:03 am - Bob: perfect";
//!
//! let messages = parse(text);
//! let result = analyze(&messages)?;
//!
//! assert_eq!(result.participants, ["Alice".to_string(), "Bob".to_string()]);
//! assert_eq!(result.score.reply, 25);
//! assert!(result.love_score() <= 100);
//! # Ok::<(), LoveTheoremError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`], [`ParseStats`], [`parse`]
//! - [`parsing`] - line grammar and timestamp construction
//! - [`analysis`] - [`Analyzer`], [`analyze`], [`AnalysisResult`] and its parts
//! - [`config`] - [`ParserConfig`], [`AnalysisConfig`]
//! - [`output`] - JSON, CSV and text report writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`error`] - [`LoveTheoremError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use analysis::{AnalysisResult, Analyzer, analyze};
pub use config::{AnalysisConfig, ParserConfig};
pub use error::{LoveTheoremError, Result};
pub use message::Message;
pub use parser::{ParseStats, TranscriptParser, parse};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use love_theorem::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{LoveTheoremError, Result};

    // Parsing
    pub use crate::parser::{ParseStats, TranscriptParser, parse};

    // Analysis
    pub use crate::analysis::{AnalysisResult, Analyzer, ScoreBreakdown, analyze};

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
    pub use crate::output::{to_report, write_report};
}
