//! Transcript parser.
//!
//! Turns raw WhatsApp export text into an ordered `Vec<`[`Message`]`>`.
//! Lines that do not match the grammar, system notices, and lines whose date
//! or time cannot be built are dropped; parsing text never fails.
//!
//! # Example
//!
//! ```rust
//! use love_theorem::parser::parse;
//!
//! let text = "\
//! 5/3/2023, 2:15 pm - Alice: hello there
//! not a chat line
//! 5/3/2023, 2:16 pm - Bob: hi!";
//!
//! let messages = parse(text);
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].sender, "Alice");
//! assert_eq!(messages[1].text, "hi!");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{LoveTheoremError, Result};
use crate::parsing::{build_timestamp, is_system_notice, split_line};

/// Per-line outcome counts for one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines in the input
    pub total_lines: usize,
    /// Empty or whitespace-only lines
    pub blank_lines: usize,
    /// Lines that became messages
    pub parsed: usize,
    /// Lines that did not match the grammar (and were not joined)
    pub malformed: usize,
    /// Grammar-matching lines dropped as system notices
    pub system_notices: usize,
    /// Grammar-matching lines whose date or time could not be built
    pub invalid_timestamps: usize,
    /// Lines appended to the previous message
    pub continuations: usize,
}

impl ParseStats {
    /// Lines that matched neither as a message nor as a continuation.
    pub fn dropped(&self) -> usize {
        self.malformed + self.system_notices + self.invalid_timestamps
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use love_theorem::config::ParserConfig;
/// use love_theorem::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(
///     ParserConfig::new().with_join_continuations(true),
/// );
/// let (messages, stats) = parser.parse_with_stats(
///     "1/1/2024, 10:00 - Alice: first line\nsecond line",
/// );
/// assert_eq!(messages[0].text, "first line\nsecond line");
/// assert_eq!(stats.continuations, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript, returning messages sorted by timestamp.
    pub fn parse(&self, text: &str) -> Vec<Message> {
        self.parse_with_stats(text).0
    }

    /// Reads and parses a UTF-8 transcript file.
    ///
    /// Fails with [`LoveTheoremError::Io`] when the file cannot be read and
    /// with [`LoveTheoremError::Utf8`] when it is not valid UTF-8.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| LoveTheoremError::Utf8 {
            context: path.display().to_string(),
            source,
        })?;
        Ok(self.parse(&text))
    }

    /// Parses a transcript and reports what happened to each line.
    pub fn parse_with_stats(&self, text: &str) -> (Vec<Message>, ParseStats) {
        let mut stats = ParseStats::default();
        let mut messages: Vec<Message> = Vec::new();
        // Only the message built from the immediately preceding accepted line
        // may take continuations.
        let mut can_continue = false;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            stats.total_lines += 1;

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            let Some(parts) = split_line(line) else {
                if self.config.join_continuations && can_continue {
                    if let Some(last) = messages.last_mut() {
                        tracing::trace!(line = line_no, "joining continuation line");
                        last.text.push('\n');
                        last.text.push_str(line.trim());
                        stats.continuations += 1;
                        continue;
                    }
                }
                tracing::debug!(line = line_no, "dropping line that does not match the grammar");
                stats.malformed += 1;
                can_continue = false;
                continue;
            };

            if is_system_notice(parts.sender, &self.config.system_markers) {
                tracing::debug!(line = line_no, "dropping system notice");
                stats.system_notices += 1;
                can_continue = false;
                continue;
            }

            match build_timestamp(parts.date, parts.time) {
                Ok(timestamp) => {
                    messages.push(Message::new(timestamp, parts.sender, parts.body));
                    stats.parsed += 1;
                    can_continue = true;
                }
                Err(err) => {
                    tracing::debug!(line = line_no, error = %err, "dropping line with invalid timestamp");
                    stats.invalid_timestamps += 1;
                    can_continue = false;
                }
            }
        }

        // Stable: equal timestamps keep file order.
        messages.sort_by_key(|m| m.timestamp);

        tracing::info!(
            lines = stats.total_lines,
            parsed = stats.parsed,
            dropped = stats.dropped(),
            "parsed transcript"
        );

        (messages, stats)
    }
}

/// Parses a transcript with the default configuration.
pub fn parse(text: &str) -> Vec<Message> {
    TranscriptParser::new().parse(text)
}
