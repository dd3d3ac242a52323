//! Configuration types for parsing and analysis.
//!
//! - [`ParserConfig`] - which lines the transcript parser accepts
//! - [`AnalysisConfig`] - window and gap thresholds for the metrics engine
//!
//! Defaults reproduce the fixed behavior described in the crate docs; the
//! score tiers themselves are not configurable.
//!
//! # Example
//!
//! ```rust
//! use love_theorem::config::{AnalysisConfig, ParserConfig};
//!
//! let parser = ParserConfig::new()
//!     .with_join_continuations(true)
//!     .with_extra_marker("changed the subject");
//!
//! let analysis = AnalysisConfig::new().with_conversation_gap_minutes(45);
//! assert_eq!(analysis.conversation_gap_minutes, 45);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::DEFAULT_SYSTEM_MARKERS;

/// Configuration for transcript parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Sender-field fragments that mark a line as a system notice
    /// (default: WhatsApp encryption/security notices)
    pub system_markers: Vec<String>,

    /// Append non-matching lines to the previous message instead of
    /// dropping them (default: false)
    pub join_continuations: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            system_markers: DEFAULT_SYSTEM_MARKERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            join_continuations: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the system-notice markers.
    #[must_use]
    pub fn with_system_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.system_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one marker to the defaults.
    #[must_use]
    pub fn with_extra_marker(mut self, marker: impl Into<String>) -> Self {
        self.system_markers.push(marker.into());
        self
    }

    /// Sets whether continuation lines are joined onto the previous message.
    #[must_use]
    pub fn with_join_continuations(mut self, enabled: bool) -> Self {
        self.join_continuations = enabled;
        self
    }
}

/// Largest accepted conversation gap or reply window: ten years, in minutes.
pub const MAX_WINDOW_MINUTES: i64 = 10 * 366 * 24 * 60;

/// Converts a window in minutes to seconds, clamped to
/// `1..=MAX_WINDOW_MINUTES` minutes so the product cannot overflow.
///
/// ```rust
/// use love_theorem::config::{MAX_WINDOW_MINUTES, window_seconds};
///
/// assert_eq!(window_seconds(30), 1800);
/// assert_eq!(window_seconds(-5), 60);
/// assert_eq!(window_seconds(i64::MAX), MAX_WINDOW_MINUTES * 60);
/// ```
pub fn window_seconds(minutes: i64) -> i64 {
    minutes.clamp(1, MAX_WINDOW_MINUTES) * 60
}

/// Configuration for the metrics engine.
///
/// # Example
///
/// ```rust
/// use love_theorem::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.conversation_gap_minutes, 30);
/// assert_eq!(config.reply_window_minutes, 1440);
/// assert_eq!(config.double_send_seconds, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Gap that ends a conversation and a streak (default: 30 minutes)
    pub conversation_gap_minutes: i64,

    /// Replies at or beyond this delay are not replies (default: 1440 minutes)
    pub reply_window_minutes: i64,

    /// Fastest-reply ignores gaps up to this many seconds (default: 10)
    pub double_send_seconds: i64,

    /// How many entries the `topEmojis` ranking keeps (default: 10)
    pub top_emoji_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            conversation_gap_minutes: 30,
            reply_window_minutes: 24 * 60,
            double_send_seconds: 10,
            top_emoji_limit: 10,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation gap in minutes.
    #[must_use]
    pub fn with_conversation_gap_minutes(mut self, minutes: i64) -> Self {
        self.conversation_gap_minutes = minutes;
        self
    }

    /// Sets the reply window in minutes.
    #[must_use]
    pub fn with_reply_window_minutes(mut self, minutes: i64) -> Self {
        self.reply_window_minutes = minutes;
        self
    }

    /// Sets the double-send threshold in seconds.
    #[must_use]
    pub fn with_double_send_seconds(mut self, seconds: i64) -> Self {
        self.double_send_seconds = seconds;
        self
    }

    /// The reply window in seconds, clamped by [`window_seconds`].
    pub fn reply_window_seconds(&self) -> i64 {
        window_seconds(self.reply_window_minutes)
    }

    /// Sets the size of the top-emoji ranking.
    #[must_use]
    pub fn with_top_emoji_limit(mut self, limit: usize) -> Self {
        self.top_emoji_limit = limit;
        self
    }
}
