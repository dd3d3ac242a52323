//! Typed transcript message.
//!
//! The parser turns every accepted transcript line into a [`Message`]; the
//! analysis engine reads nothing else. A message always carries a timestamp:
//! lines whose date or time cannot be built never become messages.
//!
//! # Examples
//!
//! ```
//! use love_theorem::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 3, 5, 14, 15, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "hello there");
//!
//! assert_eq!(msg.sender, "Alice");
//! assert_eq!(msg.text, "hello there");
//! assert_eq!(msg.word_count(), 2);
//! ```
//!
//! ## Serialization
//!
//! ```
//! use love_theorem::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 3, 5, 14, 15, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One message from a chat transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Minute-resolution send time, wall clock taken as UTC |
/// | `sender` | `String` | Display name exactly as written in the export |
/// | `text` | `String` | Message body, trimmed |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    ///
    /// Exports carry no timezone, so the wall-clock value is stored as UTC
    /// unchanged. Hour-of-day and calendar-date statistics read it back the
    /// same way.
    pub timestamp: DateTime<Utc>,

    /// Display name of the author, not normalized.
    pub sender: String,

    /// Message body.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Number of whitespace-delimited tokens in the body.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
