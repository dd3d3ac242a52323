//! Shared transcript parsing utilities.
//!
//! - [`whatsapp`] - line grammar and system-notice detection
//! - [`timestamp`] - day-first date/time construction

pub mod timestamp;
pub mod whatsapp;

pub use timestamp::{TimestampError, build_timestamp};
pub use whatsapp::{DEFAULT_SYSTEM_MARKERS, LINE_PATTERN, LineParts, is_system_notice, split_line};
