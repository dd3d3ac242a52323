//! WhatsApp line grammar and system-notice detection.
//!
//! Every transcript line has the shape
//!
//! ```text
//! D/M/YYYY, H:MM[ am|pm] - Sender: Body
//! ```
//!
//! Dates are always day-first. The pattern is compiled once and shared.

use std::sync::LazyLock;

use regex::Regex;

/// Line grammar: date, time (optional meridiem), ` - `, sender up to the first
/// `": "`, body.
pub const LINE_PATTERN: &str =
    r"^([0-9]{1,2}/[0-9]{1,2}/[0-9]{4}),\s+([0-9]{1,2}:[0-9]{2}\s?(?i:am|pm)?)\s*-\s*(.+?):\s(.*)$";

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LINE_PATTERN).expect("LINE_PATTERN is a valid regex")
});

/// Sender-field fragments that mark a line as a WhatsApp system notice.
pub const DEFAULT_SYSTEM_MARKERS: &[&str] = &[
    "Messages and calls are end-to-end encrypted",
    "Messages to this group are now secured with end-to-end encryption",
    "Your security code with",
];

/// The raw captures of one grammar-matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// `D/M/YYYY`
    pub date: &'a str,
    /// `H:MM` with optional meridiem
    pub time: &'a str,
    /// Sender exactly as captured
    pub sender: &'a str,
    /// Body, already trimmed
    pub body: &'a str,
}

/// Splits a line into its grammar parts, or `None` if it does not match.
pub fn split_line(line: &str) -> Option<LineParts<'_>> {
    let caps = LINE_RE.captures(line)?;
    Some(LineParts {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        sender: caps.get(3)?.as_str(),
        body: caps.get(4).map_or("", |m| m.as_str()).trim(),
    })
}

/// Check if a sender field is one of the configured system notices.
///
/// Matching is plain substring containment, case-sensitive.
pub fn is_system_notice<S: AsRef<str>>(sender: &str, markers: &[S]) -> bool {
    markers
        .iter()
        .any(|marker| sender.contains(marker.as_ref()))
}
