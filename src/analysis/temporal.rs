//! Calendar consistency, conversation segmentation, streaks and activity
//! distribution.
//!
//! All functions expect a time-ordered slice.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Timelike};

use crate::Message;
use crate::analysis::models::{ActivityStats, ConsistencyStats, ConversationStats, TimeOfDay};
use crate::config::window_seconds;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Active days against the calendar span of the transcript.
pub fn consistency(messages: &[Message]) -> ConsistencyStats {
    let active_days = messages
        .iter()
        .map(|m| m.timestamp.date_naive())
        .collect::<BTreeSet<NaiveDate>>()
        .len();

    let span_seconds = match (messages.first(), messages.last()) {
        (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_seconds().max(0),
        _ => 0,
    };
    let days_span = ((span_seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).max(1);

    ConsistencyStats {
        active_days,
        days_span,
        ratio: (active_days as f64 / days_span as f64).min(1.0),
    }
}

/// Splits the transcript into conversations and measures the longest streak.
///
/// A conversation starts at the first message and after every gap longer
/// than `gap_minutes`. A streak continues only while gaps stay strictly
/// shorter than `gap_minutes`, so a gap of exactly `gap_minutes` ends a
/// streak without opening a new conversation. Out-of-range gaps are clamped
/// by [`window_seconds`].
pub fn conversations(messages: &[Message], gap_minutes: i64) -> ConversationStats {
    let gap_seconds = window_seconds(gap_minutes);

    let mut starters: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;
    let mut longest_streak = 0usize;
    let mut streak = 0usize;
    let mut prev: Option<&Message> = None;

    for msg in messages {
        let gap = prev.map(|p| (msg.timestamp - p.timestamp).num_seconds());

        if gap.is_none_or(|g| g > gap_seconds) {
            total += 1;
            *starters.entry(msg.sender.clone()).or_insert(0) += 1;
        }

        streak = match gap {
            Some(g) if g < gap_seconds => streak + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(streak);

        prev = Some(msg);
    }

    ConversationStats {
        total,
        starters,
        longest_streak,
    }
}

/// Messages by hour, weekday and time-of-day bucket.
pub fn activity(messages: &[Message]) -> ActivityStats {
    let mut hourly = vec![0usize; 24];
    let mut weekday = vec![0usize; 7];
    let mut time_of_day = TimeOfDay::default();

    for msg in messages {
        let hour = msg.timestamp.hour();
        hourly[hour as usize] += 1;
        weekday[msg.timestamp.weekday().num_days_from_sunday() as usize] += 1;
        match hour {
            6..=11 => time_of_day.morning += 1,
            12..=17 => time_of_day.afternoon += 1,
            18..=23 => time_of_day.evening += 1,
            _ => time_of_day.night += 1,
        }
    }

    ActivityStats {
        peak_hour: peak_hour(&hourly),
        hourly,
        weekday,
        time_of_day,
    }
}

/// First hour holding the maximum count; 0 when every hour is empty.
fn peak_hour(hourly: &[usize]) -> u32 {
    let mut best = 0usize;
    for (hour, count) in hourly.iter().enumerate() {
        if *count > hourly[best] {
            best = hour;
        }
    }
    best as u32
}
