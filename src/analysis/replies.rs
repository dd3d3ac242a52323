//! Reply latency between the two sides of the conversation.

use std::collections::{BTreeMap, HashMap};

use crate::Message;
use crate::analysis::models::ReplyStats;
use crate::config::AnalysisConfig;

/// Computes reply statistics over a time-ordered slice.
///
/// Only adjacent pairs with different senders count, and only when the gap
/// is non-negative and shorter than `reply_window_minutes`. Same-sender runs
/// never contribute, however long the gap.
pub fn reply_stats(
    messages: &[Message],
    participants: &[String; 2],
    config: &AnalysisConfig,
) -> ReplyStats {
    let window_seconds = config.reply_window_seconds();

    let mut total_minutes = 0.0;
    let mut counted = 0usize;
    let mut per_sender: HashMap<&str, (f64, usize)> = HashMap::new();
    let mut fastest_seconds: Option<i64> = None;
    let mut slowest_minutes: Option<f64> = None;

    for pair in messages.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if prev.sender == curr.sender {
            continue;
        }

        let delta_seconds = (curr.timestamp - prev.timestamp).num_seconds();
        if delta_seconds < 0 || delta_seconds >= window_seconds {
            continue;
        }
        let delta_minutes = delta_seconds as f64 / 60.0;

        total_minutes += delta_minutes;
        counted += 1;

        let entry = per_sender.entry(curr.sender.as_str()).or_insert((0.0, 0));
        entry.0 += delta_minutes;
        entry.1 += 1;

        if delta_seconds > config.double_send_seconds {
            fastest_seconds = Some(fastest_seconds.map_or(delta_seconds, |f| f.min(delta_seconds)));
        }
        slowest_minutes = Some(slowest_minutes.map_or(delta_minutes, |s| s.max(delta_minutes)));
    }

    let by_participant: BTreeMap<String, f64> = participants
        .iter()
        .filter_map(|name| {
            per_sender
                .get(name.as_str())
                .map(|(sum, n)| (name.clone(), sum / *n as f64))
        })
        .collect();

    ReplyStats {
        counted_replies: counted,
        average_minutes: (counted > 0).then(|| total_minutes / counted as f64),
        by_participant,
        fastest_seconds,
        slowest_minutes,
    }
}
