//! Emoji extraction and usage statistics.
//!
//! Text is split into extended grapheme clusters, and a cluster counts as one
//! emoji when any of its scalars has the Unicode `Emoji_Presentation` or
//! `Extended_Pictographic` property. ZWJ families, flags and skin-toned
//! emoji are therefore counted once and keyed by the whole cluster.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::Message;
use crate::analysis::models::{EmojiCount, EmojiStats};

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Emoji_Presentation}|\p{Extended_Pictographic}")
        .expect("emoji property classes are supported")
});

/// Iterates over the emoji graphemes in `text`, in order.
///
/// ```rust
/// use love_theorem::analysis::emoji::extract_emojis;
///
/// let found: Vec<&str> = extract_emojis("good night 😴❤️ x").collect();
/// assert_eq!(found, vec!["😴", "❤\u{FE0F}"]);
/// ```
pub fn extract_emojis(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
        .filter(|cluster| EMOJI_RE.is_match(cluster))
}

/// Computes emoji totals, frequencies and the top ranking.
pub fn emoji_stats(messages: &[Message], participants: &[String; 2], top_limit: usize) -> EmojiStats {
    let mut total = 0usize;
    let mut frequency: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_participant: BTreeMap<String, BTreeMap<String, usize>> = participants
        .iter()
        .map(|name| (name.clone(), BTreeMap::new()))
        .collect();

    for msg in messages {
        for emoji in extract_emojis(&msg.text) {
            total += 1;
            *frequency.entry(emoji.to_string()).or_insert(0) += 1;
            if let Some(own) = by_participant.get_mut(&msg.sender) {
                *own.entry(emoji.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut top: Vec<EmojiCount> = frequency
        .iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.clone(),
            count: *count,
        })
        .collect();
    // BTreeMap order breaks ties.
    top.sort_by(|a, b| b.count.cmp(&a.count));
    top.truncate(top_limit);

    let ratio = if messages.is_empty() {
        0.0
    } else {
        total as f64 / messages.len() as f64
    };

    EmojiStats {
        total,
        ratio,
        frequency,
        by_participant,
        top,
    }
}
