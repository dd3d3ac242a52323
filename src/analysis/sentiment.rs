//! Positive/negative keyword counting.
//!
//! Two fixed vocabularies are matched as whole words against the lowercased
//! message text. This is word spotting, not sentiment analysis: "not happy"
//! counts as one positive hit.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::Message;
use crate::analysis::models::SentimentStats;

/// Words counted as positive.
pub const POSITIVE_WORDS: &[&str] = &[
    "love", "happy", "great", "good", "awesome", "amazing", "beautiful", "wonderful", "cute",
    "sweet", "miss", "thanks", "thank", "glad", "excited", "fun", "best", "nice", "perfect",
    "haha", "lol", "yay", "care", "adore", "proud",
];

/// Words counted as negative.
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "hate", "bad", "upset", "annoyed", "tired", "hurt", "mad", "worried", "cry",
    "crying", "lonely", "ugh", "stressed", "terrible", "awful", "disappointed", "sick", "bored",
    "fight",
];

fn word_list_regex(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("keyword list compiles")
}

static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| word_list_regex(POSITIVE_WORDS));
static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| word_list_regex(NEGATIVE_WORDS));

/// Tallies keyword hits over all messages.
///
/// ```rust
/// use love_theorem::analysis::sentiment::sentiment_stats;
/// use love_theorem::Message;
/// use chrono::Utc;
///
/// let messages = vec![
///     Message::new(Utc::now(), "Alice", "I LOVE this, so happy"),
///     Message::new(Utc::now(), "Bob", "ugh, lovely weather"),
/// ];
/// let stats = sentiment_stats(&messages);
/// assert_eq!(stats.positive, 2);
/// assert_eq!(stats.negative, 1);
/// assert_eq!(stats.word_frequency["love"], 1);
/// ```
pub fn sentiment_stats(messages: &[Message]) -> SentimentStats {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut word_frequency: BTreeMap<String, usize> = BTreeMap::new();

    for msg in messages {
        let lowered = msg.text.to_lowercase();
        for hit in POSITIVE_RE.find_iter(&lowered) {
            positive += 1;
            *word_frequency.entry(hit.as_str().to_string()).or_insert(0) += 1;
        }
        for hit in NEGATIVE_RE.find_iter(&lowered) {
            negative += 1;
            *word_frequency.entry(hit.as_str().to_string()).or_insert(0) += 1;
        }
    }

    SentimentStats {
        positive,
        negative,
        ratio: sentiment_ratio(positive, negative),
        word_frequency,
    }
}

/// `positive / (positive + negative)`; a zero denominator becomes 1.
pub fn sentiment_ratio(positive: usize, negative: usize) -> f64 {
    let denominator = (positive + negative).max(1);
    positive as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn msg(text: &str) -> Message {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        Message::new(ts, "Alice", text)
    }

    #[test]
    fn test_whole_word_only() {
        let stats = sentiment_stats(&[msg("lovely badge, madness, careful")]);
        assert_eq!(stats.positive, 0);
        assert_eq!(stats.negative, 0);
    }

    #[test]
    fn test_case_insensitive_and_punctuation() {
        let stats = sentiment_stats(&[msg("Love! LOVE? love... so SAD.")]);
        assert_eq!(stats.positive, 3);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.word_frequency["love"], 3);
        assert_eq!(stats.word_frequency["sad"], 1);
    }

    #[test]
    fn test_ratio() {
        assert!((sentiment_ratio(3, 1) - 0.75).abs() < 1e-12);
        assert!(sentiment_ratio(0, 0).abs() < 1e-12);
        assert!((sentiment_ratio(2, 0) - 1.0).abs() < 1e-12);
        assert!(sentiment_ratio(0, 5).abs() < 1e-12);
    }

    #[test]
    fn test_no_keywords() {
        let stats = sentiment_stats(&[msg("see you at noon")]);
        assert_eq!(stats.positive + stats.negative, 0);
        assert!(stats.word_frequency.is_empty());
        assert!(stats.ratio.abs() < 1e-12);
    }
}
