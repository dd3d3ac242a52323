//! The analysis driver: runs every metric over a message slice and folds the
//! results into an [`AnalysisResult`].

use std::borrow::Cow;

use tracing::{debug, info};

use crate::Message;
use crate::analysis::models::{AnalysisResult, Metrics, ScoreBreakdown};
use crate::analysis::{emoji, insights, participants, replies, sentiment, temporal};
use crate::config::AnalysisConfig;
use crate::error::{LoveTheoremError, Result};

/// Computes relationship metrics for a two-person transcript.
///
/// # Example
///
/// ```rust
/// use love_theorem::{Analyzer, AnalysisConfig, parse};
///
/// let text = "\
/// 1/6/2024, 9:00 am - Alice: morning ❤️
/// 1/6/2024, 9:01 am - Bob: good morning!
/// 1/6/2024, 9:02 am - Alice: coffee later?";
///
/// let analyzer = Analyzer::with_config(AnalysisConfig::new().with_conversation_gap_minutes(45));
/// let result = analyzer.analyze(&parse(text))?;
/// assert_eq!(result.participants, ["Alice".to_string(), "Bob".to_string()]);
/// assert_eq!(result.score.reply, 25);
/// # Ok::<(), love_theorem::LoveTheoremError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes a message sequence.
    ///
    /// The input is re-sorted stably by timestamp when it is not already in
    /// order, so any slice gives time-ordered results.
    ///
    /// # Errors
    ///
    /// - [`LoveTheoremError::EmptyInput`] when `messages` is empty.
    /// - [`LoveTheoremError::InsufficientParticipants`] when fewer than two
    ///   distinct senders are present.
    pub fn analyze(&self, messages: &[Message]) -> Result<AnalysisResult> {
        if messages.is_empty() {
            return Err(LoveTheoremError::EmptyInput);
        }

        let ordered: Cow<'_, [Message]> = if messages.is_sorted_by_key(|m| m.timestamp) {
            Cow::Borrowed(messages)
        } else {
            debug!("input not in time order, sorting a copy");
            let mut owned = messages.to_vec();
            owned.sort_by_key(|m| m.timestamp);
            Cow::Owned(owned)
        };
        let messages = ordered.as_ref();
        let total_messages = messages.len();

        let ranked = participants::rank_senders(messages);
        let pair = participants::resolve_participants(&ranked)?;
        let names = [pair[0].name.clone(), pair[1].name.clone()];
        if ranked.len() > 2 {
            debug!(
                extra = ranked.len() - 2,
                "senders beyond the top two count toward totals only"
            );
        }

        let metrics = Metrics {
            words: participants::word_stats(pair, &ranked),
            replies: replies::reply_stats(messages, &names, &self.config),
            emoji: emoji::emoji_stats(messages, &names, self.config.top_emoji_limit),
            sentiment: sentiment::sentiment_stats(messages),
            balance: participants::balance(pair, total_messages),
            consistency: temporal::consistency(messages),
            conversations: temporal::conversations(messages, self.config.conversation_gap_minutes),
            activity: temporal::activity(messages),
        };

        let score = ScoreBreakdown::compute(
            metrics.replies.average_minutes,
            metrics.emoji.ratio,
            metrics.balance,
            metrics.consistency.ratio,
        );
        let insights = insights::build_insights(&names, total_messages, &metrics, &score);

        info!(
            participants = ?names,
            messages = total_messages,
            raw_score = score.raw_score,
            love_score = score.love_score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            counts: participants::counts(pair, total_messages),
            participants: names,
            metrics,
            score,
            insights,
        })
    }
}

/// Analyzes `messages` with the default configuration.
///
/// See [`Analyzer::analyze`].
pub fn analyze(messages: &[Message]) -> Result<AnalysisResult> {
    Analyzer::new().analyze(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn timeline(entries: &[(&str, i64, &str)]) -> Vec<Message> {
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        entries.iter()
            .map(|(s, min, t)| Message::new(base + Duration::minutes(*min), *s, *t))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let err = analyze(&[]).unwrap_err();
        assert!(err.is_empty_input());
    }

    #[test]
    fn test_single_sender() {
        let messages = timeline(&[("Alice", 0, "a"), ("Alice", 1, "b")]);
        let err = analyze(&messages).unwrap_err();
        assert!(err.is_insufficient_participants());
    }

    #[test]
    fn test_unsorted_input_matches_sorted() {
        let sorted = timeline(&[("Alice", 0, "hi"), ("Bob", 1, "hey"), ("Alice", 3, "ok")]);
        let mut shuffled = sorted.clone();
        shuffled.reverse();
        assert_eq!(analyze(&sorted).unwrap(), analyze(&shuffled).unwrap());
    }

    #[test]
    fn test_extra_sender_tolerated() {
        let messages = timeline(&[
            ("Alice", 0, "a"),
            ("Bob", 1, "b"),
            ("Alice", 2, "c"),
            ("Bob", 3, "d"),
            ("Carol", 4, "e"),
        ]);
        let result = analyze(&messages).unwrap();
        assert_eq!(result.participants, ["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(result.counts.total_messages, 5);
        assert!((result.metrics.balance - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_custom_gap_changes_segmentation() {
        let messages = timeline(&[("Alice", 0, "a"), ("Bob", 40, "b")]);
        let default = analyze(&messages).unwrap();
        assert_eq!(default.metrics.conversations.total, 2);

        let relaxed = Analyzer::with_config(AnalysisConfig::new().with_conversation_gap_minutes(60))
            .analyze(&messages)
            .unwrap();
        assert_eq!(relaxed.metrics.conversations.total, 1);
    }
}
