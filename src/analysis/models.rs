//! Result types produced by the analysis engine.
//!
//! Everything here is plain data. All maps are `BTreeMap`s so a result
//! serializes to the same bytes every time; keys are camelCase to match the
//! JSON shape consumed by the web front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Complete analysis of a two-person transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The two most active senders, busiest first.
    pub participants: [String; 2],
    /// Message counts.
    pub counts: Counts,
    /// Numeric aggregates.
    pub metrics: Metrics,
    /// Composite score and its components.
    pub score: ScoreBreakdown,
    /// Narrative text derived from the score and metrics.
    pub insights: Insights,
}

impl AnalysisResult {
    /// The final 0–100 score.
    pub fn love_score(&self) -> u8 {
        self.score.love_score
    }

    /// Total messages analyzed.
    pub fn total_messages(&self) -> usize {
        self.counts.total_messages
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    /// Messages sent by each of the two participants.
    pub by_participant: BTreeMap<String, usize>,
    /// All analyzed messages, including any from extra senders.
    pub total_messages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub words: WordStats,
    pub replies: ReplyStats,
    pub emoji: EmojiStats,
    pub sentiment: SentimentStats,
    /// `min(countA, countB) / totalMessages`, in `(0, 0.5]`.
    pub balance: f64,
    pub consistency: ConsistencyStats,
    pub conversations: ConversationStats,
    pub activity: ActivityStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStats {
    /// Total words per participant.
    pub by_participant: BTreeMap<String, usize>,
    /// Average words per message per participant.
    pub words_per_message: BTreeMap<String, f64>,
    /// Average words per message over the whole transcript.
    pub overall_words_per_message: f64,
}

/// Reply-latency statistics.
///
/// A reply is a message whose sender differs from the previous message's
/// sender, arriving less than the reply window later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyStats {
    /// Number of adjacent pairs counted as replies.
    pub counted_replies: usize,
    /// Mean reply delay in minutes.
    pub average_minutes: Option<f64>,
    /// Mean reply delay of each participant, keyed by the replier. A
    /// participant who never replied has no entry.
    pub by_participant: BTreeMap<String, f64>,
    /// Quickest reply in seconds, ignoring near-simultaneous double sends.
    pub fastest_seconds: Option<i64>,
    /// Slowest counted reply in minutes.
    pub slowest_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiStats {
    /// Emoji graphemes across all messages.
    pub total: usize,
    /// `total / totalMessages`.
    pub ratio: f64,
    /// Occurrences of each emoji.
    pub frequency: BTreeMap<String, usize>,
    /// Occurrences of each emoji, per participant.
    pub by_participant: BTreeMap<String, BTreeMap<String, usize>>,
    /// Most used emoji, by count then grapheme order.
    pub top: Vec<EmojiCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentStats {
    pub positive: usize,
    pub negative: usize,
    /// `positive / (positive + negative)`, or `positive / 1` when both are 0.
    pub ratio: f64,
    /// Hits per keyword (both lists).
    pub word_frequency: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyStats {
    /// Distinct calendar dates with at least one message.
    pub active_days: usize,
    /// Whole days from first to last message, rounded up, at least 1.
    pub days_span: i64,
    /// `min(1, activeDays / daysSpan)`.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStats {
    /// Number of conversations (segments separated by long gaps).
    pub total: usize,
    /// Conversations opened by each sender.
    pub starters: BTreeMap<String, usize>,
    /// Longest run of messages without a long gap.
    pub longest_streak: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOfDay {
    /// 06:00–11:59
    pub morning: usize,
    /// 12:00–17:59
    pub afternoon: usize,
    /// 18:00–23:59
    pub evening: usize,
    /// 00:00–05:59
    pub night: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    /// Messages per hour of day, index 0–23.
    pub hourly: Vec<usize>,
    /// Messages per weekday, index 0 = Sunday … 6 = Saturday.
    pub weekday: Vec<usize>,
    pub time_of_day: TimeOfDay,
    /// First hour with the highest message count.
    pub peak_hour: u32,
}

/// The composite score and the components that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: i32,
    /// Reply-speed component `R`.
    pub reply: i32,
    /// Emoji component `E`.
    pub emoji: i32,
    /// Balance component `M`.
    pub balance: i32,
    /// Consistency component `C`.
    pub consistency: i32,
    /// `base + R + E + M + C`.
    pub raw_score: i32,
    /// `round(clamp(rawScore / 125 * 100, 0, 100))`.
    pub love_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// `"Chat with A & B"`.
    pub chat_name: String,
    /// Same value as `consistency.daysSpan`.
    pub chat_duration_days: i64,
    pub summary: String,
    pub personality_tags: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}
