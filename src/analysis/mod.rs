//! Metrics and scoring engine.
//!
//! - [`engine`] - [`Analyzer`] and [`analyze`], the entry points
//! - [`models`] - [`AnalysisResult`] and the metric structs it holds
//! - [`participants`] - sender ranking, counts, words and balance
//! - [`replies`] - reply latency
//! - [`emoji`] - emoji extraction and frequencies
//! - [`sentiment`] - positive/negative keyword counting
//! - [`temporal`] - consistency, conversations, streaks and activity
//! - [`score`] - tier tables and the Love Score
//! - [`insights`] - narrative summary, tags, strengths and improvements

pub mod emoji;
pub mod engine;
pub mod insights;
pub mod models;
pub mod participants;
pub mod replies;
pub mod score;
pub mod sentiment;
pub mod temporal;

pub use engine::{Analyzer, analyze};
pub use models::{
    ActivityStats, AnalysisResult, ConsistencyStats, ConversationStats, Counts, EmojiCount,
    EmojiStats, Insights, Metrics, ReplyStats, ScoreBreakdown, SentimentStats, TimeOfDay,
    WordStats,
};
pub use score::{BASE_SCORE, MAX_RAW_SCORE};
