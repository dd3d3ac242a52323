//! Narrative text built from the computed metrics and score.
//!
//! Fully deterministic: the same metrics always give the same sentences in
//! the same order.

use crate::analysis::models::{Insights, Metrics, ScoreBreakdown};

const NIGHT_OWL_SHARE: f64 = 0.3;
const EARLY_BIRD_SHARE: f64 = 0.3;
const POSITIVE_VIBES_RATIO: f64 = 0.7;
const MARATHON_STREAK: usize = 50;

/// Builds the narrative section of an analysis.
pub fn build_insights(
    participants: &[String; 2],
    total_messages: usize,
    metrics: &Metrics,
    score: &ScoreBreakdown,
) -> Insights {
    let [a, b] = participants;

    Insights {
        chat_name: format!("Chat with {a} & {b}"),
        chat_duration_days: metrics.consistency.days_span,
        summary: summary(a, b, score.love_score),
        personality_tags: personality_tags(total_messages, metrics, score),
        strengths: strengths(score),
        improvements: improvements(score),
    }
}

fn summary(a: &str, b: &str, love_score: u8) -> String {
    match love_score {
        85.. => format!(
            "{a} and {b} are deeply in sync: fast replies, shared effort and a daily rhythm."
        ),
        70..=84 => format!("{a} and {b} have a warm, healthy connection with room to grow."),
        50..=69 => format!("{a} and {b} keep in touch, though the conversation runs hot and cold."),
        _ => format!("{a} and {b} talk only now and then; this chat could use more attention."),
    }
}

fn share(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

fn personality_tags(total_messages: usize, metrics: &Metrics, score: &ScoreBreakdown) -> Vec<String> {
    let time_of_day = metrics.activity.time_of_day;
    let rules = [
        (score.reply >= 15, "Quick Responders"),
        (score.emoji >= 15, "Emoji Enthusiasts"),
        (score.balance >= 15, "Balanced Communicators"),
        (score.consistency >= 15, "Daily Chatters"),
        (
            share(time_of_day.night, total_messages) > NIGHT_OWL_SHARE,
            "Night Owls",
        ),
        (
            share(time_of_day.morning, total_messages) > EARLY_BIRD_SHARE,
            "Early Birds",
        ),
        (
            metrics.sentiment.positive > 0 && metrics.sentiment.ratio > POSITIVE_VIBES_RATIO,
            "Positive Vibes",
        ),
        (
            metrics.conversations.longest_streak >= MARATHON_STREAK,
            "Marathon Talkers",
        ),
    ];

    let mut tags: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, tag)| (*tag).to_string())
        .collect();
    if tags.is_empty() {
        tags.push("Steady Companions".to_string());
    }
    tags
}

fn strengths(score: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();
    if score.reply >= 15 {
        out.push("You answer each other quickly.".to_string());
    }
    if score.emoji >= 15 {
        out.push("Your messages are full of expression.".to_string());
    }
    if score.balance >= 10 {
        out.push("You both carry the conversation.".to_string());
    }
    if score.consistency >= 10 {
        out.push("You talk on most days.".to_string());
    }
    out
}

fn improvements(score: &ScoreBreakdown) -> Vec<String> {
    let mut out = Vec::new();
    if score.reply < 5 {
        out.push("Try replying a little sooner.".to_string());
    }
    if score.emoji <= 0 {
        out.push("A few emoji could make messages feel warmer.".to_string());
    }
    if score.balance < 0 {
        out.push("One side is doing most of the talking.".to_string());
    }
    if score.consistency <= 0 {
        out.push("Checking in more regularly would help.".to_string());
    }
    out
}
