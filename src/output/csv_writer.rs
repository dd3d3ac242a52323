//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::analysis::AnalysisResult;
use crate::error::Result;

/// Flattens a result into `(metric, value)` pairs.
///
/// Floats carry four decimals; a missing value (no replies counted) is an
/// empty string.
pub fn metric_rows(result: &AnalysisResult) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = Vec::new();
    let mut push = |metric: String, value: String| rows.push((metric, value));
    let [a, b] = &result.participants;
    let metrics = &result.metrics;

    push("participantA".into(), a.clone());
    push("participantB".into(), b.clone());

    for name in [a, b] {
        push(
            format!("messages.{name}"),
            count(&result.counts.by_participant, name),
        );
    }
    push("messages.total".into(), result.counts.total_messages.to_string());

    for name in [a, b] {
        push(format!("words.{name}"), count(&metrics.words.by_participant, name));
        push(
            format!("wordsPerMessage.{name}"),
            optional(metrics.words.words_per_message.get(name).copied()),
        );
    }
    push(
        "wordsPerMessage.overall".into(),
        float(metrics.words.overall_words_per_message),
    );

    push(
        "replies.counted".into(),
        metrics.replies.counted_replies.to_string(),
    );
    push(
        "replies.averageMinutes".into(),
        optional(metrics.replies.average_minutes),
    );
    for name in [a, b] {
        push(
            format!("replies.averageMinutes.{name}"),
            optional(metrics.replies.by_participant.get(name).copied()),
        );
    }
    push(
        "replies.fastestSeconds".into(),
        metrics
            .replies
            .fastest_seconds
            .map(|s| s.to_string())
            .unwrap_or_default(),
    );
    push(
        "replies.slowestMinutes".into(),
        optional(metrics.replies.slowest_minutes),
    );

    push("emoji.total".into(), metrics.emoji.total.to_string());
    push("emoji.ratio".into(), float(metrics.emoji.ratio));
    for (rank, entry) in metrics.emoji.top.iter().enumerate() {
        push(
            format!("emoji.top.{}", rank + 1),
            format!("{} x{}", entry.emoji, entry.count),
        );
    }

    push(
        "sentiment.positive".into(),
        metrics.sentiment.positive.to_string(),
    );
    push(
        "sentiment.negative".into(),
        metrics.sentiment.negative.to_string(),
    );
    push("sentiment.ratio".into(), float(metrics.sentiment.ratio));

    push("balance".into(), float(metrics.balance));

    push(
        "consistency.activeDays".into(),
        metrics.consistency.active_days.to_string(),
    );
    push(
        "consistency.daysSpan".into(),
        metrics.consistency.days_span.to_string(),
    );
    push("consistency.ratio".into(), float(metrics.consistency.ratio));

    push(
        "conversations.total".into(),
        metrics.conversations.total.to_string(),
    );
    for name in [a, b] {
        push(
            format!("conversations.starters.{name}"),
            count(&metrics.conversations.starters, name),
        );
    }
    push(
        "conversations.longestStreak".into(),
        metrics.conversations.longest_streak.to_string(),
    );

    let tod = metrics.activity.time_of_day;
    push("activity.peakHour".into(), metrics.activity.peak_hour.to_string());
    push("activity.morning".into(), tod.morning.to_string());
    push("activity.afternoon".into(), tod.afternoon.to_string());
    push("activity.evening".into(), tod.evening.to_string());
    push("activity.night".into(), tod.night.to_string());

    let score = &result.score;
    push("score.base".into(), score.base.to_string());
    push("score.reply".into(), score.reply.to_string());
    push("score.emoji".into(), score.emoji.to_string());
    push("score.balance".into(), score.balance.to_string());
    push("score.consistency".into(), score.consistency.to_string());
    push("score.rawScore".into(), score.raw_score.to_string());
    push("score.loveScore".into(), score.love_score.to_string());

    rows
}

fn count(map: &std::collections::BTreeMap<String, usize>, key: &str) -> String {
    map.get(key).copied().unwrap_or(0).to_string()
}

fn float(value: f64) -> String {
    format!("{value:.4}")
}

fn optional(value: Option<f64>) -> String {
    value.map(float).unwrap_or_default()
}

/// Writes the metric table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Metric`, `Value`
/// - Encoding: UTF-8
pub fn write_csv(result: &AnalysisResult, output_path: &str) -> Result<()> {
    let csv = to_csv(result)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Same as [`write_csv`], returned as a string.
pub fn to_csv(result: &AnalysisResult) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["Metric", "Value"])?;
    for (metric, value) in metric_rows(result) {
        writer.write_record([metric.as_str(), value.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
