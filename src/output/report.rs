//! Plain-text report writer.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::Write;

use crate::analysis::{AnalysisResult, MAX_RAW_SCORE};
use crate::error::Result;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Renders a human-readable summary of the result.
pub fn to_report(result: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render(&mut out, result);
    out
}

fn render(out: &mut String, result: &AnalysisResult) -> fmt::Result {
    let [a, b] = &result.participants;
    let metrics = &result.metrics;
    let score = &result.score;
    let insights = &result.insights;

    writeln!(out, "{}", insights.chat_name)?;
    writeln!(out, "{}", "=".repeat(insights.chat_name.chars().count()))?;
    writeln!(out)?;
    writeln!(out, "Love Score: {}/100", score.love_score)?;
    writeln!(out, "{}", insights.summary)?;
    writeln!(out)?;

    writeln!(out, "Score breakdown")?;
    writeln!(out, "  base         {:>4}", score.base)?;
    writeln!(out, "  replies      {:>+4}", score.reply)?;
    writeln!(out, "  emoji        {:>+4}", score.emoji)?;
    writeln!(out, "  balance      {:>+4}", score.balance)?;
    writeln!(out, "  consistency  {:>+4}", score.consistency)?;
    writeln!(out, "  raw          {:>4} / {MAX_RAW_SCORE}", score.raw_score)?;
    writeln!(out)?;

    writeln!(out, "Messages")?;
    for name in [a, b] {
        let sent = result.counts.by_participant.get(name).copied().unwrap_or(0);
        let words = metrics.words.words_per_message.get(name).copied().unwrap_or(0.0);
        writeln!(out, "  {name}: {sent} ({words:.1} words/message)")?;
    }
    writeln!(out, "  total: {}", result.counts.total_messages)?;
    writeln!(out, "  balance: {:.0}%", metrics.balance * 100.0)?;
    writeln!(out)?;

    writeln!(out, "Replies")?;
    match metrics.replies.average_minutes {
        Some(avg) => writeln!(
            out,
            "  average: {avg:.1} min over {} replies",
            metrics.replies.counted_replies
        )?,
        None => writeln!(out, "  no replies within the reply window")?,
    }
    for name in [a, b] {
        if let Some(avg) = metrics.replies.by_participant.get(name) {
            writeln!(out, "  {name}: {avg:.1} min")?;
        }
    }
    if let Some(fastest) = metrics.replies.fastest_seconds {
        writeln!(out, "  fastest: {fastest}s")?;
    }
    if let Some(slowest) = metrics.replies.slowest_minutes {
        writeln!(out, "  slowest: {slowest:.1} min")?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Emoji: {} ({:.2} per message)",
        metrics.emoji.total, metrics.emoji.ratio
    )?;
    if !metrics.emoji.top.is_empty() {
        let top: Vec<String> = metrics
            .emoji
            .top
            .iter()
            .map(|e| format!("{} x{}", e.emoji, e.count))
            .collect();
        writeln!(out, "  top: {}", top.join("  "))?;
    }
    writeln!(
        out,
        "Keywords: {} positive, {} negative",
        metrics.sentiment.positive, metrics.sentiment.negative
    )?;
    writeln!(out)?;

    writeln!(out, "Rhythm")?;
    writeln!(
        out,
        "  active on {} of {} days",
        metrics.consistency.active_days, metrics.consistency.days_span
    )?;
    writeln!(
        out,
        "  {} conversations, longest streak {} messages",
        metrics.conversations.total, metrics.conversations.longest_streak
    )?;
    writeln!(out, "  peak hour: {:02}:00", metrics.activity.peak_hour)?;
    if let Some(day) = busiest_weekday(&metrics.activity.weekday) {
        writeln!(out, "  busiest day: {day}")?;
    }
    writeln!(out)?;

    writeln!(out, "Tags: {}", insights.personality_tags.join(", "))?;
    write_list(out, "Strengths", &insights.strengths)?;
    write_list(out, "Could improve", &insights.improvements)
}

fn busiest_weekday(weekday: &[usize]) -> Option<&'static str> {
    let max = weekday.iter().copied().max().filter(|m| *m > 0)?;
    let index = weekday.iter().position(|c| *c == max)?;
    WEEKDAYS.get(index).copied()
}

fn write_list(out: &mut String, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "{title}:")?;
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

/// Writes [`to_report`] output to a file.
pub fn write_report(result: &AnalysisResult, output_path: &str) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_report(result).as_bytes())?;
    Ok(())
}
