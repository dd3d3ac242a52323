//! Integration tests for love-theorem.
//!
//! These run whole transcripts through the public API, parse then analyze,
//! and check the numbers end to end.

use chrono::{TimeZone, Utc};

use love_theorem::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

/// Twelve alternating messages one minute apart on one day, three emoji, no
/// sentiment keywords.
const ALTERNATING_DAY: &str = "\
12/6/2024, 9:00 am - Alice: morning 😀
12/6/2024, 9:01 am - Bob: hey there
12/6/2024, 9:02 am - Alice: coffee later?
12/6/2024, 9:03 am - Bob: sure, where
12/6/2024, 9:04 am - Alice: the usual place
12/6/2024, 9:05 am - Bob: ok 👍
12/6/2024, 9:06 am - Alice: ten minutes
12/6/2024, 9:07 am - Bob: on my way
12/6/2024, 9:08 am - Alice: see you
12/6/2024, 9:09 am - Bob: parking now
12/6/2024, 9:10 am - Alice: I'm inside 🙂
12/6/2024, 9:11 am - Bob: coming";

/// Three weeks, lopsided and slow.
const SLOW_WEEKS: &str = "\
1/3/2024, 20:00 - Sam: are you free this weekend?
1/3/2024, 23:30 - Jo: maybe
2/3/2024, 10:00 - Sam: let me know
2/3/2024, 10:02 - Sam: ?
10/3/2024, 18:00 - Sam: hello?
10/3/2024, 21:00 - Jo: sorry, busy week
21/3/2024, 9:00 - Sam: ugh, forget it";

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_alternating_day_scores_96() {
    let messages = parse(ALTERNATING_DAY);
    assert_eq!(messages.len(), 12);

    let result = analyze(&messages).unwrap();

    assert_eq!(result.participants, ["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(result.counts.by_participant["Alice"], 6);
    assert_eq!(result.counts.by_participant["Bob"], 6);
    assert_eq!(result.total_messages(), 12);

    assert_eq!(result.metrics.replies.counted_replies, 11);
    assert_eq!(result.metrics.replies.average_minutes, Some(1.0));
    assert_eq!(result.metrics.replies.fastest_seconds, Some(60));
    assert_eq!(result.metrics.emoji.total, 3);
    assert_eq!(result.metrics.sentiment.positive, 0);
    assert_eq!(result.metrics.sentiment.negative, 0);
    assert!((result.metrics.balance - 0.5).abs() < 1e-12);
    assert_eq!(result.metrics.consistency.active_days, 1);
    assert_eq!(result.metrics.consistency.days_span, 1);

    let score = result.score;
    assert_eq!(score.base, 50);
    assert_eq!(score.reply, 25);
    assert_eq!(score.emoji, 15);
    assert_eq!(score.balance, 15);
    assert_eq!(score.consistency, 15);
    assert_eq!(score.raw_score, 120);
    assert_eq!(score.love_score, 96);

    assert_eq!(result.insights.chat_name, "Chat with Alice & Bob");
    assert_eq!(result.insights.chat_duration_days, 1);
    assert!(
        result
            .insights
            .personality_tags
            .contains(&"Quick Responders".to_string())
    );
    assert!(result.insights.improvements.is_empty());
}

#[test]
fn test_alternating_day_temporal_metrics() {
    let result = analyze(&parse(ALTERNATING_DAY)).unwrap();

    let conversations = &result.metrics.conversations;
    assert_eq!(conversations.total, 1);
    assert_eq!(conversations.starters["Alice"], 1);
    assert!(!conversations.starters.contains_key("Bob"));
    assert_eq!(conversations.longest_streak, 12);

    let activity = &result.metrics.activity;
    assert_eq!(activity.hourly[9], 12);
    assert_eq!(activity.peak_hour, 9);
    // 12 June 2024 is a Wednesday
    assert_eq!(activity.weekday[3], 12);
    assert_eq!(activity.time_of_day.morning, 12);
}

#[test]
fn test_slow_lopsided_chat() {
    let result = analyze(&parse(SLOW_WEEKS)).unwrap();

    assert_eq!(result.participants, ["Sam".to_string(), "Jo".to_string()]);
    assert_eq!(result.counts.by_participant["Sam"], 5);
    assert_eq!(result.counts.by_participant["Jo"], 2);

    // replies: Jo 210 min, Sam 630 min (23:30 -> 10:00), Jo 180 min
    let replies = &result.metrics.replies;
    assert_eq!(replies.counted_replies, 3);
    assert!((replies.average_minutes.unwrap() - 340.0).abs() < 1e-9);
    assert_eq!(replies.slowest_minutes, Some(630.0));
    assert_eq!(result.score.reply, -15);

    // 2/7 ~ 0.286
    assert_eq!(result.score.balance, 5);

    // 4 active dates over 19 days and 13 hours -> span 20
    assert_eq!(result.metrics.consistency.active_days, 4);
    assert_eq!(result.metrics.consistency.days_span, 20);
    assert_eq!(result.score.consistency, 0);

    assert_eq!(result.score.raw_score, 50 - 15 + 5);
    assert_eq!(result.love_score(), 32);
    assert!(result.insights.summary.contains("now and then"));
    assert_eq!(result.metrics.sentiment.negative, 1);
}

// ============================================================================
// Parser to engine hand-off
// ============================================================================

#[test]
fn test_dropped_lines_do_not_reach_engine() {
    let text = "\
1/1/2024, 10:00 - Messages and calls are end-to-end encrypted. Tap: to learn more
1/1/2024, 10:00 - Alice: hi
garbage without a timestamp
1/13/2024, 10:01 - Bob: month thirteen
1/1/2024, 13:02 pm - Bob: thirteen pm
1/1/2024, 10:03 - Bob: hello";
    let (messages, stats) = TranscriptParser::new().parse_with_stats(text);
    assert_eq!(messages.len(), 2);
    assert_eq!(stats.system_notices, 1);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.invalid_timestamps, 2);

    let result = analyze(&messages).unwrap();
    assert_eq!(result.total_messages(), 2);
    assert_eq!(result.metrics.replies.average_minutes, Some(3.0));
}

#[test]
fn test_meridiem_conversion_end_to_end() {
    let text = "\
1/1/2024, 12:05 am - Alice: just after midnight
1/1/2024, 12:10 PM - Bob: just after noon
1/1/2024, 1:15pm - Alice: afternoon";
    let messages = parse(text);
    let hours: Vec<u32> = messages
        .iter()
        .map(|m| chrono::Timelike::hour(&m.timestamp))
        .collect();
    assert_eq!(hours, vec![0, 12, 13]);

    let result = analyze(&messages).unwrap();
    assert_eq!(result.metrics.activity.time_of_day.night, 1);
    assert_eq!(result.metrics.activity.time_of_day.afternoon, 2);
}

#[test]
fn test_join_continuations_feeds_word_counts() {
    let text = "\
1/1/2024, 10:00 - Alice: first line
second line here
1/1/2024, 10:01 - Bob: ok";
    let joined = TranscriptParser::with_config(ParserConfig::new().with_join_continuations(true))
        .parse(text);
    let plain = parse(text);

    let joined_result = analyze(&joined).unwrap();
    let plain_result = analyze(&plain).unwrap();
    assert_eq!(joined_result.metrics.words.by_participant["Alice"], 5);
    assert_eq!(plain_result.metrics.words.by_participant["Alice"], 2);
}

#[test]
fn test_parse_file_then_analyze() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    std::fs::write(&path, ALTERNATING_DAY).unwrap();

    let messages = TranscriptParser::new().parse_file(&path).unwrap();
    assert_eq!(messages.len(), 12);
    assert_eq!(
        messages[0].timestamp,
        Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap()
    );
    assert_eq!(analyze(&messages).unwrap().love_score(), 96);
}

#[test]
fn test_emoji_sequences_count_as_one() {
    let text = "\
1/1/2024, 10:00 - Alice: nice \u{1F44D}\u{1F3FD}
1/1/2024, 10:01 - Bob: thanks
1/1/2024, 10:02 - Alice: see you
1/1/2024, 10:03 - Bob: bye";
    let result = analyze(&parse(text)).unwrap();
    let emoji = &result.metrics.emoji;
    assert_eq!(emoji.total, 1);
    assert!((emoji.ratio - 0.25).abs() < 1e-12);
    assert_eq!(emoji.frequency.keys().collect::<Vec<_>>(), vec!["\u{1F44D}\u{1F3FD}"]);
    assert_eq!(result.score.emoji, 15);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_analysis_config_reply_window() {
    let messages = parse(SLOW_WEEKS);
    let strict = Analyzer::with_config(AnalysisConfig::new().with_reply_window_minutes(200))
        .analyze(&messages)
        .unwrap();
    assert_eq!(strict.metrics.replies.counted_replies, 1);
    assert_eq!(strict.metrics.replies.average_minutes, Some(180.0));
}

#[test]
fn test_top_emoji_limit() {
    let text = "\
1/1/2024, 10:00 - Alice: 😀😁😂
1/1/2024, 10:01 - Bob: 🤣😃😄";
    let result = Analyzer::with_config(AnalysisConfig::new().with_top_emoji_limit(2))
        .analyze(&parse(text))
        .unwrap();
    assert_eq!(result.metrics.emoji.top.len(), 2);
    assert_eq!(result.metrics.emoji.frequency.len(), 6);
}

// ============================================================================
// Determinism
// ============================================================================

#[cfg(feature = "json-output")]
#[test]
fn test_analysis_is_byte_stable() {
    let messages = parse(SLOW_WEEKS);
    let first = love_theorem::output::to_json(&analyze(&messages).unwrap()).unwrap();
    let second = love_theorem::output::to_json(&analyze(&messages).unwrap()).unwrap();
    assert_eq!(first, second);
}
