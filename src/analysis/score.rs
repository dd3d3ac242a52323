//! Tier tables and the composite Love Score.
//!
//! Every comparison is strict: a value sitting exactly on a threshold falls
//! to the next lower tier.

use crate::analysis::models::ScoreBreakdown;

/// Starting points before any component is added.
pub const BASE_SCORE: i32 = 50;

/// Highest reachable raw score (`50 + 25 + 20 + 15 + 15`).
pub const MAX_RAW_SCORE: i32 = 125;

/// Reply-speed component `R` from the average reply delay in minutes.
pub fn reply_points(average_minutes: Option<f64>) -> i32 {
    match average_minutes {
        None => 0,
        Some(avg) if avg < 2.0 => 25,
        Some(avg) if avg < 5.0 => 15,
        Some(avg) if avg < 10.0 => 10,
        Some(avg) if avg < 30.0 => 5,
        Some(_) => -15,
    }
}

/// Emoji component `E` from emoji per message.
pub fn emoji_points(ratio: f64) -> i32 {
    if ratio > 0.5 {
        20
    } else if ratio > 0.2 {
        15
    } else if ratio > 0.1 {
        10
    } else if ratio > 0.05 {
        5
    } else {
        0
    }
}

/// Balance component `M` from `min(countA, countB) / total`.
pub fn balance_points(balance: f64) -> i32 {
    if balance > 0.45 {
        15
    } else if balance > 0.35 {
        10
    } else if balance > 0.25 {
        5
    } else {
        -10
    }
}

/// Consistency component `C` from active days over span.
pub fn consistency_points(ratio: f64) -> i32 {
    if ratio > 0.8 {
        15
    } else if ratio > 0.5 {
        10
    } else if ratio > 0.3 {
        5
    } else {
        0
    }
}

/// Scales a raw score onto 0–100.
///
/// ```rust
/// use love_theorem::analysis::score::love_score;
///
/// assert_eq!(love_score(120), 96);
/// assert_eq!(love_score(125), 100);
/// assert_eq!(love_score(-5), 0);
/// ```
pub fn love_score(raw_score: i32) -> u8 {
    let scaled = f64::from(raw_score) / f64::from(MAX_RAW_SCORE) * 100.0;
    scaled.clamp(0.0, 100.0).round() as u8
}

impl ScoreBreakdown {
    /// Folds the four component inputs into a breakdown.
    pub fn compute(
        average_reply_minutes: Option<f64>,
        emoji_ratio: f64,
        balance: f64,
        consistency_ratio: f64,
    ) -> Self {
        let reply = reply_points(average_reply_minutes);
        let emoji = emoji_points(emoji_ratio);
        let balance = balance_points(balance);
        let consistency = consistency_points(consistency_ratio);
        let raw_score = BASE_SCORE + reply + emoji + balance + consistency;

        Self {
            base: BASE_SCORE,
            reply,
            emoji,
            balance,
            consistency,
            raw_score,
            love_score: love_score(raw_score),
        }
    }
}
