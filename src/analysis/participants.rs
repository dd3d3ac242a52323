//! Sender ranking, participant resolution and word counts.

use std::collections::{BTreeMap, HashMap};

use crate::Message;
use crate::analysis::models::{Counts, WordStats};
use crate::error::{LoveTheoremError, Result};

/// Message and word totals for one sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderTally {
    pub name: String,
    pub messages: usize,
    pub words: usize,
}

/// Tallies every sender and orders them busiest first.
///
/// Equal counts keep the order in which the senders first appear.
pub fn rank_senders(messages: &[Message]) -> Vec<SenderTally> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<SenderTally> = Vec::new();

    for msg in messages {
        let slot = *index.entry(msg.sender.as_str()).or_insert_with(|| {
            tallies.push(SenderTally {
                name: msg.sender.clone(),
                messages: 0,
                words: 0,
            });
            tallies.len() - 1
        });
        tallies[slot].messages += 1;
        tallies[slot].words += msg.word_count();
    }

    tallies.sort_by(|a, b| b.messages.cmp(&a.messages));
    tallies
}

/// Takes the two busiest senders, failing if there are fewer than two.
///
/// # Example
///
/// ```rust
/// use love_theorem::analysis::participants::{rank_senders, resolve_participants};
/// use love_theorem::Message;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let messages = vec![
///     Message::new(now, "Bob", "hi"),
///     Message::new(now, "Alice", "hey"),
///     Message::new(now, "Alice", "how are you"),
/// ];
/// let ranked = rank_senders(&messages);
/// let [a, b] = resolve_participants(&ranked)?;
/// assert_eq!((a.name.as_str(), b.name.as_str()), ("Alice", "Bob"));
/// # Ok::<(), love_theorem::LoveTheoremError>(())
/// ```
pub fn resolve_participants(ranked: &[SenderTally]) -> Result<[&SenderTally; 2]> {
    match ranked {
        [first, second, ..] => Ok([first, second]),
        _ => Err(LoveTheoremError::insufficient_participants(ranked.len())),
    }
}

/// Message counts for the two participants plus the overall total.
pub fn counts(pair: [&SenderTally; 2], total_messages: usize) -> Counts {
    Counts {
        by_participant: pair
            .iter()
            .map(|t| (t.name.clone(), t.messages))
            .collect(),
        total_messages,
    }
}

/// Word totals and per-message averages.
pub fn word_stats(pair: [&SenderTally; 2], ranked: &[SenderTally]) -> WordStats {
    let mut by_participant = BTreeMap::new();
    let mut words_per_message = BTreeMap::new();
    for tally in pair {
        by_participant.insert(tally.name.clone(), tally.words);
        words_per_message.insert(tally.name.clone(), average(tally.words, tally.messages));
    }

    let total_words: usize = ranked.iter().map(|t| t.words).sum();
    let total_messages: usize = ranked.iter().map(|t| t.messages).sum();

    WordStats {
        by_participant,
        words_per_message,
        overall_words_per_message: average(total_words, total_messages),
    }
}

/// `min(countA, countB) / total`.
pub fn balance(pair: [&SenderTally; 2], total_messages: usize) -> f64 {
    let smaller = pair[0].messages.min(pair[1].messages);
    average(smaller, total_messages)
}

fn average(sum: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
