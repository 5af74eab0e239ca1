//! Mood detection
//!
//! Tags each incoming message with an emotional tone so replies can open
//! with the right acknowledgement. One mood per message, no blending.

use loan_advisor_core::Mood;

const STRESSED_KEYWORDS: [&str; 7] = [
    "worried",
    "stressed",
    "anxious",
    "overwhelmed",
    "nervous",
    "unsure",
    "confused",
];

const EXCITED_KEYWORDS: [&str; 5] = ["excited", "thrilled", "can't wait", "pumped", "stoked"];

const URGENT_KEYWORDS: [&str; 6] = ["urgent", "asap", "deadline", "rush", "quick", "soon"];

const CELEBRATORY_KEYWORDS: [&str; 6] = [
    "celebrate",
    "milestone",
    "wedding",
    "baby",
    "graduation",
    "anniversary",
];

/// Keywords that make a question informational rather than curious.
const LOAN_TOPIC_KEYWORDS: [&str; 3] = ["loan", "rate", "interest"];

/// Detects the emotional tone of a message.
///
/// Keyword groups are checked in a fixed order; the first group with a
/// match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodDetector;

impl MoodDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, message: &str) -> Mood {
        let lowered = message.to_lowercase();

        if STRESSED_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Mood::Stressed;
        }
        if EXCITED_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Mood::Excited;
        }
        if URGENT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Mood::Urgent;
        }
        if CELEBRATORY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Mood::Celebratory;
        }

        if message.contains('?') && !LOAN_TOPIC_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Mood::Curious;
        }

        Mood::Neutral
    }
}
