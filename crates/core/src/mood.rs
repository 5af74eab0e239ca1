//! Emotional tone of the latest user message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mood read off a single user message.
///
/// Detection picks exactly one; there is no blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Worried, anxious, overwhelmed
    Stressed,
    /// High positive energy
    Excited,
    /// Time pressure, deadlines
    Urgent,
    /// Milestones worth congratulating
    Celebratory,
    /// Asking questions without loan vocabulary
    Curious,
    /// No emotional signal
    #[default]
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stressed => "stressed",
            Self::Excited => "excited",
            Self::Urgent => "urgent",
            Self::Celebratory => "celebratory",
            Self::Curious => "curious",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_default_is_neutral() {
        assert_eq!(Mood::default(), Mood::Neutral);
    }

    #[test]
    fn test_mood_serde_names() {
        let json = serde_json::to_string(&Mood::Celebratory).unwrap();
        assert_eq!(json, "\"celebratory\"");
    }
}
