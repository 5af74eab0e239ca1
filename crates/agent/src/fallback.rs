//! Rule-based reply generation
//!
//! Produces a complete reply from fixed templates when no model reply is
//! available. Variety comes from picking among equivalent phrasings; the
//! picker is injectable so tests can pin the selection.

use std::sync::Arc;

use loan_advisor_core::{user_turn_count, ConversationStage, LoanProduct, Mood, Turn};
use rand::Rng;

/// Picks one index out of a candidate set.
pub trait PhrasePicker: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len >= 1`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform random selection, used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPicker;

impl PhrasePicker for UniformPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

const GREETINGS: [&str; 4] = [
    "Hey there! 😊 Thanks for stopping by. How's your day going?",
    "Hi! Nice to meet you. What brings you here today?",
    "Hey! Welcome. How are you doing today?",
    "Hi there! Great to have you here. What's on your mind?",
];

const RAPPORT_FIRST_TURN: &str = "That's great to hear! Tell me a bit more about yourself - what do you do, or what are you passionate about? 😊";
const RAPPORT_SECOND_TURN: &str = "I love that! So what are you hoping to accomplish? Any big plans or goals you're working towards?";
const RAPPORT_LATER_TURNS: &str = "That sounds really interesting! I'm curious - what made you reach out today? Is there something specific you're looking to achieve?";

const GOAL_SIGNALS: [&str; 5] = ["goal", "want", "need", "looking", "hoping"];
const TRANSITION_WITH_GOAL: &str = "That's awesome! I'd love to help you with that. Can you tell me a bit more about what you're thinking? What's your situation like?";
const TRANSITION_GENERIC: &str = "Got it! So what are you hoping to accomplish? I'm here to help figure out the best way forward for you.";

const RATE_SIGNALS: [&str; 5] = ["rate", "interest", "cost", "price", "how much"];
const URGENCY_SIGNALS: [&str; 5] = ["urgent", "quick", "soon", "asap", "fast"];
const RATE_INTRO: &str = "Great question! Let me break down the rates for you - it really depends on what type of loan you're interested in.";
const URGENCY_INTRO: &str = "I totally get that you need this sorted quickly! Let's find something that works for your timeline.";
const GENERIC_INTRO: &str = "Perfect! I'd love to help you find financing that actually fits your situation.";

const SUGGESTIONS_HEADER: &str = "Here are a few options that might work for you:";

/// At most this many products are spelled out in a reply.
const MAX_SUGGESTION_LINES: usize = 3;

const FOLLOW_UP_HOME: &str =
    "What's your target loan amount? And are you thinking about a fixed or variable rate?";
const FOLLOW_UP_VEHICLE: &str =
    "What kind of vehicle are you looking at? And what's your budget range?";
const FOLLOW_UP_BUSINESS: &str = "Tell me a bit more about your business - how long have you been operating, and what do you need the funds for?";
const FOLLOW_UP_GENERIC: &str = "What's the loan amount you're thinking about? And what's your timeline for getting this sorted?";

const DISCLAIMER: &str = "Just so you know - final approval and rates depend on a full application review, but I'm here to guide you through everything! 👍";

const STRESSED_EMPATHY: [&str; 2] = [
    "I hear you — let's take this one step at a time.",
    "Totally understand that this can feel heavy.",
];
const URGENT_EMPATHY: [&str; 2] = [
    "Got it, speed matters here.",
    "I feel the clock with you, so let's move quickly.",
];
const EXCITED_EMPATHY: [&str; 2] = [
    "Love the energy you're bringing!",
    "I can feel your excitement from here!",
];
const CELEBRATORY_EMPATHY: [&str; 2] = [
    "Congratulations on the milestone!",
    "That's such a special moment — thanks for sharing it with me.",
];
const CURIOUS_EMPATHY: [&str; 2] = [
    "Great questions — I appreciate your curiosity.",
    "Love that you're digging in with thoughtful questions.",
];

const GREETING_CLOSERS: [&str; 2] = [
    "How's the day treating you so far?",
    "Happy to chat whenever you're ready.",
];
const RAPPORT_CLOSERS: [&str; 2] = [
    "Tell me whatever feels most relevant.",
    "I'm all ears if you want to share more.",
];
const TRANSITION_CLOSERS: [&str; 2] = [
    "What details feel most important to you right now?",
    "Where would you like to start?",
];
const LOAN_CLOSERS: [&str; 3] = [
    "Does that line up with what you'd need?",
    "How does that feel compared to what you were imagining?",
    "Want me to dig into numbers next?",
];

/// Template-driven responder used when no model reply is available.
///
/// Every reply is wrapped with a mood-matched empathy prefix and finished
/// with a stage-appropriate soft closing so the conversation keeps moving.
pub struct FallbackResponder {
    picker: Arc<dyn PhrasePicker>,
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackResponder {
    pub fn new() -> Self {
        Self {
            picker: Arc::new(UniformPicker),
        }
    }

    /// Responder with an injected phrase picker.
    pub fn with_picker(picker: Arc<dyn PhrasePicker>) -> Self {
        Self { picker }
    }

    /// Produce a reply for the given stage and mood.
    pub fn respond(
        &self,
        message: &str,
        suggestions: &[LoanProduct],
        stage: ConversationStage,
        history: &[Turn],
        mood: Mood,
    ) -> String {
        let lowered = message.to_lowercase();
        let empathy = self.empathy_prefix(mood);

        let body = match stage {
            ConversationStage::InitialGreeting => {
                wrap_with_empathy(empathy, self.pick(&GREETINGS))
            }
            ConversationStage::RapportBuilding => {
                let template = match user_turn_count(history) {
                    1 => RAPPORT_FIRST_TURN,
                    2 => RAPPORT_SECOND_TURN,
                    _ => RAPPORT_LATER_TURNS,
                };
                wrap_with_empathy(empathy, template)
            }
            ConversationStage::Transitioning => {
                let template = if GOAL_SIGNALS.iter().any(|k| lowered.contains(k)) {
                    TRANSITION_WITH_GOAL
                } else {
                    TRANSITION_GENERIC
                };
                wrap_with_empathy(empathy, template)
            }
            ConversationStage::LoanDiscussion => {
                self.loan_discussion_body(&lowered, suggestions, empathy)
            }
        };

        self.soft_close(&body, stage)
    }

    fn loan_discussion_body(
        &self,
        lowered: &str,
        suggestions: &[LoanProduct],
        empathy: Option<&'static str>,
    ) -> String {
        let intro = if RATE_SIGNALS.iter().any(|k| lowered.contains(k)) {
            RATE_INTRO
        } else if URGENCY_SIGNALS.iter().any(|k| lowered.contains(k)) {
            URGENCY_INTRO
        } else {
            GENERIC_INTRO
        };

        let mut sections = vec![wrap_with_empathy(empathy, intro)];

        if !suggestions.is_empty() {
            sections.push(SUGGESTIONS_HEADER.to_string());
            for product in suggestions.iter().take(MAX_SUGGESTION_LINES) {
                sections.push(format!(
                    "• {} - {} Rates start around {}% with terms up to {} months.",
                    product.name,
                    product.description,
                    product.interest_rate,
                    product.max_term_months(),
                ));
            }
        }

        sections.push(follow_up(lowered).to_string());
        sections.push(DISCLAIMER.to_string());

        sections.join("\n\n")
    }

    fn empathy_prefix(&self, mood: Mood) -> Option<&'static str> {
        let candidates: &[&str] = match mood {
            Mood::Stressed => &STRESSED_EMPATHY,
            Mood::Urgent => &URGENT_EMPATHY,
            Mood::Excited => &EXCITED_EMPATHY,
            Mood::Celebratory => &CELEBRATORY_EMPATHY,
            Mood::Curious => &CURIOUS_EMPATHY,
            Mood::Neutral => return None,
        };
        Some(self.pick(candidates))
    }

    /// Append a closer unless the text already ends open-endedly.
    fn soft_close(&self, text: &str, stage: ConversationStage) -> String {
        let stripped = text.trim();
        if stripped.is_empty() || ends_open_ended(stripped) {
            return stripped.to_string();
        }

        let closers: &[&str] = match stage {
            ConversationStage::InitialGreeting => &GREETING_CLOSERS,
            ConversationStage::RapportBuilding => &RAPPORT_CLOSERS,
            ConversationStage::Transitioning => &TRANSITION_CLOSERS,
            ConversationStage::LoanDiscussion => &LOAN_CLOSERS,
        };
        let closer = self.pick(closers);

        if stripped.contains("\n\n") {
            format!("{stripped}\n\n{closer}")
        } else {
            format!("{stripped} {closer}")
        }
    }

    fn pick(&self, candidates: &[&'static str]) -> &'static str {
        candidates[self.picker.pick_index(candidates.len())]
    }
}

fn follow_up(lowered: &str) -> &'static str {
    if ["home", "house", "mortgage"].iter().any(|k| lowered.contains(k)) {
        FOLLOW_UP_HOME
    } else if ["car", "vehicle", "auto"].iter().any(|k| lowered.contains(k)) {
        FOLLOW_UP_VEHICLE
    } else if ["business", "company"].iter().any(|k| lowered.contains(k)) {
        FOLLOW_UP_BUSINESS
    } else {
        FOLLOW_UP_GENERIC
    }
}

fn wrap_with_empathy(prefix: Option<&str>, text: &str) -> String {
    let Some(prefix) = prefix else {
        return text.to_string();
    };
    if text.to_lowercase().starts_with(&prefix.to_lowercase()) {
        return text.to_string();
    }
    format!("{prefix} {text}").trim().to_string()
}

fn ends_open_ended(text: &str) -> bool {
    text.ends_with('?') || text.ends_with('!') || text.ends_with('…') || text.ends_with("...")
}
