//! Conversation stage classification
//!
//! Decides how far along a conversation is so the reply layer can match
//! its tone: greet first, build rapport, then talk products.

use loan_advisor_core::{user_turn_count, ConversationStage, Turn};

/// Keywords that indicate the customer is talking about financing.
const LOAN_KEYWORDS: [&str; 12] = [
    "loan",
    "borrow",
    "finance",
    "mortgage",
    "credit",
    "debt",
    "rate",
    "interest",
    "home",
    "car",
    "business",
    "education",
];

/// Classifies the stage of a conversation.
///
/// Stateless; the same (history, message) pair always yields the same
/// stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageClassifier;

impl StageClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Determine the stage for an incoming message.
    ///
    /// An empty history always yields `InitialGreeting`, even when the
    /// message itself already carries loan intent. Loan keywords in either
    /// the message or the history move the conversation straight to
    /// `LoanDiscussion` regardless of how few turns have passed.
    pub fn classify(&self, history: &[Turn], message: &str) -> ConversationStage {
        if history.is_empty() {
            return ConversationStage::InitialGreeting;
        }

        let turns = user_turn_count(history);

        let lowered = message.to_lowercase();
        let has_loan_intent = LOAN_KEYWORDS.iter().any(|k| lowered.contains(k));

        let history_text = history
            .iter()
            .map(|turn| turn.content.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let history_mentions_loans = LOAN_KEYWORDS.iter().any(|k| history_text.contains(k));

        if turns <= 2 && !has_loan_intent && !history_mentions_loans {
            ConversationStage::RapportBuilding
        } else if has_loan_intent || history_mentions_loans {
            ConversationStage::LoanDiscussion
        } else if turns <= 4 {
            ConversationStage::Transitioning
        } else {
            ConversationStage::LoanDiscussion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_talk(user_turns: usize) -> Vec<Turn> {
        let mut history = Vec::new();
        for i in 0..user_turns {
            history.push(Turn::user(format!("Just enjoying my day, round {}", i)));
            history.push(Turn::assistant("That sounds lovely!"));
        }
        history
    }

    #[test]
    fn test_empty_history_is_initial_greeting() {
        let classifier = StageClassifier::new();
        assert_eq!(
            classifier.classify(&[], "Hi"),
            ConversationStage::InitialGreeting
        );
    }

    #[test]
    fn test_empty_history_wins_over_loan_intent() {
        let classifier = StageClassifier::new();
        assert_eq!(
            classifier.classify(&[], "I need a mortgage for my first house"),
            ConversationStage::InitialGreeting
        );
    }

    #[test]
    fn test_early_small_talk_builds_rapport() {
        let classifier = StageClassifier::new();
        let history = small_talk(1);
        assert_eq!(
            classifier.classify(&history, "I love hiking on weekends"),
            ConversationStage::RapportBuilding
        );
    }

    #[test]
    fn test_loan_intent_in_message_skips_rapport() {
        let classifier = StageClassifier::new();
        let history = small_talk(1);
        assert_eq!(
            classifier.classify(&history, "Actually I need a loan"),
            ConversationStage::LoanDiscussion
        );
    }

    #[test]
    fn test_loan_mention_in_history_skips_rapport() {
        let classifier = StageClassifier::new();
        let history = vec![
            Turn::user("I want to finance a new kitchen"),
            Turn::assistant("Tell me more!"),
        ];
        assert_eq!(
            classifier.classify(&history, "It needs a full remodel"),
            ConversationStage::LoanDiscussion
        );
    }

    #[test]
    fn test_mid_conversation_without_intent_transitions() {
        let classifier = StageClassifier::new();
        let history = small_talk(3);
        assert_eq!(
            classifier.classify(&history, "I teach math at a school"),
            ConversationStage::Transitioning
        );
        let history = small_talk(4);
        assert_eq!(
            classifier.classify(&history, "I also play guitar"),
            ConversationStage::Transitioning
        );
    }

    #[test]
    fn test_long_conversation_moves_to_loans() {
        let classifier = StageClassifier::new();
        let history = small_talk(5);
        assert_eq!(
            classifier.classify(&history, "So what do you think?"),
            ConversationStage::LoanDiscussion
        );
    }

    #[test]
    fn test_classification_is_pure() {
        let classifier = StageClassifier::new();
        let history = small_talk(2);
        let first = classifier.classify(&history, "What would you suggest?");
        let second = classifier.classify(&history, "What would you suggest?");
        assert_eq!(first, second);
    }
}
