//! Turns, roles, and the advisory stage ladder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the conversation stands, from first contact to loan talk.
///
/// The classifier walks history forward through these stages; suggestions
/// only surface once [`ConversationStage::LoanDiscussion`] is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStage {
    /// No history yet, the very first exchange
    #[default]
    InitialGreeting,
    /// Getting to know the customer, loans not yet on the table
    RapportBuilding,
    /// Gently steering towards needs and goals
    Transitioning,
    /// Actively discussing loan products
    LoanDiscussion,
}

impl ConversationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InitialGreeting => "initial_greeting",
            Self::RapportBuilding => "rapport_building",
            Self::Transitioning => "transitioning",
            Self::LoanDiscussion => "loan_discussion",
        }
    }

    /// Whether product suggestions belong in replies at this stage.
    pub fn allows_suggestions(&self) -> bool {
        matches!(self, Self::LoanDiscussion)
    }
}

impl fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    /// The customer
    User,
    /// The advisor
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exchange in the transcript.
///
/// History is supplied by the caller; the engine only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Speaker of this turn
    pub role: TurnRole,
    /// What was said
    pub content: String,
}

impl Turn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Shorthand for a customer turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Shorthand for an advisor turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }
}

/// How many turns in a history slice the customer spoke.
pub fn user_turn_count(history: &[Turn]) -> usize {
    history.iter().filter(|t| t.is_user()).count()
}
