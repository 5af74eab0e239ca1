//! Conversation engine for the loan advisor
//!
//! Classifies how far a conversation has progressed and what tone the
//! customer is striking, picks matching loan products, and produces a
//! reply from either a hosted model or rule-based templates.
//!
//! The entry point is [`engine::ConversationEngine::respond`]; everything
//! else in this crate feeds it.

pub mod engine;
pub mod fallback;
pub mod humanize;
pub mod mood;
pub mod prompt;
pub mod stage;
pub mod suggest;

pub use engine::ConversationEngine;
pub use fallback::{FallbackResponder, PhrasePicker, UniformPicker};
pub use humanize::humanize;
pub use mood::MoodDetector;
pub use stage::StageClassifier;
pub use suggest::SuggestionSelector;
