//! Conversation orchestration
//!
//! Ties the classifiers, the suggestion selector, and the reply layers
//! together. The model collaborator is optional; when it is absent or a
//! call fails, the rule-based responder answers instead. The engine never
//! errors: every valid message gets a reply.

use std::sync::Arc;

use loan_advisor_core::{
    ConversationStage, EngineResponse, LanguageModel, LoanProduct, ProductCatalog, Turn,
};
use tracing::{debug, warn};

use crate::fallback::{FallbackResponder, PhrasePicker};
use crate::humanize::humanize;
use crate::mood::MoodDetector;
use crate::prompt::build_generate_request;
use crate::stage::StageClassifier;
use crate::suggest::SuggestionSelector;

/// Orchestrates a single conversational turn.
pub struct ConversationEngine {
    classifier: StageClassifier,
    mood: MoodDetector,
    selector: SuggestionSelector,
    fallback: FallbackResponder,
    llm: Option<Arc<dyn LanguageModel>>,
}

impl ConversationEngine {
    /// Engine without a model collaborator; every reply is rule-based.
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            classifier: StageClassifier::new(),
            mood: MoodDetector::new(),
            selector: SuggestionSelector::new(catalog),
            fallback: FallbackResponder::new(),
            llm: None,
        }
    }

    /// Engine that tries the model first and falls back on failure.
    pub fn with_llm(catalog: Arc<ProductCatalog>, llm: Arc<dyn LanguageModel>) -> Self {
        let mut engine = Self::new(catalog);
        engine.llm = Some(llm);
        engine
    }

    /// Swap in a phrase picker for deterministic fallback output.
    pub fn with_phrase_picker(mut self, picker: Arc<dyn PhrasePicker>) -> Self {
        self.fallback = FallbackResponder::with_picker(picker);
        self
    }

    /// Produce a reply to the message given the conversation so far.
    pub async fn respond(&self, message: &str, history: &[Turn]) -> EngineResponse {
        let stage = self.classifier.classify(history, message);
        let suggestions = if stage == ConversationStage::LoanDiscussion {
            self.selector.select(message)
        } else {
            Vec::new()
        };
        let mood = self.mood.detect(message);

        debug!(
            stage = %stage,
            mood = %mood,
            suggestion_count = suggestions.len(),
            "classified message"
        );

        if let Some(reply) = self.attempt_llm(stage, &suggestions, history, message).await {
            return EngineResponse::llm(reply, suggestions);
        }

        let reply = self
            .fallback
            .respond(message, &suggestions, stage, history, mood);
        EngineResponse::rule(reply, suggestions)
    }

    /// One attempt against the model; any failure yields `None`.
    async fn attempt_llm(
        &self,
        stage: ConversationStage,
        suggestions: &[LoanProduct],
        history: &[Turn],
        message: &str,
    ) -> Option<String> {
        let llm = self.llm.as_ref()?;
        if !llm.is_available().await {
            return None;
        }

        let request = build_generate_request(stage, suggestions, history, message);
        match llm.generate(request).await {
            Ok(response) => {
                let reply = humanize(&response.text);
                if reply.is_empty() {
                    None
                } else {
                    Some(reply)
                }
            }
            Err(e) => {
                warn!(error = %e, "model call failed, using rule-based reply");
                None
            }
        }
    }
}
