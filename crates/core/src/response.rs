//! What the engine hands back to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LoanProduct;

/// Origin of a reply's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    /// Hosted language model
    Llm,
    /// Rule-based fallback responder
    Rule,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Rule => "rule",
        }
    }
}

impl fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reply plus the suggestions that informed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineResponse {
    /// Reply text for the user
    pub reply: String,
    /// Suggested products, in selection order
    pub suggestions: Vec<LoanProduct>,
    /// Where the reply text came from
    pub source: ResponseSource,
}

impl EngineResponse {
    fn tagged(reply: impl Into<String>, suggestions: Vec<LoanProduct>, source: ResponseSource) -> Self {
        Self {
            reply: reply.into(),
            suggestions,
            source,
        }
    }

    /// A reply the model generated.
    pub fn llm(reply: impl Into<String>, suggestions: Vec<LoanProduct>) -> Self {
        Self::tagged(reply, suggestions, ResponseSource::Llm)
    }

    /// A reply the rule-based responder generated.
    pub fn rule(reply: impl Into<String>, suggestions: Vec<LoanProduct>) -> Self {
        Self::tagged(reply, suggestions, ResponseSource::Rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ResponseSource::Llm).unwrap(), "\"llm\"");
        assert_eq!(serde_json::to_string(&ResponseSource::Rule).unwrap(), "\"rule\"");
    }

    #[test]
    fn test_response_constructors() {
        let resp = EngineResponse::rule("Hi there!", Vec::new());
        assert_eq!(resp.source, ResponseSource::Rule);
        assert!(resp.suggestions.is_empty());

        let resp = EngineResponse::llm("Hello!", Vec::new());
        assert_eq!(resp.source, ResponseSource::Llm);
    }
}
