//! Hosted language model backends.
//!
//! Currently one implementation, [`OpenAiBackend`], which speaks the
//! OpenAI-compatible chat completions protocol and plugs into the core
//! `LanguageModel` trait.

use thiserror::Error;

pub mod openai;

pub use openai::{OpenAiBackend, OpenAiConfig};

/// Failures from a model backend.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("api call failed: {0}")]
    Api(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    InvalidResponse(String),

    #[error("backend misconfigured: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<LlmError> for loan_advisor_core::Error {
    fn from(err: LlmError) -> Self {
        loan_advisor_core::Error::Llm(err.to_string())
    }
}
