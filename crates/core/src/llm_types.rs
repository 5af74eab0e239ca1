//! Request and response types shared by every language-model backend.
//!
//! The agent assembles a [`GenerateRequest`] holding the chat transcript
//! plus sampling knobs; a backend translates it to its wire format and
//! hands back a [`GenerateResponse`].

use serde::{Deserialize, Serialize};

/// Sampling temperature applied when the caller sets none.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A chat-completion request, backend agnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Ordered transcript, system prompt first.
    pub messages: Vec<Message>,
    /// Upper bound on generated tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature in 0.0..=2.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Penalty for re-introducing tokens already present (-2.0..=2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,
    /// Penalty scaled by how often a token has appeared (-2.0..=2.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,
    /// Per-request model override; backends fall back to their configured model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            max_tokens: None,
            temperature: Some(DEFAULT_TEMPERATURE),
            presence_penalty: None,
            frequency_penalty: None,
            model: None,
        }
    }
}

impl GenerateRequest {
    /// Start a request from a system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
            ..Self::default()
        }
    }

    /// Append a further system message, typically dynamic context.
    pub fn with_system_message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(Message::system(text));
        self
    }

    /// Append a user message.
    pub fn with_user_message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(Message::user(text));
        self
    }

    /// Append a prior assistant reply.
    pub fn with_assistant_message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(Message::assistant(text));
        self
    }

    /// Cap the number of generated tokens.
    pub fn with_max_tokens(mut self, limit: u32) -> Self {
        self.max_tokens = Some(limit);
        self
    }

    /// Set the sampling temperature, clamped to 0.0..=2.0.
    pub fn with_temperature(mut self, value: f32) -> Self {
        self.temperature = Some(value.clamp(0.0, 2.0));
        self
    }

    /// Set the presence penalty.
    pub fn with_presence_penalty(mut self, value: f32) -> Self {
        self.presence_penalty = Some(value);
        self
    }

    /// Set the frequency penalty.
    pub fn with_frequency_penalty(mut self, value: f32) -> Self {
        self.frequency_penalty = Some(value);
        self
    }

    /// Override the model for this request only.
    pub fn with_model(mut self, name: impl Into<String>) -> Self {
        self.model = Some(name.into());
        self
    }
}

/// One entry in a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    fn of(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// System instruction message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::of(Role::System, content)
    }

    /// End-user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::of(Role::User, content)
    }

    /// Assistant reply message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::of(Role::Assistant, content)
    }
}

/// Speaker role, serialized lowercase to match the OpenAI wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// What a backend produced for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated reply text.
    pub text: String,
    /// Why generation stopped.
    pub finish_reason: FinishReason,
    /// Token accounting, when the backend reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Build a plain response that finished normally.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: content.into(),
            finish_reason: FinishReason::Stop,
            usage: None,
        }
    }
}

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop.
    #[default]
    Stop,
    /// Ran into the token limit.
    Length,
    /// The provider filtered the output.
    ContentFilter,
    /// The backend reported a failure mid-generation.
    Error,
}

/// Token accounting reported by a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Sum prompt and completion counts into a total.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}
