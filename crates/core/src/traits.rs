//! Seam between the conversation engine and hosted model backends.

use crate::{GenerateRequest, GenerateResponse, Result};
use async_trait::async_trait;

/// A hosted chat-completion model the engine may consult.
///
/// The engine treats the model as an optional collaborator: when none is
/// attached, or a call fails, the rule-based responder produces the reply
/// instead. Calls are single-shot; callers never retry.
///
/// ```ignore
/// let model: Arc<dyn LanguageModel> = Arc::new(OpenAiBackend::new(config)?);
/// let request = GenerateRequest::new("You are a friendly loan advisor")
///     .with_user_message("What rates do you offer?");
/// let reply = model.generate(request).await?;
/// println!("{}", reply.text);
/// ```
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    /// Run one completion round-trip.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;

    /// Whether the backend is ready to take requests. False when no
    /// credential is configured.
    async fn is_available(&self) -> bool;

    /// Model identifier, used in logs.
    fn model_name(&self) -> &str;
}
