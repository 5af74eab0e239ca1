//! Shared types for the loan advisor workspace.
//!
//! Everything the other crates agree on lives here: the conversation
//! stage ladder and turn types, moods, loan product records and their
//! read-only catalog, the `LanguageModel` trait with its request and
//! response types, and the engine's reply surface.

pub mod conversation;
pub mod error;
pub mod llm_types;
pub mod mood;
pub mod product;
pub mod response;
pub mod traits;

pub use conversation::{user_turn_count, ConversationStage, Turn, TurnRole};
pub use error::{Error, Result};
pub use llm_types::{FinishReason, GenerateRequest, GenerateResponse, Message, Role, TokenUsage};
pub use mood::Mood;
pub use product::{LoanProduct, ProductCatalog};
pub use response::{EngineResponse, ResponseSource};
pub use traits::LanguageModel;
