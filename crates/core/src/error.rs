//! Workspace-wide error surface.

use thiserror::Error;

/// Errors crossing crate boundaries.
///
/// Backend-specific failures are flattened to a message here; the engine
/// only ever logs them before falling back to the rule-based responder.
#[derive(Error, Debug)]
pub enum Error {
    #[error("language model failure: {0}")]
    Llm(String),
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Llm("connection refused".to_string());
        assert_eq!(err.to_string(), "language model failure: connection refused");
    }
}
