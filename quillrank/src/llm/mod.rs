//! LLM completion interface used by the query planner
//!
//! The planner only needs one capability: send a system + user prompt pair
//! and get text back. Keeping the trait this narrow lets deployments plug in
//! any hosted or local model without touching planner logic.

pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from LLM providers
#[derive(Error, Debug)]
pub enum LlmError {
    /// The provider could not be reached
    #[error("llm provider unreachable: {0}")]
    Connection(String),

    /// The provider rejected the request (auth, quota, content policy)
    #[error("llm request rejected: {0}")]
    Rejected(String),

    /// The provider answered with an empty or truncated completion
    #[error("llm returned an unusable completion: {0}")]
    BadCompletion(String),

    /// Anything else the provider reports
    #[error("llm error: {0}")]
    Other(String),
}

/// Interface for chat-completion style language models
#[async_trait]
pub trait LlmProvider: Send + Sync + 'static {
    /// Run one completion with a system prompt and a user message
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

/// Mock provider for testing: replays a canned completion
#[cfg(test)]
pub mod mock {
    use super::*;

    pub struct MockLlmProvider {
        response: Result<String, String>,
    }

    impl MockLlmProvider {
        pub fn replying(response: impl Into<String>) -> Self {
            Self {
                response: Ok(response.into()),
            }
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                response: Err(message.into()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            self.response
                .clone()
                .map_err(LlmError::Connection)
        }
    }
}
