// Provider trait — the swap-ready abstraction over remote LLMs.
//
// A provider takes the fixed moderation instruction plus the user's message
// and returns whatever free-form text the model produced. Interpreting that
// text is the classifier's job, not the provider's.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single remote provider call.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

// Request URLs can carry credentials, so they are dropped before the error
// is stored or displayed.
impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Transport(e.without_url())
    }
}

/// A remote service able to answer the moderation instruction.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name for logs and status output.
    fn name(&self) -> &str;

    /// Send `instruction` and `text`, returning the raw answer text.
    async fn complete(&self, instruction: &str, text: &str) -> Result<String, ProviderError>;
}
