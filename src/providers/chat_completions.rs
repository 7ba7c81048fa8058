// OpenAI-compatible chat completions provider.
//
// ASI:One speaks this protocol, as do OpenAI and most self-hosted gateways.
// The moderation instruction goes in as the system message and the user's
// text as the only user message.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::moderation::response::extract_answer;
use crate::moderation::traits::{Provider, ProviderError};
use crate::output::truncate_chars;

/// Provider for any `/v1/chat/completions`-style endpoint.
pub struct ChatCompletionsProvider {
    client: Client,
    name: String,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatCompletionsProvider {
    pub fn new(
        client: Client,
        name: String,
        endpoint: String,
        api_key: String,
        model: String,
    ) -> Self {
        Self {
            client,
            name,
            endpoint,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Provider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, instruction: &str, text: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instruction,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status,
                body: truncate_chars(&body, 200),
            });
        }

        let raw = response.text().await?;
        let payload: Value = serde_json::from_str(&raw)
            .map_err(|e| ProviderError::Malformed(format!("response is not JSON ({e})")))?;
        let answer = extract_answer(&payload)?;

        debug!(provider = %self.name, model = %self.model, "Chat completion received");
        Ok(answer)
    }
}

// --- request types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}
