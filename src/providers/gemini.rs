// Google Gemini provider (REST `generateContent`).
//
// Gemini has no system role in the simple request shape, so the
// instruction and the message are sent as one prompt. The key travels in
// the x-goog-api-key header, never the query string, so it can't end up in
// a logged URL.
//
// API docs: https://ai.google.dev/api/generate-content

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::moderation::prompt::inline_prompt;
use crate::moderation::response::{extract_answer, AnswerShape};
use crate::moderation::traits::{Provider, ProviderError};
use crate::output::truncate_chars;

pub struct GeminiProvider {
    client: Client,
    name: String,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiProvider {
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

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, instruction: &str, text: &str) -> Result<String, ProviderError> {
        let prompt = inline_prompt(instruction, text);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
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

        // Prefer the native shape; fall back to the generic decoder for proxies
        let answer = match AnswerShape::GeminiCandidate.extract(&payload) {
            Some(text) => text,
            None => extract_answer(&payload)?,
        };

        debug!(provider = %self.name, model = %self.model, "Gemini answer received");
        Ok(answer)
    }
}

// --- request types ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}
