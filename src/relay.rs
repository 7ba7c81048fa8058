// Inbound trigger — the glue between transports and the classifier.
//
// Both the REST and chat surfaces (and the CLI) go through Relay so the
// telemetry and reply formatting behave the same everywhere.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::models::{ChatContent, ChatMessage, ChatReply, ModerationRequest, ModerationResponse};
use crate::moderation::{Blocklist, Classifier, Decision};
use crate::output::truncate_chars;
use crate::providers::build_providers;
use crate::telemetry::TelemetryClient;

/// Reply sent when a chat message carries no text to classify.
pub const EMPTY_CHAT_REPLY: &str = "Please send text content to classify.";

/// Conversational rendering of a verdict.
pub fn reply_text(is_inappropriate: bool) -> String {
    format!(
        "Inappropriate: {}",
        if is_inappropriate { "YES" } else { "NO" }
    )
}

pub struct Relay {
    classifier: Arc<Classifier>,
    telemetry: Option<TelemetryClient>,
}

impl Relay {
    pub fn new(classifier: Arc<Classifier>, telemetry: Option<TelemetryClient>) -> Self {
        Self {
            classifier,
            telemetry,
        }
    }

    /// Build the full stack (HTTP client, providers, blocklist, telemetry) from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("chatwarden/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let providers = build_providers(&config.providers, &client);
        let blocklist = Blocklist::with_extra_terms(&config.extra_blocklist);
        let classifier = Classifier::new(blocklist, providers, config.provider_timeout)
            .allow_no_llm(config.allow_no_llm);

        let telemetry = config.telemetry_url.as_ref().map(|url| {
            info!(url = %url, "Telemetry sink enabled");
            TelemetryClient::new(client.clone(), url.clone(), config.source_id.clone())
        });

        Ok(Self::new(Arc::new(classifier), telemetry))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn telemetry_enabled(&self) -> bool {
        self.telemetry.is_some()
    }

    /// Classify one message, forward the outcome to telemetry, return the decision.
    pub async fn evaluate(&self, text: &str) -> Decision {
        info!(text_preview = %truncate_chars(text, 50), "Received moderation request");
        let decision = self.classifier.decide(text).await;
        let is_inappropriate = decision.verdict.is_harmful;

        match &self.telemetry {
            Some(sink) => sink.submit(text, is_inappropriate),
            None => debug!("Telemetry not configured, skipping"),
        }

        info!(is_inappropriate, "Moderation verdict");
        decision
    }

    /// REST contract.
    pub async fn moderate(&self, request: &ModerationRequest) -> ModerationResponse {
        let decision = self.evaluate(&request.text).await;
        ModerationResponse {
            is_inappropriate: decision.verdict.is_harmful,
        }
    }

    /// Conversational contract: acknowledge, classify the first text item, reply.
    pub async fn chat(&self, message: &ChatMessage) -> ChatReply {
        if message.starts_session() {
            info!(msg_id = %message.msg_id, "Chat session started");
        }

        let text = match message.first_text() {
            Some(text) if !text.is_empty() => {
                let decision = self.evaluate(text).await;
                reply_text(decision.verdict.is_harmful)
            }
            _ => EMPTY_CHAT_REPLY.to_string(),
        };

        ChatReply {
            acknowledged_msg_id: message.msg_id,
            message: ChatMessage {
                msg_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                content: vec![ChatContent::Text { text }, ChatContent::EndSession],
            },
        }
    }
}
