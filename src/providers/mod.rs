// Concrete provider clients, built from the ordered ProviderConfig.

pub mod chat_completions;
pub mod gemini;

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::config::{ProviderConfig, ProviderKind};
use crate::moderation::Provider;

use chat_completions::ChatCompletionsProvider;
use gemini::GeminiProvider;

/// Instantiate every configured provider, preserving priority order.
///
/// All providers share one connection pool.
pub fn build_providers(config: &ProviderConfig, client: &Client) -> Vec<Arc<dyn Provider>> {
    config
        .entries
        .iter()
        .map(|spec| {
            info!(provider = %spec.name, model = %spec.model, "Configured LLM provider");
            let provider: Arc<dyn Provider> = match spec.kind {
                ProviderKind::ChatCompletions => Arc::new(ChatCompletionsProvider::new(
                    client.clone(),
                    spec.name.clone(),
                    spec.endpoint.clone(),
                    spec.api_key.clone(),
                    spec.model.clone(),
                )),
                ProviderKind::Gemini => Arc::new(GeminiProvider::new(
                    client.clone(),
                    spec.name.clone(),
                    spec.endpoint.clone(),
                    spec.api_key.clone(),
                    spec.model.clone(),
                )),
            };
            provider
        })
        .collect()
}
