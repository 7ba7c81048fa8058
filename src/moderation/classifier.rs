// The classification pipeline.
//
// Order: local blocklist, then the first configured provider, then the
// "not harmful" default. At most one remote call per message, and a failed
// call is never retried on the next provider. Every failure degrades to
// `false`; nothing is returned to the caller as an error.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::blocklist::Blocklist;
use super::normalize::parse_answer;
use super::prompt::MODERATION_INSTRUCTION;
use super::traits::{Provider, ProviderError};
use crate::output::truncate_chars;

/// A single message to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub text: String,
}

/// The verdict for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationVerdict {
    pub is_harmful: bool,
}

/// How a verdict was reached. Only used for logging and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionPath {
    /// A blocklist term matched; no provider was called
    Blocklist { term: String },
    /// A provider answered and its text was normalized
    Provider { name: String, answer: String },
    /// No provider is configured
    Unconfigured,
    /// The provider call failed; verdict is the safe default
    Degraded { provider: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub verdict: ClassificationVerdict,
    pub path: DecisionPath,
}

impl Decision {
    fn new(is_harmful: bool, path: DecisionPath) -> Self {
        Self {
            verdict: ClassificationVerdict { is_harmful },
            path,
        }
    }

    /// Whether a blocklist match or a provider answer produced the verdict.
    pub fn is_authoritative(&self) -> bool {
        matches!(
            self.path,
            DecisionPath::Blocklist { .. } | DecisionPath::Provider { .. }
        )
    }
}

/// Layered harmful-message classifier.
///
/// Holds only read-only state, so one instance is shared across all
/// concurrent requests.
pub struct Classifier {
    blocklist: Blocklist,
    providers: Vec<Arc<dyn Provider>>,
    timeout: Duration,
    allow_no_llm: bool,
}

impl Classifier {
    /// `providers` must be in priority order; only the first is ever called.
    pub fn new(
        blocklist: Blocklist,
        providers: Vec<Arc<dyn Provider>>,
        timeout: Duration,
    ) -> Self {
        Self {
            blocklist,
            providers,
            timeout,
            allow_no_llm: false,
        }
    }

    /// Downgrade the "no provider configured" log line from warn to debug.
    pub fn allow_no_llm(mut self, allow: bool) -> Self {
        self.allow_no_llm = allow;
        self
    }

    pub fn blocklist(&self) -> &Blocklist {
        &self.blocklist
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Classify `text`, returning the bare verdict.
    pub async fn classify(&self, text: &str) -> ClassificationVerdict {
        self.decide(text).await.verdict
    }

    /// Classify a request value.
    pub async fn classify_request(&self, request: &ClassificationRequest) -> ClassificationVerdict {
        self.classify(&request.text).await
    }

    /// Classify `text` and report which tier decided.
    pub async fn decide(&self, text: &str) -> Decision {
        let preview = truncate_chars(text, 50);

        if let Some(term) = self.blocklist.first_match(text) {
            info!(term, text_preview = %preview, "Blocklist match, classified harmful");
            return Decision::new(
                true,
                DecisionPath::Blocklist {
                    term: term.to_string(),
                },
            );
        }

        let Some(provider) = self.providers.first() else {
            if self.allow_no_llm {
                debug!("No LLM provider configured, defaulting to not harmful");
            } else {
                warn!("No LLM provider configured, defaulting to not harmful");
            }
            return Decision::new(false, DecisionPath::Unconfigured);
        };

        match self.call_provider(provider.as_ref(), text).await {
            Ok(answer) => {
                let parsed = parse_answer(&answer);
                let is_harmful = parsed.is_harmful();
                debug!(
                    provider = provider.name(),
                    answer = %truncate_chars(&answer, 80),
                    ?parsed,
                    is_harmful,
                    text_preview = %preview,
                    "Provider answered"
                );
                Decision::new(
                    is_harmful,
                    DecisionPath::Provider {
                        name: provider.name().to_string(),
                        answer,
                    },
                )
            }
            Err(e) => {
                error!(
                    provider = provider.name(),
                    error = %e,
                    text_preview = %preview,
                    "Provider call failed, defaulting to not harmful"
                );
                Decision::new(
                    false,
                    DecisionPath::Degraded {
                        provider: provider.name().to_string(),
                        error: e.to_string(),
                    },
                )
            }
        }
    }

    async fn call_provider(
        &self,
        provider: &dyn Provider,
        text: &str,
    ) -> Result<String, ProviderError> {
        let call = provider.complete(MODERATION_INSTRUCTION, text);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.timeout)),
        }
    }
}
