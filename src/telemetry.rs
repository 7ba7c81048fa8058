// Fire-and-forget telemetry sink.
//
// Each moderation outcome can be mirrored to an external logging endpoint
// (an ICP canister in the original deployment). Delivery happens on a
// detached task; failures are logged and never reach the caller.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Bound on one telemetry POST.
pub const TELEMETRY_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload posted for every classified message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TelemetryRecord {
    pub text: String,
    pub is_inappropriate: bool,
    pub source_agent: String,
}

#[derive(Clone)]
pub struct TelemetryClient {
    client: Client,
    url: String,
    source_id: String,
}

impl TelemetryClient {
    pub fn new(client: Client, url: String, source_id: String) -> Self {
        Self {
            client,
            url,
            source_id,
        }
    }

    pub fn record_for(&self, text: &str, is_inappropriate: bool) -> TelemetryRecord {
        TelemetryRecord {
            text: text.to_string(),
            is_inappropriate,
            source_agent: self.source_id.clone(),
        }
    }

    /// Queue delivery of one outcome and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, text: &str, is_inappropriate: bool) {
        let record = self.record_for(text, is_inappropriate);
        let sink = self.clone();
        tokio::spawn(async move {
            sink.deliver(&record).await;
        });
    }

    /// POST one record, logging the outcome.
    pub async fn deliver(&self, record: &TelemetryRecord) {
        let result = self
            .client
            .post(&self.url)
            .timeout(TELEMETRY_TIMEOUT)
            .json(record)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("Posted moderation result to telemetry sink");
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                warn!(%status, body = %body, "Telemetry sink rejected moderation result");
            }
            Err(e) => {
                error!(error = %e, "Failed to send moderation result to telemetry sink");
            }
        }
        debug!(url = %self.url, "Telemetry delivery finished");
    }
}
