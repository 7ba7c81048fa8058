// GET /api/status — reports which tiers are active.
//
// Lets an operator confirm a provider is actually configured; with none,
// every message that misses the blocklist passes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let classifier = state.relay.classifier();

    Json(serde_json::json!({
        "providers": classifier.provider_names(),
        "provider_timeout_secs": state.config.provider_timeout.as_secs(),
        "blocklist_terms": classifier.blocklist().len(),
        "telemetry_enabled": state.relay.telemetry_enabled(),
    }))
}
