// POST /moderate — classify one message.
//
// Always answers 200 with a verdict once the body parses; provider failures
// surface as `is_inappropriate: false`, never as an HTTP error.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ModerationRequest;
use crate::web::{api_error, AppState};

pub async fn moderate(
    State(state): State<AppState>,
    payload: Result<Json<ModerationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    let response = state.relay.moderate(&request).await;
    Json(response).into_response()
}
