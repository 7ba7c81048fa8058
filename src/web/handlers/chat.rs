// POST /chat — conversational moderation.
//
// Replies with "Inappropriate: YES|NO" and closes the session.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ChatMessage;
use crate::web::{api_error, AppState};

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatMessage>, JsonRejection>,
) -> Response {
    let Json(message) = match payload {
        Ok(json) => json,
        Err(rejection) => return api_error(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };

    let reply = state.relay.chat(&message).await;
    Json(reply).into_response()
}
