use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use echowell_db::queries::MAX_RECENT_MESSAGES;
use echowell_types::api::PostShareRequest;

use crate::error::ApiError;
use crate::state::{AppState, with_db};

pub async fn list_shares(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let messages = with_db(&state, |db| db.get_recent_messages(MAX_RECENT_MESSAGES)).await?;
    Ok(Json(messages))
}

pub async fn post_share(
    State(state): State<AppState>,
    payload: Result<Json<PostShareRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let text = payload
        .ok()
        .and_then(|Json(req)| req.message)
        .filter(|text| !text.is_empty())
        .ok_or(ApiError::MessageRequired)?;

    let message = with_db(&state, move |db| db.insert_message(&text)).await?;

    debug!("Stored message {}", message.id);
    Ok((StatusCode::CREATED, Json(message)))
}
