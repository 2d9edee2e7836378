use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    extract::{Path, State},
    Json,
};

use service::message::domain::{CreateMessageInput, Message, UpdateMessageInput};

use super::AppState;
use crate::errors::ApiError;

/// POST /messages — 200 with the persisted message, 400 on rejection.
pub async fn create_message(
    State(state): State<AppState>,
    Json(input): Json<CreateMessageInput>,
) -> Result<Json<Message>, ApiError> {
    let message = state.messages.create(input).await?;
    Ok(Json(message))
}

/// GET /messages — always 200, possibly an empty list.
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.messages.get_all().await?;
    Ok(Json(messages))
}

/// GET /messages/:message_id — 200 with the message, or 200 with an empty
/// body when absent. Absence is not an error on this path.
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
) -> Result<Response, ApiError> {
    let found = state.messages.get(message_id).await?;
    Ok(match found {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// DELETE /messages/:message_id — 200 with the pre-deletion message, or 200
/// with an empty body when there was nothing to delete.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
) -> Result<Response, ApiError> {
    let deleted = state.messages.delete(message_id).await?;
    Ok(match deleted {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// PATCH /messages/:message_id — 200 with the post-update message, 400 when
/// the text is invalid or the id does not exist.
pub async fn patch_message(
    State(state): State<AppState>,
    Path(message_id): Path<i32>,
    Json(input): Json<UpdateMessageInput>,
) -> Result<Json<Message>, ApiError> {
    let updated = state.messages.update(message_id, &input.message_text).await?;
    Ok(Json(updated))
}

/// GET /accounts/:account_id/messages — always 200, possibly an empty list.
pub async fn get_messages_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<i32>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.messages.get_by_account(account_id).await?;
    Ok(Json(messages))
}
