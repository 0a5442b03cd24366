//! Router for the chat API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use axum_extra::extract::{Query, QueryRejection};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::chat::{delete_exchanges_by_user, find_exchanges_by_user, format_history, insert_exchange};
use crate::core::AppConfig;
use crate::openai::reply;

type SharedState = Arc<AppState>;

const USER_ID_REQUIRED: &str = "User ID is required";

// Empty strings count as missing
fn require_user_id(user_id: Option<String>) -> Result<String, ApiError> {
    user_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::Validation(USER_ID_REQUIRED))
}

/// Send a message to the model and store the exchange. Nothing is
/// stored when the model fails to reply.
async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let Json(payload) = payload.map_err(|err| {
        tracing::debug!("Invalid chat request body: {}", err);
        ApiError::Validation("Invalid request body")
    })?;
    let user_id = require_user_id(Some(payload.user_id))?;

    let AppConfig {
        llm_api_hostname,
        llm_api_key,
        llm_model,
        llm_max_tokens,
        ..
    } = &state.config;

    let bot_reply = reply(
        &payload.message,
        llm_api_hostname,
        llm_api_key,
        llm_model,
        *llm_max_tokens,
    )
    .await
    .map_err(ApiError::Upstream)?;

    let exchange = insert_exchange(&state.db, &user_id, &payload.message, &bot_reply)
        .await
        .map_err(|err| ApiError::Persistence("AI request failed", err))?;

    tracing::debug!("Stored exchange {} for {}", exchange.id, user_id);

    Ok(Json(public::ChatResponse {
        reply: exchange.bot_reply,
        id: exchange.id,
    }))
}

/// Get the conversation history for a user, oldest first
async fn history_handler(
    State(state): State<SharedState>,
    params: Result<Query<public::HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<public::DisplayMessage>>, ApiError> {
    let Query(params) = params.map_err(|err| {
        tracing::debug!("Invalid history query: {}", err);
        ApiError::Validation("Invalid query string")
    })?;
    let user_id = require_user_id(params.user_id)?;

    let history = find_exchanges_by_user(&state.db, &user_id)
        .await
        .map_err(|err| ApiError::Persistence("Failed to fetch history", err))?;

    Ok(Json(format_history(&history)))
}

/// Delete the conversation history for a user
async fn clear_history_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::ClearHistoryRequest>, JsonRejection>,
) -> Result<Json<public::ClearHistoryResponse>, ApiError> {
    let user_id = require_user_id(payload.ok().and_then(|Json(req)| req.user_id))?;

    let deleted = delete_exchanges_by_user(&state.db, &user_id)
        .await
        .map_err(|err| ApiError::Persistence("Failed to clear history", err))?;

    tracing::debug!("Cleared {} exchanges for {}", deleted, user_id);

    Ok(Json(public::ClearHistoryResponse { success: true }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler)).route(
        "/history",
        get(history_handler).delete(clear_history_handler),
    )
}
