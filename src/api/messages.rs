//! Message API endpoints
//!
//! - GET /api/message/?name=X - Greeting as plain text
//! - GET /api/message/list - Fixed sample messages
//! - GET /api/message/{id} - Stored message with that id, as a list
//! - POST /api/message/ - Store a message

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::middleware::{ApiError, AppState};
use crate::models::Message;

/// Query parameters for the greeting
#[derive(Debug, Deserialize)]
pub struct GreetingQuery {
    pub name: String,
}

/// GET /api/message/?name=X
pub async fn greet(Query(query): Query<GreetingQuery>) -> String {
    format!("Hello, {}", query.name)
}

/// GET /api/message/list
pub async fn sample_messages() -> Json<Vec<Message>> {
    Json(vec![
        Message::new("1", "Hello!"),
        Message::new("2", "Bonjour!"),
        Message::new("3", "Privet!"),
    ])
}

/// GET /api/message/{id}
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state
        .message_service
        .find_message_by_id(&id)
        .await
        .map_err(ApiError::from_internal)?;

    Ok(Json(messages))
}

/// POST /api/message/
pub async fn post(
    State(state): State<AppState>,
    Json(message): Json<Message>,
) -> Result<StatusCode, ApiError> {
    state
        .message_service
        .save(message)
        .await
        .map_err(ApiError::from_internal)?;

    Ok(StatusCode::OK)
}
