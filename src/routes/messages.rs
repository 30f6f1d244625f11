// ============================================================================
// Messages Routes
// ============================================================================
//
// Endpoints:
// - GET /api/messages - List all messages, oldest first
// - POST /api/messages - Post a new message
// - DELETE /api/messages?id=<id> - Delete a message
//
// ============================================================================

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::context::AppContext;
use crate::db;
use crate::error::AppError;

/// Request body for creating a message.
///
/// `content` stays untyped so a non-string value is reported as a validation
/// failure instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    content: Option<Value>,
}

/// Query parameters for deleting a message
#[derive(Debug, Deserialize)]
pub struct DeleteMessageParams {
    id: Option<i64>,
}

/// GET /api/messages
/// Returns every message ordered by creation time, oldest first
pub async fn list_messages(
    State(app_context): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, AppError> {
    let messages = db::list_messages(&app_context.db_pool).await?;

    Ok(Json(messages))
}

/// POST /api/messages
/// Validates and stores a new message, returning the created record
pub async fn create_message(
    State(app_context): State<Arc<AppContext>>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = match &request.content {
        Some(Value::String(content)) => content.trim(),
        Some(_) => {
            return Err(AppError::Validation("content must be a string".to_string()));
        }
        None => {
            return Err(AppError::Validation("content is required".to_string()));
        }
    };

    if content.is_empty() {
        return Err(AppError::Validation(
            "content must not be empty".to_string(),
        ));
    }

    let message = db::insert_message(&app_context.db_pool, content).await?;

    tracing::info!(id = message.id, "Message created");

    Ok((StatusCode::CREATED, Json(message)))
}

/// DELETE /api/messages?id=<id>
/// Deletes a message if it exists; deleting an unknown id is still a success
pub async fn delete_message(
    State(app_context): State<Arc<AppContext>>,
    Query(params): Query<DeleteMessageParams>,
) -> Result<impl IntoResponse, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::Validation("id query parameter is required".to_string()))?;

    db::delete_message(&app_context.db_pool, id).await?;

    tracing::info!(id = id, "Message deleted");

    Ok(Json(json!({ "success": true })))
}
