//! Handlers for the RPC-style user endpoints.
//!
//! These mirror [`super::users`] but take identifiers from the query string
//! (or, for updates, from the request body). Create and list share the
//! resource-style handlers directly.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::user::{EmailQuery, IdQuery, UserRequest, UserResponse, UsernameQuery};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /getUser?id=`
pub async fn get_user_query_handler(
    Query(query): Query<IdQuery>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_user_by_id(&query.id).await?;
    Ok(Json(user.into()))
}

/// `GET /getUserByEmail?email=`
pub async fn get_user_by_email_query_handler(
    Query(query): Query<EmailQuery>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_user_by_email(&query.email).await?;
    Ok(Json(user.into()))
}

/// `GET /getUserByName?username=`
pub async fn get_user_by_username_query_handler(
    Query(query): Query<UsernameQuery>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .find_user_by_username(&query.username)
        .await?;
    Ok(Json(user.into()))
}

/// Replaces a user identified by the `id` field of the body.
///
/// # Endpoint
///
/// `PUT /updateUser`
///
/// # Errors
///
/// Returns 400 if `id` is missing or the body fails validation.
/// Returns 404 if no user has this identifier.
pub async fn update_user_body_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let id = match payload.id.clone() {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(AppError::bad_request(
                "Missing user id",
                json!({"field": "id"}),
            ));
        }
    };

    let user = state
        .user_service
        .update_user(&id, payload.into_update())
        .await?;

    Ok(Json(user.into()))
}

/// `DELETE /deleteUser?id=`
///
/// Always answers 204, whether or not the user existed.
pub async fn delete_user_query_handler(
    Query(query): Query<IdQuery>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&query.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
