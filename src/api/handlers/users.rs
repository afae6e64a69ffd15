//! Handlers for the resource-style user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{UserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users` (also `POST /createUser`)
///
/// # Errors
///
/// Returns 400 if the body fails validation.
/// Returns 409 if the username or email is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.into_new_user())
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Returns a user by identifier.
///
/// # Endpoint
///
/// `GET /user/{id}`
///
/// # Errors
///
/// Returns 404 if no user has this identifier.
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_user_by_id(&id).await?;
    Ok(Json(user.into()))
}

/// Returns a user by email.
///
/// # Endpoint
///
/// `GET /userbyemail/{email}`
///
/// # Errors
///
/// Returns 404 if no user has this email.
pub async fn get_user_by_email_handler(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_user_by_email(&email).await?;
    Ok(Json(user.into()))
}

/// Returns a user by username.
///
/// # Endpoint
///
/// `GET /userbyname/{username}`
///
/// # Errors
///
/// Returns 404 if no user has this username.
pub async fn get_user_by_username_handler(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.find_user_by_username(&username).await?;
    Ok(Json(user.into()))
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users` (also `GET /allUsers`)
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.find_all_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Replaces a user's username, email and password.
///
/// # Endpoint
///
/// `PATCH /user/{id}`
///
/// The identifier comes from the path; an `id` in the body is ignored.
///
/// # Errors
///
/// Returns 400 if the body fails validation.
/// Returns 404 if no user has this identifier.
/// Returns 409 if the new username or email is taken.
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update_user(&id, payload.into_update())
        .await?;

    Ok(Json(user.into()))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /user/{id}`
///
/// Always answers 204, whether or not the user existed.
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
