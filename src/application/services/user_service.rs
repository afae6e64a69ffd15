//! User management service.

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading, updating and deleting users.
///
/// Each operation makes a single repository call, except [`UserService::update_user`],
/// which reads the record before writing it.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user and returns it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_user_by_id(&self, id: &str) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this username.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_user_by_username(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"username": username})))
    }

    /// Retrieves a user by email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this email.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_user_by_email(&self, email: &str) -> Result<User, AppError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"email": email})))
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Replaces the username, email and password of an existing user.
    ///
    /// The user keeps its original identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this identifier.
    /// Returns [`AppError::Conflict`] if the new username or email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_user(&self, id: &str, update: UpdateUser) -> Result<User, AppError> {
        let existing = self.find_user_by_id(id).await?;

        let user = self.repository.update(&existing.id, update).await?;
        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Deletes a user. Deleting an unknown identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let removed = self.repository.delete(id).await?;
        tracing::info!(user_id = %id, removed, "User delete requested");
        Ok(())
    }

    /// Checks that the user store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be queried.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
