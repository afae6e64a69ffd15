//! Repository trait for user storage.

use crate::domain::entities::{NewUser, UpdateUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` table.
///
/// Lookups return `Ok(None)` when no row matches; turning that into a
/// not-found error is the service's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Lists every user, ordered by username.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces the mutable fields of the user with the given identifier.
    ///
    /// The identifier itself is never changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row vanished before the write.
    /// Returns [`AppError::Conflict`] if the new username or email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: &str, update: UpdateUser) -> Result<User, AppError>;

    /// Deletes the user with the given identifier.
    ///
    /// Returns the number of rows removed; deleting a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<u64, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
