//! DTOs for user endpoints.
//!
//! Field names follow the public JSON contract: `id`, `userName`, `email`, `password`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, UpdateUser, User};

/// Request body for creating or updating a user.
///
/// `id` is ignored on create and on `PATCH /user/{id}`; it is required by
/// `PUT /updateUser`, which carries the target identifier in the body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "userName must be 1-255 characters"))]
    pub user_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "password must be 1-255 characters"))]
    pub password: String,
}

impl UserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.user_name,
            email: self.email,
            password: self.password,
        }
    }

    pub fn into_update(self) -> UpdateUser {
        UpdateUser {
            username: self.user_name,
            email: self.email,
            password: self.password,
        }
    }
}

/// User representation returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            user_name: u.username,
            email: u.email,
            password: u.password,
        }
    }
}

/// `?id=` query string.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// `?email=` query string.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// `?username=` query string.
#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}
