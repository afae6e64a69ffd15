//! HTTP request handlers for API endpoints.
//!
//! - [`users`] - resource-style routes (`/users`, `/user/{id}`, ...)
//! - [`rpc`] - RPC-style routes (`/getUser?id=`, `/updateUser`, ...)
//! - [`health`] - liveness and database check

pub mod health;
pub mod rpc;
pub mod users;

pub use health::health_handler;
pub use rpc::{
    delete_user_query_handler, get_user_by_email_query_handler, get_user_by_username_query_handler,
    get_user_query_handler, update_user_body_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_by_email_handler,
    get_user_by_username_handler, get_user_handler, list_users_handler, update_user_handler,
};
