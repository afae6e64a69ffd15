//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::user_service::UserService`] - User CRUD and not-found handling

pub mod services;
