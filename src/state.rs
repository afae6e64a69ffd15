//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// Service handles shared across requests.
///
/// The repository is type-erased so the same state works with the
/// PostgreSQL repository in production and with mocks in tests.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
