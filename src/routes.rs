//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check (database)
//! - resource-style user routes, see [`crate::api::routes::rest_routes`]
//! - RPC-style user routes, see [`crate::api::routes::rpc_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::rest_routes())
        .merge(api::routes::rpc_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] wrapped in
/// trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use crate::domain::repositories::MockUserRepository;
    use crate::error::AppError;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn sample_user() -> User {
        User::new(
            "abc".to_string(),
            "username".to_string(),
            "admin@mail.com".to_string(),
            "password".to_string(),
        )
    }

    fn server(mock_repo: MockUserRepository) -> TestServer {
        let state = AppState::new(Arc::new(mock_repo));
        TestServer::new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().times(1).returning(|new_user| {
            Ok(User::new(
                "generated".to_string(),
                new_user.username,
                new_user.email,
                new_user.password,
            ))
        });

        let response = server(mock_repo)
            .post("/users")
            .json(&json!({
                "userName": "username",
                "email": "admin@mail.com",
                "password": "password"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["id"], "generated");
        assert_eq!(body["userName"], "username");
    }

    #[tokio::test]
    async fn test_create_invalid_email_is_bad_request() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let response = server(mock_repo)
            .post("/createUser")
            .json(&json!({
                "userName": "username",
                "email": "nope",
                "password": "password"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<serde_json::Value>()["error"]["code"],
            "validation_error"
        );
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found_on_both_surfaces() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(2)
            .returning(|_| Ok(None));

        let server = server(mock_repo);

        server
            .get("/user/missing")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/getUser")
            .add_query_param("id", "missing")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_by_username_and_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_username()
            .withf(|username| username == "username")
            .returning(|_| Ok(Some(sample_user())));
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "admin@mail.com")
            .returning(|_| Ok(Some(sample_user())));

        let server = server(mock_repo);

        let by_name = server.get("/userbyname/username").await;
        by_name.assert_status_ok();
        assert_eq!(by_name.json::<serde_json::Value>()["id"], "abc");

        let by_email = server
            .get("/getUserByEmail")
            .add_query_param("email", "admin@mail.com")
            .await;
        by_email.assert_status_ok();
        assert_eq!(by_email.json::<serde_json::Value>()["userName"], "username");
    }

    #[tokio::test]
    async fn test_list_on_both_surfaces() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .times(2)
            .returning(|| Ok(vec![sample_user()]));

        let server = server(mock_repo);

        for path in ["/users", "/allUsers"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let items = response.json::<Vec<serde_json::Value>>();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0]["id"], "abc");
        }
    }

    #[tokio::test]
    async fn test_rpc_update_requires_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_id().never();
        mock_repo.expect_update().never();

        let response = server(mock_repo)
            .put("/updateUser")
            .json(&json!({
                "userName": "newUsername",
                "email": "newEmail@mail.com",
                "password": "newPassword"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_uses_path_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == "abc")
            .returning(|_| Ok(Some(sample_user())));
        mock_repo
            .expect_update()
            .withf(|id, _| id == "abc")
            .returning(|id, update| {
                Ok(User::new(
                    id.to_string(),
                    update.username,
                    update.email,
                    update.password,
                ))
            });

        let response = server(mock_repo)
            .patch("/user/abc")
            .json(&json!({
                "id": "something-else",
                "userName": "newUsername",
                "email": "newEmail@mail.com",
                "password": "newPassword"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["id"], "abc");
        assert_eq!(body["userName"], "newUsername");
    }

    #[tokio::test]
    async fn test_delete_returns_no_content() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_delete().times(2).returning(|_| Ok(0));

        let server = server(mock_repo);

        server
            .delete("/user/abc")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete("/deleteUser")
            .add_query_param("id", "abc")
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_health_degraded_when_database_down() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_ping()
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let response = server(mock_repo).get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["database"]["status"], "error");
    }
}
