#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use user_service::infrastructure::persistence::PgUserRepository;
use user_service::routes::build_router;
use user_service::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgUserRepository::new(Arc::new(pool)));
    AppState::new(repository)
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(build_router(create_test_state(pool))).unwrap()
}

pub fn user_body(username: &str, email: &str, password: &str) -> Value {
    json!({
        "userName": username,
        "email": email,
        "password": password
    })
}

pub async fn create_test_user(pool: &PgPool, id: &str, username: &str, email: &str) {
    sqlx::query(
        "INSERT INTO users (id, username, email, password) VALUES ($1, $2, $3, 'password')",
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}
