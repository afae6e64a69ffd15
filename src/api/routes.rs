//! API route configuration.
//!
//! Users are reachable through two equivalent route sets that share the same
//! service: a resource-style surface and an RPC-style surface.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, delete_user_query_handler, get_user_by_email_handler,
    get_user_by_email_query_handler, get_user_by_username_handler,
    get_user_by_username_query_handler, get_user_handler, get_user_query_handler,
    list_users_handler, update_user_body_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Resource-style user routes.
///
/// # Endpoints
///
/// - `POST   /users`                  - Create a user (201)
/// - `GET    /users`                  - List all users
/// - `GET    /user/{id}`              - Get a user by id
/// - `PATCH  /user/{id}`              - Replace a user's fields
/// - `DELETE /user/{id}`              - Delete a user (204)
/// - `GET    /userbyemail/{email}`    - Get a user by email
/// - `GET    /userbyname/{username}`  - Get a user by username
pub fn rest_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/user/{id}",
            get(get_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/userbyemail/{email}", get(get_user_by_email_handler))
        .route("/userbyname/{username}", get(get_user_by_username_handler))
}

/// RPC-style user routes.
///
/// # Endpoints
///
/// - `POST   /createUser`               - Create a user (201)
/// - `GET    /getUser?id=`              - Get a user by id
/// - `GET    /getUserByEmail?email=`    - Get a user by email
/// - `GET    /getUserByName?username=`  - Get a user by username
/// - `GET    /allUsers`                 - List all users
/// - `PUT    /updateUser`               - Replace a user's fields, id in body
/// - `DELETE /deleteUser?id=`           - Delete a user (204)
pub fn rpc_routes() -> Router<AppState> {
    Router::new()
        .route("/createUser", post(create_user_handler))
        .route("/getUser", get(get_user_query_handler))
        .route("/getUserByEmail", get(get_user_by_email_query_handler))
        .route("/getUserByName", get(get_user_by_username_query_handler))
        .route("/allUsers", get(list_users_handler))
        .route("/updateUser", put(update_user_body_handler))
        .route("/deleteUser", delete(delete_user_query_handler))
}
