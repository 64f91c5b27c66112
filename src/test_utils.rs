//! Helpers shared by the endpoint tests.

use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::json;

use crate::{
    auth::LogInResponse,
    models::UserID,
    routing::build_router,
    stores::{create_app_state, SQLAppState},
};

/// Create an app state backed by a fresh in-memory database.
pub fn get_test_app_state() -> SQLAppState {
    let db_connection = Connection::open_in_memory().expect("Could not open database in memory.");

    create_app_state(db_connection, "foobar").expect("Could not create app state.")
}

/// Create a test server running the full application router.
pub fn get_test_server() -> TestServer {
    TestServer::try_new(build_router(get_test_app_state())).expect("Could not create test server.")
}

/// Register `email` and log in, returning the user's ID and bearer token.
pub async fn register_and_log_in(server: &TestServer, email: &str) -> (UserID, String) {
    let password = "hunter2";

    server
        .post("/register")
        .content_type("application/json")
        .json(&json!({
            "email": email,
            "password": password,
        }))
        .await
        .assert_status_ok();

    let response = server
        .post("/login")
        .content_type("application/json")
        .json(&json!({
            "email": email,
            "password": password,
        }))
        .await;

    response.assert_status_ok();
    let log_in_response = response.json::<LogInResponse>();

    (log_in_response.user_id, log_in_response.token)
}

/// Create a test server with one registered, logged-in user.
pub async fn get_test_server_with_user() -> (TestServer, UserID, String) {
    let server = get_test_server();
    let (user_id, token) = register_and_log_in(&server, "test@test.com").await;

    (server, user_id, token)
}

/// Record an entry through the API.
pub async fn add_entry(
    server: &TestServer,
    token: &str,
    amount: &str,
    category: &str,
    kind: &str,
    date: &str,
) {
    server
        .post("/expense")
        .authorization_bearer(token)
        .content_type("application/json")
        .json(&json!({
            "amount": amount,
            "category": category,
            "type": kind,
            "date": date,
        }))
        .await
        .assert_status_ok();
}
