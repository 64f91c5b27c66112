//! The login endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    auth::encode_jwt,
    models::{PasswordHash, UserID},
    state::AuthState,
    stores::UserStore,
    Error,
};

/// A bcrypt hash that no registered password maps to. Logins for unknown
/// emails verify against this so they cost the same as a wrong password.
const DUMMY_PASSWORD_HASH: &str = "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm";

/// The credentials a client submits to log in.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// Email entered during log-in.
    #[serde(default)]
    pub email: String,
    /// Password entered during log-in.
    #[serde(default)]
    pub password: String,
}

/// The response to a successful login.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    /// The ID of the logged-in user.
    pub user_id: UserID,
    /// The signed token to present on subsequent requests.
    pub token: String,
}

/// A route handler for logging in a user.
///
/// On success the response carries the user's ID and a signed, expiring
/// token; the client sends the token in the `Authorization: Bearer` header
/// on every subsequent call.
///
/// # Errors
///
/// This function will return an [Error::InvalidCredentials] if the email is
/// not registered or the password does not match. The two cases share one
/// error so the response cannot be used to probe which emails exist.
pub async fn log_in_endpoint<U>(
    State(state): State<AuthState<U>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LogInResponse>, Error>
where
    U: UserStore + Clone + Send + Sync,
{
    let user = match state.user_store.get_by_email(&credentials.email) {
        Ok(user) => user,
        Err(Error::NotFound) => {
            let _ = PasswordHash::new_unchecked(DUMMY_PASSWORD_HASH.to_owned())
                .verify(&credentials.password);

            return Err(Error::InvalidCredentials);
        }
        Err(error) => return Err(error),
    };

    if !user.password_hash().verify(&credentials.password)? {
        return Err(Error::InvalidCredentials);
    }

    let token = encode_jwt(user.id(), &state.jwt_keys.encoding)?;

    Ok(Json(LogInResponse {
        user_id: user.id(),
        token,
    }))
}

#[cfg(test)]
mod log_in_tests {
    use axum::{
        http::StatusCode,
        middleware,
        routing::{get, post},
        Extension, Json, Router,
    };
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        auth::{auth_guard, log_in_endpoint, register_endpoint, LogInResponse},
        models::UserID,
        stores::{create_app_state, SQLAppState, SQLiteUserStore},
    };

    fn get_test_app_state() -> SQLAppState {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");

        create_app_state(db_connection, "foobar").expect("Could not create app state.")
    }

    fn get_test_server() -> TestServer {
        let state = get_test_app_state();

        let app = Router::new()
            .route("/protected", get(whoami))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_guard::<SQLiteUserStore>,
            ))
            .route("/register", post(register_endpoint::<SQLiteUserStore>))
            .route("/login", post(log_in_endpoint::<SQLiteUserStore>))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    async fn whoami(Extension(user_id): Extension<UserID>) -> Json<UserID> {
        Json(user_id)
    }

    async fn register_test_user(server: &TestServer) {
        server
            .post("/register")
            .content_type("application/json")
            .json(&json!({
                "email": "test@test.com",
                "password": "hunter2",
            }))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn log_in_succeeds_with_valid_credentials() {
        let server = get_test_server();
        register_test_user(&server).await;

        let response = server
            .post("/login")
            .content_type("application/json")
            .json(&json!({
                "email": "test@test.com",
                "password": "hunter2",
            }))
            .await;

        response.assert_status_ok();
        let log_in_response = response.json::<LogInResponse>();
        assert!(log_in_response.user_id.as_i64() > 0);
        assert!(!log_in_response.token.is_empty());
    }

    #[tokio::test]
    async fn log_in_token_grants_access_to_protected_route() {
        let server = get_test_server();
        register_test_user(&server).await;

        let log_in_response = server
            .post("/login")
            .content_type("application/json")
            .json(&json!({
                "email": "test@test.com",
                "password": "hunter2",
            }))
            .await
            .json::<LogInResponse>();

        let response = server
            .get("/protected")
            .authorization_bearer(log_in_response.token)
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<UserID>(), log_in_response.user_id);
    }

    #[tokio::test]
    async fn log_in_returns_stable_user_id() {
        let server = get_test_server();
        register_test_user(&server).await;

        let credentials = json!({
            "email": "test@test.com",
            "password": "hunter2",
        });

        let first = server
            .post("/login")
            .content_type("application/json")
            .json(&credentials)
            .await
            .json::<LogInResponse>();
        let second = server
            .post("/login")
            .content_type("application/json")
            .json(&credentials)
            .await
            .json::<LogInResponse>();

        assert_eq!(first.user_id, second.user_id);
    }

    #[tokio::test]
    async fn log_in_fails_with_wrong_password() {
        let server = get_test_server();
        register_test_user(&server).await;

        let response = server
            .post("/login")
            .content_type("application/json")
            .json(&json!({
                "email": "test@test.com",
                "password": "definitelyNotTheCorrectPassword",
            }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let server = get_test_server();
        register_test_user(&server).await;

        let wrong_password = server
            .post("/login")
            .content_type("application/json")
            .json(&json!({
                "email": "test@test.com",
                "password": "wrong",
            }))
            .await;
        let unknown_email = server
            .post("/login")
            .content_type("application/json")
            .json(&json!({
                "email": "unknown@test.com",
                "password": "wrong",
            }))
            .await;

        assert_eq!(wrong_password.status_code(), unknown_email.status_code());
        assert_eq!(wrong_password.text(), unknown_email.text());
    }
}
