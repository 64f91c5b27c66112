//! The registration endpoint.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::{models::PasswordHash, state::AuthState, stores::UserStore, Error};

/// The fields a client submits to register.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    /// The email to register with, used as the login key.
    #[serde(default)]
    pub email: String,
    /// The password to register with.
    #[serde(default)]
    pub password: String,
}

/// A route handler for registering a new user.
///
/// Registration does not log the user in: the client must call the login
/// endpoint to obtain a token.
///
/// # Errors
///
/// This function will return a:
/// - [Error::MissingField] if the email or password is empty,
/// - [Error::DuplicateEmail] if the email is already registered,
/// - [Error::HashingError] if the password could not be hashed.
pub async fn register_endpoint<U>(
    State(state): State<AuthState<U>>,
    Json(form): Json<RegisterForm>,
) -> Result<impl IntoResponse, Error>
where
    U: UserStore + Clone + Send + Sync,
{
    if form.email.is_empty() {
        return Err(Error::MissingField("email"));
    }

    if form.password.is_empty() {
        return Err(Error::MissingField("password"));
    }

    let password_hash = PasswordHash::new(&form.password)?;

    let mut user_store = state.user_store;
    user_store.create(form.email, password_hash)?;

    Ok(Json(json!({
        "message": "Registered successfully",
    })))
}
