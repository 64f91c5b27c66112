//! Authentication middleware that validates bearer tokens and binds the
//! verified user ID to the request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejectionReason,
    TypedHeader,
};

use crate::{auth::decode_jwt, models::UserID, state::AuthState, stores::UserStore, Error};

/// Middleware function that checks for a valid bearer token and verifies it
/// resolves to a registered user. The user ID is placed into the request and
/// then the request executed normally if the token is valid, otherwise an
/// error response is returned.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(user_id): Extension<UserID>` to receive the verified user ID.
pub async fn auth_guard<U>(
    State(state): State<AuthState<U>>,
    request: Request,
    next: Next,
) -> Response
where
    U: UserStore + Clone + Send + Sync,
{
    let (mut parts, body) = request.into_parts();

    let bearer = match parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
    {
        Ok(TypedHeader(Authorization(bearer))) => bearer,
        Err(rejection) => {
            let error = match rejection.reason() {
                TypedHeaderRejectionReason::Missing => Error::MissingToken,
                _ => Error::InvalidToken,
            };

            return error.into_response();
        }
    };

    let claims = match decode_jwt(bearer.token(), &state.jwt_keys.decoding) {
        Ok(claims) => claims,
        Err(error) => return error.into_response(),
    };

    // The token signature alone is not enough: its subject must still resolve
    // to a registered user.
    let user = match state.user_store.get_by_id(UserID::new(claims.sub)) {
        Ok(user) => user,
        Err(Error::NotFound) => return Error::InvalidToken.into_response(),
        Err(error) => return error.into_response(),
    };

    parts.extensions.insert(user.id());
    let request = Request::from_parts(parts, body);

    next.run(request).await
}

#[cfg(test)]
mod auth_guard_tests {
    use axum::{
        extract::Extension, http::StatusCode, middleware, routing::get, Json, Router,
    };
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        auth::{auth_guard, encode_jwt},
        models::{PasswordHash, UserID},
        stores::{create_app_state, SQLAppState, SQLiteUserStore, UserStore},
    };

    async fn whoami(Extension(user_id): Extension<UserID>) -> Json<UserID> {
        Json(user_id)
    }

    fn get_test_app_state() -> SQLAppState {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");

        create_app_state(db_connection, "foobar").expect("Could not create app state.")
    }

    fn get_test_server(state: SQLAppState) -> TestServer {
        let app = Router::new()
            .route("/protected", get(whoami))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_guard::<SQLiteUserStore>,
            ))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn insert_test_user(state: &mut SQLAppState) -> UserID {
        state
            .user_store
            .create(
                "foo@bar.baz".to_owned(),
                PasswordHash::new_unchecked("dummy".to_owned()),
            )
            .unwrap()
            .id()
    }

    #[tokio::test]
    async fn get_protected_route_with_valid_token() {
        let mut state = get_test_app_state();
        let user_id = insert_test_user(&mut state);
        let token = encode_jwt(user_id, &state.jwt_keys.encoding).unwrap();
        let server = get_test_server(state);

        let response = server.get("/protected").authorization_bearer(token).await;

        response.assert_status_ok();
        assert_eq!(response.json::<UserID>(), user_id);
    }

    #[tokio::test]
    async fn get_protected_route_with_missing_header() {
        let server = get_test_server(get_test_app_state());

        let response = server.get("/protected").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response.assert_json(&serde_json::json!({
            "message": "missing authentication token",
        }));
    }

    #[tokio::test]
    async fn get_protected_route_with_garbage_token() {
        let mut state = get_test_app_state();
        insert_test_user(&mut state);
        let server = get_test_server(state);

        let response = server.get("/protected").authorization_bearer("FOOBAR").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn get_protected_route_with_token_for_unknown_user() {
        let state = get_test_app_state();
        // Signed with the right key, but no such user exists.
        let token = encode_jwt(UserID::new(999), &state.jwt_keys.encoding).unwrap();
        let server = get_test_server(state);

        let response = server.get("/protected").authorization_bearer(token).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
