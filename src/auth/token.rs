//! Creation and validation of the JSON Web Tokens used for authentication.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{models::UserID, Error};

/// How long a token stays valid after it is issued.
pub const TOKEN_DURATION_HOURS: i64 = 24;

/// The contents of a JSON Web Token.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The ID of the user the token was issued to.
    pub sub: i64,
    /// The time the token was issued.
    pub iat: usize,
    /// The expiry time of the token.
    pub exp: usize,
}

/// Sign a new token for `user_id`.
///
/// # Errors
/// Returns [Error::TokenCreation] if the token could not be signed.
pub fn encode_jwt(user_id: UserID, encoding_key: &EncodingKey) -> Result<String, Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.as_i64(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(TOKEN_DURATION_HOURS)).timestamp() as usize,
    };

    encode(&Header::default(), &claims, encoding_key).map_err(|error| {
        tracing::error!("could not sign auth token: {}", error);
        Error::TokenCreation
    })
}

/// Validate `token` and return its claims.
///
/// # Errors
/// Returns [Error::InvalidToken] if the token is malformed, has a bad
/// signature, or has expired.
pub fn decode_jwt(token: &str, decoding_key: &DecodingKey) -> Result<Claims, Error> {
    decode::<Claims>(token, decoding_key, &Validation::default())
        .map(|token_data| token_data.claims)
        .map_err(|_| Error::InvalidToken)
}
