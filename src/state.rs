//! Implements the structs that hold the state of the REST server.

use axum::extract::FromRef;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::stores::{LedgerStore, UserStore};

/// The keys used to sign and verify authentication tokens.
#[derive(Clone)]
pub struct JwtKeys {
    /// The key used to sign new tokens.
    pub encoding: EncodingKey,
    /// The key used to verify presented tokens.
    pub decoding: DecodingKey,
}

impl JwtKeys {
    /// Derive the signing and verification keys from a shared `secret`.
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }
}

/// The state of the REST server.
///
/// The stores are constructor injected so handlers never reach for a global
/// connection and tests can substitute their own implementations.
#[derive(Clone)]
pub struct AppState<U, L>
where
    U: UserStore + Clone + Send + Sync,
    L: LedgerStore + Clone + Send + Sync,
{
    /// The keys used to sign and verify authentication tokens.
    pub jwt_keys: JwtKeys,
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
    /// The store for managing [ledger entries](crate::models::LedgerEntry).
    pub ledger_store: L,
}

impl<U, L> AppState<U, L>
where
    U: UserStore + Clone + Send + Sync,
    L: LedgerStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(jwt_secret: &str, user_store: U, ledger_store: L) -> Self {
        Self {
            jwt_keys: JwtKeys::from_secret(jwt_secret),
            user_store,
            ledger_store,
        }
    }
}

/// The state needed for registration, login and the auth middleware.
#[derive(Clone)]
pub struct AuthState<U>
where
    U: UserStore + Clone + Send + Sync,
{
    /// The keys used to sign and verify authentication tokens.
    pub jwt_keys: JwtKeys,
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
}

impl<U, L> FromRef<AppState<U, L>> for AuthState<U>
where
    U: UserStore + Clone + Send + Sync,
    L: LedgerStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<U, L>) -> Self {
        Self {
            jwt_keys: state.jwt_keys.clone(),
            user_store: state.user_store.clone(),
        }
    }
}

/// The state needed to read and modify ledger entries.
#[derive(Clone)]
pub struct LedgerState<L>
where
    L: LedgerStore + Clone + Send + Sync,
{
    /// The store for managing [ledger entries](crate::models::LedgerEntry).
    pub ledger_store: L,
}

impl<U, L> FromRef<AppState<U, L>> for LedgerState<L>
where
    U: UserStore + Clone + Send + Sync,
    L: LedgerStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<U, L>) -> Self {
        Self {
            ledger_store: state.ledger_store.clone(),
        }
    }
}
