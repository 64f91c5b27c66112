//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

pub mod ledger;
pub mod user;

pub use ledger::SQLiteLedgerStore;
pub use user::SQLiteUserStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{db::initialize, AppState, Error};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteUserStore, SQLiteLedgerStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
pub fn create_app_state(db_connection: Connection, jwt_secret: &str) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let user_store = SQLiteUserStore::new(connection.clone());
    let ledger_store = SQLiteLedgerStore::new(connection);

    Ok(AppState::new(jwt_secret, user_store, ledger_store))
}
