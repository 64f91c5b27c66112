//! Implements a SQLite backed user store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    db::{CreateTable, MapRow},
    models::{PasswordHash, User, UserID},
    stores::UserStore,
    Error,
};

/// Stores users in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SQLiteUserStore {
    /// Create a new user in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateEmail] if `email` is already registered,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, email: String, password_hash: PasswordHash) -> Result<User, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO user (email, password) VALUES (?1, ?2)",
            (&email, password_hash.as_ref()),
        )?;

        let id = UserID::new(connection.last_insert_rowid());

        Ok(User::new(id, email, password_hash))
    }

    /// Retrieve a user in the database by their `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid user,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get_by_id(&self, id: UserID) -> Result<User, Error> {
        let user = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT id, email, password FROM user WHERE id = :id")?
            .query_row(&[(":id", &id.as_i64())], Self::map_row)?;

        Ok(user)
    }

    /// Retrieve a user in the database by their `email` address.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if no user is registered with `email`,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get_by_email(&self, email: &str) -> Result<User, Error> {
        let user = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT id, email, password FROM user WHERE email = :email")?
            .query_row(&[(":email", &email)], Self::map_row)?;

        Ok(user)
    }
}

impl CreateTable for SQLiteUserStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS user (
                    id INTEGER PRIMARY KEY,
                    email TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteUserStore {
    type ReturnType = User;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let raw_id = row.get(offset)?;
        let email = row.get(offset + 1)?;
        let raw_password_hash = row.get(offset + 2)?;

        Ok(User::new(
            UserID::new(raw_id),
            email,
            PasswordHash::new_unchecked(raw_password_hash),
        ))
    }
}

#[cfg(test)]
mod sqlite_user_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        db::initialize,
        models::{PasswordHash, UserID},
        stores::UserStore,
        Error,
    };

    use super::SQLiteUserStore;

    fn get_store() -> SQLiteUserStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteUserStore::new(Arc::new(Mutex::new(connection)))
    }

    fn test_hash() -> PasswordHash {
        PasswordHash::new_unchecked(
            "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm".to_owned(),
        )
    }

    #[test]
    fn create_user_succeeds() {
        let mut store = get_store();

        let user = store
            .create("hello@world.com".to_owned(), test_hash())
            .unwrap();

        assert!(user.id().as_i64() > 0);
        assert_eq!(user.email(), "hello@world.com");
        assert_eq!(user.password_hash(), &test_hash());
    }

    #[test]
    fn create_user_fails_on_duplicate_email() {
        let mut store = get_store();

        store
            .create("hello@world.com".to_owned(), test_hash())
            .unwrap();

        let duplicate = store.create("hello@world.com".to_owned(), test_hash());

        assert_eq!(duplicate, Err(Error::DuplicateEmail));
    }

    #[test]
    fn get_user_by_id_succeeds() {
        let mut store = get_store();
        let inserted_user = store
            .create("hello@world.com".to_owned(), test_hash())
            .unwrap();

        let selected_user = store.get_by_id(inserted_user.id()).unwrap();

        assert_eq!(selected_user, inserted_user);
    }

    #[test]
    fn get_user_fails_on_invalid_id() {
        let store = get_store();

        let maybe_user = store.get_by_id(UserID::new(42));

        assert_eq!(maybe_user, Err(Error::NotFound));
    }

    #[test]
    fn get_user_by_email_succeeds() {
        let mut store = get_store();
        let inserted_user = store
            .create("hello@world.com".to_owned(), test_hash())
            .unwrap();

        let selected_user = store.get_by_email("hello@world.com").unwrap();

        assert_eq!(selected_user, inserted_user);
    }

    #[test]
    fn get_user_fails_on_unknown_email() {
        let store = get_store();

        let maybe_user = store.get_by_email("nobody@nowhere.com");

        assert_eq!(maybe_user, Err(Error::NotFound));
    }
}
