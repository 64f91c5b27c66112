//! Defines the store traits for users and ledger entries.
//!
//! Stores are injected into [AppState](crate::AppState) so that route
//! handlers never touch a global connection and tests can substitute their
//! own implementations.

pub mod sqlite;

pub use sqlite::{create_app_state, SQLAppState, SQLiteLedgerStore, SQLiteUserStore};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    models::{
        CategoryTotal, DatabaseID, EntryKind, LedgerEntry, LedgerSummary, PasswordHash, Period,
        User, UserID,
    },
    Error,
};

/// Handles the creation and retrieval of users.
pub trait UserStore {
    /// Create a new user in the store.
    fn create(&mut self, email: String, password_hash: PasswordHash) -> Result<User, Error>;

    /// Retrieve a user from the store by their ID.
    fn get_by_id(&self, id: UserID) -> Result<User, Error>;

    /// Retrieve a user from the store by their email address.
    fn get_by_email(&self, email: &str) -> Result<User, Error>;
}

/// The fields of a new ledger entry before it has been assigned an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    /// The user that will own the entry.
    pub user_id: UserID,
    /// The amount of money received or spent.
    pub amount: Decimal,
    /// A free-text label grouping related entries.
    pub category: String,
    /// Whether the entry is income or an expense.
    pub kind: EntryKind,
    /// The calendar date the entry applies to.
    pub date: NaiveDate,
}

/// The fields of a ledger entry that may be changed after creation.
///
/// The entry's ID and owner are immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryUpdate {
    /// The new amount.
    pub amount: Decimal,
    /// The new category label.
    pub category: String,
    /// The new kind.
    pub kind: EntryKind,
}

/// Handles the creation, retrieval and aggregation of ledger entries.
///
/// Every operation is scoped to the owning user: implementations must never
/// return or modify an entry whose `user_id` differs from the one given.
pub trait LedgerStore {
    /// Create a new entry in the store.
    fn create(&mut self, entry: NewEntry) -> Result<LedgerEntry, Error>;

    /// Retrieve the user's entries within `period`.
    ///
    /// [Period::All] retrieves every entry the user owns.
    fn get_for_period(&self, user_id: UserID, period: Period) -> Result<Vec<LedgerEntry>, Error>;

    /// Retrieve the user's entries dated exactly `date`.
    fn get_by_date(&self, user_id: UserID, date: NaiveDate) -> Result<Vec<LedgerEntry>, Error>;

    /// Update the amount, category and kind of the entry matching both
    /// `entry_id` and `user_id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingEntry] if no such entry exists, including
    /// when the entry exists but belongs to another user.
    fn update(
        &mut self,
        user_id: UserID,
        entry_id: DatabaseID,
        update: EntryUpdate,
    ) -> Result<(), Error>;

    /// Delete the entry matching both `entry_id` and `user_id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingEntry] if no such entry exists, including
    /// when the entry exists but belongs to another user.
    fn delete(&mut self, user_id: UserID, entry_id: DatabaseID) -> Result<(), Error>;

    /// Sum the user's expense amounts within `period`.
    ///
    /// Returns zero, not an absent value, when no entries match.
    fn expense_total(&self, user_id: UserID, period: Period) -> Result<Decimal, Error>;

    /// Sum the user's expense amounts within `period`, grouped by category.
    fn expense_totals_by_category(
        &self,
        user_id: UserID,
        period: Period,
    ) -> Result<Vec<CategoryTotal>, Error>;

    /// Sum the user's income and expense amounts within `period`.
    fn summary(&self, user_id: UserID, period: Period) -> Result<LedgerSummary, Error>;
}
