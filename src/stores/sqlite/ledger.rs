//! Implements a SQLite backed ledger entry store.

use std::{
    collections::BTreeMap,
    str::FromStr,
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use rusqlite::{
    params_from_iter,
    types::{Type, Value},
    Connection, Row,
};
use rust_decimal::Decimal;

use crate::{
    db::{CreateTable, MapRow},
    models::{
        CategoryTotal, DatabaseID, EntryKind, LedgerEntry, LedgerSummary, Period, UserID,
    },
    stores::{EntryUpdate, LedgerStore, NewEntry},
    Error,
};

/// Stores ledger entries in a SQLite database.
///
/// Amounts are stored as decimal strings and summed as [Decimal] values after
/// retrieval, so aggregation never passes through floating point.
///
/// Note that because an entry depends on the [User](crate::models::User)
/// model, the user table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteLedgerStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteLedgerStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

/// The SQL filter and bound value selecting rows within `period`.
///
/// Assumes the user ID is bound as `?1`.
fn period_clause(period: Period) -> (&'static str, Option<String>) {
    match period {
        Period::All => ("", None),
        Period::Month(month) => (" AND strftime('%Y-%m', date) = ?2", Some(month.to_string())),
        Period::Year(year) => (" AND strftime('%Y', date) = ?2", Some(year.to_string())),
    }
}

fn parse_amount(raw: String, column: usize) -> Result<Decimal, rusqlite::Error> {
    Decimal::from_str(&raw).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(error))
    })
}

impl LedgerStore for SQLiteLedgerStore {
    /// Create a new entry in the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn create(&mut self, entry: NewEntry) -> Result<LedgerEntry, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO entry (user_id, amount, category, kind, date) VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                entry.user_id.as_i64(),
                entry.amount.to_string(),
                &entry.category,
                entry.kind.as_str(),
                entry.date,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(LedgerEntry {
            id,
            user_id: entry.user_id,
            amount: entry.amount,
            category: entry.category,
            kind: entry.kind,
            date: entry.date,
        })
    }

    /// Retrieve the user's entries within `period`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn get_for_period(&self, user_id: UserID, period: Period) -> Result<Vec<LedgerEntry>, Error> {
        let (clause, bucket) = period_clause(period);
        let query =
            format!("SELECT id, user_id, amount, category, kind, date FROM entry WHERE user_id = ?1{clause}");

        let mut parameters = vec![Value::Integer(user_id.as_i64())];
        if let Some(bucket) = bucket {
            parameters.push(Value::Text(bucket));
        }

        self.connection
            .lock()
            .unwrap()
            .prepare(&query)?
            .query_map(params_from_iter(parameters.iter()), Self::map_row)?
            .map(|maybe_entry| maybe_entry.map_err(Error::SqlError))
            .collect()
    }

    /// Retrieve the user's entries dated exactly `date`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn get_by_date(&self, user_id: UserID, date: NaiveDate) -> Result<Vec<LedgerEntry>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, user_id, amount, category, kind, date FROM entry
                 WHERE user_id = ?1 AND date = ?2",
            )?
            .query_map((user_id.as_i64(), date), Self::map_row)?
            .map(|maybe_entry| maybe_entry.map_err(Error::SqlError))
            .collect()
    }

    /// Update the entry matching both `entry_id` and `user_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingEntry] if no row matches both IDs,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(
        &mut self,
        user_id: UserID,
        entry_id: DatabaseID,
        update: EntryUpdate,
    ) -> Result<(), Error> {
        let rows_updated = self.connection.lock().unwrap().execute(
            "UPDATE entry SET amount = ?1, category = ?2, kind = ?3 WHERE id = ?4 AND user_id = ?5",
            (
                update.amount.to_string(),
                &update.category,
                update.kind.as_str(),
                entry_id,
                user_id.as_i64(),
            ),
        )?;

        if rows_updated == 0 {
            return Err(Error::UpdateMissingEntry);
        }

        Ok(())
    }

    /// Delete the entry matching both `entry_id` and `user_id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingEntry] if no row matches both IDs,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, user_id: UserID, entry_id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self.connection.lock().unwrap().execute(
            "DELETE FROM entry WHERE id = ?1 AND user_id = ?2",
            (entry_id, user_id.as_i64()),
        )?;

        if rows_deleted == 0 {
            return Err(Error::DeleteMissingEntry);
        }

        Ok(())
    }

    /// Sum the user's expense amounts within `period`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn expense_total(&self, user_id: UserID, period: Period) -> Result<Decimal, Error> {
        let (clause, bucket) = period_clause(period);
        let query =
            format!("SELECT amount FROM entry WHERE user_id = ?1 AND kind = 'expense'{clause}");

        let mut parameters = vec![Value::Integer(user_id.as_i64())];
        if let Some(bucket) = bucket {
            parameters.push(Value::Text(bucket));
        }

        let total = self
            .connection
            .lock()
            .unwrap()
            .prepare(&query)?
            .query_map(params_from_iter(parameters.iter()), |row| {
                parse_amount(row.get(0)?, 0)
            })?
            .try_fold(Decimal::ZERO, |total, amount| {
                amount.map(|amount| total + amount)
            })?;

        Ok(total)
    }

    /// Sum the user's expense amounts within `period`, grouped by category.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn expense_totals_by_category(
        &self,
        user_id: UserID,
        period: Period,
    ) -> Result<Vec<CategoryTotal>, Error> {
        let (clause, bucket) = period_clause(period);
        let query = format!(
            "SELECT category, amount FROM entry WHERE user_id = ?1 AND kind = 'expense'{clause}"
        );

        let mut parameters = vec![Value::Integer(user_id.as_i64())];
        if let Some(bucket) = bucket {
            parameters.push(Value::Text(bucket));
        }

        let connection = self.connection.lock().unwrap();
        let mut statement = connection.prepare(&query)?;
        let rows = statement.query_map(params_from_iter(parameters.iter()), |row| {
            let category: String = row.get(0)?;
            let amount = parse_amount(row.get(1)?, 1)?;

            Ok((category, amount))
        })?;

        // BTreeMap keeps the categories in a stable alphabetical order.
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();

        for row in rows {
            let (category, amount) = row?;
            *totals.entry(category).or_insert(Decimal::ZERO) += amount;
        }

        Ok(totals
            .into_iter()
            .map(|(category, total)| CategoryTotal { category, total })
            .collect())
    }

    /// Sum the user's income and expense amounts within `period`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    fn summary(&self, user_id: UserID, period: Period) -> Result<LedgerSummary, Error> {
        let (clause, bucket) = period_clause(period);
        let query = format!("SELECT kind, amount FROM entry WHERE user_id = ?1{clause}");

        let mut parameters = vec![Value::Integer(user_id.as_i64())];
        if let Some(bucket) = bucket {
            parameters.push(Value::Text(bucket));
        }

        let connection = self.connection.lock().unwrap();
        let mut statement = connection.prepare(&query)?;
        let rows = statement.query_map(params_from_iter(parameters.iter()), |row| {
            let raw_kind: String = row.get(0)?;
            let kind = raw_kind.parse::<EntryKind>().map_err(|error| {
                rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(error))
            })?;
            let amount = parse_amount(row.get(1)?, 1)?;

            Ok((kind, amount))
        })?;

        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;

        for row in rows {
            match row? {
                (EntryKind::Income, amount) => income += amount,
                (EntryKind::Expense, amount) => expense += amount,
            }
        }

        Ok(LedgerSummary::new(income, expense))
    }
}

impl CreateTable for SQLiteLedgerStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS entry (
                    id INTEGER PRIMARY KEY,
                    user_id INTEGER NOT NULL,
                    amount TEXT NOT NULL,
                    category TEXT NOT NULL,
                    kind TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
                    date TEXT NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteLedgerStore {
    type ReturnType = LedgerEntry;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let raw_user_id = row.get(offset + 1)?;
        let amount = parse_amount(row.get(offset + 2)?, offset + 2)?;
        let category = row.get(offset + 3)?;
        let raw_kind: String = row.get(offset + 4)?;
        let kind = raw_kind.parse().map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(offset + 4, Type::Text, Box::new(error))
        })?;
        let date = row.get(offset + 5)?;

        Ok(LedgerEntry {
            id,
            user_id: UserID::new(raw_user_id),
            amount,
            category,
            kind,
            date,
        })
    }
}
