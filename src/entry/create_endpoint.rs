//! The endpoint for recording a new ledger entry.

use axum::{extract::State, response::IntoResponse, Extension, Json};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    models::{EntryKind, UserID},
    state::LedgerState,
    stores::{LedgerStore, NewEntry},
    Error,
};

/// The fields a client submits to record an entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntryForm {
    /// The amount of money received or spent.
    pub amount: Decimal,
    /// A free-text label grouping related entries.
    pub category: String,
    /// Whether the entry is income or an expense.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// The calendar date the entry applies to.
    pub date: NaiveDate,
}

/// A route handler for recording a new entry owned by the verified user.
///
/// # Errors
///
/// This function will return an [Error::SqlError] if the entry could not be
/// stored.
pub async fn create_entry_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Json(form): Json<CreateEntryForm>,
) -> Result<impl IntoResponse, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let mut ledger_store = state.ledger_store;

    ledger_store.create(NewEntry {
        user_id,
        amount: form.amount,
        category: form.category,
        kind: form.kind,
        date: form.date,
    })?;

    Ok("Expense added")
}
