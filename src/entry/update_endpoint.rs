//! The endpoint for updating an existing ledger entry.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    models::{DatabaseID, EntryKind, UserID},
    state::LedgerState,
    stores::{EntryUpdate, LedgerStore},
    Error,
};

/// The fields a client submits to update an entry.
///
/// The entry's ID and owner cannot be changed.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryForm {
    /// The new amount.
    pub amount: Decimal,
    /// The new category label.
    pub category: String,
    /// The new kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A route handler for updating the entry matching both the given ID and the
/// verified user.
///
/// # Errors
///
/// This function will return an [Error::UpdateMissingEntry] if the entry does
/// not exist or belongs to another user.
pub async fn update_entry_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(entry_id): Path<DatabaseID>,
    Json(form): Json<UpdateEntryForm>,
) -> Result<impl IntoResponse, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let mut ledger_store = state.ledger_store;

    ledger_store.update(
        user_id,
        entry_id,
        EntryUpdate {
            amount: form.amount,
            category: form.category,
            kind: form.kind,
        },
    )?;

    Ok("Expense updated")
}
