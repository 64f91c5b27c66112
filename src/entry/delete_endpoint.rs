//! The endpoint for deleting a ledger entry.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension,
};

use crate::{
    models::{DatabaseID, UserID},
    state::LedgerState,
    stores::LedgerStore,
    Error,
};

/// A route handler for deleting the entry matching both the given ID and the
/// verified user.
///
/// # Errors
///
/// This function will return an [Error::DeleteMissingEntry] if the entry does
/// not exist or belongs to another user.
pub async fn delete_entry_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(entry_id): Path<DatabaseID>,
) -> Result<impl IntoResponse, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let mut ledger_store = state.ledger_store;

    ledger_store.delete(user_id, entry_id)?;

    Ok("Expense deleted")
}
