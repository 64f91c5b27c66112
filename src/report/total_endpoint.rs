//! The endpoint for a month's total expenses.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    models::{Period, ReportMonth, UserID},
    state::LedgerState,
    stores::LedgerStore,
    Error,
};

/// The response carrying a single summed amount.
#[derive(Debug, Serialize, Deserialize)]
pub struct TotalResponse {
    /// The summed amount, zero when no entries matched.
    pub total: Decimal,
}

/// A route handler for the total expense amount in one month (`YYYY-MM`).
///
/// # Errors
///
/// This function will return an [Error::InvalidPeriod] if `month` cannot be
/// parsed.
pub async fn monthly_total_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(month): Path<String>,
) -> Result<Json<TotalResponse>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let month: ReportMonth = month.parse()?;

    let total = state
        .ledger_store
        .expense_total(user_id, Period::Month(month))?;

    Ok(Json(TotalResponse { total }))
}
