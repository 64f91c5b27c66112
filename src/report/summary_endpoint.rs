//! The endpoints for income/expense/balance summaries.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    models::{LedgerSummary, Period, ReportYear, UserID},
    state::LedgerState,
    stores::LedgerStore,
    Error,
};

/// A route handler for the income, expense and balance totals in one year
/// (`YYYY`).
///
/// # Errors
///
/// This function will return an [Error::InvalidPeriod] if `year` cannot be
/// parsed.
pub async fn yearly_summary_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(year): Path<String>,
) -> Result<Json<LedgerSummary>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let year: ReportYear = year.parse()?;

    state
        .ledger_store
        .summary(user_id, Period::Year(year))
        .map(Json)
}

/// A route handler for the income, expense and balance totals over all time.
///
/// # Errors
///
/// This function will return an [Error::SqlError] if there is a SQL error.
pub async fn summary_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<LedgerSummary>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    state.ledger_store.summary(user_id, Period::All).map(Json)
}
