//! The endpoints for per-category expense totals used as chart data.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    models::{CategoryTotal, Period, ReportMonth, ReportYear, UserID},
    state::LedgerState,
    stores::LedgerStore,
    Error,
};

/// A route handler for per-category expense totals in one month (`YYYY-MM`).
///
/// # Errors
///
/// This function will return an [Error::InvalidPeriod] if `month` cannot be
/// parsed.
pub async fn monthly_chart_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(month): Path<String>,
) -> Result<Json<Vec<CategoryTotal>>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let month: ReportMonth = month.parse()?;

    state
        .ledger_store
        .expense_totals_by_category(user_id, Period::Month(month))
        .map(Json)
}

/// A route handler for per-category expense totals in one year (`YYYY`).
///
/// # Errors
///
/// This function will return an [Error::InvalidPeriod] if `year` cannot be
/// parsed.
pub async fn yearly_chart_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(year): Path<String>,
) -> Result<Json<Vec<CategoryTotal>>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let year: ReportYear = year.parse()?;

    state
        .ledger_store
        .expense_totals_by_category(user_id, Period::Year(year))
        .map(Json)
}

/// A route handler for per-category expense totals over all time.
///
/// # Errors
///
/// This function will return an [Error::SqlError] if there is a SQL error.
pub async fn chart_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<Vec<CategoryTotal>>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    state
        .ledger_store
        .expense_totals_by_category(user_id, Period::All)
        .map(Json)
}
