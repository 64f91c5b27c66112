//! The endpoints for downloading ledger entries as CSV or PDF.

use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Extension,
};

use crate::{
    models::{Period, ReportMonth, UserID},
    report::{entries_to_csv, render_report},
    state::LedgerState,
    stores::LedgerStore,
    Error,
};

/// A route handler for downloading all of the verified user's entries as a
/// CSV attachment.
///
/// # Errors
///
/// This function will return an [Error::CsvSerializationError] if the
/// entries could not be serialized.
pub async fn export_csv_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
) -> Result<Response, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let entries = state.ledger_store.get_for_period(user_id, Period::All)?;
    let csv = entries_to_csv(&entries)?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// A route handler for downloading all of the verified user's entries as a
/// PDF report.
///
/// # Errors
///
/// This function will return an [Error::PdfRenderError] if the report could
/// not be rendered.
pub async fn export_pdf_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
) -> Result<Response, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    render_pdf_response(&state.ledger_store, user_id, Period::All, "Expense Report")
}

/// A route handler for downloading one month's entries (`YYYY-MM`) as a PDF
/// report.
///
/// # Errors
///
/// This function will return an [Error::InvalidPeriod] if `month` cannot be
/// parsed.
pub async fn export_pdf_monthly_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(month): Path<String>,
) -> Result<Response, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let month: ReportMonth = month.parse()?;

    render_pdf_response(
        &state.ledger_store,
        user_id,
        Period::Month(month),
        &format!("Expense Report {month}"),
    )
}

fn render_pdf_response<L>(
    ledger_store: &L,
    user_id: UserID,
    period: Period,
    title: &str,
) -> Result<Response, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    let entries = ledger_store.get_for_period(user_id, period)?;
    let total_expenses = ledger_store.expense_total(user_id, period)?;
    let pdf = render_report(title, &entries, total_expenses)?;

    Ok(([(CONTENT_TYPE, "application/pdf")], pdf).into_response())
}
