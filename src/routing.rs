//! Application router configuration with protected and unprotected route
//! definitions.

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};

use crate::{
    auth::{auth_guard, log_in_endpoint, register_endpoint},
    endpoints,
    entry::{
        create_entry_endpoint, delete_entry_endpoint, get_entries_by_date_endpoint,
        get_entries_endpoint, update_entry_endpoint,
    },
    report::{
        chart_endpoint, export_csv_endpoint, export_pdf_endpoint, export_pdf_monthly_endpoint,
        monthly_chart_endpoint, monthly_total_endpoint, summary_endpoint, yearly_chart_endpoint,
        yearly_summary_endpoint,
    },
    state::AppState,
    stores::{LedgerStore, UserStore},
};

/// Return a router with all the app's routes.
pub fn build_router<U, L>(state: AppState<U, L>) -> Router
where
    U: UserStore + Clone + Send + Sync + 'static,
    L: LedgerStore + Clone + Send + Sync + 'static,
{
    let unprotected_routes = Router::new()
        .route(endpoints::ROOT, get(get_coffee))
        .route(endpoints::REGISTER, post(register_endpoint::<U>))
        .route(endpoints::LOG_IN, post(log_in_endpoint::<U>));

    let protected_routes = Router::new()
        .route(endpoints::CREATE_ENTRY, post(create_entry_endpoint::<L>))
        .route(
            endpoints::ENTRY,
            put(update_entry_endpoint::<L>).delete(delete_entry_endpoint::<L>),
        )
        .route(endpoints::ENTRIES, get(get_entries_endpoint::<L>))
        .route(
            endpoints::ENTRIES_BY_DATE,
            get(get_entries_by_date_endpoint::<L>),
        )
        .route(endpoints::MONTHLY_TOTAL, get(monthly_total_endpoint::<L>))
        .route(endpoints::MONTHLY_CHART, get(monthly_chart_endpoint::<L>))
        .route(endpoints::YEARLY_SUMMARY, get(yearly_summary_endpoint::<L>))
        .route(endpoints::YEARLY_CHART, get(yearly_chart_endpoint::<L>))
        .route(endpoints::SUMMARY, get(summary_endpoint::<L>))
        .route(endpoints::CHART, get(chart_endpoint::<L>))
        .route(endpoints::EXPORT_CSV, get(export_csv_endpoint::<L>))
        .route(endpoints::EXPORT_PDF, get(export_pdf_endpoint::<L>))
        .route(
            endpoints::EXPORT_PDF_MONTHLY,
            get(export_pdf_monthly_endpoint::<L>),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_guard::<U>,
        ));

    protected_routes.merge(unprotected_routes).with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, "I'm a teapot").into_response()
}
