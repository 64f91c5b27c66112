//! The endpoints for listing a user's ledger entries.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::NaiveDate;

use crate::{
    models::{LedgerEntry, Period, UserID},
    state::LedgerState,
    stores::LedgerStore,
    Error,
};

/// A route handler for listing all of the verified user's entries.
///
/// # Errors
///
/// This function will return an [Error::SqlError] if there is a SQL error.
pub async fn get_entries_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<Vec<LedgerEntry>>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    state
        .ledger_store
        .get_for_period(user_id, Period::All)
        .map(Json)
}

/// A route handler for listing the verified user's entries on one calendar
/// date (`YYYY-MM-DD`).
///
/// # Errors
///
/// This function will return an [Error::SqlError] if there is a SQL error.
pub async fn get_entries_by_date_endpoint<L>(
    State(state): State<LedgerState<L>>,
    Extension(user_id): Extension<UserID>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Vec<LedgerEntry>>, Error>
where
    L: LedgerStore + Clone + Send + Sync,
{
    state.ledger_store.get_by_date(user_id, date).map(Json)
}

#[cfg(test)]
mod list_entries_tests {
    use serde_json::{json, Value};

    use crate::test_utils::{add_entry, get_test_server_with_user, register_and_log_in};

    #[tokio::test]
    async fn get_entries_returns_all_entries_for_user() {
        let (server, _, token) = get_test_server_with_user().await;

        add_entry(&server, &token, "50.00", "food", "expense", "2024-03-05").await;
        add_entry(&server, &token, "1000.00", "salary", "income", "2024-03-01").await;

        let entries = server
            .get("/expenses")
            .authorization_bearer(&token)
            .await
            .json::<Value>();

        assert_eq!(entries.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_entries_by_date_filters_to_the_given_day() {
        let (server, _, token) = get_test_server_with_user().await;

        add_entry(&server, &token, "50.00", "food", "expense", "2024-03-05").await;
        add_entry(&server, &token, "20.00", "food", "expense", "2024-03-06").await;

        let entries = server
            .get("/expenses/by-date/2024-03-05")
            .authorization_bearer(&token)
            .await
            .json::<Value>();

        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["date"], json!("2024-03-05"));
    }

    #[tokio::test]
    async fn entries_of_another_user_are_not_visible() {
        let (server, _, owner_token) = get_test_server_with_user().await;
        add_entry(
            &server,
            &owner_token,
            "50.00",
            "food",
            "expense",
            "2024-03-05",
        )
        .await;

        let (_, other_token) = register_and_log_in(&server, "other@test.com").await;

        let entries = server
            .get("/expenses")
            .authorization_bearer(&other_token)
            .await
            .json::<Value>();

        assert_eq!(entries, json!([]));

        let entries_by_date = server
            .get("/expenses/by-date/2024-03-05")
            .authorization_bearer(&other_token)
            .await
            .json::<Value>();

        assert_eq!(entries_by_date, json!([]));
    }
}
