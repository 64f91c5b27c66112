//! Defines the app level error type and its conversion to JSON HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::ParsePeriodError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not carry an authentication token.
    #[error("missing authentication token")]
    MissingToken,

    /// The authentication token was malformed, expired, had an invalid
    /// signature, or did not resolve to a registered user.
    #[error("invalid authentication token")]
    InvalidToken,

    /// The email and password did not match a registered user.
    ///
    /// Unknown emails and wrong passwords both map to this variant so the
    /// response cannot be used to probe which emails are registered.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A required request field was empty or absent.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// A month or year path parameter could not be parsed.
    #[error("{0} is not a valid calendar period")]
    InvalidPeriod(String),

    /// The email used to register is already in use.
    #[error("the email is already registered")]
    DuplicateEmail,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update an entry that does not exist or belongs to another user.
    #[error("tried to update an entry that is not in the ledger")]
    UpdateMissingEntry,

    /// Tried to delete an entry that does not exist or belongs to another user.
    #[error("tried to delete an entry that is not in the ledger")]
    DeleteMissingEntry,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server,
    /// never shown to the client.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An error occurred while signing an authentication token.
    #[error("could not create authentication token")]
    TokenCreation,

    /// An error occurred while serializing entries as CSV.
    #[error("could not serialize entries as CSV: {0}")]
    CsvSerializationError(String),

    /// An error occurred while rendering the PDF report.
    #[error("could not render PDF report: {0}")]
    PdfRenderError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<ParsePeriodError> for Error {
    fn from(value: ParsePeriodError) -> Self {
        Error::InvalidPeriod(value.0)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MissingToken | Error::InvalidToken | Error::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Error::MissingField(_) | Error::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            Error::DuplicateEmail => StatusCode::CONFLICT,
            Error::NotFound | Error::UpdateMissingEntry | Error::DeleteMissingEntry => {
                StatusCode::NOT_FOUND
            }
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
