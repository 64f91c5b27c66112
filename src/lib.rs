//! Pocketledger is a personal finance tracker backend.
//!
//! This library provides a REST API for registering users, recording income
//! and expense entries, and retrieving aggregated summaries, chart data and
//! CSV/PDF reports. Every entry is scoped to the user that created it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod auth;
pub mod db;
pub mod endpoints;
pub mod entry;
mod error;
pub mod models;
pub mod report;
pub mod routing;
pub mod state;
pub mod stores;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::Error;
pub use routing::build_router;
pub use state::{AppState, AuthState, JwtKeys, LedgerState};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
