//! The endpoints for creating, listing, updating and deleting ledger entries.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use create_endpoint::{create_entry_endpoint, CreateEntryForm};
pub use delete_endpoint::delete_entry_endpoint;
pub use list_endpoint::{get_entries_by_date_endpoint, get_entries_endpoint};
pub use update_endpoint::{update_entry_endpoint, UpdateEntryForm};
