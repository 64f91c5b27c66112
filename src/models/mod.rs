//! The domain models for users, ledger entries and reporting periods.

mod entry;
mod password;
mod period;
mod user;

pub use entry::{CategoryTotal, EntryKind, LedgerEntry, LedgerSummary, ParseEntryKindError};
pub use password::PasswordHash;
pub use period::{ParsePeriodError, Period, ReportMonth, ReportYear};
pub use user::{User, UserID};

/// Alias for the integer type used for database row IDs.
pub type DatabaseID = i64;
