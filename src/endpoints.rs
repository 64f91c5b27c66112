//! The API endpoint URIs.

/// The root route, which serves no data.
pub const ROOT: &str = "/";
/// The route for registering a new user.
pub const REGISTER: &str = "/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/login";

/// The route to record a new entry.
pub const CREATE_ENTRY: &str = "/expense";
/// The route to update or delete a single entry.
pub const ENTRY: &str = "/expense/{entry_id}";
/// The route to list all of a user's entries.
pub const ENTRIES: &str = "/expenses";
/// The route to list a user's entries on one calendar date.
pub const ENTRIES_BY_DATE: &str = "/expenses/by-date/{date}";

/// The route for the total expense amount in one month.
pub const MONTHLY_TOTAL: &str = "/monthly-total/{month}";
/// The route for per-category expense totals in one month.
pub const MONTHLY_CHART: &str = "/chart-data/monthly/{month}";
/// The route for income/expense/balance totals in one year.
pub const YEARLY_SUMMARY: &str = "/yearly-summary/{year}";
/// The route for per-category expense totals in one year.
pub const YEARLY_CHART: &str = "/chart-data/yearly/{year}";
/// The route for income/expense/balance totals over all time.
pub const SUMMARY: &str = "/summary";
/// The route for per-category expense totals over all time.
pub const CHART: &str = "/chart-data";

/// The route for downloading entries as CSV.
pub const EXPORT_CSV: &str = "/export/csv";
/// The route for downloading entries as a PDF report.
pub const EXPORT_PDF: &str = "/export/pdf";
/// The route for downloading one month's entries as a PDF report.
pub const EXPORT_PDF_MONTHLY: &str = "/export/pdf/monthly/{month}";
