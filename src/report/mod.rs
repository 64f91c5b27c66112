//! The endpoints for aggregated totals, chart data, summaries and report
//! exports.

mod chart_endpoint;
mod csv;
mod export_endpoint;
mod pdf;
mod summary_endpoint;
mod total_endpoint;

pub use chart_endpoint::{chart_endpoint, monthly_chart_endpoint, yearly_chart_endpoint};
pub use csv::entries_to_csv;
pub use export_endpoint::{
    export_csv_endpoint, export_pdf_endpoint, export_pdf_monthly_endpoint,
};
pub use pdf::render_report;
pub use summary_endpoint::{summary_endpoint, yearly_summary_endpoint};
pub use total_endpoint::{monthly_total_endpoint, TotalResponse};
